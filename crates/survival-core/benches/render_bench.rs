use survival_core::{ChartRenderer, Dataset, Observation, RenderOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_dataset(groups: usize, points: usize) -> Dataset {
    let mut records = Vec::with_capacity(groups * points * 2);
    for g in 0..groups {
        for i in 0..points {
            let t = i as f64;
            let s = (-(t / points as f64) * (1.0 + g as f64 * 0.1)).exp();
            records.push(Observation::new("arm", format!("arm{g}"), t, s));
            records.push(Observation::new("site", format!("site{}", g % 3), t, s));
        }
    }
    Dataset::new(records).expect("bench data is valid")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    for &n in &[1_000usize, 10_000usize] {
        let data = build_dataset(8, n);
        group.bench_function(format!("switch_{n}"), |b| {
            let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
            let mut chart = ChartRenderer::new(opts);
            b.iter(|| {
                chart.render(&data, "arm");
                chart.render(&data, "site");
                black_box(chart.to_svg());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
