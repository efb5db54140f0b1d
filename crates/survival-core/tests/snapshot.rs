// File: crates/survival-core/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic two-group chart to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, fails: a missing snapshot must be blessed and committed.

use survival_core::{ChartRenderer, Dataset, Observation, RenderOptions};

fn render_svg() -> String {
    let data = Dataset::new(vec![
        Observation::new("sex", "M", 0.0, 1.0),
        Observation::new("sex", "M", 10.0, 0.8),
        Observation::new("sex", "M", 25.0, 0.55),
        Observation::new("sex", "F", 0.0, 1.0),
        Observation::new("sex", "F", 15.0, 0.9),
        Observation::new("sex", "F", 40.0, 0.6),
    ])
    .expect("valid dataset");
    let mut chart = ChartRenderer::new(RenderOptions::default());
    chart.render(&data, "sex");
    chart.to_svg()
}

#[test]
fn golden_two_group_chart() {
    let svg = render_svg();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("two_groups.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    assert!(
        snap_path.exists(),
        "missing snapshot {}; run with UPDATE_SNAPSHOTS=1 to bless it",
        snap_path.display()
    );
    let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
    assert_eq!(svg, want, "rendered svg differs from golden snapshot: {}", snap_path.display());
}

#[test]
fn golden_paths_carry_expected_geometry() {
    // M drops at day 10 and 25, F at day 15 and 40, on a 0..40 x-domain
    let svg = render_svg();
    assert!(svg.contains(r##"data-key="M" fill="none" stroke="#1f77b4" stroke-width="1.5" d="M0,0L170,0L170,80L425,80L425,180""##));
    assert!(svg.contains(r##"data-key="F" fill="none" stroke="#ff7f0e" stroke-width="1.5" d="M0,0L255,0L255,40L680,40L680,160""##));
}

#[test]
fn render_is_deterministic() {
    assert_eq!(render_svg(), render_svg());
}
