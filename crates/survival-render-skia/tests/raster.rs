// File: crates/survival-render-skia/tests/raster.rs
// Purpose: Raster smoke tests: PNG output, RGBA buffer shape and a few pixels.

use survival_core::{ChartRenderer, Dataset, Observation, RenderOptions, Theme};
use survival_render_skia::SkiaRenderer;

fn chart(opts: RenderOptions) -> ChartRenderer {
    let data = Dataset::new(vec![
        Observation::new("sex", "M", 0.0, 1.0),
        Observation::new("sex", "M", 10.0, 0.8),
        Observation::new("sex", "F", 0.0, 1.0),
        Observation::new("sex", "F", 15.0, 0.9),
    ])
    .expect("valid dataset");
    let mut chart = ChartRenderer::new(opts);
    chart.render(&data, "sex");
    chart
}

#[test]
fn render_smoke_png() {
    let chart = chart(RenderOptions::default());
    let out = std::path::PathBuf::from("target/test_out/survival_smoke.png");

    SkiaRenderer::new().render_to_png(&chart, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = SkiaRenderer::new().render_to_png_bytes(&chart).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (800, 500));
}

#[test]
fn render_rgba8_buffer() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = SkiaRenderer::new().render_to_rgba8(&chart(opts)).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel sits in the margin: opaque background
    assert_eq!(&px[0..4], &[255u8, 255, 255, 255]);
}

#[test]
fn dark_theme_background() {
    let opts = RenderOptions { theme: Theme::dark(), draw_labels: false, ..RenderOptions::default() };
    let (px, ..) = SkiaRenderer::new().render_to_rgba8(&chart(opts)).expect("rgba render");
    let bg = Theme::dark().background;
    assert_eq!(&px[0..4], &[bg.r, bg.g, bg.b, 255]);
}

#[test]
fn empty_chart_still_rasterizes() {
    let mut chart = ChartRenderer::default();
    chart.render(&Dataset::default(), "sex");
    let bytes = SkiaRenderer::new().render_to_png_bytes(&chart).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
