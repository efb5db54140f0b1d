// File: crates/survival-render-skia/src/lib.rs
// Summary: Headless Skia renderer: rasterizes a ChartRenderer scene on a CPU surface
//          and exports PNG bytes/files or raw RGBA8 buffers.

use anyhow::Result;
use skia_safe as skia;

use survival_core::axis::{Axis, Orient, TICK_SIZE};
use survival_core::types::Rgb;
use survival_core::{ChartRenderer, PathCommand, RenderOptions};

const FONT_SIZE: f32 = 10.0;
const TITLE_SIZE: f32 = 14.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct SkiaRenderer;

impl SkiaRenderer {
    pub fn new() -> Self { Self }

    /// Rasterize `chart` and encode it as PNG.
    pub fn render_to_png_bytes(&self, chart: &ChartRenderer) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(chart)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, chart: &ChartRenderer, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(chart)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }

    /// Rasterize to unpremultiplied RGBA8. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, chart: &ChartRenderer) -> Result<(Vec<u8>, u32, u32, usize)> {
        let opts = chart.options();
        let (w, h) = (opts.width, opts.height);
        let mut surface = self.rasterize(chart)?;
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    fn rasterize(&self, chart: &ChartRenderer) -> Result<skia::Surface> {
        let opts = chart.options();
        let mut surface = skia::surfaces::raster_n32_premul((opts.width as i32, opts.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(color(opts.theme.background));

        let plot = chart.plot_area();
        canvas.save();
        canvas.translate((plot.left as f32, plot.top as f32));

        let (w, h) = (plot.width() as f32, plot.height() as f32);
        canvas.save();
        canvas.translate((0.0, h));
        draw_axis(canvas, chart.x_axis(), opts);
        canvas.restore();
        draw_axis(canvas, chart.y_axis(), opts);

        if opts.draw_labels {
            draw_titles(canvas, opts, w, h);
        }
        draw_paths(canvas, chart);

        canvas.restore();
        Ok(surface)
    }
}

fn color(c: Rgb) -> skia::Color {
    skia::Color::from_rgb(c.r, c.g, c.b)
}

fn stroke_paint(c: Rgb, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color(c));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn text_paint(c: Rgb) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color(c));
    paint.set_anti_alias(true);
    paint
}

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, opts: &RenderOptions) {
    let line = stroke_paint(opts.theme.axis_line, 1.0);
    let ink = text_paint(opts.theme.tick);
    let mut font = skia::Font::default();
    font.set_size(FONT_SIZE);

    let (r0, r1) = (axis.extent.0 as f32, axis.extent.1 as f32);
    let tick = TICK_SIZE as f32;
    match axis.orient {
        Orient::Bottom => {
            canvas.draw_line((r0, 0.0), (r1, 0.0), &line);
            for t in &axis.ticks {
                let x = t.offset as f32;
                canvas.draw_line((x, 0.0), (x, tick), &line);
                if opts.draw_labels {
                    let (tw, _) = font.measure_str(&t.label, Some(&ink));
                    canvas.draw_str(&t.label, (x - tw / 2.0, tick + 3.0 + FONT_SIZE), &font, &ink);
                }
            }
        }
        Orient::Left => {
            canvas.draw_line((0.0, r0), (0.0, r1), &line);
            for t in &axis.ticks {
                let y = t.offset as f32;
                canvas.draw_line((-tick, y), (0.0, y), &line);
                if opts.draw_labels {
                    let (tw, _) = font.measure_str(&t.label, Some(&ink));
                    canvas.draw_str(&t.label, (-(tick + 3.0) - tw, y + FONT_SIZE * 0.32), &font, &ink);
                }
            }
        }
    }
}

fn draw_titles(canvas: &skia::Canvas, opts: &RenderOptions, w: f32, h: f32) {
    let ink = text_paint(opts.theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(TITLE_SIZE);

    let (xw, _) = font.measure_str(&opts.x_label, Some(&ink));
    canvas.draw_str(&opts.x_label, (w / 2.0 - xw / 2.0, h + 40.0), &font, &ink);

    let (yw, _) = font.measure_str(&opts.y_label, Some(&ink));
    canvas.save();
    canvas.rotate(-90.0, None);
    canvas.draw_str(&opts.y_label, (-h / 2.0 - yw / 2.0, -50.0), &font, &ink);
    canvas.restore();
}

fn draw_paths(canvas: &skia::Canvas, chart: &ChartRenderer) {
    let width = chart.options().stroke_width as f32;
    for drawn in chart.paths() {
        let mut path = skia::Path::new();
        for cmd in &drawn.commands {
            match *cmd {
                PathCommand::MoveTo(p) => { path.move_to((p.x as f32, p.y as f32)); }
                PathCommand::LineTo(p) => { path.line_to((p.x as f32, p.y as f32)); }
            }
        }
        canvas.draw_path(&path, &stroke_paint(drawn.color, width));
    }
}
