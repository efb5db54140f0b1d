// File: crates/survival-core/src/chart.rs
// Summary: ChartRenderer: filters and groups observations, derives scales, redraws axes
//          and reconciles the keyed set of step-curve paths; serializes the scene to SVG.

use std::collections::HashMap;
use std::path::Path;

use crate::axis::{Axis, Orient, TICK_SIZE};
use crate::dataset::{Dataset, GroupKey};
use crate::geometry::Rect;
use crate::group::{self, Group};
use crate::reconcile::reconcile;
use crate::scale::LinearScale;
use crate::series::{path_data, fmt_coord, PathCommand, SurvivalCurve};
use crate::svg::Element;
use crate::theme::Theme;
use crate::types::{Insets, Rgb, HEIGHT, WIDTH, X_LABEL, Y_LABEL};

/// Fixed vertical domain: survival probability.
pub const Y_DOMAIN: (f64, f64) = (0.0, 1.0);
/// Horizontal domain used when there is nothing to span.
pub const EMPTY_X_DOMAIN: (f64, f64) = (0.0, 1.0);

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
    pub x_label: String,
    pub y_label: String,
    pub stroke_width: f64,
    /// Tick labels and axis titles; off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            stroke_width: 1.5,
            draw_labels: true,
        }
    }
}

/// A drawn curve, keyed by its group.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawnPath {
    pub key: GroupKey,
    /// Assigned when the path is created; never changes afterwards.
    pub color: Rgb,
    pub curve: SurvivalCurve,
    /// Geometry in plot-local pixels.
    pub commands: Vec<PathCommand>,
}

impl DrawnPath {
    /// SVG path data of the current geometry.
    pub fn d(&self) -> String {
        path_data(&self.commands)
    }
}

/// Summary of one `render` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOutcome {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

pub struct ChartRenderer {
    opts: RenderOptions,
    plot: Rect,
    x_scale: LinearScale,
    y_scale: LinearScale,
    x_axis: Axis,
    y_axis: Axis,
    paths: Vec<DrawnPath>,
    variable: Option<String>,
}

impl ChartRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        let plot = Rect::plot_area(opts.width, opts.height, &opts.insets);
        let x_scale = LinearScale::new(EMPTY_X_DOMAIN, (0.0, plot.width()));
        let y_scale = LinearScale::new(Y_DOMAIN, (plot.height(), 0.0));
        Self {
            x_axis: Axis::bottom(opts.x_label.clone()),
            y_axis: Axis::left(opts.y_label.clone()),
            opts,
            plot,
            x_scale,
            y_scale,
            paths: Vec::new(),
            variable: None,
        }
    }

    /// Redraw the chart for records of `variable`.
    ///
    /// After this call the drawn paths correspond one-to-one with the groups of
    /// `variable` in `data`. Unknown variables give an empty, valid chart.
    pub fn render(&mut self, data: &Dataset, variable: &str) -> RenderOutcome {
        let groups = group::group_by(data, variable);

        let (d0, d1) = match group::max_time(data, variable) {
            Some(max) if max > 0.0 => (0.0, max),
            _ => EMPTY_X_DOMAIN,
        };
        self.x_scale.set_domain(d0, d1);
        self.x_axis.redraw(&self.x_scale);
        self.y_axis.redraw(&self.y_scale);

        let outcome = self.reconcile_paths(groups);
        self.variable = Some(variable.to_string());
        log::debug!(
            "rendered `{variable}`: {} paths (+{} ~{} -{}), x-domain [{d0}, {d1}]",
            self.paths.len(),
            outcome.created,
            outcome.updated,
            outcome.removed,
        );
        outcome
    }

    fn reconcile_paths(&mut self, groups: Vec<Group>) -> RenderOutcome {
        let current: Vec<GroupKey> = self.paths.iter().map(|p| p.key.clone()).collect();
        let desired: Vec<GroupKey> = groups.iter().map(|g| g.key.clone()).collect();
        let plan = reconcile(&current, &desired);

        // surviving paths keep their color; entering ones take palette slots in entering order
        let mut colors: HashMap<GroupKey, Rgb> = std::mem::take(&mut self.paths)
            .into_iter()
            .map(|p| (p.key, p.color))
            .collect();
        for (i, key) in plan.create.iter().enumerate() {
            colors.insert(key.clone(), self.opts.theme.stroke(i));
        }

        let mut next = Vec::with_capacity(groups.len());
        for g in groups {
            let curve = SurvivalCurve::new(g.points);
            let commands = curve.commands(&self.x_scale, &self.y_scale);
            let color = colors.get(&g.key).copied().unwrap_or_else(|| self.opts.theme.stroke(0));
            next.push(DrawnPath { key: g.key, color, curve, commands });
        }
        self.paths = next;

        RenderOutcome {
            created: plan.create.len(),
            updated: plan.update.len(),
            removed: plan.remove.len(),
        }
    }

    pub fn options(&self) -> &RenderOptions { &self.opts }
    pub fn plot_area(&self) -> Rect { self.plot }
    pub fn x_scale(&self) -> &LinearScale { &self.x_scale }
    pub fn y_scale(&self) -> &LinearScale { &self.y_scale }
    pub fn x_domain(&self) -> (f64, f64) { self.x_scale.domain }
    pub fn y_domain(&self) -> (f64, f64) { self.y_scale.domain }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn paths(&self) -> &[DrawnPath] { &self.paths }
    /// Variable of the last render, if any.
    pub fn variable(&self) -> Option<&str> { self.variable.as_deref() }

    pub fn path(&self, key: &str) -> Option<&DrawnPath> {
        self.paths.iter().find(|p| p.key.as_str() == key)
    }

    pub fn path_by_key(&self, key: &GroupKey) -> Option<&DrawnPath> {
        self.paths.iter().find(|p| &p.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.paths.iter().map(|p| p.key.as_str()).collect()
    }

    /// Build the SVG tree of the current scene.
    pub fn to_svg_element(&self) -> Element {
        let o = &self.opts;
        let theme = &o.theme;
        let (w, h) = (self.plot.width(), self.plot.height());

        let mut g = Element::new("g")
            .attr("transform", format!("translate({},{})", o.insets.left, o.insets.top));
        g.push(
            axis_element(&self.x_axis, theme, o.draw_labels)
                .attr("transform", format!("translate(0,{})", fmt_coord(h))),
        );
        g.push(axis_element(&self.y_axis, theme, o.draw_labels));

        if o.draw_labels {
            g.push(
                Element::new("text")
                    .attr("class", "x label")
                    .attr("x", fmt_coord(w / 2.0))
                    .attr("y", fmt_coord(h + 40.0))
                    .attr("text-anchor", "middle")
                    .attr("fill", theme.axis_label.to_hex())
                    .text(o.x_label.as_str()),
            );
            g.push(
                Element::new("text")
                    .attr("class", "y label")
                    .attr("x", fmt_coord(-h / 2.0))
                    .attr("y", -50)
                    .attr("transform", "rotate(-90)")
                    .attr("text-anchor", "middle")
                    .attr("fill", theme.axis_label.to_hex())
                    .text(o.y_label.as_str()),
            );
        }

        for p in &self.paths {
            g.push(
                Element::new("path")
                    .attr("class", "line")
                    .attr("data-key", p.key.as_str())
                    .attr("fill", "none")
                    .attr("stroke", p.color.to_hex())
                    .attr("stroke-width", o.stroke_width)
                    .attr("d", p.d()),
            );
        }

        Element::svg(o.width, o.height)
            .child(
                Element::new("rect")
                    .attr("width", o.width)
                    .attr("height", o.height)
                    .attr("fill", theme.background.to_hex()),
            )
            .child(g)
    }

    pub fn to_svg(&self) -> String {
        self.to_svg_element().render()
    }

    /// Write the SVG scene to `path`, creating parent directories.
    pub fn render_to_svg(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg())
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

fn axis_element(axis: &Axis, theme: &Theme, draw_labels: bool) -> Element {
    let stroke = theme.axis_line.to_hex();
    let (r0, r1) = axis.extent;
    let (class, domain) = match axis.orient {
        Orient::Bottom => (
            "x axis",
            format!("M{},{TICK_SIZE}V0H{}V{TICK_SIZE}", fmt_coord(r0), fmt_coord(r1)),
        ),
        Orient::Left => (
            "y axis",
            format!("M-{TICK_SIZE},{}H0V{}H-{TICK_SIZE}", fmt_coord(r0), fmt_coord(r1)),
        ),
    };
    let mut el = Element::new("g").attr("class", class).child(
        Element::new("path")
            .attr("class", "domain")
            .attr("fill", "none")
            .attr("stroke", &stroke)
            .attr("d", domain),
    );
    for t in &axis.ticks {
        let off = fmt_coord(t.offset);
        let (transform, line, text) = match axis.orient {
            Orient::Bottom => (
                format!("translate({off},0)"),
                Element::new("line").attr("y2", TICK_SIZE),
                Element::new("text").attr("y", TICK_SIZE + 3.0).attr("dy", "0.71em").attr("text-anchor", "middle"),
            ),
            Orient::Left => (
                format!("translate(0,{off})"),
                Element::new("line").attr("x2", -TICK_SIZE),
                Element::new("text").attr("x", -(TICK_SIZE + 3.0)).attr("dy", "0.32em").attr("text-anchor", "end"),
            ),
        };
        let mut tick = Element::new("g")
            .attr("class", "tick")
            .attr("transform", transform)
            .child(line.attr("stroke", &stroke));
        if draw_labels {
            tick.push(text.attr("fill", theme.tick.to_hex()).text(t.label.as_str()));
        }
        el.push(tick);
    }
    el
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Observation;

    fn sex_data() -> Dataset {
        Dataset::new(vec![
            Observation::new("sex", "M", 0.0, 1.0),
            Observation::new("sex", "M", 10.0, 0.8),
            Observation::new("sex", "F", 0.0, 1.0),
            Observation::new("sex", "F", 15.0, 0.9),
        ])
        .unwrap()
    }

    #[test]
    fn first_render_creates_every_path() {
        let mut r = ChartRenderer::default();
        let out = r.render(&sex_data(), "sex");
        assert_eq!(out, RenderOutcome { created: 2, updated: 0, removed: 0 });
        assert_eq!(r.variable(), Some("sex"));
        assert_eq!(r.path("M").map(|p| p.color), Some(Theme::light().stroke(0)));
        assert_eq!(r.path("F").map(|p| p.color), Some(Theme::light().stroke(1)));
    }

    #[test]
    fn geometry_uses_plot_local_pixels() {
        let mut r = ChartRenderer::default();
        r.render(&sex_data(), "sex");
        // x: 0..15 -> 0..680, y: 0..1 -> 400..0
        let f = r.path("F").unwrap();
        assert_eq!(f.d(), "M0,0L680,0L680,40");
    }

    #[test]
    fn svg_has_one_path_per_group() {
        let mut r = ChartRenderer::default();
        r.render(&sex_data(), "sex");
        let svg = r.to_svg();
        assert_eq!(svg.matches("class=\"line\"").count(), 2);
        assert!(svg.contains("data-key=\"M\""));
        assert!(svg.contains("translate(80,40)"));
        assert!(svg.contains("Survival Probability"));
        assert!(svg.contains("rotate(-90)"));
    }

    #[test]
    fn labels_can_be_switched_off() {
        let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
        let mut r = ChartRenderer::new(opts);
        r.render(&sex_data(), "sex");
        let svg = r.to_svg();
        assert!(!svg.contains("Time (days)"));
        assert!(!svg.contains("<text"));
    }
}
