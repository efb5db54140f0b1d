// File: crates/survival-core/src/series.rs
// Summary: Survival step curves: step-after vertex generation, SVG path data, point evaluation.

use std::fmt::Write;

use crate::geometry::Point;
use crate::scale::LinearScale;

/// Drawing commands of a path, in plot-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
}

/// Vertices of a step-after curve through `points`.
///
/// The line holds each value until the next time point, then drops vertically:
/// `M x0,y0 L x1,y0 L x1,y1 L x2,y1 ...`. One point yields a lone move; none yields nothing.
pub fn step_after(points: &[(f64, f64)], x: &LinearScale, y: &LinearScale) -> Vec<PathCommand> {
    let mut out = Vec::with_capacity(points.len().saturating_mul(2));
    let mut prev_y = 0.0;
    for (i, &(t, s)) in points.iter().enumerate() {
        let px = x.map(t);
        let py = y.map(s);
        if i == 0 {
            out.push(PathCommand::MoveTo(Point::new(px, py)));
        } else {
            out.push(PathCommand::LineTo(Point::new(px, prev_y)));
            out.push(PathCommand::LineTo(Point::new(px, py)));
        }
        prev_y = py;
    }
    out
}

/// Serialize commands to compact SVG path data (`M0,0L10,0L10,20`).
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut d = String::with_capacity(commands.len() * 14);
    for c in commands {
        // writing into a String cannot fail
        let _ = match c {
            PathCommand::MoveTo(p) => write!(d, "M{},{}", fmt_coord(p.x), fmt_coord(p.y)),
            PathCommand::LineTo(p) => write!(d, "L{},{}", fmt_coord(p.x), fmt_coord(p.y)),
        };
    }
    d
}

/// Round to 1/1000 px and drop trailing zeros.
pub(crate) fn fmt_coord(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        return "0".to_string();
    }
    format!("{r}")
}

/// A survival curve in data space.
#[derive(Clone, Debug, PartialEq)]
pub struct SurvivalCurve {
    /// `(time, survival)` in the order they were given; assumed ascending in time.
    pub points: Vec<(f64, f64)>,
}

impl SurvivalCurve {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Right-continuous step value at `t`: the survival of the last point with
    /// `time <= t`. `None` before the first point.
    pub fn value_at(&self, t: f64) -> Option<f64> {
        let mut value = None;
        for &(ti, si) in &self.points {
            if ti > t {
                break;
            }
            value = Some(si);
        }
        value
    }

    /// Step-after vertices of this curve under the given scales.
    pub fn commands(&self, x: &LinearScale, y: &LinearScale) -> Vec<PathCommand> {
        step_after(&self.points, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scales() -> (LinearScale, LinearScale) {
        (
            LinearScale::new((0.0, 10.0), (0.0, 100.0)),
            LinearScale::new((0.0, 1.0), (100.0, 0.0)),
        )
    }

    #[test]
    fn step_after_holds_then_drops() {
        let (x, y) = scales();
        let cmds = step_after(&[(0.0, 1.0), (5.0, 0.5), (10.0, 0.2)], &x, &y);
        assert_eq!(path_data(&cmds), "M0,0L50,0L50,50L100,50L100,80");
    }

    #[test]
    fn single_and_empty_curves() {
        let (x, y) = scales();
        assert_eq!(path_data(&step_after(&[(2.0, 1.0)], &x, &y)), "M20,0");
        assert!(step_after(&[], &x, &y).is_empty());
    }

    #[test]
    fn value_is_right_continuous() {
        let c = SurvivalCurve::new(vec![(0.0, 1.0), (10.0, 0.8), (20.0, 0.5)]);
        assert_eq!(c.value_at(-1.0), None);
        assert_eq!(c.value_at(0.0), Some(1.0));
        assert_eq!(c.value_at(9.999), Some(1.0));
        assert_eq!(c.value_at(10.0), Some(0.8));
        assert_eq!(c.value_at(19.0), Some(0.8));
        assert_eq!(c.value_at(500.0), Some(0.5));
    }

    #[test]
    fn coordinates_are_rounded() {
        assert_eq!(fmt_coord(80.00000000000001), "80");
        assert_eq!(fmt_coord(1.0 / 3.0), "0.333");
        assert_eq!(fmt_coord(-0.0), "0");
    }
}
