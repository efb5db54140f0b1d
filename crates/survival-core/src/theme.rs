// File: crates/survival-core/src/theme.rs
// Summary: Light/Dark theming for chart colors and the categorical stroke palette.

use crate::types::Rgb;

/// Ten-color categorical palette (the classic "category10" scheme).
pub const CATEGORY10: [Rgb; 10] = [
    Rgb::new(0x1f, 0x77, 0xb4),
    Rgb::new(0xff, 0x7f, 0x0e),
    Rgb::new(0x2c, 0xa0, 0x2c),
    Rgb::new(0xd6, 0x27, 0x28),
    Rgb::new(0x94, 0x67, 0xbd),
    Rgb::new(0x8c, 0x56, 0x4b),
    Rgb::new(0xe3, 0x77, 0xc2),
    Rgb::new(0x7f, 0x7f, 0x7f),
    Rgb::new(0xbc, 0xbd, 0x22),
    Rgb::new(0x17, 0xbe, 0xcf),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub axis_line: Rgb,
    pub axis_label: Rgb,
    pub tick: Rgb,
    pub palette: [Rgb; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb::new(255, 255, 255),
            axis_line: Rgb::new(0, 0, 0),
            axis_label: Rgb::new(0, 0, 0),
            tick: Rgb::new(0, 0, 0),
            palette: CATEGORY10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb::new(18, 18, 20),
            axis_line: Rgb::new(180, 180, 190),
            axis_label: Rgb::new(235, 235, 245),
            tick: Rgb::new(150, 150, 160),
            palette: CATEGORY10,
        }
    }

    /// Stroke color for slot `i`; wraps around after the palette is exhausted.
    pub fn stroke(&self, i: usize) -> Rgb {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
