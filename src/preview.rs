use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;
use crate::pipeline::extract::ExtractedColor;

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Render one truecolor swatch line per extracted color, with its share of
/// the opaque pixels.
pub fn render(colors: &[ExtractedColor]) -> String {
    if colors.is_empty() {
        return "  (no opaque pixels to sample)\n".to_string();
    }

    let mut out = String::new();
    for (i, entry) in colors.iter().enumerate() {
        let fg = if entry.color.prefers_dark_text() {
            TermColor::Black
        } else {
            TermColor::White
        };
        let swatch = format!(" {} ", entry.color).with(fg).on(term_color(entry.color));
        out.push_str(&format!(
            "  {:>2}  {}  {:>5.1}%  ({} px)\n",
            i + 1,
            swatch,
            entry.weight * 100.0,
            entry.population
        ));
    }
    out
}
