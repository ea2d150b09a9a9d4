use anyhow::{bail, Context, Result};
use palette::{FromColor, IntoColor, Lab, Srgb};

/// An opaque sRGB color with 8-bit channels.
///
/// This is the unit every palette, bucket and brand swatch is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800`, `#FF8800` or `ff8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("invalid hex color {hex:?}: expected 6 hex digits");
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .with_context(|| format!("invalid hex color {hex:?}"))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Convert to CIELAB for perceptual distance and clustering.
    pub fn to_lab(self) -> Lab {
        let srgb: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        srgb.into_color()
    }

    /// Create from CIELAB, clamping out-of-gamut values.
    pub fn from_lab(lab: Lab) -> Self {
        let srgb: Srgb<f32> = Srgb::from_color(lab);
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: channel(srgb.red),
            g: channel(srgb.green),
            b: channel(srgb.blue),
        }
    }

    /// Squared CIE76 color difference (ΔE²).
    pub fn delta_e_sq(self, other: Color) -> f32 {
        let a = self.to_lab();
        let b = other.to_lab();
        (a.l - b.l).powi(2) + (a.a - b.a).powi(2) + (a.b - b.b).powi(2)
    }

    /// WCAG 2.0 relative luminance.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// Whether dark text reads better than light text on this color.
    pub fn prefers_dark_text(self) -> bool {
        self.relative_luminance() > 0.4
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}
