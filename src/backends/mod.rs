pub mod css;
pub mod gimp;
pub mod plain;

use std::path::Path;

use anyhow::{Context, Result};

use crate::brand::BrandKit;

/// A text format a brand palette can be exported to.
pub trait PaletteFormat {
    /// Human-readable format name.
    fn name(&self) -> &str;

    /// File extension, without the dot.
    fn extension(&self) -> &str;

    /// Render the kit's palette.
    fn serialize(&self, kit: &BrandKit) -> String;

    /// Whether `path` carries this format's extension (case-insensitive).
    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.extension()))
    }

    /// Render the palette and write it to `path`.
    fn write_to(&self, kit: &BrandKit, path: &Path) -> Result<()> {
        std::fs::write(path, self.serialize(kit))
            .with_context(|| format!("failed to write {} palette to {}", self.name(), path.display()))
    }
}

/// Export format selector for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// One `#rrggbb` per line
    #[default]
    Plain,
    /// CSS custom properties on `:root`
    Css,
    /// GIMP / Inkscape `.gpl` palette
    Gimp,
}

impl Format {
    pub fn backend(self) -> Box<dyn PaletteFormat> {
        match self {
            Format::Plain => Box::new(plain::PlainBackend),
            Format::Css => Box::new(css::CssBackend),
            Format::Gimp => Box::new(gimp::GimpBackend),
        }
    }
}

/// Lowercase the brand name and collapse anything that is not ASCII
/// alphanumeric into single dashes. Falls back to `brand`.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        "brand".to_string()
    } else {
        out
    }
}
