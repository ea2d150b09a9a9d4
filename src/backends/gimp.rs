use crate::brand::BrandKit;

use super::PaletteFormat;

/// GIMP palette (`.gpl`), also read by Inkscape and Krita.
pub struct GimpBackend;

impl PaletteFormat for GimpBackend {
    fn name(&self) -> &str {
        "GIMP"
    }

    fn extension(&self) -> &str {
        "gpl"
    }

    fn serialize(&self, kit: &BrandKit) -> String {
        let colors = kit.colors();
        let mut out = String::new();
        out.push_str("GIMP Palette\n");
        out.push_str(&format!("Name: {}\n", kit.name()));
        out.push_str(&format!("Columns: {}\n", colors.len()));
        out.push_str("#\n");
        for c in colors {
            out.push_str(&format!("{:>3} {:>3} {:>3}\t{}\n", c.r, c.g, c.b, c));
        }
        out
    }
}
