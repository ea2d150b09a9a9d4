use crate::brand::BrandKit;

use super::{slug, PaletteFormat};

/// CSS custom properties, one per palette slot, numbered from 1.
pub struct CssBackend;

impl PaletteFormat for CssBackend {
    fn name(&self) -> &str {
        "CSS"
    }

    fn extension(&self) -> &str {
        "css"
    }

    fn serialize(&self, kit: &BrandKit) -> String {
        let prefix = slug(kit.name());
        let (heading, body) = kit.fonts();

        let mut out = String::new();
        out.push_str(&format!("/* {} brand palette */\n", kit.name()));
        out.push_str(":root {\n");
        for (i, color) in kit.colors().iter().enumerate() {
            out.push_str(&format!("    --{}-{}: {};\n", prefix, i + 1, color));
        }
        out.push_str(&format!("    --{prefix}-font-heading: \"{heading}\";\n"));
        out.push_str(&format!("    --{prefix}-font-body: \"{body}\";\n"));
        out.push_str("}\n");
        out
    }
}
