use crate::brand::BrandKit;

use super::PaletteFormat;

/// Bare hex list, one color per line.
pub struct PlainBackend;

impl PaletteFormat for PlainBackend {
    fn name(&self) -> &str {
        "Plain"
    }

    fn extension(&self) -> &str {
        "txt"
    }

    fn serialize(&self, kit: &BrandKit) -> String {
        kit.colors().iter().map(|c| format!("{c}\n")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::BrandAction;

    #[test]
    fn one_hex_per_line() {
        let output = PlainBackend.serialize(&BrandKit::default());
        assert_eq!(output, "#4f46e5\n#06b6d4\n#10b981\n#f43f5e\n");
    }

    #[test]
    fn empty_palette_is_empty_output() {
        let mut kit = BrandKit::default();
        for _ in 0..4 {
            kit.apply(BrandAction::RemoveColor(0)).unwrap();
        }
        assert_eq!(PlainBackend.serialize(&kit), "");
    }
}
