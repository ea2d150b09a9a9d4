//! In-memory brand configuration that an extracted palette seeds.
//!
//! All mutation goes through [`BrandKit::apply`] so every change is a
//! [`BrandAction`] recorded in the kit's history.

use std::path::PathBuf;

use anyhow::Result;

use crate::color::Color;
use crate::pipeline::extract::ExtractedColor;

pub const DEFAULT_NAME: &str = "Nexus";
pub const DEFAULT_COLORS: [Color; 4] = [
    Color::new(0x4f, 0x46, 0xe5),
    Color::new(0x06, 0xb6, 0xd4),
    Color::new(0x10, 0xb9, 0x81),
    Color::new(0xf4, 0x3f, 0x5e),
];
pub const DEFAULT_VOICE: &str = "We are Nexus, a premium digital marketing partner. \
Our voice is professional, empathetic, and data-driven. We prioritize clarity over \
buzzwords. Always use an encouraging tone.";
pub const DEFAULT_TRAITS: [&str; 4] = ["Professional", "Trustworthy", "Innovative", "Minimalist"];
pub const DEFAULT_FONT: &str = "Inter";

/// A single state change to a [`BrandKit`].
#[derive(Debug, Clone, PartialEq)]
pub enum BrandAction {
    Rename(String),
    SetLogo(Option<PathBuf>),
    /// Hex string, with or without `#`.
    AddColor(String),
    RemoveColor(usize),
    /// Replace the palette with extracted colors, unless there are none.
    ApplyExtracted(Vec<Color>),
    SetVoice(String),
    AddTrait(String),
    RemoveTrait(String),
    SetFonts { heading: String, body: String },
}

impl BrandAction {
    /// Build an `ApplyExtracted` action from extractor output.
    pub fn from_extracted(colors: &[ExtractedColor]) -> Self {
        BrandAction::ApplyExtracted(colors.iter().map(|c| c.color).collect())
    }
}

/// Whether an action changed the kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrandKit {
    name: String,
    logo: Option<PathBuf>,
    colors: Vec<Color>,
    voice: String,
    traits: Vec<String>,
    heading_font: String,
    body_font: String,
    history: Vec<BrandAction>,
}

impl Default for BrandKit {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            logo: None,
            colors: DEFAULT_COLORS.to_vec(),
            voice: DEFAULT_VOICE.to_string(),
            traits: DEFAULT_TRAITS.iter().map(|t| t.to_string()).collect(),
            heading_font: DEFAULT_FONT.to_string(),
            body_font: DEFAULT_FONT.to_string(),
            history: Vec::new(),
        }
    }
}

impl BrandKit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logo(&self) -> Option<&PathBuf> {
        self.logo.as_ref()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    pub fn fonts(&self) -> (&str, &str) {
        (&self.heading_font, &self.body_font)
    }

    /// Every action that changed the kit, oldest first.
    pub fn history(&self) -> &[BrandAction] {
        &self.history
    }

    /// Apply one action. Invalid input (a malformed hex color) is an error
    /// and leaves the kit untouched.
    pub fn apply(&mut self, action: BrandAction) -> Result<Outcome> {
        let outcome = match &action {
            BrandAction::Rename(name) => replace(&mut self.name, name.trim().to_string()),
            BrandAction::SetLogo(path) => replace(&mut self.logo, path.clone()),
            BrandAction::AddColor(hex) => {
                let color = Color::from_hex(hex)?;
                if self.colors.contains(&color) {
                    Outcome::Unchanged
                } else {
                    self.colors.push(color);
                    Outcome::Changed
                }
            }
            BrandAction::RemoveColor(index) => {
                if *index < self.colors.len() {
                    self.colors.remove(*index);
                    Outcome::Changed
                } else {
                    Outcome::Unchanged
                }
            }
            BrandAction::ApplyExtracted(colors) => {
                if colors.is_empty() {
                    Outcome::Unchanged
                } else {
                    let mut deduped: Vec<Color> = Vec::with_capacity(colors.len());
                    for c in colors {
                        if !deduped.contains(c) {
                            deduped.push(*c);
                        }
                    }
                    replace(&mut self.colors, deduped)
                }
            }
            BrandAction::SetVoice(voice) => replace(&mut self.voice, voice.clone()),
            BrandAction::AddTrait(tag) => {
                let tag = tag.trim();
                if tag.is_empty() || self.traits.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                    Outcome::Unchanged
                } else {
                    self.traits.push(tag.to_string());
                    Outcome::Changed
                }
            }
            BrandAction::RemoveTrait(tag) => {
                let before = self.traits.len();
                self.traits.retain(|t| !t.eq_ignore_ascii_case(tag.trim()));
                if self.traits.len() == before {
                    Outcome::Unchanged
                } else {
                    Outcome::Changed
                }
            }
            BrandAction::SetFonts { heading, body } => {
                let h = replace(&mut self.heading_font, heading.clone());
                let b = replace(&mut self.body_font, body.clone());
                if h == Outcome::Changed || b == Outcome::Changed {
                    Outcome::Changed
                } else {
                    Outcome::Unchanged
                }
            }
        };

        if outcome == Outcome::Changed {
            tracing::debug!(?action, "brand kit updated");
            self.history.push(action);
        }
        Ok(outcome)
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> Outcome {
    if *slot == value {
        Outcome::Unchanged
    } else {
        *slot = value;
        Outcome::Changed
    }
}
