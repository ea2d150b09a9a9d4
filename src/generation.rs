//! Seam for generative backends. Only a placeholder implementation ships.

use crate::brand::BrandKit;
use crate::error::GenerationError;

/// Voice presets offered by the copywriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTone {
    Professional,
    Casual,
    Friendly,
    Urgent,
    Luxury,
    Playful,
}

impl std::fmt::Display for CopyTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CopyTone::Professional => "Professional",
            CopyTone::Casual => "Casual",
            CopyTone::Friendly => "Friendly",
            CopyTone::Urgent => "Urgent",
            CopyTone::Luxury => "Luxury",
            CopyTone::Playful => "Playful",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub struct CopyRequest {
    pub product_name: String,
    pub description: String,
    pub audience: String,
    pub tone: CopyTone,
    pub platform: String,
}

#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub prompt: String,
    pub aspect_ratio: String,
}

#[derive(Debug, Clone)]
pub struct VideoRequest {
    pub prompt: String,
    pub duration_secs: u32,
}

/// A generated image or video, referenced by URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub uri: String,
    /// Prompt as actually sent to the backend, after brand context is added.
    pub prompt: String,
}

/// Text, image and video generation behind one interface, so a real backend
/// can replace the mock without touching callers.
pub trait GenerationService {
    fn name(&self) -> &str;

    fn generate_text(&self, request: &CopyRequest) -> Result<String, GenerationError>;

    fn generate_image(&self, request: &ImageRequest) -> Result<GeneratedAsset, GenerationError>;

    fn generate_video(&self, request: &VideoRequest) -> Result<GeneratedAsset, GenerationError>;
}

/// Returns canned output. Attach a brand kit to have its voice and palette
/// folded into requests.
#[derive(Debug, Default)]
pub struct MockGenerationService {
    brand: Option<BrandKit>,
}

impl MockGenerationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brand(brand: BrandKit) -> Self {
        Self { brand: Some(brand) }
    }

    fn branded_prompt(&self, prompt: &str) -> String {
        match &self.brand {
            Some(brand) if !brand.colors().is_empty() => {
                let palette: Vec<String> = brand.colors().iter().map(|c| c.to_hex()).collect();
                format!("[brand palette: {}] {}", palette.join(", "), prompt.trim())
            }
            _ => prompt.trim().to_string(),
        }
    }
}

impl GenerationService for MockGenerationService {
    fn name(&self) -> &str {
        "mock"
    }

    fn generate_text(&self, request: &CopyRequest) -> Result<String, GenerationError> {
        if request.product_name.trim().is_empty() {
            return Err(GenerationError::EmptyPrompt("product name"));
        }

        let mut out = format!(
            "🎯 {}\n\n{}\n\nPerfect for: {}\n\nTone: {} | Platform: {}\n\n\
             [This is a placeholder. Connect a generation backend to produce real copy.]",
            request.product_name,
            request.description,
            request.audience,
            request.tone,
            request.platform,
        );
        if let Some(brand) = &self.brand {
            out.push_str(&format!("\n\nBrand voice ({}): {}", brand.name(), brand.voice()));
        }
        Ok(out)
    }

    fn generate_image(&self, request: &ImageRequest) -> Result<GeneratedAsset, GenerationError> {
        if request.prompt.trim().is_empty() {
            return Err(GenerationError::EmptyPrompt("image prompt"));
        }
        Ok(GeneratedAsset {
            uri: format!("placeholder://image/{}", request.aspect_ratio),
            prompt: self.branded_prompt(&request.prompt),
        })
    }

    fn generate_video(&self, request: &VideoRequest) -> Result<GeneratedAsset, GenerationError> {
        if request.prompt.trim().is_empty() {
            return Err(GenerationError::EmptyPrompt("video prompt"));
        }
        Ok(GeneratedAsset {
            uri: format!("placeholder://video/{}s", request.duration_secs),
            prompt: self.branded_prompt(&request.prompt),
        })
    }
}
