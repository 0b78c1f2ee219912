use serde::{Deserialize, Serialize};

/// Loosely-typed preset shapes as they arrive from a preset file or an inline
/// literal. Every field is optional here; `normalize` decides what is fatal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPreset {
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub testimonials: Vec<RawTestimonial>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTestimonial {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub testimonial: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub image: Option<RawImage>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub video: Option<RawVideo>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawVideo {
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub views: Option<String>,
}
