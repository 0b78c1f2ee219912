use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Quotes longer than this many characters count as long-form.
pub const LONG_FORM_CHARS: usize = 300;

/// One curated quote record, fully normalized: every optional slot is
/// materialized, `featured` is always a concrete bool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    #[serde(rename = "testimonial")]
    pub quote: String,
    pub name: String,
    pub job: String,
    pub image: ProfileImage,
    pub rating: Option<u8>,
    pub video: Option<Video>,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Testimonial {
    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    pub fn has_rating(&self) -> bool {
        self.rating.is_some()
    }

    /// Character count of the quote (not bytes, not words).
    pub fn quote_chars(&self) -> usize {
        self.quote.chars().count()
    }

    pub fn is_long_form(&self) -> bool {
        self.quote_chars() > LONG_FORM_CHARS
    }

    pub fn video_orientation(&self) -> Option<VideoOrientation> {
        self.video.as_ref().map(|v| v.orientation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileImage {
    pub src: String,
    /// Accessibility text; may be empty when the source omitted it.
    #[serde(default)]
    pub alt: String,
}

/// Embedded video metadata, present only on video testimonials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub src: String,
    pub thumbnail: String,
    #[serde(rename = "type")]
    pub orientation: VideoOrientation,
    pub platform: VideoPlatform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<String>,
}

/// Aspect-ratio tag for layout: 16:9 or 9:16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoOrientation {
    Horizontal,
    Vertical,
}

impl VideoOrientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoOrientation::Horizontal => "horizontal",
            VideoOrientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for VideoOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoOrientation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(VideoOrientation::Horizontal),
            "vertical" => Ok(VideoOrientation::Vertical),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VideoPlatform {
    Youtube,
    Vimeo,
    SelfHosted,
}

impl VideoPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoPlatform::Youtube => "youtube",
            VideoPlatform::Vimeo => "vimeo",
            VideoPlatform::SelfHosted => "self-hosted",
        }
    }
}

impl fmt::Display for VideoPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoPlatform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "youtube" => Ok(VideoPlatform::Youtube),
            "vimeo" => Ok(VideoPlatform::Vimeo),
            "self-hosted" => Ok(VideoPlatform::SelfHosted),
            _ => Err(()),
        }
    }
}

/// Display-template selector carried alongside the records. Opaque to the
/// data layer; presentation code decides what each value means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Template {
    #[default]
    #[serde(rename = "grid")]
    Grid,
    #[serde(rename = "grid-2")]
    Grid2,
    #[serde(rename = "masonry")]
    Masonry,
    #[serde(rename = "minimal")]
    Minimal,
}

impl Template {
    /// Collapse a raw selector to a known template. Absent or unrecognized
    /// values fall back to the default rather than failing the load.
    pub fn from_raw(raw: Option<&str>) -> Template {
        match raw {
            Some("grid") => Template::Grid,
            Some("grid-2") => Template::Grid2,
            Some("masonry") => Template::Masonry,
            Some("minimal") => Template::Minimal,
            _ => Template::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Grid => "grid",
            Template::Grid2 => "grid-2",
            Template::Masonry => "masonry",
            Template::Minimal => "minimal",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
