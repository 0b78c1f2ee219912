pub mod data;
pub mod error;
pub mod normalize;
pub mod preset;
pub mod types;

// --- Library API for embedders ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::error::{RecordRef, ValidationError};
    pub use crate::types::{
        ProfileImage, Template, Testimonial, Video, VideoOrientation, VideoPlatform,
        LONG_FORM_CHARS,
    };
    pub use crate::{TestimonialSet, TestimonialStats};
}

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::{RawPreset, RawTestimonial};
use crate::error::ValidationError;
use crate::types::{Template, Testimonial};

/// Normalized testimonial collection plus its display-template selector.
///
/// Built once from a raw preset and immutable afterwards; every query below
/// borrows from the set and preserves source order. Callers own the value and
/// pass it to whatever renders it; there is no process-wide instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialSet {
    template: Template,
    items: Vec<Testimonial>,
}

/// Per-dimension counts over a collection, for authoring-time inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialStats {
    pub total: usize,
    pub featured: usize,
    pub with_video: usize,
    pub text_only: usize,
    pub with_rating: usize,
    pub long_form: usize,
    pub short_form: usize,
    pub categories: usize,
}

impl TestimonialSet {
    /// Normalize a raw preset. The first invalid record aborts the whole
    /// load; no partial collection is produced.
    pub fn from_raw(preset: RawPreset) -> Result<Self, ValidationError> {
        let template = Template::from_raw(preset.template.as_deref());
        let items = preset
            .testimonials
            .into_iter()
            .enumerate()
            .map(|(index, raw)| normalize::testimonial(raw, index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { template, items })
    }

    /// Normalize a bare record list with the default template.
    pub fn from_records(records: Vec<RawTestimonial>) -> Result<Self, ValidationError> {
        Self::from_raw(RawPreset {
            template: None,
            testimonials: records,
        })
    }

    /// Read and normalize a preset file (JSON).
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        preset::load(path)
    }

    /// Parse and normalize a preset from a JSON string.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        preset::from_json_str(json)
    }

    /// The preset bundled into the binary.
    pub fn bundled() -> anyhow::Result<Self> {
        preset::bundled()
    }

    pub fn template(&self) -> Template {
        self.template
    }

    /// All records, in source order.
    pub fn items(&self) -> &[Testimonial] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First record with the given id. Ids are unique by convention only;
    /// when duplicates coexist, the earliest one wins here.
    pub fn get(&self, id: &str) -> Option<&Testimonial> {
        self.items.iter().find(|t| t.id == id)
    }

    // --- Filters. Each returns matches in source order and never fails. ---

    /// Records in the given category (exact, case-sensitive match).
    /// Records without a category never match.
    pub fn by_category(&self, category: &str) -> Vec<&Testimonial> {
        self.filter(|t| t.category.as_deref() == Some(category))
    }

    pub fn featured(&self) -> Vec<&Testimonial> {
        self.filter(|t| t.featured)
    }

    pub fn with_video(&self) -> Vec<&Testimonial> {
        self.filter(Testimonial::has_video)
    }

    pub fn text_only(&self) -> Vec<&Testimonial> {
        self.filter(|t| !t.has_video())
    }

    pub fn with_rating(&self) -> Vec<&Testimonial> {
        self.filter(Testimonial::has_rating)
    }

    /// Quotes over the long-form character threshold.
    pub fn long_form(&self) -> Vec<&Testimonial> {
        self.filter(Testimonial::is_long_form)
    }

    pub fn short_form(&self) -> Vec<&Testimonial> {
        self.filter(|t| !t.is_long_form())
    }

    pub fn horizontal_video(&self) -> Vec<&Testimonial> {
        self.filter(|t| t.video_orientation() == Some(types::VideoOrientation::Horizontal))
    }

    pub fn vertical_video(&self) -> Vec<&Testimonial> {
        self.filter(|t| t.video_orientation() == Some(types::VideoOrientation::Vertical))
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for t in &self.items {
            if let Some(c) = t.category.as_deref() {
                if !out.contains(&c) {
                    out.push(c);
                }
            }
        }
        out
    }

    pub fn stats(&self) -> TestimonialStats {
        TestimonialStats {
            total: self.items.len(),
            featured: self.featured().len(),
            with_video: self.with_video().len(),
            text_only: self.text_only().len(),
            with_rating: self.with_rating().len(),
            long_form: self.long_form().len(),
            short_form: self.short_form().len(),
            categories: self.categories().len(),
        }
    }

    fn filter<F: Fn(&Testimonial) -> bool>(&self, pred: F) -> Vec<&Testimonial> {
        self.items.iter().filter(|t| pred(t)).collect()
    }
}
