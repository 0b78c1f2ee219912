use crate::data::{RawTestimonial, RawVideo};
use crate::error::{RecordRef, ValidationError};
use crate::types::{ProfileImage, Testimonial, Video};

/// Convert one raw record into a canonical [`Testimonial`], or reject it.
///
/// Checks run in a fixed order and stop at the first violation; `index` is
/// only used for the diagnostic when the record has no usable id. Defaults
/// are applied after validation: absent and explicit-null `rating`/`video`
/// collapse to `None`, `featured` becomes `false`, `category` passes through
/// untouched.
pub fn testimonial(raw: RawTestimonial, index: usize) -> Result<Testimonial, ValidationError> {
    let record = match raw.id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => RecordRef::Id(id.to_string()),
        None => RecordRef::Index(index),
    };

    let id = require(raw.id, &record, "id")?;
    let quote = require(raw.testimonial, &record, "testimonial")?;
    let name = require(raw.name, &record, "name")?;
    let job = require(raw.job, &record, "job")?;

    let image = match raw.image {
        Some(image) => ProfileImage {
            src: require(image.src, &record, "image.src")?,
            alt: image.alt.unwrap_or_default(),
        },
        None => return Err(missing(&record, "image.src")),
    };

    let video = match raw.video {
        Some(v) => Some(video(v, &record)?),
        None => None,
    };

    Ok(Testimonial {
        id,
        quote,
        name,
        job,
        image,
        rating: raw.rating,
        video,
        featured: raw.featured.unwrap_or(false),
        category: raw.category,
    })
}

fn video(raw: RawVideo, record: &RecordRef) -> Result<Video, ValidationError> {
    let src = require(raw.src, record, "video.src")?;
    let thumbnail = require(raw.thumbnail, record, "video.thumbnail")?;

    let kind = require(raw.kind, record, "video.type")?;
    let orientation = kind
        .parse()
        .map_err(|()| invalid(record, "video.type", &kind))?;

    let platform_raw = require(raw.platform, record, "video.platform")?;
    let platform = platform_raw
        .parse()
        .map_err(|()| invalid(record, "video.platform", &platform_raw))?;

    Ok(Video {
        src,
        thumbnail,
        orientation,
        platform,
        duration: raw.duration,
        views: raw.views,
    })
}

// Empty strings count as missing, matching the required/non-empty contract.
fn require(
    value: Option<String>,
    record: &RecordRef,
    field: &'static str,
) -> Result<String, ValidationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| missing(record, field))
}

fn missing(record: &RecordRef, field: &'static str) -> ValidationError {
    ValidationError::MissingField {
        record: record.clone(),
        field,
    }
}

fn invalid(record: &RecordRef, field: &'static str, value: &str) -> ValidationError {
    ValidationError::InvalidField {
        record: record.clone(),
        field,
        value: value.to_string(),
    }
}
