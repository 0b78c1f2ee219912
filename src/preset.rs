use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::data::RawPreset;
use crate::TestimonialSet;

// Curated preset compiled into the binary, used when no file is given.
const BUNDLED: &str = include_str!("../data/testimonials.preset.json");

/// Parse and normalize a preset from a JSON string. Fails on malformed JSON
/// or on the first record that does not validate.
pub fn from_json_str(json: &str) -> Result<TestimonialSet> {
    let raw: RawPreset =
        serde_json::from_str(json).context("parsing testimonials preset")?;
    let set = TestimonialSet::from_raw(raw)?;
    debug!(
        count = set.len(),
        template = %set.template(),
        "normalized testimonials preset"
    );
    Ok(set)
}

/// Read and normalize a preset file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<TestimonialSet> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading preset file: {}", path.display()))?;
    from_json_str(&text)
        .with_context(|| format!("loading preset file: {}", path.display()))
}

/// The preset bundled into the binary.
pub fn bundled() -> Result<TestimonialSet> {
    from_json_str(BUNDLED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::Template;
    use std::io::Write;

    #[test]
    fn load_reads_a_preset_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"template":"masonry","testimonials":[
                {{"id":"t1","testimonial":"Solid.","name":"A","job":"B","image":{{"src":"x","alt":""}}}}
            ]}}"#
        )
        .unwrap();

        let set = load(&path).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.template(), Template::Masonry);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("reading preset file"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = from_json_str("{not json").unwrap_err();
        assert!(err.to_string().contains("parsing testimonials preset"));
    }

    #[test]
    fn validation_failure_surfaces_the_typed_error() {
        let err = from_json_str(
            r#"{"testimonials":[
                {"id":"t1","testimonial":"Ok.","name":"A","image":{"src":"x"}}
            ]}"#,
        )
        .unwrap_err();
        let validation = err.downcast_ref::<ValidationError>().unwrap();
        assert_eq!(validation.field(), "job");
    }

    #[test]
    fn a_single_bad_record_aborts_the_whole_load() {
        let err = from_json_str(
            r#"{"testimonials":[
                {"id":"t1","testimonial":"Ok.","name":"A","job":"B","image":{"src":"x"}},
                {"id":"t2","testimonial":"","name":"C","job":"D","image":{"src":"y"}}
            ]}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>().unwrap().field(),
            "testimonial"
        );
    }

    #[test]
    fn empty_preset_normalizes_to_an_empty_set() {
        let set = from_json_str("{}").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.template(), Template::Grid);
    }

    #[test]
    fn bundled_preset_is_valid() {
        let set = bundled().unwrap();
        assert!(!set.is_empty());
        assert_eq!(set.template(), Template::Grid);
        // The shipped data exercises every optional dimension.
        assert!(!set.with_video().is_empty());
        assert!(!set.featured().is_empty());
        assert!(!set.long_form().is_empty());
        assert!(!set.categories().is_empty());
    }
}
