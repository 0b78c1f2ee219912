use std::fmt;

use thiserror::Error;

/// How a diagnostic points at the offending record: by id when the record
/// carried one, by position in the source sequence otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRef {
    Id(String),
    Index(usize),
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRef::Id(id) => write!(f, "`{id}`"),
            RecordRef::Index(index) => write!(f, "at index {index}"),
        }
    }
}

/// Validation failure for a single raw record. The first failure aborts the
/// whole load; no partial collection is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("testimonial {record}: missing `{field}`")]
    MissingField {
        record: RecordRef,
        field: &'static str,
    },
    #[error("testimonial {record}: invalid `{field}` value `{value}`")]
    InvalidField {
        record: RecordRef,
        field: &'static str,
        value: String,
    },
}

impl ValidationError {
    pub fn record(&self) -> &RecordRef {
        match self {
            ValidationError::MissingField { record, .. } => record,
            ValidationError::InvalidField { record, .. } => record,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field, .. } => field,
            ValidationError::InvalidField { field, .. } => field,
        }
    }
}
