//! Per-record failure types for catalog loading
//!
//! A failed record never aborts a load: the offending line is dropped
//! and the failure is collected into the catalog's
//! [`LoadReport`](crate::catalog::LoadReport) as advisory diagnostics.

use thiserror::Error;

/// Why a single catalog line was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required field is absent from the line
    #[error("missing required field {index} ({name})")]
    MissingField { index: usize, name: &'static str },

    /// A required field is present but does not parse
    #[error("field {index} ({name}) does not parse: {value:?}")]
    InvalidField {
        index: usize,
        name: &'static str,
        value: String,
    },

    /// A line segment references a star id absent from the star list
    #[error("constellation {constellation}: no star with id {hip_id}")]
    UnresolvedStar { constellation: String, hip_id: u32 },
}
