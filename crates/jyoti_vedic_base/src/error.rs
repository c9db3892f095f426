//! Error types for Vedic calculations.

use jyoti_time::TimeError;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Caller-supplied value outside its valid domain.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// An internal invariant did not hold for a derived value.
    #[error("domain computation failed: {0}")]
    DomainComputation(String),

    /// Dasha query past the furthest instant the timeline will generate.
    #[error("query jd {query_jd} is beyond the dasha horizon ending at jd {horizon_jd}")]
    BeyondHorizon { query_jd: f64, horizon_jd: f64 },

    /// Error from calendar/time conversion.
    #[error(transparent)]
    Time(#[from] TimeError),
}

impl VedicError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input field, when the error is about one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::Time(e) => Some(e.field()),
            Self::BeyondHorizon { .. } => Some("query_jd"),
            Self::DomainComputation(_) => None,
        }
    }
}
