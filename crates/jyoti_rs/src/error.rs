//! Facade error type.

use jyoti_time::TimeError;
use jyoti_vedic_base::VedicError;

/// Errors surfaced by the chart and timeline entry points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum JyotiError {
    /// A birth field failed validation.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Vedic(#[from] VedicError),
}

impl JyotiError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input field, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::Time(e) => Some(e.field()),
            Self::Vedic(e) => e.field(),
        }
    }
}
