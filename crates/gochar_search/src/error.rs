//! Error types for crossing and station search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use gochar_core::{ObjectId, OracleError};

/// Errors from crossing/station search.
///
/// A search that simply finds nothing within its horizon is **not** an
/// error — those outcomes are `Ok(None)` or an empty `Vec`.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Object is absent from the oracle's registry. Raised before any
    /// position query.
    UnknownObject(ObjectId),
    /// Invalid search configuration or range.
    InvalidConfig(&'static str),
    /// Error reported by the ephemeris oracle.
    Oracle(OracleError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownObject(obj) => write!(f, "unknown object: {obj}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Oracle(e) => write!(f, "oracle error: {e}"),
        }
    }
}

impl Error for SearchError {}

impl From<OracleError> for SearchError {
    fn from(e: OracleError) -> Self {
        Self::Oracle(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_object() {
        let e = SearchError::UnknownObject(ObjectId::MARS);
        assert_eq!(e.to_string(), "unknown object: Mars");
    }

    #[test]
    fn oracle_error_wraps() {
        let e: SearchError = OracleError::EpochOutOfRange.into();
        assert!(matches!(e, SearchError::Oracle(_)));
    }
}
