//! Core error taxonomy.
//!
//! # Responsibility
//! - Name the error classes callers of the core may see or report.
//! - Wrap unexpected failures into one catch-all shape with a stable code.
//!
//! # Invariants
//! - Store and aggregation operations never return these; missing or
//!   inconsistent data degrades to empty results instead.
//! - `Unknown::code` is a stable machine-readable string.

use crate::model::ids::CompanyId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Malformed input rejected at a presentation boundary.
    Validation(String),
    /// A communication references a company that does not exist.
    Reference { company_id: CompanyId },
    /// Catch-all for unexpected failures.
    Unknown { message: String, code: String },
}

impl CoreError {
    /// Wraps any error as `Unknown` with [`UNKNOWN_ERROR_CODE`].
    ///
    /// Already-classified `CoreError` values are returned unchanged.
    pub fn from_unknown(err: &(dyn Error + 'static)) -> Self {
        if let Some(core) = err.downcast_ref::<CoreError>() {
            return core.clone();
        }
        Self::Unknown {
            message: err.to_string(),
            code: UNKNOWN_ERROR_CODE.to_string(),
        }
    }

    /// Stable code for logs and UI mapping.
    pub fn code(&self) -> &str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Reference { .. } => "REFERENCE_ERROR",
            Self::Unknown { code, .. } => code.as_str(),
        }
    }
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "validation failed: {message}"),
            Self::Reference { company_id } => {
                write!(f, "communication references unknown company: {company_id}")
            }
            Self::Unknown { message, code } => write!(f, "{message} ({code})"),
        }
    }
}

impl Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::{CoreError, UNKNOWN_ERROR_CODE};
    use std::error::Error;

    #[test]
    fn foreign_errors_become_unknown() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = CoreError::from_unknown(&io);
        assert_eq!(err.code(), UNKNOWN_ERROR_CODE);
        assert!(err.to_string().contains("disk gone"));
    }

    #[test]
    fn classified_errors_pass_through() {
        let original = CoreError::Validation("name too short".to_string());
        let boxed: Box<dyn Error> = Box::new(original.clone());
        assert_eq!(CoreError::from_unknown(boxed.as_ref()), original);
    }
}
