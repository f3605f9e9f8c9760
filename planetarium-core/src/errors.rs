//! Error types for the numeric core.
//!
//! The only fallible core computation is reading an angle from text, so
//! [`SkyError`] has a single variant. Per-line catalog noise is not an error
//! at this level; the catalog parser models it as `Option<Record>`.
//!
//! ```
//! use planetarium_core::angle::parse_dms;
//! use planetarium_core::SkyError;
//!
//! let err = parse_dms("north").unwrap_err();
//! assert!(matches!(err, SkyError::ParseError { .. }));
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkyError {
    #[error("Parse error in {context}: {message}")]
    ParseError { context: String, message: String },
}

pub type SkyResult<T> = Result<T, SkyError>;

impl SkyError {
    pub fn parse_error(context: &str, reason: &str) -> Self {
        Self::ParseError {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }
}
