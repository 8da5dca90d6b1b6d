/*!
Address form errors.
*/
use crate::validation::FieldError;
use thiserror::Error;

pub use serde_json::Error as Json;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Json(#[from] Json),
    #[error("Form has {} validation error(s)", .0.len())]
    Invalid(Vec<FieldError>),
}

impl Error {
    /// Validation errors carried by a blocked submission.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Error::Invalid(errors) => errors,
            Error::Json(_) => &[],
        }
    }
}
