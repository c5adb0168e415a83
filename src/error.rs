use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use thiserror::Error;

use crate::model::candidacy::RequestId;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong in the demo core.
///
/// All failures are recoverable: they are returned to the caller, rendered
/// inline, and the user corrects whatever was wrong.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load application config: {0}")]
    Config(#[from] figment::Error),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Candidacy request {0} has already been processed")]
    AlreadyProcessed(RequestId),
}

impl Error {
    /// Construct a `NotFound` error for the given resource description.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

/// A single failed form field and the message to render next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// The standard required-field check: an error if the value is blank.
    pub fn required(field: &'static str, value: &str, message: &str) -> Option<Self> {
        value.trim().is_empty().then(|| Self::new(field, message))
    }
}

impl Display for FieldError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.field, self.message)
    }
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// Wrap collected field errors in an [`Error`], or `Ok` if there are none.
    pub fn into_result(errors: Vec<FieldError>) -> Result<()> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(Self(errors)))
        }
    }

    /// Does the given field have an error?
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                write!(formatter, "; ")?;
            }
            write!(formatter, "{error}")?;
        }
        Ok(())
    }
}
