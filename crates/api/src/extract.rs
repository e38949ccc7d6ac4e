//! Request extractors and helpers that turn malformed input into
//! `VALIDATION_ERROR` / `NOT_FOUND` responses instead of Axum's plain-text
//! rejections.

use axum::extract::{FromRequest, Request};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// JSON body that has been deserialized and passed its `Validate` rules.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateContactMessage>) -> AppResult<()> {
///     // input is well-formed here
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(describe_validation_errors(&errors)))
    }
}

/// Summarize validation failures as a sorted list of offending field names.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    format!("Invalid or missing fields: {}", fields.join(", "))
}

/// Parse a path id. Anything that is not a UUID cannot match a row, so it is
/// reported as not found.
pub fn parse_id(entity: &'static str, raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>()
        .map_err(|_| AppError::Core(CoreError::not_found(entity, raw)))
}
