//! Staff operations beyond the paginated lists.

use serde::Deserialize;
use thiserror::Error;

use crate::client::{ApiResponse, ClientError};
use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::render::RenderError;

pub mod auth;
pub mod games;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The client has already redirected to the login page.
    #[error("not authorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    /// Message reported by the backend, ready to be shown.
    #[error("{0}")]
    Api(String),

    #[error("client error: {0}")]
    Client(ClientError),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ClientError> for ServiceError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Unauthorized => ServiceError::Unauthorized,
            err => ServiceError::Client(err),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(err.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.user_message().to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Deserialize)]
struct FieldError {
    #[serde(default)]
    loc: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<Detail>,
}

/// Message for a failed mutation taken from the backend `detail` field.
pub fn detail_message(body: &str, default: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail);

    match detail {
        Some(Detail::Message(message)) => message,
        Some(Detail::Fields(fields)) => {
            let email = fields
                .iter()
                .any(|field| field.loc.iter().any(|part| part.as_str() == Some("email")));
            if email {
                "Введите корректный email адрес".to_string()
            } else {
                "Проверьте правильность заполнения полей".to_string()
            }
        }
        None => default.to_string(),
    }
}

/// Passes successful responses through and turns the rest into [`ServiceError::Api`].
pub(crate) fn expect_success(response: ApiResponse, default: &str) -> ServiceResult<ApiResponse> {
    if response.is_success() {
        return Ok(response);
    }
    let message = detail_message(&response.body, default);
    log::error!("request failed with {}: {message}", response.status);
    Err(ServiceError::Api(message))
}
