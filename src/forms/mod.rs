//! Form definitions backing the staff operations.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod auth;
pub mod users;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("required fields are missing")]
    MissingFields,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid name")]
    InvalidName,
}

impl FormError {
    /// Message shown to the user next to the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            FormError::MissingFields | FormError::InvalidName => "Заполните все обязательные поля",
            FormError::InvalidEmail => "Введите корректный email адрес",
            FormError::Validation(errors) if errors.field_errors().contains_key("email") => {
                "Введите корректный email адрес"
            }
            FormError::Validation(_) => "Проверьте правильность заполнения полей",
        }
    }
}

impl From<TypeConstraintError> for FormError {
    fn from(err: TypeConstraintError) -> Self {
        match err {
            TypeConstraintError::InvalidEmail => FormError::InvalidEmail,
            _ => FormError::InvalidName,
        }
    }
}
