use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::forms::FormError;

#[derive(Debug, Deserialize, Serialize, Validate)]
/// Credentials posted to the login endpoint.
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Trims the username; the password is sent as typed.
    pub fn normalized(self) -> Result<Self, FormError> {
        let form = Self {
            username: self.username.trim().to_string(),
            password: self.password,
        };
        form.validate().map_err(|_| FormError::MissingFields)?;
        Ok(form)
    }
}
