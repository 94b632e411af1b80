use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{UserEmail, UserName};
use crate::domain::user::{NewUser, UpdateUser, User, UserRole};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Form data for registering a user.
pub struct AddUserForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Deserialize, Validate)]
/// Form data of the edit-user dialog.
pub struct EditUserForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub is_active: bool,
}

impl EditUserForm {
    /// Prefills the dialog from a listed user.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            is_active: user.is_active,
        }
    }
}

fn check_fields<F: Validate>(form: &F, name: &str, email: &str) -> Result<(), FormError> {
    if name.trim().is_empty() || email.trim().is_empty() {
        return Err(FormError::MissingFields);
    }
    form.validate()?;
    Ok(())
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

impl TryFrom<AddUserForm> for NewUser {
    type Error = FormError;

    fn try_from(form: AddUserForm) -> Result<Self, Self::Error> {
        let form = AddUserForm {
            name: trimmed(&form.name),
            email: trimmed(&form.email),
            ..form
        };
        check_fields(&form, &form.name, &form.email)?;

        Ok(NewUser {
            name: UserName::new(form.name)?,
            email: UserEmail::new(form.email)?,
            role: form.role,
        })
    }
}

impl TryFrom<EditUserForm> for UpdateUser {
    type Error = FormError;

    fn try_from(form: EditUserForm) -> Result<Self, Self::Error> {
        let form = EditUserForm {
            name: trimmed(&form.name),
            email: trimmed(&form.email),
            ..form
        };
        check_fields(&form, &form.name, &form.email)?;

        Ok(UpdateUser {
            name: UserName::new(form.name)?,
            email: UserEmail::new(form.email)?,
            role: form.role,
            is_active: form.is_active,
        })
    }
}
