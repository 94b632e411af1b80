//! Session services: who is logged in, login and logout.

use crate::client::{ApiClient, Transport};
use crate::domain::user::CurrentUser;
use crate::forms::auth::LoginForm;
use crate::services::{ServiceError, ServiceResult, expect_success};

/// Loads the logged-in user; `None` when the backend does not answer with one.
pub async fn current_user<T: Transport>(client: &ApiClient<T>) -> ServiceResult<Option<CurrentUser>> {
    let response = client.get("/api/current_user").await?;

    if !response.is_success() {
        log::warn!("current user is unavailable: status {}", response.status);
        return Ok(None);
    }

    Ok(Some(response.json()?))
}

pub async fn login<T: Transport>(client: &ApiClient<T>, form: LoginForm) -> ServiceResult<()> {
    let form = form
        .normalized()
        .map_err(|_| ServiceError::Form("Заполните все поля".to_string()))?;

    let response = client.post_form("/api/auth/login", &form).await?;
    expect_success(response, "Ошибка входа")?;

    log::info!("logged in as {}", form.username);
    Ok(())
}

/// Ends the session and navigates to the login page.
pub async fn logout<T: Transport>(client: &ApiClient<T>) -> ServiceResult<()> {
    let response = client.post("/api/auth/logout").await?;
    expect_success(response, "Ошибка выхода")?;

    client.redirect_to_login();
    Ok(())
}
