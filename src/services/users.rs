//! Services handling user administration.

use crate::client::{ApiClient, Transport};
use crate::domain::types::UserId;
use crate::domain::user::{NewUser, TemporaryPassword, UpdateUser, User};
use crate::forms::users::{AddUserForm, EditUserForm};
use crate::list::{ListController, LoadOutcome};
use crate::render::RowRenderer;
use crate::services::{ServiceError, ServiceResult, expect_success};
use crate::surface::Surface;

/// Validates the form and registers the user, returning their one-time password.
pub async fn create_user<T: Transport>(
    client: &ApiClient<T>,
    form: AddUserForm,
) -> ServiceResult<TemporaryPassword> {
    let new_user = NewUser::try_from(form).map_err(|err| {
        log::error!("Failed to validate form: {err}");
        err
    })?;

    let response = client.post_json("/api/users", &new_user).await?;
    let response = expect_success(response, "Ошибка при создании пользователя")?;

    log::info!("created user {}", new_user.email);
    Ok(response.json()?)
}

pub async fn update_user<T: Transport>(
    client: &ApiClient<T>,
    user_id: UserId,
    form: EditUserForm,
) -> ServiceResult<()> {
    let update = UpdateUser::try_from(form).map_err(|err| {
        log::error!("Failed to validate form: {err}");
        err
    })?;

    let response = client
        .patch_json(format!("/api/users/{user_id}"), &update)
        .await?;
    expect_success(response, "Ошибка сохранения")?;

    Ok(())
}

pub async fn reset_password<T: Transport>(
    client: &ApiClient<T>,
    user_id: UserId,
) -> ServiceResult<TemporaryPassword> {
    let response = client
        .post(format!("/api/users/{user_id}/reset-password"))
        .await?;
    let response = expect_success(response, "Ошибка сброса пароля")?;

    Ok(response.json()?)
}

/// Prefills the edit dialog from the user row currently listed.
pub fn edit_form<T, S, R>(
    list: &ListController<T, S, R>,
    user_id: UserId,
) -> ServiceResult<EditUserForm>
where
    T: Transport,
    S: Surface,
    R: RowRenderer<Item = User>,
{
    list.find_item(user_id.get())
        .map(|user| EditUserForm::from_user(&user))
        .ok_or(ServiceError::NotFound)
}

/// Creates the user and shows the first page of the list again.
pub async fn create_listed_user<T, S, R>(
    list: &ListController<T, S, R>,
    form: AddUserForm,
) -> ServiceResult<(TemporaryPassword, LoadOutcome<User>)>
where
    T: Transport,
    S: Surface,
    R: RowRenderer<Item = User>,
{
    let password = create_user(list.client(), form).await?;
    Ok((password, list.load_first_page().await))
}

/// Saves the user and reloads the page and filter the list is on.
pub async fn update_listed_user<T, S, R>(
    list: &ListController<T, S, R>,
    user_id: UserId,
    form: EditUserForm,
) -> ServiceResult<LoadOutcome<User>>
where
    T: Transport,
    S: Surface,
    R: RowRenderer<Item = User>,
{
    update_user(list.client(), user_id, form).await?;
    Ok(list.load().await)
}
