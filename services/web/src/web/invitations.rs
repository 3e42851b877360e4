//! services/web/src/web/invitations.rs
//!
//! HTML handlers: the landing page, the registration form and the shareable
//! invitation page.

use crate::error::AppError;
use crate::web::pages::{IndexPage, InvitationPage, RegisterPage};
use crate::web::state::AppState;
use askama::Template;
use axum::{
    extract::{Multipart, Path, State},
    response::{Html, Redirect},
};
use invitation_core::{to_view_model, CoverUpload, InvitationForm, InvitationInput};
use std::sync::Arc;

/// The multipart field carrying the cover photo.
pub const COVER_FIELD: &str = "cover_image";

/// Where a freshly created invitation can be viewed.
pub fn invitation_url(id: i64) -> String {
    format!("/invitation/{}", id)
}

pub async fn index_handler() -> Result<Html<String>, AppError> {
    Ok(Html(IndexPage.render()?))
}

pub async fn register_form_handler() -> Result<Html<String>, AppError> {
    Ok(Html(RegisterPage.render()?))
}

/// Create an invitation from the registration form.
///
/// Redirects to the new invitation's page on success.
#[utoipa::path(
    post,
    path = "/register",
    request_body(content_type = "multipart/form-data", description = "Wedding details and an optional `cover_image` file."),
    responses(
        (status = 303, description = "Invitation created, redirect to its page"),
        (status = 400, description = "A required field is missing or a date is malformed"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_invitation_handler(
    State(app_state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let (form, cover) = read_registration(multipart).await?;
    let input = InvitationInput::try_from(form)?;
    let id = app_state.invitations.create(input, cover).await?;
    Ok(Redirect::to(&invitation_url(id)))
}

/// Render the invitation page for `id`.
#[utoipa::path(
    get,
    path = "/invitation/{id}",
    params(
        ("id" = i64, Path, description = "The invitation id.")
    ),
    responses(
        (status = 200, description = "Rendered invitation page", body = String, content_type = "text/html"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Invitation not found")
    )
)]
pub async fn view_invitation_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let row = app_state
        .invitations
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound(id))?;
    let page = InvitationPage::new(to_view_model(&row));
    Ok(Html(page.render()?))
}

/// Splits a registration submission into its text fields and the cover file.
async fn read_registration(
    mut multipart: Multipart,
) -> Result<(InvitationForm, Option<CoverUpload>), AppError> {
    let mut form = InvitationForm::default();
    let mut cover = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == COVER_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;
            if !file_name.is_empty() {
                cover = Some(CoverUpload { file_name, data });
            }
        } else {
            let value = field.text().await?;
            form.set(&name, value);
        }
    }

    Ok((form, cover))
}
