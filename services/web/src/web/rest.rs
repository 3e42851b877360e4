//! services/web/src/web/rest.rs
//!
//! Contains the JSON endpoint for invitations and the master definition for
//! the OpenAPI specification.

use crate::error::AppError;
use crate::web::pages::cover_url;
use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::NaiveDate;
use invitation_core::{to_view_model, CeremonyEvent, InvitationView};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        get_invitation_handler,
        crate::web::invitations::create_invitation_handler,
        crate::web::invitations::view_invitation_handler,
    ),
    components(
        schemas(InvitationResponse, CeremonyEventResponse)
    ),
    tags(
        (name = "Wedding Invitations API", description = "Create and share wedding invitations.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response Structs
//=========================================================================================

/// A ceremony held before the wedding day.
#[derive(Serialize, ToSchema)]
pub struct CeremonyEventResponse {
    name: String,
    date: NaiveDate,
}

impl From<CeremonyEvent> for CeremonyEventResponse {
    fn from(event: CeremonyEvent) -> Self {
        Self {
            name: event.name,
            date: event.date,
        }
    }
}

/// The invitation as shown on its page.
#[derive(Serialize, ToSchema)]
pub struct InvitationResponse {
    id: i64,
    groom: String,
    bride: String,
    wedding_date: NaiveDate,
    city: String,
    story: String,
    cover_image_path: Option<String>,
    cover_url: Option<String>,
    events: Vec<CeremonyEventResponse>,
}

impl From<InvitationView> for InvitationResponse {
    fn from(view: InvitationView) -> Self {
        Self {
            id: view.id,
            cover_url: view.cover_image_path.as_deref().map(cover_url),
            groom: view.groom,
            bride: view.bride,
            wedding_date: view.wedding_date,
            city: view.city,
            story: view.story,
            cover_image_path: view.cover_image_path,
            events: view.events.into_iter().map(Into::into).collect(),
        }
    }
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Fetch an invitation's view-model as JSON.
#[utoipa::path(
    get,
    path = "/api/invitations/{id}",
    params(
        ("id" = i64, Path, description = "The invitation id.")
    ),
    responses(
        (status = 200, description = "The invitation", body = InvitationResponse),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Invitation not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_invitation_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<InvitationResponse>, AppError> {
    let row = app_state
        .invitations
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(Json(to_view_model(&row).into()))
}
