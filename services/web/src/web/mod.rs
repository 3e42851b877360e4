pub mod invitations;
pub mod pages;
pub mod rest;
pub mod state;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use invitations::{
    create_invitation_handler, index_handler, register_form_handler, view_invitation_handler,
};
pub use rest::{get_invitation_handler, ApiDoc};
pub use state::AppState;

/// Builds the complete application router: HTML pages, the JSON endpoint,
/// uploaded covers and the Swagger UI.
pub fn build_router(app_state: Arc<AppState>) -> Router {
    let covers = ServeDir::new(&app_state.upload_dir);
    let body_limit = app_state.max_upload_bytes;

    let app_router = Router::new()
        .route("/", get(index_handler))
        .route(
            "/register",
            get(register_form_handler).post(create_invitation_handler),
        )
        .route("/invitation/{id}", get(view_invitation_handler))
        .route("/api/invitations/{id}", get(get_invitation_handler))
        .nest_service(pages::COVER_URL_PREFIX, covers)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(app_state);

    Router::new()
        .merge(app_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
