use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use roam_catalog::{markup, screen::NOT_FOUND_TEXT, PackageView, Screen};
use roam_core::{PackageId, ViewDriver};

use crate::{error::AppError, state::AppState};

const DEFAULT_PAGE_TITLE: &str = "Package Details";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/packages/{id}", get(package_page))
        .route("/packages/{id}/view", get(package_view))
}

/// Fetch and project one package. Each request is its own view activation.
async fn load_screen(state: &AppState, id: String) -> Screen {
    let driver = ViewDriver::new(state.source.clone());
    let snapshot = driver.load(PackageId::from(id)).await;
    Screen::from_state(&snapshot.state, &state.projection)
}

/// GET /packages/{id}
/// Full HTML page for a package, or the error / not-found screen.
async fn package_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    let screen = load_screen(&state, id).await;

    let (status, title) = match &screen {
        Screen::Package(view) => (StatusCode::OK, view.title.clone()),
        Screen::NotFound => (StatusCode::NOT_FOUND, DEFAULT_PAGE_TITLE.to_string()),
        Screen::Error(_) => (StatusCode::BAD_GATEWAY, DEFAULT_PAGE_TITLE.to_string()),
        Screen::Loading => (StatusCode::INTERNAL_SERVER_ERROR, DEFAULT_PAGE_TITLE.to_string()),
    };

    let body = state.chrome.page(&title, &markup::render_screen(&screen));
    (status, Html(body))
}

/// GET /packages/{id}/view
/// The render tree as JSON.
async fn package_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PackageView>, AppError> {
    match load_screen(&state, id).await {
        Screen::Package(view) => Ok(Json(*view)),
        Screen::NotFound => Err(AppError::NotFoundError(NOT_FOUND_TEXT.to_string())),
        Screen::Error(message) => Err(AppError::UpstreamError(message)),
        Screen::Loading => Err(AppError::InternalServerError(
            "Package fetch finished without an outcome".to_string(),
        )),
    }
}
