use axum::{extract::State, response::Html, routing::get, Json, Router};
use roam_catalog::{markup, DestinationGallery};
use roam_shared::Destination;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/destinations", get(gallery_page))
        .route("/destinations.json", get(list_destinations))
}

/// GET /destinations
async fn gallery_page(State(state): State<AppState>) -> Html<String> {
    let gallery = DestinationGallery;
    Html(state.chrome.page(gallery.heading(), &markup::render_gallery(&gallery)))
}

/// GET /destinations.json
async fn list_destinations() -> Json<Vec<Destination>> {
    Json(DestinationGallery.destinations().to_vec())
}
