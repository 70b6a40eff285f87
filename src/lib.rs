// Library crate for the cinema API
// Exports modules for use by the server binary and tests

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    create_cinema, create_film, create_salle, create_seance, delete_cinema, delete_film,
    delete_salle, delete_seance, get_cinema, get_film, get_salle, get_seance, list_cinemas,
    list_films, list_salles, list_seances, update_cinema, update_film, update_salle,
    update_seance,
};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Hello, Cinema API!" }))
        // Cinema routes
        .route("/cinemas", get(list_cinemas))
        .route("/cinemas/{id}", get(get_cinema))
        .route("/cinemas", post(create_cinema))
        .route("/cinemas", put(update_cinema))
        .route("/cinemas", delete(delete_cinema))
        // Salle routes
        .route("/salles", get(list_salles))
        .route("/salles/{id}", get(get_salle))
        .route("/salles", post(create_salle))
        .route("/salles", put(update_salle))
        .route("/salles", delete(delete_salle))
        // Seance routes
        .route("/seances", get(list_seances))
        .route("/seances/{id}", get(get_seance))
        .route("/seances", post(create_seance))
        .route("/seances", put(update_seance))
        .route("/seances", delete(delete_seance))
        // Film routes
        .route("/films", get(list_films))
        .route("/films/{id}", get(get_film))
        .route("/films", post(create_film))
        .route("/films", put(update_film))
        .route("/films", delete(delete_film))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
