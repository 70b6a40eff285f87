use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::{EntityRef, FilmResponse, SaveFilm};
use crate::state::AppState;

/// List all films
#[utoipa::path(
    get,
    path = "/films",
    responses(
        (status = 200, description = "List of films", body = [FilmResponse])
    ),
    tag = "Films"
)]
pub async fn list_films(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FilmResponse>>> {
    let films = state.films.find_all().await?;
    Ok(Json(films))
}

/// Get a film by ID
#[utoipa::path(
    get,
    path = "/films/{id}",
    params(
        ("id" = String, Path, description = "Film ID")
    ),
    responses(
        (status = 200, description = "Film details", body = FilmResponse),
        (status = 404, description = "Film not found")
    ),
    tag = "Films"
)]
pub async fn get_film(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<FilmResponse>> {
    let film = state.films.find_by_id(&id).await?;
    Ok(Json(film))
}

/// Create a film (or overwrite the one with the same ID)
#[utoipa::path(
    post,
    path = "/films",
    request_body = SaveFilm,
    responses(
        (status = 200, description = "Film saved with its seance inlined", body = FilmResponse),
        (status = 400, description = "Negative duration"),
        (status = 404, description = "Referenced seance not found")
    ),
    tag = "Films"
)]
pub async fn create_film(
    State(state): State<AppState>,
    Json(payload): Json<SaveFilm>,
) -> AppResult<Json<FilmResponse>> {
    let film = state.films.save(payload).await?;
    Ok(Json(film))
}

/// Update a film; same upsert as create
#[utoipa::path(
    put,
    path = "/films",
    request_body = SaveFilm,
    responses(
        (status = 200, description = "Film saved with its seance inlined", body = FilmResponse),
        (status = 400, description = "Negative duration"),
        (status = 404, description = "Referenced seance not found")
    ),
    tag = "Films"
)]
pub async fn update_film(
    State(state): State<AppState>,
    Json(payload): Json<SaveFilm>,
) -> AppResult<Json<FilmResponse>> {
    let film = state.films.save(payload).await?;
    Ok(Json(film))
}

/// Delete the film identified by the request body
#[utoipa::path(
    delete,
    path = "/films",
    request_body = EntityRef,
    responses(
        (status = 200, description = "Always true, even for an unknown ID", body = bool)
    ),
    tag = "Films"
)]
pub async fn delete_film(
    State(state): State<AppState>,
    Json(target): Json<EntityRef>,
) -> AppResult<Json<bool>> {
    state.films.delete(target).await?;
    Ok(Json(true))
}
