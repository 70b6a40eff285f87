use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::{CinemaResponse, EntityRef, SaveCinema};
use crate::state::AppState;

/// List all cinemas
#[utoipa::path(
    get,
    path = "/cinemas",
    responses(
        (status = 200, description = "List of cinemas", body = [CinemaResponse])
    ),
    tag = "Cinemas"
)]
pub async fn list_cinemas(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CinemaResponse>>> {
    let cinemas = state.cinemas.find_all().await?;
    Ok(Json(cinemas))
}

/// Get a cinema by ID
#[utoipa::path(
    get,
    path = "/cinemas/{id}",
    params(
        ("id" = String, Path, description = "Cinema ID")
    ),
    responses(
        (status = 200, description = "Cinema details", body = CinemaResponse),
        (status = 404, description = "Cinema not found")
    ),
    tag = "Cinemas"
)]
pub async fn get_cinema(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CinemaResponse>> {
    let cinema = state.cinemas.find_by_id(&id).await?;
    Ok(Json(cinema))
}

/// Create a cinema (or overwrite the one with the same ID)
#[utoipa::path(
    post,
    path = "/cinemas",
    request_body = SaveCinema,
    responses(
        (status = 200, description = "Cinema saved", body = CinemaResponse)
    ),
    tag = "Cinemas"
)]
pub async fn create_cinema(
    State(state): State<AppState>,
    Json(payload): Json<SaveCinema>,
) -> AppResult<Json<CinemaResponse>> {
    let cinema = state.cinemas.save(payload).await?;
    Ok(Json(cinema))
}

/// Update a cinema; same upsert as create
#[utoipa::path(
    put,
    path = "/cinemas",
    request_body = SaveCinema,
    responses(
        (status = 200, description = "Cinema saved", body = CinemaResponse)
    ),
    tag = "Cinemas"
)]
pub async fn update_cinema(
    State(state): State<AppState>,
    Json(payload): Json<SaveCinema>,
) -> AppResult<Json<CinemaResponse>> {
    let cinema = state.cinemas.save(payload).await?;
    Ok(Json(cinema))
}

/// Delete the cinema identified by the request body
#[utoipa::path(
    delete,
    path = "/cinemas",
    request_body = EntityRef,
    responses(
        (status = 200, description = "Always true, even for an unknown ID", body = bool)
    ),
    tag = "Cinemas"
)]
pub async fn delete_cinema(
    State(state): State<AppState>,
    Json(target): Json<EntityRef>,
) -> AppResult<Json<bool>> {
    state.cinemas.delete(target).await?;
    Ok(Json(true))
}
