use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::{EntityRef, SaveSeance, SeanceResponse};
use crate::state::AppState;

/// List all seances
#[utoipa::path(
    get,
    path = "/seances",
    responses(
        (status = 200, description = "List of seances", body = [SeanceResponse])
    ),
    tag = "Seances"
)]
pub async fn list_seances(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SeanceResponse>>> {
    let seances = state.seances.find_all().await?;
    Ok(Json(seances))
}

/// Get a seance by ID
#[utoipa::path(
    get,
    path = "/seances/{id}",
    params(
        ("id" = String, Path, description = "Seance ID")
    ),
    responses(
        (status = 200, description = "Seance details", body = SeanceResponse),
        (status = 404, description = "Seance not found")
    ),
    tag = "Seances"
)]
pub async fn get_seance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SeanceResponse>> {
    let seance = state.seances.find_by_id(&id).await?;
    Ok(Json(seance))
}

/// Create a seance (or overwrite the one with the same ID)
#[utoipa::path(
    post,
    path = "/seances",
    request_body = SaveSeance,
    responses(
        (status = 200, description = "Seance saved with its salle inlined", body = SeanceResponse),
        (status = 404, description = "Referenced salle not found")
    ),
    tag = "Seances"
)]
pub async fn create_seance(
    State(state): State<AppState>,
    Json(payload): Json<SaveSeance>,
) -> AppResult<Json<SeanceResponse>> {
    let seance = state.seances.save(payload).await?;
    Ok(Json(seance))
}

/// Update a seance; same upsert as create
#[utoipa::path(
    put,
    path = "/seances",
    request_body = SaveSeance,
    responses(
        (status = 200, description = "Seance saved with its salle inlined", body = SeanceResponse),
        (status = 404, description = "Referenced salle not found")
    ),
    tag = "Seances"
)]
pub async fn update_seance(
    State(state): State<AppState>,
    Json(payload): Json<SaveSeance>,
) -> AppResult<Json<SeanceResponse>> {
    let seance = state.seances.save(payload).await?;
    Ok(Json(seance))
}

/// Delete the seance identified by the request body
#[utoipa::path(
    delete,
    path = "/seances",
    request_body = EntityRef,
    responses(
        (status = 200, description = "Always true, even for an unknown ID", body = bool)
    ),
    tag = "Seances"
)]
pub async fn delete_seance(
    State(state): State<AppState>,
    Json(target): Json<EntityRef>,
) -> AppResult<Json<bool>> {
    state.seances.delete(target).await?;
    Ok(Json(true))
}
