use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::{EntityRef, SalleResponse, SaveSalle};
use crate::state::AppState;

/// List all salles
#[utoipa::path(
    get,
    path = "/salles",
    responses(
        (status = 200, description = "List of salles", body = [SalleResponse])
    ),
    tag = "Salles"
)]
pub async fn list_salles(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SalleResponse>>> {
    let salles = state.salles.find_all().await?;
    Ok(Json(salles))
}

/// Get a salle by ID
#[utoipa::path(
    get,
    path = "/salles/{id}",
    params(
        ("id" = String, Path, description = "Salle ID")
    ),
    responses(
        (status = 200, description = "Salle details", body = SalleResponse),
        (status = 404, description = "Salle not found")
    ),
    tag = "Salles"
)]
pub async fn get_salle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SalleResponse>> {
    let salle = state.salles.find_by_id(&id).await?;
    Ok(Json(salle))
}

/// Create a salle (or overwrite the one with the same ID)
#[utoipa::path(
    post,
    path = "/salles",
    request_body = SaveSalle,
    responses(
        (status = 200, description = "Salle saved with its cinema inlined", body = SalleResponse),
        (status = 404, description = "Referenced cinema not found")
    ),
    tag = "Salles"
)]
pub async fn create_salle(
    State(state): State<AppState>,
    Json(payload): Json<SaveSalle>,
) -> AppResult<Json<SalleResponse>> {
    let salle = state.salles.save(payload).await?;
    Ok(Json(salle))
}

/// Update a salle; same upsert as create
#[utoipa::path(
    put,
    path = "/salles",
    request_body = SaveSalle,
    responses(
        (status = 200, description = "Salle saved with its cinema inlined", body = SalleResponse),
        (status = 404, description = "Referenced cinema not found")
    ),
    tag = "Salles"
)]
pub async fn update_salle(
    State(state): State<AppState>,
    Json(payload): Json<SaveSalle>,
) -> AppResult<Json<SalleResponse>> {
    let salle = state.salles.save(payload).await?;
    Ok(Json(salle))
}

/// Delete the salle identified by the request body
#[utoipa::path(
    delete,
    path = "/salles",
    request_body = EntityRef,
    responses(
        (status = 200, description = "Always true, even for an unknown ID", body = bool)
    ),
    tag = "Salles"
)]
pub async fn delete_salle(
    State(state): State<AppState>,
    Json(target): Json<EntityRef>,
) -> AppResult<Json<bool>> {
    state.salles.delete(target).await?;
    Ok(Json(true))
}
