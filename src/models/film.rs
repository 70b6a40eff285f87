use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{EntityRef, SeanceResponse};

#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    pub id: String,
    pub name: String,
    pub duration: f64, // minutes
    pub seance_id: Option<String>,
}

/// Film payload accepted by POST and PUT
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveFilm {
    pub id: Option<String>,
    pub name: String,
    /// Running time in minutes
    pub duration: f64,
    #[serde(default)]
    pub seance: Option<EntityRef>,
}

/// Film as returned by the API, with the full seance chain inlined
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilmResponse {
    pub id: String,
    pub name: String,
    pub duration: f64,
    pub seance: Option<SeanceResponse>,
}
