use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CinemaResponse, EntityRef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salle {
    pub id: String,
    pub room_number: i32,
    pub seat_count: i32,
    pub cinema_id: Option<String>,
}

/// Salle payload accepted by POST and PUT
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveSalle {
    pub id: Option<String>,
    pub room_number: i32,
    pub seat_count: i32,
    #[serde(default)]
    pub cinema: Option<EntityRef>,
}

/// Salle as returned by the API, with its cinema inlined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SalleResponse {
    pub id: String,
    pub room_number: i32,
    pub seat_count: i32,
    pub cinema: Option<CinemaResponse>,
}
