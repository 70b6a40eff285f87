use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::ToSchema;

use crate::models::{EntityRef, SalleResponse};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seance {
    pub id: String,
    pub date: Date,
    pub salle_id: Option<String>,
}

/// Seance payload accepted by POST and PUT
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveSeance {
    pub id: Option<String>,
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date, example = "2024-06-01")]
    pub date: Date,
    #[serde(default)]
    pub salle: Option<EntityRef>,
}

/// Seance as returned by the API, with its salle (and that salle's cinema) inlined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeanceResponse {
    pub id: String,
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date, example = "2024-06-01")]
    pub date: Date,
    pub salle: Option<SalleResponse>,
}
