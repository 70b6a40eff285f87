use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cinema {
    pub id: String,
    pub name: String,
}

/// Cinema payload accepted by POST and PUT
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveCinema {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CinemaResponse {
    pub id: String,
    pub name: String,
}

impl From<Cinema> for CinemaResponse {
    fn from(c: Cinema) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}
