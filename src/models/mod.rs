pub mod cinema;
pub mod film;
pub mod salle;
pub mod seance;

pub use cinema::*;
pub use film::*;
pub use salle::*;
pub use seance::*;

use serde::Deserialize;
use utoipa::ToSchema;

/// Identity part of an incoming payload.
///
/// Used for embedded references (`"cinema": {"id": "1", ...}`) and for DELETE bodies.
/// Any other field sent alongside the id is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct EntityRef {
    pub id: Option<String>,
}

impl EntityRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// Id carried by an optional embedded reference, if any
pub fn reference_id(reference: &Option<EntityRef>) -> Option<&str> {
    reference.as_ref().and_then(|r| r.id.as_deref())
}
