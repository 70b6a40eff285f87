pub mod cinema;
pub mod film;
pub mod salle;
pub mod seance;

pub use cinema::CinemaService;
pub use film::FilmService;
pub use salle::SalleService;
pub use seance::SeanceService;

use uuid::Uuid;

/// Keep a caller-supplied id, or assign a fresh one for new records
pub(crate) fn assign_id(id: Option<String>) -> String {
    match id {
        Some(id) if !id.trim().is_empty() => id,
        _ => Uuid::new_v4().to_string(),
    }
}
