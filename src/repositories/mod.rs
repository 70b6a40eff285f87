pub mod cinema;
pub mod film;
pub mod memory;
pub mod salle;
pub mod seance;

pub use cinema::CinemaRepository;
pub use film::FilmRepository;
pub use memory::InMemoryRepository;
pub use salle::SalleRepository;
pub use seance::SeanceRepository;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Cinema, Film, Salle, Seance};

/// A stored record keyed by an opaque string id
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Persistence gateway shared by every entity vertical
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Record,
{
    /// List every stored record
    async fn find_all(&self) -> AppResult<Vec<T>>;

    /// Find record by ID, `None` on a miss
    async fn find_by_id(&self, id: &str) -> AppResult<Option<T>>;

    /// Insert the record, or overwrite the one with the same ID
    async fn save(&self, record: T) -> AppResult<T>;

    /// Delete record by ID; deleting an unknown ID is not an error
    async fn delete(&self, id: &str) -> AppResult<()>;
}

impl Record for Cinema {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Salle {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Seance {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Film {
    fn id(&self) -> &str {
        &self.id
    }
}
