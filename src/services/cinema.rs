use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{Cinema, CinemaResponse, EntityRef, SaveCinema};
use crate::repositories::Repository;
use crate::services::assign_id;

#[derive(Clone)]
pub struct CinemaService {
    repo: Arc<dyn Repository<Cinema>>,
}

impl CinemaService {
    pub fn new(repo: Arc<dyn Repository<Cinema>>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> AppResult<Vec<CinemaResponse>> {
        let cinemas = self.repo.find_all().await?;
        Ok(cinemas.into_iter().map(|c| c.into()).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<CinemaResponse> {
        self.resolve(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cinema".to_string()))
    }

    /// Look up a cinema referenced by another record; a dangling id yields `None`
    pub async fn resolve(&self, id: &str) -> AppResult<Option<CinemaResponse>> {
        Ok(self.repo.find_by_id(id).await?.map(|c| c.into()))
    }

    /// Insert or overwrite a cinema
    pub async fn save(&self, payload: SaveCinema) -> AppResult<CinemaResponse> {
        let cinema = Cinema {
            id: assign_id(payload.id),
            name: payload.name,
        };

        let saved = self.repo.save(cinema).await?;
        tracing::info!(cinema_id = %saved.id, "Cinema saved");
        Ok(saved.into())
    }

    pub async fn delete(&self, target: EntityRef) -> AppResult<()> {
        if let Some(id) = target.id {
            self.repo.delete(&id).await?;
            tracing::info!(cinema_id = %id, "Cinema deleted");
        }
        Ok(())
    }
}
