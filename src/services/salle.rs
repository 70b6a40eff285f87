use std::sync::Arc;

use futures::future::try_join_all;

use crate::error::{AppError, AppResult};
use crate::models::{reference_id, EntityRef, Salle, SalleResponse, SaveSalle};
use crate::repositories::Repository;
use crate::services::{assign_id, CinemaService};

#[derive(Clone)]
pub struct SalleService {
    repo: Arc<dyn Repository<Salle>>,
    cinemas: CinemaService,
}

impl SalleService {
    pub fn new(repo: Arc<dyn Repository<Salle>>, cinemas: CinemaService) -> Self {
        Self { repo, cinemas }
    }

    pub async fn find_all(&self) -> AppResult<Vec<SalleResponse>> {
        let salles = self.repo.find_all().await?;
        try_join_all(salles.into_iter().map(|s| self.to_response(s))).await
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<SalleResponse> {
        self.resolve(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Salle".to_string()))
    }

    /// Look up a salle referenced by another record; a dangling id yields `None`
    pub async fn resolve(&self, id: &str) -> AppResult<Option<SalleResponse>> {
        match self.repo.find_by_id(id).await? {
            Some(salle) => Ok(Some(self.to_response(salle).await?)),
            None => Ok(None),
        }
    }

    /// Insert or overwrite a salle; a referenced cinema must exist
    pub async fn save(&self, payload: SaveSalle) -> AppResult<SalleResponse> {
        let cinema = match reference_id(&payload.cinema) {
            Some(cinema_id) => Some(self.cinemas.find_by_id(cinema_id).await?),
            None => None,
        };

        let salle = Salle {
            id: assign_id(payload.id),
            room_number: payload.room_number,
            seat_count: payload.seat_count,
            cinema_id: cinema.as_ref().map(|c| c.id.clone()),
        };

        let saved = self.repo.save(salle).await?;
        tracing::info!(
            salle_id = %saved.id,
            cinema_id = ?saved.cinema_id,
            "Salle saved"
        );

        Ok(SalleResponse {
            id: saved.id,
            room_number: saved.room_number,
            seat_count: saved.seat_count,
            cinema,
        })
    }

    pub async fn delete(&self, target: EntityRef) -> AppResult<()> {
        if let Some(id) = target.id {
            self.repo.delete(&id).await?;
            tracing::info!(salle_id = %id, "Salle deleted");
        }
        Ok(())
    }

    async fn to_response(&self, salle: Salle) -> AppResult<SalleResponse> {
        let cinema = match salle.cinema_id.as_deref() {
            Some(cinema_id) => self.cinemas.resolve(cinema_id).await?,
            None => None,
        };

        Ok(SalleResponse {
            id: salle.id,
            room_number: salle.room_number,
            seat_count: salle.seat_count,
            cinema,
        })
    }
}
