use std::sync::Arc;

use futures::future::try_join_all;

use crate::error::{AppError, AppResult};
use crate::models::{reference_id, EntityRef, Film, FilmResponse, SaveFilm};
use crate::repositories::Repository;
use crate::services::{assign_id, SeanceService};

#[derive(Clone)]
pub struct FilmService {
    repo: Arc<dyn Repository<Film>>,
    seances: SeanceService,
}

impl FilmService {
    pub fn new(repo: Arc<dyn Repository<Film>>, seances: SeanceService) -> Self {
        Self { repo, seances }
    }

    pub async fn find_all(&self) -> AppResult<Vec<FilmResponse>> {
        let films = self.repo.find_all().await?;
        try_join_all(films.into_iter().map(|f| self.to_response(f))).await
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<FilmResponse> {
        match self.repo.find_by_id(id).await? {
            Some(film) => self.to_response(film).await,
            None => Err(AppError::NotFound("Film".to_string())),
        }
    }

    /// Insert or overwrite a film; a referenced seance must exist
    pub async fn save(&self, payload: SaveFilm) -> AppResult<FilmResponse> {
        if !payload.duration.is_finite() || payload.duration < 0.0 {
            return Err(AppError::Validation(
                "duration must be a non-negative number of minutes".to_string(),
            ));
        }

        let seance = match reference_id(&payload.seance) {
            Some(seance_id) => Some(self.seances.find_by_id(seance_id).await?),
            None => None,
        };

        let film = Film {
            id: assign_id(payload.id),
            name: payload.name,
            duration: payload.duration,
            seance_id: seance.as_ref().map(|s| s.id.clone()),
        };

        let saved = self.repo.save(film).await?;
        tracing::info!(
            film_id = %saved.id,
            seance_id = ?saved.seance_id,
            "Film saved"
        );

        Ok(FilmResponse {
            id: saved.id,
            name: saved.name,
            duration: saved.duration,
            seance,
        })
    }

    pub async fn delete(&self, target: EntityRef) -> AppResult<()> {
        if let Some(id) = target.id {
            self.repo.delete(&id).await?;
            tracing::info!(film_id = %id, "Film deleted");
        }
        Ok(())
    }

    async fn to_response(&self, film: Film) -> AppResult<FilmResponse> {
        let seance = match film.seance_id.as_deref() {
            Some(seance_id) => self.seances.resolve(seance_id).await?,
            None => None,
        };

        Ok(FilmResponse {
            id: film.id,
            name: film.name,
            duration: film.duration,
            seance,
        })
    }
}
