use std::sync::Arc;

use futures::future::try_join_all;

use crate::error::{AppError, AppResult};
use crate::models::{reference_id, EntityRef, SaveSeance, Seance, SeanceResponse};
use crate::repositories::Repository;
use crate::services::{assign_id, SalleService};

#[derive(Clone)]
pub struct SeanceService {
    repo: Arc<dyn Repository<Seance>>,
    salles: SalleService,
}

impl SeanceService {
    pub fn new(repo: Arc<dyn Repository<Seance>>, salles: SalleService) -> Self {
        Self { repo, salles }
    }

    pub async fn find_all(&self) -> AppResult<Vec<SeanceResponse>> {
        let seances = self.repo.find_all().await?;
        try_join_all(seances.into_iter().map(|s| self.to_response(s))).await
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<SeanceResponse> {
        self.resolve(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Seance".to_string()))
    }

    /// Look up a seance referenced by another record; a dangling id yields `None`
    pub async fn resolve(&self, id: &str) -> AppResult<Option<SeanceResponse>> {
        match self.repo.find_by_id(id).await? {
            Some(seance) => Ok(Some(self.to_response(seance).await?)),
            None => Ok(None),
        }
    }

    /// Insert or overwrite a seance; a referenced salle must exist
    pub async fn save(&self, payload: SaveSeance) -> AppResult<SeanceResponse> {
        let salle = match reference_id(&payload.salle) {
            Some(salle_id) => Some(self.salles.find_by_id(salle_id).await?),
            None => None,
        };

        let seance = Seance {
            id: assign_id(payload.id),
            date: payload.date,
            salle_id: salle.as_ref().map(|s| s.id.clone()),
        };

        let saved = self.repo.save(seance).await?;
        tracing::info!(
            seance_id = %saved.id,
            salle_id = ?saved.salle_id,
            date = %saved.date,
            "Seance saved"
        );

        Ok(SeanceResponse {
            id: saved.id,
            date: saved.date,
            salle,
        })
    }

    pub async fn delete(&self, target: EntityRef) -> AppResult<()> {
        if let Some(id) = target.id {
            self.repo.delete(&id).await?;
            tracing::info!(seance_id = %id, "Seance deleted");
        }
        Ok(())
    }

    async fn to_response(&self, seance: Seance) -> AppResult<SeanceResponse> {
        let salle = match seance.salle_id.as_deref() {
            Some(salle_id) => self.salles.resolve(salle_id).await?,
            None => None,
        };

        Ok(SeanceResponse {
            id: seance.id,
            date: seance.date,
            salle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cinema, Salle, SaveCinema, SaveSalle};
    use crate::repositories::InMemoryRepository;
    use crate::services::CinemaService;
    use time::macros::date;

    async fn service_with_salle() -> SeanceService {
        let cinemas = CinemaService::new(Arc::new(InMemoryRepository::<Cinema>::new()));
        cinemas
            .save(SaveCinema {
                id: Some("c1".to_string()),
                name: "gaumont".to_string(),
            })
            .await
            .unwrap();

        let salles = SalleService::new(Arc::new(InMemoryRepository::<Salle>::new()), cinemas);
        salles
            .save(SaveSalle {
                id: Some("s1".to_string()),
                room_number: 3,
                seat_count: 120,
                cinema: Some(EntityRef::new("c1")),
            })
            .await
            .unwrap();

        SeanceService::new(Arc::new(InMemoryRepository::<Seance>::new()), salles)
    }

    #[tokio::test]
    async fn test_save_inlines_salle_and_cinema() {
        let service = service_with_salle().await;

        let saved = service
            .save(SaveSeance {
                id: Some("1".to_string()),
                date: date!(2024 - 06 - 01),
                salle: Some(EntityRef::new("s1")),
            })
            .await
            .unwrap();

        let salle = saved.salle.unwrap();
        assert_eq!(salle.room_number, 3);
        assert_eq!(salle.cinema.unwrap().name, "gaumont");

        let found = service.find_by_id("1").await.unwrap();
        assert_eq!(found.date, date!(2024 - 06 - 01));
        assert_eq!(found.salle.unwrap().id, "s1");
    }

    #[tokio::test]
    async fn test_save_with_unknown_salle_is_rejected() {
        let service = service_with_salle().await;

        let result = service
            .save(SaveSeance {
                id: Some("1".to_string()),
                date: date!(2024 - 06 - 01),
                salle: Some(EntityRef::new("nope")),
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(ref what)) if what == "Salle"));
        assert!(service.find_by_id("1").await.is_err());
    }

    #[tokio::test]
    async fn test_find_all_lists_every_seance() {
        let service = service_with_salle().await;
        for (id, day) in [("1", date!(2024 - 06 - 01)), ("2", date!(2024 - 06 - 02))] {
            service
                .save(SaveSeance {
                    id: Some(id.to_string()),
                    date: day,
                    salle: None,
                })
                .await
                .unwrap();
        }

        let all = service.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|s| s.salle.is_none()));
    }
}
