use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entity::film::{self, ActiveModel, Column, Entity as FilmEntity};
use crate::error::AppResult;
use crate::models::Film;
use crate::repositories::Repository;

/// Film repository for database operations
pub struct FilmRepository {
    db: DatabaseConnection,
}

impl FilmRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Film> for FilmRepository {
    async fn find_all(&self) -> AppResult<Vec<Film>> {
        let models = FilmEntity::find()
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Film>> {
        let model = FilmEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;

        Ok(model.map(|m| m.into()))
    }

    async fn save(&self, record: Film) -> AppResult<Film> {
        let model = ActiveModel {
            id: Set(record.id.clone()),
            name: Set(record.name.clone()),
            duration: Set(record.duration),
            seance_id: Set(record.seance_id.clone()),
        };

        FilmEntity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([Column::Name, Column::Duration, Column::SeanceId])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(record)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        FilmEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

impl From<film::Model> for Film {
    fn from(m: film::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            duration: m.duration,
            seance_id: m.seance_id,
        }
    }
}
