use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entity::cinema::{self, ActiveModel, Column, Entity as CinemaEntity};
use crate::error::AppResult;
use crate::models::Cinema;
use crate::repositories::Repository;

/// Cinema repository for database operations
pub struct CinemaRepository {
    db: DatabaseConnection,
}

impl CinemaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Cinema> for CinemaRepository {
    async fn find_all(&self) -> AppResult<Vec<Cinema>> {
        let models = CinemaEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Cinema>> {
        let model = CinemaEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;

        Ok(model.map(|m| m.into()))
    }

    async fn save(&self, record: Cinema) -> AppResult<Cinema> {
        let model = ActiveModel {
            id: Set(record.id.clone()),
            name: Set(record.name.clone()),
        };

        CinemaEntity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_column(Column::Name)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(record)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        CinemaEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

// Conversion from SeaORM model to our domain model
impl From<cinema::Model> for Cinema {
    fn from(m: cinema::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}
