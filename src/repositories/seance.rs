use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entity::seance::{self, ActiveModel, Column, Entity as SeanceEntity};
use crate::error::AppResult;
use crate::models::Seance;
use crate::repositories::Repository;

/// Seance repository for database operations
pub struct SeanceRepository {
    db: DatabaseConnection,
}

impl SeanceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Seance> for SeanceRepository {
    async fn find_all(&self) -> AppResult<Vec<Seance>> {
        let models = SeanceEntity::find()
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Seance>> {
        let model = SeanceEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;

        Ok(model.map(|m| m.into()))
    }

    async fn save(&self, record: Seance) -> AppResult<Seance> {
        let model = ActiveModel {
            id: Set(record.id.clone()),
            date: Set(record.date),
            salle_id: Set(record.salle_id.clone()),
        };

        SeanceEntity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([Column::Date, Column::SalleId])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(record)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        SeanceEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

impl From<seance::Model> for Seance {
    fn from(m: seance::Model) -> Self {
        Self {
            id: m.id,
            date: m.date,
            salle_id: m.salle_id,
        }
    }
}
