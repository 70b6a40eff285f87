use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entity::salle::{self, ActiveModel, Column, Entity as SalleEntity};
use crate::error::AppResult;
use crate::models::Salle;
use crate::repositories::Repository;

/// Salle repository for database operations
pub struct SalleRepository {
    db: DatabaseConnection,
}

impl SalleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Salle> for SalleRepository {
    async fn find_all(&self) -> AppResult<Vec<Salle>> {
        let models = SalleEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Salle>> {
        let model = SalleEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;

        Ok(model.map(|m| m.into()))
    }

    async fn save(&self, record: Salle) -> AppResult<Salle> {
        let model = ActiveModel {
            id: Set(record.id.clone()),
            room_number: Set(record.room_number),
            seat_count: Set(record.seat_count),
            cinema_id: Set(record.cinema_id.clone()),
        };

        SalleEntity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([Column::RoomNumber, Column::SeatCount, Column::CinemaId])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(record)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        SalleEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

impl From<salle::Model> for Salle {
    fn from(m: salle::Model) -> Self {
        Self {
            id: m.id,
            room_number: m.room_number,
            seat_count: m.seat_count,
            cinema_id: m.cinema_id,
        }
    }
}
