use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "salles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub room_number: i32,
    pub seat_count: i32,
    pub cinema_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cinema::Entity",
        from = "Column::CinemaId",
        to = "super::cinema::Column::Id"
    )]
    Cinema,
    #[sea_orm(has_many = "super::seance::Entity")]
    Seances,
}

impl Related<super::cinema::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cinema.def()
    }
}

impl Related<super::seance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
