use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub date: TimeDate,
    pub salle_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::salle::Entity",
        from = "Column::SalleId",
        to = "super::salle::Column::Id"
    )]
    Salle,
    #[sea_orm(has_many = "super::film::Entity")]
    Films,
}

impl Related<super::salle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Salle.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Films.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
