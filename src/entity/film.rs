use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// Not `Eq`: duration is a float column
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "films")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub duration: f64,
    pub seance_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seance::Entity",
        from = "Column::SeanceId",
        to = "super::seance::Column::Id"
    )]
    Seance,
}

impl Related<super::seance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
