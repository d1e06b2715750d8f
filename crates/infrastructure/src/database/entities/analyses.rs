use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "analyses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub analysis_number: i32,
    pub id_user: i32,
    pub sample_number: i32,
    pub client_code: String,
    pub sow_date: DateTimeWithTimeZone,
    pub type_analysis: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::samples::Entity",
        from = "Column::SampleNumber",
        to = "super::samples::Column::SampleNumber",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Sample,
    #[sea_orm(has_many = "super::results::Entity")]
    Results,
}

impl Related<super::samples::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sample.def()
    }
}

impl Related<super::results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Results.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
