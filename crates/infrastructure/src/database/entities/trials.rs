use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub trial_number: i32,
    pub analysis_number: i32,
    pub sample_number: i32,
    pub result_number: i32,
    pub id_role: i32,
    pub id_user: i32,
    pub client_code: String,
    pub emission_date: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::results::Entity",
        from = "Column::ResultNumber",
        to = "super::results::Column::ResultNumber",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    LabResult,
}

impl Related<super::results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LabResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
