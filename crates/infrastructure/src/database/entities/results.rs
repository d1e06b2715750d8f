use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub result_number: i32,
    pub analysis_number: i32,
    pub sample_number: i32,
    pub id_user: i32,
    pub client_code: String,
    pub result_date: DateTimeWithTimeZone,
    #[sea_orm(column_name = "result", column_type = "Text")]
    pub value: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::analyses::Entity",
        from = "Column::AnalysisNumber",
        to = "super::analyses::Column::AnalysisNumber",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Analysis,
    #[sea_orm(has_many = "super::trials::Entity")]
    Trials,
}

impl Related<super::analyses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Analysis.def()
    }
}

impl Related<super::trials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
