use super::{db_error, parse_client_code, to_offset, to_utc};
use crate::database::entities::analyses;
use async_trait::async_trait;
use chrono::Utc;
use domain::DomainError;
use domain::analysis::{Analysis, AnalysisRepository, NewAnalysis};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set, Unchanged,
};

pub struct SeaOrmAnalysisRepository {
    db: DatabaseConnection,
}

impl SeaOrmAnalysisRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_analysis(model: analyses::Model) -> Result<Analysis, DomainError> {
        Ok(Analysis {
            analysis_number: model.analysis_number,
            id_user: model.id_user,
            sample_number: model.sample_number,
            client_code: parse_client_code(model.client_code)?,
            sow_date: to_utc(model.sow_date),
            type_analysis: model.type_analysis,
        })
    }
}

#[async_trait]
impl AnalysisRepository for SeaOrmAnalysisRepository {
    async fn find_all(&self) -> Result<Vec<Analysis>, DomainError> {
        let models = analyses::Entity::find()
            .order_by_asc(analyses::Column::AnalysisNumber)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::model_to_analysis).collect()
    }

    async fn find_by_number(
        &self,
        analysis_number: i32,
    ) -> Result<Option<Analysis>, DomainError> {
        let model = analyses::Entity::find_by_id(analysis_number)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        model.map(Self::model_to_analysis).transpose()
    }

    async fn insert(&self, analysis: &NewAnalysis) -> Result<Analysis, DomainError> {
        let now = to_offset(Utc::now());

        let active_model = analyses::ActiveModel {
            analysis_number: NotSet,
            id_user: Set(analysis.id_user),
            sample_number: Set(analysis.sample_number),
            client_code: Set(analysis.client_code.as_str().to_string()),
            sow_date: Set(to_offset(analysis.sow_date)),
            type_analysis: Set(analysis.type_analysis.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Self::model_to_analysis(model)
    }

    async fn update(&self, analysis: &Analysis) -> Result<Analysis, DomainError> {
        let active_model = analyses::ActiveModel {
            analysis_number: Unchanged(analysis.analysis_number),
            sow_date: Set(to_offset(analysis.sow_date)),
            type_analysis: Set(analysis.type_analysis.clone()),
            updated_at: Set(to_offset(Utc::now())),
            ..Default::default()
        };

        let model = active_model.update(&self.db).await.map_err(db_error)?;
        Self::model_to_analysis(model)
    }

    async fn delete(&self, analysis_number: i32) -> Result<bool, DomainError> {
        let res = analyses::Entity::delete_by_id(analysis_number)
            .exec(&self.db)
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected > 0)
    }

    async fn count_by_sample(&self, sample_number: i32) -> Result<u64, DomainError> {
        analyses::Entity::find()
            .filter(analyses::Column::SampleNumber.eq(sample_number))
            .count(&self.db)
            .await
            .map_err(db_error)
    }

    async fn count_by_user(&self, id_user: i32) -> Result<u64, DomainError> {
        analyses::Entity::find()
            .filter(analyses::Column::IdUser.eq(id_user))
            .count(&self.db)
            .await
            .map_err(db_error)
    }
}
