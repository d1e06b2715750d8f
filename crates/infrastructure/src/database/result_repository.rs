use super::{db_error, parse_client_code, to_offset, to_utc};
use crate::database::entities::results;
use async_trait::async_trait;
use chrono::Utc;
use domain::DomainError;
use domain::lab_result::{LabResult, LabResultRepository, NewLabResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set, Unchanged,
};

pub struct SeaOrmLabResultRepository {
    db: DatabaseConnection,
}

impl SeaOrmLabResultRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_result(model: results::Model) -> Result<LabResult, DomainError> {
        Ok(LabResult {
            result_number: model.result_number,
            analysis_number: model.analysis_number,
            sample_number: model.sample_number,
            id_user: model.id_user,
            client_code: parse_client_code(model.client_code)?,
            result_date: to_utc(model.result_date),
            result: model.value,
        })
    }
}

#[async_trait]
impl LabResultRepository for SeaOrmLabResultRepository {
    async fn find_all(&self) -> Result<Vec<LabResult>, DomainError> {
        let models = results::Entity::find()
            .order_by_asc(results::Column::ResultNumber)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::model_to_result).collect()
    }

    async fn find_by_number(&self, result_number: i32) -> Result<Option<LabResult>, DomainError> {
        let model = results::Entity::find_by_id(result_number)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        model.map(Self::model_to_result).transpose()
    }

    async fn insert(&self, result: &NewLabResult) -> Result<LabResult, DomainError> {
        let now = to_offset(Utc::now());

        let active_model = results::ActiveModel {
            result_number: NotSet,
            analysis_number: Set(result.analysis_number),
            sample_number: Set(result.sample_number),
            id_user: Set(result.id_user),
            client_code: Set(result.client_code.as_str().to_string()),
            result_date: Set(to_offset(result.result_date)),
            value: Set(result.result.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Self::model_to_result(model)
    }

    async fn update(&self, result: &LabResult) -> Result<LabResult, DomainError> {
        let active_model = results::ActiveModel {
            result_number: Unchanged(result.result_number),
            result_date: Set(to_offset(result.result_date)),
            value: Set(result.result.clone()),
            updated_at: Set(to_offset(Utc::now())),
            ..Default::default()
        };

        let model = active_model.update(&self.db).await.map_err(db_error)?;
        Self::model_to_result(model)
    }

    async fn delete(&self, result_number: i32) -> Result<bool, DomainError> {
        let res = results::Entity::delete_by_id(result_number)
            .exec(&self.db)
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected > 0)
    }

    async fn count_by_analysis(&self, analysis_number: i32) -> Result<u64, DomainError> {
        results::Entity::find()
            .filter(results::Column::AnalysisNumber.eq(analysis_number))
            .count(&self.db)
            .await
            .map_err(db_error)
    }

    async fn count_by_user(&self, id_user: i32) -> Result<u64, DomainError> {
        results::Entity::find()
            .filter(results::Column::IdUser.eq(id_user))
            .count(&self.db)
            .await
            .map_err(db_error)
    }
}
