use super::{db_error, parse_client_code, to_offset, to_utc};
use crate::database::entities::samples;
use async_trait::async_trait;
use chrono::Utc;
use domain::DomainError;
use domain::client::ClientCode;
use domain::sample::{NewSample, Sample, SampleRepository};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set, Unchanged,
};

pub struct SeaOrmSampleRepository {
    db: DatabaseConnection,
}

impl SeaOrmSampleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_sample(model: samples::Model) -> Result<Sample, DomainError> {
        Ok(Sample {
            sample_number: model.sample_number,
            client_code: parse_client_code(model.client_code)?,
            entry_date: to_utc(model.entry_date),
            description: model.description,
            sampling_date: model.sampling_date.map(to_utc),
            observations: model.observations,
            analysis_quantity: model.analysis_quantity,
        })
    }
}

#[async_trait]
impl SampleRepository for SeaOrmSampleRepository {
    async fn find_all(&self) -> Result<Vec<Sample>, DomainError> {
        let models = samples::Entity::find()
            .order_by_asc(samples::Column::SampleNumber)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::model_to_sample).collect()
    }

    async fn find_by_number(&self, sample_number: i32) -> Result<Option<Sample>, DomainError> {
        let model = samples::Entity::find_by_id(sample_number)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        model.map(Self::model_to_sample).transpose()
    }

    async fn insert(&self, sample: &NewSample) -> Result<Sample, DomainError> {
        let now = to_offset(Utc::now());

        let active_model = samples::ActiveModel {
            sample_number: NotSet,
            client_code: Set(sample.client_code.as_str().to_string()),
            entry_date: Set(to_offset(sample.entry_date)),
            description: Set(sample.description.clone()),
            sampling_date: Set(sample.sampling_date.map(to_offset)),
            observations: Set(sample.observations.clone()),
            analysis_quantity: Set(sample.analysis_quantity),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Self::model_to_sample(model)
    }

    async fn update(&self, sample: &Sample) -> Result<Sample, DomainError> {
        let active_model = samples::ActiveModel {
            sample_number: Unchanged(sample.sample_number),
            entry_date: Set(to_offset(sample.entry_date)),
            description: Set(sample.description.clone()),
            sampling_date: Set(sample.sampling_date.map(to_offset)),
            observations: Set(sample.observations.clone()),
            analysis_quantity: Set(sample.analysis_quantity),
            updated_at: Set(to_offset(Utc::now())),
            ..Default::default()
        };

        let model = active_model.update(&self.db).await.map_err(db_error)?;
        Self::model_to_sample(model)
    }

    async fn delete(&self, sample_number: i32) -> Result<bool, DomainError> {
        let res = samples::Entity::delete_by_id(sample_number)
            .exec(&self.db)
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected > 0)
    }

    async fn count_by_client(&self, code: &ClientCode) -> Result<u64, DomainError> {
        samples::Entity::find()
            .filter(samples::Column::ClientCode.eq(code.as_str()))
            .count(&self.db)
            .await
            .map_err(db_error)
    }
}
