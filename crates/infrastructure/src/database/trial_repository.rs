use super::{db_error, parse_client_code, to_offset, to_utc};
use crate::database::entities::trials;
use async_trait::async_trait;
use chrono::Utc;
use domain::DomainError;
use domain::trial::{NewTrial, Trial, TrialRepository};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set, Unchanged,
};

pub struct SeaOrmTrialRepository {
    db: DatabaseConnection,
}

impl SeaOrmTrialRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_trial(model: trials::Model) -> Result<Trial, DomainError> {
        Ok(Trial {
            trial_number: model.trial_number,
            analysis_number: model.analysis_number,
            sample_number: model.sample_number,
            result_number: model.result_number,
            id_role: model.id_role,
            id_user: model.id_user,
            client_code: parse_client_code(model.client_code)?,
            emission_date: to_utc(model.emission_date),
        })
    }
}

#[async_trait]
impl TrialRepository for SeaOrmTrialRepository {
    async fn find_all(&self) -> Result<Vec<Trial>, DomainError> {
        let models = trials::Entity::find()
            .order_by_asc(trials::Column::TrialNumber)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::model_to_trial).collect()
    }

    async fn find_by_number(&self, trial_number: i32) -> Result<Option<Trial>, DomainError> {
        let model = trials::Entity::find_by_id(trial_number)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        model.map(Self::model_to_trial).transpose()
    }

    async fn insert(&self, trial: &NewTrial) -> Result<Trial, DomainError> {
        let now = to_offset(Utc::now());

        let active_model = trials::ActiveModel {
            trial_number: NotSet,
            analysis_number: Set(trial.analysis_number),
            sample_number: Set(trial.sample_number),
            result_number: Set(trial.result_number),
            id_role: Set(trial.id_role),
            id_user: Set(trial.id_user),
            client_code: Set(trial.client_code.as_str().to_string()),
            emission_date: Set(to_offset(trial.emission_date)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Self::model_to_trial(model)
    }

    async fn update(&self, trial: &Trial) -> Result<Trial, DomainError> {
        let active_model = trials::ActiveModel {
            trial_number: Unchanged(trial.trial_number),
            emission_date: Set(to_offset(trial.emission_date)),
            updated_at: Set(to_offset(Utc::now())),
            ..Default::default()
        };

        let model = active_model.update(&self.db).await.map_err(db_error)?;
        Self::model_to_trial(model)
    }

    async fn delete(&self, trial_number: i32) -> Result<bool, DomainError> {
        let res = trials::Entity::delete_by_id(trial_number)
            .exec(&self.db)
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected > 0)
    }

    async fn count_by_result(&self, result_number: i32) -> Result<u64, DomainError> {
        trials::Entity::find()
            .filter(trials::Column::ResultNumber.eq(result_number))
            .count(&self.db)
            .await
            .map_err(db_error)
    }

    async fn count_by_user(&self, id_user: i32) -> Result<u64, DomainError> {
        trials::Entity::find()
            .filter(trials::Column::IdUser.eq(id_user))
            .count(&self.db)
            .await
            .map_err(db_error)
    }
}
