use super::{db_error, to_offset};
use crate::database::entities::users;
use async_trait::async_trait;
use chrono::Utc;
use domain::DomainError;
use domain::user::{NewUser, Role, User, UserRepository};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, Unchanged,
};

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_user(model: users::Model) -> Result<User, DomainError> {
        let roles: Vec<Role> = serde_json::from_value(model.roles).map_err(|e| {
            DomainError::Repository(format!("Invalid roles for user {}: {}", model.id, e))
        })?;

        Ok(User {
            id: model.id,
            name: model.name,
            username: model.username,
            roles,
            password_hash: model.password_hash,
        })
    }

    fn roles_json(roles: &[Role]) -> Result<serde_json::Value, DomainError> {
        serde_json::to_value(roles).map_err(|e| DomainError::Repository(e.to_string()))
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::model_to_user).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        model.map(Self::model_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_error)?;

        model.map(Self::model_to_user).transpose()
    }

    async fn insert(&self, user: &NewUser) -> Result<User, DomainError> {
        let now = to_offset(Utc::now());

        let active_model = users::ActiveModel {
            id: NotSet,
            name: Set(user.name.clone()),
            username: Set(user.username.clone()),
            password_hash: Set(user.password_hash.clone()),
            roles: Set(Self::roles_json(&user.roles)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Self::model_to_user(model)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let active_model = users::ActiveModel {
            id: Unchanged(user.id),
            name: Set(user.name.clone()),
            username: Set(user.username.clone()),
            password_hash: Set(user.password_hash.clone()),
            roles: Set(Self::roles_json(&user.roles)?),
            updated_at: Set(to_offset(Utc::now())),
            ..Default::default()
        };

        let model = active_model.update(&self.db).await.map_err(db_error)?;
        Self::model_to_user(model)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let res = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected > 0)
    }
}
