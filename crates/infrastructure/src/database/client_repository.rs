use super::{db_error, parse_client_code, to_offset};
use crate::database::entities::{clients, sequences};
use async_trait::async_trait;
use chrono::Utc;
use domain::DomainError;
use domain::client::{Client, ClientCode, ClientRepository};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait, Unchanged,
};

const CLIENT_CODE_SEQUENCE: &str = "client_code";

pub struct SeaOrmClientRepository {
    db: DatabaseConnection,
}

impl SeaOrmClientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_client(model: clients::Model) -> Result<Client, DomainError> {
        Ok(Client {
            client_code: parse_client_code(model.client_code)?,
            name: model.name,
            contact: model.contact,
            phone_number: model.phone_number,
            email: model.email,
            address: model.address,
        })
    }
}

#[async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        let models = clients::Entity::find()
            .order_by_asc(clients::Column::ClientCode)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::model_to_client).collect()
    }

    async fn find_by_code(&self, code: &ClientCode) -> Result<Option<Client>, DomainError> {
        let model = clients::Entity::find_by_id(code.as_str().to_string())
            .one(&self.db)
            .await
            .map_err(db_error)?;

        model.map(Self::model_to_client).transpose()
    }

    async fn insert(&self, client: &Client) -> Result<Client, DomainError> {
        let now = to_offset(Utc::now());

        let active_model = clients::ActiveModel {
            client_code: Set(client.client_code.as_str().to_string()),
            name: Set(client.name.clone()),
            contact: Set(client.contact.clone()),
            phone_number: Set(client.phone_number.clone()),
            email: Set(client.email.clone()),
            address: Set(client.address.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Self::model_to_client(model)
    }

    async fn update(&self, client: &Client) -> Result<Client, DomainError> {
        let active_model = clients::ActiveModel {
            client_code: Unchanged(client.client_code.as_str().to_string()),
            name: Set(client.name.clone()),
            contact: Set(client.contact.clone()),
            phone_number: Set(client.phone_number.clone()),
            email: Set(client.email.clone()),
            address: Set(client.address.clone()),
            updated_at: Set(to_offset(Utc::now())),
            ..Default::default()
        };

        let model = active_model.update(&self.db).await.map_err(db_error)?;
        Self::model_to_client(model)
    }

    async fn delete(&self, code: &ClientCode) -> Result<bool, DomainError> {
        let res = clients::Entity::delete_by_id(code.as_str().to_string())
            .exec(&self.db)
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected > 0)
    }

    async fn next_sequence(&self) -> Result<i64, DomainError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let seed = sequences::ActiveModel {
            name: Set(CLIENT_CODE_SEQUENCE.to_string()),
            value: Set(0),
        };
        match sequences::Entity::insert(seed)
            .on_conflict(
                OnConflict::column(sequences::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
        {
            Ok(_) | Err(DbErr::RecordNotInserted) => {}
            Err(e) => return Err(db_error(e)),
        }

        // Increment in place so the row stays locked until commit
        sequences::Entity::update_many()
            .col_expr(
                sequences::Column::Value,
                Expr::col(sequences::Column::Value).add(1),
            )
            .filter(sequences::Column::Name.eq(CLIENT_CODE_SEQUENCE))
            .exec(&txn)
            .await
            .map_err(db_error)?;

        let row = sequences::Entity::find_by_id(CLIENT_CODE_SEQUENCE.to_string())
            .one(&txn)
            .await
            .map_err(db_error)?
            .ok_or_else(|| {
                DomainError::Repository(format!("sequence {CLIENT_CODE_SEQUENCE} missing"))
            })?;

        txn.commit().await.map_err(db_error)?;
        Ok(row.value)
    }
}
