use super::{empty_patch, still_referenced};
use domain::DomainError;
use domain::client::{Client, ClientCode, ClientPatch, ClientRepository, CreateClient};
use domain::sample::SampleRepository;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ClientService {
    clients: Arc<dyn ClientRepository>,
    samples: Arc<dyn SampleRepository>,
}

impl ClientService {
    pub fn new(clients: Arc<dyn ClientRepository>, samples: Arc<dyn SampleRepository>) -> Self {
        Self { clients, samples }
    }

    pub async fn list(&self) -> Result<Vec<Client>, DomainError> {
        self.clients.find_all().await
    }

    pub async fn get(&self, code: &ClientCode) -> Result<Client, DomainError> {
        self.clients
            .find_by_code(code)
            .await?
            .ok_or_else(|| DomainError::not_found("Client", code))
    }

    pub async fn create(&self, input: CreateClient) -> Result<Client, DomainError> {
        let mut input = input.validate()?;

        let code = match input.client_code.take() {
            Some(code) => {
                if self.clients.find_by_code(&code).await?.is_some() {
                    return Err(DomainError::conflict(format!(
                        "client_code {code} already exists"
                    )));
                }
                code
            }
            None => self.next_free_code().await?,
        };

        let client = self.clients.insert(&input.into_client(code)).await?;
        info!(client_code = %client.client_code, "Client created");
        Ok(client)
    }

    pub async fn update(&self, code: &ClientCode, patch: ClientPatch) -> Result<Client, DomainError> {
        if patch.is_empty() {
            return Err(empty_patch());
        }
        let mut client = self.get(code).await?;
        patch.apply(&mut client)?;

        let client = self.clients.update(&client).await?;
        info!(client_code = %client.client_code, "Client updated");
        Ok(client)
    }

    pub async fn delete(&self, code: &ClientCode) -> Result<(), DomainError> {
        self.get(code).await?;

        let samples = self.samples.count_by_client(code).await?;
        if samples > 0 {
            return Err(still_referenced("client", code, "samples", samples));
        }

        if !self.clients.delete(code).await? {
            return Err(DomainError::not_found("Client", code));
        }
        info!(client_code = %code, "Client deleted");
        Ok(())
    }

    /// Draw from the sequence until a code nobody chose by hand comes up.
    async fn next_free_code(&self) -> Result<ClientCode, DomainError> {
        loop {
            let code = ClientCode::from_sequence(self.clients.next_sequence().await?);
            if self.clients.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
            debug!(client_code = %code, "Generated client_code already taken, drawing again");
        }
    }
}
