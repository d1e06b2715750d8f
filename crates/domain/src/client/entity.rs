use super::ClientCode;
use crate::error::Result;
use crate::validation;
use crate::wire::opt_text_or_number;
use serde::{Deserialize, Serialize};

/// A laboratory customer. Samples are registered against a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub client_code: ClientCode,
    pub name: String,
    pub contact: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "addres")]
    pub address: Option<String>,
}

/// Body of `POST /clients`. `client_code` is assigned by the server when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    #[serde(default)]
    pub client_code: Option<ClientCode>,
    pub name: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(
        default,
        rename = "phoneNumber",
        alias = "phone_number",
        deserialize_with = "opt_text_or_number"
    )]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "addres")]
    pub address: Option<String>,
}

impl CreateClient {
    /// Normalise and validate the body without touching the store.
    pub fn validate(self) -> Result<Self> {
        let email = match validation::optional_text(self.email.as_deref()) {
            Some(e) => Some(validation::email(&e)?),
            None => None,
        };
        Ok(Self {
            client_code: self.client_code,
            name: validation::required_text("name", &self.name)?,
            contact: validation::optional_text(self.contact.as_deref()),
            phone_number: validation::optional_text(self.phone_number.as_deref()),
            email,
            address: validation::optional_text(self.address.as_deref()),
        })
    }

    pub fn into_client(self, client_code: ClientCode) -> Client {
        Client {
            client_code,
            name: self.name,
            contact: self.contact,
            phone_number: self.phone_number,
            email: self.email,
            address: self.address,
        }
    }
}

/// Body of `PATCH /clients/{client_code}`. The code itself cannot be changed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(
        default,
        rename = "phoneNumber",
        alias = "phone_number",
        deserialize_with = "opt_text_or_number"
    )]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "addres")]
    pub address: Option<String>,
}

impl ClientPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.contact.is_none()
            && self.phone_number.is_none()
            && self.email.is_none()
            && self.address.is_none()
    }

    /// Apply the patch. Nothing is written unless every field validates.
    pub fn apply(self, client: &mut Client) -> Result<()> {
        let name = self
            .name
            .map(|n| validation::required_text("name", &n))
            .transpose()?;
        // Blank clears the address, anything else must be a valid one
        let email = self
            .email
            .map(|e| {
                validation::optional_text(Some(&e))
                    .map(|e| validation::email(&e))
                    .transpose()
            })
            .transpose()?;

        if let Some(name) = name {
            client.name = name;
        }
        if let Some(email) = email {
            client.email = email;
        }
        if let Some(contact) = self.contact {
            client.contact = validation::optional_text(Some(&contact));
        }
        if let Some(phone) = self.phone_number {
            client.phone_number = validation::optional_text(Some(&phone));
        }
        if let Some(address) = self.address {
            client.address = validation::optional_text(Some(&address));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;
    use serde_json::json;

    fn acme() -> Client {
        Client {
            client_code: ClientCode::new("C-001").unwrap(),
            name: "ACME".to_string(),
            contact: None,
            phone_number: Some("123456".to_string()),
            email: Some("acme@test.com".to_string()),
            address: Some("Montevideo".to_string()),
        }
    }

    #[test]
    fn test_create_client_fixture_body() {
        let body: CreateClient =
            serde_json::from_value(json!({"name": "Nuevo Cliente", "contact": "Juan"})).unwrap();
        let body = body.validate().unwrap();
        assert!(body.client_code.is_none());

        let client = body.into_client(ClientCode::from_sequence(1));
        assert_eq!(client.client_code.as_str(), "C-001");
        assert_eq!(client.contact.as_deref(), Some("Juan"));
    }

    #[test]
    fn test_create_client_accepts_numeric_phone_and_misspelled_address() {
        let body: CreateClient = serde_json::from_value(json!({
            "name": "ACME",
            "phoneNumber": 123456,
            "email": "acme@test.com",
            "addres": "Montevideo"
        }))
        .unwrap();
        assert_eq!(body.phone_number.as_deref(), Some("123456"));
        assert_eq!(body.address.as_deref(), Some("Montevideo"));
    }

    #[test]
    fn test_create_client_missing_name_fails_to_decode() {
        assert!(serde_json::from_value::<CreateClient>(json!({"contact": "Juan"})).is_err());
    }

    #[test]
    fn test_create_client_rejects_bad_email() {
        let body: CreateClient =
            serde_json::from_value(json!({"name": "ACME", "email": "nope"})).unwrap();
        assert!(matches!(body.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_client_serializes_wire_names() {
        let value = serde_json::to_value(acme()).unwrap();
        assert_eq!(value["client_code"], "C-001");
        assert_eq!(value["phoneNumber"], "123456");
        assert_eq!(value["address"], "Montevideo");
    }

    #[test]
    fn test_patch_rejects_client_code() {
        let result = serde_json::from_value::<ClientPatch>(json!({"client_code": "C-002"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_is_atomic() {
        let mut client = acme();
        let patch = ClientPatch {
            name: Some("ACME SA".to_string()),
            email: Some("broken".to_string()),
            ..Default::default()
        };
        assert!(patch.apply(&mut client).is_err());
        assert_eq!(client.name, "ACME");
    }

    #[test]
    fn test_patch_clears_optional_with_blank() {
        let mut client = acme();
        let patch = ClientPatch {
            address: Some(String::new()),
            ..Default::default()
        };
        patch.apply(&mut client).unwrap();
        assert_eq!(client.address, None);
    }

    #[test]
    fn test_patch_clears_email_with_blank() {
        let mut client = acme();
        let patch: ClientPatch = serde_json::from_value(json!({"email": "  "})).unwrap();
        patch.apply(&mut client).unwrap();
        assert_eq!(client.email, None);

        let patch: ClientPatch = serde_json::from_value(json!({"email": " new@acme.test "})).unwrap();
        patch.apply(&mut client).unwrap();
        assert_eq!(client.email.as_deref(), Some("new@acme.test"));
    }
}
