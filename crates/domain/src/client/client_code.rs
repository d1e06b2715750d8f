use crate::error::{DomainError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Value object representing a client's natural key
///
/// Rules:
/// - Must be non-empty
/// - Must contain only ASCII alphanumerics, underscore, and hyphen
/// - Max length 32 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClientCode(String);

impl ClientCode {
    pub const MAX_LEN: usize = 32;

    /// Create a new ClientCode with validation
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into().trim().to_string();

        if code.is_empty() {
            return Err(DomainError::validation("client_code cannot be empty"));
        }

        if code.len() > Self::MAX_LEN {
            return Err(DomainError::validation(format!(
                "client_code too long: {} chars (max {})",
                code.len(),
                Self::MAX_LEN
            )));
        }

        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(DomainError::validation(format!(
                "client_code {code} must contain only alphanumeric, underscore, and hyphen"
            )));
        }

        Ok(Self(code))
    }

    /// Code handed out for the n-th server-assigned client, e.g. `C-007`.
    pub fn from_sequence(n: i64) -> Self {
        Self(format!("C-{n:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ClientCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = crate::wire::text_or_number(deserializer)?;
        ClientCode::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_client_code() {
        let code = ClientCode::new("C-001").unwrap();
        assert_eq!(code.as_str(), "C-001");
    }

    #[test]
    fn test_empty_client_code() {
        assert_eq!(
            ClientCode::new("  ").unwrap_err(),
            DomainError::Validation("client_code cannot be empty".to_string())
        );
    }

    #[test]
    fn test_client_code_too_long() {
        assert!(ClientCode::new("C".repeat(33)).is_err());
    }

    #[test]
    fn test_client_code_invalid_characters() {
        assert!(ClientCode::new("C 001").is_err());
        assert!(ClientCode::new("C/001").is_err());
    }

    #[test]
    fn test_from_sequence_pads() {
        assert_eq!(ClientCode::from_sequence(7).as_str(), "C-007");
        assert_eq!(ClientCode::from_sequence(1234).as_str(), "C-1234");
    }

    #[test]
    fn test_deserialize_from_number() {
        let code: ClientCode = serde_json::from_value(json!(999)).unwrap();
        assert_eq!(code.as_str(), "999");
        assert_eq!(serde_json::to_value(&code).unwrap(), json!("999"));
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        assert!(serde_json::from_value::<ClientCode>(json!("bad code")).is_err());
    }
}
