//! Lenient field decoding shared by the request types.
//!
//! Clients of the API send some textual fields as JSON numbers
//! (`"client_code": 999`, `"phoneNumber": 123456`). These helpers accept
//! both forms and normalise to a `String`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<TextOrNumber> for String {
    fn from(raw: TextOrNumber) -> Self {
        match raw {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Signed(n) => n.to_string(),
            TextOrNumber::Unsigned(n) => n.to_string(),
        }
    }
}

pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    TextOrNumber::deserialize(deserializer).map(String::from)
}

pub(crate) fn opt_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TextOrNumber>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

/// Tells an absent field (`None`) apart from an explicit `null` (`Some(None)`).
/// Pair with `#[serde(default)]`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "text_or_number")]
        code: String,
        #[serde(default, deserialize_with = "opt_text_or_number")]
        phone: Option<String>,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let probe: Probe = serde_json::from_value(json!({"code": 999, "phone": "099 123"})).unwrap();
        assert_eq!(probe.code, "999");
        assert_eq!(probe.phone.as_deref(), Some("099 123"));
    }

    #[test]
    fn test_missing_optional_is_none() {
        let probe: Probe = serde_json::from_value(json!({"code": "C-001"})).unwrap();
        assert_eq!(probe.phone, None);
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        note: Option<Option<String>>,
    }

    #[test]
    fn test_nullable_separates_null_from_absent() {
        let absent: Patch = serde_json::from_value(json!({})).unwrap();
        let null: Patch = serde_json::from_value(json!({"note": null})).unwrap();
        let set: Patch = serde_json::from_value(json!({"note": "x"})).unwrap();
        assert_eq!(absent.note, None);
        assert_eq!(null.note, Some(None));
        assert_eq!(set.note, Some(Some("x".to_string())));
    }

    #[test]
    fn test_rejects_other_types() {
        let result = serde_json::from_value::<Probe>(json!({"code": true}));
        assert!(result.is_err());
    }
}
