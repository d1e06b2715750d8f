use crate::client::ClientCode;
use crate::error::{DomainError, Result};
use crate::validation;
use crate::wire::nullable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A physical sample received from a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub sample_number: i32,
    pub client_code: ClientCode,
    pub entry_date: DateTime<Utc>,
    pub description: String,
    pub sampling_date: Option<DateTime<Utc>>,
    pub observations: Option<String>,
    pub analysis_quantity: i32,
}

impl Sample {
    fn check_dates(entry: DateTime<Utc>, sampling: Option<DateTime<Utc>>) -> Result<()> {
        match sampling {
            Some(sampling) if entry < sampling => Err(DomainError::validation(format!(
                "entry_date {entry} precedes sampling_date {sampling}"
            ))),
            _ => Ok(()),
        }
    }
}

/// Body of `POST /samples`, also the record handed to the repository.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewSample {
    pub client_code: ClientCode,
    pub entry_date: DateTime<Utc>,
    pub description: String,
    #[serde(default)]
    pub sampling_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub analysis_quantity: i32,
}

impl NewSample {
    pub fn validate(self) -> Result<Self> {
        Sample::check_dates(self.entry_date, self.sampling_date)?;
        Ok(Self {
            client_code: self.client_code,
            entry_date: self.entry_date,
            description: validation::required_text("description", &self.description)?,
            sampling_date: self.sampling_date,
            observations: validation::optional_text(self.observations.as_deref()),
            analysis_quantity: validation::non_negative(
                "analysis_quantity",
                self.analysis_quantity,
            )?,
        })
    }
}

/// Body of `PATCH /samples/{sample_number}`. The owning client is fixed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplePatch {
    #[serde(default)]
    pub entry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    /// `Some(None)` clears the stored date (`"sampling_date": null`).
    #[serde(default, deserialize_with = "nullable")]
    pub sampling_date: Option<Option<DateTime<Utc>>>,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub analysis_quantity: Option<i32>,
}

impl SamplePatch {
    pub fn is_empty(&self) -> bool {
        self.entry_date.is_none()
            && self.description.is_none()
            && self.sampling_date.is_none()
            && self.observations.is_none()
            && self.analysis_quantity.is_none()
    }

    pub fn apply(self, sample: &mut Sample) -> Result<()> {
        let description = self
            .description
            .map(|d| validation::required_text("description", &d))
            .transpose()?;
        let analysis_quantity = self
            .analysis_quantity
            .map(|q| validation::non_negative("analysis_quantity", q))
            .transpose()?;
        let entry_date = self.entry_date.unwrap_or(sample.entry_date);
        let sampling_date = self.sampling_date.unwrap_or(sample.sampling_date);
        Sample::check_dates(entry_date, sampling_date)?;

        sample.entry_date = entry_date;
        sample.sampling_date = sampling_date;
        if let Some(description) = description {
            sample.description = description;
        }
        if let Some(quantity) = analysis_quantity {
            sample.analysis_quantity = quantity;
        }
        if let Some(observations) = self.observations {
            sample.observations = validation::optional_text(Some(&observations));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> Sample {
        Sample {
            sample_number: 1,
            client_code: ClientCode::new("C-001").unwrap(),
            entry_date: Utc.with_ymd_and_hms(2025, 12, 16, 10, 0, 0).unwrap(),
            description: "Soil".to_string(),
            sampling_date: Some(Utc.with_ymd_and_hms(2025, 12, 15, 8, 0, 0).unwrap()),
            observations: None,
            analysis_quantity: 2,
        }
    }

    #[test]
    fn test_new_sample_decodes_and_validates() {
        let body: NewSample = serde_json::from_value(json!({
            "client_code": "C-001",
            "entry_date": "2025-12-16T10:00:00Z",
            "description": " Soil ",
            "sampling_date": "2025-12-15T08:00:00Z",
            "observations": "",
            "analysis_quantity": 3
        }))
        .unwrap();
        let body = body.validate().unwrap();
        assert_eq!(body.description, "Soil");
        assert_eq!(body.observations, None);
        assert_eq!(body.analysis_quantity, 3);
    }

    #[test]
    fn test_new_sample_missing_description() {
        let result = serde_json::from_value::<NewSample>(json!({
            "client_code": "C-001",
            "entry_date": "2025-12-16T10:00:00Z"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_sample_negative_quantity() {
        let body: NewSample = serde_json::from_value(json!({
            "client_code": "C-001",
            "entry_date": "2025-12-16T10:00:00Z",
            "description": "Soil",
            "analysis_quantity": -1
        }))
        .unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_entry_before_sampling_rejected() {
        let body: NewSample = serde_json::from_value(json!({
            "client_code": "C-001",
            "entry_date": "2025-12-14T10:00:00Z",
            "description": "Soil",
            "sampling_date": "2025-12-15T08:00:00Z"
        }))
        .unwrap();
        assert!(matches!(body.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_patch_fixture_body() {
        let mut s = sample();
        let patch: SamplePatch = serde_json::from_value(json!({
            "description": "Soil, sieved",
            "observations": "dry"
        }))
        .unwrap();
        patch.apply(&mut s).unwrap();
        assert_eq!(s.description, "Soil, sieved");
        assert_eq!(s.observations.as_deref(), Some("dry"));
        assert_eq!(s.sample_number, 1);
    }

    #[test]
    fn test_patch_checks_dates_against_stored_values() {
        let mut s = sample();
        let patch = SamplePatch {
            entry_date: Some(Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        assert!(patch.apply(&mut s).is_err());
        assert_eq!(s.entry_date, sample().entry_date);
    }

    #[test]
    fn test_patch_null_clears_sampling_date() {
        let mut s = sample();
        let patch: SamplePatch = serde_json::from_value(json!({"sampling_date": null})).unwrap();
        assert!(!patch.is_empty());
        patch.apply(&mut s).unwrap();
        assert_eq!(s.sampling_date, None);
        assert_eq!(s.entry_date, sample().entry_date);

        let untouched: SamplePatch = serde_json::from_value(json!({"observations": "wet"})).unwrap();
        let mut s = sample();
        untouched.apply(&mut s).unwrap();
        assert_eq!(s.sampling_date, sample().sampling_date);
    }

    #[test]
    fn test_patch_rejects_identifiers() {
        assert!(serde_json::from_value::<SamplePatch>(json!({"sample_number": 9})).is_err());
        assert!(serde_json::from_value::<SamplePatch>(json!({"client_code": "C-002"})).is_err());
    }
}
