use crate::analysis::Analysis;
use crate::client::ClientCode;
use crate::error::{DomainError, Result};
use crate::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome recorded for an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    pub result_number: i32,
    pub analysis_number: i32,
    pub sample_number: i32,
    pub id_user: i32,
    pub client_code: ClientCode,
    pub result_date: DateTime<Utc>,
    pub result: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLabResult {
    pub analysis_number: i32,
    pub sample_number: i32,
    pub id_user: i32,
    pub client_code: ClientCode,
    pub result_date: DateTime<Utc>,
    pub result: String,
}

/// Body of `POST /results`. Sample and client come from the analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLabResult {
    pub analysis_number: i32,
    pub id_user: i32,
    #[serde(default)]
    pub sample_number: Option<i32>,
    #[serde(default)]
    pub client_code: Option<ClientCode>,
    pub result_date: DateTime<Utc>,
    pub result: String,
}

impl CreateLabResult {
    pub fn validate(self) -> Result<Self> {
        Ok(Self {
            result: validation::required_text("result", &self.result)?,
            ..self
        })
    }

    pub fn into_new(self, analysis: &Analysis) -> Result<NewLabResult> {
        if let Some(sample_number) = self.sample_number {
            if sample_number != analysis.sample_number {
                return Err(DomainError::conflict(format!(
                    "analysis {} was run on sample {}, not {}",
                    analysis.analysis_number, analysis.sample_number, sample_number
                )));
            }
        }
        if let Some(code) = &self.client_code {
            if code != &analysis.client_code {
                return Err(DomainError::conflict(format!(
                    "analysis {} belongs to client {}, not {}",
                    analysis.analysis_number, analysis.client_code, code
                )));
            }
        }
        Ok(NewLabResult {
            analysis_number: analysis.analysis_number,
            sample_number: analysis.sample_number,
            id_user: self.id_user,
            client_code: analysis.client_code.clone(),
            result_date: self.result_date,
            result: self.result,
        })
    }
}

/// Body of `PATCH /results/{result_number}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabResultPatch {
    #[serde(default)]
    pub result_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub result: Option<String>,
}

impl LabResultPatch {
    pub fn is_empty(&self) -> bool {
        self.result_date.is_none() && self.result.is_none()
    }

    pub fn apply(self, lab_result: &mut LabResult) -> Result<()> {
        let result = self
            .result
            .map(|r| validation::required_text("result", &r))
            .transpose()?;

        if let Some(result_date) = self.result_date {
            lab_result.result_date = result_date;
        }
        if let Some(result) = result {
            lab_result.result = result;
        }
        Ok(())
    }
}
