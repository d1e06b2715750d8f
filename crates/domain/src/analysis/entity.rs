use crate::client::ClientCode;
use crate::error::{DomainError, Result};
use crate::sample::Sample;
use crate::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An analysis ordered on a sample by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub analysis_number: i32,
    pub id_user: i32,
    pub sample_number: i32,
    pub client_code: ClientCode,
    pub sow_date: DateTime<Utc>,
    pub type_analysis: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalysis {
    pub id_user: i32,
    pub sample_number: i32,
    pub client_code: ClientCode,
    pub sow_date: DateTime<Utc>,
    pub type_analysis: String,
}

/// Body of `POST /analysis`. `client_code` is optional; it is taken from
/// the sample and, when given, must match it.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnalysis {
    pub id_user: i32,
    pub sample_number: i32,
    #[serde(default)]
    pub client_code: Option<ClientCode>,
    pub sow_date: DateTime<Utc>,
    pub type_analysis: String,
}

impl CreateAnalysis {
    pub fn validate(self) -> Result<Self> {
        Ok(Self {
            type_analysis: validation::required_text("type_analysis", &self.type_analysis)?,
            ..self
        })
    }

    pub fn into_new(self, sample: &Sample) -> Result<NewAnalysis> {
        if sample.sample_number != self.sample_number {
            return Err(DomainError::conflict(format!(
                "sample {} does not match requested sample {}",
                sample.sample_number, self.sample_number
            )));
        }
        if let Some(code) = &self.client_code {
            if code != &sample.client_code {
                return Err(DomainError::conflict(format!(
                    "sample {} belongs to client {}, not {}",
                    sample.sample_number, sample.client_code, code
                )));
            }
        }
        Ok(NewAnalysis {
            id_user: self.id_user,
            sample_number: sample.sample_number,
            client_code: sample.client_code.clone(),
            sow_date: self.sow_date,
            type_analysis: self.type_analysis,
        })
    }
}

/// Body of `PATCH /analysis/{analysis_number}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisPatch {
    #[serde(default)]
    pub sow_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub type_analysis: Option<String>,
}

impl AnalysisPatch {
    pub fn is_empty(&self) -> bool {
        self.sow_date.is_none() && self.type_analysis.is_none()
    }

    pub fn apply(self, analysis: &mut Analysis) -> Result<()> {
        let type_analysis = self
            .type_analysis
            .map(|t| validation::required_text("type_analysis", &t))
            .transpose()?;

        if let Some(sow_date) = self.sow_date {
            analysis.sow_date = sow_date;
        }
        if let Some(type_analysis) = type_analysis {
            analysis.type_analysis = type_analysis;
        }
        Ok(())
    }
}
