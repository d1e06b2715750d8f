use crate::analysis::Analysis;
use crate::client::ClientCode;
use crate::error::{DomainError, Result};
use crate::lab_result::LabResult;
use crate::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issued report tying an analysis, its sample and its result together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    pub trial_number: i32,
    pub analysis_number: i32,
    pub sample_number: i32,
    pub result_number: i32,
    pub id_role: i32,
    pub id_user: i32,
    pub client_code: ClientCode,
    pub emission_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTrial {
    pub analysis_number: i32,
    pub sample_number: i32,
    pub result_number: i32,
    pub id_role: i32,
    pub id_user: i32,
    pub client_code: ClientCode,
    pub emission_date: DateTime<Utc>,
}

/// Body of `POST /trials`.
///
/// The issuing user defaults to the caller and then to the author of the
/// result; role and client are derived.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrial {
    pub analysis_number: i32,
    pub sample_number: i32,
    pub result_number: i32,
    #[serde(default)]
    pub id_user: Option<i32>,
    pub emission_date: DateTime<Utc>,
}

impl CreateTrial {
    /// Pick the issuing user id: body, then caller, then result author.
    pub fn issuer_id(&self, caller: Option<i32>, result: &LabResult) -> i32 {
        self.id_user.or(caller).unwrap_or(result.id_user)
    }

    pub fn into_new(self, analysis: &Analysis, result: &LabResult, issuer: &User) -> Result<NewTrial> {
        if analysis.analysis_number != self.analysis_number {
            return Err(DomainError::conflict(format!(
                "analysis {} does not match requested analysis {}",
                analysis.analysis_number, self.analysis_number
            )));
        }
        if analysis.sample_number != self.sample_number {
            return Err(DomainError::conflict(format!(
                "analysis {} was run on sample {}, not {}",
                analysis.analysis_number, analysis.sample_number, self.sample_number
            )));
        }
        if result.result_number != self.result_number
            || result.analysis_number != analysis.analysis_number
        {
            return Err(DomainError::conflict(format!(
                "result {} does not belong to analysis {}",
                self.result_number, analysis.analysis_number
            )));
        }
        let role = issuer.primary_role().ok_or_else(|| {
            DomainError::conflict(format!("user {} has no role to issue trials", issuer.id))
        })?;

        Ok(NewTrial {
            analysis_number: analysis.analysis_number,
            sample_number: analysis.sample_number,
            result_number: result.result_number,
            id_role: role.id(),
            id_user: issuer.id,
            client_code: analysis.client_code.clone(),
            emission_date: self.emission_date,
        })
    }
}

/// Body of `PATCH /trials/{trial_number}`. Only the emission date moves.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrialPatch {
    #[serde(default)]
    pub emission_date: Option<DateTime<Utc>>,
}

impl TrialPatch {
    pub fn is_empty(&self) -> bool {
        self.emission_date.is_none()
    }

    pub fn apply(self, trial: &mut Trial) {
        if let Some(emission_date) = self.emission_date {
            trial.emission_date = emission_date;
        }
    }
}
