//! Interview store port and the row shapes it returns
//!
//! Rows mirror the nested select issued against the `interviews` table: the
//! interview's candidate and vacancy are embedded one-to-one, the vacancy's
//! recruiter questions one-to-many. Any level may be missing.

use crate::error::StoreError;
use async_trait::async_trait;
use serde::Deserialize;

/// One interview joined with its candidate and vacancy
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct InterviewRow {
    #[serde(default)]
    pub candidates: Option<CandidateRow>,
    #[serde(default)]
    pub vacancies: Option<VacancyRow>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct CandidateRow {
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct VacancyRow {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    /// Kept in storage order
    #[serde(default)]
    pub recruiter_questions: Option<Vec<RecruiterQuestionRow>>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct RecruiterQuestionRow {
    #[serde(default)]
    pub question: Option<String>,
}

/// Read access to interviews.
///
/// Implementations issue a single query and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterviewStore: Send + Sync {
    /// Fetches the interview whose id equals `interview_id`.
    ///
    /// `Ok(None)` means no interview matched.
    async fn fetch_interview(&self, interview_id: &str) -> Result<Option<InterviewRow>, StoreError>;
}
