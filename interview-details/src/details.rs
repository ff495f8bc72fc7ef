//! Projection of a stored interview into the response payload

use crate::store::{InterviewRow, VacancyRow};
use serde::Serialize;

pub const CANDIDATE_FALLBACK: &str = "Candidate";
pub const JOB_TITLE_FALLBACK: &str = "the position";
pub const JOB_DESCRIPTION_FALLBACK: &str = "No job description provided.";

/// Payload returned for a successful lookup
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InterviewDetails {
    pub candidate_name: String,
    pub job_title: String,
    pub job_description: String,
    pub questions: Vec<String>,
}

impl From<InterviewRow> for InterviewDetails {
    fn from(row: InterviewRow) -> Self {
        let candidate_name = row.candidates.and_then(|c| c.full_name);
        let VacancyRow {
            job_title,
            job_description,
            recruiter_questions,
        } = row.vacancies.unwrap_or_default();

        InterviewDetails {
            candidate_name: or_fallback(candidate_name, CANDIDATE_FALLBACK),
            job_title: or_fallback(job_title, JOB_TITLE_FALLBACK),
            job_description: or_fallback(job_description, JOB_DESCRIPTION_FALLBACK),
            questions: recruiter_questions
                .unwrap_or_default()
                .into_iter()
                .filter_map(|q| q.question)
                .collect(),
        }
    }
}

fn or_fallback(value: Option<String>, fallback: &str) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| fallback.to_string())
}
