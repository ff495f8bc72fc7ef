//! Supabase (PostgREST) backed interview store

use crate::{
    config::Config,
    error::{ConfigError, StoreError},
    store::{InterviewRow, InterviewStore},
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, StatusCode,
};
use serde::Deserialize;

const INTERVIEWS_PATH: &str = "/rest/v1/interviews";
const INTERVIEW_SELECT: &str =
    "candidates(full_name),vacancies(job_title,job_description,recruiter_questions)";
// asks PostgREST for exactly one object instead of an array
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Error body PostgREST sends with non-success statuses
#[derive(Deserialize, Debug)]
struct PostgrestError {
    message: Option<String>,
}

/// Reads interviews through the project's REST endpoint using the service role key
#[derive(Debug)]
pub struct SupabaseStore {
    client: Client,
    interviews_url: String,
}

impl SupabaseStore {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let key = HeaderValue::from_str(&config.service_role_key)
            .map_err(|_| ConfigError::Client("service role key is not a valid header value".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.service_role_key))
            .map_err(|_| ConfigError::Client("service role key is not a valid header value".into()))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static(SINGLE_OBJECT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(SupabaseStore {
            client,
            interviews_url: format!("{}{}", config.supabase_url, INTERVIEWS_PATH),
        })
    }

    fn request(&self, interview_id: &str) -> Result<reqwest::Request, reqwest::Error> {
        let id_filter = format!("eq.{}", interview_id);
        self.client
            .get(&self.interviews_url)
            .query(&[("select", INTERVIEW_SELECT), ("id", id_filter.as_str())])
            .build()
    }
}

#[async_trait]
impl InterviewStore for SupabaseStore {
    async fn fetch_interview(&self, interview_id: &str) -> Result<Option<InterviewRow>, StoreError> {
        let request = self.request(interview_id)?;
        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status == StatusCode::NOT_ACCEPTABLE {
            // single-object mode matched no row
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }

        decode_row(&body).map(Some)
    }
}

fn rejection_message(body: &[u8]) -> String {
    serde_json::from_slice::<PostgrestError>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}

fn decode_row(body: &[u8]) -> Result<InterviewRow, StoreError> {
    let de = &mut serde_json::Deserializer::from_slice(body);
    serde_path_to_error::deserialize(de).map_err(|err| {
        let path = err.path().to_string();
        StoreError::Decode(format!("{}: {}", path, err.into_inner()))
    })
}
