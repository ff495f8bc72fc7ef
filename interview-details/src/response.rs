//! Response types

use crate::{details::InterviewDetails, error::LookupError};
use aws_lambda_events::encodings::Body;
use http::{
    header::{
        HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
        ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
    },
    Response, StatusCode,
};
use lamedh_http::IntoResponse;
use serde::Serialize;
use tracing::error;

const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// Error body, always `{"error": "..."}`
#[derive(Serialize, Debug)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Acknowledges a CORS pre-flight probe
pub fn preflight() -> Response<Body> {
    with_cors(Response::new(Body::from("ok")))
}

/// Serializes `payload` as the JSON body of a response with `status`
pub fn json<T: Serialize>(status: StatusCode, payload: &T) -> Result<Response<Body>, serde_json::Error> {
    let body = serde_json::to_string(payload)?;
    let mut response = with_cors(Response::new(Body::from(body)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(response)
}

fn with_cors(mut response: Response<Body>) -> Response<Body> {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS));
    response
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response<Body> {
        let message = self.to_string();
        match json(self.status(), &ErrorBody { error: &message }) {
            Ok(response) => response,
            Err(e) => {
                error!("failed to serialize error body: {}", e);
                let mut response = with_cors(Response::new(Body::Empty));
                *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                response
            }
        }
    }
}

impl IntoResponse for InterviewDetails {
    fn into_response(self) -> Response<Body> {
        json(StatusCode::OK, &self).unwrap_or_else(|e| {
            error!("failed to serialize interview details: {}", e);
            LookupError::UnexpectedFault(e.to_string()).into_response()
        })
    }
}
