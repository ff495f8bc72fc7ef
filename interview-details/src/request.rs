//! Inbound request decoding
//!
//! The runtime has already turned the proxy event into an
//! `http::Request<Body>`; what is left is to spot pre-flight probes and to pull
//! the interview id out of the JSON body.
use crate::error::LookupError;
use aws_lambda_events::encodings::Body;
use http::Method;
use lamedh_http::Request;
use serde_json::Value;
use std::str;

const INTERVIEW_ID_FIELD: &str = "interviewId";

/// Returns true for CORS pre-flight probes
pub fn is_preflight(request: &Request) -> bool {
    request.method() == Method::OPTIONS
}

/// Extracts the interview id from a JSON body of the form `{"interviewId": "..."}`.
///
/// Extra fields are ignored. Only falsy values count as a missing id: `null`,
/// `false`, `0` and the empty string. Any other non-string value is passed on
/// in its JSON text form and left for the store to match or reject.
pub fn interview_id(request: &Request) -> Result<String, LookupError> {
    let text = body_text(request.body())?;
    if text.trim().is_empty() {
        return Err(LookupError::MalformedRequest(LookupError::BODY_MISSING));
    }

    let payload: Value =
        serde_json::from_str(text).map_err(|_| LookupError::MalformedRequest(LookupError::BODY_NOT_JSON))?;

    match payload.get(INTERVIEW_ID_FIELD) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(LookupError::MissingIdentifier),
        Some(Value::String(id)) if id.is_empty() => Err(LookupError::MissingIdentifier),
        Some(Value::Number(n)) if n.as_f64().map_or(false, |f| f == 0.0) => Err(LookupError::MissingIdentifier),
        Some(Value::String(id)) => Ok(id.clone()),
        Some(other) => Ok(other.to_string()),
    }
}

fn body_text(body: &Body) -> Result<&str, LookupError> {
    match body {
        Body::Empty => Err(LookupError::MalformedRequest(LookupError::BODY_MISSING)),
        Body::Text(text) => Ok(text.as_str()),
        Body::Binary(bytes) => {
            str::from_utf8(bytes).map_err(|_| LookupError::MalformedRequest(LookupError::BODY_NOT_JSON))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{interview_id, is_preflight};
    use crate::error::LookupError;
    use aws_lambda_events::encodings::Body;
    use http::Method;
    use lamedh_http::Request;

    fn post<B: Into<Body>>(body: B) -> Request {
        http::Request::builder()
            .method(Method::POST)
            .uri("https://app.netlify.app/.netlify/functions/get-interview-details")
            .body(body.into())
            .expect("failed to build request")
    }

    #[test]
    fn detects_preflight() {
        let request = http::Request::builder()
            .method(Method::OPTIONS)
            .body(Body::Empty)
            .expect("failed to build request");
        assert!(is_preflight(&request));
        assert!(!is_preflight(&post(Body::Empty)));
    }

    #[test]
    fn extracts_string_id() {
        let id = interview_id(&post(r#"{"interviewId":"abc-123","extra":true}"#)).expect("failed to extract id");
        assert_eq!(id, "abc-123");
    }

    #[test]
    fn extracts_id_from_binary_body() {
        let id = interview_id(&post(Body::Binary(br#"{"interviewId":"abc-123"}"#.to_vec())))
            .expect("failed to extract id");
        assert_eq!(id, "abc-123");
    }

    #[test]
    fn numeric_ids_keep_their_json_form() {
        let id = interview_id(&post(r#"{"interviewId":42}"#)).expect("failed to extract id");
        assert_eq!(id, "42");
    }

    #[test]
    fn truthy_non_string_ids_are_passed_through() {
        for (body, expected) in &[
            (r#"{"interviewId":true}"#, "true"),
            (r#"{"interviewId":["abc"]}"#, r#"["abc"]"#),
            (r#"{"interviewId":{"id":"abc"}}"#, r#"{"id":"abc"}"#),
        ] {
            let id = interview_id(&post(*body)).expect("failed to extract id");
            assert_eq!(id, *expected);
        }
    }

    #[test]
    fn missing_body() {
        for body in vec![Body::Empty, Body::from("   ")] {
            match interview_id(&post(body)) {
                Err(LookupError::MalformedRequest(message)) => assert_eq!(message, "Request body is missing."),
                other => panic!("unexpected result {:?}", other),
            }
        }
    }

    #[test]
    fn unparseable_body() {
        for body in vec![Body::from("{interviewId:"), Body::Binary(vec![0xff, 0xfe])] {
            match interview_id(&post(body)) {
                Err(LookupError::MalformedRequest(message)) => {
                    assert_eq!(message, "Request body is not valid JSON.")
                }
                other => panic!("unexpected result {:?}", other),
            }
        }
    }

    #[test]
    fn falsy_ids_are_missing() {
        for body in &[
            r#"{}"#,
            r#"{"interviewId":null}"#,
            r#"{"interviewId":""}"#,
            r#"{"interviewId":0}"#,
            r#"{"interviewId":false}"#,
            r#"{"interviewId":0.0}"#,
            r#"["abc-123"]"#,
            r#""abc-123""#,
        ] {
            match interview_id(&post(*body)) {
                Err(LookupError::MissingIdentifier) => {}
                other => panic!("unexpected result for {}: {:?}", body, other),
            }
        }
    }
}
