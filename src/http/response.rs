//! Envelope rendering.
//!
//! # Responsibilities
//! - Serialize envelopes to JSON
//! - Apply the status line the builder emitted (200 otherwise)
//! - Wrap callback envelopes as JSONP script bodies when enabled
//!
//! # Design Decisions
//! - Only callback names made of JavaScript identifiers joined by `.` are
//!   wrapped; anything else is served as plain JSON
//! - `X-Content-Type-Options: nosniff` on every envelope response

use axum::{
    http::{
        header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::envelope::{ResponseEnvelope, StatusLine};

const JSON_CONTENT_TYPE: &str = "application/json";
const JSONP_CONTENT_TYPE: &str = "application/javascript; charset=utf-8";

/// An envelope paired with the status line its builder emitted.
#[derive(Debug)]
pub struct ApiResponse<T = Value> {
    pub envelope: ResponseEnvelope<T>,
    pub status_line: Option<StatusLine>,
    pub jsonp: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(envelope: ResponseEnvelope<T>, status_line: Option<StatusLine>) -> Self {
        Self {
            envelope,
            status_line,
            jsonp: true,
        }
    }

    pub fn with_jsonp(mut self, enabled: bool) -> Self {
        self.jsonp = enabled;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status_line
            .and_then(|line| StatusCode::from_u16(line.code).ok())
            .unwrap_or(StatusCode::OK)
    }

    fn jsonp_callback(&self) -> Option<&str> {
        if !self.jsonp {
            return None;
        }
        self.envelope
            .callback
            .as_deref()
            .filter(|name| is_safe_callback(name))
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match serde_json::to_string(&self.envelope) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize envelope");
                return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to serialize response")
                    .into_response();
            }
        };

        let (content_type, body) = match self.jsonp_callback() {
            Some(name) => (JSONP_CONTENT_TYPE, wrap_jsonp(name, &body)),
            None => (JSON_CONTENT_TYPE, body),
        };

        (
            status,
            [
                (CONTENT_TYPE, HeaderValue::from_static(content_type)),
                (X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
            ],
            body,
        )
            .into_response()
    }
}

/// `a`, `$cb`, `jQuery123_456`, `window.app.handle`
pub fn is_safe_callback(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 128
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        })
}

fn wrap_jsonp(name: &str, json: &str) -> String {
    // U+2028/U+2029 are legal in JSON strings but end a line in older JS engines.
    let json = json.replace('\u{2028}', "\\u2028").replace('\u{2029}', "\\u2029");
    format!("{name}({json});")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::EnvelopeCode;
    use axum::body::to_bytes;
    use serde_json::json;

    async fn render(response: ApiResponse) -> (StatusCode, String, String) {
        let response = response.into_response();
        let status = response.status();
        let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    fn envelope(callback: Option<&str>) -> ResponseEnvelope {
        let mut envelope = ResponseEnvelope::new("ok", EnvelopeCode::Success, Some(json!({ "n": 1 })));
        envelope.callback = callback.map(str::to_string);
        envelope
    }

    #[tokio::test]
    async fn plain_json_defaults_to_ok() {
        let (status, content_type, body) = render(ApiResponse::new(envelope(None), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, JSON_CONTENT_TYPE);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value, json!({ "message": "ok", "code": 200, "result": { "n": 1 } }));
    }

    #[tokio::test]
    async fn emitted_line_sets_the_status() {
        let mut env = envelope(None);
        env.code = EnvelopeCode::NotFound;
        let (status, _, _) = render(ApiResponse::new(env, Some(StatusLine::for_code(404)))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn callback_wraps_body() {
        let (_, content_type, body) = render(ApiResponse::new(envelope(Some("myFn")), None)).await;
        assert_eq!(content_type, JSONP_CONTENT_TYPE);
        assert!(body.starts_with("myFn({"));
        assert!(body.ends_with("});"));
        assert!(body.contains("\"__callback__\":\"myFn\""));
    }

    #[tokio::test]
    async fn unsafe_callback_or_disabled_jsonp_stays_json() {
        let (_, content_type, body) =
            render(ApiResponse::new(envelope(Some("alert(1)//")), None)).await;
        assert_eq!(content_type, JSON_CONTENT_TYPE);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["__callback__"], "alert(1)//");

        let (_, content_type, _) =
            render(ApiResponse::new(envelope(Some("myFn")), None).with_jsonp(false)).await;
        assert_eq!(content_type, JSON_CONTENT_TYPE);
    }

    #[test]
    fn callback_names() {
        for ok in ["a", "$", "_cb", "jQuery123_456", "window.app.handle"] {
            assert!(is_safe_callback(ok), "{ok}");
        }
        for bad in ["", "1abc", "a..b", "a.", "a b", "a(1)", "a;b", "<script>"] {
            assert!(!is_safe_callback(bad), "{bad}");
        }
    }

    #[test]
    fn line_separators_are_escaped() {
        assert_eq!(wrap_jsonp("f", "\"a\u{2028}b\""), "f(\"a\\u2028b\");");
    }
}
