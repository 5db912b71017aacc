//! The envelope returned by every API operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::code::EnvelopeCode;

/// Envelope field that echoes the request's callback name.
pub const CALLBACK_FIELD: &str = "__callback__";

/// Uniform `{message, code, result}` response body.
///
/// `result` serializes as `null` when absent. A present JSON `null`
/// (`Some(Value::Null)`) is the same `null` on the wire and reads back as
/// `None`. `__callback__` is only present when the request carried a
/// `callback` parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T = Value> {
    pub message: String,

    pub code: EnvelopeCode,

    pub result: Option<T>,

    #[serde(rename = "__callback__", default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    pub fn new(message: impl Into<String>, code: EnvelopeCode, result: Option<T>) -> Self {
        Self {
            message: message.into(),
            code,
            result,
            callback: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_result_serializes_as_null() {
        let envelope: ResponseEnvelope = ResponseEnvelope::new("gone", EnvelopeCode::NotFound, None);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({ "message": "gone", "code": 404, "result": null }));
    }

    #[test]
    fn callback_uses_reserved_field_name() {
        let mut envelope = ResponseEnvelope::new("ok", EnvelopeCode::Success, Some(json!([1, 2])));
        envelope.callback = Some("myFn".to_string());
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value[CALLBACK_FIELD], "myFn");
        assert_eq!(value["result"], json!([1, 2]));
    }

    #[test]
    fn survives_a_wire_round_trip() {
        let mut envelope = ResponseEnvelope::new(
            "Photo created",
            EnvelopeCode::Created,
            Some(json!({ "id": "a1", "tags": ["x"], "size": 12.5 })),
        );
        envelope.callback = Some("jQuery.cb_1".to_string());

        let wire = serde_json::to_string(&envelope).unwrap();
        let parsed: ResponseEnvelope = serde_json::from_str(&wire).unwrap();
        assert_eq!(parsed, envelope);

        let null_result: ResponseEnvelope =
            ResponseEnvelope::new("Nothing", EnvelopeCode::Success, Some(Value::Null));
        let parsed: ResponseEnvelope =
            serde_json::from_str(&serde_json::to_string(&null_result).unwrap()).unwrap();
        assert_eq!(parsed.result, None);

        let bare: ResponseEnvelope = ResponseEnvelope::new("Nothing", EnvelopeCode::Success, None);
        let parsed: ResponseEnvelope =
            serde_json::from_str(&serde_json::to_string(&bare).unwrap()).unwrap();
        assert_eq!(parsed, bare);
    }
}
