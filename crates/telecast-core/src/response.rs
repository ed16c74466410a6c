//! API responses and envelope decoding.
//!
//! Every Bot API answer is a JSON envelope
//! `{ "ok": bool, "result"?: any, "description"?: string, "error_code"?: int }`.
//! [`decode_envelope`] turns the raw HTTP status and body into a [`Response`]
//! or the matching error. It is pure so that every transport shares the same
//! rules:
//!
//! 1. An empty or non-JSON body is [`TransportError::InvalidBody`].
//! 2. `ok: false` is [`ApiError::Remote`], whatever the HTTP status.
//! 3. Any other non-200 status is [`TransportError::HttpStatus`].
//! 4. A 200 body that is not an object with `ok: true` is
//!    [`TransportError::InvalidBody`].
//! 5. Everything else is a successful [`Response`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::{ApiError, ApiResult, EventError, EventResult, TransportError};
use crate::event::Update;

/// Transport metadata for a completed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseInfo {
    /// HTTP status code.
    pub status: u16,
    /// Wall time from sending the request to reading the body.
    pub elapsed: Duration,
}

/// A successful API call.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    method: String,
    result: Value,
    description: Option<String>,
    info: ResponseInfo,
}

impl Response {
    pub fn new(method: impl Into<String>, result: Value, info: ResponseInfo) -> Self {
        Self {
            method: method.into(),
            result,
            description: None,
            info,
        }
    }

    /// The method this response answers.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The envelope's `result` payload (`Null` when absent).
    pub fn result(&self) -> &Value {
        &self.result
    }

    /// Consumes the response, returning its `result` payload.
    pub fn into_result(self) -> Value {
        self.result
    }

    /// Optional human-readable note the API sent along with the result.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Transport metadata.
    pub fn info(&self) -> ResponseInfo {
        self.info
    }

    /// Deserializes the `result` payload into `T`.
    pub fn result_as<T: DeserializeOwned>(&self) -> ApiResult<T> {
        T::deserialize(&self.result)
            .map_err(|e| ApiError::serialization(std::any::type_name::<T>(), e.to_string()))
    }

    /// Splits a `getUpdates` result into parsed updates, one result per
    /// envelope in batch order.
    ///
    /// An envelope that fails [`Update::parse`] yields its error in place and
    /// does not affect its neighbours.
    ///
    /// # Errors
    ///
    /// [`EventError::Malformed`] if the result is not an array.
    pub fn updates(&self) -> EventResult<Vec<EventResult<Update>>> {
        Ok(self.update_items()?.iter().cloned().map(Update::parse).collect())
    }

    /// The `getUpdates` offset that confirms this whole batch: one past the
    /// highest `update_id` in it, including envelopes that fail to parse.
    ///
    /// `None` for an empty batch or a result that is not an array.
    pub fn next_offset(&self) -> Option<i64> {
        self.update_items()
            .ok()?
            .iter()
            .filter_map(|item| item.get("update_id").or_else(|| item.get("id")))
            .filter_map(Value::as_i64)
            .max()
            .map(|id| id + 1)
    }

    fn update_items(&self) -> EventResult<&[Value]> {
        match &self.result {
            Value::Array(items) => Ok(items),
            _ => Err(EventError::Malformed(format!(
                "{} result is not an array",
                self.method
            ))),
        }
    }
}

/// Decodes a raw API answer.
pub fn decode_envelope(
    method: &str,
    status: u16,
    body: &str,
    elapsed: Duration,
) -> ApiResult<Response> {
    let envelope = match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) | Err(_) => {
            return Err(TransportError::InvalidBody {
                status,
                body: body.to_string(),
            }
            .into());
        }
        Ok(value) => value,
    };

    if envelope.get("ok") == Some(&Value::Bool(false)) {
        let error_code = envelope
            .get("error_code")
            .and_then(Value::as_i64)
            .unwrap_or_else(|| i64::from(status));
        let description = envelope
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        warn!(method, error_code, %description, "API rejected request");
        return Err(ApiError::Remote {
            error_code,
            description,
        });
    }

    if status != 200 {
        return Err(TransportError::HttpStatus {
            status,
            body: body.to_string(),
        }
        .into());
    }

    let mut envelope = match envelope {
        Value::Object(map) if map.get("ok") == Some(&Value::Bool(true)) => map,
        _ => {
            warn!(method, status, "Response body is not an API envelope");
            return Err(TransportError::InvalidBody {
                status,
                body: body.to_string(),
            }
            .into());
        }
    };

    let description = envelope
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);
    let result = envelope.remove("result").unwrap_or(Value::Null);
    Ok(Response {
        method: method.to_string(),
        result,
        description,
        info: ResponseInfo { status, elapsed },
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::event::UpdateKind;

    fn decode(status: u16, body: &str) -> ApiResult<Response> {
        decode_envelope("getMe", status, body, Duration::from_millis(5))
    }

    #[test]
    fn test_empty_and_non_json_body() {
        for body in ["", "   ", "<html>bad gateway</html>", "null"] {
            match decode(200, body) {
                Err(ApiError::Transport(TransportError::InvalidBody { status, body: b })) => {
                    assert_eq!(status, 200);
                    assert_eq!(b, body);
                }
                other => panic!("unexpected result for {body:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_json_without_envelope() {
        for body in ["[1,2]", "42", r#"{"foo":1}"#, r#"{"ok":"false"}"#, r#"{"ok":1}"#] {
            match decode(200, body) {
                Err(ApiError::Transport(TransportError::InvalidBody { status, body: b })) => {
                    assert_eq!(status, 200);
                    assert_eq!(b, body);
                }
                other => panic!("unexpected result for {body:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_ok_without_result() {
        let response = decode(200, r#"{"ok":true}"#).unwrap();
        assert_eq!(response.result(), &Value::Null);
    }

    #[test]
    fn test_ok_false_is_remote_error() {
        let body = r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#;
        match decode(400, body) {
            Err(ApiError::Remote {
                error_code,
                description,
            }) => {
                assert_eq!(error_code, 400);
                assert_eq!(description, "Bad Request: chat not found");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_non_200_with_ok_body() {
        let err = decode(502, r#"{"ok":true,"result":true}"#).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Transport(TransportError::HttpStatus { status: 502, .. })
        ));
        assert_eq!(err.to_string(), "HTTP error #502");
    }

    #[test]
    fn test_success() {
        let response = decode(
            200,
            r#"{"ok":true,"result":{"id":42,"is_bot":true,"first_name":"Echo"}}"#,
        )
        .unwrap();
        assert_eq!(response.method(), "getMe");
        assert_eq!(response.result()["id"], json!(42));
        assert_eq!(response.info().status, 200);

        #[derive(Deserialize)]
        struct Me {
            id: i64,
            is_bot: bool,
        }
        let me: Me = response.result_as().unwrap();
        assert_eq!(me.id, 42);
        assert!(me.is_bot);
        assert!(matches!(
            response.result_as::<Vec<i64>>(),
            Err(ApiError::Serialization { .. })
        ));
    }

    #[test]
    fn test_updates_split() {
        let response = Response::new(
            "getUpdates",
            json!([
                { "update_id": 1, "message": { "message_id": 5, "date": 0, "chat": { "id": 1 } } },
                { "update_id": 2, "callback_query": { "id": "q", "data": "x" } },
            ]),
            ResponseInfo {
                status: 200,
                elapsed: Duration::ZERO,
            },
        );
        let updates = response.updates().unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].as_ref().unwrap().kind(), UpdateKind::Message);
        assert_eq!(updates[1].as_ref().unwrap().kind(), UpdateKind::CallbackQuery);
        assert_eq!(response.next_offset(), Some(3));

        let bad = Response::new("getUpdates", json!(true), response.info());
        assert!(matches!(bad.updates(), Err(EventError::Malformed(_))));
        assert_eq!(bad.next_offset(), None);

        let empty = Response::new("getUpdates", json!([]), response.info());
        assert!(empty.updates().unwrap().is_empty());
        assert_eq!(empty.next_offset(), None);
    }

    #[test]
    fn test_unknown_update_keeps_batch() {
        let response = Response::new(
            "getUpdates",
            json!([
                { "update_id": 1, "message": { "message_id": 5, "date": 0, "chat": { "id": 1 } } },
                { "update_id": 2, "poll": { "id": "p" } },
                { "update_id": 3, "message": { "message_id": 6, "date": 0, "chat": { "id": 1 } } },
            ]),
            ResponseInfo {
                status: 200,
                elapsed: Duration::ZERO,
            },
        );
        let updates = response.updates().unwrap();
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0].as_ref().unwrap().id(), 1);
        match &updates[1] {
            Err(err @ EventError::UnrecognizedEvent { .. }) => {
                assert_eq!(err.update_id(), Some(2));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(updates[2].as_ref().unwrap().id(), 3);
        assert_eq!(response.next_offset(), Some(4));
    }
}
