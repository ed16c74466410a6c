//! Test doubles for bot method tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};

use telecast_core::{ApiResult, Request, Response, ResponseInfo, Transport};

use super::Bot;

pub(crate) const TOKEN: &str = "123456:test-secret";

/// Records every call and answers `{"ok": true, "result": true}`.
#[derive(Default)]
pub(crate) struct Recorder {
    calls: Mutex<Vec<(String, Map<String, Value>)>>,
}

impl Recorder {
    pub(crate) fn calls(&self) -> Vec<(String, Map<String, Value>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for Recorder {
    async fn call(&self, method: &str, body: Map<String, Value>) -> ApiResult<Response> {
        self.calls.lock().unwrap().push((method.to_string(), body));
        Ok(Response::new(
            method,
            Value::Bool(true),
            ResponseInfo {
                status: 200,
                elapsed: Duration::ZERO,
            },
        ))
    }
}

pub(crate) fn recorder_bot() -> (Bot, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let bot = Bot::with_transport(TOKEN, "test_bot", recorder.clone());
    (bot, recorder)
}

pub(crate) fn bot() -> Bot {
    recorder_bot().0
}

/// The request body as JSON.
pub(crate) fn body(request: &Request) -> Value {
    Value::Object(request.render().unwrap())
}
