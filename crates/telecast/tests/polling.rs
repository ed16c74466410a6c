use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use telecast::prelude::*;
use telecast::core::{ResponseInfo, Transport};

/// Answers `getUpdates` with a fixed batch and records everything else.
struct ScriptedServer {
    updates: Value,
    sent: Mutex<Vec<(String, Value)>>,
}

#[async_trait]
impl Transport for ScriptedServer {
    async fn call(&self, method: &str, body: Map<String, Value>) -> ApiResult<Response> {
        let info = ResponseInfo {
            status: 200,
            elapsed: Duration::from_millis(3),
        };
        if method == "getUpdates" {
            return Ok(Response::new(method, self.updates.clone(), info));
        }
        self.sent
            .lock()
            .unwrap()
            .push((method.to_string(), Value::Object(body)));
        Ok(Response::new(method, json!({ "message_id": 100 }), info))
    }
}

fn server() -> Arc<ScriptedServer> {
    Arc::new(ScriptedServer {
        updates: json!([
            {
                "update_id": 10,
                "message": {
                    "message_id": 5,
                    "date": 1_500_000_000,
                    "from": { "id": 7, "is_bot": false, "first_name": "Ann" },
                    "chat": { "id": 7, "type": "private", "first_name": "Ann" },
                    "text": "1 < 2",
                },
            },
            {
                "update_id": 11,
                "callback_query": {
                    "id": "cb-1",
                    "from": { "id": 7, "is_bot": false, "first_name": "Ann" },
                    "chat_instance": "ci",
                    "data": "like",
                },
            },
        ]),
        sent: Mutex::new(Vec::new()),
    })
}

#[tokio::test]
async fn echo_round_trip() {
    let server = server();
    let bot = Bot::with_transport("123456:secret", "echo_bot", server.clone());

    let response = bot.execute(bot.get_updates(None, Some(10)).unwrap()).await.unwrap();
    let updates = response
        .updates()
        .unwrap()
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(updates.len(), 2);
    assert_eq!(response.next_offset(), Some(12));

    for update in &updates {
        match update.kind() {
            UpdateKind::Message => {
                let message = update.message().unwrap();
                let chat_id = message.chat().and_then(Chat::id).unwrap();
                let text = Bot::escape_html(message.text().unwrap());

                let mut reply = bot.send_message(chat_id, &text).unwrap();
                reply
                    .reply_to_message(message.id().unwrap())
                    .unwrap()
                    .set_notification(false)
                    .unwrap();
                bot.execute(reply).await.unwrap();
            }
            UpdateKind::CallbackQuery => {
                let query = update.callback_query().unwrap();
                assert_eq!(query.data(), Some("like"));
                let answer = CallbackAnswer {
                    text: Some("Thanks".into()),
                    ..Default::default()
                };
                let request = bot.answer_callback_query(query.id().unwrap(), &answer).unwrap();
                bot.execute(request).await.unwrap();
            }
            other => panic!("unexpected update kind {other}"),
        }
    }

    let sent = server.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].0, "sendMessage");
    assert_eq!(
        sent[0].1,
        json!({
            "chat_id": 7,
            "text": "1 &lt; 2",
            "parse_mode": "HTML",
            "reply_to_message_id": 5,
            "disable_notification": true,
        })
    );
    assert_eq!(sent[1].0, "answerCallbackQuery");
    assert_eq!(
        sent[1].1,
        json!({ "callback_query_id": "cb-1", "text": "Thanks" })
    );
}

#[tokio::test]
async fn unsupported_behavior_is_rejected_before_sending() {
    let server = server();
    let bot = Bot::with_transport("123456:secret", "echo_bot", server.clone());

    let mut request = bot.forward_message(1i64, 2i64, 3).unwrap();
    let err = request.set_parse_mode(ParseMode::Html).unwrap_err();
    assert!(err.is_pre_flight());
    assert!(matches!(
        err,
        ApiError::Capability { capability: Capability::ParseMode, .. }
    ));

    bot.execute(request).await.unwrap();
    let sent = server.sent.lock().unwrap();
    assert_eq!(sent[0].1, json!({ "chat_id": 1, "from_chat_id": 2, "message_id": 3 }));
}
