//! Inbound update parsing.
//!
//! An update envelope carries an identifier and exactly one of nine payload
//! keys. [`Update::parse`] picks the payload by a fixed priority order and
//! wraps it in the matching typed view:
//!
//! ```text
//! message              ─┐
//! edited_message        │
//! channel_post          ├─▶ Message
//! edited_channel_post  ─┘
//! inline_query         ───▶ InlineQuery
//! chosen_inline_result ───▶ ChosenInlineResult
//! callback_query       ───▶ CallbackQuery
//! shipping_query       ───▶ ShippingQuery
//! pre_checkout_query   ───▶ PreCheckoutQuery
//! ```
//!
//! A key counts as present only when its value is non-empty (not `null`,
//! `false`, `0`, `""`, `[]` or `{}`). If several keys are populated the
//! earliest in the order above wins.
//!
//! Views keep their raw JSON object. Scalar accessors read it directly;
//! nested views (senders, chats, reply targets) are built on first access
//! and cached for the life of the view.

mod message;
mod query;
mod timestamp;
mod user;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{EventError, EventResult};

pub use message::Message;
pub use query::{CallbackQuery, ChosenInlineResult, InlineQuery, PreCheckoutQuery, ShippingQuery};
pub use timestamp::Timestamp;
pub use user::{Chat, User};

// =============================================================================
// UpdateKind
// =============================================================================

/// Payload discriminant of an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    InlineQuery,
    ChosenInlineResult,
    CallbackQuery,
    ShippingQuery,
    PreCheckoutQuery,
}

impl UpdateKind {
    /// All kinds, in classification priority order.
    pub const ALL: [UpdateKind; 9] = [
        Self::Message,
        Self::EditedMessage,
        Self::ChannelPost,
        Self::EditedChannelPost,
        Self::InlineQuery,
        Self::ChosenInlineResult,
        Self::CallbackQuery,
        Self::ShippingQuery,
        Self::PreCheckoutQuery,
    ];

    /// The envelope key carrying this payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::EditedMessage => "edited_message",
            Self::ChannelPost => "channel_post",
            Self::EditedChannelPost => "edited_channel_post",
            Self::InlineQuery => "inline_query",
            Self::ChosenInlineResult => "chosen_inline_result",
            Self::CallbackQuery => "callback_query",
            Self::ShippingQuery => "shipping_query",
            Self::PreCheckoutQuery => "pre_checkout_query",
        }
    }

    /// Returns `true` for the four kinds whose payload is a message.
    pub fn is_message(self) -> bool {
        matches!(
            self,
            Self::Message | Self::EditedMessage | Self::ChannelPost | Self::EditedChannelPost
        )
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Update
// =============================================================================

/// Typed payload of an update.
#[derive(Debug, Clone)]
pub enum UpdatePayload {
    Message(Message),
    EditedMessage(Message),
    ChannelPost(Message),
    EditedChannelPost(Message),
    InlineQuery(InlineQuery),
    ChosenInlineResult(ChosenInlineResult),
    CallbackQuery(CallbackQuery),
    ShippingQuery(ShippingQuery),
    PreCheckoutQuery(PreCheckoutQuery),
}

impl UpdatePayload {
    fn new(kind: UpdateKind, raw: Map<String, Value>) -> Self {
        match kind {
            UpdateKind::Message => Self::Message(Message::new(raw)),
            UpdateKind::EditedMessage => Self::EditedMessage(Message::new(raw)),
            UpdateKind::ChannelPost => Self::ChannelPost(Message::new(raw)),
            UpdateKind::EditedChannelPost => Self::EditedChannelPost(Message::new(raw)),
            UpdateKind::InlineQuery => Self::InlineQuery(InlineQuery::new(raw)),
            UpdateKind::ChosenInlineResult => {
                Self::ChosenInlineResult(ChosenInlineResult::new(raw))
            }
            UpdateKind::CallbackQuery => Self::CallbackQuery(CallbackQuery::new(raw)),
            UpdateKind::ShippingQuery => Self::ShippingQuery(ShippingQuery::new(raw)),
            UpdateKind::PreCheckoutQuery => Self::PreCheckoutQuery(PreCheckoutQuery::new(raw)),
        }
    }

    /// Discriminant of this payload.
    pub fn kind(&self) -> UpdateKind {
        match self {
            Self::Message(_) => UpdateKind::Message,
            Self::EditedMessage(_) => UpdateKind::EditedMessage,
            Self::ChannelPost(_) => UpdateKind::ChannelPost,
            Self::EditedChannelPost(_) => UpdateKind::EditedChannelPost,
            Self::InlineQuery(_) => UpdateKind::InlineQuery,
            Self::ChosenInlineResult(_) => UpdateKind::ChosenInlineResult,
            Self::CallbackQuery(_) => UpdateKind::CallbackQuery,
            Self::ShippingQuery(_) => UpdateKind::ShippingQuery,
            Self::PreCheckoutQuery(_) => UpdateKind::PreCheckoutQuery,
        }
    }
}

/// One inbound update.
#[derive(Debug, Clone)]
pub struct Update {
    id: i64,
    payload: UpdatePayload,
}

impl Update {
    /// Classifies an envelope and wraps its payload.
    ///
    /// # Errors
    ///
    /// - [`EventError::Malformed`] if the envelope is not an object, has no
    ///   integer `update_id` (or `id`), or its payload is not an object.
    /// - [`EventError::UnrecognizedEvent`] if none of the nine payload keys
    ///   is populated.
    pub fn parse(envelope: Value) -> EventResult<Self> {
        let Value::Object(mut envelope) = envelope else {
            return Err(EventError::Malformed(
                "update envelope is not a JSON object".to_string(),
            ));
        };

        let id = envelope
            .get("update_id")
            .or_else(|| envelope.get("id"))
            .and_then(Value::as_i64);

        let kind = UpdateKind::ALL
            .into_iter()
            .find(|kind| envelope.get(kind.as_str()).is_some_and(is_populated))
            .ok_or_else(|| EventError::UnrecognizedEvent {
                update_id: id,
                keys: envelope.keys().cloned().collect(),
            })?;

        let id = id.ok_or_else(|| EventError::Malformed("missing update_id".to_string()))?;

        let Some(Value::Object(raw)) = envelope.remove(kind.as_str()) else {
            return Err(EventError::Malformed(format!(
                "{kind} payload is not a JSON object"
            )));
        };

        debug!(update_id = id, kind = kind.as_str(), "Classified update");
        Ok(Self {
            id,
            payload: UpdatePayload::new(kind, raw),
        })
    }

    /// Parses an envelope from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> EventResult<Self> {
        Self::parse(serde_json::from_slice(bytes)?)
    }

    /// Envelope identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Payload discriminant.
    pub fn kind(&self) -> UpdateKind {
        self.payload.kind()
    }

    pub fn payload(&self) -> &UpdatePayload {
        &self.payload
    }

    pub fn into_payload(self) -> UpdatePayload {
        self.payload
    }

    /// The message of any of the four message kinds.
    pub fn message(&self) -> Option<&Message> {
        match &self.payload {
            UpdatePayload::Message(m)
            | UpdatePayload::EditedMessage(m)
            | UpdatePayload::ChannelPost(m)
            | UpdatePayload::EditedChannelPost(m) => Some(m),
            _ => None,
        }
    }

    pub fn inline_query(&self) -> Option<&InlineQuery> {
        match &self.payload {
            UpdatePayload::InlineQuery(q) => Some(q),
            _ => None,
        }
    }

    pub fn chosen_inline_result(&self) -> Option<&ChosenInlineResult> {
        match &self.payload {
            UpdatePayload::ChosenInlineResult(r) => Some(r),
            _ => None,
        }
    }

    pub fn callback_query(&self) -> Option<&CallbackQuery> {
        match &self.payload {
            UpdatePayload::CallbackQuery(q) => Some(q),
            _ => None,
        }
    }

    pub fn shipping_query(&self) -> Option<&ShippingQuery> {
        match &self.payload {
            UpdatePayload::ShippingQuery(q) => Some(q),
            _ => None,
        }
    }

    pub fn pre_checkout_query(&self) -> Option<&PreCheckoutQuery> {
        match &self.payload {
            UpdatePayload::PreCheckoutQuery(q) => Some(q),
            _ => None,
        }
    }
}

impl FromStr for Update {
    type Err = EventError;

    fn from_str(s: &str) -> EventResult<Self> {
        Self::parse(serde_json::from_str(s)?)
    }
}

// =============================================================================
// Raw field access
// =============================================================================

/// Returns `false` for `null`, `false`, `0`, `""`, `[]` and `{}`.
fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Raw JSON object behind a view. Empty fields read as absent.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawObject(Map<String, Value>);

impl RawObject {
    pub(crate) fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub(crate) fn map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub(crate) fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| is_populated(v))
    }

    pub(crate) fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub(crate) fn i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Booleans read `false` when absent.
    pub(crate) fn bool(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub(crate) fn timestamp(&self, key: &str) -> Option<Timestamp> {
        self.i64(key).map(Timestamp::new)
    }

    pub(crate) fn object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    /// Resolves a lazily built nested view.
    pub(crate) fn view<'a, T>(
        &self,
        slot: &'a OnceLock<Option<T>>,
        key: &str,
        build: impl FnOnce(Map<String, Value>) -> T,
    ) -> Option<&'a T> {
        slot.get_or_init(|| self.object(key).cloned().map(build))
            .as_ref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_each_kind_classified() {
        for kind in UpdateKind::ALL {
            let mut envelope = json!({ "update_id": 100 });
            envelope[kind.as_str()] = json!({ "id": "x", "message_id": 1 });
            let update = Update::parse(envelope).unwrap();
            assert_eq!(update.kind(), kind);
            assert_eq!(update.payload().kind(), kind);
            assert_eq!(update.id(), 100);
            assert_eq!(update.message().is_some(), kind.is_message());
        }
    }

    #[test]
    fn test_priority_order() {
        let update = Update::parse(json!({
            "update_id": 1,
            "callback_query": { "id": "cb" },
            "edited_message": { "message_id": 2 },
            "pre_checkout_query": { "id": "pc" },
        }))
        .unwrap();
        assert_eq!(update.kind(), UpdateKind::EditedMessage);
    }

    #[test]
    fn test_empty_values_skipped() {
        let update = Update::parse(json!({
            "update_id": 3,
            "message": {},
            "edited_message": null,
            "channel_post": false,
            "inline_query": { "id": "iq", "query": "cats" },
        }))
        .unwrap();
        assert_eq!(update.kind(), UpdateKind::InlineQuery);
        assert_eq!(update.inline_query().unwrap().query(), Some("cats"));
    }

    #[test]
    fn test_unrecognized_lists_keys() {
        let err = Update::parse(json!({ "update_id": 4, "poll": { "id": "p" } })).unwrap_err();
        match err {
            EventError::UnrecognizedEvent { update_id, keys } => {
                assert_eq!(update_id, Some(4));
                assert_eq!(keys, vec!["update_id".to_string(), "poll".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(
            Update::parse(json!({})),
            Err(EventError::UnrecognizedEvent { update_id: None, .. })
        ));
    }

    #[test]
    fn test_malformed_envelopes() {
        assert!(matches!(
            Update::parse(json!([1, 2])),
            Err(EventError::Malformed(_))
        ));
        assert!(matches!(
            Update::parse(json!({ "message": { "message_id": 1 } })),
            Err(EventError::Malformed(_))
        ));
        assert!(matches!(
            Update::parse(json!({ "update_id": 1, "message": "text" })),
            Err(EventError::Malformed(_))
        ));
        assert!(matches!(
            "{not json".parse::<Update>(),
            Err(EventError::Malformed(_))
        ));
    }

    #[test]
    fn test_id_fallback_and_from_slice() {
        let update =
            Update::from_slice(br#"{"id": 9, "shipping_query": {"id": "s1"}}"#).unwrap();
        assert_eq!(update.id(), 9);
        assert_eq!(update.shipping_query().unwrap().id(), Some("s1"));
    }
}
