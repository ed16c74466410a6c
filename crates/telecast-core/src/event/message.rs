use std::sync::OnceLock;

use serde_json::{Map, Value};

use super::{Chat, RawObject, Timestamp, User};

/// A message, channel post, or an edited version of either.
///
/// Nested views are built on first access and then returned by reference:
///
/// ```
/// use telecast_core::Update;
///
/// let update: Update = r#"{"update_id":1,"message":{"message_id":3,"date":0,
///     "chat":{"id":5,"type":"private"},"from":{"id":5,"first_name":"Ada"}}}"#
///     .parse()
///     .unwrap();
/// let message = update.message().unwrap();
/// assert!(std::ptr::eq(message.from().unwrap(), message.from().unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct Message {
    raw: RawObject,
    from: OnceLock<Option<User>>,
    chat: OnceLock<Option<Chat>>,
    forward_from: OnceLock<Option<User>>,
    forward_from_chat: OnceLock<Option<Chat>>,
    reply_to_message: OnceLock<Option<Box<Message>>>,
}

impl Message {
    pub(crate) fn new(raw: Map<String, Value>) -> Self {
        Self {
            raw: RawObject::new(raw),
            from: OnceLock::new(),
            chat: OnceLock::new(),
            forward_from: OnceLock::new(),
            forward_from_chat: OnceLock::new(),
            reply_to_message: OnceLock::new(),
        }
    }

    /// Message identifier, unique inside its chat.
    pub fn id(&self) -> Option<i64> {
        self.raw.i64("message_id")
    }

    /// Sender; absent for channel posts.
    pub fn from(&self) -> Option<&User> {
        self.raw.view(&self.from, "from", User::new)
    }

    pub fn date(&self) -> Option<Timestamp> {
        self.raw.timestamp("date")
    }

    pub fn chat(&self) -> Option<&Chat> {
        self.raw.view(&self.chat, "chat", Chat::new)
    }

    // ===== Forwarding =====

    /// Original sender of a forwarded message.
    pub fn forward_from(&self) -> Option<&User> {
        self.raw.view(&self.forward_from, "forward_from", User::new)
    }

    /// Original channel of a forwarded channel post.
    pub fn forward_from_chat(&self) -> Option<&Chat> {
        self.raw
            .view(&self.forward_from_chat, "forward_from_chat", Chat::new)
    }

    pub fn forward_from_message_id(&self) -> Option<i64> {
        self.raw.i64("forward_from_message_id")
    }

    pub fn forward_signature(&self) -> Option<&str> {
        self.raw.str("forward_signature")
    }

    pub fn forward_date(&self) -> Option<Timestamp> {
        self.raw.timestamp("forward_date")
    }

    // ===== Replies and edits =====

    /// The message this one replies to.
    pub fn reply_to_message(&self) -> Option<&Message> {
        self.raw
            .view(&self.reply_to_message, "reply_to_message", |raw| {
                Box::new(Message::new(raw))
            })
            .map(Box::as_ref)
    }

    pub fn edit_date(&self) -> Option<Timestamp> {
        self.raw.timestamp("edit_date")
    }

    pub fn author_signature(&self) -> Option<&str> {
        self.raw.str("author_signature")
    }

    // ===== Content =====

    pub fn text(&self) -> Option<&str> {
        self.raw.str("text")
    }

    pub fn caption(&self) -> Option<&str> {
        self.raw.str("caption")
    }

    /// Returns `true` if the text starts with `/`.
    pub fn is_command(&self) -> bool {
        self.text().is_some_and(|t| t.starts_with('/'))
    }

    /// The raw JSON object.
    pub fn raw(&self) -> &Map<String, Value> {
        self.raw.map()
    }
}
