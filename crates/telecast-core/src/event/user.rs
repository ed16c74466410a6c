use serde_json::{Map, Value};

use super::RawObject;

/// A user or bot account.
#[derive(Debug, Clone)]
pub struct User {
    raw: RawObject,
}

impl User {
    pub(crate) fn new(raw: Map<String, Value>) -> Self {
        Self {
            raw: RawObject::new(raw),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.raw.i64("id")
    }

    pub fn is_bot(&self) -> bool {
        self.raw.bool("is_bot")
    }

    pub fn first_name(&self) -> Option<&str> {
        self.raw.str("first_name")
    }

    pub fn last_name(&self) -> Option<&str> {
        self.raw.str("last_name")
    }

    pub fn username(&self) -> Option<&str> {
        self.raw.str("username")
    }

    /// IETF language tag of the user's client.
    pub fn language_code(&self) -> Option<&str> {
        self.raw.str("language_code")
    }

    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        match (self.first_name(), self.last_name()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) => String::new(),
        }
    }

    /// The raw JSON object.
    pub fn raw(&self) -> &Map<String, Value> {
        self.raw.map()
    }
}

/// A private chat, group, supergroup or channel.
#[derive(Debug, Clone)]
pub struct Chat {
    raw: RawObject,
}

impl Chat {
    pub(crate) fn new(raw: Map<String, Value>) -> Self {
        Self {
            raw: RawObject::new(raw),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.raw.i64("id")
    }

    /// One of `private`, `group`, `supergroup` or `channel`.
    pub fn chat_type(&self) -> Option<&str> {
        self.raw.str("type")
    }

    pub fn is_private(&self) -> bool {
        self.chat_type() == Some("private")
    }

    pub fn title(&self) -> Option<&str> {
        self.raw.str("title")
    }

    pub fn username(&self) -> Option<&str> {
        self.raw.str("username")
    }

    pub fn first_name(&self) -> Option<&str> {
        self.raw.str("first_name")
    }

    pub fn last_name(&self) -> Option<&str> {
        self.raw.str("last_name")
    }

    pub fn description(&self) -> Option<&str> {
        self.raw.str("description")
    }

    pub fn invite_link(&self) -> Option<&str> {
        self.raw.str("invite_link")
    }

    /// The raw JSON object.
    pub fn raw(&self) -> &Map<String, Value> {
        self.raw.map()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_user_fields() {
        let user = User::new(object(json!({
            "id": 7,
            "is_bot": false,
            "first_name": "Ada",
            "last_name": "",
            "username": "ada",
        })));
        assert_eq!(user.id(), Some(7));
        assert!(!user.is_bot());
        assert_eq!(user.last_name(), None);
        assert_eq!(user.full_name(), "Ada");
        assert_eq!(user.language_code(), None);
    }

    #[test]
    fn test_chat_fields() {
        let chat = Chat::new(object(json!({ "id": -100, "type": "supergroup", "title": "Ops" })));
        assert_eq!(chat.id(), Some(-100));
        assert_eq!(chat.title(), Some("Ops"));
        assert!(!chat.is_private());
    }
}
