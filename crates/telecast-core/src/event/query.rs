use std::sync::OnceLock;

use serde_json::{Map, Value};

use super::{Message, RawObject, User};

/// An inline query typed into the message field.
#[derive(Debug, Clone)]
pub struct InlineQuery {
    raw: RawObject,
    from: OnceLock<Option<User>>,
}

impl InlineQuery {
    pub(crate) fn new(raw: Map<String, Value>) -> Self {
        Self {
            raw: RawObject::new(raw),
            from: OnceLock::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.raw.str("id")
    }

    pub fn from(&self) -> Option<&User> {
        self.raw.view(&self.from, "from", User::new)
    }

    /// Text of the query.
    pub fn query(&self) -> Option<&str> {
        self.raw.str("query")
    }

    /// Pagination offset requested by the client.
    pub fn offset(&self) -> Option<&str> {
        self.raw.str("offset")
    }

    /// Sender location as `(latitude, longitude)`, if shared.
    pub fn location(&self) -> Option<(f64, f64)> {
        let location = self.raw.object("location")?;
        Some((
            location.get("latitude")?.as_f64()?,
            location.get("longitude")?.as_f64()?,
        ))
    }

    pub fn raw(&self) -> &Map<String, Value> {
        self.raw.map()
    }
}

/// An inline result the user picked.
#[derive(Debug, Clone)]
pub struct ChosenInlineResult {
    raw: RawObject,
    from: OnceLock<Option<User>>,
}

impl ChosenInlineResult {
    pub(crate) fn new(raw: Map<String, Value>) -> Self {
        Self {
            raw: RawObject::new(raw),
            from: OnceLock::new(),
        }
    }

    pub fn result_id(&self) -> Option<&str> {
        self.raw.str("result_id")
    }

    pub fn from(&self) -> Option<&User> {
        self.raw.view(&self.from, "from", User::new)
    }

    pub fn query(&self) -> Option<&str> {
        self.raw.str("query")
    }

    /// Set when the result message carries an inline keyboard.
    pub fn inline_message_id(&self) -> Option<&str> {
        self.raw.str("inline_message_id")
    }

    pub fn raw(&self) -> &Map<String, Value> {
        self.raw.map()
    }
}

/// A press on an inline keyboard callback button.
#[derive(Debug, Clone)]
pub struct CallbackQuery {
    raw: RawObject,
    from: OnceLock<Option<User>>,
    message: OnceLock<Option<Message>>,
}

impl CallbackQuery {
    pub(crate) fn new(raw: Map<String, Value>) -> Self {
        Self {
            raw: RawObject::new(raw),
            from: OnceLock::new(),
            message: OnceLock::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.raw.str("id")
    }

    pub fn from(&self) -> Option<&User> {
        self.raw.view(&self.from, "from", User::new)
    }

    /// Message carrying the pressed button; absent for inline-mode messages.
    pub fn message(&self) -> Option<&Message> {
        self.raw.view(&self.message, "message", Message::new)
    }

    pub fn inline_message_id(&self) -> Option<&str> {
        self.raw.str("inline_message_id")
    }

    pub fn chat_instance(&self) -> Option<&str> {
        self.raw.str("chat_instance")
    }

    /// Payload attached to the button.
    pub fn data(&self) -> Option<&str> {
        self.raw.str("data")
    }

    pub fn game_short_name(&self) -> Option<&str> {
        self.raw.str("game_short_name")
    }

    pub fn raw(&self) -> &Map<String, Value> {
        self.raw.map()
    }
}

/// A shipping address request for a flexible-price invoice.
#[derive(Debug, Clone)]
pub struct ShippingQuery {
    raw: RawObject,
    from: OnceLock<Option<User>>,
}

impl ShippingQuery {
    pub(crate) fn new(raw: Map<String, Value>) -> Self {
        Self {
            raw: RawObject::new(raw),
            from: OnceLock::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.raw.str("id")
    }

    pub fn from(&self) -> Option<&User> {
        self.raw.view(&self.from, "from", User::new)
    }

    pub fn invoice_payload(&self) -> Option<&str> {
        self.raw.str("invoice_payload")
    }

    /// The user's shipping address, as sent.
    pub fn shipping_address(&self) -> Option<&Map<String, Value>> {
        self.raw.object("shipping_address")
    }

    pub fn raw(&self) -> &Map<String, Value> {
        self.raw.map()
    }
}

/// Final confirmation request before a payment is charged.
#[derive(Debug, Clone)]
pub struct PreCheckoutQuery {
    raw: RawObject,
    from: OnceLock<Option<User>>,
}

impl PreCheckoutQuery {
    pub(crate) fn new(raw: Map<String, Value>) -> Self {
        Self {
            raw: RawObject::new(raw),
            from: OnceLock::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.raw.str("id")
    }

    pub fn from(&self) -> Option<&User> {
        self.raw.view(&self.from, "from", User::new)
    }

    /// ISO 4217 currency code.
    pub fn currency(&self) -> Option<&str> {
        self.raw.str("currency")
    }

    /// Price in the smallest units of the currency.
    pub fn total_amount(&self) -> Option<i64> {
        self.raw.i64("total_amount")
    }

    pub fn invoice_payload(&self) -> Option<&str> {
        self.raw.str("invoice_payload")
    }

    pub fn shipping_option_id(&self) -> Option<&str> {
        self.raw.str("shipping_option_id")
    }

    pub fn raw(&self) -> &Map<String, Value> {
        self.raw.map()
    }
}
