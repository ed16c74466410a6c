//! Capability-gated request builder.
//!
//! A [`Request`] pairs a Bot API method name with its base parameters and the
//! [`CapabilitySet`] the method supports. Optional behaviors are added through
//! setters that check capability membership first; a rejected setter leaves
//! the parameters untouched.
//!
//! ```
//! use telecast_core::{Capability, CapabilitySet, Request, params};
//!
//! let mut req = Request::new("forwardMessage", params! { "chat_id" => 1i64 }, CapabilitySet::NOTIFY_ONLY);
//! req.set_notification(false).unwrap();
//! assert!(req.set_parse_mode("HTML").is_err());
//! assert!(req.supports(Capability::DisableNotification));
//! ```

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::capability::{Capability, CapabilitySet};
use crate::error::{ApiError, ApiResult};
use crate::params::{ParamMap, ParamValue, TypeObject, render_params};
use crate::response::Response;
use crate::transport::Transport;
use crate::types::{ForceReply, ParseMode};

/// A single outbound API call under construction.
#[derive(Debug, Clone)]
pub struct Request {
    method: String,
    params: ParamMap,
    capabilities: CapabilitySet,
}

impl Request {
    /// Creates a request for `method` with its base parameters.
    pub fn new(method: impl Into<String>, params: ParamMap, capabilities: CapabilitySet) -> Self {
        Self {
            method: method.into(),
            params,
            capabilities,
        }
    }

    // ===== Accessors =====

    /// Bot API method name, e.g. `sendMessage`.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Current parameter tree.
    pub fn params(&self) -> &ParamMap {
        &self.params
    }

    /// Behaviors this method accepts.
    pub fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    /// Returns `true` if the method accepts `capability`.
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }

    fn require(&self, capability: Capability) -> ApiResult<()> {
        if self.supports(capability) {
            Ok(())
        } else {
            Err(ApiError::Capability {
                capability,
                method: self.method.clone(),
            })
        }
    }

    // ===== Behavior setters =====

    /// Sets the text formatting mode.
    ///
    /// Accepts a [`ParseMode`] or its name (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`ApiError::Capability`] if the method has no parse mode,
    /// [`ApiError::InvalidArgument`] for an unknown mode name.
    pub fn set_parse_mode(&mut self, mode: impl AsRef<str>) -> ApiResult<&mut Self> {
        self.require(Capability::ParseMode)?;
        let mode: ParseMode = mode.as_ref().parse()?;
        self.params.insert("parse_mode", mode.as_str());
        Ok(self)
    }

    /// Enables or disables the notification sound for the message.
    pub fn set_notification(&mut self, enable: bool) -> ApiResult<&mut Self> {
        self.require(Capability::DisableNotification)?;
        self.params.insert("disable_notification", !enable);
        Ok(self)
    }

    /// Enables or disables link previews.
    pub fn set_web_page_preview(&mut self, enable: bool) -> ApiResult<&mut Self> {
        self.require(Capability::DisableWebPagePreview)?;
        self.params.insert("disable_web_page_preview", !enable);
        Ok(self)
    }

    /// Sends the message as a reply to `message_id`.
    pub fn reply_to_message(&mut self, message_id: i64) -> ApiResult<&mut Self> {
        self.require(Capability::ReplyToMessage)?;
        self.params.insert("reply_to_message_id", message_id);
        Ok(self)
    }

    /// Asks clients to display a reply interface.
    pub fn force_reply(&mut self, selective: bool) -> ApiResult<&mut Self> {
        self.reply_markup(ForceReply::new(selective))
    }

    /// Attaches a keyboard or other reply markup object.
    pub fn reply_markup<T: TypeObject + 'static>(&mut self, markup: T) -> ApiResult<&mut Self> {
        self.require(Capability::ReplyMarkup)?;
        self.params.insert("reply_markup", ParamValue::object(markup));
        Ok(self)
    }

    // ===== Output =====

    /// Renders the parameter tree into the wire-ready JSON object.
    pub fn render(&self) -> ApiResult<Map<String, Value>> {
        render_params(&self.params)
    }

    /// Renders the request body as a JSON string.
    pub fn to_json_string(&self) -> ApiResult<String> {
        let body = self.render()?;
        serde_json::to_string(&body)
            .map_err(|e| ApiError::serialization("Request", e.to_string()))
    }

    /// Renders and executes the request, consuming it.
    pub async fn send(self, transport: &dyn Transport) -> ApiResult<Response> {
        let body = self.render()?;
        debug!(method = %self.method, params = body.len(), "Sending API request");
        trace!(method = %self.method, body = ?body, "Request body");
        transport.call(&self.method, body).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::params;
    use crate::types::{InlineKeyboardButton, InlineKeyboardMarkup};

    fn request(caps: CapabilitySet) -> Request {
        Request::new("testMethod", params! { "chat_id" => 10i64 }, caps)
    }

    fn rendered(req: &Request) -> Value {
        Value::Object(req.render().unwrap())
    }

    #[test]
    fn test_full_capabilities() {
        let mut req = request(CapabilitySet::TEXT);
        req.set_parse_mode("markdown")
            .unwrap()
            .set_notification(false)
            .unwrap()
            .set_web_page_preview(false)
            .unwrap()
            .reply_to_message(77)
            .unwrap()
            .force_reply(true)
            .unwrap();

        assert_eq!(
            rendered(&req),
            json!({
                "chat_id": 10,
                "parse_mode": "Markdown",
                "disable_notification": true,
                "disable_web_page_preview": true,
                "reply_to_message_id": 77,
                "reply_markup": { "force_reply": true, "selective": true },
            })
        );
    }

    #[test]
    fn test_every_setter_rejected_without_capability() {
        let mut req = request(CapabilitySet::EMPTY);
        let results = [
            (req.set_parse_mode(ParseMode::Html).map(|_| ()), Capability::ParseMode),
            (req.set_notification(true).map(|_| ()), Capability::DisableNotification),
            (
                req.set_web_page_preview(true).map(|_| ()),
                Capability::DisableWebPagePreview,
            ),
            (req.reply_to_message(1).map(|_| ()), Capability::ReplyToMessage),
            (req.force_reply(false).map(|_| ()), Capability::ReplyMarkup),
        ];
        for (result, expected) in results {
            match result {
                Err(ApiError::Capability { capability, method }) => {
                    assert_eq!(capability, expected);
                    assert_eq!(method, "testMethod");
                }
                other => panic!("expected capability error, got {other:?}"),
            }
        }
        assert_eq!(rendered(&req), json!({ "chat_id": 10 }));
    }

    #[test]
    fn test_capability_checked_before_mode() {
        let mut req = request(CapabilitySet::NOTIFY_ONLY);
        assert!(matches!(
            req.set_parse_mode("bogus"),
            Err(ApiError::Capability { .. })
        ));
    }

    #[test]
    fn test_unknown_parse_mode_leaves_params_unchanged() {
        let mut req = request(CapabilitySet::MEDIA);
        req.set_parse_mode("HTML").unwrap();
        assert!(matches!(
            req.set_parse_mode("rtf"),
            Err(ApiError::InvalidArgument(_))
        ));
        assert_eq!(
            req.params().get("parse_mode").and_then(ParamValue::as_str),
            Some("HTML")
        );
    }

    #[test]
    fn test_media_rejects_web_preview() {
        let mut req = request(CapabilitySet::MEDIA);
        let err = req.set_web_page_preview(false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "method testMethod requires capability CAN_DISABLE_WEB_PAGE_PREVIEW"
        );
        assert!(!req.params().contains_key("disable_web_page_preview"));
    }

    #[test]
    fn test_reply_markup_object() {
        let mut req = request(CapabilitySet::MARKUP_ONLY);
        req.reply_markup(
            InlineKeyboardMarkup::new().row([InlineKeyboardButton::callback("Ok", "ok")]),
        )
        .unwrap();
        assert_eq!(
            rendered(&req)["reply_markup"],
            json!({ "inline_keyboard": [[{ "text": "Ok", "callback_data": "ok" }]] })
        );
    }

    #[test]
    fn test_to_json_string() {
        let mut req = request(CapabilitySet::TEXT);
        req.set_notification(true).unwrap();
        assert_eq!(
            req.to_json_string().unwrap(),
            r#"{"chat_id":10,"disable_notification":false}"#
        );
    }
}
