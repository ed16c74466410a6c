//! Editing and deleting sent messages.
//!
//! An edit targets either a message in a chat (`message_id`) or a message
//! sent via inline mode (`inline_message_id`); at least one must be given.

use telecast_core::{ApiError, ApiResult, CapabilitySet, ChatId, ParamMap, Request, params};

use super::Bot;

fn edit_target(message_id: Option<i64>, inline_message_id: Option<&str>) -> ApiResult<ParamMap> {
    if message_id.is_none() && inline_message_id.is_none() {
        return Err(ApiError::invalid_argument(
            "message_id or inline_message_id must be set",
        ));
    }
    Ok(params! {
        "message_id" => message_id,
        "inline_message_id" => inline_message_id,
    })
}

impl Bot {
    /// `editMessageText`
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidArgument`] if neither message id is given.
    pub fn edit_message_text(
        &self,
        chat_id: impl Into<ChatId>,
        text: &str,
        message_id: Option<i64>,
        inline_message_id: Option<&str>,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        let target = edit_target(message_id, inline_message_id)?;
        let mut params = params! { "chat_id" => chat_id, "text" => text };
        params.merge(target);
        self.formatted("editMessageText", params, CapabilitySet::EDIT)
    }

    /// `editMessageCaption`
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidArgument`] if neither message id is given.
    pub fn edit_message_caption(
        &self,
        chat_id: impl Into<ChatId>,
        caption: &str,
        message_id: Option<i64>,
        inline_message_id: Option<&str>,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        let target = edit_target(message_id, inline_message_id)?;
        let mut params = params! { "chat_id" => chat_id, "caption" => caption };
        params.merge(target);
        self.formatted("editMessageCaption", params, CapabilitySet::EDIT)
    }

    /// `editMessageLiveLocation`: moves a live location.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidArgument`] if neither message id is given.
    pub fn edit_message_live_location(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        message_id: Option<i64>,
        inline_message_id: Option<&str>,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        let target = edit_target(message_id, inline_message_id)?;
        let mut params = params! {
            "chat_id" => chat_id,
            "latitude" => latitude,
            "longitude" => longitude,
        };
        params.merge(target);
        Ok(self.request("editMessageLiveLocation", params, CapabilitySet::MARKUP_ONLY))
    }

    /// `stopMessageLiveLocation`
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidArgument`] if neither message id is given.
    pub fn stop_message_live_location(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: Option<i64>,
        inline_message_id: Option<&str>,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        let target = edit_target(message_id, inline_message_id)?;
        let mut params = params! { "chat_id" => chat_id };
        params.merge(target);
        Ok(self.request("stopMessageLiveLocation", params, CapabilitySet::MARKUP_ONLY))
    }

    /// `deleteMessage`
    pub fn delete_message(&self, chat_id: impl Into<ChatId>, message_id: i64) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "deleteMessage",
            params! { "chat_id" => chat_id, "message_id" => message_id },
            CapabilitySet::EMPTY,
        ))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use telecast_core::{Capability, ReplyKeyboardRemove};

    use super::super::testing::{body, bot};
    use super::*;

    #[test]
    fn test_edit_requires_target() {
        let bot = bot();
        let results = [
            bot.edit_message_text(1i64, "x", None, None),
            bot.edit_message_caption(1i64, "x", None, None),
            bot.edit_message_live_location(1i64, 0.0, 0.0, None, None),
            bot.stop_message_live_location(1i64, None, None),
        ];
        for result in results {
            assert!(matches!(result, Err(ApiError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_edit_message_text() {
        let request = bot().edit_message_text(1i64, "new", Some(10), None).unwrap();
        assert_eq!(request.capabilities(), CapabilitySet::EDIT);
        assert_eq!(
            body(&request),
            json!({ "chat_id": 1, "text": "new", "message_id": 10, "parse_mode": "HTML" })
        );
    }

    #[test]
    fn test_edit_caption_inline() {
        let mut request = bot()
            .edit_message_caption(1i64, "cap", None, Some("inline-1"))
            .unwrap();
        assert!(request.set_notification(false).is_err());
        assert_eq!(
            body(&request),
            json!({ "chat_id": 1, "caption": "cap", "inline_message_id": "inline-1", "parse_mode": "HTML" })
        );
    }

    #[test]
    fn test_live_location_markup_only() {
        let mut request = bot()
            .edit_message_live_location(1i64, 1.5, 2.5, Some(3), None)
            .unwrap();
        assert_eq!(
            request.capabilities().iter().collect::<Vec<_>>(),
            vec![Capability::ReplyMarkup]
        );
        assert!(request.set_parse_mode("HTML").is_err());
        request.reply_markup(ReplyKeyboardRemove::new()).unwrap();
        assert_eq!(
            body(&request),
            json!({
                "chat_id": 1,
                "latitude": 1.5,
                "longitude": 2.5,
                "message_id": 3,
                "reply_markup": { "remove_keyboard": true },
            })
        );

        let stop = bot().stop_message_live_location(1i64, Some(3), None).unwrap();
        assert_eq!(stop.method(), "stopMessageLiveLocation");
        assert_eq!(body(&stop), json!({ "chat_id": 1, "message_id": 3 }));
    }

    #[test]
    fn test_delete_message() {
        let request = bot().delete_message(1i64, 99).unwrap();
        assert!(request.capabilities().is_empty());
        assert_eq!(body(&request), json!({ "chat_id": 1, "message_id": 99 }));
    }
}
