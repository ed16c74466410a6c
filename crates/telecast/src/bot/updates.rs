//! Getting updates and bot identity.

use telecast_core::{ApiResult, CapabilitySet, Request, UpdateKind, params};

use super::Bot;

impl Bot {
    /// `getUpdates`: long-polls for new updates.
    ///
    /// Split the response with [`Response::updates`](telecast_core::Response::updates).
    pub fn get_updates(&self, offset: Option<i64>, limit: Option<i64>) -> ApiResult<Request> {
        Ok(self.request(
            "getUpdates",
            params! { "offset" => offset, "limit" => limit },
            CapabilitySet::EMPTY,
        ))
    }

    /// `setWebhook`: delivers updates to `url` instead of polling.
    ///
    /// `allowed_updates` restricts delivery to the given kinds.
    pub fn set_webhook(
        &self,
        url: &str,
        certificate: Option<&str>,
        max_connections: Option<i64>,
        allowed_updates: Option<&[UpdateKind]>,
    ) -> ApiResult<Request> {
        let allowed_updates =
            allowed_updates.map(|kinds| kinds.iter().map(|k| k.as_str()).collect::<Vec<_>>());
        Ok(self.request(
            "setWebhook",
            params! {
                "url" => url,
                "certificate" => certificate,
                "max_connections" => max_connections,
                "allowed_updates" => allowed_updates,
            },
            CapabilitySet::EMPTY,
        ))
    }

    /// `deleteWebhook`
    pub fn delete_webhook(&self) -> ApiResult<Request> {
        Ok(self.request("deleteWebhook", params! {}, CapabilitySet::EMPTY))
    }

    /// `getWebhookInfo`
    pub fn get_webhook_info(&self) -> ApiResult<Request> {
        Ok(self.request("getWebhookInfo", params! {}, CapabilitySet::EMPTY))
    }

    /// `getMe`: basic information about the bot.
    pub fn get_me(&self) -> ApiResult<Request> {
        Ok(self.request("getMe", params! {}, CapabilitySet::EMPTY))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::testing::{body, bot};
    use super::*;

    #[test]
    fn test_get_updates_omits_unset() {
        let request = bot().get_updates(Some(100), None).unwrap();
        assert_eq!(request.method(), "getUpdates");
        assert!(request.capabilities().is_empty());
        assert_eq!(body(&request), json!({ "offset": 100 }));
    }

    #[test]
    fn test_set_webhook() {
        let request = bot()
            .set_webhook(
                "https://example.com/hook",
                None,
                Some(40),
                Some(&[UpdateKind::Message, UpdateKind::CallbackQuery][..]),
            )
            .unwrap();
        assert_eq!(
            body(&request),
            json!({
                "url": "https://example.com/hook",
                "max_connections": 40,
                "allowed_updates": ["message", "callback_query"],
            })
        );
    }

    #[test]
    fn test_parameterless_methods() {
        let bot = bot();
        for (request, method) in [
            (bot.get_me(), "getMe"),
            (bot.delete_webhook(), "deleteWebhook"),
            (bot.get_webhook_info(), "getWebhookInfo"),
        ] {
            let request = request.unwrap();
            assert_eq!(request.method(), method);
            assert_eq!(body(&request), json!({}));
        }
    }
}
