//! Chat administration and chat information.

use telecast_core::{
    ApiResult, CapabilitySet, ChatId, PROMOTE_PERMISSIONS, PermissionSet, RESTRICT_PERMISSIONS,
    Request, params,
};

use super::Bot;

impl Bot {
    // ===== Members =====

    /// `kickChatMember`: bans `user_id`, until `until_date` (epoch) if given.
    pub fn kick_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        until_date: Option<i64>,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "kickChatMember",
            params! {
                "chat_id" => chat_id,
                "user_id" => user_id,
                "until_date" => until_date,
            },
            CapabilitySet::EMPTY,
        ))
    }

    /// `unbanChatMember`
    pub fn unban_chat_member(&self, chat_id: impl Into<ChatId>, user_id: i64) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "unbanChatMember",
            params! { "chat_id" => chat_id, "user_id" => user_id },
            CapabilitySet::EMPTY,
        ))
    }

    /// `restrictChatMember`
    ///
    /// `permissions` may only name the four `can_send_*` /
    /// `can_add_web_page_previews` flags.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidArgument`](telecast_core::ApiError::InvalidArgument)
    /// for any other permission or a non-boolean flag.
    pub fn restrict_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        until_date: Option<i64>,
        permissions: Option<&PermissionSet>,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        let mut params = params! {
            "chat_id" => chat_id,
            "user_id" => user_id,
            "until_date" => until_date,
        };
        if let Some(permissions) = permissions {
            params.merge(permissions.resolve(&RESTRICT_PERMISSIONS)?);
        }
        Ok(self.request("restrictChatMember", params, CapabilitySet::EMPTY))
    }

    /// `promoteChatMember`
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidArgument`](telecast_core::ApiError::InvalidArgument)
    /// for a permission outside the administrator rights or a non-boolean flag.
    pub fn promote_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        permissions: Option<&PermissionSet>,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        let mut params = params! { "chat_id" => chat_id, "user_id" => user_id };
        if let Some(permissions) = permissions {
            params.merge(permissions.resolve(&PROMOTE_PERMISSIONS)?);
        }
        Ok(self.request("promoteChatMember", params, CapabilitySet::EMPTY))
    }

    // ===== Chat settings =====

    /// `exportChatInviteLink`
    pub fn export_chat_invite_link(&self, chat_id: impl Into<ChatId>) -> ApiResult<Request> {
        Ok(self.chat_request("exportChatInviteLink", chat_id))
    }

    /// `setChatPhoto`
    pub fn set_chat_photo(&self, chat_id: impl Into<ChatId>, photo: &str) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "setChatPhoto",
            params! { "chat_id" => chat_id, "photo" => photo },
            CapabilitySet::EMPTY,
        ))
    }

    /// `deleteChatPhoto`
    pub fn delete_chat_photo(&self, chat_id: impl Into<ChatId>) -> ApiResult<Request> {
        Ok(self.chat_request("deleteChatPhoto", chat_id))
    }

    /// `setChatTitle`
    pub fn set_chat_title(&self, chat_id: impl Into<ChatId>, title: &str) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "setChatTitle",
            params! { "chat_id" => chat_id, "title" => title },
            CapabilitySet::EMPTY,
        ))
    }

    /// `setChatDescription`; `None` clears the description.
    pub fn set_chat_description(
        &self,
        chat_id: impl Into<ChatId>,
        description: Option<&str>,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "setChatDescription",
            params! { "chat_id" => chat_id, "description" => description },
            CapabilitySet::EMPTY,
        ))
    }

    /// `pinChatMessage`
    pub fn pin_chat_message(&self, chat_id: impl Into<ChatId>, message_id: i64) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "pinChatMessage",
            params! { "chat_id" => chat_id, "message_id" => message_id },
            CapabilitySet::NOTIFY_ONLY,
        ))
    }

    /// `unpinChatMessage`
    pub fn unpin_chat_message(&self, chat_id: impl Into<ChatId>) -> ApiResult<Request> {
        Ok(self.chat_request("unpinChatMessage", chat_id))
    }

    /// `leaveChat`
    pub fn leave_chat(&self, chat_id: impl Into<ChatId>) -> ApiResult<Request> {
        Ok(self.chat_request("leaveChat", chat_id))
    }

    /// `setChatStickerSet`
    pub fn set_chat_sticker_set(
        &self,
        chat_id: impl Into<ChatId>,
        sticker_set_name: &str,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "setChatStickerSet",
            params! { "chat_id" => chat_id, "sticker_set_name" => sticker_set_name },
            CapabilitySet::EMPTY,
        ))
    }

    /// `deleteChatStickerSet`
    pub fn delete_chat_sticker_set(&self, chat_id: impl Into<ChatId>) -> ApiResult<Request> {
        Ok(self.chat_request("deleteChatStickerSet", chat_id))
    }

    // ===== Chat information =====

    /// `getChat`
    pub fn get_chat(&self, chat_id: impl Into<ChatId>) -> ApiResult<Request> {
        Ok(self.chat_request("getChat", chat_id))
    }

    /// `getChatAdministrators`
    pub fn get_chat_administrators(&self, chat_id: impl Into<ChatId>) -> ApiResult<Request> {
        Ok(self.chat_request("getChatAdministrators", chat_id))
    }

    /// `getChatMembersCount`
    pub fn get_chat_members_count(&self, chat_id: impl Into<ChatId>) -> ApiResult<Request> {
        Ok(self.chat_request("getChatMembersCount", chat_id))
    }

    /// `getChatMember`
    pub fn get_chat_member(&self, chat_id: impl Into<ChatId>, user_id: i64) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "getChatMember",
            params! { "chat_id" => chat_id, "user_id" => user_id },
            CapabilitySet::EMPTY,
        ))
    }

    /// A method whose only parameter is `chat_id`.
    fn chat_request(&self, method: &str, chat_id: impl Into<ChatId>) -> Request {
        let chat_id: ChatId = chat_id.into();
        self.request(
            method,
            params! { "chat_id" => chat_id },
            CapabilitySet::EMPTY,
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use telecast_core::{ApiError, ChatPermission};

    use super::super::testing::{body, bot};
    use super::*;

    #[test]
    fn test_restrict_with_names() {
        let permissions = PermissionSet::names(["can_send_messages", "can_add_web_page_previews"]);
        let request = bot()
            .restrict_chat_member(-100i64, 7, Some(1_700_000_000), Some(&permissions))
            .unwrap();
        assert_eq!(
            body(&request),
            json!({
                "chat_id": -100,
                "user_id": 7,
                "until_date": 1_700_000_000,
                "can_send_messages": true,
                "can_add_web_page_previews": true,
            })
        );
    }

    #[test]
    fn test_restrict_with_flags() {
        let permissions: PermissionSet = [
            (ChatPermission::CanSendMessages, true),
            (ChatPermission::CanSendMediaMessages, false),
        ]
        .into_iter()
        .collect();
        let request = bot()
            .restrict_chat_member(1i64, 7, None, Some(&permissions))
            .unwrap();
        assert_eq!(
            body(&request),
            json!({
                "chat_id": 1,
                "user_id": 7,
                "can_send_messages": true,
                "can_send_media_messages": false,
            })
        );
    }

    #[test]
    fn test_restrict_rejects_admin_permission() {
        let permissions = PermissionSet::names(["can_pin_messages"]);
        let err = bot()
            .restrict_chat_member(1i64, 7, None, Some(&permissions))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(msg) if msg.contains("can_pin_messages")));
    }

    #[test]
    fn test_promote_from_json() {
        let permissions = PermissionSet::from_json(json!({
            "can_pin_messages": true,
            "can_promote_members": false,
        }))
        .unwrap();
        let request = bot().promote_chat_member(1i64, 7, Some(&permissions)).unwrap();
        assert_eq!(
            body(&request),
            json!({
                "chat_id": 1,
                "user_id": 7,
                "can_pin_messages": true,
                "can_promote_members": false,
            })
        );

        let bad = PermissionSet::from_json(json!({ "can_pin_messages": "yes" })).unwrap();
        assert!(matches!(
            bot().promote_chat_member(1i64, 7, Some(&bad)),
            Err(ApiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_promote_without_permissions() {
        let request = bot().promote_chat_member("@group", 7, None).unwrap();
        assert_eq!(body(&request), json!({ "chat_id": "@group", "user_id": 7 }));
    }

    #[test]
    fn test_pin_allows_silent() {
        let mut request = bot().pin_chat_message(1i64, 5).unwrap();
        request.set_notification(false).unwrap();
        assert_eq!(
            body(&request),
            json!({ "chat_id": 1, "message_id": 5, "disable_notification": true })
        );
    }

    #[test]
    fn test_chat_only_methods() {
        let bot = bot();
        for (request, method) in [
            (bot.export_chat_invite_link(1i64), "exportChatInviteLink"),
            (bot.delete_chat_photo(1i64), "deleteChatPhoto"),
            (bot.unpin_chat_message(1i64), "unpinChatMessage"),
            (bot.leave_chat(1i64), "leaveChat"),
            (bot.get_chat(1i64), "getChat"),
            (bot.get_chat_administrators(1i64), "getChatAdministrators"),
            (bot.get_chat_members_count(1i64), "getChatMembersCount"),
            (bot.delete_chat_sticker_set(1i64), "deleteChatStickerSet"),
        ] {
            let request = request.unwrap();
            assert_eq!(request.method(), method);
            assert!(request.capabilities().is_empty());
            assert_eq!(body(&request), json!({ "chat_id": 1 }));
        }
    }

    #[test]
    fn test_set_chat_description_clear() {
        let request = bot().set_chat_description(1i64, None).unwrap();
        assert_eq!(body(&request), json!({ "chat_id": 1 }));
    }
}
