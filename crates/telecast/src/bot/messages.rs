//! Sending messages.
//!
//! Text and media methods apply the bot's default parse mode; override it
//! with [`Request::set_parse_mode`] on the returned request.

use telecast_core::{
    ApiResult, CapabilitySet, ChatAction, ChatId, Request, params, serde_params,
};

use super::Bot;
use crate::options::{AudioOptions, VideoNoteOptions, VideoOptions};

impl Bot {
    /// `sendMessage`
    pub fn send_message(&self, chat_id: impl Into<ChatId>, text: &str) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        self.formatted(
            "sendMessage",
            params! { "chat_id" => chat_id, "text" => text },
            CapabilitySet::TEXT,
        )
    }

    /// `forwardMessage`: forwards `message_id` from `from_chat_id`.
    pub fn forward_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        let from_chat_id: ChatId = from_chat_id.into();
        Ok(self.request(
            "forwardMessage",
            params! {
                "chat_id" => chat_id,
                "from_chat_id" => from_chat_id,
                "message_id" => message_id,
            },
            CapabilitySet::NOTIFY_ONLY,
        ))
    }

    // ===== Media =====

    /// `sendPhoto`: `photo` is a file id or an HTTP URL.
    pub fn send_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: &str,
        caption: Option<&str>,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        self.formatted(
            "sendPhoto",
            params! { "chat_id" => chat_id, "photo" => photo, "caption" => caption },
            CapabilitySet::MEDIA,
        )
    }

    /// `sendAudio`
    pub fn send_audio(
        &self,
        chat_id: impl Into<ChatId>,
        audio: &str,
        options: &AudioOptions,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        let mut params = params! { "chat_id" => chat_id, "audio" => audio };
        params.merge(serde_params(options)?);
        self.formatted("sendAudio", params, CapabilitySet::MEDIA)
    }

    /// `sendDocument`
    pub fn send_document(
        &self,
        chat_id: impl Into<ChatId>,
        document: &str,
        caption: Option<&str>,
        thumb: Option<&str>,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        self.formatted(
            "sendDocument",
            params! {
                "chat_id" => chat_id,
                "document" => document,
                "caption" => caption,
                "thumb" => thumb,
            },
            CapabilitySet::MEDIA,
        )
    }

    /// `sendVideo`
    pub fn send_video(
        &self,
        chat_id: impl Into<ChatId>,
        video: &str,
        options: &VideoOptions,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        let mut params = params! { "chat_id" => chat_id, "video" => video };
        params.merge(serde_params(options)?);
        self.formatted("sendVideo", params, CapabilitySet::MEDIA)
    }

    /// `sendAnimation`: GIF or soundless H.264 video.
    ///
    /// `options.supports_streaming` is not sent.
    pub fn send_animation(
        &self,
        chat_id: impl Into<ChatId>,
        animation: &str,
        options: &VideoOptions,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        let mut params = params! { "chat_id" => chat_id, "animation" => animation };
        params.merge(serde_params(options)?);
        params.remove("supports_streaming");
        self.formatted("sendAnimation", params, CapabilitySet::MEDIA)
    }

    /// `sendVoice`
    pub fn send_voice(
        &self,
        chat_id: impl Into<ChatId>,
        voice: &str,
        caption: Option<&str>,
        duration: Option<i64>,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        self.formatted(
            "sendVoice",
            params! {
                "chat_id" => chat_id,
                "voice" => voice,
                "caption" => caption,
                "duration" => duration,
            },
            CapabilitySet::MEDIA,
        )
    }

    /// `sendVideoNote`: round video messages have no caption.
    pub fn send_video_note(
        &self,
        chat_id: impl Into<ChatId>,
        video_note: &str,
        options: &VideoNoteOptions,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        let mut params = params! { "chat_id" => chat_id, "video_note" => video_note };
        params.merge(serde_params(options)?);
        Ok(self.request("sendVideoNote", params, CapabilitySet::NOTIFY_REPLY_MARKUP))
    }

    /// `sendSticker`
    pub fn send_sticker(&self, chat_id: impl Into<ChatId>, sticker: &str) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "sendSticker",
            params! { "chat_id" => chat_id, "sticker" => sticker },
            CapabilitySet::NOTIFY_REPLY_MARKUP,
        ))
    }

    // ===== Places and contacts =====

    /// `sendLocation`; a `live_period` (60 to 86400 seconds) makes it live.
    pub fn send_location(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        live_period: Option<i64>,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "sendLocation",
            params! {
                "chat_id" => chat_id,
                "latitude" => latitude,
                "longitude" => longitude,
                "live_period" => live_period,
            },
            CapabilitySet::NOTIFY_REPLY_MARKUP,
        ))
    }

    /// `sendVenue`
    pub fn send_venue(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        title: &str,
        address: &str,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "sendVenue",
            params! {
                "chat_id" => chat_id,
                "latitude" => latitude,
                "longitude" => longitude,
                "title" => title,
                "address" => address,
            },
            CapabilitySet::NOTIFY_REPLY_MARKUP,
        ))
    }

    /// `sendContact`
    pub fn send_contact(
        &self,
        chat_id: impl Into<ChatId>,
        phone_number: &str,
        first_name: &str,
        last_name: Option<&str>,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "sendContact",
            params! {
                "chat_id" => chat_id,
                "phone_number" => phone_number,
                "first_name" => first_name,
                "last_name" => last_name,
            },
            CapabilitySet::NOTIFY_REPLY_MARKUP,
        ))
    }

    // ===== Other =====

    /// `sendChatAction`: shows a status such as "typing..." for a few seconds.
    pub fn send_chat_action(
        &self,
        chat_id: impl Into<ChatId>,
        action: ChatAction,
    ) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "sendChatAction",
            params! { "chat_id" => chat_id, "action" => action },
            CapabilitySet::EMPTY,
        ))
    }

    /// `sendGame`
    pub fn send_game(&self, chat_id: impl Into<ChatId>, game_short_name: &str) -> ApiResult<Request> {
        let chat_id: ChatId = chat_id.into();
        Ok(self.request(
            "sendGame",
            params! { "chat_id" => chat_id, "game_short_name" => game_short_name },
            CapabilitySet::NOTIFY_REPLY_MARKUP,
        ))
    }
}
