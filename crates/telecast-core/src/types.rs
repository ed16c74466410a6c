//! Value types shared by requests: chat identifiers, parse modes, chat
//! actions, and typed request objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::impl_type_object;
use crate::params::{ParamMap, ParamValue, TypeObject};

// =============================================================================
// ChatId
// =============================================================================

/// Target chat: a numeric id or an `@channelusername`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    /// Numeric chat identifier.
    Id(i64),
    /// Public username of a channel or supergroup, including the `@`.
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(name: &str) -> Self {
        Self::Username(name.to_string())
    }
}

impl From<String> for ChatId {
    fn from(name: String) -> Self {
        Self::Username(name)
    }
}

impl From<ChatId> for ParamValue {
    fn from(id: ChatId) -> Self {
        match id {
            ChatId::Id(id) => Self::Int(id),
            ChatId::Username(name) => Self::String(name),
        }
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

// =============================================================================
// ParseMode
// =============================================================================

/// Text formatting mode for message text and captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParseMode {
    /// HTML-style tags.
    #[default]
    #[serde(rename = "HTML")]
    Html,
    /// Markdown-style markup.
    #[serde(rename = "Markdown")]
    Markdown,
}

impl ParseMode {
    /// Wire value of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Markdown => "Markdown",
        }
    }
}

impl FromStr for ParseMode {
    type Err = ApiError;

    fn from_str(s: &str) -> ApiResult<Self> {
        if s.eq_ignore_ascii_case("html") {
            Ok(Self::Html)
        } else if s.eq_ignore_ascii_case("markdown") {
            Ok(Self::Markdown)
        } else {
            Err(ApiError::invalid_argument(format!("unknown parse mode: {s}")))
        }
    }
}

impl AsRef<str> for ParseMode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ChatAction
// =============================================================================

/// Activity shown to chat members by `sendChatAction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordAudio,
    UploadAudio,
    UploadDocument,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}

impl ChatAction {
    /// Wire value of this action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::UploadPhoto => "upload_photo",
            Self::RecordVideo => "record_video",
            Self::UploadVideo => "upload_video",
            Self::RecordAudio => "record_audio",
            Self::UploadAudio => "upload_audio",
            Self::UploadDocument => "upload_document",
            Self::FindLocation => "find_location",
            Self::RecordVideoNote => "record_video_note",
            Self::UploadVideoNote => "upload_video_note",
        }
    }
}

impl From<ChatAction> for ParamValue {
    fn from(action: ChatAction) -> Self {
        Self::String(action.as_str().to_string())
    }
}

// =============================================================================
// MaskPosition
// =============================================================================

/// Face part a mask is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskPoint {
    Forehead,
    Eyes,
    Mouth,
    Chin,
}

impl MaskPoint {
    /// Wire value of this point.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forehead => "forehead",
            Self::Eyes => "eyes",
            Self::Mouth => "mouth",
            Self::Chin => "chin",
        }
    }
}

/// Default placement of a mask sticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskPosition {
    pub point: MaskPoint,
    /// Shift along the X-axis, in mask widths.
    pub x_shift: f64,
    /// Shift along the Y-axis, in mask heights.
    pub y_shift: f64,
    /// Mask scaling coefficient.
    pub scale: f64,
}

impl MaskPosition {
    pub fn new(point: MaskPoint, x_shift: f64, y_shift: f64, scale: f64) -> Self {
        Self {
            point,
            x_shift,
            y_shift,
            scale,
        }
    }
}

impl TypeObject for MaskPosition {
    fn to_params(&self) -> ApiResult<ParamMap> {
        let mut params = ParamMap::new();
        params.insert("point", self.point.as_str());
        params.insert("x_shift", self.x_shift);
        params.insert("y_shift", self.y_shift);
        params.insert("scale", self.scale);
        Ok(params)
    }
}

// =============================================================================
// Reply markup
// =============================================================================

/// Asks clients to show a reply interface to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceReply {
    force_reply: bool,
    /// Show the interface only to mentioned users.
    pub selective: bool,
}

impl ForceReply {
    pub fn new(selective: bool) -> Self {
        Self {
            force_reply: true,
            selective,
        }
    }
}

/// Removes the custom reply keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    remove_keyboard: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl ReplyKeyboardRemove {
    pub fn new() -> Self {
        Self {
            remove_keyboard: true,
            selective: None,
        }
    }

    pub fn selective(mut self, selective: bool) -> Self {
        self.selective = Some(selective);
        self
    }
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self::new()
    }
}

/// One button of an inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,
}

impl InlineKeyboardButton {
    /// A button that opens `url`.
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
            callback_data: None,
            switch_inline_query: None,
        }
    }

    /// A button that sends `data` back in a callback query.
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: Some(data.into()),
            switch_inline_query: None,
        }
    }
}

/// Inline keyboard attached below a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row of buttons.
    pub fn row(mut self, buttons: impl IntoIterator<Item = InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(buttons.into_iter().collect());
        self
    }
}

impl_type_object!(ForceReply, ReplyKeyboardRemove, InlineKeyboardMarkup);

// =============================================================================
// Text helpers
// =============================================================================

/// Escapes `<`, `>`, `&` and `"` for text sent with [`ParseMode::Html`].
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
