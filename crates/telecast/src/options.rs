//! Optional parameters for the media and query methods.
//!
//! Each struct is plain data with public fields; unset fields are left out of
//! the request.
//!
//! ```rust,ignore
//! let request = bot.send_audio(chat_id, file_id, AudioOptions {
//!     title: Some("Theme".into()),
//!     duration: Some(184),
//!     ..Default::default()
//! })?;
//! ```

use serde::Serialize;

/// Optional fields of `sendAudio`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AudioOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    /// Thumbnail file id or URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    /// Duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

/// Optional fields of `sendVideo` and `sendAnimation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    /// Only sent with `sendVideo`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
}

/// Optional fields of `sendVideoNote`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoNoteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Video width and height (diameter of the circle).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
}

/// Optional fields of `answerCallbackQuery`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallbackAnswer {
    /// Notification text, up to 200 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Show an alert instead of a notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Seconds the client may cache the answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<i64>,
}
