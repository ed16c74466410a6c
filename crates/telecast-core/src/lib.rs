//! # Telecast Core
//!
//! Request building, parameter rendering and update parsing for the Telegram
//! Bot API.
//!
//! This crate holds everything that does not touch the network:
//!
//! - **Parameters**: [`ParamMap`] / [`ParamValue`] trees and their JSON
//!   rendering ([`render_params`]), with typed request objects
//!   ([`TypeObject`]).
//! - **Requests**: the capability-gated [`Request`] builder. Each method
//!   carries a fixed [`CapabilitySet`]; setters for unsupported behaviors are
//!   rejected before they touch the parameters.
//! - **Responses**: envelope decoding ([`decode_envelope`]) into [`Response`]
//!   or a typed [`ApiError`].
//! - **Transport**: the [`Transport`] trait implemented by
//!   `telecast-transport` and by test doubles.
//! - **Updates**: the [`Update`] dispatcher and its lazily populated views.
//!
//! ## Request Flow
//!
//! ```text
//! ┌──────────┐     ┌─────────┐  render   ┌───────────┐     ┌──────────┐
//! │   Bot    │────▶│ Request │──────────▶│ Transport │────▶│ Response │
//! │ (method) │     │ (caps)  │           │  (HTTP)   │     │ / Error  │
//! └──────────┘     └─────────┘           └───────────┘     └──────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use telecast_core::{CapabilitySet, ParseMode, Request, params};
//!
//! let mut req = Request::new(
//!     "sendMessage",
//!     params! { "chat_id" => 42i64, "text" => "<b>hi</b>" },
//!     CapabilitySet::TEXT,
//! );
//! req.set_parse_mode(ParseMode::Html).unwrap().set_notification(false).unwrap();
//!
//! assert_eq!(
//!     req.to_json_string().unwrap(),
//!     r#"{"chat_id":42,"text":"<b>hi</b>","parse_mode":"HTML","disable_notification":true}"#
//! );
//! ```

pub mod capability;
pub mod error;
pub mod event;
pub mod params;
pub mod permissions;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

pub use capability::{Capability, CapabilitySet};
pub use error::{
    ApiError, ApiResult, EventError, EventResult, TransportError, TransportResult,
};
pub use event::{
    CallbackQuery, Chat, ChosenInlineResult, InlineQuery, Message, PreCheckoutQuery,
    ShippingQuery, Timestamp, Update, UpdateKind, UpdatePayload, User,
};
pub use params::{ParamMap, ParamValue, TypeObject, render_params, serde_params};
pub use permissions::{ChatPermission, PROMOTE_PERMISSIONS, PermissionSet, RESTRICT_PERMISSIONS};
pub use request::Request;
pub use response::{Response, ResponseInfo, decode_envelope};
pub use transport::{DEFAULT_API_URL, Transport, api_url, file_url};
pub use types::{
    ChatAction, ChatId, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, MaskPoint,
    MaskPosition, ParseMode, ReplyKeyboardRemove, escape_html,
};
