//! # Telecast
//!
//! A typed, capability-checked client for the Telegram Bot API.
//!
//! ## Overview
//!
//! Every Bot API method has a fixed set of optional behaviors it accepts:
//! silent delivery, replies, reply markup, link previews and text
//! formatting. Telecast encodes that set in each [`Request`], so asking
//! `forwardMessage` for a parse mode fails before anything is sent.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────────┐     ┌──────────┐
//! │     Bot     │────▶│   Request   │────▶│ HttpTransport │────▶│ Response │
//! │  (methods)  │     │ (setters)   │     │   (reqwest)   │     │          │
//! └─────────────┘     └─────────────┘     └───────────────┘     └────┬─────┘
//!                                                                    │ getUpdates
//!                                                              ┌─────▼─────┐
//!                                                              │  Update   │
//!                                                              │ (9 kinds) │
//!                                                              └───────────┘
//! ```
//!
//! - **[`core`]**: parameters, requests, responses, updates and errors
//! - **[`transport`]**: the HTTP transport
//! - **[`runtime`]**: configuration loading and logging setup
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use telecast::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = load_config()?;
//!     init_from_config(&config.logging);
//!
//!     let bot = Bot::from_config(&config)?;
//!     let mut offset = None;
//!     loop {
//!         let response = bot.execute(bot.get_updates(offset, None)?).await?;
//!         offset = response.next_offset().or(offset);
//!         for update in response.updates()? {
//!             let Ok(update) = update else { continue };
//!             let Some(message) = update.message() else { continue };
//!             let (Some(chat), Some(text)) = (message.chat(), message.text()) else { continue };
//!             if let Some(chat_id) = chat.id() {
//!                 let mut reply = bot.send_message(chat_id, &Bot::escape_html(text))?;
//!                 if let Some(id) = message.id() {
//!                     reply.reply_to_message(id)?;
//!                 }
//!                 bot.execute(reply).await?;
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - `toml-config` *(default)*: `telecast.toml` configuration files
//! - `yaml-config`: `telecast.yaml` configuration files
//! - `json-log`: JSON log output

mod bot;
pub mod options;

pub use telecast_core as core;
pub use telecast_runtime as runtime;
pub use telecast_transport as transport;

pub use bot::Bot;
pub use telecast_core::{ApiError, ApiResult, EventError, EventResult, Request, Response, Update};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use telecast::prelude::*;
/// ```
pub mod prelude {
    // Bot - main entry point
    pub use crate::Bot;
    pub use crate::options::{AudioOptions, CallbackAnswer, VideoNoteOptions, VideoOptions};

    // Requests and their typed parameters
    pub use telecast_core::{
        Capability, CapabilitySet, ChatAction, ChatId, ChatPermission, ForceReply,
        InlineKeyboardButton, InlineKeyboardMarkup, MaskPoint, MaskPosition, ParseMode,
        PermissionSet, ReplyKeyboardRemove, Request, Response, params,
    };

    // Updates
    pub use telecast_core::{
        CallbackQuery, Chat, ChosenInlineResult, InlineQuery, Message, PreCheckoutQuery,
        ShippingQuery, Timestamp, Update, UpdateKind, User,
    };

    // Errors
    pub use telecast_core::{ApiError, ApiResult, EventError, TransportError};

    // Configuration and logging
    pub use telecast_runtime::{TelecastConfig, init_from_config, load_config};
}
