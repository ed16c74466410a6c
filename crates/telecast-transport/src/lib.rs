//! # Telecast Transport
//!
//! Network transport for the telecast Bot API client.
//!
//! [`HttpTransport`] implements [`telecast_core::Transport`] with `reqwest`:
//! every call is a JSON `POST` to `<api_url>/bot<token>/<method>`, and the
//! answer is decoded by [`telecast_core::decode_envelope`].
//!
//! ```text
//! ┌─────────────────────┐
//! │  telecast (Bot)     │
//! ├─────────────────────┤
//! │  telecast-core      │  (Transport trait, envelope rules)
//! ├─────────────────────┤
//! │  telecast-transport │  <- This crate
//! ├─────────────────────┤
//! │  Network (HTTPS)    │
//! └─────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use telecast_transport::HttpTransport;
//!
//! let transport = HttpTransport::builder("123456:ABC-DEF")
//!     .api_url("http://localhost:8081")
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//! ```

pub mod http;

pub use http::{DEFAULT_TIMEOUT, HttpTransport, HttpTransportBuilder};
