//! HTTP transport built on `reqwest`.

mod client;

pub use client::{DEFAULT_TIMEOUT, HttpTransport, HttpTransportBuilder};
