//! Transport abstraction.
//!
//! A [`Transport`] moves one rendered request body to the Bot API and
//! returns the decoded [`Response`]. The bot surface holds an
//! `Arc<dyn Transport>` and never learns how the call is made; the HTTP
//! implementation lives in `telecast-transport`, tests substitute their own.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::ApiResult;
use crate::response::Response;

/// Default Bot API server.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Executes rendered API calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `body` as the parameters of `method`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`](crate::ApiError::Transport) for network, timeout,
    /// status and body failures, [`ApiError::Remote`](crate::ApiError::Remote)
    /// when the API answers `ok: false`.
    async fn call(&self, method: &str, body: Map<String, Value>) -> ApiResult<Response>;
}

/// Builds the endpoint URL of `method`: `<base>/bot<token>/<method>`.
pub fn api_url(base: &str, token: &str, method: &str) -> String {
    format!("{}/bot{token}/{method}", base.trim_end_matches('/'))
}

/// Builds the download URL of a file: `<base>/file/bot<token>/<file_path>`.
pub fn file_url(base: &str, token: &str, file_path: &str) -> String {
    format!(
        "{}/file/bot{token}/{}",
        base.trim_end_matches('/'),
        file_path.trim_start_matches('/')
    )
}
