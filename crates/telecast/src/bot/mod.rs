//! The [`Bot`] handle and its Bot API methods.
//!
//! Every method builds a [`Request`] with the method's fixed
//! [`CapabilitySet`] and returns it unsent, so callers can apply behavior
//! setters before handing it to [`Bot::execute`]:
//!
//! ```rust,ignore
//! let mut request = bot.send_message(chat_id, "pong")?;
//! request.reply_to_message(message.id())?.set_notification(false)?;
//! bot.execute(request).await?;
//! ```
//!
//! Methods are grouped by topic in the submodules; they all extend `Bot`.

mod chat;
mod edit;
mod files;
mod messages;
mod queries;
mod stickers;
mod updates;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument};

use telecast_core::{
    ApiResult, CapabilitySet, DEFAULT_API_URL, ParamMap, ParseMode, Request, Response,
    Transport, TransportResult, escape_html, file_url,
};
use telecast_runtime::TelecastConfig;
use telecast_transport::HttpTransport;

/// A Telegram bot: credentials, defaults and a shared transport.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct Bot {
    transport: Arc<dyn Transport>,
    token: SecretString,
    username: String,
    api_url: String,
    default_parse_mode: ParseMode,
}

impl Bot {
    /// Creates a bot talking to the public Bot API over HTTPS.
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> TransportResult<Self> {
        let token = token.into();
        let transport = HttpTransport::new(token.clone())?;
        Ok(Self::with_transport(token, username, Arc::new(transport)))
    }

    /// Creates a bot on top of an existing transport.
    pub fn with_transport(
        token: impl Into<String>,
        username: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            transport,
            token: SecretString::from(token.into()),
            username: username.into(),
            api_url: DEFAULT_API_URL.to_string(),
            default_parse_mode: ParseMode::default(),
        }
    }

    /// Creates a bot from a loaded configuration.
    ///
    /// The transport uses the configured server URL and timeouts.
    pub fn from_config(config: &TelecastConfig) -> ApiResult<Self> {
        let bot = &config.bot;
        let token = bot.token.expose_secret().to_string();
        let transport = HttpTransport::builder(token.clone())
            .api_url(bot.api_url.as_str())
            .connect_timeout(bot.connect_timeout())
            .timeout(bot.request_timeout())
            .build()?;

        let mut this = Self::with_transport(token, bot.username.as_str(), Arc::new(transport))
            .with_api_url(transport_url(&bot.api_url));
        this.set_default_parse_mode(&bot.default_parse_mode)?;

        info!(username = %this.username, api_url = %this.api_url, "Bot configured");
        Ok(this)
    }

    /// Sets the server base URL used by [`file_url`](Self::file_url).
    ///
    /// Does not affect the transport.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = transport_url(&api_url.into());
        self
    }

    // ===== Accessors =====

    /// Numeric bot id: the part of the token before `:`.
    ///
    /// Returns `None` if the token does not start with digits followed by `:`.
    pub fn id(&self) -> Option<i64> {
        let (id, _) = self.token.expose_secret().split_once(':')?;
        id.parse().ok()
    }

    /// Bot username, as given at construction.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Parse mode applied to text and captions by default.
    pub fn default_parse_mode(&self) -> ParseMode {
        self.default_parse_mode
    }

    /// Changes the default parse mode (`HTML` or `Markdown`, case-insensitive).
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidArgument`](telecast_core::ApiError::InvalidArgument)
    /// for any other name; the previous mode is kept.
    pub fn set_default_parse_mode(&mut self, mode: impl AsRef<str>) -> ApiResult<&mut Self> {
        self.default_parse_mode = mode.as_ref().parse()?;
        debug!(parse_mode = %self.default_parse_mode, "Default parse mode changed");
        Ok(self)
    }

    /// Download URL of a file previously returned by `getFile`.
    pub fn file_url(&self, file_path: &str) -> String {
        file_url(&self.api_url, self.token.expose_secret(), file_path)
    }

    /// Escapes `<`, `>`, `&` and `"` for HTML-formatted text.
    pub fn escape_html(text: &str) -> String {
        escape_html(text)
    }

    // ===== Requests =====

    /// Builds a request for any Bot API method.
    ///
    /// Use this for methods without a dedicated helper.
    pub fn request(
        &self,
        method: impl Into<String>,
        params: ParamMap,
        capabilities: CapabilitySet,
    ) -> Request {
        Request::new(method, params, capabilities)
    }

    /// Builds a request and applies the default parse mode.
    fn formatted(
        &self,
        method: &str,
        params: ParamMap,
        capabilities: CapabilitySet,
    ) -> ApiResult<Request> {
        let mut request = self.request(method, params, capabilities);
        request.set_parse_mode(self.default_parse_mode)?;
        Ok(request)
    }

    /// Sends a request through the bot's transport.
    #[instrument(skip_all, fields(method = %request.method()))]
    pub async fn execute(&self, request: Request) -> ApiResult<Response> {
        request.send(self.transport.as_ref()).await
    }
}

impl fmt::Debug for Bot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bot")
            .field("id", &self.id())
            .field("username", &self.username)
            .field("api_url", &self.api_url)
            .field("default_parse_mode", &self.default_parse_mode)
            .finish_non_exhaustive()
    }
}

fn transport_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
