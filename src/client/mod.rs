//! Client layer: authenticated HTTP calls and the MSG91 messaging operations on top of them.

mod api;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

pub use api::Api;

use crate::domain::{
    AuthKey, BulkEntry, MessageText, MobileNumber, Recipient, RequestConfig, Response,
    ValidationError,
};
use api::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_HOST, DEFAULT_TIMEOUT, ReqwestTransport};

const SEND_HTTP_ENDPOINT: &str = "api/sendhttp.php/";
const BULK_SEND_ENDPOINT: &str = "/api/v2/sendsms";
const BULK_FIELD: &str = "sms";

#[derive(Debug, thiserror::Error)]
/// Why a client could not be constructed.
pub enum ConfigError {
    /// The auth key was empty.
    #[error("invalid auth key: {0}")]
    AuthKey(#[source] ValidationError),

    /// The underlying HTTP client rejected its settings (e.g. an invalid user agent).
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Msg91Client`] and [`Api`].
///
/// A non-2xx HTTP status is not an error: whatever body MSG91 sends back is returned as a
/// [`Response`].
pub enum Msg91Error {
    /// The client could not be constructed: empty auth key, or HTTP client settings the
    /// underlying client refused.
    #[error("configuration error: {0}")]
    Config(#[source] ConfigError),

    /// The request did not complete (DNS, connect, timeout, ...) or a body declared as
    /// JSON could not be parsed.
    ///
    /// `code` is set for network failures and uses curl's numbering, see the `CODE_*`
    /// constants. It is `None` for JSON parse failures.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        code: Option<u32>,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl Msg91Error {
    /// The request could not be built (bad URL or header).
    pub const CODE_MALFORMED_REQUEST: u32 = 3;
    /// Connecting to the host failed (DNS, refused, TLS).
    pub const CODE_CONNECT: u32 = 7;
    /// The connect or total timeout elapsed.
    pub const CODE_TIMEOUT: u32 = 28;
    pub const CODE_TOO_MANY_REDIRECTS: u32 = 47;
    /// Sending the request failed after the connection was established.
    pub const CODE_SEND: u32 = 55;
    /// Reading the response failed.
    pub const CODE_RECEIVE: u32 = 56;

    /// Transport error code, if any.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Transport { code, .. } => *code,
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`Msg91Client`].
///
/// Use this when you need to customize the host, timeouts, user-agent, or the initial
/// [`RequestConfig`].
pub struct Msg91ClientBuilder {
    auth_key: String,
    host: String,
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: Option<String>,
    config: RequestConfig,
}

impl Msg91ClientBuilder {
    pub fn new(auth_key: impl Into<String>) -> Self {
        Self {
            auth_key: auth_key.into(),
            host: DEFAULT_HOST.to_owned(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            config: RequestConfig::default(),
        }
    }

    /// Override the API host (default `http://api.msg91.com/`).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Connect timeout; `Duration::ZERO` disables it. Defaults to 10 seconds.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Timeout for the entire request; `Duration::ZERO` disables it. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Messaging parameters used by every send unless overridden per call.
    pub fn config(mut self, config: RequestConfig) -> Self {
        self.config = config;
        self
    }

    /// Build a [`Msg91Client`].
    ///
    /// Fails with [`Msg91Error::Config`] when the auth key is empty or the HTTP client
    /// cannot be built from the given settings.
    pub fn build(self) -> Result<Msg91Client, Msg91Error> {
        let auth = AuthKey::new(self.auth_key)
            .map_err(|err| Msg91Error::Config(ConfigError::AuthKey(err)))?;
        let http = ReqwestTransport::new(self.connect_timeout, self.timeout, self.user_agent)?;
        Ok(Msg91Client {
            api: Api::with_transport(auth, self.host, Arc::new(http)),
            config: self.config,
        })
    }
}

#[derive(Debug, Clone)]
/// High-level MSG91 client.
///
/// Sends single messages through `GET api/sendhttp.php/` and bulk messages through
/// `POST api/v2/sendsms`, both carrying the current [`RequestConfig`] in the query string.
///
/// Configuration changes need `&mut self`, so they cannot interleave with calls borrowed from
/// the same value. Clones share the connection pool but own their configuration.
pub struct Msg91Client {
    api: Api,
    config: RequestConfig,
}

impl Msg91Client {
    /// Create a client with the default host, timeouts and [`RequestConfig`].
    ///
    /// For more customization, use [`Msg91Client::builder`].
    pub fn new(auth_key: impl Into<String>) -> Result<Self, Msg91Error> {
        Self::builder(auth_key).build()
    }

    pub fn builder(auth_key: impl Into<String>) -> Msg91ClientBuilder {
        Msg91ClientBuilder::new(auth_key)
    }

    /// The underlying authenticated HTTP layer.
    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RequestConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: RequestConfig) {
        self.config = config;
    }

    /// Encode the current configuration (and optional recipient fields) as a query string.
    pub fn build_query_params(
        &self,
        mobile: Option<&MobileNumber>,
        message: Option<&MessageText>,
    ) -> String {
        crate::transport::encode_query(&self.config, mobile, message)
    }

    /// Send one message to one mobile number using the client configuration.
    pub async fn send_to_one(&self, recipient: &Recipient) -> Result<Response, Msg91Error> {
        self.send_to_one_with(recipient, &self.config).await
    }

    /// Like [`Msg91Client::send_to_one`], with `config` in place of the client configuration.
    pub async fn send_to_one_with(
        &self,
        recipient: &Recipient,
        config: &RequestConfig,
    ) -> Result<Response, Msg91Error> {
        let query = crate::transport::encode_query(
            config,
            Some(recipient.mobile()),
            Some(recipient.message()),
        );
        self.api.get(SEND_HTTP_ENDPOINT, &query).await
    }

    /// Send several messages, each to one or more numbers, in a single request.
    ///
    /// Errors:
    /// - [`Msg91Error::Validation`] when `entries` is empty,
    /// - [`Msg91Error::Transport`] when the request does not complete.
    pub async fn send_bulk(&self, entries: &[BulkEntry]) -> Result<Response, Msg91Error> {
        self.send_bulk_with(entries, &self.config).await
    }

    /// Like [`Msg91Client::send_bulk`], with `config` in place of the client configuration.
    pub async fn send_bulk_with(
        &self,
        entries: &[BulkEntry],
        config: &RequestConfig,
    ) -> Result<Response, Msg91Error> {
        if entries.is_empty() {
            return Err(ValidationError::Empty { field: BULK_FIELD }.into());
        }
        let body = crate::transport::encode_bulk_body(config, entries);
        let query = crate::transport::encode_query(config, None, None);
        self.api.post(BULK_SEND_ENDPOINT, &query, &body).await
    }

    /// Send a bulk list given as loosely-typed JSON:
    /// `[{"message": "...", "phone_number": "..." | ["...", ...]}, ...]`.
    ///
    /// Every entry is validated before anything is sent.
    pub async fn send_bulk_json(&self, sms: &serde_json::Value) -> Result<Response, Msg91Error> {
        let entries = crate::domain::bulk_entries_from_json(sms)?;
        self.send_bulk(&entries).await
    }
}
