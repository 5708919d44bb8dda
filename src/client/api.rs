use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::client::{ConfigError, Msg91Error};
use crate::domain::{AuthKey, Response};

pub(crate) const DEFAULT_HOST: &str = "http://api.msg91.com/";
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const JSON_PARSE_ERROR: &str = "Error parsing JSON response";

pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

/// A request that never produced a response.
#[derive(Debug)]
pub(crate) struct TransportFailure {
    pub code: u32,
    pub source: Box<dyn StdError + Send + Sync>,
}

impl TransportFailure {
    fn from_reqwest(err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            Msg91Error::CODE_TIMEOUT
        } else if err.is_connect() {
            Msg91Error::CODE_CONNECT
        } else if err.is_builder() {
            Msg91Error::CODE_MALFORMED_REQUEST
        } else if err.is_redirect() {
            Msg91Error::CODE_TOO_MANY_REDIRECTS
        } else if err.is_request() {
            Msg91Error::CODE_SEND
        } else {
            Msg91Error::CODE_RECEIVE
        };
        // The URL carries the auth key.
        Self {
            code,
            source: Box::new(err.without_url()),
        }
    }
}

pub(crate) trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// A zero duration disables the corresponding timeout.
    pub(crate) fn new(
        connect_timeout: Duration,
        timeout: Duration,
        user_agent: Option<String>,
    ) -> Result<Self, Msg91Error> {
        let mut builder = reqwest::Client::builder();
        if !connect_timeout.is_zero() {
            builder = builder.connect_timeout(connect_timeout);
        }
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| Msg91Error::Config(ConfigError::HttpClient(err)))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
            };
            let mut builder = self.client.request(method, request.url.as_str());
            for (name, value) in request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(TransportFailure::from_reqwest)?;
            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = response
                .text()
                .await
                .map_err(TransportFailure::from_reqwest)?;
            Ok(HttpResponse {
                status,
                content_type,
                body,
            })
        })
    }
}

#[derive(Clone)]
/// Authenticated HTTP access to the MSG91 API.
///
/// Every URL gets `&authkey=<key>` appended. Responses are classified by content type into
/// [`Response::Structured`] or [`Response::Raw`]; requests that fail before a response arrives
/// become [`Msg91Error::Transport`].
pub struct Api {
    auth: AuthKey,
    host: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api")
            .field("auth", &self.auth)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

impl Api {
    /// Create an API handle with the default host and timeouts (10 s connect, 30 s total).
    ///
    /// Fails with [`Msg91Error::Config`] when the auth key is the empty string.
    pub fn new(auth_key: impl Into<String>) -> Result<Self, Msg91Error> {
        let auth = AuthKey::new(auth_key)
            .map_err(|err| Msg91Error::Config(ConfigError::AuthKey(err)))?;
        let http = ReqwestTransport::new(DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, None)?;
        Ok(Self::with_transport(auth, DEFAULT_HOST, Arc::new(http)))
    }

    pub(crate) fn with_transport(
        auth: AuthKey,
        host: impl Into<String>,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            auth,
            host: host.into(),
            http,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// `host + endpoint + "?" + query + "&authkey=" + key`; the query must already be encoded.
    pub fn build_url(&self, endpoint: &str, query: &str) -> String {
        crate::transport::build_url(&self.host, endpoint, query, &self.auth)
    }

    /// Issue a `GET` with no body and no extra headers.
    pub async fn get(&self, endpoint: &str, query: &str) -> Result<Response, Msg91Error> {
        tracing::debug!(endpoint, method = "GET", "sending MSG91 request");
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: self.build_url(endpoint, query),
            headers: Vec::new(),
            body: None,
        };
        self.call(request).await
    }

    /// Issue a `POST` with `authkey` and `content-type: application/json` headers and the
    /// JSON-serialized `body`.
    pub async fn post<B>(
        &self,
        endpoint: &str,
        query: &str,
        body: &B,
    ) -> Result<Response, Msg91Error>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body).map_err(Msg91Error::Encode)?;
        tracing::debug!(
            endpoint,
            method = "POST",
            body_len = body.len(),
            "sending MSG91 request"
        );
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: self.build_url(endpoint, query),
            headers: vec![
                (AuthKey::FIELD, self.auth.as_str().to_owned()),
                ("content-type", "application/json".to_owned()),
            ],
            body: Some(body),
        };
        self.call(request).await
    }

    async fn call(&self, request: HttpRequest) -> Result<Response, Msg91Error> {
        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(failure) => {
                let message = failure.source.to_string();
                tracing::warn!(code = failure.code, error = %message, "MSG91 request failed");
                return Err(Msg91Error::Transport {
                    message,
                    code: Some(failure.code),
                    source: Some(failure.source),
                });
            }
        };

        tracing::debug!(
            status = response.status,
            content_type = response.content_type.as_deref().unwrap_or(""),
            "received MSG91 response"
        );

        crate::transport::normalize_response(response.content_type.as_deref(), response.body)
            .map_err(|err| {
                tracing::warn!(error = %err, "MSG91 declared JSON but sent an unparsable body");
                Msg91Error::Transport {
                    message: JSON_PARSE_ERROR.to_owned(),
                    code: None,
                    source: Some(Box::new(err)),
                }
            })
    }
}
