//! HTTP transport for ISS requests.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{COOKIE, HeaderMap, SET_COOKIE};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Default ISS API root.
pub const DEFAULT_BASE_URL: &str = "https://iss.moex.com/iss/";

/// Default passport authentication endpoint.
pub const DEFAULT_AUTH_URL: &str = "https://passport.moex.com/authenticate";

/// Name of the session cookie issued by the passport service.
const PASSPORT_COOKIE: &str = "MicexPassportCert";

/// Response header that confirms access to subscription data.
const PASSPORT_MARKER_HEADER: &str = "x-micexpassport-marker";

/// Login for the MOEX passport service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// User name.
    pub user: String,
    /// Password.
    pub password: String,
}

impl Credentials {
    /// Creates credentials.
    #[must_use]
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Configuration for the ISS client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// ISS API root.
    pub base_url: String,
    /// Passport authentication endpoint.
    pub auth_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for failed requests.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
    /// Passport login, required for order books and other subscription data.
    pub credentials: Option<Credentials>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            base_delay_ms: 500,
            max_delay_ms: 10_000,
            user_agent: format!("moexiss/{}", env!("CARGO_PKG_VERSION")),
            credentials: None,
        }
    }
}

impl ClientConfig {
    /// Sets the passport login.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Parses the API root, adding the trailing slash relative paths need.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidUrl`] if the URL does not parse.
    pub fn base(&self) -> Result<Url, TransportError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

/// Errors raised by the transport.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {0} attempts")]
    Timeout(u32),

    /// Server returned an error status.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },

    /// Server rejected the request.
    #[error("Request rejected with status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
    },

    /// The response did not confirm access to subscription data.
    #[error("Access denied: the request requires an authorised passport session")]
    Forbidden,

    /// The passport service rejected the login or issued no session cookie.
    #[error("Authentication failed with status {status}")]
    Authentication {
        /// HTTP status code of the authentication response.
        status: u16,
    },

    /// A URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// The network seam of the client.
///
/// Implementations fetch one URL and return the raw response body. Retry policy belongs to
/// the implementation; callers treat every error as final.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches `url`. When `authorized` is set the response must confirm access to
    /// subscription data.
    async fn get(&self, url: &Url, authorized: bool) -> Result<Bytes, TransportError>;
}

/// `reqwest` transport with passport authentication and retries.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
    session: Option<String>,
}

impl HttpTransport {
    /// Creates an unauthenticated transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            config,
            session: None,
        })
    }

    /// Creates a transport and, if credentials are configured, opens a passport session.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created or authentication fails.
    pub async fn connect(config: ClientConfig) -> Result<Self, TransportError> {
        let mut transport = Self::new(config)?;
        if let Some(credentials) = transport.config.credentials.clone() {
            transport.session = Some(transport.authenticate(&credentials).await?);
        }
        Ok(transport)
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns true if a passport session is open.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Logs in with basic authentication and returns the session cookie value.
    async fn authenticate(&self, credentials: &Credentials) -> Result<String, TransportError> {
        debug!(url = %self.config.auth_url, user = %credentials.user, "authenticating");
        let response = self
            .client
            .get(&self.config.auth_url)
            .basic_auth(&credentials.user, Some(&credentials.password))
            .send()
            .await?;

        let status = response.status();
        match passport_cookie(response.headers()) {
            Some(cookie) if !status.is_client_error() && !status.is_server_error() => {
                debug!("passport session opened");
                Ok(cookie)
            }
            _ => Err(TransportError::Authentication {
                status: status.as_u16(),
            }),
        }
    }

    /// Calculates the backoff delay with exponential backoff and jitter.
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        let exp_delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));
        let capped_delay = exp_delay.min(self.config.max_delay_ms);

        // Deterministic ±25% jitter.
        let jitter_range = capped_delay / 4;
        let jitter = if jitter_range > 0 {
            let jitter_offset = (u64::from(attempt) * 17) % (jitter_range * 2);
            jitter_offset as i64 - jitter_range as i64
        } else {
            0
        };

        let final_delay = (capped_delay as i64 + jitter).max(100) as u64;
        Duration::from_millis(final_delay)
    }

    /// Determines if an error is retryable.
    fn is_retryable_error(error: &reqwest::Error) -> bool {
        if error.is_builder() {
            return false;
        }
        error.is_timeout() || error.is_connect() || error.is_request()
    }

    fn is_retryable_status(status: StatusCode) -> bool {
        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url, authorized: bool) -> Result<Bytes, TransportError> {
        let mut attempts = 0;

        loop {
            let mut request = self.client.get(url.clone());
            if let Some(session) = &self.session {
                request = request.header(COOKIE, format!("{PASSPORT_COOKIE}={session}"));
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if Self::is_retryable_status(status) {
                        if attempts < self.config.max_retries {
                            attempts += 1;
                            let delay = self.calculate_backoff_delay(attempts);
                            warn!(%url, status = status.as_u16(), attempts, ?delay, "retrying");
                            tokio::time::sleep(delay).await;
                            continue;
                        }
                        return Err(TransportError::ServerError {
                            status: status.as_u16(),
                        });
                    }

                    check_response(status, response.headers(), authorized)?;
                    let body = response.bytes().await?;
                    debug!(%url, bytes = body.len(), "response received");
                    return Ok(body);
                }
                Err(e) if Self::is_retryable_error(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    let delay = self.calculate_backoff_delay(attempts);
                    warn!(%url, error = %e, attempts, ?delay, "retrying");
                    tokio::time::sleep(delay).await;
                }
                Err(e) if e.is_timeout() => return Err(TransportError::Timeout(attempts + 1)),
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Finds the passport session cookie among `Set-Cookie` headers.
fn passport_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|cookie| cookie.split(';').next())
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == PASSPORT_COOKIE)
        .map(|(_, value)| value.to_string())
}

/// Rejects error statuses first, then authorized responses without the access marker.
fn check_response(
    status: StatusCode,
    headers: &HeaderMap,
    authorized: bool,
) -> Result<(), TransportError> {
    if !status.is_success() {
        return Err(TransportError::Rejected {
            status: status.as_u16(),
        });
    }
    if authorized && !access_granted(headers) {
        return Err(TransportError::Forbidden);
    }
    Ok(())
}

fn access_granted(headers: &HeaderMap) -> bool {
    headers
        .get(PASSPORT_MARKER_HEADER)
        .is_some_and(|marker| marker.as_bytes() == b"granted")
}
