use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::StatusCode;

use std::collections::HashMap;
use std::fmt;

use crate::config::Config;

/// Classified outcome of checking a single URL.
///
/// Every possible outcome of a check maps to exactly one variant, so the
/// classification is closed and exhaustiveness-checked by the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Request completed with a status code in the ok range (< 400)
    Ok(u16),
    /// Request completed with a client or server error code
    Failed { code: u16, reason: String },
    /// Request did not complete within the configured timeout
    Timeout,
    /// Transport-level failure before any response (DNS, refused, unreachable)
    ConnectionError,
    /// Any other failure raised by the HTTP client
    RequestError { kind: String },
}

impl CheckStatus {
    /// Check whether this status represents a reachable URL.
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok(_))
    }

    pub fn is_not_ok(&self) -> bool {
        !self.is_ok()
    }

    /// Classify a completed response by its status code.
    ///
    /// The ok range is code < 400, matching the client's notion of "not an
    /// error". Successful checks render a literal "OK" rather than the
    /// code's reason phrase; failed checks carry the canonical reason.
    pub fn from_status_code(status: StatusCode) -> Self {
        let code = status.as_u16();
        if code < 400 {
            CheckStatus::Ok(code)
        } else {
            CheckStatus::Failed {
                code,
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status Code")
                    .to_string(),
            }
        }
    }

    /// Classify a failed request.
    ///
    /// Timeout is checked before connect: a request that times out while
    /// connecting counts as a timeout.
    pub fn from_error(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            CheckStatus::Timeout
        } else if err.is_connect() {
            CheckStatus::ConnectionError
        } else {
            CheckStatus::RequestError {
                kind: error_kind(err).to_string(),
            }
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Ok(code) => write!(f, "{code} OK"),
            CheckStatus::Failed { code, reason } => write!(f, "{code} {reason}"),
            CheckStatus::Timeout => write!(f, "TIMEOUT"),
            CheckStatus::ConnectionError => write!(f, "CONNECTION_ERROR"),
            CheckStatus::RequestError { kind } => write!(f, "REQUEST ERROR: {kind}"),
        }
    }
}

/// Short name of the failure category for errors that are neither
/// timeouts nor connection failures.
fn error_kind(err: &reqwest::Error) -> &'static str {
    if err.is_builder() {
        "BuilderError"
    } else if err.is_redirect() {
        "RedirectError"
    } else if err.is_body() {
        "BodyError"
    } else if err.is_decode() {
        "DecodeError"
    } else {
        "RequestError"
    }
}

#[async_trait]
pub trait CheckUrls {
    async fn check_urls_with_config(
        &self,
        urls: &[String],
        config: &Config,
    ) -> HashMap<String, CheckStatus>;
}

#[derive(Default, Debug)]
pub struct Checker {}

#[async_trait]
impl CheckUrls for Checker {
    /// Check each URL in input order and return a mapping from URL to its
    /// classified status.
    ///
    /// Total: every failure mode is converted to a `CheckStatus`, nothing
    /// propagates out. Requests are issued strictly sequentially; each
    /// completes before the next begins. Duplicate URLs are each checked
    /// and collapse to a single entry, last-checked wins.
    async fn check_urls_with_config(
        &self,
        urls: &[String],
        config: &Config,
    ) -> HashMap<String, CheckStatus> {
        let timeout = config.timeout_duration();
        info!(
            "Starting check for {} URLs with a timeout of {} seconds",
            urls.len(),
            timeout.as_secs()
        );

        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .unwrap();

        let mut results = HashMap::with_capacity(urls.len());

        for url in urls {
            debug!("Checking {url}");

            let status = match client.get(url).send().await {
                Ok(response) => CheckStatus::from_status_code(response.status()),
                Err(err) => {
                    let status = CheckStatus::from_error(&err);
                    match status {
                        CheckStatus::Timeout => warn!("Request to {url} timed out"),
                        CheckStatus::ConnectionError => warn!("Connection error for {url}"),
                        _ => error!("Unexpected request error for {url}: {err}"),
                    }
                    status
                }
            };

            debug!("Checked: {url:<40} -> {status}");
            results.insert(url.clone(), status);
        }

        info!("URL check finished");
        results
    }
}
