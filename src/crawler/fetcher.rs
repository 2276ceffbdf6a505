//! HTTP fetch layer
//!
//! One client is built per run and reused for every request, including the
//! final upload, so all fetches share a connection pool. Each page fetch
//! honors the run's cancellation token and a fixed timeout. Any network
//! failure, timeout, or non-success status aborts the whole run; there is
//! no retry, the catalog is either reachable or the run is not worth
//! finishing.

use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Total per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client shared by all requests of a run.
///
/// # Arguments
///
/// * `user_agent` - The User-Agent header value to send
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use bookgrab::crawler::build_http_client;
///
/// let client = build_http_client("bookgrab/0.1.0").unwrap();
/// ```
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page and returns its body as text.
///
/// The cancellation token is checked before the request goes out and raced
/// against it while in flight, so an interrupt takes effect mid-download. A
/// cancelled fetch reports [`ScrapeError::Cancelled`], never a network error.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - Absolute URL of the page to fetch
/// * `cancel` - Token cancelling the whole run
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(ScrapeError)` - Cancelled, timed out, a transport failure, or a
///   non-success status
pub async fn fetch_html(
    client: &Client,
    url: &Url,
    cancel: &CancellationToken,
) -> crate::Result<String> {
    if cancel.is_cancelled() {
        return Err(ScrapeError::Cancelled);
    }

    tracing::debug!("GET {}", url);

    let response = tokio::select! {
        _ = cancel.cancelled() => return Err(ScrapeError::Cancelled),
        result = client.get(url.clone()).send() => result.map_err(|e| classify(url, e))?,
    };

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = tokio::select! {
        _ = cancel.cancelled() => return Err(ScrapeError::Cancelled),
        result = response.text() => result.map_err(|e| classify(url, e))?,
    };

    Ok(body)
}

/// Classifies a transport error, keeping timeouts distinct
fn classify(url: &Url, error: reqwest::Error) -> ScrapeError {
    if error.is_timeout() {
        ScrapeError::Timeout {
            url: url.to_string(),
        }
    } else {
        ScrapeError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
