//! Result upload.

use crate::ScrapeError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Outcome of the result POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadOutcome {
    /// HTTP status code the endpoint answered with.
    pub status: u16,
    /// Whether the status was in the 2xx range.
    pub ok: bool,
}

/// POSTs the serialized results to the API endpoint.
///
/// The body is the exact JSON text written to `books.json`. A non-success
/// status is reported in the outcome rather than raised; the files on disk
/// are already complete at this point and a rejecting endpoint should not
/// turn the run into a failure. Only a transport error is an error.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `api_url` - Endpoint accepting the JSON array
/// * `json` - Serialized records
pub async fn post_results(client: &Client, api_url: &str, json: &str) -> crate::Result<UploadOutcome> {
    let response = client
        .post(api_url)
        .header(CONTENT_TYPE, "application/json")
        .body(json.to_string())
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: api_url.to_string(),
            source,
        })?;

    let status = response.status();
    let outcome = UploadOutcome {
        status: status.as_u16(),
        ok: status.is_success(),
    };

    if outcome.ok {
        tracing::info!("Uploaded results to {} (status {})", api_url, outcome.status);
    } else {
        tracing::warn!(
            "Upload to {} answered status {}",
            api_url,
            outcome.status
        );
    }

    Ok(outcome)
}

// Upload behavior against a live endpoint is covered with wiremock in the
// integration tests.
