//! Shared HTTP plumbing for the photo API adapters.

use std::time::Duration;

use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::errors::AlbumError;

/// Builds the HTTP client shared by the adapters.
///
/// # Errors
/// Returns error if the client cannot be created.
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<Client, AlbumError> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .map_err(|e| AlbumError::network(format!("failed to create HTTP client: {e}")))
}

fn map_send_error(e: &reqwest::Error) -> AlbumError {
    warn!(error = %e, "Photo API request failed");
    if e.is_timeout() {
        AlbumError::network("request timed out")
    } else if e.is_connect() {
        AlbumError::network("failed to connect to photo API")
    } else {
        AlbumError::network(e.to_string())
    }
}

/// Maps a response status to the error it stands for, `None` meaning success.
pub type StatusClassifier = fn(u16, &str) -> Option<AlbumError>;

/// Reason phrase sent by the server, or the standard one for the code.
fn reason_phrase(response: &Response) -> String {
    response.extensions().get::<ReasonPhrase>().map_or_else(
        || {
            response
                .status()
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string()
        },
        |reason| String::from_utf8_lossy(reason.as_bytes()).into_owned(),
    )
}

/// Fails with the classified error unless the response carries a body to read.
fn check_status(response: &Response, classify: StatusClassifier) -> Result<(), AlbumError> {
    let status = response.status();
    let status_text = reason_phrase(response);

    match classify(status.as_u16(), &status_text) {
        Some(error) => {
            debug!(status = status.as_u16(), url = %response.url(), "Photo API returned error status");
            Err(error)
        }
        None => Ok(()),
    }
}

/// Issues a GET request and decodes the JSON body.
///
/// # Errors
/// Returns the error `classify` picks for the status, a network error, or a
/// decode error.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
    classify: StatusClassifier,
) -> Result<T, AlbumError> {
    debug!(url = %url, "Fetching from photo API");

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| map_send_error(&e))?;

    check_status(&response, classify)?;

    response.json::<T>().await.map_err(|e| {
        warn!(error = %e, url = %url, "Failed to parse photo API response");
        AlbumError::decode(e.to_string())
    })
}
