//! Async HTTP client wrapping reqwest.
//!
//! Also the single place a 401 is turned into `AcquireError::Unauthorized`,
//! so the initial fetch and every poll attempt share one unauthorized path.

use crate::error::AcquireError;
use reqwest::StatusCode;
use std::time::Duration;

/// Response from a single GET: status plus the undecoded body text.
#[derive(Debug, Clone)]
pub struct HttpBody {
    pub status: StatusCode,
    pub text: String,
}

/// HTTP client for the acquisition pipeline.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Perform a single GET.
    ///
    /// Connection and body-read failures map to `Transport` named by the
    /// requested address; a 401 short-circuits into `Unauthorized` before
    /// any caller sees the response.
    pub async fn get(&self, url: &str) -> Result<HttpBody, AcquireError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| AcquireError::transport(url, err))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AcquireError::Unauthorized);
        }

        let text = response
            .text()
            .await
            .map_err(|err| AcquireError::transport(url, err))?;

        Ok(HttpBody { status, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_does_not_panic() {
        let _ = HttpClient::new(Duration::from_secs(5));
    }
}
