use crate::TrackStore;
use async_trait::async_trait;
use distortion_core::{Error, Result};
use std::time::Duration;

/// Remote key-value store reached over HTTP.
///
/// Keys map onto paths under the configured base URL: `GET <base>/<key>`.
/// A 404 is a store miss, not an error; any other non-success status is.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Store(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl TrackStore for HttpStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let url = format!("{}/{}", self.base_url, key);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Store(format!("Request to {} failed: {}", url, e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Error::Store(format!(
                "Store returned status {} for key '{}'",
                response.status(),
                key
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Store(format!("Failed to read store response body: {}", e)))?;
        Ok(Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let store = HttpStore::new("https://kv.example.com/music/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(store.base_url, "https://kv.example.com/music");
    }
}
