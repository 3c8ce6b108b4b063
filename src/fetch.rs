use crate::location::Location;
use crate::uri_tools::compose_uri;

use hyper::client::HttpConnector;
use hyper::{Client, Uri};
use hyper_tls::HttpsConnector;
use thiserror::Error;

const LOCATION_PATH: &str = "/location";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("cannot compose location URI: {0}")]
    InvalidUri(#[from] hyper::http::Error),
    #[error("location request failed: {0}")]
    Transport(#[from] hyper::Error),
    #[error("location payload is not valid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Issues the single read against `{endpoint}/location`. No retries, no
/// timeout of its own, and no status-code inspection: an error body that
/// is not JSON surfaces as `InvalidPayload`.
#[derive(Debug, Clone)]
pub struct LocationFetcher {
    client: Client<HttpsConnector<HttpConnector>>,
    endpoint: Uri,
}

impl LocationFetcher {
    pub fn new(endpoint: Uri) -> Self {
        Self {
            client: Client::builder().build(HttpsConnector::new()),
            endpoint,
        }
    }

    pub async fn fetch(&self) -> Result<Location, FetchError> {
        let uri = compose_uri(&self.endpoint, LOCATION_PATH)?;
        let response = self.client.get(uri).await?;
        let body = hyper::body::to_bytes(response.into_body()).await?;
        let location = serde_json::from_slice(&body)?;
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // TCP port 1 on loopback refuses the connection outright
        let fetcher = LocationFetcher::new(Uri::from_static("http://127.0.0.1:1"));
        let error = fetcher.fetch().await.unwrap_err();
        assert!(matches!(error, FetchError::Transport(_)));
    }
}
