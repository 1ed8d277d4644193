use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::errors::ProviderError;

/// Shared client settings for every provider.
pub fn build_client(timeout: Duration) -> Result<Client, ProviderError> {
    let http = Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Duration::from_secs(30))
        .tcp_keepalive(Duration::from_secs(30))
        .build()?;

    Ok(http)
}

/// Rejects non-2xx responses and returns the body bytes.
pub async fn read_body(resp: Response) -> Result<Vec<u8>, ProviderError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ProviderError::Status {
            status: status.as_u16(),
        });
    }

    Ok(resp.bytes().await?.to_vec())
}

/// [`read_body`] followed by a typed JSON decode.
pub async fn decode_json<T: DeserializeOwned>(resp: Response) -> Result<T, ProviderError> {
    let body = read_body(resp).await?;
    serde_json::from_slice(&body).map_err(|e| ProviderError::Malformed(e.to_string()))
}
