use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}")]
    Status { status: u16 },

    /// The provider answered 2xx but reported an error in the body.
    #[error("provider error: {0}")]
    Api(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<market::MarketError> for ProviderError {
    fn from(e: market::MarketError) -> Self {
        Self::Malformed(e.to_string())
    }
}
