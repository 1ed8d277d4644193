use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    /// Provider answered, but with its "nothing to show" sentinel.
    #[error("no data available")]
    NoData,

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("invalid price: {0}")]
    InvalidPrice(f64),

    /// Synthetic depth deeper than `order_book::MAX_LEVELS`.
    #[error("invalid level count: {0}")]
    InvalidLevels(usize),

    #[error("insufficient data: {0}")]
    InsufficientData(&'static str),
}
