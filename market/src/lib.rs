//! Display-side market computations.
//!
//! Everything in this crate is synchronous and free of I/O: provider payloads
//! go in, view-model records come out.

pub mod candle;
pub mod error;
pub mod format;
pub mod metrics;
pub mod order_book;
pub mod quote;
pub mod rolling_window;
pub mod time;
pub mod trend;
pub mod types;
pub mod view;

pub use error::MarketError;
pub use order_book::{SyntheticDepth, generate_order_book};
pub use quote::{current_price, normalize_quote, parse_raw_quote};
pub use rolling_window::PriceHistory;
pub use view::ViewState;
