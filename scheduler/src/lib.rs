pub mod counters;
pub mod engine;
pub mod pipeline;
pub mod pipelines;
pub mod state;
pub mod types;

pub use engine::PollingScheduler;
pub use pipeline::{Pipeline, PipelineError};
pub use types::{Cadence, SchedulerConfig, SubscriptionKey, ViewKind};
