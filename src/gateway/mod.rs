pub mod aggregate;
pub mod chat;
pub mod normalize;
pub mod prompts;

pub use aggregate::{with_fallback, Aggregated};
