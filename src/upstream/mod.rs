pub mod error;
pub mod http;
pub mod payload;
pub mod traits;

pub use error::UpstreamError;
pub use http::HttpUpstream;
pub use traits::{InsightUpstream, MediaUpstream, SpaceDataUpstream, Upstream, UpstreamResult};
