use chrono::NaiveDate;

use crate::upstream::error::UpstreamError;
use crate::upstream::payload::{
    ChatCompletionRequest, CmeEventPayload, FlareEventPayload, ImageSearchPayload, IssNowPayload,
    LaunchListPayload, TavilySearchPayload, TavilySearchRequest,
};

pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Read-side data feeds: ISS tracking, DONKI space weather, and the
/// launch schedule. One HTTP call per method, no retries; the gateway
/// decides whether to fall back.
#[async_trait::async_trait]
pub trait SpaceDataUpstream: Send + Sync {
    async fn iss_now(&self) -> UpstreamResult<IssNowPayload>;
    async fn donki_cme(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> UpstreamResult<Vec<CmeEventPayload>>;
    async fn donki_flares(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> UpstreamResult<Vec<FlareEventPayload>>;
    async fn upcoming_launches(&self, limit: usize) -> UpstreamResult<LaunchListPayload>;
}

/// The two AI providers. A missing API key fails the call with
/// `ConfigMissing` before any request is made.
#[async_trait::async_trait]
pub trait InsightUpstream: Send + Sync {
    /// Run one chat completion and return the assistant message text.
    async fn chat_completion(&self, request: ChatCompletionRequest) -> UpstreamResult<String>;
    async fn tavily_search(
        &self,
        request: TavilySearchRequest,
    ) -> UpstreamResult<TavilySearchPayload>;
}

/// NASA media: the image library and the astronomy picture of the day.
#[async_trait::async_trait]
pub trait MediaUpstream: Send + Sync {
    async fn search_images(&self, query: &str, count: usize) -> UpstreamResult<ImageSearchPayload>;
    /// APOD is proxied verbatim, so the raw JSON value is returned.
    async fn apod(&self) -> UpstreamResult<serde_json::Value>;
}

pub trait Upstream: SpaceDataUpstream + InsightUpstream + MediaUpstream + Send + Sync {}
