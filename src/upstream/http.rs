use chrono::NaiveDate;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{AppConfig, UpstreamConfig};
use crate::upstream::error::UpstreamError;
use crate::upstream::payload::{
    ChatCompletionPayload, ChatCompletionRequest, CmeEventPayload, FlareEventPayload,
    ImageSearchPayload, IssNowPayload, LaunchListPayload, TavilySearchPayload,
    TavilySearchRequest,
};
use crate::upstream::traits::{
    InsightUpstream, MediaUpstream, SpaceDataUpstream, Upstream, UpstreamResult,
};

/// Groq model used for every completion.
const GROQ_MODEL: &str = "llama3-70b-8192";

/// NASA's public demo key; real deployments set NASA_API_KEY.
const NASA_DEMO_KEY: &str = "DEMO_KEY";

/// Production implementation of the upstream seam: one reqwest call per
/// operation with a bounded timeout. API keys are captured once at
/// construction from the process environment.
pub struct HttpUpstream {
    client: reqwest::Client,
    config: UpstreamConfig,
    groq_api_key: Option<String>,
    tavily_api_key: Option<String>,
    nasa_api_key: String,
}

impl HttpUpstream {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream.feed_timeout())
            .build()?;

        Ok(Self {
            client,
            config: config.upstream.clone(),
            groq_api_key: non_empty_env("GROQ_API_KEY"),
            tavily_api_key: non_empty_env("TAVILY_API_KEY"),
            nasa_api_key: non_empty_env("NASA_API_KEY")
                .unwrap_or_else(|| NASA_DEMO_KEY.to_string()),
        })
    }

    /// Send a request with an explicit timeout and decode the JSON
    /// body, mapping every failure mode into the taxonomy.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        timeout: Duration,
    ) -> UpstreamResult<T> {
        let response = builder
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(e, timeout))?;

        let response = response
            .error_for_status()
            .map_err(|e| UpstreamError::from_reqwest(e, timeout))?;

        response
            .json::<T>()
            .await
            .map_err(|e| UpstreamError::MalformedPayload(e.to_string()))
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[async_trait::async_trait]
impl SpaceDataUpstream for HttpUpstream {
    async fn iss_now(&self) -> UpstreamResult<IssNowPayload> {
        let request = self.client.get(&self.config.open_notify_url);
        self.fetch_json(request, self.config.feed_timeout()).await
    }

    async fn donki_cme(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> UpstreamResult<Vec<CmeEventPayload>> {
        let request = self
            .client
            .get(format!("{}/CME", self.config.donki_url))
            .query(&[
                ("startDate", start_date.to_string()),
                ("endDate", end_date.to_string()),
                ("api_key", self.nasa_api_key.clone()),
            ]);
        self.fetch_json(request, self.config.feed_timeout()).await
    }

    async fn donki_flares(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> UpstreamResult<Vec<FlareEventPayload>> {
        let request = self
            .client
            .get(format!("{}/FLR", self.config.donki_url))
            .query(&[
                ("startDate", start_date.to_string()),
                ("endDate", end_date.to_string()),
                ("api_key", self.nasa_api_key.clone()),
            ]);
        self.fetch_json(request, self.config.feed_timeout()).await
    }

    async fn upcoming_launches(&self, limit: usize) -> UpstreamResult<LaunchListPayload> {
        let request = self
            .client
            .get(format!(
                "{}/launch/upcoming/",
                self.config.launch_library_url
            ))
            .query(&[("limit", limit.to_string())]);
        self.fetch_json(request, self.config.feed_timeout()).await
    }
}

#[async_trait::async_trait]
impl InsightUpstream for HttpUpstream {
    async fn chat_completion(&self, request: ChatCompletionRequest) -> UpstreamResult<String> {
        let api_key = self
            .groq_api_key
            .as_ref()
            .ok_or(UpstreamError::ConfigMissing("GROQ_API_KEY"))?;

        let body = serde_json::json!({
            "model": GROQ_MODEL,
            "messages": request.messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        let builder = self
            .client
            .post(&self.config.groq_url)
            .bearer_auth(api_key)
            .json(&body);

        let payload: ChatCompletionPayload = self
            .fetch_json(builder, self.config.insight_timeout())
            .await?;

        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                UpstreamError::MalformedPayload("completion had no choices".to_string())
            })
    }

    async fn tavily_search(
        &self,
        request: TavilySearchRequest,
    ) -> UpstreamResult<TavilySearchPayload> {
        let api_key = self
            .tavily_api_key
            .as_ref()
            .ok_or(UpstreamError::ConfigMissing("TAVILY_API_KEY"))?;

        let builder = self
            .client
            .post(&self.config.tavily_url)
            .header("X-API-Key", api_key)
            .json(&request);

        self.fetch_json(builder, self.config.insight_timeout())
            .await
    }
}

#[async_trait::async_trait]
impl MediaUpstream for HttpUpstream {
    async fn search_images(&self, query: &str, count: usize) -> UpstreamResult<ImageSearchPayload> {
        let request = self
            .client
            .get(format!("{}/search", self.config.nasa_images_url))
            .query(&[
                ("q", query.to_string()),
                ("media_type", "image".to_string()),
                ("page", "1".to_string()),
                ("page_size", count.to_string()),
            ]);
        self.fetch_json(request, self.config.feed_timeout()).await
    }

    async fn apod(&self) -> UpstreamResult<serde_json::Value> {
        let request = self
            .client
            .get(&self.config.apod_url)
            .query(&[("api_key", self.nasa_api_key.clone())]);
        self.fetch_json(request, self.config.feed_timeout()).await
    }
}

impl Upstream for HttpUpstream {}
