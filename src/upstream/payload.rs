//! Raw wire shapes of every upstream this gateway talks to. Fields the
//! gateway does not consume are simply not declared; optional fields
//! stay optional here and get their defaults in the normalizers.

use serde::{Deserialize, Serialize};

use crate::model::ChatMessage;

/// open-notify `iss-now.json`. Coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct IssNowPayload {
    pub timestamp: i64,
    pub iss_position: IssPositionPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssPositionPayload {
    pub latitude: String,
    pub longitude: String,
}

/// One event from the DONKI coronal-mass-ejection feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CmeEventPayload {
    #[serde(rename = "activityID")]
    pub activity_id: Option<String>,
    #[serde(rename = "startTime")]
    pub start_time: Option<String>,
    #[serde(rename = "sourceLocation")]
    pub source_location: Option<String>,
    pub note: Option<String>,
    pub link: Option<String>,
}

/// One event from the DONKI solar-flare feed. Field names differ from
/// the CME feed, hence the separate type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlareEventPayload {
    #[serde(rename = "flrID")]
    pub flr_id: Option<String>,
    #[serde(rename = "beginTime")]
    pub begin_time: Option<String>,
    #[serde(rename = "sourceLocation")]
    pub source_location: Option<String>,
    #[serde(rename = "classType")]
    pub class_type: Option<String>,
}

/// Launch Library 2 `launch/upcoming` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchListPayload {
    #[serde(default)]
    pub results: Vec<RawLaunch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLaunch {
    pub name: Option<String>,
    pub launch_service_provider: Option<NamedPayload>,
    pub rocket: Option<RocketPayload>,
    pub pad: Option<PadPayload>,
    pub net: Option<String>,
    pub status: Option<NamedPayload>,
    pub mission: Option<MissionPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedPayload {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RocketPayload {
    pub configuration: Option<NamedPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PadPayload {
    pub name: Option<String>,
    pub location: Option<NamedPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MissionPayload {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request body for the Groq chat-completions endpoint, minus the model
/// name which the client fills in.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionPayload {
    #[serde(default)]
    pub choices: Vec<ChatChoicePayload>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoicePayload {
    pub message: ChatMessagePayload,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessagePayload {
    pub content: String,
}

/// Tavily search request. Serialized as-is; the API key travels in a
/// header, never in the body.
#[derive(Debug, Clone, Serialize)]
pub struct TavilySearchRequest {
    pub query: String,
    pub search_depth: String,
    pub include_answer: bool,
    pub include_images: bool,
    pub include_raw_content: bool,
    pub max_results: usize,
}

/// Tavily search response. `extra` keeps any fields this gateway does
/// not model so the raw-search route can pass them through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TavilySearchPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// NASA image-library search response.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageSearchPayload {
    pub collection: ImageCollectionPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageCollectionPayload {
    #[serde(default)]
    pub items: Vec<ImageItemPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageItemPayload {
    #[serde(default)]
    pub data: Vec<ImageDataPayload>,
    #[serde(default)]
    pub links: Vec<ImageLinkPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageDataPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_created: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageLinkPayload {
    pub rel: Option<String>,
    pub href: Option<String>,
}
