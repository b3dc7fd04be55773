use axum::{
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    Json as RequestJson,
};
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog::{self, ExperimentFilter};
use crate::gateway::{aggregate, chat, Aggregated};
use crate::model::{
    ChatMessage, ExperimentContext, ExperimentDetail, ExperimentPage, GeneChangeSummary,
    GeneRecord, GeneSortKey, NasaImage, QuizQuestion, RawGeneRecord, SortOrder,
};
use crate::upstream::payload::TavilySearchRequest;
use crate::upstream::{MediaUpstream, Upstream};

pub type AppState<S> = Arc<S>;

/// Header marking a response that was served by the fallback provider.
pub const DEGRADED_HEADER: &str = "x-degraded";

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}

fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}

/// Serialize an aggregation result, tagging fallback-served bodies with
/// the degraded header so callers can tell substitution happened.
fn aggregated_response<T: Serialize>(aggregated: Aggregated<T>) -> Response {
    let mut response = Json(aggregated.value).into_response();
    if aggregated.degraded {
        response.headers_mut().insert(
            HeaderName::from_static(DEGRADED_HEADER),
            HeaderValue::from_static("true"),
        );
    }
    response
}

// ---------------------------------------------------------------------------
// GeneLab catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ExperimentListQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub organism: Option<String>,
    pub mission: Option<String>,
}

pub async fn list_experiments(
    Query(query): Query<ExperimentListQuery>,
) -> Json<ExperimentPage> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10);
    let filter = ExperimentFilter {
        organism: query.organism,
        mission: query.mission,
    };

    Json(catalog::list_experiments(page, limit, &filter))
}

pub async fn get_experiment(Path(id): Path<String>) -> Response {
    match catalog::data::experiment_detail(&id) {
        Some(detail) => Json::<ExperimentDetail>(detail).into_response(),
        None => {
            warn!("genelab: unknown experiment {id}");
            internal_error("Failed to fetch experiment details")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GeneTableQuery {
    pub limit: Option<usize>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

pub async fn get_experiment_genes(
    Path(id): Path<String>,
    Query(query): Query<GeneTableQuery>,
) -> Response {
    let key = GeneSortKey::from_param(query.sort.as_deref());
    let order = SortOrder::from_param(query.order.as_deref());
    let limit = query.limit.unwrap_or(100);

    match catalog::genes_for(&id, key, order, limit) {
        Some(genes) => Json::<Vec<GeneRecord>>(genes).into_response(),
        None => {
            warn!("genelab: no gene table for experiment {id}");
            internal_error("Failed to fetch gene expression data")
        }
    }
}

// ---------------------------------------------------------------------------
// Text-generation insights
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ExplainGenesRequest {
    pub genes: Option<Vec<RawGeneRecord>>,
    #[serde(default)]
    pub experiment: ExperimentContext,
}

pub async fn explain_genes<S: Upstream>(
    State(state): State<AppState<S>>,
    RequestJson(body): RequestJson<ExplainGenesRequest>,
) -> Response {
    let Some(genes) = body.genes.filter(|genes| !genes.is_empty()) else {
        return bad_request("Valid gene data is required");
    };

    aggregated_response(aggregate::explain_genes(state.as_ref(), genes, body.experiment).await)
}

#[derive(Debug, Deserialize)]
pub struct ExplainSpaceEffectsRequest {
    pub experiment: Option<ExperimentContext>,
    #[serde(rename = "geneChanges")]
    pub gene_changes: Option<GeneChangeSummary>,
}

pub async fn explain_space_effects<S: Upstream>(
    State(state): State<AppState<S>>,
    RequestJson(body): RequestJson<ExplainSpaceEffectsRequest>,
) -> Response {
    let (Some(experiment), Some(changes)) = (body.experiment, body.gene_changes) else {
        return bad_request("Experiment metadata and gene changes are required");
    };

    aggregated_response(
        aggregate::explain_space_effects(state.as_ref(), experiment, changes).await,
    )
}

#[derive(Debug, Deserialize)]
pub struct PlanetFactsRequest {
    pub planet: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlanetFactsResponse {
    pub facts: Vec<String>,
}

pub async fn planet_facts<S: Upstream>(
    State(state): State<AppState<S>>,
    RequestJson(body): RequestJson<PlanetFactsRequest>,
) -> Response {
    let Some(planet) = body.planet.filter(|p| !p.trim().is_empty()) else {
        return bad_request("Planet name is required");
    };

    aggregated_response(
        aggregate::planet_facts(state.as_ref(), &planet)
            .await
            .map(|facts| PlanetFactsResponse { facts }),
    )
}

#[derive(Debug, Deserialize)]
pub struct PlanetRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    pub planets: Option<Vec<PlanetRef>>,
    #[serde(default)]
    pub facts: Vec<String>,
    #[serde(rename = "questionCount")]
    pub question_count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

pub async fn generate_quiz<S: Upstream>(
    State(state): State<AppState<S>>,
    RequestJson(body): RequestJson<GenerateQuizRequest>,
) -> Response {
    let Some(planets) = body.planets.filter(|planets| !planets.is_empty()) else {
        return bad_request("Valid planets data is required");
    };

    let planet_names = planets
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let question_count = body.question_count.unwrap_or(5);

    aggregated_response(
        aggregate::generate_quiz(state.as_ref(), &planet_names, &body.facts, question_count)
            .await
            .map(|questions| QuizResponse { questions }),
    )
}

// ---------------------------------------------------------------------------
// Web-search insights
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    pub query: Option<String>,
    pub search_depth: Option<String>,
}

pub async fn research<S: Upstream>(
    State(state): State<AppState<S>>,
    RequestJson(body): RequestJson<ResearchRequest>,
) -> Response {
    let Some(query) = body.query.filter(|q| !q.trim().is_empty()) else {
        return bad_request("Query is required");
    };

    aggregated_response(aggregate::research(state.as_ref(), query, body.search_depth).await)
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub search_depth: Option<String>,
    pub include_images: Option<bool>,
    pub include_answer: Option<bool>,
    pub include_raw_content: Option<bool>,
    pub max_results: Option<usize>,
}

pub async fn search<S: Upstream>(
    State(state): State<AppState<S>>,
    RequestJson(body): RequestJson<SearchRequest>,
) -> Response {
    let Some(query) = body.query.filter(|q| !q.trim().is_empty()) else {
        return bad_request("Query is required");
    };

    let request = TavilySearchRequest {
        query,
        search_depth: body.search_depth.unwrap_or_else(|| "basic".to_string()),
        include_answer: body.include_answer.unwrap_or(true),
        include_images: body.include_images.unwrap_or(true),
        include_raw_content: body.include_raw_content.unwrap_or(false),
        max_results: body.max_results.unwrap_or(5),
    };

    aggregated_response(aggregate::search(state.as_ref(), request).await)
}

#[derive(Debug, Deserialize)]
pub struct EarthApplicationsRequest {
    #[serde(rename = "experimentType")]
    pub experiment_type: Option<String>,
    pub genes: Option<Vec<RawGeneRecord>>,
    #[serde(rename = "spaceConditions")]
    pub space_conditions: Option<String>,
}

pub async fn earth_applications<S: Upstream>(
    State(state): State<AppState<S>>,
    RequestJson(body): RequestJson<EarthApplicationsRequest>,
) -> Response {
    let experiment_type = body.experiment_type.filter(|t| !t.trim().is_empty());
    let genes = body.genes.filter(|genes| !genes.is_empty());
    let (Some(experiment_type), Some(genes)) = (experiment_type, genes) else {
        return bad_request("Experiment type and valid gene data are required");
    };

    aggregated_response(
        aggregate::earth_applications(state.as_ref(), experiment_type, genes, body.space_conditions)
            .await,
    )
}

// ---------------------------------------------------------------------------
// Space data feeds
// ---------------------------------------------------------------------------

pub async fn iss_location<S: Upstream>(State(state): State<AppState<S>>) -> Response {
    aggregated_response(aggregate::iss_location(state.as_ref()).await)
}

pub async fn space_weather<S: Upstream>(State(state): State<AppState<S>>) -> Response {
    aggregated_response(aggregate::space_weather(state.as_ref()).await)
}

pub async fn planetary_positions() -> Response {
    Json(aggregate::planetary_positions()).into_response()
}

pub async fn upcoming_launches<S: Upstream>(State(state): State<AppState<S>>) -> Response {
    aggregated_response(aggregate::upcoming_launches(state.as_ref()).await)
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Option<Vec<ChatMessage>>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

pub async fn chat<S: Upstream>(
    State(state): State<AppState<S>>,
    RequestJson(body): RequestJson<ChatRequest>,
) -> Response {
    let Some(messages) = body.messages else {
        return bad_request("Invalid request format. Messages array is required.");
    };

    aggregated_response(
        chat::respond(state.as_ref(), messages)
            .await
            .map(|response| ChatResponse { response }),
    )
}

// ---------------------------------------------------------------------------
// NASA media
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ImagesQuery {
    pub query: Option<String>,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ImagesResponse {
    pub items: Vec<NasaImage>,
}

pub async fn nasa_images<S: Upstream>(
    State(state): State<AppState<S>>,
    Query(query): Query<ImagesQuery>,
) -> Response {
    let Some(term) = query.query.filter(|q| !q.trim().is_empty()) else {
        return bad_request("Query parameter is required");
    };
    let count = query.count.unwrap_or(5);

    aggregated_response(
        aggregate::nasa_images(state.as_ref(), &term, count)
            .await
            .map(|items| ImagesResponse { items }),
    )
}

/// APOD is proxied verbatim and has no fallback; upstream failure is a
/// plain 500.
pub async fn apod<S: Upstream>(State(state): State<AppState<S>>) -> Response {
    match MediaUpstream::apod(state.as_ref()).await {
        Ok(value) => Json(value).into_response(),
        Err(err) => {
            warn!("apod: upstream failed: {err}");
            internal_error("Failed to fetch Astronomy Picture of the Day")
        }
    }
}
