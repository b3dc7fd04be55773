//! Router-level tests. The gateway's contract is exercised end to end
//! through the HTTP surface with two upstream doubles: one where every
//! external call fails (the network is gone) and one that answers with
//! canned payloads.

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use astrobio_gateway::api::routes::create_router;
use astrobio_gateway::upstream::payload::{
    ChatCompletionRequest, CmeEventPayload, FlareEventPayload, ImageCollectionPayload,
    ImageDataPayload, ImageItemPayload, ImageLinkPayload, ImageSearchPayload, IssNowPayload,
    IssPositionPayload, LaunchListPayload, RawLaunch, TavilySearchPayload, TavilySearchRequest,
};
use astrobio_gateway::upstream::{
    InsightUpstream, MediaUpstream, SpaceDataUpstream, Upstream, UpstreamError, UpstreamResult,
};

/// Upstream double where every external call fails; the gateway must
/// still answer 200 with fallback data on every fallback-capable route.
struct OfflineUpstream;

fn refused<T>() -> UpstreamResult<T> {
    Err(UpstreamError::Unavailable("connection refused".to_string()))
}

#[async_trait::async_trait]
impl SpaceDataUpstream for OfflineUpstream {
    async fn iss_now(&self) -> UpstreamResult<IssNowPayload> {
        refused()
    }

    async fn donki_cme(
        &self,
        _start_date: NaiveDate,
        _end_date: NaiveDate,
    ) -> UpstreamResult<Vec<CmeEventPayload>> {
        refused()
    }

    async fn donki_flares(
        &self,
        _start_date: NaiveDate,
        _end_date: NaiveDate,
    ) -> UpstreamResult<Vec<FlareEventPayload>> {
        refused()
    }

    async fn upcoming_launches(&self, _limit: usize) -> UpstreamResult<LaunchListPayload> {
        refused()
    }
}

#[async_trait::async_trait]
impl InsightUpstream for OfflineUpstream {
    async fn chat_completion(&self, _request: ChatCompletionRequest) -> UpstreamResult<String> {
        Err(UpstreamError::ConfigMissing("GROQ_API_KEY"))
    }

    async fn tavily_search(
        &self,
        _request: TavilySearchRequest,
    ) -> UpstreamResult<TavilySearchPayload> {
        Err(UpstreamError::Timeout(std::time::Duration::from_secs(15)))
    }
}

#[async_trait::async_trait]
impl MediaUpstream for OfflineUpstream {
    async fn search_images(
        &self,
        _query: &str,
        _count: usize,
    ) -> UpstreamResult<ImageSearchPayload> {
        refused()
    }

    async fn apod(&self) -> UpstreamResult<Value> {
        refused()
    }
}

impl Upstream for OfflineUpstream {}

/// Upstream double answering with canned payloads, covering the
/// normalize-on-success path.
struct ScriptedUpstream;

#[async_trait::async_trait]
impl SpaceDataUpstream for ScriptedUpstream {
    async fn iss_now(&self) -> UpstreamResult<IssNowPayload> {
        Ok(IssNowPayload {
            timestamp: 1_751_000_000,
            iss_position: IssPositionPayload {
                latitude: "47.6".to_string(),
                longitude: "-122.3".to_string(),
            },
        })
    }

    async fn donki_cme(
        &self,
        _start_date: NaiveDate,
        _end_date: NaiveDate,
    ) -> UpstreamResult<Vec<CmeEventPayload>> {
        Ok(vec![CmeEventPayload {
            activity_id: Some("CME-OLD".to_string()),
            start_time: Some("2025-07-01T00:00:00Z".to_string()),
            source_location: None,
            note: None,
            link: None,
        }])
    }

    async fn donki_flares(
        &self,
        _start_date: NaiveDate,
        _end_date: NaiveDate,
    ) -> UpstreamResult<Vec<FlareEventPayload>> {
        Ok(vec![FlareEventPayload {
            flr_id: Some("FLR-NEW".to_string()),
            begin_time: Some("2025-07-02T00:00:00Z".to_string()),
            source_location: Some("S05W12".to_string()),
            class_type: Some("X1.2".to_string()),
        }])
    }

    async fn upcoming_launches(&self, _limit: usize) -> UpstreamResult<LaunchListPayload> {
        Ok(LaunchListPayload {
            results: vec![RawLaunch {
                name: Some("Falcon Heavy Demo".to_string()),
                net: Some("2025-08-01T00:00:00Z".to_string()),
                ..RawLaunch::default()
            }],
        })
    }
}

#[async_trait::async_trait]
impl InsightUpstream for ScriptedUpstream {
    async fn chat_completion(&self, _request: ChatCompletionRequest) -> UpstreamResult<String> {
        Ok("**Mock** completion with *markdown*".to_string())
    }

    async fn tavily_search(
        &self,
        _request: TavilySearchRequest,
    ) -> UpstreamResult<TavilySearchPayload> {
        Ok(TavilySearchPayload {
            answer: Some("Grounded answer".to_string()),
            results: vec![json!({
                "title": "Some Paper",
                "url": "https://example.org/paper",
                "content": "Summary text"
            })],
            extra: serde_json::Map::new(),
        })
    }
}

#[async_trait::async_trait]
impl MediaUpstream for ScriptedUpstream {
    async fn search_images(
        &self,
        _query: &str,
        _count: usize,
    ) -> UpstreamResult<ImageSearchPayload> {
        Ok(ImageSearchPayload {
            collection: ImageCollectionPayload {
                items: vec![
                    ImageItemPayload {
                        data: vec![ImageDataPayload {
                            title: Some("Mars from orbit".to_string()),
                            description: Some("HiRISE".to_string()),
                            date_created: Some("2021-03-01T00:00:00Z".to_string()),
                        }],
                        links: vec![ImageLinkPayload {
                            rel: Some("preview".to_string()),
                            href: Some("https://images.nasa.gov/mars.jpg".to_string()),
                        }],
                    },
                    // No preview link: the normalizer must drop this one.
                    ImageItemPayload {
                        data: vec![ImageDataPayload {
                            title: Some("Broken item".to_string()),
                            description: None,
                            date_created: None,
                        }],
                        links: vec![],
                    },
                ],
            },
        })
    }

    async fn apod(&self) -> UpstreamResult<Value> {
        Ok(json!({"title": "Test APOD", "media_type": "image"}))
    }
}

impl Upstream for ScriptedUpstream {}

fn offline_app() -> Router {
    create_router::<OfflineUpstream>().with_state(Arc::new(OfflineUpstream))
}

fn scripted_app() -> Router {
    create_router::<ScriptedUpstream>().with_state(Arc::new(ScriptedUpstream))
}

async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

fn is_degraded(headers: &HeaderMap) -> bool {
    headers
        .get("x-degraded")
        .map(|v| v == "true")
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Catalog routes (no upstream involved)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn experiment_listing_paginates_and_reports_filtered_total() {
    let (status, headers, body) = get(offline_app(), "/api/genelab/experiments?page=1&limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!is_degraded(&headers));
    assert_eq!(body["total"], 5);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["id"], "GLDS-47");
}

#[tokio::test]
async fn experiment_listing_applies_organism_filter_before_pagination() {
    let (status, _, body) = get(
        offline_app(),
        "/api/genelab/experiments?organism=mouse&page=1&limit=10",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    let organisms: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["organism"].as_str().unwrap())
        .collect();
    assert!(organisms.iter().all(|o| o.contains("Mus musculus")));
}

#[tokio::test]
async fn gene_table_sorted_by_fold_change_desc_returns_top_movers() {
    let (status, _, body) = get(
        offline_app(),
        "/api/genelab/experiments/GLDS-47/genes?limit=3&sort=fold_change&order=desc",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let genes = body.as_array().unwrap();
    assert_eq!(genes.len(), 3);
    assert_eq!(genes[0]["gene_symbol"], "MT1");
    assert_eq!(genes[0]["fold_change"], 2.7);
    assert_eq!(genes[1]["gene_symbol"], "FBXO32");
    assert_eq!(genes[2]["gene_symbol"], "TRIM63");

    let folds: Vec<f64> = genes.iter().map(|g| g["fold_change"].as_f64().unwrap()).collect();
    assert!(folds.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn unknown_experiment_ids_return_error_bodies() {
    let (status, _, body) = get(offline_app(), "/api/genelab/experiments/GLDS-999").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch experiment details");

    let (status, _, body) = get(offline_app(), "/api/genelab/experiments/GLDS-999/genes").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch gene expression data");
}

#[tokio::test]
async fn experiment_detail_includes_samples_and_files() {
    let (status, _, body) = get(offline_app(), "/api/genelab/experiments/GLDS-47").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["strain"], "C57BL/6J");
    assert_eq!(body["samples"].as_array().unwrap().len(), 6);
    assert_eq!(body["dataFiles"].as_array().unwrap().len(), 3);
    assert_eq!(body["samples"][0]["type"], "Flight");
}

// ---------------------------------------------------------------------------
// Fallback behavior with the network gone
// ---------------------------------------------------------------------------

#[tokio::test]
async fn iss_location_degrades_to_fixed_coordinates() {
    let (status, headers, body) = get(offline_app(), "/api/space-data/iss-location").await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_degraded(&headers));
    assert_eq!(body["latitude"], -23.4);
    assert_eq!(body["longitude"], 121.9);
    assert_eq!(body["altitude"], 408.0);
    assert_eq!(body["velocity"], 27600.0);
    assert!(body["timestamp"].as_i64().is_some());
}

#[tokio::test]
async fn space_weather_degrades_to_event_list_sorted_newest_first() {
    let (status, headers, body) = get(offline_app(), "/api/space-data/space-weather").await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_degraded(&headers));

    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["type"], "CME");
    assert_eq!(events[1]["type"], "FLARE");
    for event in events {
        assert!(event["activityID"].as_str().is_some());
        assert!(event["startTime"].as_str().is_some());
        assert!(event["link"].as_str().is_some());
    }

    let times: Vec<&str> = events.iter().map(|e| e["startTime"].as_str().unwrap()).collect();
    assert!(times.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn launches_degrade_to_deterministic_schedule() {
    let (status, headers, body) = get(offline_app(), "/api/space-data/upcoming-launches").await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_degraded(&headers));

    let launches = body.as_array().unwrap();
    assert_eq!(launches.len(), 4);
    assert_eq!(launches[0]["name"], "SpaceX Crew-12");
    assert_eq!(launches[0]["provider"], "SpaceX");
    assert_eq!(launches[1]["vehicle"], "SLS Block 1");
}

#[tokio::test]
async fn research_degrades_to_the_stock_answer() {
    let (status, headers, body) = post_json(
        offline_app(),
        "/api/tavily/research",
        json!({"query": "Medical relevance of MYH7", "search_depth": "advanced"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_degraded(&headers));
    assert!(body["answer"]
        .as_str()
        .unwrap()
        .starts_with("The gene expression changes observed in this space experiment"));
    assert_eq!(body["sources"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn explain_genes_degrades_to_template_explanation() {
    let (status, headers, body) = post_json(
        offline_app(),
        "/api/groq/explain-genes",
        json!({
            "genes": [
                {"gene_symbol": "MYH7", "fold_change": -2.8, "p_value": 0.0001},
                {"gene_symbol": "MT1", "fold_change": 2.7, "p_value": 0.0002}
            ],
            "experiment": {"organism": "Mus musculus", "condition": "microgravity"}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_degraded(&headers));
    let explanation = body["explanation"].as_str().unwrap();
    assert!(explanation.starts_with("Analysis of gene expression changes in Mus musculus"));
    assert!(explanation.contains("microgravity"));
}

#[tokio::test]
async fn explain_space_effects_degrades_to_template_explanation() {
    let (status, headers, body) = post_json(
        offline_app(),
        "/api/groq/explain-space-effects",
        json!({
            "experiment": {"organism": "Arabidopsis thaliana"},
            "geneChanges": {"upregulated": 12, "downregulated": 8, "topPathways": ["stress response"]}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_degraded(&headers));
    assert!(body["explanation"]
        .as_str()
        .unwrap()
        .starts_with("The space environment affects Arabidopsis thaliana"));
}

#[tokio::test]
async fn planet_facts_degrade_to_knowledge_base() {
    let (status, headers, body) = post_json(
        offline_app(),
        "/api/groq/planet-facts",
        json!({"planet": "Jupiter"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_degraded(&headers));
    let facts = body["facts"].as_array().unwrap();
    assert_eq!(facts.len(), 5);
    assert!(facts[0].as_str().unwrap().contains("Jupiter"));
}

#[tokio::test]
async fn quiz_degrades_to_stock_questions() {
    let (status, headers, body) = post_json(
        offline_app(),
        "/api/groq/generate-quiz",
        json!({"planets": [{"name": "Mars"}, {"name": "Saturn"}], "facts": [], "questionCount": 3}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_degraded(&headers));
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    for question in questions {
        assert_eq!(question["options"].as_array().unwrap().len(), 4);
        let correct = question["correctAnswer"].as_str().unwrap();
        assert!(question["options"]
            .as_array()
            .unwrap()
            .iter()
            .any(|o| o == correct));
    }
}

#[tokio::test]
async fn earth_applications_fallback_is_keyed_by_query_topic() {
    let (status, headers, body) = post_json(
        offline_app(),
        "/api/tavily/earth-applications",
        json!({
            "experimentType": "muscle atrophy",
            "genes": [{"gene_symbol": "MYH7", "fold_change": -2.8, "p_value": 0.0001}],
            "spaceConditions": "microgravity"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_degraded(&headers));
    assert!(body["answer"].as_str().unwrap().contains("MYH7"));
    assert_eq!(body["sources"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn raw_search_degrades_to_planet_image_result() {
    let (status, headers, body) = post_json(
        offline_app(),
        "/api/tavily/search",
        json!({"query": "images of Saturn"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_degraded(&headers));
    assert!(body["results"][0]["image_url"]
        .as_str()
        .unwrap()
        .contains("saturn"));
}

#[tokio::test]
async fn chat_degrades_to_planet_knowledge_base() {
    let (status, headers, body) = post_json(
        offline_app(),
        "/api/chat",
        json!({"messages": [
            {"role": "system", "content": "You are an expert on the planet Mars. Provide accurate information."},
            {"role": "user", "content": "Tell me about the atmosphere"}
        ]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_degraded(&headers));
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("Mars has a thin atmosphere"));
}

#[tokio::test]
async fn nasa_images_degrade_to_three_stock_images() {
    let (status, headers, body) = get(offline_app(), "/api/nasa/images?query=mars&count=5").await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_degraded(&headers));
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items[0]["href"].as_str().unwrap().contains("mars"));
}

#[tokio::test]
async fn apod_has_no_fallback_and_fails_plainly() {
    let (status, _, body) = get(offline_app(), "/api/nasa/apod").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch Astronomy Picture of the Day");
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_required_inputs_return_bad_request() {
    let (status, _, body) =
        post_json(offline_app(), "/api/groq/explain-genes", json!({"genes": []})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Valid gene data is required");

    let (status, _, _) = post_json(offline_app(), "/api/tavily/research", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, body) = post_json(offline_app(), "/api/chat", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid request format. Messages array is required."
    );

    let (status, _, body) = get(offline_app(), "/api/nasa/images").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Query parameter is required");

    let (status, _, _) = post_json(offline_app(), "/api/groq/planet-facts", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Live-path normalization through the scripted upstream
// ---------------------------------------------------------------------------

#[tokio::test]
async fn live_iss_location_parses_coordinates_and_is_not_degraded() {
    let (status, headers, body) = get(scripted_app(), "/api/space-data/iss-location").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!is_degraded(&headers));
    assert_eq!(body["latitude"], 47.6);
    assert_eq!(body["longitude"], -122.3);
    assert_eq!(body["timestamp"], 1_751_000_000);
}

#[tokio::test]
async fn live_space_weather_merges_feeds_newest_first() {
    let (status, headers, body) = get(scripted_app(), "/api/space-data/space-weather").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!is_degraded(&headers));

    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 2);
    // The flare begins later than the CME, so it must come first.
    assert_eq!(events[0]["type"], "FLARE");
    assert_eq!(events[0]["note"], "Class X1.2 solar flare detected");
    assert_eq!(events[1]["activityID"], "CME-OLD");
    assert_eq!(events[1]["sourceLocation"], "Unknown");
}

#[tokio::test]
async fn live_launches_get_placeholder_defaults_for_missing_fields() {
    let (status, headers, body) = get(scripted_app(), "/api/space-data/upcoming-launches").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!is_degraded(&headers));

    let launches = body.as_array().unwrap();
    assert_eq!(launches.len(), 1);
    assert_eq!(launches[0]["name"], "Falcon Heavy Demo");
    assert_eq!(launches[0]["provider"], "Unknown");
    assert_eq!(launches[0]["vehicle"], "Unknown Vehicle");
    assert_eq!(launches[0]["location"], "Unknown Location");
    assert_eq!(launches[0]["description"], "No description available");
}

#[tokio::test]
async fn live_research_returns_grounded_answer_without_degraded_header() {
    let (status, headers, body) = post_json(
        scripted_app(),
        "/api/tavily/research",
        json!({"query": "anything"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!is_degraded(&headers));
    assert_eq!(body["answer"], "Grounded answer");
    assert_eq!(body["sources"][0]["title"], "Some Paper");
}

#[tokio::test]
async fn live_explanations_have_markdown_stripped() {
    let (status, headers, body) = post_json(
        scripted_app(),
        "/api/groq/explain-genes",
        json!({
            "genes": [{"gene_symbol": "MT1", "fold_change": 2.7, "p_value": 0.0002}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!is_degraded(&headers));
    assert_eq!(body["explanation"], "Mock completion with markdown");
}

#[tokio::test]
async fn live_image_search_drops_broken_items_and_pads_to_three() {
    let (status, headers, body) = get(scripted_app(), "/api/nasa/images?query=mars").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!is_degraded(&headers));

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["title"], "Mars from orbit");
    // The padded entries come from the deterministic reserve set.
    assert!(items[1]["href"].as_str().unwrap().contains("mars"));
}

#[tokio::test]
async fn live_apod_is_proxied_verbatim() {
    let (status, _, body) = get(scripted_app(), "/api/nasa/apod").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Test APOD");
}

// ---------------------------------------------------------------------------
// Pure routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn planetary_positions_are_idempotent_within_a_day() {
    let (status, headers, first) = get(offline_app(), "/api/space-data/planetary-positions").await;
    let (_, _, second) = get(offline_app(), "/api/space-data/planetary-positions").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!is_degraded(&headers));

    let planets = first.as_array().unwrap();
    assert_eq!(planets.len(), 8);
    assert_eq!(planets[2]["name"], "Earth");
    assert_eq!(planets[2]["distance"], 1.0);

    assert_eq!(first, second);

    for planet in planets {
        let angle = planet["angle"].as_f64().unwrap();
        assert!((0.0..360.0).contains(&angle));
    }
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let (status, _, body) = get(offline_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
