use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::api::handlers::{self, ErrorResponse};
use crate::upstream::Upstream;

/// Last-resort handler: anything unhandled becomes a generic 500 body
/// rather than a dropped connection.
fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Something went wrong!")),
    )
        .into_response()
}

pub fn create_router<S: Upstream + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // GeneLab experiment catalog
        .route(
            "/api/genelab/experiments",
            get(handlers::list_experiments),
        )
        .route(
            "/api/genelab/experiments/:id",
            get(handlers::get_experiment),
        )
        .route(
            "/api/genelab/experiments/:id/genes",
            get(handlers::get_experiment_genes),
        )
        // Text-generation insights
        .route(
            "/api/groq/explain-genes",
            post(handlers::explain_genes::<S>),
        )
        .route(
            "/api/groq/explain-space-effects",
            post(handlers::explain_space_effects::<S>),
        )
        .route("/api/groq/planet-facts", post(handlers::planet_facts::<S>))
        .route(
            "/api/groq/generate-quiz",
            post(handlers::generate_quiz::<S>),
        )
        // Web-search insights
        .route("/api/tavily/research", post(handlers::research::<S>))
        .route("/api/tavily/search", post(handlers::search::<S>))
        .route(
            "/api/tavily/earth-applications",
            post(handlers::earth_applications::<S>),
        )
        // Space data feeds
        .route(
            "/api/space-data/iss-location",
            get(handlers::iss_location::<S>),
        )
        .route(
            "/api/space-data/space-weather",
            get(handlers::space_weather::<S>),
        )
        .route(
            "/api/space-data/planetary-positions",
            get(handlers::planetary_positions),
        )
        .route(
            "/api/space-data/upcoming-launches",
            get(handlers::upcoming_launches::<S>),
        )
        // Planet-expert chat
        .route("/api/chat", post(handlers::chat::<S>))
        // NASA media
        .route("/api/nasa/images", get(handlers::nasa_images::<S>))
        .route("/api/nasa/apod", get(handlers::apod::<S>))
        // The surface is public and CORS-open
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
}
