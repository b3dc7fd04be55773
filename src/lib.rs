pub mod api;
pub mod catalog;
pub mod config;
pub mod fallback;
pub mod gateway;
pub mod model;
pub mod upstream;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export gateway types
pub use gateway::{with_fallback, Aggregated};

// Export all model types
pub use model::*;

// Export upstream types
pub use upstream::{HttpUpstream, Upstream, UpstreamError};

// Function for integration testing
pub async fn run_server() -> anyhow::Result<()> {
    use axum::serve;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with INFO level only (suppress DEBUG logs)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    // Load configuration
    let config = crate::config::AppConfig::load()?;

    let upstream = Arc::new(crate::upstream::HttpUpstream::new(&config)?);

    // Create router with state
    let app = crate::api::routes::create_router().with_state(upstream);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;

    serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::model::{QuizQuestion, SpaceWeatherEvent, WeatherEventType};

    #[test]
    fn space_weather_event_serializes_with_upstream_field_names() {
        let event = SpaceWeatherEvent {
            activity_id: "CME-1".to_string(),
            start_time: "2025-06-28T12:24:00Z".to_string(),
            source_location: "N12E08".to_string(),
            note: "Fast CME".to_string(),
            event_type: WeatherEventType::Cme,
            link: "https://www.swpc.noaa.gov/".to_string(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["activityID"], "CME-1");
        assert_eq!(json["startTime"], "2025-06-28T12:24:00Z");
        assert_eq!(json["type"], "CME");
        assert!(json.get("activity_id").is_none());
    }

    #[test]
    fn weather_event_type_round_trips_all_variants() {
        for (text, variant) in [
            ("\"CME\"", WeatherEventType::Cme),
            ("\"FLARE\"", WeatherEventType::Flare),
            ("\"SEP\"", WeatherEventType::Sep),
        ] {
            let parsed: WeatherEventType = serde_json::from_str(text).unwrap();
            assert_eq!(parsed, variant);
            assert_eq!(serde_json::to_string(&variant).unwrap(), text);
        }
    }

    #[test]
    fn quiz_question_uses_camel_case_answer_key() {
        let question = QuizQuestion {
            question: "Which planet is closest to the Sun?".to_string(),
            options: vec![
                "Venus".to_string(),
                "Mercury".to_string(),
                "Earth".to_string(),
                "Mars".to_string(),
            ],
            correct_answer: "Mercury".to_string(),
        };

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["correctAnswer"], "Mercury");
        assert!(json.get("correct_answer").is_none());
    }
}
