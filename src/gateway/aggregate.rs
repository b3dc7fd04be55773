//! Per-route orchestration: call the upstream, normalize, and on any
//! failure substitute the deterministic fallback. Each request moves
//! PENDING -> (UPSTREAM_OK | UPSTREAM_FAIL) -> (NORMALIZED | FALLBACK)
//! -> RESPONDED; there is no retry loop anywhere.

use chrono::{Datelike, Utc};
use itertools::Itertools;
use log::warn;
use std::future::Future;

use crate::fallback;
use crate::gateway::{normalize, prompts};
use crate::model::{
    Explanation, ExperimentContext, GeneChangeSummary, IssLocation, LaunchRecord, NasaImage,
    PlanetPosition, QuizQuestion, RawGeneRecord, ResearchAnswer, SpaceWeatherEvent,
};
use crate::upstream::payload::TavilySearchRequest;
use crate::upstream::{InsightUpstream, MediaUpstream, SpaceDataUpstream, UpstreamError};

/// Outcome of one aggregation: the canonical value plus whether it was
/// served by the fallback provider.
#[derive(Debug, Clone)]
pub struct Aggregated<T> {
    pub value: T,
    pub degraded: bool,
}

impl<T> Aggregated<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            degraded: false,
        }
    }

    pub fn degraded(value: T) -> Self {
        Self {
            value,
            degraded: true,
        }
    }

    /// Reshape the value while keeping the degradation flag.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Aggregated<U> {
        Aggregated {
            value: f(self.value),
            degraded: self.degraded,
        }
    }
}

/// Run one upstream pipeline; on any `UpstreamError` log it and serve
/// the substitute instead. The single place where the error taxonomy
/// is absorbed.
pub async fn with_fallback<T, F, B>(kind: &str, pipeline: F, substitute: B) -> Aggregated<T>
where
    F: Future<Output = Result<T, UpstreamError>>,
    B: FnOnce() -> T,
{
    match pipeline.await {
        Ok(value) => Aggregated::live(value),
        Err(err) => {
            warn!("{kind}: serving fallback data: {err}");
            Aggregated::degraded(substitute())
        }
    }
}

pub async fn iss_location<S: SpaceDataUpstream>(upstream: &S) -> Aggregated<IssLocation> {
    with_fallback(
        "iss-location",
        async {
            let payload = upstream.iss_now().await?;
            normalize::iss_location(payload)
        },
        || fallback::iss_location(Utc::now().timestamp()),
    )
    .await
}

/// Merge the CME and solar-flare feeds over the last seven days. Either
/// feed failing is soft; only an empty merge degrades to the fallback.
pub async fn space_weather<S: SpaceDataUpstream>(upstream: &S) -> Aggregated<Vec<SpaceWeatherEvent>> {
    let end_date = Utc::now().date_naive();
    let start_date = end_date - chrono::Duration::days(7);

    let cme_events: Vec<SpaceWeatherEvent> = match upstream.donki_cme(start_date, end_date).await {
        Ok(events) => events.into_iter().map(normalize::cme_event).collect(),
        Err(err) => {
            warn!("space-weather: CME feed failed: {err}");
            Vec::new()
        }
    };

    let flare_events: Vec<SpaceWeatherEvent> =
        match upstream.donki_flares(start_date, end_date).await {
            Ok(events) => events.into_iter().map(normalize::flare_event).collect(),
            Err(err) => {
                warn!("space-weather: flare feed failed: {err}");
                Vec::new()
            }
        };

    let merged: Vec<SpaceWeatherEvent> = cme_events
        .into_iter()
        .chain(flare_events)
        .sorted_by(|a, b| b.start_time.cmp(&a.start_time))
        .collect();

    if merged.is_empty() {
        warn!("space-weather: no events from either feed, serving fallback data");
        Aggregated::degraded(fallback::space_weather())
    } else {
        Aggregated::live(merged)
    }
}

pub async fn upcoming_launches<S: SpaceDataUpstream>(upstream: &S) -> Aggregated<Vec<LaunchRecord>> {
    with_fallback(
        "upcoming-launches",
        async {
            let payload = upstream.upcoming_launches(5).await?;
            let launches: Vec<LaunchRecord> =
                payload.results.into_iter().map(normalize::launch).collect();
            if launches.is_empty() {
                return Err(UpstreamError::Validation(
                    "launch list was empty".to_string(),
                ));
            }
            Ok(launches)
        },
        fallback::upcoming_launches,
    )
    .await
}

/// Simplified heliocentric positions, a pure function of the day of
/// year: constant orbital rate plus a per-planet phase offset.
pub fn planetary_positions() -> Vec<PlanetPosition> {
    const PLANETS: [(&str, f64, f64, f64, f64); 8] = [
        // name, distance (AU), degrees per day, phase, diameter (Earth = 1)
        ("Mercury", 0.39, 4.15, 45.0, 0.38),
        ("Venus", 0.72, 1.62, 90.0, 0.95),
        ("Earth", 1.00, 1.0, 0.0, 1.00),
        ("Mars", 1.52, 0.53, 135.0, 0.53),
        ("Jupiter", 5.20, 0.084, 180.0, 11.2),
        ("Saturn", 9.58, 0.034, 225.0, 9.45),
        ("Uranus", 19.18, 0.012, 270.0, 4.0),
        ("Neptune", 30.07, 0.006, 315.0, 3.88),
    ];

    let day_of_year = Utc::now().ordinal() as f64;

    PLANETS
        .iter()
        .map(|(name, distance, rate, phase, diameter)| PlanetPosition {
            name: name.to_string(),
            distance: *distance,
            angle: (day_of_year * rate + phase) % 360.0,
            diameter: *diameter,
        })
        .collect()
}

pub async fn explain_genes<S: InsightUpstream>(
    upstream: &S,
    raw_genes: Vec<RawGeneRecord>,
    experiment: ExperimentContext,
) -> Aggregated<Explanation> {
    let genes = normalize::gene_records(raw_genes);

    with_fallback(
        "explain-genes",
        async {
            let prompt = prompts::gene_expression(&genes, &experiment);
            let content = upstream
                .chat_completion(prompts::completion_request(prompt, 0.5, 800))
                .await?;
            Ok(Explanation {
                explanation: normalize::strip_markdown(&content),
            })
        },
        || Explanation {
            explanation: fallback::gene_explanation(&experiment),
        },
    )
    .await
}

pub async fn explain_space_effects<S: InsightUpstream>(
    upstream: &S,
    experiment: ExperimentContext,
    changes: GeneChangeSummary,
) -> Aggregated<Explanation> {
    with_fallback(
        "explain-space-effects",
        async {
            let prompt = prompts::space_effects(&experiment, &changes);
            let content = upstream
                .chat_completion(prompts::completion_request(prompt, 0.5, 800))
                .await?;
            Ok(Explanation {
                explanation: normalize::strip_markdown(&content),
            })
        },
        || Explanation {
            explanation: fallback::space_effects_explanation(&experiment),
        },
    )
    .await
}

pub async fn planet_facts<S: InsightUpstream>(upstream: &S, planet: &str) -> Aggregated<Vec<String>> {
    with_fallback(
        "planet-facts",
        async {
            let prompt = prompts::planet_facts(planet);
            let content = upstream
                .chat_completion(prompts::completion_request(prompt, 0.5, 800))
                .await?;
            let facts = normalize::fact_lines(&content);
            if facts.is_empty() {
                return Err(UpstreamError::Validation(
                    "completion contained no facts".to_string(),
                ));
            }
            Ok(facts)
        },
        || fallback::planets::planet_facts(planet),
    )
    .await
}

pub async fn generate_quiz<S: InsightUpstream>(
    upstream: &S,
    planet_names: &str,
    facts: &[String],
    question_count: usize,
) -> Aggregated<Vec<QuizQuestion>> {
    with_fallback(
        "generate-quiz",
        async {
            let prompt = prompts::quiz(planet_names, facts, question_count);
            let content = upstream
                .chat_completion(prompts::completion_request(prompt, 0.5, 800))
                .await?;
            let questions = normalize::quiz_questions(&content)?;
            Ok(questions.into_iter().take(question_count).collect())
        },
        || {
            fallback::quiz_questions()
                .into_iter()
                .take(question_count)
                .collect()
        },
    )
    .await
}

pub async fn research<S: InsightUpstream>(
    upstream: &S,
    query: String,
    search_depth: Option<String>,
) -> Aggregated<ResearchAnswer> {
    let request = TavilySearchRequest {
        query,
        search_depth: search_depth.unwrap_or_else(|| "basic".to_string()),
        include_answer: true,
        include_images: false,
        include_raw_content: false,
        max_results: 5,
    };

    with_fallback(
        "tavily-research",
        async {
            let payload = upstream.tavily_search(request).await?;
            normalize::research_answer(payload)
        },
        fallback::research_answer,
    )
    .await
}

/// Raw search passthrough. The canonical response is whatever Tavily
/// returned; only the fallback imposes a shape.
pub async fn search<S: InsightUpstream>(
    upstream: &S,
    request: TavilySearchRequest,
) -> Aggregated<serde_json::Value> {
    let query = request.query.clone();

    with_fallback(
        "tavily-search",
        async {
            let payload = upstream.tavily_search(request).await?;
            serde_json::to_value(payload)
                .map_err(|e| UpstreamError::MalformedPayload(e.to_string()))
        },
        || fallback::search_results(&query),
    )
    .await
}

pub async fn earth_applications<S: InsightUpstream>(
    upstream: &S,
    experiment_type: String,
    raw_genes: Vec<RawGeneRecord>,
    space_conditions: Option<String>,
) -> Aggregated<ResearchAnswer> {
    let symbols = normalize::gene_records(raw_genes)
        .into_iter()
        .take(5)
        .map(|g| g.gene_symbol)
        .join(", ");
    let conditions =
        space_conditions.unwrap_or_else(|| "spaceflight conditions".to_string());
    let query = format!(
        "Earth-based medical or biotechnology applications of {experiment_type} research in space, focusing on genes {symbols} affected by {conditions}"
    );

    let request = TavilySearchRequest {
        query: query.clone(),
        search_depth: "advanced".to_string(),
        include_answer: true,
        include_images: false,
        include_raw_content: false,
        max_results: 5,
    };

    with_fallback(
        "earth-applications",
        async {
            let payload = upstream.tavily_search(request).await?;
            normalize::research_answer(payload)
        },
        || fallback::earth_applications(&query),
    )
    .await
}

/// Image search with deterministic padding: a successful but thin
/// result set is topped up to three entries before it is returned.
pub async fn nasa_images<S: MediaUpstream>(
    upstream: &S,
    query: &str,
    count: usize,
) -> Aggregated<Vec<NasaImage>> {
    with_fallback(
        "nasa-images",
        async {
            let payload = upstream.search_images(query, count).await?;
            let mut items = normalize::nasa_images(payload);
            if items.is_empty() {
                return Err(UpstreamError::Validation(
                    "image search returned no usable items".to_string(),
                ));
            }
            let mut reserves = fallback::nasa_images(query).into_iter();
            while items.len() < 3 {
                match reserves.next() {
                    Some(image) => items.push(image),
                    None => break,
                }
            }
            Ok(items)
        },
        || fallback::nasa_images(query),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planetary_positions_are_stable_within_a_day() {
        let first = planetary_positions();
        let second = planetary_positions();

        assert_eq!(first.len(), 8);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.angle, b.angle);
        }

        let earth = first.iter().find(|p| p.name == "Earth").unwrap();
        assert_eq!(earth.distance, 1.0);
        assert!(earth.angle >= 0.0 && earth.angle < 360.0);
    }

    #[test]
    fn angles_stay_in_range_for_all_planets() {
        for planet in planetary_positions() {
            assert!(
                planet.angle >= 0.0 && planet.angle < 360.0,
                "{} out of range",
                planet.name
            );
        }
    }
}
