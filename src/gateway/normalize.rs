//! Pure mappings from raw upstream payloads to canonical records.
//! Optional fields get placeholder defaults; a record missing a
//! required field is dropped from its collection rather than failing
//! the whole call.

use regex::Regex;

use crate::fallback::{ISS_ALTITUDE_KM, ISS_VELOCITY_KMH};
use crate::model::{
    GeneRecord, IssLocation, LaunchRecord, NasaImage, QuizQuestion, RawGeneRecord, ResearchAnswer,
    ResearchSource, SpaceWeatherEvent, WeatherEventType,
};
use crate::upstream::payload::{
    CmeEventPayload, FlareEventPayload, ImageSearchPayload, IssNowPayload, RawLaunch,
    TavilySearchPayload,
};
use crate::upstream::UpstreamError;

const SWPC_LINK: &str = "https://www.swpc.noaa.gov/";

/// Normalize a batch of client- or upstream-supplied gene rows,
/// dropping anything without a symbol, a parseable fold change, or a
/// p-value in (0,1].
pub fn gene_records(raw: Vec<RawGeneRecord>) -> Vec<GeneRecord> {
    raw.into_iter().filter_map(gene_record).collect()
}

pub fn gene_record(raw: RawGeneRecord) -> Option<GeneRecord> {
    let gene_symbol = raw.gene_symbol.filter(|s| !s.trim().is_empty())?;
    let fold_change = numeric(raw.fold_change.as_ref()?)?;
    let p_value = numeric(raw.p_value.as_ref()?)?;
    if !(p_value > 0.0 && p_value <= 1.0) {
        return None;
    }

    Some(GeneRecord {
        gene_symbol,
        gene_name: raw.gene_name.unwrap_or_else(|| "Unknown".to_string()),
        fold_change,
        p_value,
        function: raw
            .function
            .unwrap_or_else(|| "Unknown function".to_string()),
    })
}

/// Accept JSON numbers and numeric strings; reject everything else.
fn numeric(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn iss_location(payload: IssNowPayload) -> Result<IssLocation, UpstreamError> {
    let latitude: f64 = payload
        .iss_position
        .latitude
        .parse()
        .map_err(|_| UpstreamError::Validation("ISS latitude is not numeric".to_string()))?;
    let longitude: f64 = payload
        .iss_position
        .longitude
        .parse()
        .map_err(|_| UpstreamError::Validation("ISS longitude is not numeric".to_string()))?;

    Ok(IssLocation {
        timestamp: payload.timestamp,
        latitude,
        longitude,
        altitude: ISS_ALTITUDE_KM,
        velocity: ISS_VELOCITY_KMH,
    })
}

pub fn cme_event(event: CmeEventPayload) -> SpaceWeatherEvent {
    SpaceWeatherEvent {
        activity_id: event.activity_id.unwrap_or_else(|| "Unknown".to_string()),
        start_time: event.start_time.unwrap_or_default(),
        source_location: event
            .source_location
            .unwrap_or_else(|| "Unknown".to_string()),
        note: event
            .note
            .unwrap_or_else(|| "Coronal Mass Ejection detected".to_string()),
        event_type: WeatherEventType::Cme,
        link: event.link.unwrap_or_else(|| SWPC_LINK.to_string()),
    }
}

pub fn flare_event(event: FlareEventPayload) -> SpaceWeatherEvent {
    let class = event.class_type.unwrap_or_else(|| "unknown".to_string());
    SpaceWeatherEvent {
        activity_id: event.flr_id.unwrap_or_else(|| "Unknown".to_string()),
        start_time: event.begin_time.unwrap_or_default(),
        source_location: event
            .source_location
            .unwrap_or_else(|| "Unknown".to_string()),
        note: format!("Class {class} solar flare detected"),
        event_type: WeatherEventType::Flare,
        link: SWPC_LINK.to_string(),
    }
}

pub fn launch(raw: RawLaunch) -> LaunchRecord {
    LaunchRecord {
        name: raw.name.unwrap_or_else(|| "Unknown".to_string()),
        provider: raw
            .launch_service_provider
            .and_then(|p| p.name)
            .unwrap_or_else(|| "Unknown".to_string()),
        vehicle: raw
            .rocket
            .and_then(|r| r.configuration)
            .and_then(|c| c.name)
            .unwrap_or_else(|| "Unknown Vehicle".to_string()),
        pad: raw
            .pad
            .as_ref()
            .and_then(|p| p.name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        location: raw
            .pad
            .and_then(|p| p.location)
            .and_then(|l| l.name)
            .unwrap_or_else(|| "Unknown Location".to_string()),
        net: raw.net.unwrap_or_default(),
        status: raw
            .status
            .and_then(|s| s.name)
            .unwrap_or_else(|| "Unknown".to_string()),
        mission: raw
            .mission
            .as_ref()
            .and_then(|m| m.name.clone())
            .unwrap_or_else(|| "Unknown Mission".to_string()),
        description: raw
            .mission
            .and_then(|m| m.description)
            .unwrap_or_else(|| "No description available".to_string()),
    }
}

/// Flatten the image-library collection; items without a preview link
/// are dropped.
pub fn nasa_images(payload: ImageSearchPayload) -> Vec<NasaImage> {
    payload
        .collection
        .items
        .into_iter()
        .filter_map(|item| {
            let data = item.data.into_iter().next()?;
            let href = item
                .links
                .into_iter()
                .find(|link| link.rel.as_deref() == Some("preview"))
                .and_then(|link| link.href)?;

            Some(NasaImage {
                title: data.title.unwrap_or_else(|| "Unknown".to_string()),
                description: data.description,
                date_created: data.date_created.unwrap_or_default(),
                href,
            })
        })
        .collect()
}

/// A search payload without an answer is a soft failure; the caller
/// falls back.
pub fn research_answer(payload: TavilySearchPayload) -> Result<ResearchAnswer, UpstreamError> {
    let answer = payload
        .answer
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| UpstreamError::Validation("search response had no answer".to_string()))?;

    let sources = payload
        .results
        .into_iter()
        .map(|result| ResearchSource {
            title: string_field(&result, "title").unwrap_or_else(|| "Unknown".to_string()),
            url: string_field(&result, "url").unwrap_or_default(),
            content: string_field(&result, "content").unwrap_or_default(),
        })
        .collect();

    Ok(ResearchAnswer { answer, sources })
}

fn string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

/// Strip the markdown the model sometimes emits despite being told not
/// to: bold, italics, headers, links, and runs of blank lines.
pub fn strip_markdown(content: &str) -> String {
    let mut text = content.to_string();
    text = replace_all(&text, r"\*\*(.*?)\*\*", "$1");
    text = replace_all(&text, r"\*(.*?)\*", "$1");
    text = replace_all(&text, r"(?m)^#{1,6} (.*)$", "$1");
    text = replace_all(&text, r"\[(.*?)\]\(.*?\)", "$1");
    text = replace_all(&text, r"\n{3,}", "\n\n");
    text
}

fn replace_all(text: &str, pattern: &str, replacement: &str) -> String {
    match Regex::new(pattern) {
        Ok(re) => re.replace_all(text, replacement).into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Split a facts completion into at most five clean lines, stripping
/// any numbering the model added.
pub fn fact_lines(content: &str) -> Vec<String> {
    let numbering = Regex::new(r"^\d+\.\s*").ok();

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match &numbering {
            Some(re) => re.replace(line, "").into_owned(),
            None => line.to_string(),
        })
        .take(5)
        .collect()
}

/// Parse quiz questions out of a completion, tolerating a markdown
/// code fence around the JSON.
pub fn quiz_questions(content: &str) -> Result<Vec<QuizQuestion>, UpstreamError> {
    let fenced = Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```")
        .ok()
        .and_then(|re| {
            re.captures(content)
                .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        });

    let text = fenced.as_deref().unwrap_or(content);

    serde_json::from_str(text).map_err(|e| UpstreamError::MalformedPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(symbol: Option<&str>, fold: serde_json::Value, p: serde_json::Value) -> RawGeneRecord {
        RawGeneRecord {
            gene_symbol: symbol.map(str::to_string),
            gene_name: None,
            fold_change: Some(fold),
            p_value: Some(p),
            function: None,
        }
    }

    #[test]
    fn rows_without_required_fields_are_dropped_not_fatal() {
        let rows = vec![
            raw(Some("MYH7"), json!(-2.8), json!(0.0001)),
            raw(None, json!(1.0), json!(0.01)),
            raw(Some("ACTA1"), json!("not a number"), json!(0.01)),
            raw(Some("SOD2"), json!("1.6"), json!("0.003")),
            raw(Some("TP53"), json!(1.7), json!(1.5)),
        ];

        let records = gene_records(rows);
        let symbols: Vec<&str> = records.iter().map(|r| r.gene_symbol.as_str()).collect();
        assert_eq!(symbols, vec!["MYH7", "SOD2"]);
        assert_eq!(records[1].fold_change, 1.6);
        assert_eq!(records[1].gene_name, "Unknown");
    }

    #[test]
    fn iss_payload_parses_string_coordinates() {
        let payload = IssNowPayload {
            timestamp: 1750000000,
            iss_position: crate::upstream::payload::IssPositionPayload {
                latitude: "47.6".to_string(),
                longitude: "-122.3".to_string(),
            },
        };
        let location = iss_location(payload).expect("valid payload");
        assert_eq!(location.latitude, 47.6);
        assert_eq!(location.altitude, ISS_ALTITUDE_KM);
    }

    #[test]
    fn iss_payload_with_bad_coordinates_is_validation_failure() {
        let payload = IssNowPayload {
            timestamp: 0,
            iss_position: crate::upstream::payload::IssPositionPayload {
                latitude: "north".to_string(),
                longitude: "0".to_string(),
            },
        };
        assert!(matches!(
            iss_location(payload),
            Err(UpstreamError::Validation(_))
        ));
    }

    #[test]
    fn launch_defaults_fill_missing_nested_fields() {
        let record = launch(RawLaunch {
            name: Some("Falcon Heavy Demo".to_string()),
            net: Some("2025-08-01T00:00:00Z".to_string()),
            ..RawLaunch::default()
        });
        assert_eq!(record.provider, "Unknown");
        assert_eq!(record.vehicle, "Unknown Vehicle");
        assert_eq!(record.location, "Unknown Location");
        assert_eq!(record.description, "No description available");
    }

    #[test]
    fn flare_note_embeds_class_type() {
        let event = flare_event(FlareEventPayload {
            flr_id: Some("FLR-1".to_string()),
            begin_time: Some("2025-07-01T00:00:00Z".to_string()),
            source_location: None,
            class_type: Some("X1.2".to_string()),
        });
        assert_eq!(event.note, "Class X1.2 solar flare detected");
        assert_eq!(event.event_type, WeatherEventType::Flare);
        assert_eq!(event.source_location, "Unknown");
    }

    #[test]
    fn markdown_is_stripped_from_completions() {
        let cleaned = strip_markdown("## Heading\n**bold** and *italic* and [link](https://x.y)\n\n\n\nend");
        assert_eq!(cleaned, "Heading\nbold and italic and link\n\nend");
    }

    #[test]
    fn fact_lines_strips_numbering_and_caps_at_five() {
        let facts = fact_lines("1. first\n2. second\n\n3. third\nfourth\n5. fifth\n6. sixth");
        assert_eq!(facts.len(), 5);
        assert_eq!(facts[0], "first");
        assert_eq!(facts[3], "fourth");
    }

    #[test]
    fn quiz_json_is_accepted_with_or_without_fence() {
        let body = r#"[{"question":"Q?","options":["a","b","c","d"],"correctAnswer":"a"}]"#;
        assert_eq!(quiz_questions(body).unwrap().len(), 1);

        let fenced = format!("```json\n{body}\n```");
        assert_eq!(quiz_questions(&fenced).unwrap()[0].correct_answer, "a");

        assert!(quiz_questions("no json here").is_err());
    }

    #[test]
    fn research_answer_requires_a_nonempty_answer() {
        let payload = TavilySearchPayload {
            answer: Some("Grounded answer".to_string()),
            results: vec![json!({"title": "T", "url": "https://u", "content": "C"})],
            extra: serde_json::Map::new(),
        };
        let answer = research_answer(payload).expect("has answer");
        assert_eq!(answer.sources[0].title, "T");

        let empty = TavilySearchPayload {
            answer: Some("   ".to_string()),
            results: vec![],
            extra: serde_json::Map::new(),
        };
        assert!(research_answer(empty).is_err());
    }
}
