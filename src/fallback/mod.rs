//! Deterministic substitute data, one provider per data kind. Served
//! whenever an upstream call fails so the HTTP surface never exposes a
//! broken state; the gateway marks such responses with the degraded
//! header instead of faking freshness.

pub mod planets;

use crate::model::{
    ExperimentContext, IssLocation, LaunchRecord, NasaImage, QuizQuestion, ResearchAnswer,
    ResearchSource, SpaceWeatherEvent, WeatherEventType,
};

/// Fixed substitute coordinates. The timestamp is the time the answer
/// was produced, not a fabricated sensor reading.
const FALLBACK_LATITUDE: f64 = -23.4;
const FALLBACK_LONGITUDE: f64 = 121.9;

pub const ISS_ALTITUDE_KM: f64 = 408.0;
pub const ISS_VELOCITY_KMH: f64 = 27600.0;

const FALLBACK_IMAGE_DATE: &str = "2023-05-01T00:00:00Z";

pub fn iss_location(timestamp: i64) -> IssLocation {
    IssLocation {
        timestamp,
        latitude: FALLBACK_LATITUDE,
        longitude: FALLBACK_LONGITUDE,
        altitude: ISS_ALTITUDE_KM,
        velocity: ISS_VELOCITY_KMH,
    }
}

pub fn space_weather() -> Vec<SpaceWeatherEvent> {
    vec![
        SpaceWeatherEvent {
            activity_id: "CME-2025-06-28T12:24:00-001".to_string(),
            start_time: "2025-06-28T12:24:00Z".to_string(),
            source_location: "N12E08".to_string(),
            note: "Fast CME with estimated speed of 1200 km/s. May impact Earth's magnetosphere within 48 hours.".to_string(),
            event_type: WeatherEventType::Cme,
            link: "https://www.swpc.noaa.gov/".to_string(),
        },
        SpaceWeatherEvent {
            activity_id: "FLARE-2025-06-27T08:15:00-003".to_string(),
            start_time: "2025-06-27T08:15:00Z".to_string(),
            source_location: "S05W12".to_string(),
            note: "X1.2 class solar flare from active region 13245. Radio blackout observed on sunlit side of Earth.".to_string(),
            event_type: WeatherEventType::Flare,
            link: "https://www.swpc.noaa.gov/".to_string(),
        },
        SpaceWeatherEvent {
            activity_id: "CME-2025-06-25T22:30:00-002".to_string(),
            start_time: "2025-06-25T22:30:00Z".to_string(),
            source_location: "N20W30".to_string(),
            note: "Slow CME with estimated speed of 450 km/s. Not expected to be geoeffective.".to_string(),
            event_type: WeatherEventType::Cme,
            link: "https://www.swpc.noaa.gov/".to_string(),
        },
    ]
}

pub fn upcoming_launches() -> Vec<LaunchRecord> {
    vec![
        LaunchRecord {
            name: "SpaceX Crew-12".to_string(),
            provider: "SpaceX".to_string(),
            vehicle: "Falcon 9".to_string(),
            pad: "LC-39A".to_string(),
            location: "Kennedy Space Center, Florida".to_string(),
            net: "2025-07-15T14:30:00Z".to_string(),
            status: "Go".to_string(),
            mission: "ISS Crew Rotation".to_string(),
            description: "Crew rotation mission to the International Space Station carrying 4 astronauts.".to_string(),
        },
        LaunchRecord {
            name: "Artemis II".to_string(),
            provider: "NASA".to_string(),
            vehicle: "SLS Block 1".to_string(),
            pad: "LC-39B".to_string(),
            location: "Kennedy Space Center, Florida".to_string(),
            net: "2025-09-20T12:00:00Z".to_string(),
            status: "Go".to_string(),
            mission: "Lunar Flyby".to_string(),
            description: "First crewed mission of NASA's Artemis program, performing a lunar flyby with 4 astronauts.".to_string(),
        },
        LaunchRecord {
            name: "Starship Flight 10".to_string(),
            provider: "SpaceX".to_string(),
            vehicle: "Starship".to_string(),
            pad: "Starbase".to_string(),
            location: "Boca Chica, Texas".to_string(),
            net: "2025-07-05T18:00:00Z".to_string(),
            status: "TBD".to_string(),
            mission: "Orbital Test Flight".to_string(),
            description: "Tenth test flight of the full Starship stack, aiming for orbital velocity and controlled reentry.".to_string(),
        },
        LaunchRecord {
            name: "JUICE Extended Mission".to_string(),
            provider: "ESA".to_string(),
            vehicle: "Ariane 6".to_string(),
            pad: "ELA-4".to_string(),
            location: "Kourou, French Guiana".to_string(),
            net: "2025-08-12T10:15:00Z".to_string(),
            status: "Go".to_string(),
            mission: "Jupiter Icy Moons Explorer".to_string(),
            description: "Launch of additional instruments for the JUICE mission to study Jupiter's icy moons.".to_string(),
        },
    ]
}

fn source(title: &str, url: &str, content: &str) -> ResearchSource {
    ResearchSource {
        title: title.to_string(),
        url: url.to_string(),
        content: content.to_string(),
    }
}

pub fn research_answer() -> ResearchAnswer {
    ResearchAnswer {
        answer: "The gene expression changes observed in this space experiment have potential implications for several medical conditions on Earth. Changes in stress response genes may provide insights into aging and degenerative diseases. Altered metabolic pathways could inform research on metabolic disorders. Structural gene modifications might relate to osteoporosis and muscle atrophy conditions. These findings contribute to our understanding of fundamental biological processes that have direct relevance to human health and disease treatment strategies.".to_string(),
        sources: vec![
            source(
                "Space Biology Research and Medical Applications",
                "https://www.nasa.gov/hrp/research",
                "NASA's Human Research Program investigates how spaceflight affects human biology to develop countermeasures and technologies that protect astronauts during space exploration.",
            ),
            source(
                "Translational Research in Space Biology",
                "https://www.ncbi.nlm.nih.gov/pmc/articles/PMC6135244/",
                "This review discusses how space biology research has contributed to advances in medical treatments for conditions like osteoporosis, immune disorders, and aging-related diseases.",
            ),
        ],
    }
}

/// Substitute research answer for the earth-applications kind. The
/// answer is selected by the query content, so the provider stays a
/// pure function of its inputs.
pub fn earth_applications(query: &str) -> ResearchAnswer {
    if query.contains("muscle") || query.contains("MYH7") || query.contains("ACTA1") {
        muscle_gene_answer()
    } else if query.contains("plant") || query.contains("ATHB-7") {
        plant_gene_answer()
    } else if query.contains("immune") || query.contains("IL2RA") {
        immune_gene_answer()
    } else {
        generic_gene_answer()
    }
}

fn muscle_gene_answer() -> ResearchAnswer {
    ResearchAnswer {
        answer: "The genes identified in space muscle experiments have significant medical relevance on Earth. Genes like MYH7, ACTA1, FOXO1, TRIM63, and FBXO32 are key regulators in muscle development, maintenance, and atrophy. MYH7 mutations are associated with cardiomyopathies and heart failure. FOXO1, TRIM63, and FBXO32 are central to muscle wasting conditions including sarcopenia, cachexia, and disuse atrophy. Research on these genes in space has direct applications for treating muscle-wasting diseases, age-related sarcopenia, and cardiac conditions. The accelerated muscle loss in microgravity serves as a valuable model for studying these conditions, as astronauts experience in weeks what takes months or years on Earth.".to_string(),
        sources: vec![
            source(
                "Muscle Atrophy in Space: Translational Applications for Earth-Based Medicine",
                "https://www.ncbi.nlm.nih.gov/pmc/articles/PMC7346599/",
                "This review examines how spaceflight-induced muscle atrophy research has contributed to understanding muscle wasting diseases on Earth.",
            ),
            source(
                "Countermeasures to Muscle Atrophy: From Space to Earth Applications",
                "https://www.frontiersin.org/articles/10.3389/fphys.2020.00142/full",
                "This paper explores how exercise protocols and pharmaceutical interventions developed to counter muscle loss in astronauts can be applied to treat sarcopenia, cachexia, and disuse atrophy in Earth-bound patients.",
            ),
        ],
    }
}

fn plant_gene_answer() -> ResearchAnswer {
    ResearchAnswer {
        answer: "Research on plant genes affected by spaceflight has several Earth applications. The stress response genes upregulated in space are the same genes activated during drought, salinity stress, and temperature extremes on Earth. This provides insights for developing more resilient crops for challenging environments. The altered expression of photosynthesis genes and cell wall modification genes in space is helping scientists understand fundamental aspects of plant growth regulation that could be applied to optimize crop yields. The gravitropism-related genes studied in space experiments have applications in controlling plant architecture for agricultural purposes.".to_string(),
        sources: vec![
            source(
                "From Space to Farm: Applications of Plant Space Biology",
                "https://academic.oup.com/jxb/article/72/8/2834/6146810",
                "This review discusses how plant stress response genes studied in space experiments are informing the development of drought-resistant and climate-resilient crops on Earth.",
            ),
            source(
                "Gravitropism Research Using Space-Based Experiments",
                "https://www.annualreviews.org/doi/10.1146/annurev-arplant-042817-040547",
                "This paper examines how understanding gravitropism gene function in the absence of gravity is providing new approaches to manipulate plant architecture and growth patterns for agricultural applications.",
            ),
        ],
    }
}

fn immune_gene_answer() -> ResearchAnswer {
    ResearchAnswer {
        answer: "The immune system genes affected during spaceflight have significant medical relevance on Earth. The downregulation of T cell activation genes and pro-inflammatory cytokines observed in space parallels certain immunosuppressive conditions on Earth. Understanding these changes can inform treatments for autoimmune disorders where suppressing these pathways is beneficial. Conversely, the knowledge could help develop interventions for immunodeficiency conditions. The upregulation of stress response genes provides insights into cellular protection mechanisms that could be harnessed for treating conditions involving oxidative stress, such as neurodegenerative diseases and aging-related disorders.".to_string(),
        sources: vec![
            source(
                "Space Immunology: Implications for Human Disease",
                "https://www.frontiersin.org/articles/10.3389/fimmu.2020.01906/full",
                "This review examines how immune dysregulation in space relates to immune disorders on Earth, with particular focus on the role of cytokines in modulating inflammatory responses.",
            ),
            source(
                "Cellular Stress Responses in Space and Their Implications for Human Health",
                "https://www.nature.com/articles/s41526-020-0113-0",
                "This paper discusses how stress response genes are activated in space and how understanding these pathways could lead to new treatments for stress-related diseases on Earth.",
            ),
        ],
    }
}

fn generic_gene_answer() -> ResearchAnswer {
    ResearchAnswer {
        answer: "Space biology research on gene expression changes has numerous Earth-based applications. The accelerated physiological changes observed in space serve as valuable models for studying similar processes on Earth that typically occur more slowly. For example, bone and muscle loss in microgravity mimics osteoporosis and sarcopenia but happens much faster, allowing researchers to test interventions more efficiently. The stress response pathways activated in space are similar to those involved in aging and various diseases, providing insights into fundamental cellular mechanisms. Radiation exposure in space also helps scientists understand DNA damage and repair processes relevant to cancer research.".to_string(),
        sources: vec![
            source(
                "Space Biology Research and its Earth Applications",
                "https://www.nature.com/articles/s41526-020-0108-y",
                "This review summarizes how gene expression studies in space are contributing to medical and biotechnological advances on Earth, with particular focus on accelerated aging models and stress response pathways.",
            ),
            source(
                "Translational Research from Space to Earth",
                "https://www.sciencedirect.com/science/article/pii/S0094576520301764",
                "This paper discusses how space biology findings are being applied to address health challenges on Earth, including osteoporosis, muscle wasting disorders, and radiation-induced cellular damage.",
            ),
        ],
    }
}

/// Raw-search substitute: a single NASA solar-system result whose image
/// matches the planet named in the query, when one is.
pub fn search_results(query: &str) -> serde_json::Value {
    let slug = planets::planet_slug(query);
    serde_json::json!({
        "results": [
            {
                "title": "NASA Solar System Exploration",
                "url": "https://solarsystem.nasa.gov/",
                "image_url": format!(
                    "https://science.nasa.gov/wp-content/uploads/2023/05/{slug}-800x600-1.jpg"
                ),
            }
        ]
    })
}

pub fn nasa_images(query: &str) -> Vec<NasaImage> {
    let slug = planets::planet_slug(query);
    let display = planets::capitalize(slug);

    vec![
        NasaImage {
            title: format!("{display} from NASA"),
            description: Some(format!("Image of {slug}")),
            date_created: FALLBACK_IMAGE_DATE.to_string(),
            href: format!(
                "https://science.nasa.gov/wp-content/uploads/2023/05/{slug}-800x600-1.jpg"
            ),
        },
        NasaImage {
            title: format!("{display} - NASA Solar System"),
            description: Some(format!("Image of {slug}")),
            date_created: FALLBACK_IMAGE_DATE.to_string(),
            href: format!(
                "https://solarsystem.nasa.gov/system/stellar_items/image_files/{slug}_480x320.jpg"
            ),
        },
        NasaImage {
            title: format!("{display} - NASA Image"),
            description: Some(format!("Image of {slug}")),
            date_created: FALLBACK_IMAGE_DATE.to_string(),
            href: format!("https://www.nasa.gov/wp-content/uploads/2023/03/{slug}_1.jpg"),
        },
    ]
}

pub fn gene_explanation(experiment: &ExperimentContext) -> String {
    format!(
        "Analysis of gene expression changes in {} under {} conditions reveals significant adaptations to the space environment. The pattern suggests cellular stress responses and metabolic adjustments that help the organism cope with microgravity and radiation.",
        experiment.organism.as_deref().unwrap_or("organisms"),
        experiment.condition()
    )
}

pub fn space_effects_explanation(experiment: &ExperimentContext) -> String {
    format!(
        "The space environment affects {} through several key mechanisms. Microgravity alters fluid distribution, cellular architecture, and gene expression patterns. Space radiation can damage DNA and cellular components. Together, these factors create a unique stress environment that organisms must adapt to, leading to the observed changes in gene expression and cellular function.",
        experiment.organism.as_deref().unwrap_or("organisms")
    )
}

pub fn quiz_questions() -> Vec<QuizQuestion> {
    fn question(text: &str, options: [&str; 4], correct: &str) -> QuizQuestion {
        QuizQuestion {
            question: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }

    vec![
        question(
            "Which planet is closest to the Sun?",
            ["Venus", "Mercury", "Earth", "Mars"],
            "Mercury",
        ),
        question(
            "Which planet has the Great Red Spot?",
            ["Mars", "Venus", "Jupiter", "Saturn"],
            "Jupiter",
        ),
        question(
            "Which planet is known as the 'Red Planet'?",
            ["Jupiter", "Venus", "Mercury", "Mars"],
            "Mars",
        ),
        question(
            "Which planet has the most prominent ring system?",
            ["Jupiter", "Uranus", "Neptune", "Saturn"],
            "Saturn",
        ),
        question(
            "Which of these is classified as a dwarf planet?",
            ["Neptune", "Mercury", "Pluto", "Venus"],
            "Pluto",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallbacks_are_deterministic() {
        assert_eq!(iss_location(42).latitude, iss_location(42).latitude);
        assert_eq!(space_weather().len(), 3);
        assert_eq!(upcoming_launches().len(), 4);
        assert_eq!(quiz_questions().len(), 5);
        assert_eq!(
            serde_json::to_string(&space_weather()).unwrap(),
            serde_json::to_string(&space_weather()).unwrap()
        );
    }

    #[test]
    fn research_fallback_has_expected_prefix() {
        assert!(research_answer()
            .answer
            .starts_with("The gene expression changes observed in this space experiment"));
        assert_eq!(research_answer().sources.len(), 2);
    }

    #[test]
    fn earth_applications_selects_by_topic() {
        assert!(earth_applications("genes MYH7, ACTA1").answer.contains("muscle"));
        assert!(earth_applications("plant growth in orbit").answer.contains("crops"));
        assert!(earth_applications("IL2RA expression").answer.contains("immune"));
        assert!(earth_applications("bacterial adaptation").answer.contains("Space biology"));
    }

    #[test]
    fn search_fallback_picks_planet_image() {
        let value = search_results("photos of Saturn rings");
        let url = value["results"][0]["image_url"].as_str().unwrap();
        assert!(url.contains("/saturn-"));

        let generic = search_results("asteroid belt");
        assert!(generic["results"][0]["image_url"]
            .as_str()
            .unwrap()
            .contains("/planets-"));
    }
}
