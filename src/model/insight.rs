use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchSource {
    pub title: String,
    pub url: String,
    pub content: String,
}

/// Answer produced by a web-search upstream, with the pages it was
/// grounded on. Always populated; the fallback provider guarantees a
/// default when the upstream is unreachable.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchAnswer {
    pub answer: String,
    pub sources: Vec<ResearchSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NasaImage {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date_created: String,
    pub href: String,
}
