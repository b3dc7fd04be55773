//! Planet-expert chat orchestration. Research-type questions go to the
//! web-search provider, everything else to text generation; both paths
//! degrade to the built-in planet knowledge base.

use regex::Regex;

use crate::fallback::planets;
use crate::gateway::aggregate::{with_fallback, Aggregated};
use crate::gateway::normalize;
use crate::model::ChatMessage;
use crate::upstream::payload::{ChatCompletionRequest, TavilySearchRequest};
use crate::upstream::{InsightUpstream, UpstreamError};

const RESEARCH_KEYWORDS: [&str; 8] = [
    "research",
    "discovery",
    "mission",
    "spacecraft",
    "recent",
    "latest",
    "study",
    "scientist",
];

/// Pull the planet name out of a system message of the form
/// "... expert on the planet X ...".
pub fn planet_from_system(content: &str) -> String {
    Regex::new(r"expert on the planet ([A-Za-z]+)")
        .ok()
        .and_then(|re| {
            re.captures(content)
                .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        })
        .unwrap_or_else(|| "unknown".to_string())
}

fn is_research_question(message: &str) -> bool {
    let lowered = message.to_lowercase();
    RESEARCH_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

pub async fn respond<S: InsightUpstream>(
    upstream: &S,
    messages: Vec<ChatMessage>,
) -> Aggregated<String> {
    let system_content = messages
        .iter()
        .find(|m| m.role == "system")
        .map(|m| m.content.clone())
        .unwrap_or_default();
    let planet = planet_from_system(&system_content);

    let user_message = messages
        .iter()
        .rev()
        .find(|m| m.role == "user")
        .map(|m| m.content.clone())
        .unwrap_or_default();

    if is_research_question(&user_message) {
        let request = TavilySearchRequest {
            query: format!("{user_message} about planet {planet}"),
            search_depth: "advanced".to_string(),
            include_answer: true,
            include_images: false,
            include_raw_content: false,
            max_results: 5,
        };

        with_fallback(
            "chat-research",
            async {
                let payload = upstream.tavily_search(request).await?;
                payload
                    .answer
                    .filter(|answer| !answer.trim().is_empty())
                    .ok_or_else(|| {
                        UpstreamError::Validation("search returned no answer".to_string())
                    })
            },
            || planets::planet_info(&planet, &user_message),
        )
        .await
    } else {
        let system_prompt = format!(
            "You are an expert on the planet {planet}. Provide accurate, educational information about {planet} in response to user questions. Keep responses concise but informative. Format your response as plain text without markdown formatting or headers."
        );

        let mut chat_messages = vec![ChatMessage {
            role: "system".to_string(),
            content: system_prompt,
        }];
        chat_messages.extend(messages.into_iter().filter(|m| m.role != "system"));

        with_fallback(
            "chat",
            async {
                let content = upstream
                    .chat_completion(ChatCompletionRequest {
                        messages: chat_messages,
                        temperature: 0.7,
                        max_tokens: 500,
                    })
                    .await?;
                Ok(normalize::strip_markdown(&content))
            },
            || planets::planet_info(&planet, &user_message),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planet_is_extracted_from_system_message() {
        let planet = planet_from_system(
            "You are an expert on the planet Saturn. Provide accurate information.",
        );
        assert_eq!(planet, "Saturn");
        assert_eq!(planet_from_system("no planet here"), "unknown");
    }

    #[test]
    fn research_keywords_are_detected_case_insensitively() {
        assert!(is_research_question("What did the LATEST mission find?"));
        assert!(is_research_question("any recent discovery?"));
        assert!(!is_research_question("how big is it?"));
    }
}
