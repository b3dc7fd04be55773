//! Prompt builders for the text-generation provider. All pure string
//! templates; no conversation state survives between calls.

use itertools::Itertools;

use crate::model::{ChatMessage, ExperimentContext, GeneChangeSummary, GeneRecord};
use crate::upstream::payload::ChatCompletionRequest;

/// System prompt shared by the insight completions.
pub const EXPERT_SYSTEM_PROMPT: &str = "You are a helpful space biology expert that explains complex genetic concepts clearly and accurately. Format your response as plain text without markdown formatting or headers. Use clear paragraphs with proper spacing. Do not use bold, italics, or other formatting. Do not include section headers or titles in your response.";

const PLAIN_TEXT_INSTRUCTIONS: &str = "Format your response as plain text without markdown formatting or headers. Use clear paragraphs with proper spacing. Do not use bold, italics, or other formatting. Do not include section headers or titles in your response.";

/// Wrap a user prompt with the expert system message.
pub fn completion_request(
    user_prompt: String,
    temperature: f64,
    max_tokens: u32,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: EXPERT_SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_prompt,
            },
        ],
        temperature,
        max_tokens,
    }
}

fn format_gene(gene: &GeneRecord) -> String {
    format!(
        "{} ({}): {:.2} fold change, p-value: {}. Function: {}",
        gene.gene_symbol, gene.gene_name, gene.fold_change, gene.p_value, gene.function
    )
}

/// Prompt explaining what a set of expression changes means, built from
/// the five strongest movers in each direction.
pub fn gene_expression(genes: &[GeneRecord], experiment: &ExperimentContext) -> String {
    let upregulated: Vec<&GeneRecord> = genes
        .iter()
        .filter(|g| g.fold_change > 0.0)
        .sorted_by(|a, b| b.fold_change.total_cmp(&a.fold_change))
        .take(5)
        .collect();

    let downregulated: Vec<&GeneRecord> = genes
        .iter()
        .filter(|g| g.fold_change < 0.0)
        .sorted_by(|a, b| a.fold_change.total_cmp(&b.fold_change))
        .take(5)
        .collect();

    let upregulated_text = if upregulated.is_empty() {
        "No significantly upregulated genes found".to_string()
    } else {
        upregulated.iter().map(|g| format_gene(g)).join("\n")
    };

    let downregulated_text = if downregulated.is_empty() {
        "No significantly downregulated genes found".to_string()
    } else {
        downregulated.iter().map(|g| format_gene(g)).join("\n")
    };

    format!(
        "You are a space biology expert explaining gene expression changes in a space experiment to a scientifically literate audience.

Experiment details:
- Title: {title}
- Organism: {organism}
- Tissue: {tissue}
- Mission: {mission}
- Duration: {duration}

Top upregulated genes (increased expression in space):
{upregulated_text}

Top downregulated genes (decreased expression in space):
{downregulated_text}

Please provide:
1. A clear explanation of what these gene expression changes mean biologically
2. How microgravity and/or space radiation likely caused these changes
3. What cellular pathways or processes are most affected
4. The potential physiological impact on the organism

{plain}

Keep your explanation scientifically accurate but accessible to someone with basic biology knowledge. Use about 250-300 words.",
        title = experiment.title(),
        organism = experiment.organism(),
        tissue = experiment.tissue(),
        mission = experiment.mission(),
        duration = experiment.duration(),
        plain = PLAIN_TEXT_INSTRUCTIONS,
    )
}

/// Prompt explaining how the space environment produced a summarized
/// set of changes.
pub fn space_effects(experiment: &ExperimentContext, changes: &GeneChangeSummary) -> String {
    format!(
        "You are a space biology expert explaining how the space environment affects living organisms at the molecular level.

Experiment details:
- Title: {title}
- Organism: {organism}
- Tissue: {tissue}
- Mission: {mission}
- Duration: {duration}

Gene expression changes summary:
- {upregulated} genes significantly upregulated
- {downregulated} genes significantly downregulated
- Top affected pathways: {pathways}

Please explain:
1. How microgravity specifically affects cells and tissues in this experiment
2. How space radiation may have contributed to these changes
3. Why these particular biological pathways are sensitive to the space environment
4. How these molecular changes connect to known physiological effects of spaceflight

{plain}

Keep your explanation scientifically accurate but accessible to someone with basic biology knowledge. Use about 250-300 words.",
        title = experiment.title(),
        organism = experiment.organism(),
        tissue = experiment.tissue(),
        mission = experiment.mission(),
        duration = experiment.duration(),
        upregulated = changes.upregulated_text(),
        downregulated = changes.downregulated_text(),
        pathways = changes.pathways_text(),
        plain = PLAIN_TEXT_INSTRUCTIONS,
    )
}

pub fn planet_facts(planet: &str) -> String {
    format!(
        "Generate 5 interesting and educational facts about the planet {planet}. \
These facts should be accurate, concise, and suitable for a student learning about the solar system. \
Format the response as a simple array of facts, with each fact being 1-2 sentences long. \
Do not include any markdown formatting, numbering, or bullet points."
    )
}

pub fn quiz(planet_names: &str, facts: &[String], question_count: usize) -> String {
    format!(
        "Generate {question_count} multiple-choice quiz questions about the solar system, focusing on these planets: {planet_names}.
Base the questions on these facts that the user has learned:

{facts}

Each question should have 4 options with only one correct answer.
Format the response as a JSON array of objects, where each object has:
- \"question\": the question text
- \"options\": an array of 4 possible answers
- \"correctAnswer\": the correct answer (which must be one of the options)

Make sure the questions are educational, accurate, and appropriate for students learning about the solar system.",
        facts = facts.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gene(symbol: &str, fold: f64) -> GeneRecord {
        GeneRecord {
            gene_symbol: symbol.to_string(),
            gene_name: "Test".to_string(),
            fold_change: fold,
            p_value: 0.001,
            function: "Testing".to_string(),
        }
    }

    #[test]
    fn gene_prompt_separates_directions_and_orders_by_magnitude() {
        let genes = vec![gene("UP1", 1.1), gene("UP2", 2.5), gene("DOWN1", -3.0)];
        let prompt = gene_expression(&genes, &ExperimentContext::default());

        let up2 = prompt.find("UP2").unwrap();
        let up1 = prompt.find("UP1").unwrap();
        assert!(up2 < up1, "strongest upregulation listed first");
        assert!(prompt.contains("DOWN1"));
        assert!(prompt.contains("Unknown Experiment"));
    }

    #[test]
    fn gene_prompt_notes_missing_directions() {
        let genes = vec![gene("DOWN1", -1.2)];
        let prompt = gene_expression(&genes, &ExperimentContext::default());
        assert!(prompt.contains("No significantly upregulated genes found"));
    }

    #[test]
    fn space_effects_prompt_uses_change_summary() {
        let changes = GeneChangeSummary {
            upregulated: Some(serde_json::json!(12)),
            downregulated: Some(serde_json::json!("8")),
            top_pathways: Some(vec!["atrophy".to_string(), "stress".to_string()]),
        };
        let prompt = space_effects(&ExperimentContext::default(), &changes);
        assert!(prompt.contains("12 genes significantly upregulated"));
        assert!(prompt.contains("8 genes significantly downregulated"));
        assert!(prompt.contains("atrophy, stress"));
    }

    #[test]
    fn completion_request_pairs_system_and_user_messages() {
        let request = completion_request("prompt body".to_string(), 0.5, 800);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].content, "prompt body");
    }
}
