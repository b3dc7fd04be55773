use serde::{Deserialize, Serialize};

/// Differential-expression record for one gene. Invariants: `p_value`
/// is in (0,1]; `fold_change` is negative for downregulated genes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneRecord {
    pub gene_symbol: String,
    pub gene_name: String,
    pub fold_change: f64,
    pub p_value: f64,
    pub function: String,
}

/// Tolerant wire shape for gene rows supplied by clients or upstreams.
/// Numbers may arrive as JSON numbers or numeric strings; the
/// normalizer decides which rows survive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGeneRecord {
    pub gene_symbol: Option<String>,
    pub gene_name: Option<String>,
    pub fold_change: Option<serde_json::Value>,
    pub p_value: Option<serde_json::Value>,
    pub function: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneSortKey {
    FoldChange,
    PValue,
}

impl GeneSortKey {
    /// Unrecognized sort fields fall back to the default rather than
    /// failing the request.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("p_value") => GeneSortKey::PValue,
            _ => GeneSortKey::FoldChange,
        }
    }

    pub fn value_of(&self, record: &GeneRecord) -> f64 {
        match self {
            GeneSortKey::FoldChange => record.fold_change,
            GeneSortKey::PValue => record.p_value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some(order) if order.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Client-supplied summary of how many genes moved and which pathways
/// were hit, used to build the space-effects prompt.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneChangeSummary {
    pub upregulated: Option<serde_json::Value>,
    pub downregulated: Option<serde_json::Value>,
    #[serde(rename = "topPathways")]
    pub top_pathways: Option<Vec<String>>,
}

impl GeneChangeSummary {
    pub fn upregulated_text(&self) -> String {
        count_text(self.upregulated.as_ref())
    }

    pub fn downregulated_text(&self) -> String {
        count_text(self.downregulated.as_ref())
    }

    pub fn pathways_text(&self) -> String {
        match &self.top_pathways {
            Some(pathways) if !pathways.is_empty() => pathways.join(", "),
            _ => "Unknown pathways".to_string(),
        }
    }
}

fn count_text(value: Option<&serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
        _ => "Unknown number of".to_string(),
    }
}
