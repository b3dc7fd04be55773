use serde::{Deserialize, Serialize};

use crate::model::Id;

/// Summary record returned by the experiment listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experiment {
    pub id: Id,
    pub title: String,
    pub organism: String,
    pub mission: String,
    pub date: String,
    pub description: String,
    pub tissue: String,
    #[serde(rename = "datasetType")]
    pub dataset_type: String,
}

/// One page of the experiment listing. `total` is the filtered count
/// before pagination is applied.
#[derive(Debug, Serialize)]
pub struct ExperimentPage {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub data: Vec<Experiment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperimentSample {
    pub id: String,
    #[serde(rename = "type")]
    pub sample_type: String,
    pub condition: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperimentFile {
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub size: String,
    pub url: Option<String>,
}

/// Full record for a single experiment, including mission timeline,
/// sequencing platform, and sample inventory.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentDetail {
    pub id: Id,
    pub title: String,
    pub organism: String,
    pub strain: String,
    pub mission: String,
    #[serde(rename = "launchDate")]
    pub launch_date: String,
    #[serde(rename = "landingDate")]
    pub landing_date: String,
    pub duration: String,
    pub description: String,
    pub tissue: String,
    #[serde(rename = "datasetType")]
    pub dataset_type: String,
    pub platform: String,
    #[serde(rename = "principalInvestigator")]
    pub principal_investigator: String,
    pub institution: String,
    pub samples: Vec<ExperimentSample>,
    #[serde(rename = "dataFiles")]
    pub data_files: Vec<ExperimentFile>,
}

/// Free-form experiment metadata attached by clients to AI insight
/// requests. Everything is optional; prompt builders substitute
/// placeholder text for missing fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperimentContext {
    pub title: Option<String>,
    pub organism: Option<String>,
    pub tissue: Option<String>,
    pub mission: Option<String>,
    pub duration: Option<String>,
    pub condition: Option<String>,
}

impl ExperimentContext {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Unknown Experiment")
    }

    pub fn organism(&self) -> &str {
        self.organism.as_deref().unwrap_or("Unknown Organism")
    }

    pub fn tissue(&self) -> &str {
        self.tissue.as_deref().unwrap_or("Unknown Tissue")
    }

    pub fn mission(&self) -> &str {
        self.mission.as_deref().unwrap_or("Unknown Mission")
    }

    pub fn duration(&self) -> &str {
        self.duration.as_deref().unwrap_or("Unknown Duration")
    }

    pub fn condition(&self) -> &str {
        self.condition.as_deref().unwrap_or("space")
    }
}
