pub mod data;

use itertools::Itertools;

use crate::model::{Experiment, ExperimentPage, GeneRecord, GeneSortKey, SortOrder};

#[derive(Debug, Default)]
pub struct ExperimentFilter {
    pub organism: Option<String>,
    pub mission: Option<String>,
}

impl ExperimentFilter {
    fn matches(&self, experiment: &Experiment) -> bool {
        let organism_ok = self.organism.as_ref().map_or(true, |wanted| {
            experiment
                .organism
                .to_lowercase()
                .contains(&wanted.to_lowercase())
        });
        let mission_ok = self.mission.as_ref().map_or(true, |wanted| {
            experiment
                .mission
                .to_lowercase()
                .contains(&wanted.to_lowercase())
        });
        organism_ok && mission_ok
    }
}

/// Filter and paginate the experiment catalog. `page` is 1-based.
pub fn list_experiments(page: usize, limit: usize, filter: &ExperimentFilter) -> ExperimentPage {
    let matched: Vec<Experiment> = data::experiments()
        .into_iter()
        .filter(|e| filter.matches(e))
        .collect();

    let total = matched.len();
    let start = page.saturating_sub(1).saturating_mul(limit);
    let data = matched.into_iter().skip(start).take(limit).collect();

    ExperimentPage {
        total,
        page,
        limit,
        data,
    }
}

/// Sorted, limited gene table for one experiment. `None` when the
/// experiment id has no dataset.
pub fn genes_for(
    experiment_id: &str,
    key: GeneSortKey,
    order: SortOrder,
    limit: usize,
) -> Option<Vec<GeneRecord>> {
    let genes = data::gene_table(experiment_id)?;

    let sorted = genes
        .into_iter()
        .sorted_by(|a, b| {
            let ordering = key.value_of(a).total_cmp(&key.value_of(b));
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        })
        .take(limit)
        .collect();

    Some(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_returns_exact_page_and_filtered_total() {
        let page = list_experiments(1, 2, &ExperimentFilter::default());
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 2);

        let last = list_experiments(3, 2, &ExperimentFilter::default());
        assert_eq!(last.data.len(), 1);
        assert_eq!(last.total, 5);
    }

    #[test]
    fn organism_filter_is_case_insensitive_substring() {
        let filter = ExperimentFilter {
            organism: Some("mus musculus".to_string()),
            mission: None,
        };
        let page = list_experiments(1, 10, &filter);
        assert_eq!(page.total, 2);
        assert!(page.data.iter().all(|e| e.organism.contains("Mus musculus")));
    }

    #[test]
    fn mission_filter_combines_with_organism() {
        let filter = ExperimentFilter {
            organism: Some("mouse".to_string()),
            mission: Some("crs-8".to_string()),
        };
        let page = list_experiments(1, 10, &filter);
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].id, "GLDS-47");
    }

    #[test]
    fn fold_change_desc_puts_strongest_upregulation_first() {
        let genes = genes_for("GLDS-47", GeneSortKey::FoldChange, SortOrder::Desc, 3)
            .expect("GLDS-47 has a gene table");

        let symbols: Vec<&str> = genes.iter().map(|g| g.gene_symbol.as_str()).collect();
        assert_eq!(symbols, vec!["MT1", "FBXO32", "TRIM63"]);
        assert_eq!(genes[0].fold_change, 2.7);

        for pair in genes.windows(2) {
            assert!(pair[0].fold_change >= pair[1].fold_change);
        }
    }

    #[test]
    fn p_value_asc_puts_most_significant_first() {
        let genes = genes_for("GLDS-218", GeneSortKey::PValue, SortOrder::Asc, 10)
            .expect("GLDS-218 has a gene table");
        assert_eq!(genes[0].gene_symbol, "IFNG");
        for pair in genes.windows(2) {
            assert!(pair[0].p_value <= pair[1].p_value);
        }
    }

    #[test]
    fn unknown_experiment_has_no_gene_table() {
        assert!(genes_for("GLDS-999", GeneSortKey::FoldChange, SortOrder::Desc, 10).is_none());
        assert!(data::experiment_detail("GLDS-999").is_none());
    }

    #[test]
    fn every_catalog_p_value_is_in_unit_interval() {
        for id in ["GLDS-47", "GLDS-168", "GLDS-218"] {
            for gene in data::gene_table(id).expect("catalog table") {
                assert!(gene.p_value > 0.0 && gene.p_value <= 1.0, "{}", gene.gene_symbol);
            }
        }
    }
}
