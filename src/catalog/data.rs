use crate::model::{
    Experiment, ExperimentDetail, ExperimentFile, ExperimentSample, GeneRecord,
};

fn gene(symbol: &str, name: &str, fold_change: f64, p_value: f64, function: &str) -> GeneRecord {
    GeneRecord {
        gene_symbol: symbol.to_string(),
        gene_name: name.to_string(),
        fold_change,
        p_value,
        function: function.to_string(),
    }
}

fn sample(id: &str, sample_type: &str, condition: &str) -> ExperimentSample {
    ExperimentSample {
        id: id.to_string(),
        sample_type: sample_type.to_string(),
        condition: condition.to_string(),
    }
}

fn data_file(name: &str, file_type: &str, size: &str) -> ExperimentFile {
    ExperimentFile {
        name: name.to_string(),
        file_type: file_type.to_string(),
        size: size.to_string(),
        url: None,
    }
}

/// The curated experiment listing. The GeneLab API itself is not
/// consulted for these; the catalog is the source of truth.
pub fn experiments() -> Vec<Experiment> {
    vec![
        Experiment {
            id: "GLDS-47".to_string(),
            title: "Mouse Muscular Response to Microgravity".to_string(),
            organism: "Mus musculus (Mouse)".to_string(),
            mission: "SpaceX CRS-8".to_string(),
            date: "2016-04-08".to_string(),
            description: "Study of muscle gene expression changes in mice after 30 days in microgravity".to_string(),
            tissue: "Skeletal muscle".to_string(),
            dataset_type: "Transcriptomics".to_string(),
        },
        Experiment {
            id: "GLDS-168".to_string(),
            title: "Arabidopsis Response to Spaceflight".to_string(),
            organism: "Arabidopsis thaliana".to_string(),
            mission: "ISS Expedition 39/40".to_string(),
            date: "2014-09-21".to_string(),
            description: "Gene expression analysis of Arabidopsis plants grown on the ISS".to_string(),
            tissue: "Whole seedling".to_string(),
            dataset_type: "Transcriptomics".to_string(),
        },
        Experiment {
            id: "GLDS-218".to_string(),
            title: "Human Immune Cell Response to Spaceflight".to_string(),
            organism: "Homo sapiens".to_string(),
            mission: "SpaceX CRS-13".to_string(),
            date: "2018-01-13".to_string(),
            description: "Analysis of T-cell activation in microgravity".to_string(),
            tissue: "T-lymphocytes".to_string(),
            dataset_type: "Transcriptomics".to_string(),
        },
        Experiment {
            id: "GLDS-120".to_string(),
            title: "Rodent Research-1 (RR1)".to_string(),
            organism: "Mus musculus (Mouse)".to_string(),
            mission: "SpaceX CRS-4".to_string(),
            date: "2014-09-21".to_string(),
            description: "Effects of spaceflight on mouse liver gene expression".to_string(),
            tissue: "Liver".to_string(),
            dataset_type: "Transcriptomics".to_string(),
        },
        Experiment {
            id: "GLDS-258".to_string(),
            title: "Bacterial Growth in Space".to_string(),
            organism: "Escherichia coli".to_string(),
            mission: "ISS Expedition 50".to_string(),
            date: "2017-02-19".to_string(),
            description: "Bacterial adaptation to microgravity environment".to_string(),
            tissue: "Whole organism".to_string(),
            dataset_type: "Transcriptomics".to_string(),
        },
    ]
}

/// Full detail records exist for the three experiments that also carry
/// gene tables.
pub fn experiment_detail(id: &str) -> Option<ExperimentDetail> {
    match id {
        "GLDS-47" => Some(ExperimentDetail {
            id: "GLDS-47".to_string(),
            title: "Mouse Muscular Response to Microgravity".to_string(),
            organism: "Mus musculus (Mouse)".to_string(),
            strain: "C57BL/6J".to_string(),
            mission: "SpaceX CRS-8".to_string(),
            launch_date: "2016-04-08".to_string(),
            landing_date: "2016-05-11".to_string(),
            duration: "33 days".to_string(),
            description: "Study of muscle gene expression changes in mice after 30 days in microgravity".to_string(),
            tissue: "Skeletal muscle (gastrocnemius)".to_string(),
            dataset_type: "Transcriptomics".to_string(),
            platform: "Illumina HiSeq 2500".to_string(),
            principal_investigator: "Dr. Sarah Johnson".to_string(),
            institution: "NASA Ames Research Center".to_string(),
            samples: vec![
                sample("FLT-1", "Flight", "Microgravity"),
                sample("FLT-2", "Flight", "Microgravity"),
                sample("FLT-3", "Flight", "Microgravity"),
                sample("GC-1", "Ground Control", "1G"),
                sample("GC-2", "Ground Control", "1G"),
                sample("GC-3", "Ground Control", "1G"),
            ],
            data_files: vec![
                data_file("gene_counts.csv", "Gene Counts", "2.4 MB"),
                data_file("differential_expression.csv", "Differential Expression", "1.8 MB"),
                data_file("sample_metadata.csv", "Metadata", "0.2 MB"),
            ],
        }),
        "GLDS-168" => Some(ExperimentDetail {
            id: "GLDS-168".to_string(),
            title: "Arabidopsis Response to Spaceflight".to_string(),
            organism: "Arabidopsis thaliana".to_string(),
            strain: "Columbia-0".to_string(),
            mission: "ISS Expedition 39/40".to_string(),
            launch_date: "2014-04-18".to_string(),
            landing_date: "2014-09-21".to_string(),
            duration: "156 days".to_string(),
            description: "Gene expression analysis of Arabidopsis plants grown on the ISS".to_string(),
            tissue: "Whole seedling".to_string(),
            dataset_type: "Transcriptomics".to_string(),
            platform: "Illumina NextSeq 500".to_string(),
            principal_investigator: "Dr. Anna Martinez".to_string(),
            institution: "University of Florida".to_string(),
            samples: vec![
                sample("ISS-1", "Flight", "Microgravity"),
                sample("ISS-2", "Flight", "Microgravity"),
                sample("ISS-3", "Flight", "Microgravity"),
                sample("GC-1", "Ground Control", "1G"),
                sample("GC-2", "Ground Control", "1G"),
                sample("GC-3", "Ground Control", "1G"),
            ],
            data_files: vec![
                data_file("gene_counts.csv", "Gene Counts", "3.1 MB"),
                data_file("differential_expression.csv", "Differential Expression", "2.2 MB"),
                data_file("sample_metadata.csv", "Metadata", "0.3 MB"),
            ],
        }),
        "GLDS-218" => Some(ExperimentDetail {
            id: "GLDS-218".to_string(),
            title: "Human Immune Cell Response to Spaceflight".to_string(),
            organism: "Homo sapiens".to_string(),
            strain: "N/A".to_string(),
            mission: "SpaceX CRS-13".to_string(),
            launch_date: "2017-12-15".to_string(),
            landing_date: "2018-01-13".to_string(),
            duration: "29 days".to_string(),
            description: "Analysis of T-cell activation in microgravity".to_string(),
            tissue: "T-lymphocytes".to_string(),
            dataset_type: "Transcriptomics".to_string(),
            platform: "Illumina HiSeq 4000".to_string(),
            principal_investigator: "Dr. Michael Chen".to_string(),
            institution: "Stanford University".to_string(),
            samples: vec![
                sample("FLT-T1", "Flight", "Microgravity"),
                sample("FLT-T2", "Flight", "Microgravity"),
                sample("FLT-T3", "Flight", "Microgravity"),
                sample("GC-T1", "Ground Control", "1G"),
                sample("GC-T2", "Ground Control", "1G"),
                sample("GC-T3", "Ground Control", "1G"),
            ],
            data_files: vec![
                data_file("gene_counts.csv", "Gene Counts", "2.8 MB"),
                data_file("differential_expression.csv", "Differential Expression", "2.0 MB"),
                data_file("sample_metadata.csv", "Metadata", "0.3 MB"),
            ],
        }),
        _ => None,
    }
}

/// Differential-expression tables keyed by experiment id.
pub fn gene_table(experiment_id: &str) -> Option<Vec<GeneRecord>> {
    match experiment_id {
        "GLDS-47" => Some(vec![
            gene("MYH7", "Myosin Heavy Chain 7", -2.8, 0.0001, "Muscle contraction, cardiac muscle development"),
            gene("ACTA1", "Actin Alpha 1", -2.3, 0.0003, "Skeletal muscle thin filament assembly"),
            gene("MYBPC2", "Myosin Binding Protein C2", -2.1, 0.0008, "Regulation of muscle contraction"),
            gene("TNNT3", "Troponin T3", -1.9, 0.0012, "Skeletal muscle contraction"),
            gene("MYL1", "Myosin Light Chain 1", -1.7, 0.0015, "Muscle contraction"),
            gene("FOXO1", "Forkhead Box O1", 1.8, 0.0022, "Muscle atrophy, stress response"),
            gene("TRIM63", "Tripartite Motif Containing 63", 2.1, 0.0009, "Muscle atrophy, protein degradation"),
            gene("FBXO32", "F-Box Protein 32", 2.4, 0.0005, "Muscle atrophy, protein degradation"),
            gene("MT1", "Metallothionein 1", 2.7, 0.0002, "Oxidative stress response"),
            gene("SOD2", "Superoxide Dismutase 2", 1.6, 0.0030, "Antioxidant defense"),
        ]),
        "GLDS-168" => Some(vec![
            gene("ATHB-7", "Arabidopsis thaliana Homeobox 7", 2.9, 0.0002, "Response to water deprivation"),
            gene("HSP70", "Heat Shock Protein 70", 2.5, 0.0004, "Stress response, protein folding"),
            gene("RBCS", "Ribulose Bisphosphate Carboxylase Small Chain", -1.8, 0.0015, "Photosynthesis"),
            gene("CAB1", "Chlorophyll A/B Binding Protein 1", -2.1, 0.0008, "Light harvesting in photosynthesis"),
            gene("DREB2A", "Dehydration-Responsive Element-Binding Protein 2A", 1.9, 0.0012, "Stress response transcription factor"),
            gene("APX1", "Ascorbate Peroxidase 1", 1.7, 0.0020, "Antioxidant defense"),
            gene("XTH9", "Xyloglucan Endotransglucosylase/Hydrolase 9", 2.2, 0.0007, "Cell wall modification"),
            gene("PIN1", "Pin-Formed 1", -1.6, 0.0025, "Auxin transport, gravitropism"),
            gene("SCR", "Scarecrow", -1.5, 0.0030, "Root development, gravitropism"),
            gene("CHS", "Chalcone Synthase", 1.4, 0.0040, "Flavonoid biosynthesis, UV protection"),
        ]),
        "GLDS-218" => Some(vec![
            gene("IL2RA", "Interleukin 2 Receptor Subunit Alpha", -2.3, 0.0004, "T cell activation and proliferation"),
            gene("CD28", "CD28 Molecule", -1.9, 0.0009, "T cell co-stimulation"),
            gene("IFNG", "Interferon Gamma", -2.5, 0.0002, "Cytokine activity, immune response"),
            gene("TNF", "Tumor Necrosis Factor", -1.7, 0.0015, "Cytokine activity, inflammatory response"),
            gene("IL10", "Interleukin 10", 1.8, 0.0011, "Anti-inflammatory cytokine"),
            gene("HSPA1A", "Heat Shock Protein Family A Member 1A", 2.4, 0.0003, "Stress response, protein folding"),
            gene("SOD1", "Superoxide Dismutase 1", 1.6, 0.0020, "Antioxidant defense"),
            gene("CASP3", "Caspase 3", 1.5, 0.0025, "Apoptosis execution"),
            gene("TP53", "Tumor Protein P53", 1.7, 0.0018, "DNA damage response, apoptosis"),
            gene("NFKB1", "Nuclear Factor Kappa B Subunit 1", 1.4, 0.0030, "Transcription factor, immune response"),
        ]),
        _ => None,
    }
}
