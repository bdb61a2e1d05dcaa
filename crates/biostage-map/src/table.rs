//! The static routing table.
//!
//! Maps each supported (genetic_alteration_type, datatype) pair to the
//! ordered list of preprocessing scripts and staging tables its data file
//! must pass through. This table is the authoritative classification
//! knowledge of the pipeline, fixed at build time; combinations absent here
//! are rejected by the engine.

use std::collections::HashMap;
use std::sync::LazyLock;

use biostage_model::ClassificationKey;

/// Fallback script for data shapes staged verbatim (no reshaping needed
/// before load).
pub const DEFAULT_PREPROCESSOR_SCRIPT: &str = "default.sh";

/// One preprocessing step and its staging destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageMapping {
    pub preprocessing_script: &'static str,
    pub db_table: &'static str,
}

static ROUTING_TABLE: LazyLock<HashMap<ClassificationKey, Vec<StageMapping>>> =
    LazyLock::new(|| {
        let mut table = HashMap::new();

        add(&mut table, "CANCER_TYPE", "CANCER_TYPE", &[(
            "add_data_cancer_type_header.sh",
            "staging.stage_data_cancer_type",
        )]);

        // clinical and timeline; attribute files stage their definitions and
        // their melted values separately
        add(&mut table, "CLINICAL", "PATIENT_ATTRIBUTES", &[
            (
                "extract_clinical_attributes_definition.py",
                "staging.stage_data_clinical_patient_attributes",
            ),
            (
                "melt_clinical_attributes_table.sh",
                "staging.stage_data_clinical_patient_attributes_values",
            ),
        ]);
        add(&mut table, "CLINICAL", "SAMPLE_ATTRIBUTES", &[
            (
                "extract_clinical_attributes_definition.py",
                "staging.stage_data_clinical_sample_attributes",
            ),
            (
                "melt_clinical_attributes_table.sh",
                "staging.stage_data_clinical_sample_attributes_values",
            ),
        ]);
        add(&mut table, "CLINICAL", "TIMELINE", &[(
            DEFAULT_PREPROCESSOR_SCRIPT,
            "staging.stage_data_clinical_timeline",
        )]);

        // rppa and mass spectrometry
        for datatype in ["LOG2-VALUE", "Z-SCORE", "CONTINUOUS"] {
            add(&mut table, "PROTEIN_LEVEL", datatype, &[(
                "melt_protein_level_table.sh",
                "staging.stage_data_protein_level",
            )]);
        }

        // cna
        add(&mut table, "COPY_NUMBER_ALTERATION", "DISCRETE", &[(
            "melt_gene_sample_table.sh",
            "staging.stage_data_copy_number_alteration_discrete",
        )]);
        add(&mut table, "COPY_NUMBER_ALTERATION", "DISCRETE_LONG", &[(
            DEFAULT_PREPROCESSOR_SCRIPT,
            "staging.stage_data_copy_number_alteration_discrete",
        )]);
        add(&mut table, "COPY_NUMBER_ALTERATION", "CONTINUOUS", &[(
            "melt_gene_sample_table.sh",
            "staging.stage_data_copy_number_alteration_continuous",
        )]);
        add(&mut table, "COPY_NUMBER_ALTERATION", "LOG2-VALUE", &[(
            "melt_gene_sample_table.sh",
            "staging.stage_data_copy_number_alteration_continuous",
        )]);
        add(&mut table, "COPY_NUMBER_ALTERATION", "SEG", &[(
            DEFAULT_PREPROCESSOR_SCRIPT,
            "staging.stage_data_copy_number_alteration_segmented",
        )]);

        // expression
        add(&mut table, "MRNA_EXPRESSION", "CONTINUOUS", &[(
            "melt_gene_sample_table.sh",
            "staging.stage_data_mrna_expression",
        )]);
        add(&mut table, "MRNA_EXPRESSION", "Z-SCORE", &[(
            "melt_gene_sample_table.sh",
            "staging.stage_data_mrna_expression",
        )]);

        // methylation shares the gene-by-sample staging shape
        add(&mut table, "METHYLATION", "CONTINUOUS", &[(
            "melt_gene_sample_table.sh",
            "staging.stage_data_mrna_expression",
        )]);

        // mutations
        add(&mut table, "MUTATION_EXTENDED", "MAF", &[(
            DEFAULT_PREPROCESSOR_SCRIPT,
            "staging.stage_data_maf",
        )]);
        add(&mut table, "MUTATION_UNCALLED", "MAF", &[(
            DEFAULT_PREPROCESSOR_SCRIPT,
            "staging.stage_data_maf",
        )]);

        // others
        add(&mut table, "GENE_PANEL_MATRIX", "GENE_PANEL_MATRIX", &[(
            "melt_gene_panel_matrix.sh",
            "staging.stage_data_gene_panel",
        )]);
        add(&mut table, "STRUCTURAL_VARIANT", "SV", &[(
            DEFAULT_PREPROCESSOR_SCRIPT,
            "staging.stage_data_structural_variant",
        )]);

        // cross-sample molecular statistics (for gene selection)
        add(&mut table, "GISTIC_GENES_AMP", "Q-VALUE", &[(
            DEFAULT_PREPROCESSOR_SCRIPT,
            "staging.stage_data_gistic",
        )]);
        add(&mut table, "GISTIC_GENES_DEL", "Q-VALUE", &[(
            DEFAULT_PREPROCESSOR_SCRIPT,
            "staging.stage_data_gistic",
        )]);
        add(&mut table, "MUTSIG", "Q-VALUE", &[(
            DEFAULT_PREPROCESSOR_SCRIPT,
            "staging.stage_data_mutsig",
        )]);

        add(&mut table, "GENESET_SCORE", "GSVA-SCORE", &[(
            "melt_geneset_table.sh",
            "staging.stage_data_geneset",
        )]);
        add(&mut table, "GENESET_SCORE", "P-VALUE", &[(
            "melt_geneset_table.sh",
            "staging.stage_data_geneset",
        )]);

        for datatype in ["LIMIT-VALUE", "BINARY", "CATEGORICAL"] {
            add(&mut table, "GENERIC_ASSAY", datatype, &[(
                "melt_generic_assay_table.sh",
                "staging.stage_data_generic_assay",
            )]);
        }

        table
    });

fn add(
    table: &mut HashMap<ClassificationKey, Vec<StageMapping>>,
    alteration_type: &str,
    datatype: &str,
    mappings: &[(&'static str, &'static str)],
) {
    let mappings = mappings
        .iter()
        .map(|&(preprocessing_script, db_table)| StageMapping {
            preprocessing_script,
            db_table,
        })
        .collect();
    table.insert(ClassificationKey::new(alteration_type, datatype), mappings);
}

/// Look up the mappings for a classification key, in declared order.
#[must_use]
pub fn lookup(key: &ClassificationKey) -> Option<&'static [StageMapping]> {
    ROUTING_TABLE.get(key).map(Vec::as_slice)
}

/// All supported keys, ordered for stable listings.
#[must_use]
pub fn supported_keys() -> Vec<&'static ClassificationKey> {
    let mut keys: Vec<_> = ROUTING_TABLE.keys().collect();
    keys.sort();
    keys
}
