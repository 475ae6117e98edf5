use crate::catalog::{ALL_LABEL, ExerciseCatalog, ExerciseRecord};

/// Active concept filter: everything, or one grammatical concept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConceptFilter {
    #[default]
    All,
    Concept(String),
}

impl ConceptFilter {
    /// Map a picker label back to a filter. The "All" label is synthetic;
    /// any other label is taken verbatim as a concept.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            ConceptFilter::All
        } else {
            ConceptFilter::Concept(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ConceptFilter::All => ALL_LABEL,
            ConceptFilter::Concept(concept) => concept,
        }
    }

    pub fn matches(&self, record: &ExerciseRecord) -> bool {
        match self {
            ConceptFilter::All => true,
            ConceptFilter::Concept(concept) => record.concept == *concept,
        }
    }
}

/// Indices of catalog records passing the filter, in catalog order.
pub fn filtered_indices(catalog: &ExerciseCatalog, filter: &ConceptFilter) -> Vec<usize> {
    catalog
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(record))
        .map(|(i, _)| i)
        .collect()
}
