use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUNDLED_EXERCISES: &str = include_str!("../assets/exercises.json");

/// Synthetic concept label meaning "no filter".
pub const ALL_LABEL: &str = "All";

/// One sentence-building exercise. Immutable once loaded.
///
/// `tiles` is the palette shown to the learner; its order carries no meaning.
/// `solutions` lists every accepted ordering — more than one when Tamil
/// allows grammatical word-order variants.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub id: String,
    pub concept: String,
    pub level: u8,
    pub english_prompt: String,
    pub target_text: String,
    #[serde(default)]
    pub explanation: String,
    pub tiles: Vec<String>,
    pub solutions: Vec<Vec<String>>,
}

/// Data-integrity faults in an exercise file. These are authoring errors:
/// they abort the load, they are never recovered from at runtime.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate exercise id {0:?}")]
    DuplicateId(String),
    #[error("exercise {0:?} has no solutions")]
    NoSolutions(String),
    #[error("exercise {0:?} has an empty solution")]
    EmptySolution(String),
    #[error("exercise {id:?}: solution token {token:?} is not in the tile set")]
    TokenNotInTiles { id: String, token: String },
}

/// Read-only, ordered exercise list. Validated on every load path.
#[derive(Clone, Debug)]
pub struct ExerciseCatalog {
    records: Vec<ExerciseRecord>,
}

impl ExerciseCatalog {
    /// Load the catalog bundled into the binary.
    pub fn load() -> Result<Self> {
        Self::from_json(BUNDLED_EXERCISES).context("bundled exercise catalog is invalid")
    }

    /// Load a user-authored catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("catalog file {} is invalid", path.display()))
    }

    fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ExerciseRecord> =
            serde_json::from_str(json).context("failed to parse exercise JSON")?;
        Ok(Self::from_records(records)?)
    }

    /// Validate and wrap a record list.
    pub fn from_records(records: Vec<ExerciseRecord>) -> Result<Self, CatalogError> {
        validate(&records)?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ExerciseRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ExerciseRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct concept labels in first-seen catalog order.
    pub fn concepts(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.concept.as_str()))
            .map(|r| r.concept.clone())
            .collect()
    }

    /// `concepts()` with the synthetic "All" label prepended — the list the
    /// concept picker renders.
    pub fn concept_labels(&self) -> Vec<String> {
        let mut labels = vec![ALL_LABEL.to_string()];
        labels.extend(self.concepts());
        labels
    }

    /// Number of exercises tagged with a concept label.
    pub fn count_for_concept(&self, concept: &str) -> usize {
        self.records.iter().filter(|r| r.concept == concept).count()
    }
}

fn validate(records: &[ExerciseRecord]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();
    for record in records {
        if !ids.insert(record.id.as_str()) {
            return Err(CatalogError::DuplicateId(record.id.clone()));
        }
        if record.solutions.is_empty() {
            return Err(CatalogError::NoSolutions(record.id.clone()));
        }
        for solution in &record.solutions {
            if solution.is_empty() {
                return Err(CatalogError::EmptySolution(record.id.clone()));
            }
            for token in solution {
                if !record.tiles.contains(token) {
                    return Err(CatalogError::TokenNotInTiles {
                        id: record.id.clone(),
                        token: token.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn record(id: &str, concept: &str, tiles: &[&str], solutions: &[&[&str]]) -> ExerciseRecord {
    ExerciseRecord {
        id: id.to_string(),
        concept: concept.to_string(),
        level: 1,
        english_prompt: format!("prompt for {id}"),
        target_text: solutions[0].join(" "),
        explanation: String::new(),
        tiles: tiles.iter().map(|t| t.to_string()).collect(),
        solutions: solutions
            .iter()
            .map(|s| s.iter().map(|t| t.to_string()).collect())
            .collect(),
    }
}
