use super::definition::AlgorithmDefinition;
use crate::error::CatalogError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

const EMBEDDED_CATALOG: &str = include_str!("../../data/algorithms.json");

/// A `(key, display name)` projection used to populate an algorithm picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmOption {
    pub value: String,
    pub label: String,
}

/// Read-only access to a static, ordered list of algorithm definitions.
///
/// Every definition is validated when the catalog is built, so anything handed
/// out by the catalog can be compiled without further checks.
#[derive(Debug, Clone)]
pub struct Catalog {
    algorithms: Vec<AlgorithmDefinition>,
    index: AHashMap<String, usize>,
}

impl Catalog {
    pub fn new(algorithms: Vec<AlgorithmDefinition>) -> Result<Self, CatalogError> {
        let mut index = AHashMap::with_capacity(algorithms.len());
        for (position, algorithm) in algorithms.iter().enumerate() {
            algorithm.validate()?;
            if index.insert(algorithm.key.clone(), position).is_some() {
                return Err(CatalogError::DuplicateAlgorithm(algorithm.key.clone()));
            }
        }
        info!(count = algorithms.len(), "loaded algorithm catalog");
        Ok(Self { algorithms, index })
    }

    /// Parses a catalog from a JSON array of algorithm definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let algorithms: Vec<AlgorithmDefinition> = serde_json::from_str(json)
            .map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::new(algorithms)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// The catalog bundled with the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn list_algorithms(&self) -> &[AlgorithmDefinition] {
        &self.algorithms
    }

    /// Looks up a definition by exact key. A miss is a normal outcome.
    pub fn get_by_key(&self, key: &str) -> Option<&AlgorithmDefinition> {
        self.index.get(key).map(|&position| &self.algorithms[position])
    }

    pub fn list_options(&self) -> Vec<AlgorithmOption> {
        self.algorithms.iter().map(Self::option_for).collect()
    }

    /// Options whose key or name contains `query`, ignoring case, in catalog order.
    pub fn search_options(&self, query: &str) -> Vec<AlgorithmOption> {
        let needle = query.trim().to_lowercase();
        self.algorithms
            .iter()
            .filter(|a| {
                needle.is_empty()
                    || a.key.to_lowercase().contains(&needle)
                    || a.name.to_lowercase().contains(&needle)
            })
            .map(Self::option_for)
            .collect()
    }

    pub fn first_key(&self) -> Option<&str> {
        self.algorithms.first().map(|a| a.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    fn option_for(algorithm: &AlgorithmDefinition) -> AlgorithmOption {
        AlgorithmOption {
            value: algorithm.key.clone(),
            label: algorithm.name.clone(),
        }
    }
}
