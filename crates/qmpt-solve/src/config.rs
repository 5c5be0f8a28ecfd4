use std::path::PathBuf;
use thiserror::Error;

/// Search limits. Every limit is off by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct SolverConfig {
    /// Maximum number of rule expansions along one search branch
    pub max_depth: Option<usize>,
    /// Maximum nesting of contradiction pairings inside one closure
    pub max_closure_depth: Option<usize>,
    /// Stop after this many solutions
    pub solution_limit: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(String),
}

impl SolverConfig {
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_max_closure_depth(mut self, depth: usize) -> Self {
        self.max_closure_depth = Some(depth);
        self
    }

    pub fn with_solution_limit(mut self, limit: usize) -> Self {
        self.solution_limit = Some(limit);
        self
    }

    #[cfg(feature = "serde")]
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Json(e.to_string()))
    }

    /// Load a JSON config file
    #[cfg(feature = "serde")]
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config_tests.rs"]
mod tests;
