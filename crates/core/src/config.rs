//! Explorer configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! default_interaction_weight = 5
//!
//! [suggestions]
//! max_level = 2
//! alpha = 2.0
//! beta = 1.0
//! min_mutual_friends = 0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Defaults applied to suggestion requests that leave a parameter unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionDefaults {
    /// Deepest connection level considered (inclusive, >= 2 to yield anything).
    pub max_level: usize,
    /// Weight of the mutual-friend count in the score.
    pub alpha: f64,
    /// Weight of the aggregate interaction strength in the score.
    pub beta: f64,
    /// Drop candidates with fewer mutual friends than this.
    pub min_mutual_friends: usize,
}

impl Default for SuggestionDefaults {
    fn default() -> Self {
        Self {
            max_level: 2,
            alpha: 2.0,
            beta: 1.0,
            min_mutual_friends: 0,
        }
    }
}

/// Top-level configuration for a friendgraph explorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Weight seeded in both directions when a new friendship has none.
    pub default_interaction_weight: u32,
    pub suggestions: SuggestionDefaults,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            default_interaction_weight: 5,
            suggestions: SuggestionDefaults::default(),
        }
    }
}

impl ExplorerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> GraphResult<Self> {
        let config: ExplorerConfig =
            toml::from_str(s).map_err(|e| GraphError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> GraphResult<String> {
        toml::to_string(self).map_err(|e| GraphError::config(e.to_string()))
    }

    /// Check value ranges.
    pub fn validate(&self) -> GraphResult<()> {
        if self.default_interaction_weight == 0 {
            return Err(GraphError::config(
                "default_interaction_weight must be positive",
            ));
        }
        let s = &self.suggestions;
        if s.max_level == 0 {
            return Err(GraphError::config("suggestions.max_level must be at least 1"));
        }
        for (name, value) in [("alpha", s.alpha), ("beta", s.beta)] {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::config(format!(
                    "suggestions.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
