//! Search configuration

use crate::search::error::{SearchError, SearchResult};
use serde::{Deserialize, Serialize};

/// Largest result list the dashboard accepts
pub const RESULT_LIMIT: usize = 20;

/// Largest suggestion list the dashboard accepts
pub const SUGGESTION_LIMIT: usize = 10;

/// Points awarded per query term for each kind of match
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Term is a substring of the title
    #[serde(default = "default_title_weight")]
    pub title: u32,

    /// Term is a substring of the subtitle
    #[serde(default = "default_subtitle_weight")]
    pub subtitle: u32,

    /// Term is a substring of the description
    #[serde(default = "default_description_weight")]
    pub description: u32,

    /// Term equals the whole title; added on top of `title`
    #[serde(default = "default_exact_title_weight")]
    pub exact_title: u32,

    /// Term equals the whole subtitle; added on top of `subtitle`
    #[serde(default = "default_exact_subtitle_weight")]
    pub exact_subtitle: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title: default_title_weight(),
            subtitle: default_subtitle_weight(),
            description: default_description_weight(),
            exact_title: default_exact_title_weight(),
            exact_subtitle: default_exact_subtitle_weight(),
        }
    }
}

/// Search service configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Maximum search results to return, at most [`RESULT_LIMIT`]
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Maximum autocomplete suggestions to return, at most [`SUGGESTION_LIMIT`]
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Relevance weights
    #[serde(default)]
    pub weights: ScoringWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            max_suggestions: default_max_suggestions(),
            weights: ScoringWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Reject caps outside the dashboard limits and all-zero substring weights
    pub fn validate(&self) -> SearchResult<()> {
        if !(1..=RESULT_LIMIT).contains(&self.max_results) {
            return Err(SearchError::InvalidConfiguration(format!(
                "max_results must be between 1 and {}, got {}",
                RESULT_LIMIT, self.max_results
            )));
        }
        if !(1..=SUGGESTION_LIMIT).contains(&self.max_suggestions) {
            return Err(SearchError::InvalidConfiguration(format!(
                "max_suggestions must be between 1 and {}, got {}",
                SUGGESTION_LIMIT, self.max_suggestions
            )));
        }
        let w = &self.weights;
        if w.title == 0 && w.subtitle == 0 && w.description == 0 {
            return Err(SearchError::InvalidConfiguration(
                "at least one substring weight must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for SearchConfig
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn max_results(mut self, max: usize) -> Self {
        self.config.max_results = max;
        self
    }

    pub fn max_suggestions(mut self, max: usize) -> Self {
        self.config.max_suggestions = max;
        self
    }

    pub fn weights(mut self, weights: ScoringWeights) -> Self {
        self.config.weights = weights;
        self
    }

    pub fn build(self) -> SearchResult<SearchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_max_results() -> usize {
    RESULT_LIMIT
}

fn default_max_suggestions() -> usize {
    SUGGESTION_LIMIT
}

fn default_title_weight() -> u32 {
    10
}

fn default_subtitle_weight() -> u32 {
    5
}

fn default_description_weight() -> u32 {
    3
}

fn default_exact_title_weight() -> u32 {
    20
}

fn default_exact_subtitle_weight() -> u32 {
    15
}
