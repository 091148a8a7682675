//! Engine and rules configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock behaviour: ten capture-ranked candidates scored one ply
//! deep, a four second suggestion mark, and turn order enforced.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Longest suggestion highlight accepted from a config file.
pub const MAX_HIGHLIGHT_SECONDS: i64 = 24 * 60 * 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Capture-ranked candidates kept for scoring.
    pub candidate_limit: usize,
    /// 1 scores candidates statically; deeper values run alpha-beta below them.
    pub search_depth: u8,
    pub highlight_seconds: i64,
    /// Rank black's candidates by the score seen from black instead of the
    /// raw white-positive score.
    pub mover_perspective: bool,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            candidate_limit: 10,
            search_depth: 1,
            highlight_seconds: 4,
            mover_perspective: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub enforce_turn_order: bool,
    /// Also reject moves that expose the mover's king when it was not in
    /// check beforehand (pinned pieces).
    pub reject_self_check: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            enforce_turn_order: true,
            reject_self_check: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub suggestion: SuggestionConfig,
    pub rules: RulesConfig,
}

impl EngineConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suggestion.candidate_limit == 0 {
            return Err(ConfigError::Invalid(
                "suggestion.candidate_limit must be at least 1".to_owned(),
            ));
        }
        if self.suggestion.search_depth == 0 {
            return Err(ConfigError::Invalid(
                "suggestion.search_depth must be at least 1".to_owned(),
            ));
        }
        if !(0..=MAX_HIGHLIGHT_SECONDS).contains(&self.suggestion.highlight_seconds) {
            return Err(ConfigError::Invalid(format!(
                "suggestion.highlight_seconds must be between 0 and {MAX_HIGHLIGHT_SECONDS}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, EngineConfig, MAX_HIGHLIGHT_SECONDS};

    #[test]
    fn empty_object_yields_defaults() {
        let config = EngineConfig::from_json_str("{}").expect("empty config should parse");
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.suggestion.candidate_limit, 10);
        assert_eq!(config.suggestion.search_depth, 1);
        assert_eq!(config.suggestion.highlight_seconds, 4);
        assert!(config.rules.enforce_turn_order);
        assert!(!config.rules.reject_self_check);
        assert!(!config.suggestion.mover_perspective);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = EngineConfig::from_json_str(
            r#"{ "suggestion": { "search_depth": 3 }, "rules": { "reject_self_check": true } }"#,
        )
        .expect("partial config should parse");
        assert_eq!(config.suggestion.search_depth, 3);
        assert_eq!(config.suggestion.candidate_limit, 10);
        assert!(config.rules.reject_self_check);
        assert!(config.rules.enforce_turn_order);
    }

    #[test]
    fn zero_candidate_limit_is_rejected() {
        let err = EngineConfig::from_json_str(r#"{ "suggestion": { "candidate_limit": 0 } }"#)
            .expect_err("zero candidates should be rejected");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = EngineConfig::from_json_str("{ nope").expect_err("bad json should fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn highlight_window_is_bounded() {
        let err = EngineConfig::from_json_str(
            r#"{ "suggestion": { "highlight_seconds": 9223372036854775807 } }"#,
        )
        .expect_err("huge window should be rejected");
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = EngineConfig::from_json_str(r#"{ "suggestion": { "highlight_seconds": -1 } }"#)
            .expect_err("negative window should be rejected");
        assert!(matches!(err, ConfigError::Invalid(_)));

        let text = format!(r#"{{ "suggestion": {{ "highlight_seconds": {MAX_HIGHLIGHT_SECONDS} }} }}"#);
        let config = EngineConfig::from_json_str(&text).expect("upper bound is allowed");
        assert_eq!(config.suggestion.highlight_seconds, MAX_HIGHLIGHT_SECONDS);
    }

    #[test]
    fn written_config_reads_back_unchanged() {
        let mut config = EngineConfig::default();
        config.suggestion.search_depth = 2;
        config.suggestion.mover_perspective = true;
        config.rules.enforce_turn_order = false;

        let text = config.to_json_string().expect("config serializes");
        assert!(text.contains("\"mover_perspective\": true"));
        assert_eq!(EngineConfig::from_json_str(&text).expect("written config parses"), config);
    }
}
