use super::tracker::StaticScoreTable;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Port of the console API server; the host is taken from the page location.
    pub port: u16,
    pub base_path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TrackerConfig {
    /// category -> (entity id -> truth score)
    #[serde(default)]
    pub scores: HashMap<String, HashMap<String, u32>>,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
port = 11015
base_path = "/v3"

[tracker.scores.datasets]
history = 80
purchases = 26

[tracker.scores.streams]
purchaseStream = 44
"#;

impl ConsoleConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: ConsoleConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    pub fn score_table(&self) -> StaticScoreTable {
        StaticScoreTable::new(self.tracker.scores.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::tracker::ScoreSource;

    #[test]
    fn test_embedded_config() {
        let config = ConsoleConfig::embedded().unwrap();
        assert_eq!(config.api.port, 11015);
        assert_eq!(config.api.base_path, "/v3");
        assert_eq!(config.score_table(), StaticScoreTable::placeholder());
    }

    #[test]
    fn test_tracker_section_is_optional() {
        let config = ConsoleConfig::from_toml_str(
            r#"
            [api]
            port = 8080
            base_path = "/api"
            "#,
        )
        .unwrap();
        assert!(config.tracker.scores.is_empty());
        assert_eq!(config.score_table().score("datasets", "history"), None);
    }

    #[test]
    fn test_invalid_config() {
        assert!(ConsoleConfig::from_toml_str("[api]\nport = \"x\"").is_err());
    }
}
