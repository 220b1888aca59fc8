//! Configuration types for suzerain

use serde::{Deserialize, Serialize};

/// Engine configuration: labels used when reporting turn results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Speaker label attached to broadcast turn reports
    #[serde(default = "default_speaker")]
    pub report_speaker: String,

    /// Restricted audience label for turn reports
    #[serde(default = "default_audience")]
    pub report_audience: String,
}

fn default_speaker() -> String {
    "Faction Turn".to_string()
}

fn default_audience() -> String {
    "GM".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            report_speaker: default_speaker(),
            report_audience: default_audience(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "reportSpeaker": "Sector Report",
            "reportAudience": "GM"
        }"#;

        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.report_speaker, "Sector Report");
    }

    #[test]
    fn test_config_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.report_speaker, "Faction Turn");
        assert_eq!(config.report_audience, "GM");
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"reportSpeaker": "Overseer"}}"#).unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.report_speaker, "Overseer");
        assert_eq!(config.report_audience, "GM");
    }
}
