use serde::{Deserialize, Serialize};
use statute_editor::ManualNumbering;
use statute_parser::Serializer;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "statute.config.json";

/// Statute configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Write indented output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Indent unit for pretty output
    #[serde(default = "default_indent")]
    pub indent: String,

    /// How manually numbered labels affect renumbering
    #[serde(default)]
    pub manual_numbering: ManualNumbering,
}

fn default_pretty() -> bool {
    true
}

fn default_indent() -> String {
    "  ".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Serializer for output; `pretty` from the command line wins over the file
    pub fn serializer(&self, pretty: Option<bool>) -> Serializer {
        if pretty.unwrap_or(self.pretty) {
            Serializer::with_indent(&self.indent)
        } else {
            Serializer::new()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            indent: default_indent(),
            manual_numbering: ManualNumbering::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statute_parser::{Kind, Node};

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "pretty": false,
            "indent": "\t",
            "manualNumbering": "exclude"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert!(!config.pretty);
        assert_eq!(config.indent, "\t");
        assert_eq!(config.manual_numbering, ManualNumbering::Exclude);
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.pretty);
        assert_eq!(config.indent, "  ");
        assert_eq!(config.manual_numbering, ManualNumbering::Reserve);
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        assert!(Config::load(&cwd).unwrap().pretty);

        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "pretty": false }"#).unwrap();
        assert!(!Config::load(&cwd).unwrap().pretty);
    }

    #[test]
    fn test_flag_overrides_config() {
        let node = Node::new(Kind::Body).with_child(Node::new(Kind::Part));
        let config = Config::default();

        assert_eq!(config.serializer(Some(false)).serialize(&node), "<body><part></part></body>");
        assert!(config.serializer(None).serialize(&node).contains("\n  <part>"));
    }
}
