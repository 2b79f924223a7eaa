//! Solver configuration for wgraph
//!
//! Configuration is plain TOML, e.g.
//!
//! ```toml
//! version = 1
//! representation = "adjacency"
//! grouping = "group-list"
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};

pub use types::{Grouping, Representation, SolverConfig, CONFIG_FORMAT_VERSION};

impl SolverConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SolverConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            return Err(GraphError::invalid_value(
                "config version",
                format!(
                    "{} (newest supported: {})",
                    self.version, CONFIG_FORMAT_VERSION
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert_eq!(config.representation, Representation::Basic);
        assert_eq!(config.grouping, Grouping::UnionFind);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wgraph.toml");

        let config = SolverConfig {
            representation: Representation::Adjacency,
            grouping: Grouping::GroupList,
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = SolverConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SolverConfig::from_toml_str("grouping = \"group-list\"").unwrap();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert_eq!(config.representation, Representation::Basic);
        assert_eq!(config.grouping, Grouping::GroupList);
    }

    #[test]
    fn test_unknown_representation_is_rejected() {
        let err = SolverConfig::from_toml_str("representation = \"sparse\"").unwrap_err();
        assert_eq!(err.error_type(), "toml_error");
    }

    #[test]
    fn test_future_version_is_rejected() {
        let err = SolverConfig::from_toml_str("version = 99").unwrap_err();
        assert!(matches!(err, GraphError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = SolverConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!(
            "matrix".parse::<Representation>().unwrap(),
            Representation::Adjacency
        );
        assert_eq!(
            " Union-Find ".parse::<Grouping>().unwrap(),
            Grouping::UnionFind
        );
        let err = "fastest".parse::<Grouping>().unwrap_err();
        assert_eq!(err.to_string(), "invalid grouping: fastest");
    }

    #[test]
    fn test_display_matches_serde_names() {
        for repr in Representation::ALL {
            let toml = format!("representation = \"{}\"", repr);
            assert_eq!(SolverConfig::from_toml_str(&toml).unwrap().representation, repr);
        }
        for grouping in Grouping::ALL {
            let toml = format!("grouping = \"{}\"", grouping);
            assert_eq!(SolverConfig::from_toml_str(&toml).unwrap().grouping, grouping);
        }
    }
}
