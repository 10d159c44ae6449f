use serde::{Deserialize, Serialize};

use crate::error::{NodeError, NodeResult};

/// Names used for the schema elements produced by
/// [`NodeDefinitions`](crate::NodeDefinitions).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    pub interface_name: String,
    pub id_field: String,
    pub node_field: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            interface_name: "Node".into(),
            id_field: "id".into(),
            node_field: "node".into(),
        }
    }
}

impl NodeConfig {
    /// Parse a TOML document, filling absent keys with defaults.
    pub fn from_toml_str(s: &str) -> NodeResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| NodeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every name is a valid GraphQL name.
    pub fn validate(&self) -> NodeResult<()> {
        for (key, name) in [
            ("interface_name", &self.interface_name),
            ("id_field", &self.id_field),
            ("node_field", &self.node_field),
        ] {
            if !is_graphql_name(name) {
                return Err(NodeError::Config(format!(
                    "{key} {name:?} is not a valid GraphQL name"
                )));
            }
        }
        Ok(())
    }
}

/// `/[_A-Za-z][_0-9A-Za-z]*/`
fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = NodeConfig::default();
        assert_eq!(c.interface_name, "Node");
        assert_eq!(c.id_field, "id");
        assert_eq!(c.node_field, "node");
        c.validate().unwrap();
    }

    #[test]
    fn toml_overrides_keep_defaults() {
        let c = NodeConfig::from_toml_str(
            r#"
            interface_name = "Entity"
            "#,
        )
        .unwrap();
        assert_eq!(c.interface_name, "Entity");
        assert_eq!(c.node_field, "node");
        assert_eq!(c.id_field, "id");
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(NodeConfig::from_toml_str("").unwrap(), NodeConfig::default());
    }

    #[test]
    fn invalid_name_rejected() {
        let err = NodeConfig::from_toml_str(r#"node_field = "1node""#).unwrap_err();
        assert!(matches!(err, NodeError::Config(_)));
    }

    #[test]
    fn every_name_is_checked() {
        let c = NodeConfig {
            id_field: "id!".into(),
            ..NodeConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(NodeConfig::from_toml_str("interface_name = [").is_err());
    }

    #[test]
    fn graphql_names() {
        assert!(is_graphql_name("_private"));
        assert!(is_graphql_name("node2"));
        assert!(!is_graphql_name(""));
        assert!(!is_graphql_name("my-node"));
    }
}
