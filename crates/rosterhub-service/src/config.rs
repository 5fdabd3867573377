//! Per-sport service configuration.
//!
//! The five backends are one codebase instantiated with different
//! [`SportConfig`]s. Configs are plain data: buildable in code or loaded
//! from a YAML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// The `/acercade` payload. Field names are the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct About {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "email")]
    pub email: String,
    #[serde(rename = "fecha")]
    pub date: String,
}

/// Configuration for one sport's backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportConfig {
    /// Short route name, e.g. `natacion`. Also the gateway prefix (without
    /// the leading slash).
    pub name: String,
    /// Human-facing service name used in the home message.
    pub display_name: String,
    /// The key under which the form serializer sends the document id in
    /// `setTodo` bodies, e.g. `id_deportista` or `id_persona`.
    pub id_field: String,
    pub about: About,
}

impl SportConfig {
    /// The `GET /` payload message.
    pub fn home_message(&self) -> String {
        format!("{}: home", self.display_name)
    }

    /// Loads a config from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ServiceError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ServiceError::Config(format!("{}: {}", path.display(), e)))?;
        serde_yaml::from_str(&text).map_err(|e| ServiceError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn swimming() -> SportConfig {
        SportConfig {
            name: "natacion".to_string(),
            display_name: "MS Natacion".to_string(),
            id_field: "id_deportista".to_string(),
            about: About {
                message: "MS Natacion: acerca de".to_string(),
                author: "Ana Torres".to_string(),
                email: "ana@example.org".to_string(),
                date: "22/03/2023".to_string(),
            },
        }
    }

    #[test]
    fn test_home_message() {
        assert_eq!(swimming().home_message(), "MS Natacion: home");
    }

    #[test]
    fn test_about_wire_keys() {
        let wire = serde_json::to_value(swimming().about).unwrap();
        assert!(wire.get("mensaje").is_some());
        assert!(wire.get("autor").is_some());
        assert!(wire.get("fecha").is_some());
        assert!(wire.get("author").is_none());
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            concat!(
                "name: remo\n",
                "display_name: MS Remo\n",
                "id_field: id_deportista\n",
                "about:\n",
                "  mensaje: MS Remo, acerca de\n",
                "  autor: Bea Ruiz\n",
                "  email: bea@example.org\n",
                "  fecha: 01/04/2023\n",
            )
        )
        .unwrap();

        let config = SportConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.name, "remo");
        assert_eq!(config.about.author, "Bea Ruiz");
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let err = SportConfig::from_yaml_file(Path::new("/nonexistent/cfg.yaml")).unwrap_err();
        assert!(err.to_string().contains("cfg.yaml"));
    }
}
