//! Saving and loading object configurations as files

use crate::object::{ConfigurationRegistry, ObjectConfiguration};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// A serialized object: its type tag, editor name, and configuration subtree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    /// Object type name the configuration was registered under
    pub object_type: String,
    /// Name of the object in the editor
    pub name: String,
    /// The configuration's serialized state
    pub configuration: Value,
}

/// Errors that can occur while persisting objects
#[derive(Debug, thiserror::Error)]
pub enum ObjectFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown object type: {0}")]
    UnknownType(String),
}

impl StoredObject {
    /// Capture a configuration into a storable record
    pub fn from_configuration(
        object_type: impl Into<String>,
        name: impl Into<String>,
        configuration: &dyn ObjectConfiguration,
    ) -> Self {
        Self {
            object_type: object_type.into(),
            name: name.into(),
            configuration: configuration.serialize(),
        }
    }

    /// Rebuild the configuration through the registry
    pub fn instantiate(
        &self,
        registry: &ConfigurationRegistry,
    ) -> Result<Box<dyn ObjectConfiguration>, ObjectFileError> {
        registry
            .create_from_element(&self.object_type, &self.configuration)
            .ok_or_else(|| ObjectFileError::UnknownType(self.object_type.clone()))
    }

    /// Save this object to a pretty-printed JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ObjectFileError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!(path = ?path, object_type = %self.object_type, "Saved object");
        Ok(())
    }

    /// Load an object from a JSON file
    pub fn load_from_file(path: &Path) -> Result<StoredObject, ObjectFileError> {
        let json = fs::read_to_string(path)?;
        let stored: StoredObject = serde_json::from_str(&json)?;
        debug!(
            path = ?path,
            object_type = %stored.object_type,
            name = %stored.name,
            "Loaded object"
        );
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model3d::{Model3DAnimation, Model3DObjectConfiguration};

    fn sample_object() -> StoredObject {
        let mut configuration = Model3DObjectConfiguration::new();
        configuration.update_property("modelResourceName", "robot.glb");
        configuration.add_animation(Model3DAnimation::new("walk", "walk_clip", true));
        StoredObject::from_configuration("Model3DObject", "Robot", &configuration)
    }

    #[test]
    fn test_instantiate_through_registry() {
        let registry = ConfigurationRegistry::with_default_configurations();
        let stored = sample_object();

        let configuration = stored.instantiate(&registry).unwrap();
        assert_eq!(configuration.animations_count(), 1);
        assert!(configuration.has_animation_named("walk"));

        let properties = configuration.properties();
        assert_eq!(properties["modelResourceName"].value(), "robot.glb");
    }

    #[test]
    fn test_instantiate_unknown_type() {
        let registry = ConfigurationRegistry::new();
        let result = sample_object().instantiate(&registry);
        assert!(matches!(result, Err(ObjectFileError::UnknownType(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robot.object.json");

        let stored = sample_object();
        stored.save_to_file(&path).unwrap();

        let loaded = StoredObject::load_from_file(&path).unwrap();
        assert_eq!(loaded.object_type, "Model3DObject");
        assert_eq!(loaded.name, "Robot");
        assert_eq!(loaded.configuration, stored.configuration);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = StoredObject::load_from_file(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ObjectFileError::Io(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let result = StoredObject::load_from_file(&path);
        assert!(matches!(result, Err(ObjectFileError::Json(_))));
    }
}
