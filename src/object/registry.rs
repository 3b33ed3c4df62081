//! Registry of object configuration factories
//!
//! Maps object type names to factories so scene loading can rebuild a
//! configuration from its serialized type tag without compile-time knowledge
//! of the concrete type.

use crate::object::ObjectConfiguration;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A function that creates a default configuration of one object type
pub type ConfigurationFactoryFn = Arc<dyn Fn() -> Box<dyn ObjectConfiguration> + Send + Sync>;

/// Registry of configuration factories, keyed by object type name
#[derive(Default)]
pub struct ConfigurationRegistry {
    factories: HashMap<String, ConfigurationFactoryFn>,
}

impl ConfigurationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a configuration type under an object type name
    pub fn register<T>(&mut self, type_name: &str)
    where
        T: ObjectConfiguration + Default + 'static,
    {
        let factory: ConfigurationFactoryFn =
            Arc::new(|| Box::new(T::default()) as Box<dyn ObjectConfiguration>);
        self.factories.insert(type_name.to_string(), factory);
        debug!(type_name = type_name, "Registered configuration factory");
    }

    /// Create a default configuration for the given object type
    pub fn create(&self, type_name: &str) -> Option<Box<dyn ObjectConfiguration>> {
        self.factories.get(type_name).map(|factory| factory())
    }

    /// Create a configuration and restore its state from a tree element
    pub fn create_from_element(
        &self,
        type_name: &str,
        element: &Value,
    ) -> Option<Box<dyn ObjectConfiguration>> {
        let mut configuration = self.create(type_name)?;
        configuration.unserialize(element);
        Some(configuration)
    }

    /// Check if an object type is registered
    pub fn is_registered(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Get all registered object type names
    pub fn registered_types(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(|s| s.as_str())
    }

    /// Get the number of registered object types
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Create a registry with all built-in configurations registered
    pub fn with_default_configurations() -> Self {
        use crate::model3d::Model3DObjectConfiguration;

        let mut registry = Self::new();
        registry.register::<Model3DObjectConfiguration>("Model3DObject");

        debug!(
            type_count = registry.len(),
            "Created registry with default configurations"
        );

        registry
    }
}

impl std::fmt::Debug for ConfigurationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationRegistry")
            .field("registered_types", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model3d::Model3DObjectConfiguration;
    use serde_json::json;

    #[test]
    fn test_registry_basic() {
        let mut registry = ConfigurationRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        registry.register::<Model3DObjectConfiguration>("Model3DObject");
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
        assert!(registry.is_registered("Model3DObject"));
        assert!(!registry.is_registered("SpriteObject"));
    }

    #[test]
    fn test_registry_create() {
        let registry = ConfigurationRegistry::with_default_configurations();

        let configuration = registry.create("Model3DObject").unwrap();
        assert_eq!(configuration.animations_count(), 0);

        assert!(registry.create("UnknownObject").is_none());
    }

    #[test]
    fn test_registry_create_from_element() {
        let registry = ConfigurationRegistry::with_default_configurations();
        let element = json!({ "width": 64.0 });

        let configuration = registry
            .create_from_element("Model3DObject", &element)
            .unwrap();
        let properties = configuration.properties();
        assert_eq!(properties["width"].value(), "64");
    }

    #[test]
    fn test_registry_registered_types() {
        let registry = ConfigurationRegistry::with_default_configurations();
        let types: Vec<&str> = registry.registered_types().collect();
        assert!(types.contains(&"Model3DObject"));
    }
}
