//! The object configuration protocol consumed by the editor
//!
//! The editor depends only on this protocol: it renders whatever
//! `properties()` returns and writes edits back through `update_property`,
//! never knowing the concrete configuration type.

use crate::property::PropertyDescriptor;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub mod registry;
pub mod values;

pub use registry::ConfigurationRegistry;

/// A placed instance of an object in a scene
///
/// Only the pieces the property protocol needs are modeled here: a free-form
/// per-instance override map, keyed by property name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialInstance {
    pub custom_properties: BTreeMap<String, String>,
}

/// Visitor for resource-reference fields
///
/// A rename or relocate pass hands a worker to `expose_resources`; each
/// resource-typed field is passed by mutable reference so the worker can
/// rewrite it in place.
pub trait ResourceWorker {
    /// Called with every 3D model resource name
    fn expose_model(&mut self, resource_name: &mut String);
}

/// Uniform contract between a typed configuration and the property grid
///
/// Failures never become panics in the editing path: `update_property`
/// reports an unknown name or an unparsable value with `false` and leaves
/// the configuration unchanged.
pub trait ObjectConfiguration {
    /// Build one descriptor per editable field
    ///
    /// Called on every grid refresh; descriptors are snapshots, not live
    /// references into the configuration.
    fn properties(&self) -> BTreeMap<String, PropertyDescriptor>;

    /// Parse `value` and assign it to the field named `name`
    ///
    /// Returns `false` without mutating anything when the name is unknown
    /// or the value cannot be parsed into the field's native type.
    fn update_property(&mut self, name: &str, value: &str) -> bool;

    /// Per-placed-instance property overrides, if the object has any
    fn instance_properties(
        &self,
        _instance: &InitialInstance,
    ) -> BTreeMap<String, PropertyDescriptor> {
        BTreeMap::new()
    }

    /// Write back a per-placed-instance property override
    fn update_instance_property(
        &mut self,
        _instance: &mut InitialInstance,
        _name: &str,
        _value: &str,
    ) -> bool {
        false
    }

    /// Register resource-reference fields for rename/relocate passes
    fn expose_resources(&mut self, _worker: &mut dyn ResourceWorker) {}

    /// Clone the configuration behind the protocol
    fn clone_boxed(&self) -> Box<dyn ObjectConfiguration>;

    /// Write the full state into a tree element, in a stable key order
    fn serialize(&self) -> Value;

    /// Restore the full state from a tree element
    ///
    /// Must not fail: missing fields take their documented defaults and
    /// unknown keys are ignored.
    fn unserialize(&mut self, element: &Value);

    /// Number of animations, for configurations that have them
    fn animations_count(&self) -> usize {
        0
    }

    /// Name of the animation at `index`, or an empty string
    fn animation_name(&self, _index: usize) -> &str {
        ""
    }

    /// Check for an animation by name
    fn has_animation_named(&self, _name: &str) -> bool {
        false
    }
}

impl Clone for Box<dyn ObjectConfiguration> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}
