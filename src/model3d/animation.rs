//! Animation entries of a 3D model object

use serde::{Deserialize, Serialize};

/// A named reference to an animation clip of the model file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model3DAnimation {
    /// Name given to the animation in the editor
    #[serde(default)]
    name: String,
    /// Identifier of the clip inside the model file
    #[serde(default)]
    source: String,
    #[serde(default)]
    should_loop: bool,
}

impl Model3DAnimation {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        should_loop: bool,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            should_loop,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    pub fn should_loop(&self) -> bool {
        self.should_loop
    }

    pub fn set_should_loop(&mut self, should_loop: bool) {
        self.should_loop = should_loop;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_does_not_loop() {
        let animation = Model3DAnimation::default();
        assert_eq!(animation.name(), "");
        assert_eq!(animation.source(), "");
        assert!(!animation.should_loop());
    }

    #[test]
    fn test_setters() {
        let mut animation = Model3DAnimation::default();
        animation.set_name("walk");
        animation.set_source("walk_clip");
        animation.set_should_loop(true);
        assert_eq!(animation.name(), "walk");
        assert_eq!(animation.source(), "walk_clip");
        assert!(animation.should_loop());
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let animation = Model3DAnimation::new("walk", "walk_clip", true);
        let value = serde_json::to_value(&animation).unwrap();
        assert_eq!(value["name"], "walk");
        assert_eq!(value["source"], "walk_clip");
        assert_eq!(value["shouldLoop"], true);
    }

    #[test]
    fn test_missing_loop_flag_defaults_to_false() {
        let value = serde_json::json!({ "name": "idle", "source": "idle_clip" });
        let animation: Model3DAnimation = serde_json::from_value(value).unwrap();
        assert_eq!(animation.name(), "idle");
        assert!(!animation.should_loop());
    }
}
