//! Round-trip laws for configuration serialization

use object_config::prelude::*;
use serde_json::json;

fn fully_customized() -> Model3DObjectConfiguration {
    let mut configuration = Model3DObjectConfiguration::new();
    for (name, value) in [
        ("width", "10"),
        ("height", "5"),
        ("depth", "2"),
        ("rotationX", "15"),
        ("rotationY", "30"),
        ("rotationZ", "45"),
        ("crossfadeDuration", "0.5"),
        ("modelResourceName", "robot.glb"),
        ("materialType", "KeepOriginal"),
        ("originLocation", "ObjectCenter"),
        ("centerLocation", "BottomCenterY"),
        ("keepAspectRatio", "false"),
        ("isCastingShadow", "false"),
        ("isReceivingShadow", "false"),
    ] {
        assert!(configuration.update_property(name, value));
    }
    configuration.add_animation(Model3DAnimation::new("walk", "walk_clip", true));
    configuration.add_animation(Model3DAnimation::new("idle", "idle_clip", false));
    configuration
}

#[test]
fn test_serialize_after_unserialize_yields_identical_tree() {
    let tree = fully_customized().serialize();

    let mut restored = Model3DObjectConfiguration::new();
    restored.unserialize(&tree);

    assert_eq!(restored.serialize(), tree);
}

#[test]
fn test_unserialize_restores_animations_in_order() {
    let tree = fully_customized().serialize();

    let mut restored = Model3DObjectConfiguration::new();
    restored.unserialize(&tree);

    assert_eq!(restored.animations_count(), 2);
    assert_eq!(restored.animation_name(0), "walk");
    assert_eq!(restored.animation_name(1), "idle");
    assert!(restored.get_animation(0).should_loop());
    assert!(!restored.get_animation(1).should_loop());
}

#[test]
fn test_registry_rebuilds_from_tree() {
    let registry = ConfigurationRegistry::with_default_configurations();
    let tree = fully_customized().serialize();

    let rebuilt = registry
        .create_from_element("Model3DObject", &tree)
        .expect("Model3DObject is registered");
    assert_eq!(rebuilt.serialize(), tree);
}

#[test]
fn test_partial_tree_falls_back_to_defaults() {
    let mut configuration = Model3DObjectConfiguration::new();
    configuration.unserialize(&json!({
        "width": 32.0,
        "modelResourceName": "crate.glb",
    }));

    let properties = configuration.properties();
    assert_eq!(properties["width"].value(), "32");
    assert_eq!(properties["modelResourceName"].value(), "crate.glb");
    // Everything else keeps its documented default
    assert_eq!(properties["height"].value(), "100");
    assert_eq!(properties["materialType"].value(), "Basic");
    assert_eq!(properties["keepAspectRatio"].value(), "true");
}

#[test]
fn test_stored_object_survives_a_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("robot.object.json");

    let configuration = fully_customized();
    let stored = StoredObject::from_configuration("Model3DObject", "Robot", &configuration);
    stored.save_to_file(&path).unwrap();

    let registry = ConfigurationRegistry::with_default_configurations();
    let loaded = StoredObject::load_from_file(&path).unwrap();
    let rebuilt = loaded.instantiate(&registry).unwrap();

    assert_eq!(rebuilt.serialize(), configuration.serialize());
    assert_eq!(loaded.name, "Robot");
}
