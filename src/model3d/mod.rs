//! 3D model object configuration
//!
//! Owns the typed fields of a 3D model object and an ordered collection of
//! animation entries, and exposes both through the property protocol.

use crate::io::ElementExt;
use crate::object::values::{format_bool, format_f64, update_bool, update_f64};
use crate::object::{ObjectConfiguration, ResourceWorker};
use crate::property::{MeasurementUnit, PropertyDescriptor, QuickCustomizationVisibility};
use lazy_static::lazy_static;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::{error, warn};

pub mod animation;

pub use animation::Model3DAnimation;

lazy_static! {
    /// Shared placeholder returned for out-of-range animation lookups.
    /// Read-only by contract: it is never inserted into a real collection
    /// and its field values are meaningless.
    static ref BAD_ANIMATION: Model3DAnimation = Model3DAnimation::default();
}

/// Configuration of a 3D model object, as edited in a property grid
#[derive(Debug, Clone, PartialEq)]
pub struct Model3DObjectConfiguration {
    width: f64,
    height: f64,
    depth: f64,
    rotation_x: f64,
    rotation_y: f64,
    rotation_z: f64,
    crossfade_duration: f64,

    model_resource_name: String,
    material_type: String,
    origin_location: String,
    center_location: String,

    keep_aspect_ratio: bool,
    is_casting_shadow: bool,
    is_receiving_shadow: bool,

    animations: Vec<Model3DAnimation>,
}

impl Default for Model3DObjectConfiguration {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            depth: 100.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            rotation_z: 0.0,
            crossfade_duration: 0.0,
            model_resource_name: String::new(),
            material_type: "Basic".to_string(),
            origin_location: "ModelOrigin".to_string(),
            center_location: "ModelOrigin".to_string(),
            keep_aspect_ratio: true,
            is_casting_shadow: true,
            is_receiving_shadow: true,
            animations: Vec::new(),
        }
    }
}

impl Model3DObjectConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the animation at `index`, or the shared placeholder when the
    /// index is out of range
    ///
    /// The placeholder is identity-stable across calls; callers must treat
    /// its field values as meaningless, not as real data.
    pub fn get_animation(&self, index: usize) -> &Model3DAnimation {
        self.animations.get(index).unwrap_or(&BAD_ANIMATION)
    }

    /// Return the animation at `index` for mutation, if the index is in range
    pub fn get_animation_mut(&mut self, index: usize) -> Option<&mut Model3DAnimation> {
        self.animations.get_mut(index)
    }

    /// Append an animation at the end of the existing ones
    pub fn add_animation(&mut self, animation: Model3DAnimation) {
        self.animations.push(animation);
    }

    /// Remove the animation at `index`, shifting later entries down
    ///
    /// Returns `false` without touching the collection when the index is out
    /// of range.
    pub fn remove_animation(&mut self, index: usize) -> bool {
        if index >= self.animations.len() {
            return false;
        }
        self.animations.remove(index);
        true
    }

    /// Remove every animation
    pub fn remove_all_animations(&mut self) {
        self.animations.clear();
    }

    pub fn animations_count(&self) -> usize {
        self.animations.len()
    }

    /// Check if the object has no animation
    pub fn has_no_animations(&self) -> bool {
        self.animations.is_empty()
    }

    /// Check for an animation by name, first match wins
    pub fn has_animation_named(&self, name: &str) -> bool {
        self.animations.iter().any(|animation| animation.name() == name)
    }

    /// Name of the animation at `index`, or an empty string
    pub fn animation_name(&self, index: usize) -> &str {
        self.get_animation(index).name()
    }

    /// Exchange the animations at `first_index` and `second_index`
    ///
    /// Out-of-range indices leave the collection untouched.
    pub fn swap_animations(&mut self, first_index: usize, second_index: usize) {
        if first_index >= self.animations.len() || second_index >= self.animations.len() {
            warn!(
                first_index = first_index,
                second_index = second_index,
                animation_count = self.animations.len(),
                "Ignoring out-of-range animation swap"
            );
            return;
        }
        self.animations.swap(first_index, second_index);
    }

    /// Reposition the animation at `old_index` to `new_index`, shifting the
    /// entries in between
    ///
    /// Out-of-range indices leave the collection untouched.
    pub fn move_animation(&mut self, old_index: usize, new_index: usize) {
        if old_index >= self.animations.len() || new_index >= self.animations.len() {
            warn!(
                old_index = old_index,
                new_index = new_index,
                animation_count = self.animations.len(),
                "Ignoring out-of-range animation move"
            );
            return;
        }
        let animation = self.animations.remove(old_index);
        self.animations.insert(new_index, animation);
    }

    /// Read-only view of the whole animation collection
    pub fn all_animations(&self) -> &[Model3DAnimation] {
        &self.animations
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn rotation_x(&self) -> f64 {
        self.rotation_x
    }

    pub fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    pub fn rotation_z(&self) -> f64 {
        self.rotation_z
    }

    pub fn crossfade_duration(&self) -> f64 {
        self.crossfade_duration
    }

    pub fn model_resource_name(&self) -> &str {
        &self.model_resource_name
    }

    pub fn material_type(&self) -> &str {
        &self.material_type
    }

    pub fn origin_location(&self) -> &str {
        &self.origin_location
    }

    pub fn center_location(&self) -> &str {
        &self.center_location
    }

    pub fn keeps_aspect_ratio(&self) -> bool {
        self.keep_aspect_ratio
    }

    pub fn casts_shadow(&self) -> bool {
        self.is_casting_shadow
    }

    pub fn receives_shadow(&self) -> bool {
        self.is_receiving_shadow
    }
}

impl ObjectConfiguration for Model3DObjectConfiguration {
    fn properties(&self) -> BTreeMap<String, PropertyDescriptor> {
        let mut properties: BTreeMap<String, PropertyDescriptor> = BTreeMap::new();

        properties
            .entry("modelResourceName".to_string())
            .or_default()
            .set_value(self.model_resource_name.as_str())
            .set_type("resource")
            .add_extra_info("model3D")
            .set_label("3D model");

        properties
            .entry("materialType".to_string())
            .or_default()
            .set_value(self.material_type.as_str())
            .set_type("choice")
            .add_choice("Basic", "No lighting effect")
            .add_choice("StandardWithoutMetalness", "Emit light")
            .add_choice("KeepOriginal", "Keep model material")
            .set_label("Material modifier");

        properties
            .entry("width".to_string())
            .or_default()
            .set_value(format_f64(self.width))
            .set_type("number")
            .set_label("Width")
            .set_group("Default size")
            .set_measurement_unit(MeasurementUnit::pixel());

        properties
            .entry("height".to_string())
            .or_default()
            .set_value(format_f64(self.height))
            .set_type("number")
            .set_label("Height")
            .set_group("Default size")
            .set_measurement_unit(MeasurementUnit::pixel());

        properties
            .entry("depth".to_string())
            .or_default()
            .set_value(format_f64(self.depth))
            .set_type("number")
            .set_label("Depth")
            .set_group("Default size")
            .set_measurement_unit(MeasurementUnit::pixel());

        properties
            .entry("keepAspectRatio".to_string())
            .or_default()
            .set_value(format_bool(self.keep_aspect_ratio))
            .set_type("boolean")
            .set_label("Reduce initial dimensions to keep aspect ratio")
            .set_group("Default size")
            .set_has_impact_on_other_properties(true);

        properties
            .entry("rotationX".to_string())
            .or_default()
            .set_value(format_f64(self.rotation_x))
            .set_type("number")
            .set_label("Rotation around X axis")
            .set_group("Default orientation")
            .set_measurement_unit(MeasurementUnit::degree_angle());

        properties
            .entry("rotationY".to_string())
            .or_default()
            .set_value(format_f64(self.rotation_y))
            .set_type("number")
            .set_label("Rotation around Y axis")
            .set_group("Default orientation")
            .set_measurement_unit(MeasurementUnit::degree_angle());

        properties
            .entry("rotationZ".to_string())
            .or_default()
            .set_value(format_f64(self.rotation_z))
            .set_type("number")
            .set_label("Rotation around Z axis")
            .set_group("Default orientation")
            .set_measurement_unit(MeasurementUnit::degree_angle());

        properties
            .entry("originLocation".to_string())
            .or_default()
            .set_value(self.origin_location.as_str())
            .set_type("choice")
            .add_choice("ModelOrigin", "Model origin")
            .add_choice("ObjectCenter", "Object center")
            .add_choice("BottomCenterZ", "Bottom center (Z up)")
            .add_choice("BottomCenterY", "Bottom center (Y up)")
            .add_choice("TopLeft", "Top-left corner")
            .set_label("Origin point")
            .set_group("Points")
            .set_advanced(true)
            .set_quick_customization_visibility(QuickCustomizationVisibility::Hidden);

        properties
            .entry("centerLocation".to_string())
            .or_default()
            .set_value(self.center_location.as_str())
            .set_type("choice")
            .add_choice("ModelOrigin", "Model origin")
            .add_choice("ObjectCenter", "Object center")
            .add_choice("BottomCenterZ", "Bottom center (Z up)")
            .add_choice("BottomCenterY", "Bottom center (Y up)")
            .set_label("Center point")
            .set_group("Points")
            .set_advanced(true)
            .set_quick_customization_visibility(QuickCustomizationVisibility::Hidden);

        properties
            .entry("crossfadeDuration".to_string())
            .or_default()
            .set_value(format_f64(self.crossfade_duration))
            .set_type("number")
            .set_label("Crossfade duration between animations")
            .set_group("Animations")
            .set_measurement_unit(MeasurementUnit::second());

        properties
            .entry("isCastingShadow".to_string())
            .or_default()
            .set_value(format_bool(self.is_casting_shadow))
            .set_type("boolean")
            .set_label("Cast shadows")
            .set_group("Shadows");

        properties
            .entry("isReceivingShadow".to_string())
            .or_default()
            .set_value(format_bool(self.is_receiving_shadow))
            .set_type("boolean")
            .set_label("Receive shadows")
            .set_group("Shadows");

        properties
    }

    fn update_property(&mut self, name: &str, value: &str) -> bool {
        match name {
            "width" => update_f64(&mut self.width, value),
            "height" => update_f64(&mut self.height, value),
            "depth" => update_f64(&mut self.depth, value),
            "rotationX" => update_f64(&mut self.rotation_x, value),
            "rotationY" => update_f64(&mut self.rotation_y, value),
            "rotationZ" => update_f64(&mut self.rotation_z, value),
            "crossfadeDuration" => update_f64(&mut self.crossfade_duration, value),
            "keepAspectRatio" => update_bool(&mut self.keep_aspect_ratio, value),
            "isCastingShadow" => update_bool(&mut self.is_casting_shadow, value),
            "isReceivingShadow" => update_bool(&mut self.is_receiving_shadow, value),
            "modelResourceName" => {
                self.model_resource_name = value.to_string();
                true
            }
            "materialType" => {
                self.material_type = value.to_string();
                true
            }
            "originLocation" => {
                self.origin_location = value.to_string();
                true
            }
            "centerLocation" => {
                self.center_location = value.to_string();
                true
            }
            _ => false,
        }
    }

    fn expose_resources(&mut self, worker: &mut dyn ResourceWorker) {
        worker.expose_model(&mut self.model_resource_name);
    }

    fn clone_boxed(&self) -> Box<dyn ObjectConfiguration> {
        Box::new(self.clone())
    }

    fn serialize(&self) -> Value {
        let animations = match serde_json::to_value(&self.animations) {
            Ok(animations) => animations,
            Err(e) => {
                error!(error = %e, "Failed to serialize animations");
                Value::Array(Vec::new())
            }
        };

        json!({
            "width": self.width,
            "height": self.height,
            "depth": self.depth,
            "rotationX": self.rotation_x,
            "rotationY": self.rotation_y,
            "rotationZ": self.rotation_z,
            "crossfadeDuration": self.crossfade_duration,
            "modelResourceName": self.model_resource_name,
            "materialType": self.material_type,
            "originLocation": self.origin_location,
            "centerLocation": self.center_location,
            "keepAspectRatio": self.keep_aspect_ratio,
            "isCastingShadow": self.is_casting_shadow,
            "isReceivingShadow": self.is_receiving_shadow,
            "animations": animations,
        })
    }

    fn unserialize(&mut self, element: &Value) {
        let defaults = Self::default();

        self.width = element.f64_or("width", defaults.width);
        self.height = element.f64_or("height", defaults.height);
        self.depth = element.f64_or("depth", defaults.depth);
        self.rotation_x = element.f64_or("rotationX", defaults.rotation_x);
        self.rotation_y = element.f64_or("rotationY", defaults.rotation_y);
        self.rotation_z = element.f64_or("rotationZ", defaults.rotation_z);
        self.crossfade_duration =
            element.f64_or("crossfadeDuration", defaults.crossfade_duration);
        self.model_resource_name = element
            .str_or("modelResourceName", &defaults.model_resource_name)
            .to_string();
        self.material_type = element
            .str_or("materialType", &defaults.material_type)
            .to_string();
        self.origin_location = element
            .str_or("originLocation", &defaults.origin_location)
            .to_string();
        self.center_location = element
            .str_or("centerLocation", &defaults.center_location)
            .to_string();
        self.keep_aspect_ratio =
            element.bool_or("keepAspectRatio", defaults.keep_aspect_ratio);
        self.is_casting_shadow =
            element.bool_or("isCastingShadow", defaults.is_casting_shadow);
        self.is_receiving_shadow =
            element.bool_or("isReceivingShadow", defaults.is_receiving_shadow);

        self.animations.clear();
        if let Some(entries) = element.get("animations").and_then(Value::as_array) {
            for entry in entries {
                match serde_json::from_value::<Model3DAnimation>(entry.clone()) {
                    Ok(animation) => self.animations.push(animation),
                    Err(e) => {
                        error!(error = %e, "Skipping malformed animation entry");
                    }
                }
            }
        }
    }

    fn animations_count(&self) -> usize {
        Model3DObjectConfiguration::animations_count(self)
    }

    fn animation_name(&self, index: usize) -> &str {
        Model3DObjectConfiguration::animation_name(self, index)
    }

    fn has_animation_named(&self, name: &str) -> bool {
        Model3DObjectConfiguration::has_animation_named(self, name)
    }
}
