//! The descriptor record exposed per editable field

use crate::io::ElementExt;
use crate::property::measurement_unit::MeasurementUnit;
use crate::property::quick_customization::QuickCustomizationVisibility;
use serde_json::{json, Value};

/// One allowed option for an enumerated property
///
/// Immutable once constructed; owned by the descriptor holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptorChoice {
    value: String,
    label: String,
}

impl PropertyDescriptorChoice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Describes a property shown in a property grid
///
/// The value is kept as text and the type tag is advisory: it is interpreted
/// by whatever renders the grid, never validated here. Choice enforcement,
/// if any, is the responsibility of the caller of `update_property` on the
/// owning configuration.
///
/// Descriptors are transient: a configuration builds a fresh set on every
/// `properties()` call and they never alias the configuration's own fields.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// The current value to be shown
    current_value: String,
    /// Advisory type tag, e.g. "string", "number", "boolean", "resource"
    value_type: String,
    label: String,
    description: String,
    group: String,
    choices: Vec<PropertyDescriptorChoice>,
    /// Free-form strings interpreted by the configuration, e.g. a resource
    /// kind filter for a resource-typed property
    extra_information: Vec<String>,
    hidden: bool,
    deprecated: bool,
    advanced: bool,
    /// A change to this property must re-render the other properties
    has_impact_on_other_properties: bool,
    measurement_unit: &'static MeasurementUnit,
    quick_customization_visibility: QuickCustomizationVisibility,
}

impl Default for PropertyDescriptor {
    fn default() -> Self {
        Self {
            current_value: String::new(),
            value_type: String::new(),
            label: String::new(),
            description: String::new(),
            group: String::new(),
            choices: Vec::new(),
            extra_information: Vec::new(),
            hidden: false,
            deprecated: false,
            advanced: false,
            has_impact_on_other_properties: false,
            measurement_unit: MeasurementUnit::undefined(),
            quick_customization_visibility: QuickCustomizationVisibility::Default,
        }
    }
}

impl PropertyDescriptor {
    /// Create an empty descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a descriptor holding a plain string value
    pub fn from_string(value: impl Into<String>) -> Self {
        Self {
            current_value: value.into(),
            value_type: "string".to_string(),
            ..Self::default()
        }
    }

    /// Change the value displayed in the grid
    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.current_value = value.into();
        self
    }

    /// Change the advisory type tag
    pub fn set_type(&mut self, value_type: impl Into<String>) -> &mut Self {
        self.value_type = value_type.into();
        self
    }

    /// Change the user-facing property name
    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    /// Change the user-facing description
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Change the group the property is displayed under
    pub fn set_group(&mut self, group: impl Into<String>) -> &mut Self {
        self.group = group.into();
        self
    }

    /// Append one allowed choice; display order is insertion order
    pub fn add_choice(&mut self, value: impl Into<String>, label: impl Into<String>) -> &mut Self {
        self.choices.push(PropertyDescriptorChoice::new(value, label));
        self
    }

    /// Replace the extra information wholesale
    pub fn set_extra_info(&mut self, info: Vec<String>) -> &mut Self {
        self.extra_information = info;
        self
    }

    /// Append one extra information entry
    pub fn add_extra_info(&mut self, info: impl Into<String>) -> &mut Self {
        self.extra_information.push(info.into());
        self
    }

    /// Change the unit of measurement of the value
    pub fn set_measurement_unit(&mut self, unit: &'static MeasurementUnit) -> &mut Self {
        self.measurement_unit = unit;
        self
    }

    /// Show or hide the property in the grid
    pub fn set_hidden(&mut self, hidden: bool) -> &mut Self {
        self.hidden = hidden;
        self
    }

    /// Mark the property as deprecated
    pub fn set_deprecated(&mut self, deprecated: bool) -> &mut Self {
        self.deprecated = deprecated;
        self
    }

    /// Mark the property as advanced
    pub fn set_advanced(&mut self, advanced: bool) -> &mut Self {
        self.advanced = advanced;
        self
    }

    /// Mark that a change to this property must re-render the others
    pub fn set_has_impact_on_other_properties(&mut self, has_impact: bool) -> &mut Self {
        self.has_impact_on_other_properties = has_impact;
        self
    }

    pub fn set_quick_customization_visibility(
        &mut self,
        visibility: QuickCustomizationVisibility,
    ) -> &mut Self {
        self.quick_customization_visibility = visibility;
        self
    }

    pub fn value(&self) -> &str {
        &self.current_value
    }

    pub fn value_type(&self) -> &str {
        &self.value_type
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn choices(&self) -> &[PropertyDescriptorChoice] {
        &self.choices
    }

    pub fn extra_info(&self) -> &[String] {
        &self.extra_information
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn is_advanced(&self) -> bool {
        self.advanced
    }

    pub fn has_impact_on_other_properties(&self) -> bool {
        self.has_impact_on_other_properties
    }

    pub fn measurement_unit(&self) -> &'static MeasurementUnit {
        self.measurement_unit
    }

    pub fn quick_customization_visibility(&self) -> QuickCustomizationVisibility {
        self.quick_customization_visibility
    }

    /// Serialize the full descriptor into a tree element
    pub fn serialize(&self) -> Value {
        let choices: Vec<Value> = self
            .choices
            .iter()
            .map(|choice| json!({ "value": choice.value(), "label": choice.label() }))
            .collect();

        json!({
            "value": self.current_value,
            "type": self.value_type,
            "label": self.label,
            "description": self.description,
            "group": self.group,
            "choices": choices,
            "extraInformation": self.extra_information,
            "hidden": self.hidden,
            "deprecated": self.deprecated,
            "advanced": self.advanced,
            "hasImpactOnOtherProperties": self.has_impact_on_other_properties,
            "measurementUnit": self.measurement_unit.name(),
            "quickCustomizationVisibility": self.quick_customization_visibility.as_str(),
        })
    }

    /// Restore the full descriptor from a tree element
    ///
    /// Missing keys take defaults, unknown keys are ignored, and an unknown
    /// unit name maps to the undefined unit.
    pub fn unserialize(&mut self, element: &Value) {
        let defaults = Self::default();
        self.current_value = element.str_or("value", "").to_string();
        self.value_type = element.str_or("type", "").to_string();
        self.label = element.str_or("label", "").to_string();
        self.description = element.str_or("description", "").to_string();
        self.group = element.str_or("group", "").to_string();
        self.hidden = element.bool_or("hidden", defaults.hidden);
        self.deprecated = element.bool_or("deprecated", defaults.deprecated);
        self.advanced = element.bool_or("advanced", defaults.advanced);
        self.has_impact_on_other_properties = element.bool_or(
            "hasImpactOnOtherProperties",
            defaults.has_impact_on_other_properties,
        );
        self.measurement_unit = MeasurementUnit::by_name(element.str_or("measurementUnit", ""))
            .unwrap_or_else(MeasurementUnit::undefined);
        self.quick_customization_visibility =
            QuickCustomizationVisibility::parse(element.str_or("quickCustomizationVisibility", ""))
                .unwrap_or_default();

        self.choices.clear();
        if let Some(choices) = element.get("choices").and_then(Value::as_array) {
            for choice in choices {
                self.choices.push(PropertyDescriptorChoice::new(
                    choice.str_or("value", ""),
                    choice.str_or("label", ""),
                ));
            }
        }

        self.extra_information = read_string_array(element, "extraInformation");
    }

    /// Serialize only the editable payload: value and extra information
    ///
    /// Used when instance-level overrides are layered on top of shared
    /// type-level metadata, so only the payload needs to round-trip.
    pub fn serialize_values(&self) -> Value {
        json!({
            "value": self.current_value,
            "extraInformation": self.extra_information,
        })
    }

    /// Restore only the editable payload
    pub fn unserialize_values(&mut self, element: &Value) {
        self.current_value = element.str_or("value", "").to_string();
        self.extra_information = read_string_array(element, "extraInformation");
    }
}

fn read_string_array(element: &Value, key: &str) -> Vec<String> {
    element
        .get(key)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
