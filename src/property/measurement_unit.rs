//! Measurement units attached to numeric properties
//!
//! Units live in a process-wide registry. Descriptors hold references to
//! registry entries, never owned copies, so two descriptors using "Pixel"
//! point at the same entry. Entries are never mutated after process start.

use lazy_static::lazy_static;

/// Unit of measurement of a property value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementUnit {
    /// Stable identifier used in serialized data
    name: String,
    /// User-facing name
    label: String,
    /// Longer description shown as a tooltip, if any
    description: String,
}

lazy_static! {
    static ref UNDEFINED: MeasurementUnit = MeasurementUnit::new(
        "Undefined",
        "Undefined",
        "The property has no unit of measurement.",
    );
    static ref DIMENSIONLESS: MeasurementUnit = MeasurementUnit::new(
        "Dimensionless",
        "Dimensionless",
        "A plain number without a unit, like a ratio.",
    );
    static ref PIXEL: MeasurementUnit =
        MeasurementUnit::new("Pixel", "Pixel", "A length on the screen or in the scene.");
    static ref DEGREE_ANGLE: MeasurementUnit =
        MeasurementUnit::new("DegreeAngle", "Degree", "An angle in degrees.");
    static ref SECOND: MeasurementUnit =
        MeasurementUnit::new("Second", "Second", "A duration in seconds.");
}

impl MeasurementUnit {
    fn new(name: &str, label: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        }
    }

    /// The unit used when a property has no meaningful unit
    pub fn undefined() -> &'static MeasurementUnit {
        &UNDEFINED
    }

    /// A plain number, like a ratio
    pub fn dimensionless() -> &'static MeasurementUnit {
        &DIMENSIONLESS
    }

    /// A length in pixels
    pub fn pixel() -> &'static MeasurementUnit {
        &PIXEL
    }

    /// An angle in degrees
    pub fn degree_angle() -> &'static MeasurementUnit {
        &DEGREE_ANGLE
    }

    /// A duration in seconds
    pub fn second() -> &'static MeasurementUnit {
        &SECOND
    }

    /// Look up a registry entry by its stable identifier
    pub fn by_name(name: &str) -> Option<&'static MeasurementUnit> {
        match name {
            "Undefined" => Some(Self::undefined()),
            "Dimensionless" => Some(Self::dimensionless()),
            "Pixel" => Some(Self::pixel()),
            "DegreeAngle" => Some(Self::degree_angle()),
            "Second" => Some(Self::second()),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Check if this is the undefined unit
    pub fn is_undefined(&self) -> bool {
        std::ptr::eq(self, Self::undefined())
    }
}
