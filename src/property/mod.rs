//! Property descriptors shown in a property grid
//!
//! A descriptor is a transient snapshot of one editable field: its current
//! value as text, an advisory type tag, and display metadata. Configurations
//! build descriptors on demand; the grid renders them without knowing the
//! concrete configuration type.

pub mod descriptor;
pub mod measurement_unit;
pub mod quick_customization;

pub use descriptor::{PropertyDescriptor, PropertyDescriptorChoice};
pub use measurement_unit::MeasurementUnit;
pub use quick_customization::QuickCustomizationVisibility;
