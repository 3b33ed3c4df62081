//! Reflection bridge between typed object configurations and a generic
//! property grid.
//!
//! A property grid is a type-unaware editor panel: it renders whatever
//! name → descriptor mapping a configuration hands it and writes edits back
//! through a single untyped entry point. This crate provides the descriptor
//! container, the configuration protocol, and a concrete 3D-model
//! configuration with an ordered, named animation collection.

pub mod io;
pub mod model3d;
pub mod object;
pub mod property;

// Re-export commonly used types
pub mod prelude {
    // Property grid types
    pub use crate::property::{
        MeasurementUnit, PropertyDescriptor, PropertyDescriptorChoice,
        QuickCustomizationVisibility,
    };

    // Configuration protocol types
    pub use crate::object::{
        ConfigurationRegistry, InitialInstance, ObjectConfiguration, ResourceWorker,
    };

    // Concrete configurations
    pub use crate::model3d::{Model3DAnimation, Model3DObjectConfiguration};

    // IO types
    pub use crate::io::{ElementExt, ObjectFileError, StoredObject};

    pub use serde_json;
}

/// Initialize logging for editor tooling embedding this crate
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
