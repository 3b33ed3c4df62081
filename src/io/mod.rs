//! Serialization tree access and object-file persistence

pub mod element;
pub mod storage;

pub use element::ElementExt;
pub use storage::{ObjectFileError, StoredObject};
