pub mod registry;
pub mod registry_entry;

pub use registry::*;
pub use registry_entry::*;
