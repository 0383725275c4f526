pub mod close_registry_entry;
pub mod initialize_registry;
pub mod register_address;
pub mod registry_views;
pub mod remove_operations;

pub use close_registry_entry::*;
pub use initialize_registry::*;
pub use register_address::*;
pub use registry_views::*;
pub use remove_operations::*;
