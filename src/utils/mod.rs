pub mod owner_guard;

pub use owner_guard::*;
