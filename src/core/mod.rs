// mod.rs - Core logic module

pub mod command;

// Re-export main types for convenience
pub use command::{CommandList, DROP_ACTION};
