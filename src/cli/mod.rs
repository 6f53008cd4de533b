// mod.rs - CLI module

pub mod args;
pub mod flags;
pub mod usage;
pub mod validation;

// Re-export main types for convenience
pub use args::{Args, Invocation};
pub use flags::{scan_flags, Flags};
pub use usage::{help_text, version_line};
pub use validation::{absolute_path, resolve_path, validate_file, validate_files};
