//! # Toolspend Core Types
//!
//! Layer 0 of the workspace: the plain data shapes every other crate speaks.
//! Nothing in here performs I/O or holds state.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{SortOrder, ToolStatus};
pub use error::CoreError;
pub use structs::ToolRecord;
