//! Command implementations.

/// Dictionary lookup command handler.
pub mod lookup;
