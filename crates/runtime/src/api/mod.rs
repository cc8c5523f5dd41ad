//! Public API surface shared by runtime consumers.
pub mod errors;

pub use errors::{Result, RuntimeError};
