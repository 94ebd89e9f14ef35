//! Validation of `.git-blame-ignore-revs` files.
//!
//! The file is classified line by line, then optionally checked against the
//! history of the repository that contains it. See
//! [`core::engine::validate`] for the entry point.
pub mod builders;
pub mod core;
pub mod utils;

pub use crate::core::config::ValidationOptions;
pub use crate::core::engine::{ValidationResult, validate, validate_with};
pub use crate::core::error::ValidateError;

#[cfg(test)]
mod tests;
