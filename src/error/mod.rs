//! Error handling for depwalker
//!
//! This module provides the error enum, result alias, and error context
//! utilities shared by the scanner, configuration and output layers.

pub mod context;
pub mod types;

pub use context::{handle_error, ManifestResultExt};
pub use types::{ErrorSeverity, Result, ScanError};
