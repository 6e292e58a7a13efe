//! Manifest extractors
//!
//! One module per supported manifest format. Each exposes a pure
//! `extract(&[u8])` that turns raw file bytes into declared dependencies.

pub mod go_mod;
pub mod package_json;
pub mod pubspec;
pub mod requirements;
