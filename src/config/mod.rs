// src/config/mod.rs

//! Layout configuration.
//!
//! Responsibilities:
//! - Define the TOML-backed partial config and the validated config (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate geometric invariants (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{from_toml_str, load_and_validate, load_from_path, load_or_default};
pub use model::{LayoutConfig, RawLayoutConfig, MAX_DEPTH_LIMIT};
pub use validate::validate_config;
