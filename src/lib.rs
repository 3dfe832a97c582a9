// src/lib.rs
//! Relative path computation with optional logging.
//!
//! The path algorithms live in [`pathrel`] and are re-exported here.
//! [`relativize_with_config`] wraps them with a scoped `tracing` subscriber
//! built from a [`RelConfig`].

pub mod config;
pub mod run;

pub use config::{RelConfig, RelConfigBuilder};
pub use logging::{DebugFlag, LogFormat};
pub use pathrel::{
    Canonicalize, Error, Lexical, Platform, Relativizer, Result, common_path_length,
    equal_starting_character_count, is_separator, relative_path,
};
pub use run::{RunError, relativize_with_config};
