// crates/pathrel/src/lib.rs
//! Relative path computation between absolute paths.
//!
//! The crate works on path *strings* rather than [`std::path::Path`] so that
//! Windows and POSIX conventions can be evaluated on any host. Every
//! algorithm takes the [`Platform`] explicitly; only the convenience entry
//! point [`relative_path`] consults the running OS.
#![deny(unsafe_op_in_unsafe_fn, rust_2018_idioms)]
#![warn(missing_docs)]

pub mod canon;
pub mod error;
pub mod platform;
pub mod relative;
pub mod scan;

pub use canon::{Canonicalize, Lexical};
pub use error::{Error, Result};
pub use platform::{Platform, is_separator};
pub use relative::{Relativizer, relative_path};
pub use scan::{common_path_length, equal_starting_character_count};
