// crates/pathrel/src/error.rs

use std::io;
use thiserror::Error;

/// Errors raised while relativizing or canonicalizing paths.
#[derive(Debug, Error)]
pub enum Error {
    /// One of the operands was empty.
    #[error("{name} must not be empty")]
    EmptyPath {
        /// Name of the offending operand.
        name: &'static str,
    },
    /// The path contains an embedded NUL character.
    #[error("path contains a NUL character: {path:?}")]
    NulCharacter {
        /// The rejected input.
        path: String,
    },
    /// A lexical canonicalizer was configured with a relative base.
    #[error("base directory is not absolute: {base}")]
    RelativeBase {
        /// The rejected base.
        base: String,
    },
    /// The process working directory could not be used as a base.
    #[error("cannot determine working directory: {0}")]
    CurrentDir(#[source] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
