// crates/pathrel/src/relative.rs

use crate::canon::{Canonicalize, Lexical};
use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::scan::{chars_equal, common_length};
use tracing::debug;

/// Computes relative paths under a fixed [`Platform`] and canonicalizer.
///
/// ```
/// use pathrel::{Platform, Relativizer};
///
/// let rel = Relativizer::new(Platform::Posix, "/").unwrap();
/// assert_eq!(rel.relative_path("/Foo/Bar", "/Bar/Bar").unwrap(), "../../Bar/Bar");
/// assert_eq!(rel.relative_path("/Foo", "/Foo/Bar").unwrap(), "Bar");
/// ```
#[derive(Debug, Clone)]
pub struct Relativizer<C = Lexical> {
    platform: Platform,
    canon: C,
}

impl Relativizer<Lexical> {
    /// Relativizer resolving relative operands against `base`.
    ///
    /// # Errors
    ///
    /// Fails if `base` is not an absolute path for `platform`.
    pub fn new(platform: Platform, base: impl Into<String>) -> Result<Self> {
        Ok(Self::with_canonicalizer(platform, Lexical::new(platform, base)?))
    }

    /// Relativizer resolving relative operands against the working directory.
    ///
    /// # Errors
    ///
    /// Fails if the working directory is unavailable or not absolute for
    /// `platform`.
    pub fn current(platform: Platform) -> Result<Self> {
        Ok(Self::with_canonicalizer(platform, Lexical::current(platform)?))
    }
}

impl<C: Canonicalize> Relativizer<C> {
    /// Relativizer using a caller-supplied canonicalizer.
    pub fn with_canonicalizer(platform: Platform, canon: C) -> Self {
        Self { platform, canon }
    }

    /// Platform conventions in effect.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Canonicalizer in effect.
    pub fn canonicalizer(&self) -> &C {
        &self.canon
    }

    /// Relative path leading from `relative_to` to `path`.
    ///
    /// Both operands are canonicalized first. If they do not share a root,
    /// the canonical `path` is returned unchanged; identical paths yield
    /// `"."`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] if either operand is empty, or whatever
    /// the canonicalizer reports.
    pub fn relative_path(&self, relative_to: &str, path: &str) -> Result<String> {
        check_operands(relative_to, path)?;
        let relative_to = self.canon.canonicalize(relative_to)?;
        let path = self.canon.canonicalize(path)?;
        Ok(build(&relative_to, &path, self.platform))
    }
}

/// Relative path from `relative_to` to `path` using the host platform and
/// the working directory as base.
///
/// ```no_run
/// let rel = pathrel::relative_path("/usr/lib", "/usr/share/doc").unwrap();
/// assert_eq!(rel, "../share/doc");
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyPath`] for empty operands and
/// [`Error::CurrentDir`] if the working directory cannot serve as base.
pub fn relative_path(relative_to: &str, path: &str) -> Result<String> {
    check_operands(relative_to, path)?;
    Relativizer::current(Platform::host())?.relative_path(relative_to, path)
}

fn check_operands(relative_to: &str, path: &str) -> Result<()> {
    if relative_to.is_empty() {
        return Err(Error::EmptyPath {
            name: "relative_to",
        });
    }
    if path.is_empty() {
        return Err(Error::EmptyPath { name: "path" });
    }
    Ok(())
}

fn build(relative_to: &str, path: &str, platform: Platform) -> String {
    let ignore_case = platform.ignore_case();
    let from: Vec<char> = relative_to.chars().collect();
    let to: Vec<char> = path.chars().collect();

    let same_root = match (from.first(), to.first()) {
        (Some(&a), Some(&b)) => chars_equal(a, b, ignore_case),
        _ => false,
    };
    if !same_root {
        debug!(target: "debug::build", from = relative_to, to = path, "no common root");
        return path.to_string();
    }

    let mut common = common_length(&from, &to, ignore_case, platform);
    if common == 0 {
        debug!(target: "debug::build", from = relative_to, to = path, "no common prefix");
        return path.to_string();
    }

    let ends_in_separator = |chars: &[char]| chars.last().is_some_and(|&c| platform.is_separator(c));
    let from_len = from.len() - usize::from(ends_in_separator(&from));
    let path_ends_in_separator = ends_in_separator(&to);
    let to_len = to.len() - usize::from(path_ends_in_separator);

    if from_len == to_len && common >= from_len {
        return ".".to_string();
    }

    let sep = platform.separator();
    let mut out = String::with_capacity(to.len() + 3);
    let mut parents = 0usize;
    if common < from_len {
        out.push_str("..");
        parents += 1;
        for &c in &from[common + 1..from_len] {
            if platform.is_separator(c) {
                out.push(sep);
                out.push_str("..");
                parents += 1;
            }
        }
    } else if to.get(common).is_some_and(|&c| platform.is_separator(c)) {
        common += 1;
    }

    let end = to_len + usize::from(path_ends_in_separator);
    if end > common {
        if parents > 0 {
            out.push(sep);
        }
        out.extend(&to[common..end]);
    }
    debug!(target: "debug::build", common, parents, relative = %out, "built");
    out
}
