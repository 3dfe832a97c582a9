// crates/pathrel/src/canon.rs
//! Canonicalization collaborator.
//!
//! [`Relativizer`](crate::Relativizer) never compares raw input: both
//! operands first pass through a [`Canonicalize`] implementation that turns
//! them into absolute, normalized strings. [`Lexical`] performs that job
//! without touching the filesystem, so symbolic links are left alone and
//! missing paths are fine.

use crate::error::{Error, Result};
use crate::platform::Platform;
use std::borrow::Cow;
use std::env;
use std::io;
use tracing::debug;

/// Turns an arbitrary path string into its fully qualified form.
pub trait Canonicalize {
    /// Canonicalize `path`.
    fn canonicalize(&self, path: &str) -> Result<String>;
}

impl<F> Canonicalize for F
where
    F: Fn(&str) -> Result<String>,
{
    fn canonicalize(&self, path: &str) -> Result<String> {
        self(path)
    }
}

/// Purely lexical canonicalizer.
///
/// Relative inputs are joined onto `base`; `.` segments are dropped, `..`
/// pops the previous segment without climbing above the root, and runs of
/// separators collapse. A trailing separator on the input is kept.
///
/// On [`Platform::Windows`] `/` is rewritten to `\` and the following roots
/// are recognised:
///
/// * `C:\dir`: drive root, letter kept as written.
/// * `\\server\share\dir`: UNC root.
/// * `\dir`: rooted on the drive (or share) of `base`.
/// * `C:dir`: relative to `base` when it is on drive `C`, else to `C:\`.
/// * `\\?\...` and `\\.\...`: device paths, returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexical {
    platform: Platform,
    base: String,
}

impl Lexical {
    /// Create a canonicalizer resolving relative inputs against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RelativeBase`] if `base` is not fully qualified for
    /// `platform`, and [`Error::NulCharacter`] if it contains a NUL.
    pub fn new(platform: Platform, base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        reject_nul(&base)?;
        let canonical = match platform {
            Platform::Posix => base.starts_with('/').then(|| normalize_posix(&base)),
            Platform::Windows => {
                let rewritten = rewrite_separators(&base);
                match split_windows_root(&rewritten) {
                    WindowsRoot::Device => Some(base.clone()),
                    WindowsRoot::Drive(prefix, rest) | WindowsRoot::Unc(prefix, rest) => {
                        Some(assemble(&prefix, rest, '\\'))
                    }
                    _ => None,
                }
            }
        };
        match canonical {
            Some(base) => Ok(Self { platform, base }),
            None => Err(Error::RelativeBase { base }),
        }
    }

    /// Create a canonicalizer based on the process working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDir`] if the working directory cannot be read
    /// or is not valid UTF-8.
    pub fn current(platform: Platform) -> Result<Self> {
        let dir = env::current_dir().map_err(Error::CurrentDir)?;
        let dir = dir.into_os_string().into_string().map_err(|_| {
            Error::CurrentDir(io::Error::new(
                io::ErrorKind::InvalidData,
                "working directory is not valid UTF-8",
            ))
        })?;
        Self::new(platform, dir)
    }

    /// Platform whose conventions this canonicalizer applies.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Canonical base directory.
    pub fn base(&self) -> &str {
        &self.base
    }

    fn canonicalize_posix(&self, path: &str) -> String {
        if path.starts_with('/') {
            normalize_posix(path)
        } else {
            normalize_posix(&format!("{}/{}", self.base, path))
        }
    }

    fn canonicalize_windows(&self, path: &str) -> String {
        let rewritten = rewrite_separators(path);
        let joined = match split_windows_root(&rewritten) {
            WindowsRoot::Device => return path.to_string(),
            WindowsRoot::Drive(prefix, rest) | WindowsRoot::Unc(prefix, rest) => {
                return assemble(&prefix, rest, '\\');
            }
            WindowsRoot::Rooted(rest) => format!("{}\\{}", self.base_root(), rest),
            WindowsRoot::DriveRelative(letter, rest) if self.on_drive(letter) => {
                format!("{}\\{}", self.base, rest)
            }
            WindowsRoot::DriveRelative(letter, rest) => format!("{letter}:\\{rest}"),
            WindowsRoot::Relative(rest) => format!("{}\\{}", self.base, rest),
        };
        if let WindowsRoot::Drive(prefix, rest) | WindowsRoot::Unc(prefix, rest) =
            split_windows_root(&joined)
        {
            return assemble(&prefix, rest, '\\');
        }
        joined
    }

    fn base_root(&self) -> String {
        match split_windows_root(&self.base) {
            WindowsRoot::Drive(prefix, _) | WindowsRoot::Unc(prefix, _) => prefix,
            _ => String::new(),
        }
    }

    fn on_drive(&self, letter: char) -> bool {
        matches!(
            split_windows_root(&self.base),
            WindowsRoot::Drive(prefix, _) if prefix.starts_with(|c: char| c.eq_ignore_ascii_case(&letter))
        )
    }
}

impl Canonicalize for Lexical {
    fn canonicalize(&self, path: &str) -> Result<String> {
        reject_nul(path)?;
        let canonical = match self.platform {
            Platform::Posix => self.canonicalize_posix(path),
            Platform::Windows => self.canonicalize_windows(path),
        };
        debug!(target: "debug::canon", input = path, canonical = %canonical, "canonicalized");
        Ok(canonical)
    }
}

fn reject_nul(path: &str) -> Result<()> {
    if path.contains('\0') {
        return Err(Error::NulCharacter {
            path: path.to_string(),
        });
    }
    Ok(())
}

fn rewrite_separators(path: &str) -> Cow<'_, str> {
    if path.contains('/') {
        Cow::Owned(path.replace('/', "\\"))
    } else {
        Cow::Borrowed(path)
    }
}

fn normalize_posix(path: &str) -> String {
    assemble("", path, '/')
}

/// Root of a Windows path whose separators are already `\`.
enum WindowsRoot<'a> {
    Device,
    /// `C:` prefix and the text following `C:\`.
    Drive(String, &'a str),
    /// `\\server\share` prefix and the remainder.
    Unc(String, &'a str),
    Rooted(&'a str),
    DriveRelative(char, &'a str),
    Relative(&'a str),
}

fn split_windows_root(path: &str) -> WindowsRoot<'_> {
    if path.starts_with("\\\\?\\") || path.starts_with("\\\\.\\") {
        return WindowsRoot::Device;
    }
    if let Some(rest) = path.strip_prefix("\\\\") {
        let mut parts = rest.splitn(3, '\\');
        let server = parts.next().unwrap_or_default();
        let share = parts.next().unwrap_or_default();
        let remainder = parts.next().unwrap_or_default();
        if server.is_empty() {
            // `\\` without a server names no share.
            return WindowsRoot::Rooted(rest);
        }
        let prefix = if share.is_empty() {
            format!("\\\\{server}")
        } else {
            format!("\\\\{server}\\{share}")
        };
        return WindowsRoot::Unc(prefix, remainder);
    }
    if let Some(rest) = path.strip_prefix('\\') {
        return WindowsRoot::Rooted(rest);
    }
    let mut chars = path.chars();
    if let (Some(letter), Some(':')) = (chars.next(), chars.next()) {
        if letter.is_ascii_alphabetic() {
            let rest = &path[2..];
            return match rest.strip_prefix('\\') {
                Some(rest) => WindowsRoot::Drive(format!("{letter}:"), rest),
                None => WindowsRoot::DriveRelative(letter, rest),
            };
        }
    }
    WindowsRoot::Relative(path)
}

/// Join `prefix` with the normalized segments of `rest`. An empty segment
/// list still yields the root separator (`/`, `C:\`, `\\srv\share\`).
fn assemble(prefix: &str, rest: &str, sep: char) -> String {
    let trailing = rest.ends_with(sep);
    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split(sep) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    let mut out = String::with_capacity(prefix.len() + rest.len() + 1);
    out.push_str(prefix);
    if segments.is_empty() {
        out.push(sep);
        return out;
    }
    for segment in &segments {
        out.push(sep);
        out.push_str(segment);
    }
    if trailing {
        out.push(sep);
    }
    out
}
