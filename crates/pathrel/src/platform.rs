// crates/pathrel/src/platform.rs

use std::fmt;

/// Separator accepted on every platform.
pub const ALT_SEPARATOR: char = '/';

/// Primary separator on Windows.
pub const WINDOWS_SEPARATOR: char = '\\';

/// Primary separator everywhere else.
pub const POSIX_SEPARATOR: char = '/';

/// Path conventions used when scanning and building relative paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// `\` primary separator, case-insensitive comparison.
    Windows,
    /// `/` separator, case-sensitive comparison.
    Posix,
}

impl Platform {
    /// Platform of the running process.
    pub const fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// Primary separator emitted when building paths.
    pub const fn separator(self) -> char {
        match self {
            Platform::Windows => WINDOWS_SEPARATOR,
            Platform::Posix => POSIX_SEPARATOR,
        }
    }

    /// Whether path comparisons ignore case.
    pub const fn ignore_case(self) -> bool {
        matches!(self, Platform::Windows)
    }

    /// Returns `true` if `c` is the primary or the alternate separator.
    pub const fn is_separator(self, c: char) -> bool {
        c == self.separator() || c == ALT_SEPARATOR
    }

    /// Lower-case name, as accepted on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Posix => "posix",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::host()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-function form of [`Platform::is_separator`].
pub fn is_separator(c: char, platform: Platform) -> bool {
    platform.is_separator(c)
}
