// crates/cli/src/codes.rs
use std::fmt;

/// Process exit status reported by `relpath`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Ok = 0,
    SyntaxOrUsage = 1,
    FileIo = 11,
}

impl ExitCode {
    pub const fn description(self) -> &'static str {
        match self {
            ExitCode::Ok => "success",
            ExitCode::SyntaxOrUsage => "syntax or usage error",
            ExitCode::FileIo => "error in file IO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownExit(pub u8);

impl fmt::Display for UnknownExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown exit code {}", self.0)
    }
}

impl std::error::Error for UnknownExit {}

impl TryFrom<u8> for ExitCode {
    type Error = UnknownExit;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(ExitCode::Ok),
            1 => Ok(ExitCode::SyntaxOrUsage),
            11 => Ok(ExitCode::FileIo),
            other => Err(UnknownExit(other)),
        }
    }
}

impl From<ExitCode> for u8 {
    fn from(e: ExitCode) -> Self {
        e as u8
    }
}

impl From<ExitCode> for i32 {
    fn from(e: ExitCode) -> Self {
        i32::from(u8::from(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_convert_both_ways() {
        for code in [ExitCode::Ok, ExitCode::SyntaxOrUsage, ExitCode::FileIo] {
            assert_eq!(ExitCode::try_from(u8::from(code)), Ok(code));
        }
        assert_eq!(ExitCode::try_from(4), Err(UnknownExit(4)));
    }
}
