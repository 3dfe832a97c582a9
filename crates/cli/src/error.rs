// crates/cli/src/error.rs
use crate::codes::ExitCode;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Path(#[from] pathrel::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Exit status this error terminates the process with.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Path(pathrel::Error::CurrentDir(_)) | CliError::Io(_) => ExitCode::FileIo,
            CliError::Path(_) | CliError::Usage(_) => ExitCode::SyntaxOrUsage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_exit_codes() {
        let empty = CliError::from(pathrel::Error::EmptyPath { name: "path" });
        assert_eq!(empty.exit_code(), ExitCode::SyntaxOrUsage);

        let base = CliError::from(pathrel::Error::RelativeBase { base: "x".into() });
        assert_eq!(base.exit_code(), ExitCode::SyntaxOrUsage);

        let cwd = CliError::from(pathrel::Error::CurrentDir(io::Error::other("gone")));
        assert_eq!(cwd.exit_code(), ExitCode::FileIo);

        let pipe = CliError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(pipe.exit_code(), ExitCode::FileIo);
    }
}
