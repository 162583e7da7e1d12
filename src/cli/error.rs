//! Errors surfaced by the `respcurve` commands.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::codec::ParseError;

#[derive(Debug)]
pub enum CliError {
    /// A curve argument could not be decoded.
    Parse(ParseError),
    /// `check` found invalid lines.
    Check { failed: usize, total: usize },
    /// The settings file exists but could not be read.
    Config { path: PathBuf, source: io::Error },
    Io(io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Parse(_) | CliError::Check { .. } => 2,
            CliError::Config { .. } | CliError::Io(_) => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Parse(err) => write!(f, "invalid curve: {err}"),
            CliError::Check { failed, total } => {
                write!(f, "{failed} of {total} curve lines are invalid")
            }
            CliError::Config { path, source } => {
                write!(f, "cannot load settings from {}: {source}", path.display())
            }
            CliError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(err) => Some(err),
            CliError::Config { source, .. } => Some(source),
            CliError::Io(err) => Some(err),
            CliError::Check { .. } => None,
        }
    }
}

impl From<ParseError> for CliError {
    fn from(err: ParseError) -> Self {
        CliError::Parse(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}
