//! Error types for the command-line host

use ribo_algos::AlignError;
use ribo_io::IoError;
use thiserror::Error;

/// Result type for command operations
pub type CmdResult<T = ()> = Result<T, CmdError>;

/// Errors that can occur while running a command
#[derive(Debug, Error)]
pub enum CmdError {
    /// Alignment failed
    #[error("alignment error: {0}")]
    Align(#[from] AlignError),

    /// Trajectory could not be read or written
    #[error("{0}")]
    Io(#[from] IoError),

    /// Settings file could not be read
    #[error("config error: {0}")]
    Config(String),

    /// Settings file is not valid TOML for the expected schema
    #[error("config error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Invalid argument provided
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// A trajectory held no frames
    #[error("no frames in {0}")]
    EmptyTrajectory(String),
}

impl CmdError {
    /// Create an invalid argument error
    pub fn invalid_arg(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CmdError::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribo_algos::StructureRole;

    #[test]
    fn test_error_display() {
        let err = CmdError::invalid_arg("anchor", "must not be empty");
        assert_eq!(
            format!("{}", err),
            "invalid argument 'anchor': must not be empty"
        );

        let err = CmdError::from(AlignError::AnchorNotFound {
            anchor: "P".into(),
            role: StructureRole::Reference,
        });
        assert_eq!(
            format!("{}", err),
            "alignment error: No 'P' anchor atoms found in the reference structure"
        );
    }

    #[test]
    fn test_io_error_wraps() {
        let err = CmdError::from(IoError::EmptyFile);
        assert_eq!(format!("{}", err), "Empty file or no frames found");
    }
}
