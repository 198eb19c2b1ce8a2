//! Error types shared across Liftoff crates.

/// Top-level error type for Liftoff operations.
#[derive(Debug, thiserror::Error)]
pub enum LiftoffError {
    #[error("Display error: {message}")]
    Display { message: String },

    #[error("Settings error: {message}")]
    Settings { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using LiftoffError.
pub type LiftoffResult<T> = Result<T, LiftoffError>;

impl LiftoffError {
    pub fn display(msg: impl Into<String>) -> Self {
        Self::Display {
            message: msg.into(),
        }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings {
            message: msg.into(),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_their_domain() {
        assert_eq!(
            LiftoffError::display("xrandr --query exited with failure").to_string(),
            "Display error: xrandr --query exited with failure"
        );
        assert_eq!(
            LiftoffError::settings("schema missing").to_string(),
            "Settings error: schema missing"
        );
        assert_eq!(
            LiftoffError::parse("bad geometry").to_string(),
            "Parse error: bad geometry"
        );
    }

    #[test]
    fn io_errors_pass_through() {
        let err: LiftoffError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory").into();
        assert!(err.to_string().contains("No such file or directory"));
    }
}
