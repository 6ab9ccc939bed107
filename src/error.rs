use thiserror::Error;

/// Postdraft error types
#[derive(Error, Debug)]
pub enum PostdraftError {
    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for postdraft operations
pub type Result<T> = std::result::Result<T, PostdraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_prompt() {
        let err = PostdraftError::Prompt("unexpected end of input".to_string());
        assert_eq!(err.to_string(), "Prompt error: unexpected end of input");
    }

    #[test]
    fn test_error_display_io() {
        let err =
            PostdraftError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert_eq!(err.to_string(), "IO error: missing");
    }
}
