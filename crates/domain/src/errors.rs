//! Error types used throughout the client

use thiserror::Error;

/// Broad failure families, used for log labels and caller-side branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller misuse detectable without I/O
    Configuration,
    /// Token exchange failed or yielded no token
    Authentication,
    /// Payload rejected by a schema before sending
    Validation,
    /// Remote service answered with a non-2xx status
    Transport,
    /// Connection-level failure, no HTTP status available
    Network,
    /// A 2xx response whose body could not be interpreted
    Decode,
    /// Local filesystem failure (upload source, download target, schemas)
    Io,
}

/// Main error type for the Dinero client
#[derive(Error, Debug)]
pub enum DineroError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP {status}: {body}")]
    Transport {
        /// Raw status code returned by the service
        status: u16,
        /// Raw response text, not decoded
        body: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl DineroError {
    /// Get the error category for this error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::Configuration,
            Self::Auth(_) => ErrorCategory::Authentication,
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Transport { .. } => ErrorCategory::Transport,
            Self::Network(_) => ErrorCategory::Network,
            Self::InvalidResponse(_) => ErrorCategory::Decode,
            Self::Io(_) => ErrorCategory::Io,
        }
    }

    /// Stable label suitable for structured logging.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "config",
            ErrorCategory::Authentication => "auth",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Network => "network",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Io => "io",
        }
    }

    /// HTTP status carried by a transport error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the remote side rejected the bearer token.
    ///
    /// The client never re-authenticates on its own; callers that see this
    /// must build a new client.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Transport { status: 401, .. })
    }
}

impl From<std::io::Error> for DineroError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, DineroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(DineroError::Config("x".into()).category(), ErrorCategory::Configuration);
        assert_eq!(DineroError::Auth("x".into()).category(), ErrorCategory::Authentication);
        assert_eq!(DineroError::Validation("x".into()).category(), ErrorCategory::Validation);
        assert_eq!(
            DineroError::Transport { status: 500, body: String::new() }.category(),
            ErrorCategory::Transport
        );
        assert_eq!(DineroError::Network("x".into()).category(), ErrorCategory::Network);
    }

    #[test]
    fn test_transport_error_keeps_status_and_body() {
        let err = DineroError::Transport { status: 409, body: "{\"code\":42}".into() };
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "HTTP 409: {\"code\":42}");
        assert_eq!(err.label(), "transport");
    }

    #[test]
    fn test_labels_are_stable_per_category() {
        let labelled = [
            (DineroError::Config("x".into()), "config"),
            (DineroError::Auth("x".into()), "auth"),
            (DineroError::Validation("x".into()), "validation"),
            (DineroError::Network("x".into()), "network"),
            (DineroError::InvalidResponse("x".into()), "decode"),
            (DineroError::Io("x".into()), "io"),
        ];
        for (err, label) in labelled {
            assert_eq!(err.label(), label);
        }
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(DineroError::Transport { status: 401, body: String::new() }.is_unauthorized());
        assert!(!DineroError::Transport { status: 403, body: String::new() }.is_unauthorized());
        assert!(!DineroError::Auth("expired".into()).is_unauthorized());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.pdf");
        let err: DineroError = io.into();
        assert!(matches!(err, DineroError::Io(ref msg) if msg.contains("missing.pdf")));
    }
}
