//! Error type shared by all API clients

/// Maximum number of body characters carried in an HTTP error message
const BODY_SNIPPET_CHARS: usize = 200;

/// Error from a single upstream API call.
///
/// Source clients decide per call whether an error is absorbed with a
/// default value or handed back to the orchestrator.
#[derive(Debug)]
pub enum ApiError {
    /// Transport failure (`status: None`) or non-success response
    Http {
        status: Option<u16>,
        message: String,
    },
    /// Response body is not the JSON shape we expected
    Decode(serde_json::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http {
                status: Some(s),
                message,
            } => write!(f, "HTTP {s}: {message}"),
            Self::Http {
                status: None,
                message,
            } => write!(f, "HTTP error: {message}"),
            Self::Decode(e) => write!(f, "invalid JSON: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http { .. } => None,
            Self::Decode(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

impl ApiError {
    /// Create transport error from reqwest error (URL stripped)
    pub fn from_reqwest(e: reqwest::Error) -> Self {
        Self::Http {
            status: e.status().map(|s| s.as_u16()),
            message: e.without_url().to_string(),
        }
    }

    /// Create status error, keeping a short prefix of the response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message: String = body.trim().chars().take(BODY_SNIPPET_CHARS).collect();
        Self::Http {
            status: Some(status),
            message,
        }
    }

    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => *status,
            Self::Decode(_) => None,
        }
    }

    /// Human-readable status for log lines ("404", "transport", "decode")
    pub fn status_label(&self) -> String {
        match self {
            Self::Http {
                status: Some(s), ..
            } => s.to_string(),
            Self::Http { status: None, .. } => "transport".to_string(),
            Self::Decode(_) => "decode".to_string(),
        }
    }
}
