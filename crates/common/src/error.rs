/// DailyTalk error types
#[derive(Debug, thiserror::Error)]
pub enum DailyTalkError {
    /// Credential rejected during client construction
    #[error("Credential error: {0}")]
    Credential(String),

    /// Gemini API returned a vendor-level error (auth, quota, service fault)
    #[error("API error: {0}")]
    Api(String),

    /// Catch-all for network, serialization or library faults
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DailyTalkError {
    /// Create credential error
    pub fn credential<S: Into<String>>(msg: S) -> Self {
        Self::Credential(msg.into())
    }

    /// Create API error
    pub fn api<S: Into<String>>(msg: S) -> Self {
        Self::Api(msg.into())
    }

    /// Create unexpected error
    pub fn unexpected<S: Into<String>>(msg: S) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

// HTTP response conversion (for actix-web)
impl DailyTalkError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Credential(_) => 401,
            Self::Api(_) => 502,
            Self::Unexpected(_) => 500,
            Self::Config(_) => 500,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(DailyTalkError::credential("bad key").status_code(), 401);
        assert_eq!(DailyTalkError::api("quota exceeded").status_code(), 502);
        assert_eq!(DailyTalkError::unexpected("boom").status_code(), 500);
        assert_eq!(DailyTalkError::config("bad port").status_code(), 500);
    }

    #[test]
    fn test_display_includes_message() {
        let err = DailyTalkError::api("quota exceeded");
        assert_eq!(err.to_string(), "API error: quota exceeded");
    }
}
