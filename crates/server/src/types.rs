use dailytalk_llm::{FailureKind, GenerationResult};
use serde::{Deserialize, Serialize};

/// Heading shown above a successful dialogue
pub const RESULT_HEADING: &str = "📝 오늘의 생활 영어 대화";

/// Extra study suggestion appended to every successful result
pub const STUDY_TIP: &str = "이 대화문을 소리 내어 읽고, 친구와 역할극을 해보세요!";

/// Generate request body
#[derive(Debug, Deserialize)]
pub struct GenerateApiRequest {
    /// User-supplied Gemini API key, scoped to this request only
    pub api_key: String,
}

/// Generate response body
#[derive(Debug, Serialize)]
pub struct GenerateApiResponse {
    /// "ok", "warning" or "error"
    pub status: String,

    /// Failure classification (error responses only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,

    /// Result heading (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Verbatim model response text (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Study suggestion (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_tip: Option<String>,

    /// User-facing warning or error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Static guidance line (API-tier errors only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
}

impl GenerateApiResponse {
    /// Map a generation outcome onto the response body
    ///
    /// Success text is carried over verbatim; the heading and study tip
    /// are fixed page copy, not derived from the model output.
    pub fn from_result(result: GenerationResult) -> Self {
        match result {
            GenerationResult::Success { text } => Self {
                status: "ok".to_string(),
                kind: None,
                heading: Some(RESULT_HEADING.to_string()),
                text: Some(text),
                study_tip: Some(STUDY_TIP.to_string()),
                message: None,
                guidance: None,
            },
            GenerationResult::MissingCredential { message } => Self {
                status: "warning".to_string(),
                kind: None,
                heading: None,
                text: None,
                study_tip: None,
                message: Some(message),
                guidance: None,
            },
            GenerationResult::Failure { kind, message } => Self {
                status: "error".to_string(),
                kind: Some(kind),
                heading: None,
                text: None,
                study_tip: None,
                message: Some(message),
                guidance: match kind {
                    FailureKind::Api => Some(dailytalk_llm::API_ERROR_GUIDANCE.to_string()),
                    _ => None,
                },
            },
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the server can answer
    pub status: String,

    /// Crate version
    pub version: String,
}
