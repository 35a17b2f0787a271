use dailytalk_common::{DailyTalkError, Result};
use serde::Serialize;
use tracing::{debug, warn};

use crate::client::{GeminiClient, GeminiSettings};
use crate::llm_trait::DialogueClient;
use crate::prompts::PromptSpec;
use crate::types::GenerateContentRequest;

/// Warning shown when no credential has been entered
pub const EMPTY_KEY_WARNING: &str = "왼쪽 사이드바에 Gemini API 키를 입력해 주세요.";

/// Fixed message for a credential rejected at client construction,
/// shown regardless of the underlying error
pub const INVALID_KEY_MESSAGE: &str =
    "입력된 API 키가 유효하지 않거나 문제가 있습니다. 다시 확인해 주세요.";

/// Static guidance accompanying API-tier failures
pub const API_ERROR_GUIDANCE: &str =
    "API 키가 올바른지, 사용량 제한에 걸리지는 않았는지 확인해 주세요.";

/// Failure classification for a generation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Client construction rejected the credential
    InvalidCredential,

    /// The Gemini API itself reported an error (auth, quota, service fault)
    Api,

    /// Anything else (network, serialization, library fault)
    Unexpected,
}

/// Outcome of one user-initiated generation
///
/// Consumed once by the presentation layer and discarded. Success text
/// is the raw model response, unparsed and untransformed.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    /// Raw response text, verbatim
    Success { text: String },

    /// No credential entered; no request was issued
    MissingCredential { message: String },

    /// Classified failure with the complete user-facing message
    Failure { kind: FailureKind, message: String },
}

/// Builds a client for a credential; injectable for tests
pub type ClientFactory =
    Box<dyn Fn(&str, &GeminiSettings) -> Result<Box<dyn DialogueClient>> + Send + Sync>;

/// Per-session request orchestrator
///
/// Explicit session context: each user session owns one of these, so a
/// credential-derived client can never leak between sessions. The
/// client is built lazily on the first generate and kept until the
/// credential value changes.
pub struct DialogueSession {
    settings: GeminiSettings,
    credential: String,
    client: Option<Box<dyn DialogueClient>>,
    construction_attempted: bool,
    factory: ClientFactory,
}

impl DialogueSession {
    /// Create new session backed by the real Gemini client
    pub fn new(settings: GeminiSettings) -> Self {
        Self::with_factory(
            settings,
            Box::new(|key: &str, settings: &GeminiSettings| {
                GeminiClient::new(key, settings)
                    .map(|client| Box::new(client) as Box<dyn DialogueClient>)
            }),
        )
    }

    /// Create new session with a custom client factory
    pub fn with_factory(settings: GeminiSettings, factory: ClientFactory) -> Self {
        Self {
            settings,
            credential: String::new(),
            client: None,
            construction_attempted: false,
            factory,
        }
    }

    /// Store the credential for this session
    ///
    /// A changed value drops the cached client so the next generate
    /// rebuilds it. Setting the same value keeps the existing client.
    pub fn set_credential(&mut self, key: impl Into<String>) {
        let key = key.into();
        if key != self.credential {
            debug!("Credential changed, dropping cached client");
            self.credential = key;
            self.client = None;
            self.construction_attempted = false;
        }
    }

    /// Whether the session has a non-empty credential
    pub fn has_credential(&self) -> bool {
        !self.credential.trim().is_empty()
    }

    /// Run one generation attempt
    ///
    /// Every failure is converted into a displayed message here;
    /// nothing propagates past this boundary and no failure is fatal.
    /// The user retries by triggering the action again.
    pub async fn generate(&mut self) -> GenerationResult {
        if !self.has_credential() {
            return GenerationResult::MissingCredential {
                message: EMPTY_KEY_WARNING.to_string(),
            };
        }

        if self.client.is_none() {
            if self.construction_attempted {
                // Same credential already failed construction once
                return invalid_key_failure();
            }
            self.construction_attempted = true;
            match (self.factory)(&self.credential, &self.settings) {
                Ok(client) => self.client = Some(client),
                Err(e) => {
                    warn!("Client construction failed: {}", e);
                    // Fixed message, independent of the underlying error
                    return invalid_key_failure();
                }
            }
        }

        let Some(client) = self.client.as_ref() else {
            return invalid_key_failure();
        };

        let request = GenerateContentRequest::from_prompt(
            &PromptSpec::daily_dialogue(),
            self.settings.temperature,
        );

        match client.generate(request).await {
            Ok(text) => GenerationResult::Success { text },
            Err(DailyTalkError::Api(msg)) => {
                warn!("Gemini API error: {}", msg);
                GenerationResult::Failure {
                    kind: FailureKind::Api,
                    message: format!("Gemini API 호출 중 오류가 발생했습니다: {}", msg),
                }
            }
            Err(e) => {
                warn!("Unexpected generation error: {}", e);
                GenerationResult::Failure {
                    kind: FailureKind::Unexpected,
                    message: format!("예상치 못한 오류가 발생했습니다: {}", e),
                }
            }
        }
    }
}

fn invalid_key_failure() -> GenerationResult {
    GenerationResult::Failure {
        kind: FailureKind::InvalidCredential,
        message: INVALID_KEY_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone)]
    enum MockReply {
        Text(String),
        ApiError(String),
        UnexpectedError(String),
    }

    struct MockClient {
        reply: MockReply,
    }

    #[async_trait]
    impl DialogueClient for MockClient {
        async fn generate(&self, _request: GenerateContentRequest) -> Result<String> {
            match &self.reply {
                MockReply::Text(text) => Ok(text.clone()),
                MockReply::ApiError(msg) => Err(DailyTalkError::api(msg.clone())),
                MockReply::UnexpectedError(msg) => Err(DailyTalkError::unexpected(msg.clone())),
            }
        }
    }

    fn mock_session(reply: MockReply) -> (DialogueSession, Arc<AtomicUsize>) {
        let constructions = Arc::new(AtomicUsize::new(0));
        let counter = constructions.clone();
        let session = DialogueSession::with_factory(
            GeminiSettings::default(),
            Box::new(move |_key: &str, _settings: &GeminiSettings| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Box::new(MockClient {
                    reply: reply.clone(),
                }) as Box<dyn DialogueClient>)
            }),
        );
        (session, constructions)
    }

    fn failing_factory_session() -> (DialogueSession, Arc<AtomicUsize>) {
        let constructions = Arc::new(AtomicUsize::new(0));
        let counter = constructions.clone();
        let session = DialogueSession::with_factory(
            GeminiSettings::default(),
            Box::new(move |_key: &str, _settings: &GeminiSettings| {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(anyhow::anyhow!("socket closed unexpectedly").into())
            }),
        );
        (session, constructions)
    }

    // Scenario A: empty credential short-circuits before any construction
    #[tokio::test]
    async fn test_empty_credential_warns_without_network() {
        let (mut session, constructions) = mock_session(MockReply::Text("ignored".into()));
        session.set_credential("");

        let result = session.generate().await;
        assert_eq!(
            result,
            GenerationResult::MissingCredential {
                message: EMPTY_KEY_WARNING.to_string()
            }
        );
        assert_eq!(constructions.load(Ordering::SeqCst), 0);
    }

    // Scenario B: success text passes through verbatim
    #[tokio::test]
    async fn test_success_passthrough_verbatim() {
        let text = "1. **Dialogue**: ...";
        let (mut session, _) = mock_session(MockReply::Text(text.into()));
        session.set_credential("valid-looking-key");

        match session.generate().await {
            GenerationResult::Success { text: out } => assert_eq!(out, text),
            other => panic!("expected success, got {:?}", other),
        }
    }

    // Scenario C: vendor API error surfaces its message plus classification
    #[tokio::test]
    async fn test_api_failure_message() {
        let (mut session, _) = mock_session(MockReply::ApiError("quota exceeded".into()));
        session.set_credential("valid-looking-key");

        match session.generate().await {
            GenerationResult::Failure { kind, message } => {
                assert_eq!(kind, FailureKind::Api);
                assert!(message.contains("quota exceeded"));
                assert!(message.contains("Gemini API 호출 중 오류가 발생했습니다"));
            }
            other => panic!("expected API failure, got {:?}", other),
        }
        assert!(!API_ERROR_GUIDANCE.is_empty());
    }

    // Scenario D: construction failure yields the fixed message,
    // independent of the underlying error content
    #[tokio::test]
    async fn test_construction_failure_fixed_message() {
        let (mut session, constructions) = failing_factory_session();
        session.set_credential("bogus");

        let result = session.generate().await;
        assert_eq!(
            result,
            GenerationResult::Failure {
                kind: FailureKind::InvalidCredential,
                message: INVALID_KEY_MESSAGE.to_string()
            }
        );

        // Retrying the same credential does not reconstruct
        let result = session.generate().await;
        assert_eq!(
            result,
            GenerationResult::Failure {
                kind: FailureKind::InvalidCredential,
                message: INVALID_KEY_MESSAGE.to_string()
            }
        );
        assert_eq!(constructions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unexpected_failure_message() {
        let (mut session, _) = mock_session(MockReply::UnexpectedError("connection reset".into()));
        session.set_credential("valid-looking-key");

        match session.generate().await {
            GenerationResult::Failure { kind, message } => {
                assert_eq!(kind, FailureKind::Unexpected);
                assert!(message.contains("connection reset"));
                assert!(message.contains("예상치 못한 오류가 발생했습니다"));
            }
            other => panic!("expected unexpected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_one_construction_per_credential() {
        let (mut session, constructions) = mock_session(MockReply::Text("ok".into()));
        session.set_credential("key-one");

        session.generate().await;
        session.generate().await;
        assert_eq!(constructions.load(Ordering::SeqCst), 1);

        // Same value again keeps the cached client
        session.set_credential("key-one");
        session.generate().await;
        assert_eq!(constructions.load(Ordering::SeqCst), 1);

        // Changed value rebuilds exactly once
        session.set_credential("key-two");
        session.generate().await;
        session.generate().await;
        assert_eq!(constructions.load(Ordering::SeqCst), 2);
    }
}
