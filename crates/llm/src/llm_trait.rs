use async_trait::async_trait;
use dailytalk_common::Result;

use crate::types::GenerateContentRequest;

/// Common trait for dialogue generation clients
///
/// Implemented by [`crate::GeminiClient`] and by test doubles.
#[async_trait]
pub trait DialogueClient: Send + Sync {
    /// Generate text for a single request, returning the raw response text
    async fn generate(&self, request: GenerateContentRequest) -> Result<String>;
}
