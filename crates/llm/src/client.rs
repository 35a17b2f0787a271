use dailytalk_common::{AppConfig, DailyTalkError, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Connection settings for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// API base URL (".../v1beta/models")
    pub base_url: String,

    /// Model revision identifier
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        let config = AppConfig::default();
        Self {
            base_url: config.gemini_base_url,
            model: config.gemini_model,
            temperature: config.temperature,
        }
    }
}

impl From<&AppConfig> for GeminiSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.gemini_base_url.clone(),
            model: config.gemini_model.clone(),
            temperature: config.temperature,
        }
    }
}

/// Gemini API client
///
/// Holds the credential for one session only. Never shared across
/// sessions, never cached process-wide.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    /// Create new Gemini client for the given credential
    ///
    /// The key is only checked for emptiness here; a malformed key is
    /// rejected by the API at generation time.
    pub fn new(api_key: impl Into<String>, settings: &GeminiSettings) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(DailyTalkError::credential("API key is empty"));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120)) // generation can be slow
            .build()
            .map_err(|e| DailyTalkError::credential(format!("Failed to create HTTP client: {}", e)))?;

        info!("Gemini client initialized: model={}", settings.model);
        Ok(Self {
            api_key,
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
            client,
        })
    }

    /// Single generateContent call, no retry
    pub async fn generate(&self, request: &GenerateContentRequest) -> Result<String> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        debug!("Sending generate request to Gemini - Model: {}", self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| DailyTalkError::unexpected(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(DailyTalkError::api(vendor_error_message(status.as_u16(), &body)));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| DailyTalkError::unexpected(format!("Failed to parse response: {}", e)))?;

        let text = result
            .text()
            .ok_or_else(|| DailyTalkError::api("Empty response from Gemini"))?;

        debug!("Received response from Gemini - Length: {}", text.len());

        Ok(text)
    }
}

/// Extract the vendor `error.message` from an error body, falling back
/// to the raw body text
fn vendor_error_message(status: u16, body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    format!("{} ({})", message, status)
}

#[async_trait::async_trait]
impl crate::llm_trait::DialogueClient for GeminiClient {
    async fn generate(&self, request: GenerateContentRequest) -> Result<String> {
        GeminiClient::generate(self, &request).await
    }
}
