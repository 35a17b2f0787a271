use dailytalk_common::AppConfig;
use dailytalk_llm::GeminiSettings;

/// Shared application state
///
/// Carries configuration only. There is deliberately no shared client
/// and no credential cache: every request builds its own session, so
/// concurrent users can never see each other's credential-derived
/// client.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Gemini settings derived from the configuration
    pub fn gemini_settings(&self) -> GeminiSettings {
        GeminiSettings::from(&self.config)
    }
}
