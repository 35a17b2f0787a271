use serde::{Deserialize, Serialize};

use crate::prompts::PromptSpec;

/// Gemini generateContent request (v1beta REST)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents (single user turn, no history)
    pub contents: Vec<Content>,

    /// System instruction defining the teacher persona
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,

    /// Generation configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A single content turn
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// Turn role ("user")
    pub role: String,

    /// Content parts
    pub parts: Vec<Part>,
}

/// Text part of a content turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Plain text payload
    #[serde(default)]
    pub text: String,
}

/// System instruction wrapper
#[derive(Debug, Clone, Serialize)]
pub struct SystemInstruction {
    /// Instruction parts
    pub parts: Vec<Part>,
}

/// Generation configuration
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl GenerateContentRequest {
    /// Build the single-turn request from the fixed prompt pair
    pub fn from_prompt(prompt: &PromptSpec, temperature: f32) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.user.to_string(),
                }],
            }],
            system_instruction: Some(SystemInstruction {
                parts: vec![Part {
                    text: prompt.system.to_string(),
                }],
            }),
            generation_config: Some(GenerationConfig {
                temperature: Some(temperature),
            }),
        }
    }
}

/// Gemini generateContent response
///
/// Only the candidate text is consumed; grounding metadata, safety
/// ratings and usage fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Response candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single response candidate
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Candidate content
    pub content: Option<CandidateContent>,
}

/// Candidate content parts
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl GenerateContentResponse {
    /// Extract the response text, joining multiple parts
    ///
    /// Returns None when no candidate carries non-empty text.
    pub fn text(&self) -> Option<String> {
        let mut collected = Vec::new();

        for candidate in &self.candidates {
            if let Some(content) = &candidate.content {
                for part in &content.parts {
                    if !part.text.trim().is_empty() {
                        collected.push(part.text.clone());
                    }
                }
            }
        }

        if collected.is_empty() {
            None
        } else {
            Some(collected.join("\n\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = GenerateContentRequest::from_prompt(&PromptSpec::daily_dialogue(), 0.7);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            crate::prompts::USER_PROMPT
        );
        assert_eq!(
            json["systemInstruction"]["parts"][0]["text"],
            crate::prompts::SYSTEM_PROMPT
        );
        let temperature = json["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "1. **대화**: ..."}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text().unwrap(), "1. **대화**: ...");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text().unwrap(), "first\n\nsecond");
    }

    #[test]
    fn test_response_without_text() {
        let raw = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert!(response.text().is_none());

        let raw = r#"{}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert!(response.text().is_none());
    }
}
