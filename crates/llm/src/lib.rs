//! DailyTalk LLM Integration
//!
//! Gemini API client and the per-session request orchestrator

mod client;
mod llm_trait;
mod prompts;
mod session;
mod types;

pub use client::{GeminiClient, GeminiSettings};
pub use llm_trait::DialogueClient;
pub use prompts::{PromptSpec, SYSTEM_PROMPT, USER_PROMPT};
pub use session::{
    ClientFactory, DialogueSession, FailureKind, GenerationResult, API_ERROR_GUIDANCE,
    EMPTY_KEY_WARNING, INVALID_KEY_MESSAGE,
};
pub use types::{
    Candidate, CandidateContent, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Part, SystemInstruction,
};
