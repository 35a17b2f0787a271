//! Fixed prompt pair for daily dialogue generation

/// System instruction: English teacher persona and the four-part answer format
///
/// The format is a suggestion embedded in the prompt. The response is
/// rendered as-is and never validated against it.
pub const SYSTEM_PROMPT: &str = "당신은 사용자에게 매일 영화 한 장면의 일상적인 생활 영어를 제시하는 유능한 영어 교사입니다. \
응답은 반드시 아래 형식으로만 작성해 주세요:\n\
1. **대화**: 두 사람(A와 B)의 짧은 대화문 3~4줄.\n\
2. **한국어 해석**: 대화 내용의 자연스러운 한국어 해석.\n\
3. **핵심 표현**: 대화에서 배울 만한 주요 표현 1~2가지와 그 예시.\n\
4. **발음 팁**: 발음이나 억양 관련 팁 1가지.";

/// User instruction sent on every trigger
pub const USER_PROMPT: &str =
    "오늘의 일상생활 영어 대화문을 영화 속 한 장면처럼 랜덤하게 제시해 주세요.";

/// Immutable system + user instruction pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    /// System instruction
    pub system: &'static str,

    /// User instruction
    pub user: &'static str,
}

impl PromptSpec {
    /// The single supported use case: daily English dialogue generation
    pub fn daily_dialogue() -> Self {
        Self {
            system: SYSTEM_PROMPT,
            user: USER_PROMPT,
        }
    }
}
