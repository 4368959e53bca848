use serde::Serialize;

pub const SYSTEM_PROMPT: &str = "You are an expert language translator. \
     You must translate the user's text into the target language provided. \
     Do not add any extra commentary, greetings, or explanations. \
     Just provide the translated text directly.";

#[allow(clippy::literal_string_with_formatting_args)]
pub const USER_PROMPT_TEMPLATE: &str = "Translate the following text to {target_language}:\n\n{source_text}";

/// Role of a message in a chat-completion prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single role-tagged message sent to the completion backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Builds the two-message translation prompt: the fixed system instruction
/// followed by the user directive carrying the text and target language.
pub fn build_prompt(source_text: &str, target_language: &str) -> [PromptMessage; 2] {
    [
        PromptMessage::system(SYSTEM_PROMPT),
        PromptMessage::user(build_user_prompt(source_text, target_language)),
    ]
}

// Substituted in one pass so that placeholder-like text inside the inputs
// is never expanded a second time.
fn build_user_prompt(source_text: &str, target_language: &str) -> String {
    format!("Translate the following text to {target_language}:\n\n{source_text}")
}
