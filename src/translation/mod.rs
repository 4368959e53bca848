mod client;
mod credential;
mod error;
mod language;
mod prompt;
mod request;
mod translator;

pub use client::{CompletionBackend, TranslationClient};
pub use credential::Credential;
pub use error::{CallError, InputField, TranslateError};
pub use language::{KNOWN_LANGUAGES, print_languages, resolve_language};
pub use prompt::{PromptMessage, Role, SYSTEM_PROMPT, USER_PROMPT_TEMPLATE, build_prompt};
pub use request::{TranslationRequest, TranslationResult};
pub use translator::Translator;
