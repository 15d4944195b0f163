//! AI answer providers
//!
//! Each provider turns a free-text question into a single word. The chain
//! decides which providers are consulted and in what order.

mod answer;
mod chain;
mod client;
mod gemini;
mod openai;
mod traits;

pub use answer::extract_single_word;
pub use chain::ProviderChain;
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use traits::AnswerProvider;
