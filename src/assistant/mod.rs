pub mod gemini;
pub mod normalizer;
pub mod prompt;

pub use gemini::{CompletionClient, GeminiClient};
pub use normalizer::{diagnostic, normalize};
