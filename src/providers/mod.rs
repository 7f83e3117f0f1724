//! Upstream generative-language providers

pub mod gemini;

// Re-export for convenience
pub use gemini::GeminiClient;
