//! Gemini-based summarizer.
//!
//! This crate provides a [`Summarizer`] that asks Google's Gemini
//! `generateContent` API for a very short analysis of a trading log.
//!
//! # Features
//!
//! - One fixed prompt, one request per summary
//! - API key read from the environment at request time, so a missing key is
//!   a per-request error rather than a startup failure
//! - No retries, caching or streaming
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_brain::{GeminiConfig, GeminiSummarizer, Summarizer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summarizer = GeminiSummarizer::new(GeminiConfig::from_env())?;
//!     let summary = summarizer
//!         .summarize("Entered long on breakout, stopped at support")
//!         .await?;
//!     println!("{}", summary);
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod summarizer;

pub use config::{GeminiConfig, GeminiConfigBuilder, API_KEY_ENV, DEFAULT_API_URL, DEFAULT_MODEL};
pub use summarizer::{build_prompt, GeminiSummarizer};

// Re-export journal-core types for convenience
pub use journal_core::{async_trait, SummarizeError, Summarizer};
