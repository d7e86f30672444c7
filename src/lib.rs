//! # CoT Reasoner
//!
//! A chain-of-thought reasoning pipeline backed by Azure OpenAI: prompt a
//! model for a step-by-step trace, extract a structured reasoning chain
//! from its free-text completion, and compute summary metrics over it.
//!
//! ## Architecture
//!
//! ```text
//! Question → ChainOfThoughtReasoner → Azure OpenAI (HTTP)
//!                     ↓
//!          chain::extract → ReasoningChain → chain::analyze → ChainAnalysis
//! ```
//!
//! The extraction and analysis layer in [`chain`] is pure: it transforms
//! (question, raw completion text) into a structured chain and derived
//! metrics with no I/O, and tolerates noisy, partially structured model
//! output by discarding malformed fragments rather than failing.
//!
//! ## Example
//!
//! ```ignore
//! use cot_reasoner::{AzureClient, ChainOfThoughtReasoner, Config};
//! use cot_reasoner::chain::analyze;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let azure = AzureClient::new(&config.azure, config.request.clone())?;
//!     let reasoner = ChainOfThoughtReasoner::new(azure, &config);
//!     let chain = reasoner.reason("What causes tides?").await?;
//!     let analysis = analyze(&chain);
//!     println!("{}", serde_json::to_string_pretty(&analysis)?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Azure OpenAI client and chat-completions types.
pub mod azure;
/// Reasoning chain types, extraction, and analysis.
pub mod chain;
/// Configuration management loaded from the environment.
pub mod config;
/// Error types and result aliases for the application.
pub mod error;
/// Centralized prompt definitions.
pub mod prompts;
/// Chain-of-thought orchestration over the Azure client.
pub mod reasoner;

pub use azure::AzureClient;
pub use chain::{analyze, extract, ChainAnalysis, ChainMetadata, ReasoningChain, ThoughtStep};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use reasoner::ChainOfThoughtReasoner;
