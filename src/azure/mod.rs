//! Azure OpenAI chat-completions client and request/response types.

mod client;
mod types;


pub use client::*;
pub use types::*;
