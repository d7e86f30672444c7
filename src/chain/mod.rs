//! Reasoning chain extraction and analysis.
//!
//! This module is the core of the pipeline:
//! - [`extract`]: parse a raw model completion into [`ThoughtStep`]s and a
//!   final answer
//! - [`analyze`]: compute a [`ChainAnalysis`] from a [`ReasoningChain`]
//!
//! Both operations are pure transforms with no I/O; the Azure client and
//! the orchestrating reasoner live elsewhere and compose them.

mod analyze;
mod extract;
mod types;


pub use analyze::*;
pub use extract::*;
pub use types::*;
