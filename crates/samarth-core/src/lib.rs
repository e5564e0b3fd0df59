//! Query understanding and analytics pipeline for Samarth.
//!
//! Turns free-text questions about Indian agriculture and rainfall into a
//! `ParsedQuery` (rule-based intent plus extracted regions, crops and
//! years), then routes it to an intent handler that reads records through a
//! `DataProvider`, aggregates them, and writes an `AnswerResult`.

pub mod format;
pub mod parser;
pub mod pipeline;
pub mod router;
pub mod stats;
pub mod vocabulary;

// Re-export key types for convenience
pub use parser::QueryParser;
pub use pipeline::Pipeline;
pub use router::{AnswerRouter, IntentHandler};
pub use vocabulary::Vocabulary;
