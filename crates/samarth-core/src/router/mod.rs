//! Intent → handler dispatch.
//!
//! Each intent has one handler; handlers read through a `DataProvider`,
//! aggregate with [`crate::stats`] and never fail. Missing parameters and
//! empty data come back as user-facing text.

pub mod handlers;

use std::collections::HashMap;

use samarth_data::DataProvider;
use samarth_protocol::{AnswerResult, IntentTag, ParsedQuery};

/// Reply for intents with no registered handler.
pub const UNKNOWN_INTENT: &str =
    "I'm sorry, I couldn't understand your query. Please try rephrasing.";

/// Answers one kind of question.
pub trait IntentHandler: Send + Sync {
    /// The intent this handler answers.
    fn intent(&self) -> IntentTag;

    fn handle(&self, query: &ParsedQuery, data: &dyn DataProvider) -> AnswerResult;
}

/// Routes a parsed question to its handler.
pub struct AnswerRouter {
    provider: Box<dyn DataProvider>,
    handlers: Vec<Box<dyn IntentHandler>>,
    /// Intent → index into `handlers`.
    index: HashMap<IntentTag, usize>,
}

impl AnswerRouter {
    /// Router with every built-in handler registered.
    pub fn new(provider: Box<dyn DataProvider>) -> Self {
        Self::with_handlers(provider, handlers::all_handlers())
    }

    /// Router with an explicit handler set. A later handler for the same
    /// intent replaces an earlier one.
    pub fn with_handlers(
        provider: Box<dyn DataProvider>,
        handlers: Vec<Box<dyn IntentHandler>>,
    ) -> Self {
        let index = handlers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.intent(), i))
            .collect();
        Self {
            provider,
            handlers,
            index,
        }
    }

    pub fn handles(&self, intent: IntentTag) -> bool {
        self.index.contains_key(&intent)
    }

    pub fn provider(&self) -> &dyn DataProvider {
        self.provider.as_ref()
    }

    pub fn route(&self, query: &ParsedQuery) -> AnswerResult {
        let Some(&i) = self.index.get(&query.intent) else {
            tracing::debug!(intent = %query.intent, "no handler registered");
            return AnswerResult::message(UNKNOWN_INTENT);
        };
        tracing::debug!(
            intent = %query.intent,
            states = ?query.states,
            crops = ?query.crops,
            year_start = ?query.year_start,
            year_end = ?query.year_end,
            "routing query"
        );
        self.handlers[i].handle(query, self.provider.as_ref())
    }
}
