//! Shared test harness for E2E integration tests.
//!
//! Wires the real parser and router to a data provider, pinning the
//! parser's "current year" so relative phrases resolve the same way on
//! every run.

#![allow(dead_code)]

use samarth_core::{AnswerRouter, Pipeline, QueryParser};
use samarth_data::{DataProvider, MockDataProvider};
use samarth_protocol::{AnswerResult, DataRecord, ParsedQuery};

/// Year "last N years" is anchored to; the baked mock tables end here.
pub const REFERENCE_YEAR: i32 = 2020;

/// Scenario A question text.
pub const COMPARE_QUESTION: &str =
    "Compare average annual rainfall in Tamil Nadu and Maharashtra over the last 5 years.";

pub struct TestHarness {
    pub pipeline: Pipeline,
}

impl TestHarness {
    /// Harness over the baked sample tables with synthetic fill.
    pub fn with_sample_data() -> Self {
        Self::with_provider(MockDataProvider::new())
    }

    /// Harness whose provider returns nothing for every fetch.
    pub fn empty() -> Self {
        Self::with_provider(MockDataProvider::empty())
    }

    /// Harness serving exactly the given rows.
    pub fn with_records(agriculture: Vec<DataRecord>, climate: Vec<DataRecord>) -> Self {
        Self::with_provider(MockDataProvider::strict(agriculture, climate))
    }

    pub fn with_provider(provider: impl DataProvider + 'static) -> Self {
        Self::with_boxed(Box::new(provider))
    }

    pub fn with_boxed(provider: Box<dyn DataProvider>) -> Self {
        let parser = QueryParser::new().with_reference_year(REFERENCE_YEAR);
        let router = AnswerRouter::new(provider);
        Self {
            pipeline: Pipeline::with_router(parser, router),
        }
    }

    pub fn parse(&self, question: &str) -> ParsedQuery {
        self.pipeline.parse(question)
    }

    pub fn ask(&self, question: &str) -> AnswerResult {
        self.pipeline.answer(question)
    }
}
