//! Text in, answer out.

use samarth_data::DataProvider;
use samarth_protocol::{AnswerResult, ParsedQuery};

use crate::parser::QueryParser;
use crate::router::AnswerRouter;

/// Parser and router bundled behind a single call.
///
/// Shared freely between threads; each call is independent.
pub struct Pipeline {
    parser: QueryParser,
    router: AnswerRouter,
}

impl Pipeline {
    pub fn new(provider: Box<dyn DataProvider>) -> Self {
        Self {
            parser: QueryParser::new(),
            router: AnswerRouter::new(provider),
        }
    }

    pub fn with_parser(mut self, parser: QueryParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_router(parser: QueryParser, router: AnswerRouter) -> Self {
        Self { parser, router }
    }

    pub fn parse(&self, text: &str) -> ParsedQuery {
        self.parser.parse(text)
    }

    pub fn answer(&self, text: &str) -> AnswerResult {
        let query = self.parser.parse(text);
        let answer = self.router.route(&query);
        tracing::info!(
            intent = %query.intent,
            sources = answer.sources.len(),
            chart = answer.chart.is_some(),
            "question answered"
        );
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samarth_data::MockDataProvider;
    use samarth_protocol::IntentTag;

    fn pipeline() -> Pipeline {
        Pipeline::new(Box::new(MockDataProvider::new()))
            .with_parser(QueryParser::new().with_reference_year(2020))
    }

    #[test]
    fn pipeline_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pipeline>();
        assert_send_sync::<QueryParser>();
        assert_send_sync::<AnswerRouter>();
    }

    #[test]
    fn rainfall_comparison_end_to_end() {
        let p = pipeline();
        let text =
            "Compare average annual rainfall in Tamil Nadu and Maharashtra over the last 5 years.";
        assert_eq!(p.parse(text).intent, IntentTag::CompareRainfall);
        let answer = p.answer(text);
        assert_eq!(
            answer.text,
            "Average rainfall comparison (2016-2020): Maharashtra received 1084 mm, \
             Tamil Nadu received 952 mm."
        );
    }

    #[test]
    fn gibberish_gets_apology() {
        let answer = pipeline().answer("asdf qwerty");
        assert!(answer.text.starts_with("I'm sorry"));
        assert!(answer.sources.is_empty());
    }

    #[test]
    fn answer_serializes_for_presentation() {
        let answer = pipeline().answer("What is the weather pattern in Karnataka?");
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["chart"]["kind"], "line");
        assert_eq!(json["chart"]["x"][0], 2016.0);
        assert_eq!(json["sources"].as_array().unwrap().len(), 1);
    }
}
