//! Question parsing: regions, crops, years, then intent.
//!
//! Pure pattern matching against the static vocabulary. Parsing never
//! fails; text with nothing recognisable comes back as `general_query`
//! with empty parameters.

pub mod rules;
pub mod temporal;

use chrono::Datelike;

use samarth_protocol::ParsedQuery;

use crate::vocabulary::Vocabulary;
use rules::Signals;

/// Rule-based question parser.
#[derive(Debug, Clone, Copy)]
pub struct QueryParser {
    vocabulary: &'static Vocabulary,
    /// Fixed "current year" for relative phrases; `None` reads the clock.
    reference_year: Option<i32>,
}

impl QueryParser {
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::standard(),
            reference_year: None,
        }
    }

    pub fn with_vocabulary(vocabulary: &'static Vocabulary) -> Self {
        Self {
            vocabulary,
            reference_year: None,
        }
    }

    /// Anchor "last N years" at `year` instead of today.
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    fn current_year(&self) -> i32 {
        self.reference_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    pub fn parse(&self, text: &str) -> ParsedQuery {
        let lower = text.to_lowercase();

        let states = self.vocabulary.match_regions(&lower);
        let crops = self.vocabulary.match_commodities(&lower);
        let years = temporal::extract_years(&lower, self.current_year());

        let rule = rules::first_match(&Signals {
            text: &lower,
            has_regions: !states.is_empty(),
            has_commodities: !crops.is_empty(),
        });

        let mut parsed = ParsedQuery {
            intent: rule.intent,
            states,
            crops,
            ..ParsedQuery::default()
        };
        parsed.set_years(years);

        tracing::debug!(
            intent = %parsed.intent,
            rule = rule.name,
            states = ?parsed.states,
            crops = ?parsed.crops,
            year_start = ?parsed.year_start,
            year_end = ?parsed.year_end,
            "query parsed"
        );
        parsed
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}
