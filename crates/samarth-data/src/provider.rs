//! Provider abstraction: where the answer router reads records from.

use samarth_protocol::{DataRecord, Dataset};

use crate::error::DataResult;

/// Filter applied to a dataset fetch. `None` fields don't constrain.
///
/// State and crop compare case-insensitively; year bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub state: Option<String>,
    pub crop: Option<String>,
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn crop(mut self, crop: impl Into<String>) -> Self {
        self.crop = Some(crop.into());
        self
    }

    /// Inclusive `[start, end]` year window.
    pub fn years(mut self, start: i32, end: i32) -> Self {
        self.year_start = Some(start);
        self.year_end = Some(end);
        self
    }

    /// Single-year window.
    pub fn year(self, year: i32) -> Self {
        self.years(year, year)
    }

    pub fn matches_state(&self, record: &DataRecord) -> bool {
        self.state
            .as_deref()
            .is_none_or(|s| record.state.eq_ignore_ascii_case(s))
    }

    /// A record without a crop never matches a crop constraint.
    pub fn matches_crop(&self, record: &DataRecord) -> bool {
        match self.crop.as_deref() {
            None => true,
            Some(c) => record
                .crop
                .as_deref()
                .is_some_and(|rc| rc.eq_ignore_ascii_case(c)),
        }
    }

    pub fn matches_year(&self, record: &DataRecord) -> bool {
        self.year_start.is_none_or(|s| record.year >= s)
            && self.year_end.is_none_or(|e| record.year <= e)
    }

    pub fn matches(&self, record: &DataRecord) -> bool {
        self.matches_state(record) && self.matches_crop(record) && self.matches_year(record)
    }
}

/// Source of agriculture and climate records.
///
/// Implementations must never fail across this boundary: any backend
/// error is logged and reported as an empty list. Callers therefore cannot
/// tell "no matching rows" from "upstream unavailable".
pub trait DataProvider: Send + Sync {
    /// Crop production rows. `filter.crop` applies.
    fn fetch_agriculture(&self, filter: &RecordFilter) -> Vec<DataRecord>;

    /// Annual rainfall rows. `filter.crop` is ignored.
    fn fetch_climate(&self, filter: &RecordFilter) -> Vec<DataRecord>;

    /// Citation label for a dataset, used verbatim in answer sources.
    fn source_label(&self, dataset: Dataset) -> String;
}

/// Collapse a fallible fetch into the provider contract.
pub fn or_empty(
    result: DataResult<Vec<DataRecord>>,
    dataset: Dataset,
    filter: &RecordFilter,
) -> Vec<DataRecord> {
    match result {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                error = %e,
                dataset = %dataset,
                state = ?filter.state,
                "fetch failed, returning no records"
            );
            Vec::new()
        }
    }
}
