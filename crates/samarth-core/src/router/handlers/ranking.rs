//! top_crops and top_crops_by_type.
//!
//! Both rank per state and join the per-state lines with newlines; each
//! state cites the agriculture source once, so sources may repeat.

use samarth_data::{DataProvider, RecordFilter};
use samarth_protocol::{
    AnswerResult, ChartKind, ChartSpec, DataRecord, Dataset, IntentTag, ParsedQuery,
};

use super::{DEFAULT_YEAR, TOP_N};
use crate::format;
use crate::router::IntentHandler;
use crate::stats;

pub struct TopCrops;

impl IntentHandler for TopCrops {
    fn intent(&self) -> IntentTag {
        IntentTag::TopCrops
    }

    fn handle(&self, query: &ParsedQuery, data: &dyn DataProvider) -> AnswerResult {
        if query.states.is_empty() {
            return AnswerResult::message("Please specify a state for crop analysis.");
        }
        let year = query.latest_year().unwrap_or(DEFAULT_YEAR);
        let line = |state: &str, names: &str| {
            format!("The top 3 crops in {state} by production volume in {year} were: {names}.")
        };
        let empty =
            |state: &str| format!("No crop production data available for {state} in {year}.");
        rank_per_state(query, data, year, |_| true, line, empty)
    }
}

pub struct TopCropsByType;

impl IntentHandler for TopCropsByType {
    fn intent(&self) -> IntentTag {
        IntentTag::TopCropsByType
    }

    fn handle(&self, query: &ParsedQuery, data: &dyn DataProvider) -> AnswerResult {
        if query.states.is_empty() {
            return AnswerResult::message("Please specify a state for crop analysis.");
        }
        if query.crops.is_empty() {
            return AnswerResult::message("Please specify which crops to rank.");
        }
        let year = query.latest_year().unwrap_or(DEFAULT_YEAR);
        let named = format::list(&query.crops);
        // Exact match against canonical names only.
        let wanted = |r: &DataRecord| {
            r.crop
                .as_deref()
                .is_some_and(|c| query.crops.iter().any(|w| w == c))
        };
        let line = |state: &str, names: &str| {
            format!(
                "The top crops among {named} in {state} by production volume in {year} were: {names}."
            )
        };
        let empty =
            |state: &str| format!("No {named} production data available for {state} in {year}.");
        rank_per_state(query, data, year, wanted, line, empty)
    }
}

fn rank_per_state<K, L, E>(
    query: &ParsedQuery,
    data: &dyn DataProvider,
    year: i32,
    keep: K,
    line: L,
    empty: E,
) -> AnswerResult
where
    K: Fn(&DataRecord) -> bool,
    L: Fn(&str, &str) -> String,
    E: Fn(&str) -> String,
{
    let mut lines = Vec::with_capacity(query.states.len());
    let mut sources = Vec::with_capacity(query.states.len());
    let mut ranked = Vec::new();

    for state in &query.states {
        sources.push(data.source_label(Dataset::Agriculture));
        let mut rows = data.fetch_agriculture(&RecordFilter::new().state(state).year(year));
        rows.retain(|r| keep(r));

        let top = stats::top_n_by_sum(&rows, TOP_N);
        if top.is_empty() {
            lines.push(empty(state));
            continue;
        }
        let names: Vec<&str> = top.iter().map(|(crop, _)| crop.as_str()).collect();
        lines.push(line(state, &format::list(&names)));
        ranked.push((state.as_str(), top));
    }

    let answer = AnswerResult::cited(lines.join("\n"), sources);
    match ranked.as_slice() {
        [(state, top)] => answer.with_chart(
            ChartSpec::new(ChartKind::Bar, format!("Top Crops in {state} ({year})"))
                .axes("Crop", "Production")
                .points(top.iter().map(|(crop, total)| (crop.clone(), *total))),
        ),
        _ => answer,
    }
}
