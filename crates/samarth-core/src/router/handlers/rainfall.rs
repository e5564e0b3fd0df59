//! compare_rainfall and climate_info.

use samarth_data::{DataProvider, RecordFilter};
use samarth_protocol::{AnswerResult, ChartKind, ChartSpec, Dataset, IntentTag, ParsedQuery};

use crate::format::millimetres;
use crate::router::IntentHandler;
use crate::stats;

/// States compared at most.
const MAX_COMPARED: usize = 3;

pub struct CompareRainfall;

impl IntentHandler for CompareRainfall {
    fn intent(&self) -> IntentTag {
        IntentTag::CompareRainfall
    }

    fn handle(&self, query: &ParsedQuery, data: &dyn DataProvider) -> AnswerResult {
        if query.states.len() < 2 {
            return AnswerResult::message("Please specify at least two states for comparison.");
        }
        let (start, end) = query.window_or(2015, 2020);
        let sources = vec![data.source_label(Dataset::Climate)];

        let averages: Vec<(&str, f64)> = query
            .states
            .iter()
            .take(MAX_COMPARED)
            .filter_map(|state| {
                let rows = data.fetch_climate(&RecordFilter::new().state(state).years(start, end));
                stats::summarize(rows.iter().filter_map(|r| r.rainfall))
                    .map(|s| (state.as_str(), s.mean))
            })
            .collect();

        if averages.is_empty() {
            return AnswerResult::cited(
                "No climate data available for the specified states.",
                sources,
            );
        }

        let parts: Vec<String> = averages
            .iter()
            .map(|(state, mean)| format!("{state} received {}", millimetres(*mean)))
            .collect();
        let text = format!(
            "Average rainfall comparison ({start}-{end}): {}.",
            parts.join(", ")
        );
        let chart = ChartSpec::new(ChartKind::Bar, "Average Rainfall Comparison")
            .axes("State", "Average Rainfall (mm)")
            .points(averages.iter().map(|&(state, mean)| (state, mean)));

        AnswerResult::cited(text, sources).with_chart(chart)
    }
}

pub struct ClimateInfo;

impl IntentHandler for ClimateInfo {
    fn intent(&self) -> IntentTag {
        IntentTag::ClimateInfo
    }

    fn handle(&self, query: &ParsedQuery, data: &dyn DataProvider) -> AnswerResult {
        let Some(state) = query.primary_state() else {
            return AnswerResult::message("Please specify a state for climate information.");
        };
        let (start, end) = query.window_or(2016, 2020);
        let sources = vec![data.source_label(Dataset::Climate)];

        let rows = data.fetch_climate(&RecordFilter::new().state(state).years(start, end));
        let Some(summary) = stats::summarize(rows.iter().filter_map(|r| r.rainfall)) else {
            return AnswerResult::cited(format!("No climate data available for {state}."), sources);
        };

        let text = format!(
            "Climate information for {state} ({start}-{end}):\n\
             - Average annual rainfall: {}\n\
             - Minimum annual rainfall: {}\n\
             - Maximum annual rainfall: {}",
            millimetres(summary.mean),
            millimetres(summary.min),
            millimetres(summary.max),
        );
        let chart = ChartSpec::new(ChartKind::Line, format!("Annual Rainfall in {state}"))
            .axes("Year", "Rainfall (mm)")
            .points(stats::rainfall_by_year(&rows));

        AnswerResult::cited(text, sources).with_chart(chart)
    }
}
