//! crop_trend, crop_production and highest_wheat_production.

use samarth_data::{DataProvider, RecordFilter};
use samarth_protocol::{AnswerResult, ChartKind, ChartSpec, Dataset, IntentTag, ParsedQuery};

use super::{DEFAULT_CROP, DEFAULT_YEAR, TOP_N};
use crate::format::thousands;
use crate::router::IntentHandler;
use crate::stats;

pub struct CropTrend;

impl IntentHandler for CropTrend {
    fn intent(&self) -> IntentTag {
        IntentTag::CropTrend
    }

    fn handle(&self, query: &ParsedQuery, data: &dyn DataProvider) -> AnswerResult {
        let Some(state) = query.primary_state() else {
            return AnswerResult::message("Please specify a state for trend analysis.");
        };
        let crop = query.primary_crop().unwrap_or(DEFAULT_CROP);
        let (start, end) = query.window_or(2010, 2020);
        let sources = vec![data.source_label(Dataset::Agriculture)];

        let rows = data.fetch_agriculture(
            &RecordFilter::new().state(state).crop(crop).years(start, end),
        );
        let Some(summary) = stats::summarize(rows.iter().filter_map(|r| r.production)) else {
            return AnswerResult::cited(
                format!("No data available for {crop} production in {state}."),
                sources,
            );
        };

        let text = format!(
            "{crop} production in {state} averaged {} units from {start}-{end}.",
            thousands(summary.mean)
        );
        let chart = ChartSpec::new(ChartKind::Line, format!("{crop} Production Trend in {state}"))
            .axes("Year", "Production")
            .points(stats::production_by_year(&rows));

        AnswerResult::cited(text, sources).with_chart(chart)
    }
}

pub struct CropProduction;

impl IntentHandler for CropProduction {
    fn intent(&self) -> IntentTag {
        IntentTag::CropProduction
    }

    fn handle(&self, query: &ParsedQuery, data: &dyn DataProvider) -> AnswerResult {
        let Some(state) = query.primary_state() else {
            return AnswerResult::message(
                "Please specify a state for crop production information.",
            );
        };
        let crop = query.primary_crop().unwrap_or(DEFAULT_CROP);
        let (start, end) = query.window_or(2018, 2018);
        let sources = vec![data.source_label(Dataset::Agriculture)];

        let rows = data.fetch_agriculture(
            &RecordFilter::new().state(state).crop(crop).years(start, end),
        );
        let Some(summary) = stats::summarize(rows.iter().filter_map(|r| r.production)) else {
            return AnswerResult::cited(
                format!("No data available for {crop} production in {state}."),
                sources,
            );
        };

        let mut text = format!(
            "{crop} production in {state} was {} units during {start}-{end}.",
            thousands(summary.sum)
        );
        if rows.len() > 1 {
            text.push_str("\n\nTop producing districts:");
            for row in stats::top_records_by_production(&rows, TOP_N) {
                text.push_str(&format!(
                    "\n- {}: {} units",
                    row.district.as_deref().unwrap_or("Unknown"),
                    thousands(row.production.unwrap_or(0.0))
                ));
            }
        }

        AnswerResult::cited(text, sources)
    }
}

pub struct HighestWheatProduction;

impl IntentHandler for HighestWheatProduction {
    fn intent(&self) -> IntentTag {
        IntentTag::HighestWheatProduction
    }

    fn handle(&self, query: &ParsedQuery, data: &dyn DataProvider) -> AnswerResult {
        let Some(state) = query.primary_state() else {
            return AnswerResult::message("Please specify a state for wheat production analysis.");
        };
        let year = query.latest_year().unwrap_or(DEFAULT_YEAR);
        let sources = vec![data.source_label(Dataset::Agriculture)];

        let rows = data.fetch_agriculture(&RecordFilter::new().state(state).crop("Wheat").year(year));
        let Some(best) = stats::max_by_production(&rows) else {
            return AnswerResult::cited(
                format!("No wheat production data available for {state} in {year}."),
                sources,
            );
        };

        let text = format!(
            "In {year}, {} district in {state} produced the most wheat with {} units.",
            best.district.as_deref().unwrap_or("Unknown"),
            thousands(best.production.unwrap_or(0.0))
        );
        AnswerResult::cited(text, sources)
    }
}
