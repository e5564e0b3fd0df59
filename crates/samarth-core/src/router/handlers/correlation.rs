//! analyze_correlation: production against rainfall, year by year.

use samarth_data::{DataProvider, RecordFilter};
use samarth_protocol::{AnswerResult, ChartKind, ChartSpec, Dataset, IntentTag, ParsedQuery};

use super::DEFAULT_CROP;
use crate::router::IntentHandler;
use crate::stats;

pub struct AnalyzeCorrelation;

impl IntentHandler for AnalyzeCorrelation {
    fn intent(&self) -> IntentTag {
        IntentTag::AnalyzeCorrelation
    }

    fn handle(&self, query: &ParsedQuery, data: &dyn DataProvider) -> AnswerResult {
        let Some(state) = query.primary_state() else {
            return AnswerResult::message("Please specify a state for correlation analysis.");
        };
        let crop = query.primary_crop().unwrap_or(DEFAULT_CROP);
        let (start, end) = query.window_or(2010, 2020);
        let sources = vec![
            data.source_label(Dataset::Agriculture),
            data.source_label(Dataset::Climate),
        ];

        let agriculture = data.fetch_agriculture(
            &RecordFilter::new().state(state).crop(crop).years(start, end),
        );
        let climate = data.fetch_climate(&RecordFilter::new().state(state).years(start, end));
        if agriculture.is_empty() || climate.is_empty() {
            return AnswerResult::cited(
                format!(
                    "Insufficient data for correlation analysis between {crop} production \
                     and rainfall in {state}."
                ),
                sources,
            );
        }

        let joined = stats::join_by_year(&agriculture, &climate);
        if joined.is_empty() {
            return AnswerResult::cited(
                format!("Could not correlate {crop} production and rainfall data for {state}."),
                sources,
            );
        }

        let rainfall: Vec<f64> = joined.iter().map(|p| p.rainfall).collect();
        let production: Vec<f64> = joined.iter().map(|p| p.production).collect();
        let r = stats::pearson(&production, &rainfall);
        tracing::debug!(state, crop, points = joined.len(), r, "correlation computed");

        let text = format!(
            "The correlation between {crop} production and rainfall in {state} \
             from {start}-{end} is {r:.2}."
        );
        let chart = ChartSpec::new(
            ChartKind::Scatter,
            format!("{crop} Production vs Rainfall in {state}"),
        )
        .axes("Rainfall (mm)", "Production")
        .points(rainfall.into_iter().zip(production))
        .with_labels(joined.iter().map(|p| p.year.to_string()));

        AnswerResult::cited(text, sources).with_chart(chart)
    }
}
