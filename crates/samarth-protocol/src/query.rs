use serde::{Deserialize, Serialize};

/// Closed set of question intents recognised by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntentTag {
    CompareRainfall,
    CropTrend,
    HighestWheatProduction,
    TopCrops,
    TopCropsByType,
    AnalyzeCorrelation,
    ClimateInfo,
    CropProduction,
    /// Nothing specific matched; the router falls back on whatever parameters exist.
    #[default]
    GeneralQuery,
    Unknown,
}

impl IntentTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompareRainfall => "compare_rainfall",
            Self::CropTrend => "crop_trend",
            Self::HighestWheatProduction => "highest_wheat_production",
            Self::TopCrops => "top_crops",
            Self::TopCropsByType => "top_crops_by_type",
            Self::AnalyzeCorrelation => "analyze_correlation",
            Self::ClimateInfo => "climate_info",
            Self::CropProduction => "crop_production",
            Self::GeneralQuery => "general_query",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for IntentTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured form of a free-text question.
///
/// `states` and `crops` only ever hold canonical vocabulary names, in
/// vocabulary order. `years` is sorted ascending without duplicates, and
/// `year_start <= year_end` whenever both are set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub intent: IntentTag,
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub crops: Vec<String>,
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_start: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_end: Option<i32>,
}

impl ParsedQuery {
    /// Query carrying only an intent, with no extracted parameters.
    pub fn with_intent(intent: IntentTag) -> Self {
        Self {
            intent,
            ..Self::default()
        }
    }

    /// Set `years` and derive the window bounds from it.
    ///
    /// Input order and duplicates don't matter; the stored list is
    /// deduplicated and sorted.
    pub fn set_years(&mut self, mut years: Vec<i32>) {
        years.sort_unstable();
        years.dedup();
        self.year_start = years.first().copied();
        self.year_end = years.last().copied();
        self.years = years;
    }

    /// Builder-style variant of [`ParsedQuery::set_years`].
    pub fn years(mut self, years: Vec<i32>) -> Self {
        self.set_years(years);
        self
    }

    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn crops<I, S>(mut self, crops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.crops = crops.into_iter().map(Into::into).collect();
        self
    }

    pub fn primary_state(&self) -> Option<&str> {
        self.states.first().map(String::as_str)
    }

    pub fn primary_crop(&self) -> Option<&str> {
        self.crops.first().map(String::as_str)
    }

    /// Latest extracted year, if any.
    pub fn latest_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    /// Resolved `(start, end)` window, filling each missing bound from the
    /// handler's defaults.
    pub fn window_or(&self, default_start: i32, default_end: i32) -> (i32, i32) {
        (
            self.year_start.unwrap_or(default_start),
            self.year_end.unwrap_or(default_end),
        )
    }
}
