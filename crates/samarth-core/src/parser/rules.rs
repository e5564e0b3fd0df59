//! Intent classification — an ordered table of keyword predicates.
//!
//! Rules are evaluated top to bottom and the first match wins. Several
//! rules share keywords ("rainfall" appears in rules 2, 7 and 10), so the
//! position of each rule in `INTENT_RULES` is part of its meaning.

use samarth_protocol::IntentTag;

/// What the classifier can see about a question.
#[derive(Debug, Clone, Copy)]
pub struct Signals<'a> {
    /// Lowercased question text.
    pub text: &'a str,
    pub has_regions: bool,
    pub has_commodities: bool,
}

impl Signals<'_> {
    fn has(&self, keyword: &str) -> bool {
        self.text.contains(keyword)
    }

    fn has_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.text.contains(k))
    }
}

/// One row of the classification table.
pub struct IntentRule {
    pub name: &'static str,
    pub intent: IntentTag,
    pub matches: fn(&Signals<'_>) -> bool,
}

/// Classification table, highest priority first. The final rule always
/// matches.
pub static INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        name: "analyze correlation",
        intent: IntentTag::AnalyzeCorrelation,
        matches: analyze_correlation,
    },
    IntentRule {
        name: "compare rainfall",
        intent: IntentTag::CompareRainfall,
        matches: compare_rainfall,
    },
    IntentRule {
        name: "crop trend",
        intent: IntentTag::CropTrend,
        matches: crop_trend,
    },
    IntentRule {
        name: "most wheat",
        intent: IntentTag::HighestWheatProduction,
        matches: most_wheat,
    },
    IntentRule {
        name: "top crops by type",
        intent: IntentTag::TopCropsByType,
        matches: top_crops_by_type,
    },
    IntentRule {
        name: "top crops",
        intent: IntentTag::TopCrops,
        matches: top_crops,
    },
    IntentRule {
        name: "climate keyword with region",
        intent: IntentTag::ClimateInfo,
        matches: climate_keyword_with_region,
    },
    IntentRule {
        name: "production of named crop in region",
        intent: IntentTag::CropProduction,
        matches: production_of_crop_in_region,
    },
    IntentRule {
        name: "agriculture in region",
        intent: IntentTag::CropProduction,
        matches: agriculture_in_region,
    },
    IntentRule {
        name: "rain in region",
        intent: IntentTag::ClimateInfo,
        matches: rain_in_region,
    },
    IntentRule {
        name: "fallback",
        intent: IntentTag::GeneralQuery,
        matches: always,
    },
];

fn analyze_correlation(s: &Signals<'_>) -> bool {
    s.has("analyze") && s.has_any(&["correlate", "correlation"])
}

fn compare_rainfall(s: &Signals<'_>) -> bool {
    s.has("compare") && s.has("rainfall")
}

fn crop_trend(s: &Signals<'_>) -> bool {
    s.has("trend") && s.has_any(&["crop", "production"])
}

fn most_wheat(s: &Signals<'_>) -> bool {
    s.has("most") && s.has("wheat")
}

fn top_crops_by_type(s: &Signals<'_>) -> bool {
    (s.has("top") && s.has("crop") && s.has_any(&["type", "specific"]))
        || (s.has("list") && s.has("top") && s.has("crop"))
}

fn top_crops(s: &Signals<'_>) -> bool {
    s.has("top") && s.has("crop")
}

fn climate_keyword_with_region(s: &Signals<'_>) -> bool {
    s.has_any(&["climate", "weather", "rainfall", "pattern"]) && s.has_regions
}

fn production_of_crop_in_region(s: &Signals<'_>) -> bool {
    s.has("production") && s.has_commodities && s.has_regions
}

fn agriculture_in_region(s: &Signals<'_>) -> bool {
    s.has_regions && s.has_any(&["crop", "agricultur"])
}

fn rain_in_region(s: &Signals<'_>) -> bool {
    s.has_regions && s.has_any(&["rain", "climate", "weather"])
}

fn always(_: &Signals<'_>) -> bool {
    true
}

/// The first rule whose predicate holds.
pub fn first_match(signals: &Signals<'_>) -> &'static IntentRule {
    INTENT_RULES
        .iter()
        .find(|rule| (rule.matches)(signals))
        .unwrap_or(&INTENT_RULES[INTENT_RULES.len() - 1])
}

/// Intent for a question.
pub fn classify(signals: &Signals<'_>) -> IntentTag {
    first_match(signals).intent
}
