//! Built-in intent handlers.

mod correlation;
mod general;
mod production;
mod rainfall;
mod ranking;

pub use correlation::AnalyzeCorrelation;
pub use general::{CROP_WITHOUT_STATE, GeneralQuery, NOT_UNDERSTOOD};
pub use production::{CropProduction, CropTrend, HighestWheatProduction};
pub use rainfall::{ClimateInfo, CompareRainfall};
pub use ranking::{TopCrops, TopCropsByType};

use super::IntentHandler;

/// Crop assumed when a question names none.
pub const DEFAULT_CROP: &str = "Rice";

/// Year assumed by single-year handlers when a question names none.
pub const DEFAULT_YEAR: i32 = 2020;

/// Entries in ranked lists.
pub const TOP_N: usize = 3;

/// One instance of every handler.
pub fn all_handlers() -> Vec<Box<dyn IntentHandler>> {
    vec![
        Box::new(CompareRainfall),
        Box::new(CropTrend),
        Box::new(HighestWheatProduction),
        Box::new(TopCrops),
        Box::new(TopCropsByType),
        Box::new(AnalyzeCorrelation),
        Box::new(ClimateInfo),
        Box::new(CropProduction),
        Box::new(GeneralQuery),
    ]
}
