//! general_query: answer from whatever parameters were found.

use samarth_data::DataProvider;
use samarth_protocol::{AnswerResult, IntentTag, ParsedQuery};

use super::{ClimateInfo, CropProduction};
use crate::router::IntentHandler;

pub const CROP_WITHOUT_STATE: &str =
    "Please specify a state along with the crop for more accurate information.";

pub const NOT_UNDERSTOOD: &str = "I'm sorry, I couldn't understand your query. \
     Please try rephrasing or ask about specific states and crops.";

pub struct GeneralQuery;

impl IntentHandler for GeneralQuery {
    fn intent(&self) -> IntentTag {
        IntentTag::GeneralQuery
    }

    fn handle(&self, query: &ParsedQuery, data: &dyn DataProvider) -> AnswerResult {
        match (query.states.is_empty(), query.crops.is_empty()) {
            (false, true) => ClimateInfo.handle(query, data),
            (false, false) => CropProduction.handle(query, data),
            (true, false) => AnswerResult::message(CROP_WITHOUT_STATE),
            (true, true) => AnswerResult::message(NOT_UNDERSTOOD),
        }
    }
}
