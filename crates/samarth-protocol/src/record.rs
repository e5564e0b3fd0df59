use serde::{Deserialize, Serialize};

/// One row of agriculture or climate data, normalized from any provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
    /// Production volume in the dataset's units (tonnes for data.gov.in).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<f64>,
    /// Annual rainfall in millimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<f64>,
}

impl DataRecord {
    /// Crop production row for a district.
    pub fn production(
        state: impl Into<String>,
        district: impl Into<String>,
        year: i32,
        crop: impl Into<String>,
        production: f64,
    ) -> Self {
        Self {
            state: state.into(),
            district: Some(district.into()),
            year,
            crop: Some(crop.into()),
            production: Some(production),
            rainfall: None,
        }
    }

    /// State-level annual rainfall row.
    pub fn rainfall(state: impl Into<String>, year: i32, rainfall: f64) -> Self {
        Self {
            state: state.into(),
            district: None,
            year,
            crop: None,
            production: None,
            rainfall: Some(rainfall),
        }
    }
}

/// Which upstream dataset a fetch reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// District-wise crop production.
    Agriculture,
    /// Sub-division/state annual rainfall.
    Climate,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agriculture => "agriculture",
            Self::Climate => "climate",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
