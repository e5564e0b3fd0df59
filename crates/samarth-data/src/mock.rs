//! Simulated data provider — serves baked sample tables and fills in
//! deterministic synthetic rows for states the tables don't cover.

use samarth_protocol::{DataRecord, Dataset};

use crate::config::ProviderConfig;
use crate::provider::{DataProvider, RecordFilter};

/// Synthetic agriculture window when the filter leaves years open.
const AGRI_DEFAULT_YEAR: i32 = 2018;
/// Synthetic climate window when the filter leaves years open.
const CLIMATE_DEFAULT_START: i32 = 2016;
const CLIMATE_DEFAULT_END: i32 = 2020;

const DISTRICTS_PER_STATE: usize = 5;
const PRODUCTION_MIN: u64 = 50_000;
const PRODUCTION_SPAN: u64 = 200_000;
const RAINFALL_SPREAD: u64 = 400;

/// A provider backed by in-memory tables.
///
/// When a state filter matches no baked row, the provider synthesizes data
/// for that state (unless built with [`MockDataProvider::strict`]), so
/// every region in the vocabulary answers with something plausible.
pub struct MockDataProvider {
    agriculture: Vec<DataRecord>,
    climate: Vec<DataRecord>,
    synthesize: bool,
    agriculture_label: String,
    climate_label: String,
}

impl MockDataProvider {
    /// Provider with the baked sample tables and synthetic fill.
    pub fn new() -> Self {
        Self::from_tables(sample_agriculture(), sample_climate(), true)
    }

    /// Provider with no rows and no synthetic fill: every fetch is empty.
    pub fn empty() -> Self {
        Self::from_tables(Vec::new(), Vec::new(), false)
    }

    /// Provider serving exactly the given rows, with no synthetic fill.
    pub fn strict(agriculture: Vec<DataRecord>, climate: Vec<DataRecord>) -> Self {
        Self::from_tables(agriculture, climate, false)
    }

    /// Use the source labels derived from `config`'s resource IDs.
    pub fn with_labels_from(mut self, config: &ProviderConfig) -> Self {
        self.agriculture_label = config.source_label(Dataset::Agriculture);
        self.climate_label = config.source_label(Dataset::Climate);
        self
    }

    fn from_tables(agriculture: Vec<DataRecord>, climate: Vec<DataRecord>, synthesize: bool) -> Self {
        let config = ProviderConfig::default();
        Self {
            agriculture,
            climate,
            synthesize,
            agriculture_label: config.source_label(Dataset::Agriculture),
            climate_label: config.source_label(Dataset::Climate),
        }
    }

    fn state_rows(&self, table: &[DataRecord], filter: &RecordFilter) -> Vec<DataRecord> {
        table
            .iter()
            .filter(|r| filter.matches_state(r))
            .cloned()
            .collect()
    }
}

impl Default for MockDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProvider for MockDataProvider {
    fn fetch_agriculture(&self, filter: &RecordFilter) -> Vec<DataRecord> {
        let mut rows = self.state_rows(&self.agriculture, filter);
        if rows.is_empty()
            && self.synthesize
            && let Some(state) = filter.state.as_deref()
        {
            rows = synthesize_agriculture(
                state,
                filter.crop.as_deref(),
                filter.year_start.unwrap_or(AGRI_DEFAULT_YEAR),
                filter.year_end.unwrap_or(AGRI_DEFAULT_YEAR),
            );
        }
        rows.retain(|r| filter.matches_crop(r) && filter.matches_year(r));
        rows
    }

    fn fetch_climate(&self, filter: &RecordFilter) -> Vec<DataRecord> {
        let mut rows = self.state_rows(&self.climate, filter);
        if rows.is_empty()
            && self.synthesize
            && let Some(state) = filter.state.as_deref()
        {
            rows = synthesize_climate(
                state,
                filter.year_start.unwrap_or(CLIMATE_DEFAULT_START),
                filter.year_end.unwrap_or(CLIMATE_DEFAULT_END),
            );
        }
        rows.retain(|r| filter.matches_year(r));
        rows
    }

    fn source_label(&self, dataset: Dataset) -> String {
        match dataset {
            Dataset::Agriculture => self.agriculture_label.clone(),
            Dataset::Climate => self.climate_label.clone(),
        }
    }
}

/// The staple crop synthesized for a state when no crop was requested.
fn regional_staple(state: &str) -> &'static str {
    let s = state.to_lowercase();
    let any = |names: &[&str]| names.iter().any(|n| s.contains(n));
    if any(&["west bengal", "assam", "odisha"]) {
        "Rice"
    } else if any(&["punjab", "haryana", "uttar pradesh"]) {
        "Wheat"
    } else if any(&["gujarat", "maharashtra", "madhya pradesh"]) {
        "Cotton"
    } else if any(&["tamil nadu", "karnataka", "andhra pradesh"]) {
        "Sugarcane"
    } else {
        "Rice"
    }
}

fn base_rainfall(state: &str) -> f64 {
    let s = state.to_lowercase();
    if ["tamil", "kerala", "coastal"].iter().any(|n| s.contains(n)) {
        1200.0
    } else if ["rajasthan", "gujarat", "haryana"].iter().any(|n| s.contains(n)) {
        600.0
    } else {
        900.0
    }
}

/// Stable pseudo-random value in `[0, span)` keyed on `seed`.
///
/// FNV-1a, so synthetic tables are identical across runs and platforms.
fn jitter(seed: &str, span: u64) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in seed.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash % span
}

fn synthesize_agriculture(
    state: &str,
    crop: Option<&str>,
    year_start: i32,
    year_end: i32,
) -> Vec<DataRecord> {
    let crop = crop.unwrap_or_else(|| regional_staple(state));
    let mut rows = Vec::new();
    for year in year_start..=year_end {
        for i in 1..=DISTRICTS_PER_STATE {
            let district = format!("{state} District {i}");
            let seed = format!("{district}|{crop}|{year}");
            let production = PRODUCTION_MIN + jitter(&seed, PRODUCTION_SPAN + 1);
            rows.push(DataRecord::production(
                state,
                district,
                year,
                crop,
                production as f64,
            ));
        }
    }
    rows
}

fn synthesize_climate(state: &str, year_start: i32, year_end: i32) -> Vec<DataRecord> {
    let base = base_rainfall(state);
    (year_start..=year_end)
        .map(|year| {
            let offset = jitter(&format!("{state}|rain|{year}"), RAINFALL_SPREAD + 1) as f64;
            DataRecord::rainfall(state, year, base + offset - (RAINFALL_SPREAD / 2) as f64)
        })
        .collect()
}

/// District crop production for 2018.
pub fn sample_agriculture() -> Vec<DataRecord> {
    const ROWS: &[(&str, &str, &str, f64)] = &[
        ("Tamil Nadu", "Chennai", "Rice", 120_000.0),
        ("Tamil Nadu", "Coimbatore", "Maize", 85_000.0),
        ("Tamil Nadu", "Madurai", "Sugarcane", 250_000.0),
        ("Tamil Nadu", "Salem", "Cotton", 95_000.0),
        ("Tamil Nadu", "Tiruchirappalli", "Ragi", 45_000.0),
        ("Maharashtra", "Mumbai", "Rice", 180_000.0),
        ("Maharashtra", "Pune", "Wheat", 110_000.0),
        ("Maharashtra", "Nagpur", "Soybean", 75_000.0),
        ("Maharashtra", "Nashik", "Cotton", 105_000.0),
        ("Maharashtra", "Aurangabad", "Jowar", 65_000.0),
        ("Karnataka", "Bangalore", "Rice", 135_000.0),
        ("Karnataka", "Mysore", "Maize", 92_000.0),
        ("Karnataka", "Hubli", "Groundnut", 88_000.0),
        ("Karnataka", "Mangalore", "Sugarcane", 220_000.0),
        ("Karnataka", "Belgaum", "Ragi", 52_000.0),
        ("Uttar Pradesh", "Lucknow", "Wheat", 150_000.0),
        ("Uttar Pradesh", "Kanpur", "Rice", 140_000.0),
        ("Uttar Pradesh", "Varanasi", "Maize", 98_000.0),
        ("Uttar Pradesh", "Agra", "Sugarcane", 240_000.0),
        ("Uttar Pradesh", "Allahabad", "Cotton", 102_000.0),
        ("Bihar", "Patna", "Rice", 125_000.0),
        ("Bihar", "Gaya", "Wheat", 108_000.0),
        ("Bihar", "Bhagalpur", "Maize", 89_000.0),
        ("Bihar", "Muzaffarpur", "Sugarcane", 210_000.0),
        ("Bihar", "Darbhanga", "Cotton", 97_000.0),
    ];
    ROWS.iter()
        .map(|&(state, district, crop, production)| {
            DataRecord::production(state, district, 2018, crop, production)
        })
        .collect()
}

/// State annual rainfall (mm) for 2016–2020.
pub fn sample_climate() -> Vec<DataRecord> {
    const SERIES: &[(&str, [f64; 5])] = &[
        ("Tamil Nadu", [950.0, 1020.0, 890.0, 920.0, 980.0]),
        ("Maharashtra", [1120.0, 1080.0, 1050.0, 1100.0, 1070.0]),
        ("Karnataka", [1250.0, 1300.0, 1280.0, 1220.0, 1260.0]),
    ];
    SERIES
        .iter()
        .flat_map(|(state, values)| {
            values
                .iter()
                .zip(2016..)
                .map(move |(&mm, year)| DataRecord::rainfall(*state, year, mm))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baked_state_filters_by_crop_and_year() {
        let p = MockDataProvider::new();
        let rows = p.fetch_agriculture(&RecordFilter::new().state("Maharashtra").crop("wheat").year(2018));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].district.as_deref(), Some("Pune"));
    }

    #[test]
    fn baked_state_outside_window_is_empty() {
        let p = MockDataProvider::new();
        let rows = p.fetch_agriculture(&RecordFilter::new().state("Tamil Nadu").year(2020));
        assert!(rows.is_empty());
    }

    #[test]
    fn unknown_state_is_synthesized_deterministically() {
        let p = MockDataProvider::new();
        let f = RecordFilter::new().state("Punjab").years(2017, 2018);
        let a = p.fetch_agriculture(&f);
        let b = p.fetch_agriculture(&f);
        assert_eq!(a.len(), 2 * DISTRICTS_PER_STATE);
        assert_eq!(a, b);
        assert!(a.iter().all(|r| r.crop.as_deref() == Some("Wheat")));
        assert!(a.iter().all(|r| {
            let v = r.production.unwrap();
            (50_000.0..=250_000.0).contains(&v)
        }));
    }

    #[test]
    fn synthesized_crop_follows_request() {
        let p = MockDataProvider::new();
        let rows = p.fetch_agriculture(&RecordFilter::new().state("Punjab").crop("Barley"));
        assert_eq!(rows.len(), DISTRICTS_PER_STATE);
        assert!(rows.iter().all(|r| r.year == AGRI_DEFAULT_YEAR));
        assert!(rows.iter().all(|r| r.crop.as_deref() == Some("Barley")));
    }

    #[test]
    fn climate_synthesis_uses_regional_base() {
        let p = MockDataProvider::new();
        let rows = p.fetch_climate(&RecordFilter::new().state("Rajasthan"));
        assert_eq!(rows.len(), 5);
        for r in &rows {
            let mm = r.rainfall.unwrap();
            assert!((400.0..=800.0).contains(&mm), "rainfall {mm} out of range");
        }
    }

    #[test]
    fn baked_climate_is_served_verbatim() {
        let p = MockDataProvider::new();
        let rows = p.fetch_climate(&RecordFilter::new().state("karnataka").years(2017, 2018));
        let mm: Vec<f64> = rows.iter().filter_map(|r| r.rainfall).collect();
        assert_eq!(mm, vec![1300.0, 1280.0]);
    }

    #[test]
    fn strict_provider_never_synthesizes() {
        let p = MockDataProvider::empty();
        assert!(p.fetch_agriculture(&RecordFilter::new().state("Punjab")).is_empty());
        assert!(p.fetch_climate(&RecordFilter::new().state("Punjab")).is_empty());
    }

    #[test]
    fn labels_point_at_data_gov() {
        let p = MockDataProvider::new();
        assert!(p.source_label(Dataset::Agriculture).starts_with("https://data.gov.in/resource/"));
        assert_ne!(p.source_label(Dataset::Agriculture), p.source_label(Dataset::Climate));
    }
}
