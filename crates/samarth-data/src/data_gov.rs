//! data.gov.in resource API provider.
//!
//! Fetches up to `limit` rows of a resource as JSON and normalizes them
//! into `DataRecord`s. The resource schemas differ between datasets (and
//! between versions of the same dataset), so column lookup is by a list of
//! known aliases, case-insensitively. Filtering happens locally after the
//! fetch.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};

use samarth_protocol::{DataRecord, Dataset};

use crate::config::ProviderConfig;
use crate::error::{DataError, DataResult};
use crate::provider::{self, DataProvider, RecordFilter};

const STATE_KEYS: &[&str] = &["state", "state_name", "subdivision", "state_ut"];
const DISTRICT_KEYS: &[&str] = &["district", "district_name"];
const YEAR_KEYS: &[&str] = &["year", "crop_year"];
const CROP_KEYS: &[&str] = &["crop", "crop_name"];
const PRODUCTION_KEYS: &[&str] = &["production", "production_", "production_tonnes_"];
const RAINFALL_KEYS: &[&str] = &["rainfall", "annual", "ann", "annual_rainfall"];

/// Resource API response (only fields we need).
#[derive(Deserialize)]
struct ResourceResponse {
    #[serde(default)]
    records: Vec<Map<String, Value>>,
}

/// Provider backed by the live data.gov.in API.
pub struct DataGovProvider {
    client: reqwest::blocking::Client,
    config: ProviderConfig,
}

impl DataGovProvider {
    pub fn new(config: ProviderConfig) -> DataResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(DataError::Config("data.gov.in API key is not set".into()));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Fetch and normalize rows of `dataset`, surfacing every failure.
    pub fn try_fetch(&self, dataset: Dataset, filter: &RecordFilter) -> DataResult<Vec<DataRecord>> {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.resource_id(dataset)
        );
        let limit = self.config.limit.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api-key", self.config.api_key.as_str()),
                ("format", "json"),
                ("limit", limit.as_str()),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(DataError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let body: ResourceResponse = response.json()?;
        let total = body.records.len();
        let records: Vec<DataRecord> = body
            .records
            .iter()
            .filter_map(|row| normalize_row(row, dataset))
            .filter(|r| filter.matches(r))
            .collect();

        tracing::debug!(
            dataset = %dataset,
            fetched = total,
            kept = records.len(),
            "data.gov.in fetch complete"
        );
        Ok(records)
    }
}

impl DataProvider for DataGovProvider {
    fn fetch_agriculture(&self, filter: &RecordFilter) -> Vec<DataRecord> {
        provider::or_empty(
            self.try_fetch(Dataset::Agriculture, filter),
            Dataset::Agriculture,
            filter,
        )
    }

    fn fetch_climate(&self, filter: &RecordFilter) -> Vec<DataRecord> {
        let filter = RecordFilter {
            crop: None,
            ..filter.clone()
        };
        provider::or_empty(
            self.try_fetch(Dataset::Climate, &filter),
            Dataset::Climate,
            &filter,
        )
    }

    fn source_label(&self, dataset: Dataset) -> String {
        self.config.source_label(dataset)
    }
}

/// Case-insensitive lookup of the first present alias.
fn field<'a>(row: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| {
        row.iter()
            .find(|(k, v)| k.eq_ignore_ascii_case(key) && !v.is_null())
            .map(|(_, v)| v)
    })
}

fn parse_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numbers arrive both as JSON numbers and as strings like "1,20,000".
fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}

/// Years arrive as 2018, "2018" or crop-year strings like "2018-19".
fn parse_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.trim().get(..4)?.parse().ok(),
        _ => None,
    }
}

fn normalize_row(row: &Map<String, Value>, dataset: Dataset) -> Option<DataRecord> {
    let state = field(row, STATE_KEYS).and_then(parse_text)?;
    let year = field(row, YEAR_KEYS).and_then(parse_year)?;
    let mut record = DataRecord {
        state,
        district: field(row, DISTRICT_KEYS).and_then(parse_text),
        year,
        crop: None,
        production: None,
        rainfall: None,
    };
    match dataset {
        Dataset::Agriculture => {
            record.crop = Some(field(row, CROP_KEYS).and_then(parse_text)?);
            record.production = Some(field(row, PRODUCTION_KEYS).and_then(parse_number)?);
        }
        Dataset::Climate => {
            record.rainfall = Some(field(row, RAINFALL_KEYS).and_then(parse_number)?);
        }
    }
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const AGRI_ID: &str = "35985678-0d79-46b4-9ed6-6f13308a1d24";
    const RAIN_ID: &str = "8e0bd482-4aba-4d99-9cb9-ff124f6f1c2f";

    fn config_for(server: &MockServer) -> ProviderConfig {
        ProviderConfig {
            api_key: "test-key".into(),
            base_url: format!("{}/resource", server.uri()),
            timeout_secs: 2,
            ..ProviderConfig::default()
        }
    }

    /// The blocking client must be built, used and dropped off the async runtime.
    async fn fetch_agri(config: ProviderConfig, filter: RecordFilter) -> Vec<DataRecord> {
        tokio::task::spawn_blocking(move || {
            let provider = DataGovProvider::new(config).unwrap();
            provider.fetch_agriculture(&filter)
        })
        .await
        .unwrap()
    }

    async fn fetch_rain(config: ProviderConfig, filter: RecordFilter) -> Vec<DataRecord> {
        tokio::task::spawn_blocking(move || {
            let provider = DataGovProvider::new(config).unwrap();
            provider.fetch_climate(&filter)
        })
        .await
        .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn agriculture_rows_are_normalized_and_filtered() {
        let server = MockServer::start().await;
        let body = json!({
            "status": "ok",
            "records": [
                {"state_name": "Punjab", "district_name": "LUDHIANA", "crop_year": "2018", "crop": "Wheat", "production_": "1,20,000"},
                {"state_name": "Punjab", "district_name": "PATIALA", "crop_year": 2018, "crop": "Rice", "production_": 90000},
                {"state_name": "Kerala", "district_name": "IDUKKI", "crop_year": 2018, "crop": "Wheat", "production_": 10},
                {"state_name": "Punjab", "district_name": "BATHINDA", "crop_year": 2018, "crop": "Wheat", "production_": "NA"}
            ]
        });
        Mock::given(method("GET"))
            .and(path(format!("/resource/{AGRI_ID}")))
            .and(query_param("api-key", "test-key"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let rows = fetch_agri(
            config_for(&server),
            RecordFilter::new().state("punjab").crop("wheat").year(2018),
        )
        .await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].district.as_deref(), Some("LUDHIANA"));
        assert_eq!(rows[0].production, Some(120_000.0));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn climate_rows_use_annual_column() {
        let server = MockServer::start().await;
        let body = json!({
            "records": [
                {"subdivision": "Kerala", "year": "2017", "annual": "2880.4"},
                {"subdivision": "Kerala", "year": "2018", "annual": 3552.1},
                {"subdivision": "Kerala", "year": "2019"}
            ]
        });
        Mock::given(method("GET"))
            .and(path(format!("/resource/{RAIN_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let rows = fetch_rain(
            config_for(&server),
            RecordFilter::new().state("Kerala").crop("ignored"),
        )
        .await;
        let mm: Vec<f64> = rows.iter().filter_map(|r| r.rainfall).collect();
        assert_eq!(mm, vec![2880.4, 3552.1]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn server_error_collapses_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let rows = fetch_agri(config_for(&server), RecordFilter::new().state("Punjab")).await;
        assert!(rows.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn garbage_body_collapses_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let rows = fetch_rain(config_for(&server), RecordFilter::new()).await;
        assert!(rows.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn timeout_collapses_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"records": []}))
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&server)
            .await;

        // Client timeout is 2s, mock delays 10s
        let rows = fetch_rain(config_for(&server), RecordFilter::new()).await;
        assert!(rows.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn try_fetch_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let err = tokio::task::spawn_blocking(move || {
            let provider = DataGovProvider::new(config).unwrap();
            provider.try_fetch(Dataset::Climate, &RecordFilter::new())
        })
        .await
        .unwrap()
        .unwrap_err();
        assert!(matches!(err, DataError::Status { status: 500, .. }));
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let err = DataGovProvider::new(ProviderConfig::default()).err().unwrap();
        assert!(matches!(err, DataError::Config(_)));
    }

    #[test]
    fn year_accepts_crop_year_strings() {
        assert_eq!(parse_year(&json!("2018-19")), Some(2018));
        assert_eq!(parse_year(&json!(2001)), Some(2001));
        assert_eq!(parse_year(&json!("n/a")), None);
    }

    #[test]
    fn field_lookup_is_case_insensitive() {
        let row = json!({"State": "Goa", "YEAR": 2019, "Rainfall": 3000});
        let row = row.as_object().unwrap();
        let rec = normalize_row(row, Dataset::Climate).unwrap();
        assert_eq!(rec.state, "Goa");
        assert_eq!(rec.year, 2019);
        assert_eq!(rec.rainfall, Some(3000.0));
    }
}
