//! E2E tests running full questions against a mocked data.gov.in API.

mod helpers;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::TestHarness;
use samarth_data::{DataGovProvider, ProviderConfig, ProviderKind, build_provider};
use samarth_protocol::AnswerResult;

const RAIN_ID: &str = "8e0bd482-4aba-4d99-9cb9-ff124f6f1c2f";
const AGRI_ID: &str = "35985678-0d79-46b4-9ed6-6f13308a1d24";

fn config_for(server: &MockServer) -> ProviderConfig {
    ProviderConfig {
        kind: ProviderKind::DataGov,
        api_key: "e2e-key".into(),
        base_url: format!("{}/resource", server.uri()),
        timeout_secs: 2,
        ..ProviderConfig::default()
    }
}

/// Build, ask and drop on the blocking pool; the HTTP client is blocking.
async fn ask_live(config: ProviderConfig, question: &'static str) -> AnswerResult {
    tokio::task::spawn_blocking(move || {
        let provider = DataGovProvider::new(config).unwrap();
        TestHarness::with_provider(provider).ask(question)
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn e2e_live_climate_answer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/resource/{RAIN_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [
                {"subdivision": "Kerala", "year": "2017", "annual": "2800"},
                {"subdivision": "Kerala", "year": "2018", "annual": "3600"},
                {"subdivision": "Kerala", "year": "2019", "annual": "3000"},
                {"subdivision": "Goa", "year": "2018", "annual": "9999"}
            ]
        })))
        .mount(&server)
        .await;

    let answer = ask_live(config_for(&server), "Rainfall in Kerala from 2017 to 2018").await;
    assert_eq!(
        answer.text,
        "Climate information for Kerala (2017-2018):\n\
         - Average annual rainfall: 3200 mm\n\
         - Minimum annual rainfall: 2800 mm\n\
         - Maximum annual rainfall: 3600 mm"
    );
    assert_eq!(
        answer.sources,
        vec![format!("https://data.gov.in/resource/{RAIN_ID}")]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn e2e_live_top_crops() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/resource/{AGRI_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [
                {"state_name": "Punjab", "district_name": "LUDHIANA", "crop_year": 2019, "crop": "Wheat", "production_": 900},
                {"state_name": "Punjab", "district_name": "PATIALA", "crop_year": 2019, "crop": "Rice", "production_": 700},
                {"state_name": "Punjab", "district_name": "PATIALA", "crop_year": 2019, "crop": "Wheat", "production_": 400},
                {"state_name": "Punjab", "district_name": "AMRITSAR", "crop_year": 2019, "crop": "Maize", "production_": 100},
                {"state_name": "Punjab", "district_name": "AMRITSAR", "crop_year": 2019, "crop": "Barley", "production_": 50}
            ]
        })))
        .mount(&server)
        .await;

    let answer = ask_live(config_for(&server), "top crops in Punjab in 2019").await;
    assert_eq!(
        answer.text,
        "The top 3 crops in Punjab by production volume in 2019 were: Wheat, Rice, Maize."
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn e2e_live_outage_reads_as_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let answer = ask_live(config_for(&server), "What is the climate in Kerala?").await;
    assert_eq!(answer.text, "No climate data available for Kerala.");
    assert_eq!(answer.sources.len(), 1);
}

#[test]
fn e2e_live_provider_needs_api_key() {
    let config = ProviderConfig {
        kind: ProviderKind::DataGov,
        ..ProviderConfig::default()
    };
    assert!(build_provider(&config).is_err());
}

#[test]
fn e2e_default_config_builds_mock() {
    let provider = build_provider(&ProviderConfig::default()).unwrap();
    let answer = TestHarness::with_boxed(provider).ask("top crops in Bihar in 2018");
    assert_eq!(
        answer.text,
        "The top 3 crops in Bihar by production volume in 2018 were: Sugarcane, Rice, Wheat."
    );
}
