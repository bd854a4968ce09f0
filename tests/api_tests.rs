//! OpenWeatherMap client tests against a WireMock server
//!
//! The reducer decides *what* to fetch; these tests run its effects against
//! a mocked provider and feed the results back, end to end.

use citycast::{
    action::{Action, SearchReply},
    api::{FetchError, OpenWeatherClient},
    config::WeatherConfig,
    effect::Effect,
    i18n,
    reducer::reducer,
    state::{AppState, SearchState},
};
use tui_dispatch::EffectStore;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// =============================================================================
// Test Helpers
// =============================================================================

fn current_body(city: &str, country: &str, description: &str, icon: &str) -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 100.5, "lat": 13.75 },
        "weather": [{ "id": 800, "main": "Clear", "description": description, "icon": icon }],
        "main": { "temp": 31.4, "feels_like": 36.0, "pressure": 1008, "humidity": 68 },
        "sys": { "country": country },
        "name": city,
        "cod": 200
    })
}

async fn mount_city(server: &MockServer, city: &str, description: &str) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", city))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(current_body(city, "TH", description, "01d")),
        )
        .mount(server)
        .await;
}

async fn mount_not_found(server: &MockServer, city: &str) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", city))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::new(WeatherConfig::new("test-key").with_base_url(server.uri()))
}

/// Same mapping the binary's effect handler performs
async fn run_effect(client: &OpenWeatherClient, effect: Effect) -> Action {
    match effect {
        Effect::FetchDefaults { cities } => Action::DefaultsDidLoad(client.fetch_many(&cities).await),
        Effect::FetchCity { seq, city } => Action::SearchDidComplete(SearchReply {
            seq,
            report: client.fetch_report(&city).await,
        }),
    }
}

// =============================================================================
// Fetch-and-normalize
// =============================================================================

#[tokio::test]
async fn test_sends_city_units_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Hat Yai"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(current_body("Hat Yai", "TH", "mist", "50d")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let report = client_for(&server).fetch_report("Hat Yai").await.expect("report");

    assert_eq!(report.city, "Hat Yai");
    assert_eq!(report.country, "TH");
    assert_eq!(report.temperature_celsius, 31.4);
    assert_eq!(report.humidity_percent, 68);
    assert_eq!(report.icon_id, "50d");
    assert_eq!(report.description, "หมอก");
}

#[tokio::test]
async fn test_clear_sky_is_translated() {
    let server = MockServer::start().await;
    mount_city(&server, "Bangkok", "clear sky").await;

    let report = client_for(&server).fetch_report("Bangkok").await.expect("report");

    assert_eq!(report.description, "ท้องฟ้าแจ่มใส");
}

#[tokio::test]
async fn test_unmapped_description_passes_through() {
    let server = MockServer::start().await;
    mount_city(&server, "Phuket", "moderate rain").await;

    let report = client_for(&server).fetch_report("Phuket").await.expect("report");

    assert_eq!(report.description, "moderate rain");
}

#[tokio::test]
async fn test_not_found_is_none() {
    let server = MockServer::start().await;
    mount_not_found(&server, "Atlantis").await;
    let client = client_for(&server);

    assert!(client.fetch_report("Atlantis").await.is_none());
    let err = client.try_fetch_report("Atlantis").await.unwrap_err();
    assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 404));
}

#[tokio::test]
async fn test_malformed_body_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    assert!(client.fetch_report("Krabi").await.is_none());
    assert!(matches!(
        client.try_fetch_report("Krabi").await,
        Err(FetchError::Decode(_))
    ));
}

#[tokio::test]
async fn test_unreachable_host_is_none() {
    let client =
        OpenWeatherClient::new(WeatherConfig::new("k").with_base_url("http://127.0.0.1:1"));

    assert!(client.fetch_report("Bangkok").await.is_none());
}

// =============================================================================
// Default-cities fan-out
// =============================================================================

#[tokio::test]
async fn test_fetch_many_keeps_order_and_drops_failures() {
    let server = MockServer::start().await;
    mount_city(&server, "Bangkok", "clear sky").await;
    mount_not_found(&server, "Nowhere").await;
    mount_city(&server, "Krabi", "few clouds").await;
    mount_city(&server, "Phuket", "rain").await;

    let cities: Vec<String> = ["Bangkok", "Nowhere", "Krabi", "Phuket"]
        .into_iter()
        .map(String::from)
        .collect();
    let reports = client_for(&server).fetch_many(&cities).await;

    let names: Vec<_> = reports.iter().map(|r| r.city.as_str()).collect();
    assert_eq!(names, ["Bangkok", "Krabi", "Phuket"]);
    assert_eq!(reports[1].description, "เมฆบางส่วน");
}

#[tokio::test]
async fn test_all_defaults_fail_gives_empty_grid_without_banner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut store = EffectStore::new(AppState::default(), reducer);
    let result = store.dispatch(Action::DefaultsFetch);
    for effect in result.effects {
        let action = run_effect(&client, effect).await;
        store.dispatch(action);
    }

    assert!(store.state().defaults.is_loaded());
    assert!(store.state().visible_defaults().is_empty());
    assert!(!store.state().banner_open());
    assert_eq!(store.state().search, SearchState::Idle);
}

// =============================================================================
// Search flows end to end
// =============================================================================

#[tokio::test]
async fn test_empty_search_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut store = EffectStore::new(AppState::default(), reducer);
    let before = store.state().search.clone();
    let result = store.dispatch(Action::SearchSubmit(String::new()));
    assert!(!result.changed);
    for effect in result.effects {
        run_effect(&client, effect).await;
    }

    assert_eq!(store.state().search, before);
    server.verify().await;
}

#[tokio::test]
async fn test_whitespace_search_reaches_provider_and_shows_banner() {
    let server = MockServer::start().await;
    mount_not_found(&server, "   ").await;
    let client = client_for(&server);
    let mut store = EffectStore::new(AppState::default(), reducer);

    let result = store.dispatch(Action::SearchSubmit("   ".into()));
    assert_eq!(result.effects.len(), 1);
    for effect in result.effects {
        let action = run_effect(&client, effect).await;
        store.dispatch(action);
    }

    assert_eq!(store.state().search.error(), Some(i18n::NOT_FOUND));
    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_failed_search_clears_previous_report() {
    let server = MockServer::start().await;
    mount_city(&server, "Bangkok", "clear sky").await;
    mount_not_found(&server, "Atlantis").await;
    let client = client_for(&server);
    let mut store = EffectStore::new(AppState::default(), reducer);

    for city in ["Bangkok", "Atlantis"] {
        let result = store.dispatch(Action::SearchSubmit(city.into()));
        for effect in result.effects {
            let action = run_effect(&client, effect).await;
            store.dispatch(action);
        }
    }

    assert_eq!(store.state().search.error(), Some(i18n::NOT_FOUND));
    assert!(store.state().search.report().is_none());

    store.dispatch(Action::SearchDismissError);
    assert_eq!(store.state().search, SearchState::Idle);
}

#[tokio::test]
async fn test_panel_pick_matches_direct_search() {
    let server = MockServer::start().await;
    mount_city(&server, "Chiang Mai", "broken clouds").await;
    let client = client_for(&server);

    let mut direct = EffectStore::new(AppState::default(), reducer);
    let result = direct.dispatch(Action::SearchSubmit("Chiang Mai".into()));
    for effect in result.effects {
        let action = run_effect(&client, effect).await;
        direct.dispatch(action);
    }

    let mut picked = EffectStore::new(AppState::default(), reducer);
    picked.dispatch(Action::PanelOpen);
    let result = picked.dispatch(Action::PanelPick("Chiang Mai".into()));
    for effect in result.effects {
        let action = run_effect(&client, effect).await;
        picked.dispatch(action);
    }

    assert!(!picked.state().panel_open);
    assert_eq!(picked.state().search_input, "Chiang Mai");
    let report = picked.state().search.report().expect("picked report");
    assert_eq!(Some(report), direct.state().search.report());
    assert_eq!(report.description, "เมฆปกคลุมบางส่วน");
}
