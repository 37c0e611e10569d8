//! Dashboard flows driven end to end against a mock statistics API

use serde_json::json;
use vital_stats_gui::domain::config::ApiConfig;
use vital_stats_gui::domain::filter::{FilterState, RecordType};
use vital_stats_gui::eventing::app_event::AppEvent;
use vital_stats_gui::services::{ApiClient, Session};
use vital_stats_gui::state::{NoticeLevel, Scope};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Two states in 2025; São Paulo's statistics endpoint is broken
async fn national_api() -> MockServer {
    let server = MockServer::start().await;
    mount_json(&server, "/regioes", json!([{"id": 3, "nome": "Sudeste"}])).await;
    mount_json(
        &server,
        "/ufs",
        json!([{"id": 29, "nome": "Bahia"}, {"id": 35, "nome": "São Paulo"}]),
    )
    .await;
    mount_json(
        &server,
        "/ufs/29/2025/estatisticas",
        json!([{"ano": 2025, "total_nascimento": 1, "total_morte": 2, "total_casamento": 3}]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/ufs/35/2025/estatisticas"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    server
}

fn session_for(server: &MockServer) -> Session {
    let api = ApiClient::new(&ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    })
    .expect("client");
    Session::new(api, FilterState::default())
}

#[tokio::test]
async fn test_failed_state_statistics_only_zero_that_state() {
    let server = national_api().await;
    let mut session = session_for(&server);

    session.dispatch(AppEvent::Init).await;

    let state = session.state();
    assert_eq!(state.regions().len(), 1);
    let rows = state.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].id, rows[0].total), (29, 6));
    assert_eq!((rows[1].id, rows[1].total), (35, 0));
    assert_eq!(state.total(), 6);
    assert!(!state.loading().any());
    // Per-state failures are not surfaced as notices
    assert!(state.notices().is_empty());
}

#[tokio::test]
async fn test_select_state_requests_municipality_statistics_once() {
    let server = national_api().await;
    mount_json(
        &server,
        "/municipios",
        json!([
            {"id": 2927408, "nome": "Salvador", "cod_uf": 29},
            {"id": 3550308, "nome": "São Paulo", "cod_uf": 35}
        ]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/ufs/29/2025/municipios/estatisticas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"cod_municipio": 2927408, "ano": 2025, "total_nascimento": 7, "total_morte": 1}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    session.dispatch(AppEvent::Init).await;
    session.dispatch(AppEvent::SelectState(29)).await;

    let state = session.state();
    assert_eq!(state.scope(), Scope::State(29));
    assert_eq!(state.municipalities().len(), 1);
    assert_eq!(state.total(), 8);

    session
        .dispatch(AppEvent::ChangeFilters(
            FilterState::default().with_record_type(RecordType::Deaths),
        ))
        .await;
    assert_eq!(session.state().total(), 1);

    session.dispatch(AppEvent::GoBack).await;
    assert_eq!(session.state().scope(), Scope::National);
    assert_eq!(session.state().total(), 2);
}

#[tokio::test]
async fn test_primary_list_failure_pushes_error_notice() {
    let server = MockServer::start().await;
    mount_json(&server, "/regioes", json!([])).await;
    Mock::given(method("GET"))
        .and(path("/ufs"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    session.dispatch(AppEvent::Init).await;

    let state = session.state();
    assert!(state.states().is_empty());
    assert_eq!(state.total(), 0);
    assert_eq!(
        state.notices().last().map(|n| n.level()),
        Some(NoticeLevel::Error)
    );
}

#[tokio::test]
async fn test_failed_municipality_statistics_keep_the_list() {
    let server = national_api().await;
    mount_json(
        &server,
        "/municipios",
        json!([{"id": 2927408, "nome": "Salvador", "cod_uf": 29}]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/ufs/29/2025/municipios/estatisticas"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    session.dispatch(AppEvent::Init).await;
    session.dispatch(AppEvent::SelectState(29)).await;

    let state = session.state();
    assert_eq!(state.scope(), Scope::State(29));
    assert_eq!(state.municipalities().len(), 1);
    assert!(state.municipality_stats().is_empty());
    assert_eq!(state.total(), 0);
    assert!(!state.loading().municipalities);
    assert!(
        state
            .notices()
            .newest_first()
            .all(|n| n.level() != NoticeLevel::Error)
    );
}
