//! ApiClient against a mock statistics API

use serde_json::json;
use vital_stats_gui::domain::config::ApiConfig;
use vital_stats_gui::services::ApiClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    })
    .expect("client")
}

#[tokio::test]
async fn test_fetch_regions_decodes_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/regioes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "nome": "Norte"},
            {"id": 2, "nome": "Nordeste"}
        ])))
        .mount(&server)
        .await;

    let regions = client_for(&server).fetch_regions().await.expect("regions");
    let names: Vec<_> = regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Norte", "Nordeste"]);
}

#[tokio::test]
async fn test_fetch_states_passes_region_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ufs"))
        .and(query_param("regiao_id", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": 29, "nome": "Bahia"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let states = client_for(&server).fetch_states(Some(2)).await.expect("states");
    assert_eq!(states.len(), 1);
    assert_eq!(states[0].id, 29);
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/regioes"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_regions()
        .await
        .expect_err("should fail");
    assert!(err.is_fetch());
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_unexpected_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/regioes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_regions()
        .await
        .expect_err("should fail");
    assert!(err.is_fetch());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_municipalities_are_filtered_by_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/municipios"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2927408, "nome": "Salvador", "cod_uf": 29},
            {"id": 3550308, "nome": "São Paulo", "cod_uf": 35},
            {"id": 2910800, "nome": "Feira de Santana", "cod_uf": 29}
        ])))
        .mount(&server)
        .await;

    let munis = client_for(&server)
        .fetch_municipalities_of(29)
        .await
        .expect("municipalities");
    let ids: Vec<_> = munis.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![2927408, 2910800]);
}

#[tokio::test]
async fn test_state_statistics_are_stamped_with_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ufs/35/2024/estatisticas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"ano": 2024, "total_nascimento": 10, "total_morte": 4}
        ])))
        .mount(&server)
        .await;

    let records = client_for(&server)
        .fetch_state_statistics(35, 2024)
        .await
        .expect("stats");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].geo_id, Some(35));
    assert_eq!(records[0].births(), 10);
    assert_eq!(records[0].marriages(), 0);
}
