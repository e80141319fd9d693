//! Integration tests for the Jamendo catalog client.
//!
//! These tests use a mock server to verify client behavior without
//! touching the real catalog API.

use aria_catalog::{CatalogError, CatalogProvider, JamendoClient, JamendoConfig};
use aria_core::TrackSource;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> JamendoClient {
    JamendoClient::new(JamendoConfig::new(server.uri(), "test_client_id"))
        .expect("valid mock server url")
}

fn track_row(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "duration": 183,
        "audio": format!("https://audio.example.com/{id}.mp3"),
        "audiodownload": format!("https://audio.example.com/{id}-dl.mp3"),
        "audiodownload_allowed": true,
        "artist_id": "7",
        "artist_name": "Mock Artist",
        "album_id": "24",
        "album_name": "Mock Album",
        "album_image": "https://img.example.com/24.jpg"
    })
}

fn ok_body(results: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "headers": {
            "status": "success",
            "code": 0,
            "results_count": results.len()
        },
        "results": results
    })
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn search_sends_credentials_and_maps_tracks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks/"))
        .and(query_param("client_id", "test_client_id"))
        .and(query_param("format", "json"))
        .and(query_param("search", "mock song"))
        .and(query_param("limit", "20"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body(vec![track_row("168", "Mock Song")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tracks = client_for(&server).search_tracks("mock song").await.unwrap();

    assert_eq!(tracks.len(), 1);
    let track = &tracks[0];
    assert_eq!(track.id, "168");
    assert_eq!(track.title, "Mock Song");
    assert_eq!(track.artist.name, "Mock Artist");
    assert_eq!(track.duration_secs, 183);
    assert_eq!(track.stream_url, "https://audio.example.com/168.mp3");
    assert_eq!(
        track.download_url.as_deref(),
        Some("https://audio.example.com/168-dl.mp3")
    );
    assert_eq!(
        track.source,
        TrackSource::Catalog {
            provider_id: "168".to_string()
        }
    );
}

#[tokio::test]
async fn search_drops_rows_without_audio() {
    let server = MockServer::start().await;

    let mut broken = track_row("2", "No Audio");
    broken["audio"] = json!("");

    Mock::given(method("GET"))
        .and(path("/tracks/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body(vec![track_row("1", "Fine"), broken])),
        )
        .mount(&server)
        .await;

    let tracks = client_for(&server).search_tracks("anything").await.unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, "1");
}

// =============================================================================
// Browse endpoints
// =============================================================================

#[tokio::test]
async fn trending_requests_featured_weekly_boost() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks/"))
        .and(query_param("featured", "1"))
        .and(query_param("boost", "popularity_week"))
        .and(query_param("order", "popularity_total_desc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_body(vec![track_row("10", "Hot")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tracks = client_for(&server).trending_tracks().await.unwrap();
    assert_eq!(tracks.len(), 1);
}

#[tokio::test]
async fn new_releases_request_a_date_window() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks/"))
        .and(query_param("order", "releasedate_desc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_body(vec![track_row("11", "Fresh")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tracks = client_for(&server).new_releases().await.unwrap();
    assert_eq!(tracks.len(), 1);

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert!(query.contains("datebetween="));
}

// =============================================================================
// Lookup
// =============================================================================

#[tokio::test]
async fn track_by_id_returns_single_track() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks/"))
        .and(query_param("id", "168"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_body(vec![track_row("168", "Found")])),
        )
        .mount(&server)
        .await;

    let track = client_for(&server).track_by_id("168").await.unwrap();
    assert_eq!(track.id, "168");
}

#[tokio::test]
async fn track_by_id_missing_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![])))
        .mount(&server)
        .await;

    let result = client_for(&server).track_by_id("nope").await;
    match result {
        Err(CatalogError::NotFound(id)) => assert_eq!(id, "nope"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

// =============================================================================
// Error envelopes
// =============================================================================

#[tokio::test]
async fn api_error_envelope_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "headers": {
                "status": "failed",
                "code": 5,
                "error_message": "Invalid client id"
            },
            "results": []
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).search_tracks("x").await;
    match result {
        Err(CatalogError::Api { code, message }) => {
            assert_eq!(code, 5);
            assert!(message.contains("Invalid client id"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn http_error_status_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let result = client_for(&server).search_tracks("x").await;
    match result {
        Err(CatalogError::Api { code, .. }) => assert_eq!(code, 503),
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client_for(&server).search_tracks("x").await;
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}
