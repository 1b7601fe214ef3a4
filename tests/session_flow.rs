//! End-to-end flow over HTTP: sign in, look up, keep history, sign out.

use std::sync::{Arc, Mutex};

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ipgeo_client::config::MSG_SIGN_IN_REQUIRED;
use ipgeo_client::{
    Config, HistoryLedger, HttpApiClient, LookupEngine, MemorySessionStorage, Phase,
    SessionStorage, SessionStore,
};

async fn mount_service(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": {"email": "admin@example.com", "role": "admin"},
            "token": "session-token"
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/ip-info"))
        .and(query_param("ip", "8.8.8.8"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "ip": "8.8.8.8",
                "city": "Mountain View",
                "loc": "37.4056,-122.0775"
            }
        })))
        .with_priority(1)
        .mount(server)
        .await;

    // Own-address lookups carry no ip parameter
    Mock::given(method("GET"))
        .and(path("/api/ip-info"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "203.0.113.7",
            "city": "Lisbon",
            "country": "PT",
            "loc": "38.7223,-9.1393"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_sign_in_lookup_and_sign_out() {
    let server = MockServer::start().await;
    mount_service(&server).await;

    let config = Config {
        api_base_url: server.uri(),
        ..Default::default()
    };
    let api = Arc::new(HttpApiClient::new(&config).unwrap());
    let storage = Arc::new(MemorySessionStorage::new());
    let session = Arc::new(SessionStore::restore(storage.clone()));
    assert!(!session.is_authenticated());

    let signed_in = session
        .authenticate(api.as_ref(), "admin@example.com", "password123")
        .await
        .unwrap();
    assert_eq!(signed_in.identity.email, "admin@example.com");
    assert_eq!(storage.get("token").as_deref(), Some("session-token"));

    let history = Arc::new(Mutex::new(HistoryLedger::new()));
    let engine = LookupEngine::new(api.clone(), session.clone(), history.clone());

    engine.load_current().await;
    let target = engine.map_target().unwrap();
    assert_eq!(target.ip, "203.0.113.7");
    assert_eq!(target.label, "Lisbon");

    engine.search("8.8.8.8").await;
    let state = engine.state();
    assert_eq!(state.phase, Phase::Success);
    assert_eq!(engine.map_target().unwrap().label, "Mountain View");
    assert_eq!(engine.history_entries(), vec!["8.8.8.8"]);

    engine.reset().await;
    assert_eq!(engine.map_target().unwrap().ip, "203.0.113.7");
    assert_eq!(engine.history_entries(), vec!["8.8.8.8"]);

    // A restored store picks the session back up from storage
    let restored = SessionStore::restore(storage.clone());
    assert!(restored.is_authenticated());

    session.terminate();
    assert_eq!(storage.get("user"), None);
    assert_eq!(storage.get("token"), None);

    let calls_before = server.received_requests().await.unwrap().len();
    engine.search("8.8.8.8").await;
    let state = engine.state();
    assert_eq!(state.phase, Phase::Error);
    assert_eq!(state.error_message.as_deref(), Some(MSG_SIGN_IN_REQUIRED));
    assert_eq!(server.received_requests().await.unwrap().len(), calls_before);
}
