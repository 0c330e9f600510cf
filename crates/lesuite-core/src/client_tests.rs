use super::*;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GameClient {
    GameClient::new(
        &server.uri(),
        "legacy_hash=testhash",
        Duration::from_secs(5),
        "lesuite-test",
    )
    .unwrap()
}

#[tokio::test]
async fn test_fetch_sends_session_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hospital.php"))
        .and(header("cookie", "legacy_hash=testhash"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<a href=\"?key=abc\">x</a>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.fetch("/hospital.php").await.unwrap();
    assert_eq!(page.path(), "/hospital.php");
    assert!(page.contains("key=abc"));
}

#[tokio::test]
async fn test_fetch_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hunting.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch("/hunting.php").await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_submit_appends_query_pairs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hospital.php"))
        .and(query_param("m", "1"))
        .and(query_param("key", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("healed"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let action = GameAction::new("/hospital.php").with("m", "1").with("key", "abc");
    client.submit(&action).await.unwrap();
}

#[tokio::test]
async fn test_submit_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hospital.php"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let action = GameAction::new("/hospital.php");
    assert!(client.submit(&action).await.is_err());
}

#[test]
fn test_invalid_base_url() {
    let result = GameClient::new("not a url", "c", Duration::from_secs(1), "ua");
    assert!(result.is_err());
}
