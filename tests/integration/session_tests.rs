use crate::common::{create_test_client, envelope, path};
use appnexus_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_login_stores_cookie_token() {
    let mut server = mockito::Server::new_async().await;
    let login = server
        .mock("POST", path("/auth"))
        .match_body(Matcher::Json(json!({
            "auth": {"username": "user", "password": "pass"}
        })))
        .with_status(200)
        .with_header("set-cookie", "PHPSESSID=tok123; path=/; HttpOnly")
        .with_body(envelope(json!({"token": "body-token"})))
        .create_async()
        .await;
    let member = server
        .mock("GET", path("/member"))
        .match_header("authorization", "tok123")
        .with_status(200)
        .with_body(envelope(json!({"member": {"id": 1, "name": "Test Member"}})))
        .create_async()
        .await;

    let client = create_test_client(&server);
    let session = client.login().await.unwrap();

    assert_eq!(session.token, "tok123");
    assert_eq!(session.username, "user");
    assert_eq!(client.http_client().token().await.as_deref(), Some("tok123"));

    client.members().get_default().await.unwrap();
    login.assert_async().await;
    member.assert_async().await;
}

#[tokio::test]
async fn test_login_without_cookie_fails() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", path("/auth"))
        .with_status(200)
        .with_body(envelope(json!({"token": "body-token"})))
        .create_async()
        .await;

    let client = create_test_client(&server);
    let result = client.login().await;

    assert!(matches!(result, Err(AppError::Authentication(_))));
    assert!(!client.http_client().is_authenticated().await);
}

#[tokio::test]
async fn test_login_error_envelope_fails() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", path("/auth"))
        .with_status(200)
        .with_header("set-cookie", "PHPSESSID=ignored")
        .with_body(
            json!({"response": {"error_id": "UNAUTH", "error": "No match found for user/pass"}})
                .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(&server);
    match client.login_with("user", "wrong").await {
        Err(AppError::Authentication(msg)) => assert!(msg.contains("UNAUTH")),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_connect_logs_in() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", path("/auth"))
        .with_status(200)
        .with_header("set-cookie", "PHPSESSID=tok")
        .with_body(envelope(json!({})))
        .create_async()
        .await;

    let config = crate::common::test_config(&server);
    let client = Client::connect(config).await.unwrap();
    assert!(client.http_client().is_authenticated().await);

    client.logout().await;
    assert!(!client.http_client().is_authenticated().await);
}

#[tokio::test]
async fn test_requests_without_login_send_no_authorization() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", path("/member/1"))
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(envelope(json!({"member": {"id": 1, "name": "Test Member"}})))
        .create_async()
        .await;

    let client = create_test_client(&server);
    client.members().get(1).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_uses_first_cookie() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", path("/auth"))
        .with_status(200)
        .with_header("set-cookie", "PHPSESSID=first-token; path=/; HttpOnly")
        .with_header("set-cookie", "tracking=second; path=/")
        .with_body(envelope(json!({})))
        .create_async()
        .await;

    let client = create_test_client(&server);
    let session = client.login().await.unwrap();
    assert_eq!(session.token, "first-token");
}
