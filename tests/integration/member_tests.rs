use crate::common::{create_test_client, envelope, path};
use appnexus_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_get_member() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", path("/member/1"))
        .match_header("user-agent", USER_AGENT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!({"member": {"id": 1, "name": "Test Member"}})))
        .create_async()
        .await;

    let client = create_test_client(&server);
    let member = client.members().get(1).await.unwrap();

    assert_eq!(member.id, 1);
    assert_eq!(member.name, "Test Member");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_default_member() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", path("/member"))
        .with_status(200)
        .with_body(envelope(json!({"member": {"id": 958, "name": "Default"}})))
        .create_async()
        .await;

    let client = create_test_client(&server);
    assert_eq!(client.member_id().await, None);
    let member = client.members().get_default().await.unwrap();

    assert_eq!(member.id, 958);
    assert_eq!(client.member_id().await, Some(958));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_member_without_payload_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", path("/member/2"))
        .with_status(200)
        .with_body(envelope(json!({})))
        .create_async()
        .await;

    let client = create_test_client(&server);
    let result = client.members().get(2).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_get_by_id_does_not_set_working_member() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", path("/member/5"))
        .with_status(200)
        .with_body(envelope(json!({"member": {"id": 5, "name": "Other"}})))
        .create_async()
        .await;

    let client = create_test_client(&server);
    client.members().get(5).await.unwrap();
    assert_eq!(client.member_id().await, None);
}
