use appnexus_client::model::requests::{
    AuthRequest, ListOptions, MemberSharingRequest, SegmentRequest, add_options,
};
use appnexus_client::presentation::{MemberSharing, Segment};
use assert_json_diff::assert_json_eq;
use serde_json::json;

#[test]
fn test_list_options_query_string() {
    assert_eq!(
        ListOptions::new(0, 20).to_query_string(),
        "num_elements=20"
    );
    assert_eq!(
        ListOptions::new(100, 100).to_query_string(),
        "start_element=100&num_elements=100"
    );
    assert_eq!(
        ListOptions::new(0, 0).active_only().to_query_string(),
        "active=true"
    );
    assert_eq!(ListOptions::default().to_query_string(), "");
}

#[test]
fn test_add_options_separator() {
    let opts = ListOptions::new(10, 5);
    assert_eq!(
        add_options("segment/1", Some(&opts)),
        "segment/1?start_element=10&num_elements=5"
    );
    assert_eq!(
        add_options("segment?member_id=1", Some(&opts)),
        "segment?member_id=1&start_element=10&num_elements=5"
    );
}

#[test]
fn test_add_options_without_options_keeps_path() {
    assert_eq!(add_options("segment/1", None), "segment/1");
    assert_eq!(
        add_options("segment/1", Some(&ListOptions::default())),
        "segment/1"
    );
}

#[test]
fn test_auth_request_body() {
    let body = serde_json::to_value(AuthRequest::new("user", "secret")).unwrap();
    assert_json_eq!(
        body,
        json!({"auth": {"username": "user", "password": "secret"}})
    );
}

#[test]
fn test_segment_request_body() {
    let segment = Segment::new(1, "Test segment");
    let body = serde_json::to_value(SegmentRequest { segment: &segment }).unwrap();
    assert_json_eq!(
        body,
        json!({"segment": {"short_name": "Test segment", "member_id": 1}})
    );
}

#[test]
fn test_member_sharing_request_body() {
    let sharing = MemberSharing {
        buyer_member_id: 7,
        segment_exposure: Some("all".to_string()),
        ..MemberSharing::default()
    };
    let body = serde_json::to_value(MemberSharingRequest {
        member_data_sharing: &sharing,
    })
    .unwrap();
    assert_json_eq!(
        body,
        json!({"member_data_sharing": {"buyer_member_id": 7, "segment_exposure": "all"}})
    );
}
