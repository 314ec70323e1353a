use appnexus_client::error::AppError;
use appnexus_client::model::envelope::{ErrorEnvelope, check_response, rate_from_body};
use reqwest::StatusCode;

#[test]
fn test_non_success_status_is_error_whatever_the_body() {
    let codes = [301, 304, 400, 401, 403, 404, 429, 500, 502, 503];
    let bodies: [&[u8]; 3] = [b"", br#"{"response":{"status":"OK"}}"#, b"not json"];

    for code in codes {
        let status = StatusCode::from_u16(code).unwrap();
        for body in bodies {
            match check_response(status, body) {
                Err(AppError::HttpStatus(s)) => assert_eq!(s.as_u16(), code),
                other => panic!("status {code}: unexpected result {other:?}"),
            }
        }
    }
}

#[test]
fn test_syntax_error_envelope() {
    let body = br#"{"response":{"status":"error","error_id":"SYNTAX","error":"invalid service","service":"foo"}}"#;
    let err = check_response(StatusCode::OK, body).unwrap_err();
    assert_eq!(
        err.to_string(),
        "AppNexus:checkResponse [SYNTAX]: invalid service"
    );
}

#[test]
fn test_error_envelope_keeps_description_and_code() {
    let body = br#"{"response":{"status":"error","error_id":"NOAUTH","error":"not logged in","error_description":"session expired","error_code":"EXPIRED"}}"#;
    match check_response(StatusCode::OK, body) {
        Err(AppError::Api {
            error_id,
            description,
            code,
            ..
        }) => {
            assert_eq!(error_id, "NOAUTH");
            assert_eq!(description.as_deref(), Some("session expired"));
            assert_eq!(code.as_deref(), Some("EXPIRED"));
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_empty_body_is_success() {
    assert!(check_response(StatusCode::OK, b"").is_ok());
    assert!(check_response(StatusCode::CREATED, b"").is_ok());
}

#[test]
fn test_success_envelope_is_success() {
    let body = br#"{"response":{"status":"OK","id":4,"count":1}}"#;
    assert!(check_response(StatusCode::OK, body).is_ok());
}

#[test]
fn test_undecodable_body_is_deserialization_error() {
    let result = check_response(StatusCode::OK, b"<html>oops</html>");
    assert!(matches!(result, Err(AppError::Deserialization(_))));
}

#[test]
fn test_error_envelope_decodes_rate() {
    let body = br#"{"response":{"error_id":"SYSTEM","error":"busy","dbg_info":{"reads":3,"read_limit":100,"read_limit_seconds":60}}}"#;
    let envelope: ErrorEnvelope = serde_json::from_slice(body).unwrap();
    assert_eq!(envelope.response.rate.reads, 3);
    assert_eq!(envelope.response.rate.read_limit_seconds, 60);
}

#[test]
fn test_rate_from_body_reads_dbg_info() {
    let body = br#"{"response":{"status":"OK","dbg_info":{"reads":1,"read_limit":100,"read_limit_seconds":60,"writes":2,"write_limit":60,"write_limit_seconds":60,"time":12.5}}}"#;
    let rate = rate_from_body(body);
    assert_eq!(rate.reads, 1);
    assert_eq!(rate.writes, 2);
    assert_eq!(rate.write_limit, 60);
    assert!((rate.time - 12.5).abs() < f64::EPSILON);
}

#[test]
fn test_rate_from_body_tolerates_garbage() {
    let rate = rate_from_body(b"not json");
    assert_eq!(rate.read_limit, 0);
    assert_eq!(rate.write_limit, 0);
}
