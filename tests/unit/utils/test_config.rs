use appnexus_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("APN_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("APN_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("APN_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("APN_MISSING_VAR");
    }
    let result: String = get_env_or_default("APN_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("APN_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("APN_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("APN_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_treats_blank_as_missing() {
    unsafe {
        env::set_var("APN_TEST_VAR_BLANK", "   ");
        let result: String = get_env_or_default("APN_TEST_VAR_BLANK", "fallback".to_string());
        assert_eq!(result, "fallback");
        env::remove_var("APN_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("APN_TEST_VAR_SOME", " 42 ");
        let result: Option<i32> = get_env_or_none("APN_TEST_VAR_SOME");
        assert_eq!(result, Some(42));
        env::remove_var("APN_TEST_VAR_SOME");

        let missing: Option<i32> = get_env_or_none("APN_TEST_VAR_SOME");
        assert_eq!(missing, None);
    }
}
