use appnexus_client::model::rate::{Rate, RateClass};
use chrono::{TimeDelta, Utc};
use reqwest::Method;
use std::time::Duration;

fn exhausted(limit_seconds: u32) -> Rate {
    Rate {
        reads: 100,
        read_limit: 100,
        read_limit_seconds: limit_seconds,
        writes: 60,
        write_limit: 60,
        write_limit_seconds: limit_seconds,
        ..Rate::default()
    }
}

#[test]
fn test_wait_duration_is_bounded_by_window() {
    let rate = exhausted(60);
    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
        let wait = rate.wait_duration(&method);
        assert!(wait <= Duration::from_secs(60), "{method}: {wait:?}");
        assert!(wait > Duration::from_secs(59), "{method}: {wait:?}");
    }
}

#[test]
fn test_wait_duration_zero_under_limit() {
    let rate = Rate {
        reads: 99,
        read_limit: 100,
        read_limit_seconds: 60,
        writes: 0,
        write_limit: 60,
        write_limit_seconds: 60,
        ..Rate::default()
    };
    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
        assert_eq!(rate.wait_duration(&method), Duration::ZERO);
    }
}

#[test]
fn test_wait_duration_zero_after_window() {
    let rate = Rate {
        read_window_start: Utc::now() - TimeDelta::seconds(120),
        write_window_start: Utc::now() - TimeDelta::seconds(120),
        ..exhausted(60)
    };
    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
        assert_eq!(rate.wait_duration(&method), Duration::ZERO);
    }
}

#[test]
fn test_read_and_write_are_independent() {
    let rate = Rate {
        writes: 0,
        ..exhausted(10)
    };
    let now = rate.read_window_start + TimeDelta::seconds(4);
    assert_eq!(
        rate.wait_duration_at(&Method::GET, now),
        Duration::from_secs(6)
    );
    assert_eq!(rate.wait_duration_at(&Method::POST, now), Duration::ZERO);
    assert_eq!(rate.wait_duration_at(&Method::DELETE, now), Duration::ZERO);
}

#[test]
fn test_unknown_verbs_count_as_writes() {
    assert_eq!(RateClass::from_method(&Method::PATCH), RateClass::Write);
    assert_eq!(RateClass::from_method(&Method::HEAD), RateClass::Read);
}

#[test]
fn test_default_rate_has_no_limits() {
    let rate = Rate::default();
    assert!(rate.is_unlimited(RateClass::Read));
    assert!(rate.is_unlimited(RateClass::Write));
    assert!(!rate.is_exhausted(RateClass::Read));
}

#[test]
fn test_rate_deserializes_partial_block() {
    let rate: Rate = serde_json::from_str(r#"{"reads":5,"read_limit":100}"#).unwrap();
    assert_eq!(rate.reads, 5);
    assert_eq!(rate.read_limit, 100);
    assert_eq!(rate.write_limit, 0);
}

#[test]
fn test_rate_serialization_skips_window_start() {
    let value = serde_json::to_value(Rate::default()).unwrap();
    assert!(value.get("read_window_start").is_none());
    assert!(value.get("write_window_start").is_none());
    assert!(value.get("read_limit").is_some());
}

#[test]
fn test_wait_covers_rest_of_running_window() {
    let started = Utc::now() - TimeDelta::seconds(59);
    let previous = Rate {
        reads: 99,
        read_limit: 100,
        read_limit_seconds: 60,
        read_window_start: started,
        ..Rate::default()
    };
    let mut latest = Rate {
        reads: 100,
        read_limit: 100,
        read_limit_seconds: 60,
        ..Rate::default()
    };

    latest.carry_windows(&previous);
    let wait = latest.wait_duration(&Method::GET);
    assert!(wait <= Duration::from_secs(1), "waited {wait:?}");
}
