use appnexus_client::application::client::Client;
use appnexus_client::application::config::Config;

#[tokio::test]
async fn test_client_new_does_not_log_in() {
    let client = Client::new(Config::with_credentials("http://host/", "user", "pass")).unwrap();
    assert!(!client.http_client().is_authenticated().await);
    assert_eq!(client.config().credentials.username, "user");
    assert_eq!(client.rate().await.write_limit, 0);
}

#[test]
fn test_client_new_rejects_bad_base_url() {
    let result = Client::new(Config::with_credentials("::bad::", "user", "pass"));
    assert!(result.is_err());
}

#[test]
fn test_rate_limiter_blocking_snapshot() {
    use appnexus_client::application::rate_limiter::RateLimiter;
    use appnexus_client::model::rate::Rate;
    use reqwest::Method;

    let limiter = RateLimiter::with_rate(Rate {
        writes: 60,
        write_limit: 60,
        write_limit_seconds: 60,
        ..Rate::default()
    });

    assert!(tokio_test::block_on(limiter.check(&Method::GET)));
    assert!(!tokio_test::block_on(limiter.check(&Method::DELETE)));
    assert_eq!(tokio_test::block_on(limiter.snapshot()).writes, 60);
}
