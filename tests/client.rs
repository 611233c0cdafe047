mod common;

use common::{ACCOUNT, TOKEN, account_path, client_for, fixture, setup_server};
use httpmock::Method::GET;
use oanda_rs::{Endpoint, Environment, OandaClient, OandaError};
use url::Url;

#[tokio::test]
async fn every_request_carries_auth_and_format_headers() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/accounts")
            .header("authorization", format!("Bearer {TOKEN}"))
            .header("content-type", "application/json")
            .header("accept-datetime-format", "RFC3339");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("accounts"));
    });

    let client = client_for(&server);
    client.accounts().list().await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn error_body_becomes_api_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(account_path("/summary"));
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"errorMessage":"Insufficient authorization to perform request."}"#);
    });

    let client = client_for(&server);
    let err = client.accounts().summary(ACCOUNT).await.unwrap_err();
    mock.assert();

    assert_eq!(err.status(), Some(401));
    match err {
        OandaError::Api {
            status,
            url,
            code,
            message,
        } => {
            assert_eq!(status, 401);
            assert!(url.ends_with("/summary"));
            assert!(code.is_none());
            assert!(message.starts_with("Insufficient authorization"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn plain_error_body_becomes_status_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v3/accounts");
        then.status(503).body("upstream unavailable");
    });

    let client = client_for(&server);
    let err = client.accounts().list().await.unwrap_err();
    mock.assert();

    assert_eq!(err.status(), Some(503));
    match err {
        OandaError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.contains("/v3/accounts"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_data_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v3/accounts");
        then.status(200).body("<html>maintenance</html>");
    });

    let client = client_for(&server);
    let err = client.accounts().list().await.unwrap_err();
    mock.assert();

    assert!(err.status().is_none());
    match err {
        OandaError::Data(msg) => assert!(msg.starts_with("accounts: json parse error")),
        other => panic!("expected Data error, got {other:?}"),
    }
}

#[tokio::test]
async fn base_path_prefix_is_kept() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/proxy/v3/accounts");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("accounts"));
    });

    let base = Url::parse(&format!("{}/proxy/", server.base_url())).unwrap();
    let client = OandaClient::builder()
        .token(TOKEN)
        .base_rest(base)
        .build()
        .unwrap();
    client.accounts().list().await.unwrap();
    mock.assert();
}

#[test]
fn missing_or_blank_token_is_rejected() {
    let err = OandaClient::builder().build().unwrap_err();
    assert!(matches!(err, OandaError::InvalidParams(_)));

    let err = OandaClient::new("   ", Environment::Live).unwrap_err();
    assert!(matches!(err, OandaError::InvalidParams(_)));
}

#[test]
fn defaults_to_practice_hosts() {
    let client = OandaClient::builder().token(TOKEN).build().unwrap();
    assert_eq!(client.environment(), Environment::Practice);

    let url = client.url_for(&Endpoint::Accounts).unwrap();
    assert_eq!(url.as_str(), "https://api-fxpractice.oanda.com/v3/accounts");

    let live = OandaClient::new(TOKEN, Environment::Live).unwrap();
    let stream = live
        .url_for(&Endpoint::PricingStream {
            account: ACCOUNT.into(),
        })
        .unwrap();
    assert_eq!(stream.host_str(), Some("stream-fxtrade.oanda.com"));
}

#[test]
fn debug_output_redacts_the_token() {
    let client = OandaClient::new("super-secret", Environment::Practice).unwrap();
    let dbg = format!("{client:?}");
    assert!(!dbg.contains("super-secret"));
    assert!(dbg.contains("<redacted>"));

    let builder = OandaClient::builder().token("super-secret");
    assert!(!format!("{builder:?}").contains("super-secret"));
}

#[test]
fn environment_parses_from_text() {
    assert_eq!("live".parse::<Environment>().unwrap(), Environment::Live);
    assert_eq!(" Practice ".parse::<Environment>().unwrap(), Environment::Practice);
    assert_eq!("fxtrade".parse::<Environment>().unwrap(), Environment::Live);
    assert!(matches!(
        "staging".parse::<Environment>(),
        Err(OandaError::InvalidParams(_))
    ));
    assert_eq!(Environment::Live.to_string(), "live");
    assert_eq!(Environment::from_live_flag(false), Environment::Practice);
}
