#![allow(dead_code)]

use httpmock::MockServer;
use oanda_rs::OandaClient;
use std::{fs, path::Path};
use url::Url;

pub const TOKEN: &str = "test-token";
pub const ACCOUNT: &str = "101-004-1234567-001";

pub fn setup_server() -> MockServer {
    init_tracing();
    MockServer::start()
}

/// A client whose REST and stream bases both point at the mock server.
pub fn client_for(server: &MockServer) -> OandaClient {
    let base = Url::parse(&server.base_url()).unwrap();
    OandaClient::builder()
        .token(TOKEN)
        .base_rest(base.clone())
        .base_stream(base)
        .build()
        .unwrap()
}

pub fn account_path(rest: &str) -> String {
    format!("/v3/accounts/{ACCOUNT}{rest}")
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn dec(s: &str) -> rust_decimal::Decimal {
    s.parse().unwrap()
}

#[cfg(feature = "tracing-subscriber")]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(not(feature = "tracing-subscriber"))]
fn init_tracing() {}
