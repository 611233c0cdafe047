use oanda_rs::{Endpoint, Environment, resolve};

const ACCOUNT: &str = "101-004-1234567-001";

fn acct() -> String {
    ACCOUNT.to_string()
}

#[test]
fn resolve_is_deterministic() {
    let ep = Endpoint::AccountSummary { account: acct() };
    let a = resolve(Environment::Practice, &ep).unwrap();
    let b = resolve(Environment::Practice, &ep).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a,
        "https://api-fxpractice.oanda.com/v3/accounts/101-004-1234567-001/summary"
    );
}

#[test]
fn live_and_practice_use_different_hosts() {
    let ep = Endpoint::Accounts;
    assert_eq!(
        resolve(Environment::Live, &ep).unwrap(),
        "https://api-fxtrade.oanda.com/v3/accounts"
    );
    assert_eq!(
        resolve(Environment::Practice, &ep).unwrap(),
        "https://api-fxpractice.oanda.com/v3/accounts"
    );
}

#[test]
fn streams_resolve_to_the_stream_host() {
    let pricing = Endpoint::PricingStream { account: acct() };
    let txns = Endpoint::TransactionStream { account: acct() };
    assert!(pricing.is_stream() && txns.is_stream());
    assert!(!Endpoint::Pricing { account: acct() }.is_stream());

    assert_eq!(
        resolve(Environment::Live, &pricing).unwrap(),
        "https://stream-fxtrade.oanda.com/v3/accounts/101-004-1234567-001/pricing/stream"
    );
    assert_eq!(
        resolve(Environment::Practice, &txns).unwrap(),
        "https://stream-fxpractice.oanda.com/v3/accounts/101-004-1234567-001/transactions/stream"
    );
}

#[test]
fn paths_cover_every_resource() {
    let a = acct;
    let cases = [
        (Endpoint::AccountDetails { account: a() }, "/v3/accounts/A"),
        (Endpoint::AccountInstruments { account: a() }, "/v3/accounts/A/instruments"),
        (Endpoint::AccountChanges { account: a() }, "/v3/accounts/A/changes"),
        (
            Endpoint::InstrumentCandles {
                instrument: "EUR_USD".into(),
            },
            "/v3/instruments/EUR_USD/candles",
        ),
        (
            Endpoint::InstrumentOrderBook {
                instrument: "EUR_USD".into(),
            },
            "/v3/instruments/EUR_USD/orderBook",
        ),
        (
            Endpoint::InstrumentPositionBook {
                instrument: "EUR_USD".into(),
            },
            "/v3/instruments/EUR_USD/positionBook",
        ),
        (Endpoint::LatestCandles { account: a() }, "/v3/accounts/A/candles/latest"),
        (
            Endpoint::AccountInstrumentCandles {
                account: a(),
                instrument: "EUR_USD".into(),
            },
            "/v3/accounts/A/instruments/EUR_USD/candles",
        ),
        (Endpoint::PendingOrders { account: a() }, "/v3/accounts/A/pendingOrders"),
        (
            Endpoint::CancelOrder {
                account: a(),
                order: "7".into(),
            },
            "/v3/accounts/A/orders/7/cancel",
        ),
        (
            Endpoint::OrderClientExtensions {
                account: a(),
                order: "7".into(),
            },
            "/v3/accounts/A/orders/7/clientExtensions",
        ),
        (Endpoint::OpenPositions { account: a() }, "/v3/accounts/A/openPositions"),
        (
            Endpoint::ClosePosition {
                account: a(),
                instrument: "EUR_USD".into(),
            },
            "/v3/accounts/A/positions/EUR_USD/close",
        ),
        (Endpoint::OpenTrades { account: a() }, "/v3/accounts/A/openTrades"),
        (
            Endpoint::TradeOrders {
                account: a(),
                trade: "9".into(),
            },
            "/v3/accounts/A/trades/9/orders",
        ),
        (Endpoint::TransactionIdRange { account: a() }, "/v3/accounts/A/transactions/idrange"),
        (Endpoint::TransactionSinceId { account: a() }, "/v3/accounts/A/transactions/sinceid"),
    ];

    for (ep, expected) in cases {
        assert_eq!(ep.path(), expected.replace('A', ACCOUNT), "{ep:?}");
    }
}

#[test]
fn path_parameters_are_percent_encoded() {
    let ep = Endpoint::TradeDetails {
        account: "my account".into(),
        trade: "a/b".into(),
    };
    assert_eq!(
        resolve(Environment::Practice, &ep).unwrap(),
        "https://api-fxpractice.oanda.com/v3/accounts/my%20account/trades/a%2Fb"
    );
}
