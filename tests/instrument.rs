mod common;

use chrono::{Duration, TimeZone, Utc};
use common::{client_for, dec, fixture, setup_server};
use httpmock::Method::GET;
use oanda_rs::{BookQuery, CandlesQuery, Granularity, PriceComponent, WeeklyAlignment};

#[tokio::test]
async fn candles_send_query_and_parse_ohlc() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/instruments/EUR_USD/candles")
            .query_param("granularity", "H1")
            .query_param("price", "M")
            .query_param("count", "2");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("candles_eur_usd"));
    });

    let client = client_for(&server);
    let q = CandlesQuery::new()
        .granularity(Granularity::H1)
        .price(PriceComponent::Mid)
        .count(2);
    let resp = client.instruments().candles("EUR_USD", &q).await.unwrap();
    mock.assert();

    assert_eq!(resp.instrument, "EUR_USD");
    assert_eq!(resp.granularity, Granularity::H1);
    assert_eq!(resp.candles.len(), 2);

    let first = &resp.candles[0];
    assert!(first.complete);
    assert_eq!(first.volume, 3124);
    let mid = first.mid.unwrap();
    assert_eq!(mid.open, dec("1.0701"));
    assert_eq!(mid.high, dec("1.07188"));
    assert_eq!(mid.close, dec("1.0712"));
    assert!(first.bid.is_none());
    assert!(!resp.candles[1].complete);
}

#[tokio::test]
async fn candle_count_out_of_range_is_clamped_on_the_wire() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/instruments/EUR_USD/candles")
            .query_param("count", "500");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("candles_eur_usd"));
    });

    let client = client_for(&server);
    client
        .instruments()
        .candles("EUR_USD", &CandlesQuery::new().count(10_000))
        .await
        .unwrap();
    mock.assert();
}

#[test]
fn candles_query_clamps_and_overwrites() {
    assert_eq!(CandlesQuery::new().count(0).count.as_deref(), Some("500"));
    assert_eq!(CandlesQuery::new().count(5000).count.as_deref(), Some("5000"));
    assert_eq!(
        CandlesQuery::new().daily_alignment(24).daily_alignment.as_deref(),
        Some("17")
    );
    assert_eq!(
        CandlesQuery::new().daily_alignment(0).daily_alignment.as_deref(),
        Some("0")
    );
    assert_eq!(CandlesQuery::new().units(dec("0.5")).units.as_deref(), Some("1"));

    // later setters win
    let q = CandlesQuery::new()
        .granularity(Granularity::M1)
        .granularity(Granularity::D);
    assert_eq!(q.granularity.as_deref(), Some("D"));
    assert_eq!(
        CandlesQuery::new()
            .weekly_alignment(WeeklyAlignment::Monday)
            .weekly_alignment
            .as_deref(),
        Some("Monday")
    );
}

#[test]
fn reversed_or_future_range_is_ignored() {
    let from = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 5, 3, 0, 0, 0).unwrap();

    let ok = CandlesQuery::new().between(from, to);
    assert_eq!(ok.from.as_deref(), Some("2024-05-02T00:00:00Z"));
    assert_eq!(ok.to.as_deref(), Some("2024-05-03T00:00:00Z"));

    let reversed = CandlesQuery::new().between(to, from);
    assert!(reversed.from.is_none() && reversed.to.is_none());

    let same = CandlesQuery::new().between(from, from);
    assert!(same.from.is_none() && same.to.is_none());

    let future = CandlesQuery::new().between(from, Utc::now() + Duration::days(2));
    assert!(future.from.is_none() && future.to.is_none());
}

#[test]
fn separate_range_setters_apply_the_same_check() {
    let early = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2024, 5, 3, 0, 0, 0).unwrap();

    let ok = CandlesQuery::new().to(late).from(early);
    assert_eq!(ok.from.as_deref(), Some("2024-05-02T00:00:00Z"));
    assert_eq!(ok.to.as_deref(), Some("2024-05-03T00:00:00Z"));

    let reversed = CandlesQuery::new().from(late).to(early);
    assert!(reversed.from.is_none() && reversed.to.is_none());

    let reversed = CandlesQuery::new().to(early).from(late);
    assert!(reversed.from.is_none() && reversed.to.is_none());

    let future = CandlesQuery::new().from(early).to(Utc::now() + Duration::days(2));
    assert!(future.from.is_none() && future.to.is_none());

    let open_ended = CandlesQuery::new().from(early);
    assert_eq!(open_ended.from.as_deref(), Some("2024-05-02T00:00:00Z"));
    assert!(open_ended.to.is_none());
}

#[tokio::test]
async fn order_book_sends_snapshot_time() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/instruments/EUR_USD/orderBook")
            .query_param("time", "2024-05-02T14:00:00Z");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("order_book_eur_usd"));
    });

    let client = client_for(&server);
    let at = Utc.with_ymd_and_hms(2024, 5, 2, 14, 0, 0).unwrap();
    let resp = client
        .instruments()
        .order_book("EUR_USD", &BookQuery::new().time(at))
        .await
        .unwrap();
    mock.assert();

    let book = &resp.order_book;
    assert_eq!(book.time, at);
    assert_eq!(book.bucket_width, dec("0.0005"));
    assert_eq!(book.buckets.len(), 2);
    assert_eq!(book.buckets[1].long_count_percent, dec("0.5263"));
}

#[tokio::test]
async fn position_book_without_time_fetches_latest() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v3/instruments/EUR_USD/positionBook");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("position_book_eur_usd"));
    });

    let client = client_for(&server);
    let future = Utc::now() + Duration::hours(1);
    let q = BookQuery::new().time(future);
    assert!(q.time.is_none());

    let resp = client
        .instruments()
        .position_book("EUR_USD", &q)
        .await
        .unwrap();
    mock.assert();
    assert_eq!(resp.position_book.price, dec("1.0712"));
}
