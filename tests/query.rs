use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use oanda_rs::core::query::encode;
use oanda_rs::{
    AccountQuery, CandlesQuery, Granularity, LatestCandlesQuery, OrderQuery, OrderState,
    PriceComponent, PricingQuery, StreamQuery, TradeQuery, TransactionQuery, WeeklyAlignment,
};
use rust_decimal::Decimal;

#[test]
fn empty_query_encodes_to_nothing() {
    assert_eq!(encode(&CandlesQuery::new()).unwrap(), "");
    assert_eq!(encode(&OrderQuery::new()).unwrap(), "");
}

#[test]
fn set_fields_are_encoded_in_key_order() {
    let from = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
    let q = CandlesQuery::new()
        .price(PriceComponent::AskBid)
        .granularity(Granularity::M15)
        .between(from, to)
        .alignment_timezone("America/New_York");

    assert_eq!(
        encode(&q).unwrap(),
        "alignmentTimezone=America%2FNew_York&from=2024-05-01T00%3A00%3A00Z&granularity=M15\
         &price=AB&to=2024-05-02T00%3A00%3A00Z"
    );
}

#[test]
fn csv_values_and_renamed_keys() {
    let q = OrderQuery::new()
        .ids(&["1", "2"])
        .state(OrderState::All)
        .before_id("3");
    assert_eq!(encode(&q).unwrap(), "beforeID=3&ids=1%2C2&state=ALL");

    let s = StreamQuery::new().instruments(&["EUR_USD"]).without_snapshot();
    assert_eq!(encode(&s).unwrap(), "instruments=EUR_USD&snapshot=false");
}

#[test]
fn empty_lists_leave_the_key_out() {
    let none: &[&str] = &[];

    assert_eq!(encode(&TransactionQuery::new().types(&[])).unwrap(), "");
    assert_eq!(encode(&OrderQuery::new().ids(none)).unwrap(), "");
    assert_eq!(encode(&TradeQuery::new().ids(none)).unwrap(), "");
    assert_eq!(encode(&AccountQuery::new().instruments(none)).unwrap(), "");
    assert_eq!(encode(&PricingQuery::new().instruments(none)).unwrap(), "");
    assert_eq!(
        encode(&StreamQuery::new().instruments(none).without_snapshot()).unwrap(),
        "snapshot=false"
    );
    let latest =
        LatestCandlesQuery::new().candle_specifications(none, Granularity::M1, PriceComponent::Mid);
    assert_eq!(encode(&latest).unwrap(), "");
}

#[test]
fn populated_candles_query_parses_back_field_for_field() {
    let from = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 5, 2, 12, 30, 0).unwrap();
    let q = CandlesQuery::new()
        .price(PriceComponent::BidAskMid)
        .granularity(Granularity::H4)
        .count(250)
        .between(from, to)
        .smooth()
        .without_include_first()
        .daily_alignment(5)
        .alignment_timezone("Europe/London")
        .weekly_alignment(WeeklyAlignment::Monday)
        .units("2.50".parse::<Decimal>().unwrap());

    let encoded = encode(&q).unwrap();
    let parsed: BTreeMap<String, String> = url::form_urlencoded::parse(encoded.as_bytes())
        .into_owned()
        .collect();

    let expected = [
        ("price", &q.price),
        ("granularity", &q.granularity),
        ("count", &q.count),
        ("from", &q.from),
        ("to", &q.to),
        ("smooth", &q.smooth),
        ("includeFirst", &q.include_first),
        ("dailyAlignment", &q.daily_alignment),
        ("alignmentTimezone", &q.alignment_timezone),
        ("weeklyAlignment", &q.weekly_alignment),
        ("units", &q.units),
    ];
    assert_eq!(parsed.len(), expected.len());
    for (key, field) in expected {
        let field = field.as_deref().unwrap_or_else(|| panic!("{key} was not set"));
        assert_eq!(parsed.get(key).map(String::as_str), Some(field), "{key}");
    }

    assert_eq!(parsed["count"], "250");
    assert_eq!(parsed["smooth"], "true");
    assert_eq!(parsed["includeFirst"], "false");
    assert_eq!(parsed["dailyAlignment"], "5");
    assert_eq!(parsed["weeklyAlignment"], "Monday");
    assert_eq!(parsed["units"], "2.5");
    assert_eq!(parsed["to"], "2024-05-02T12:30:00Z");
}
