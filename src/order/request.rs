use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{ClientExtensions, OrderPositionFill, OrderType, TimeInForce, TriggerCondition};

/// Take profit, stop loss or trailing stop attached to an order and created when it fills.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnFillDetails {
    price: Option<Decimal>,
    distance: Option<Decimal>,
    time_in_force: Option<TimeInForce>,
    gtd_time: Option<DateTime<Utc>>,
    client_extensions: Option<ClientExtensions>,
}

impl OnFillDetails {
    /// Trigger at an absolute price.
    pub fn at_price(price: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    /// Trigger at a price distance from the fill.
    pub fn at_distance(distance: Decimal) -> Self {
        Self {
            distance: Some(distance),
            ..Self::default()
        }
    }

    /// Only `GTC`, `GTD` and `GFD` are accepted here; anything else becomes `GTC`.
    #[must_use]
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Cancellation time when the time-in-force is `GTD`.
    #[must_use]
    pub fn gtd_time(mut self, t: DateTime<Utc>) -> Self {
        self.gtd_time = Some(t);
        self
    }

    #[must_use]
    pub fn client_extensions(mut self, ext: ClientExtensions) -> Self {
        self.client_extensions = Some(ext);
        self
    }

    pub(crate) fn wire(&self, slot: OnFillSlot) -> OnFillWire<'_> {
        let tif = match self.time_in_force {
            Some(tif @ (TimeInForce::Gtc | TimeInForce::Gtd | TimeInForce::Gfd)) => tif,
            _ => TimeInForce::Gtc,
        };
        let (price, distance) = match slot {
            OnFillSlot::TakeProfit => (self.price, None),
            OnFillSlot::TrailingStopLoss => (None, self.distance),
            OnFillSlot::StopLoss if self.distance.is_some() => (None, self.distance),
            OnFillSlot::StopLoss => (self.price, None),
        };
        OnFillWire {
            price,
            distance,
            time_in_force: tif,
            gtd_time: self.gtd_time.filter(|_| tif == TimeInForce::Gtd),
            client_extensions: self.client_extensions.as_ref(),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) enum OnFillSlot {
    TakeProfit,
    StopLoss,
    TrailingStopLoss,
}

#[derive(Serialize)]
pub(crate) struct OnFillWire<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<Decimal>,
    #[serde(rename = "timeInForce")]
    time_in_force: TimeInForce,
    #[serde(rename = "gtdTime", skip_serializing_if = "Option::is_none")]
    gtd_time: Option<DateTime<Utc>>,
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    client_extensions: Option<&'a ClientExtensions>,
}

/// An order to submit, built from one of the per-type constructors.
///
/// Each constructor fills in the defaults for its type. Fields that do not apply to the
/// type are dropped when the request is serialized, so setting them is harmless.
///
/// ```
/// use oanda_rs::order::{OnFillDetails, OrderRequest};
/// use rust_decimal::Decimal;
///
/// let req = OrderRequest::market("EUR_USD", Decimal::from(100))
///     .stop_loss_on_fill(OnFillDetails::at_distance(Decimal::new(50, 4)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    kind: OrderType,
    instrument: Option<String>,
    units: Option<Decimal>,
    price: Option<Decimal>,
    price_bound: Option<Decimal>,
    distance: Option<Decimal>,
    time_in_force: TimeInForce,
    gtd_time: Option<DateTime<Utc>>,
    position_fill: Option<OrderPositionFill>,
    trigger_condition: Option<TriggerCondition>,
    trade_id: Option<String>,
    client_trade_id: Option<String>,
    take_profit_on_fill: Option<OnFillDetails>,
    stop_loss_on_fill: Option<OnFillDetails>,
    guaranteed_stop_loss_on_fill: Option<OnFillDetails>,
    trailing_stop_loss_on_fill: Option<OnFillDetails>,
    client_extensions: Option<ClientExtensions>,
    trade_client_extensions: Option<ClientExtensions>,
}

impl OrderRequest {
    fn blank(kind: OrderType, time_in_force: TimeInForce) -> Self {
        Self {
            kind,
            instrument: None,
            units: None,
            price: None,
            price_bound: None,
            distance: None,
            time_in_force,
            gtd_time: None,
            position_fill: None,
            trigger_condition: None,
            trade_id: None,
            client_trade_id: None,
            take_profit_on_fill: None,
            stop_loss_on_fill: None,
            guaranteed_stop_loss_on_fill: None,
            trailing_stop_loss_on_fill: None,
            client_extensions: None,
            trade_client_extensions: None,
        }
    }

    fn entry(kind: OrderType, instrument: &str, units: Decimal, price: Decimal) -> Self {
        let mut o = Self::blank(kind, TimeInForce::Gtc);
        o.instrument = Some(instrument.to_string());
        o.units = Some(units);
        o.price = Some(price);
        o.position_fill = Some(OrderPositionFill::Default);
        o.trigger_condition = Some(TriggerCondition::Default);
        o
    }

    fn dependent(kind: OrderType, trade_id: &str) -> Self {
        let mut o = Self::blank(kind, TimeInForce::Gtc);
        o.trade_id = Some(trade_id.to_string());
        o.trigger_condition = Some(TriggerCondition::Default);
        o
    }

    /// Fill immediately at the current price. Positive units buy, negative units sell.
    pub fn market(instrument: &str, units: Decimal) -> Self {
        let mut o = Self::blank(OrderType::Market, TimeInForce::Fok);
        o.instrument = Some(instrument.to_string());
        o.units = Some(units);
        o.position_fill = Some(OrderPositionFill::Default);
        o
    }

    /// Fill at `price` or better.
    pub fn limit(instrument: &str, units: Decimal, price: Decimal) -> Self {
        Self::entry(OrderType::Limit, instrument, units, price)
    }

    /// Fill at `price` or worse, once the market reaches it.
    pub fn stop(instrument: &str, units: Decimal, price: Decimal) -> Self {
        Self::entry(OrderType::Stop, instrument, units, price)
    }

    /// Become a market order once the market touches `price`.
    pub fn market_if_touched(instrument: &str, units: Decimal, price: Decimal) -> Self {
        Self::entry(OrderType::MarketIfTouched, instrument, units, price)
    }

    /// Close `trade_id` when the price reaches `price`.
    pub fn take_profit(trade_id: &str, price: Decimal) -> Self {
        let mut o = Self::dependent(OrderType::TakeProfit, trade_id);
        o.price = Some(price);
        o
    }

    /// Close `trade_id` at `price`.
    ///
    /// Use [`distance`](Self::distance) to trigger relative to the fill instead.
    pub fn stop_loss(trade_id: &str, price: Decimal) -> Self {
        let mut o = Self::dependent(OrderType::StopLoss, trade_id);
        o.price = Some(price);
        o
    }

    /// A stop loss that is filled at exactly `price`, for a premium.
    pub fn guaranteed_stop_loss(trade_id: &str, price: Decimal) -> Self {
        let mut o = Self::dependent(OrderType::GuaranteedStopLoss, trade_id);
        o.price = Some(price);
        o
    }

    /// A stop loss that follows the market at `distance`.
    pub fn trailing_stop_loss(trade_id: &str, distance: Decimal) -> Self {
        let mut o = Self::dependent(OrderType::TrailingStopLoss, trade_id);
        o.distance = Some(distance);
        o
    }

    pub const fn kind(&self) -> OrderType {
        self.kind
    }

    #[must_use]
    pub const fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = tif;
        self
    }

    /// Cancellation time, sent only with a `GTD` time-in-force.
    #[must_use]
    pub fn gtd_time(mut self, t: DateTime<Utc>) -> Self {
        self.gtd_time = Some(t);
        self
    }

    /// Worst acceptable fill price for market, stop and market-if-touched orders.
    #[must_use]
    pub fn price_bound(mut self, bound: Decimal) -> Self {
        self.price_bound = Some(bound);
        self
    }

    /// Price distance for stop loss orders; takes precedence over the price.
    #[must_use]
    pub fn distance(mut self, distance: Decimal) -> Self {
        self.distance = Some(distance);
        self
    }

    #[must_use]
    pub fn position_fill(mut self, fill: OrderPositionFill) -> Self {
        self.position_fill = Some(fill);
        self
    }

    #[must_use]
    pub fn trigger_condition(mut self, cond: TriggerCondition) -> Self {
        self.trigger_condition = Some(cond);
        self
    }

    /// Identify the target trade by its client ID instead of (or as well as) its trade ID.
    #[must_use]
    pub fn client_trade_id(mut self, id: impl Into<String>) -> Self {
        self.client_trade_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn take_profit_on_fill(mut self, details: OnFillDetails) -> Self {
        self.take_profit_on_fill = Some(details);
        self
    }

    #[must_use]
    pub fn stop_loss_on_fill(mut self, details: OnFillDetails) -> Self {
        self.stop_loss_on_fill = Some(details);
        self
    }

    #[must_use]
    pub fn guaranteed_stop_loss_on_fill(mut self, details: OnFillDetails) -> Self {
        self.guaranteed_stop_loss_on_fill = Some(details);
        self
    }

    #[must_use]
    pub fn trailing_stop_loss_on_fill(mut self, details: OnFillDetails) -> Self {
        self.trailing_stop_loss_on_fill = Some(details);
        self
    }

    #[must_use]
    pub fn client_extensions(mut self, ext: ClientExtensions) -> Self {
        self.client_extensions = Some(ext);
        self
    }

    /// Extensions for the trade this order opens.
    #[must_use]
    pub fn trade_client_extensions(mut self, ext: ClientExtensions) -> Self {
        self.trade_client_extensions = Some(ext);
        self
    }

    /// The wire shape of this order, with fields that do not apply to its type removed.
    fn wire(&self) -> OrderWire<'_> {
        let mut w = OrderWire {
            kind: self.kind,
            instrument: self.instrument.as_deref(),
            units: self.units,
            price: self.price,
            price_bound: self.price_bound,
            distance: self.distance,
            time_in_force: self.time_in_force,
            gtd_time: self.gtd_time.filter(|_| self.time_in_force == TimeInForce::Gtd),
            position_fill: self.position_fill,
            trigger_condition: self.trigger_condition,
            trade_id: self.trade_id.as_deref(),
            client_trade_id: self.client_trade_id.as_deref(),
            take_profit_on_fill: self
                .take_profit_on_fill
                .as_ref()
                .map(|d| d.wire(OnFillSlot::TakeProfit)),
            stop_loss_on_fill: self
                .stop_loss_on_fill
                .as_ref()
                .map(|d| d.wire(OnFillSlot::StopLoss)),
            guaranteed_stop_loss_on_fill: self
                .guaranteed_stop_loss_on_fill
                .as_ref()
                .map(|d| d.wire(OnFillSlot::StopLoss)),
            trailing_stop_loss_on_fill: self
                .trailing_stop_loss_on_fill
                .as_ref()
                .map(|d| d.wire(OnFillSlot::TrailingStopLoss)),
            client_extensions: self.client_extensions.as_ref(),
            trade_client_extensions: self.trade_client_extensions.as_ref(),
        };

        if self.kind.is_dependent() {
            w.instrument = None;
            w.units = None;
            w.price_bound = None;
            w.position_fill = None;
            w.take_profit_on_fill = None;
            w.stop_loss_on_fill = None;
            w.guaranteed_stop_loss_on_fill = None;
            w.trailing_stop_loss_on_fill = None;
            w.trade_client_extensions = None;
            match self.kind {
                OrderType::TakeProfit => w.distance = None,
                OrderType::TrailingStopLoss => w.price = None,
                _ if w.distance.is_some() => w.price = None,
                _ => {}
            }
        } else {
            w.trade_id = None;
            w.client_trade_id = None;
            w.distance = None;
            match self.kind {
                OrderType::Market => {
                    w.price = None;
                    w.trigger_condition = None;
                }
                OrderType::Limit => w.price_bound = None,
                _ => {}
            }
        }
        w
    }
}

impl Serialize for OrderRequest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Envelope<'a> {
            order: OrderWire<'a>,
        }
        Envelope { order: self.wire() }.serialize(serializer)
    }
}

#[derive(Serialize)]
struct OrderWire<'a> {
    #[serde(rename = "type")]
    kind: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    instrument: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    units: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<Decimal>,
    #[serde(rename = "priceBound", skip_serializing_if = "Option::is_none")]
    price_bound: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<Decimal>,
    #[serde(rename = "timeInForce")]
    time_in_force: TimeInForce,
    #[serde(rename = "gtdTime", skip_serializing_if = "Option::is_none")]
    gtd_time: Option<DateTime<Utc>>,
    #[serde(rename = "positionFill", skip_serializing_if = "Option::is_none")]
    position_fill: Option<OrderPositionFill>,
    #[serde(rename = "triggerCondition", skip_serializing_if = "Option::is_none")]
    trigger_condition: Option<TriggerCondition>,
    #[serde(rename = "tradeID", skip_serializing_if = "Option::is_none")]
    trade_id: Option<&'a str>,
    #[serde(rename = "clientTradeID", skip_serializing_if = "Option::is_none")]
    client_trade_id: Option<&'a str>,
    #[serde(rename = "takeProfitOnFill", skip_serializing_if = "Option::is_none")]
    take_profit_on_fill: Option<OnFillWire<'a>>,
    #[serde(rename = "stopLossOnFill", skip_serializing_if = "Option::is_none")]
    stop_loss_on_fill: Option<OnFillWire<'a>>,
    #[serde(rename = "guaranteedStopLossOnFill", skip_serializing_if = "Option::is_none")]
    guaranteed_stop_loss_on_fill: Option<OnFillWire<'a>>,
    #[serde(rename = "trailingStopLossOnFill", skip_serializing_if = "Option::is_none")]
    trailing_stop_loss_on_fill: Option<OnFillWire<'a>>,
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    client_extensions: Option<&'a ClientExtensions>,
    #[serde(rename = "tradeClientExtensions", skip_serializing_if = "Option::is_none")]
    trade_client_extensions: Option<&'a ClientExtensions>,
}
