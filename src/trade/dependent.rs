use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::order::{OnFillDetails, OnFillSlot};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Change {
    Set(OnFillDetails),
    Cancel,
}

/// Create, replace or cancel the take profit and stop loss orders of an open trade.
///
/// Orders left untouched are not sent and stay as they are. `cancel_*` sends an
/// explicit `null`, which removes that order from the trade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependentOrders {
    take_profit: Option<Change>,
    stop_loss: Option<Change>,
    trailing_stop_loss: Option<Change>,
    guaranteed_stop_loss: Option<Change>,
}

impl DependentOrders {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn take_profit(mut self, details: OnFillDetails) -> Self {
        self.take_profit = Some(Change::Set(details));
        self
    }

    #[must_use]
    pub fn stop_loss(mut self, details: OnFillDetails) -> Self {
        self.stop_loss = Some(Change::Set(details));
        self
    }

    #[must_use]
    pub fn trailing_stop_loss(mut self, details: OnFillDetails) -> Self {
        self.trailing_stop_loss = Some(Change::Set(details));
        self
    }

    #[must_use]
    pub fn guaranteed_stop_loss(mut self, details: OnFillDetails) -> Self {
        self.guaranteed_stop_loss = Some(Change::Set(details));
        self
    }

    #[must_use]
    pub fn cancel_take_profit(mut self) -> Self {
        self.take_profit = Some(Change::Cancel);
        self
    }

    #[must_use]
    pub fn cancel_stop_loss(mut self) -> Self {
        self.stop_loss = Some(Change::Cancel);
        self
    }

    #[must_use]
    pub fn cancel_trailing_stop_loss(mut self) -> Self {
        self.trailing_stop_loss = Some(Change::Cancel);
        self
    }

    #[must_use]
    pub fn cancel_guaranteed_stop_loss(mut self) -> Self {
        self.guaranteed_stop_loss = Some(Change::Cancel);
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.take_profit.is_none()
            && self.stop_loss.is_none()
            && self.trailing_stop_loss.is_none()
            && self.guaranteed_stop_loss.is_none()
    }
}

impl Serialize for DependentOrders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = [
            ("takeProfit", &self.take_profit, OnFillSlot::TakeProfit),
            ("stopLoss", &self.stop_loss, OnFillSlot::StopLoss),
            ("trailingStopLoss", &self.trailing_stop_loss, OnFillSlot::TrailingStopLoss),
            ("guaranteedStopLoss", &self.guaranteed_stop_loss, OnFillSlot::StopLoss),
        ];

        let mut map = serializer.serialize_map(None)?;
        for (key, change, slot) in entries {
            match change {
                Some(Change::Set(details)) => map.serialize_entry(key, &details.wire(slot))?,
                Some(Change::Cancel) => map.serialize_entry(key, &Option::<()>::None)?,
                None => {}
            }
        }
        map.end()
    }
}
