mod api;
mod model;

pub use model::{
    ClosePositionResponse, Position, PositionResponse, PositionSideDetails, PositionsResponse,
};

use serde::Serialize;

use crate::core::{CloseUnits, OandaClient, OandaError, PositionSide};

/// How much of each side of a position to close.
///
/// At least one side must be set. Unit counts must be positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PositionCloseout {
    #[serde(rename = "longUnits", skip_serializing_if = "Option::is_none")]
    pub long_units: Option<CloseUnits>,
    #[serde(rename = "shortUnits", skip_serializing_if = "Option::is_none")]
    pub short_units: Option<CloseUnits>,
}

impl PositionCloseout {
    /// Close `units` of one side.
    pub fn side(side: PositionSide, units: CloseUnits) -> Self {
        Self::default().with_side(side, units)
    }

    /// Close the whole long side.
    pub fn all_long() -> Self {
        Self::side(PositionSide::Long, CloseUnits::All)
    }

    /// Close the whole short side.
    pub fn all_short() -> Self {
        Self::side(PositionSide::Short, CloseUnits::All)
    }

    /// Set (or overwrite) the units for one side.
    #[must_use]
    pub fn with_side(mut self, side: PositionSide, units: CloseUnits) -> Self {
        match side {
            PositionSide::Long => self.long_units = Some(units),
            PositionSide::Short => self.short_units = Some(units),
        }
        self
    }

    pub(crate) fn validate(self) -> Result<Self, OandaError> {
        if self.long_units.is_none() && self.short_units.is_none() {
            return Err(OandaError::InvalidParams(
                "a position closeout needs long or short units".into(),
            ));
        }
        Ok(Self {
            long_units: self.long_units.map(CloseUnits::validate).transpose()?,
            short_units: self.short_units.map(CloseUnits::validate).transpose()?,
        })
    }
}

/// Position endpoints for one client.
#[derive(Debug, Clone, Copy)]
pub struct PositionApi<'a> {
    client: &'a OandaClient,
}

impl OandaClient {
    /// Positions per instrument.
    pub const fn positions(&self) -> PositionApi<'_> {
        PositionApi { client: self }
    }
}

impl PositionApi<'_> {
    /// Every position the account has ever held, open or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list(&self, account: &str) -> Result<PositionsResponse, OandaError> {
        api::fetch_list(self.client, account).await
    }

    /// Positions with at least one open trade.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn open(&self, account: &str) -> Result<PositionsResponse, OandaError> {
        api::fetch_open(self.client, account).await
    }

    /// The position for one instrument.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn details(
        &self,
        account: &str,
        instrument: &str,
    ) -> Result<PositionResponse, OandaError> {
        api::fetch_details(self.client, account, instrument).await
    }

    /// Close out one or both sides of the position for `instrument`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParams` if no side is set or a unit count is not positive,
    /// otherwise an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn close(
        &self,
        account: &str,
        instrument: &str,
        closeout: PositionCloseout,
    ) -> Result<ClosePositionResponse, OandaError> {
        let closeout = closeout.validate()?;
        api::close(self.client, account, instrument, &closeout).await
    }
}
