use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::ForecastPoint;
use crate::{log_debug, log_error, log_info, log_trace};

/// Notice shown when the forecast could not be produced.
pub const FORECAST_FAILED: &str = "Failed to fetch prediction data.";

/// Identifies one forecast request. A completion is applied only while its
/// ticket is the one the loader is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastTicket(u64);

/// Forecast overlay lifecycle. Requesting and Ready are one enum so the
/// overlay can never be in flight and shown at the same time.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastState {
    Idle,
    Requesting(ForecastTicket),
    Ready(Vec<ForecastPoint>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastLoader {
    state: ForecastState,
    issued: u64,
}

impl Default for ForecastLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastLoader {
    pub fn new() -> Self {
        Self { state: ForecastState::Idle, issued: 0 }
    }

    pub fn state(&self) -> &ForecastState {
        &self.state
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self.state, ForecastState::Requesting(_))
    }

    /// Start a request from `Idle` or `Failed`. Returns `None` while a
    /// request is in flight or a forecast is already shown.
    pub fn request(&mut self) -> Option<ForecastTicket> {
        match self.state {
            ForecastState::Idle | ForecastState::Failed(_) => {
                self.issued += 1;
                let ticket = ForecastTicket(self.issued);
                self.state = ForecastState::Requesting(ticket);
                log_trace!(LogComponent::Application("ForecastLoader"), "issued {:?}", ticket);
                Some(ticket)
            }
            ForecastState::Requesting(_) | ForecastState::Ready(_) => None,
        }
    }

    /// Apply a finished request. Returns `false` when the ticket is stale
    /// (the loader was reset or re-requested since) and nothing changed.
    pub fn complete(&mut self, ticket: ForecastTicket, result: AppResult<Vec<ForecastPoint>>) -> bool {
        if self.state != ForecastState::Requesting(ticket) {
            log_debug!(LogComponent::Application("ForecastLoader"), "ignoring stale forecast {:?}", ticket);
            return false;
        }

        self.state = match result {
            Ok(points) if points.is_empty() => {
                log_error!(LogComponent::Application("ForecastLoader"), "forecast returned no points");
                ForecastState::Failed(FORECAST_FAILED.to_string())
            }
            Ok(points) => {
                log_info!(LogComponent::Application("ForecastLoader"), "forecast ready: {} points", points.len());
                ForecastState::Ready(points)
            }
            Err(err) => {
                log_error!(LogComponent::Application("ForecastLoader"), "forecast failed: {}", err);
                ForecastState::Failed(FORECAST_FAILED.to_string())
            }
        };
        true
    }

    /// Drop any forecast and forget the in-flight request.
    pub fn reset(&mut self) {
        self.state = ForecastState::Idle;
    }

    /// Points to overlay; empty unless `Ready`.
    pub fn points(&self) -> &[ForecastPoint] {
        match &self.state {
            ForecastState::Ready(points) => points,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ForecastState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
