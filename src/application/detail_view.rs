//! State of the instrument detail page.
//!
//! The model owns everything the page shows and is replaced piecemeal by
//! the view as fetches complete. Every fetch is issued with a ticket; a
//! result whose ticket no longer matches the current symbol or range is
//! dropped, so a slow response for a previous symbol cannot overwrite the
//! current one.

use super::forecast_loader::{ForecastLoader, ForecastState, ForecastTicket};
use super::load_state::LoadState;
use crate::config::AppConfig;
use crate::domain::chart::{self, RenderPoint, TimeRange};
use crate::domain::display::{self, ChangeDisplay, ColorToken};
use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{ForecastPoint, KeyStatistics, Price, StockDetail, Symbol};
use crate::{log_debug, log_error};

/// Notice shown when the detail payload could not be loaded.
pub const DETAIL_FAILED: &str = "Failed to load stock data.";

/// Issued by [`DetailViewModel::select_symbol`]; the detail response must
/// present it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub symbol: Symbol,
    generation: u64,
}

/// Everything needed to fire a forecast fetch for the current symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    pub symbol: Symbol,
    pub days: usize,
    pub ticket: ForecastTicket,
}

/// Price and change shown next to the instrument name.
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub close: Price,
    pub change: ChangeDisplay,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailViewModel {
    symbol: Option<Symbol>,
    generation: u64,
    detail: LoadState<StockDetail>,
    range: TimeRange,
    forecast: ForecastLoader,
    default_range: TimeRange,
    forecast_days: usize,
}

impl DetailViewModel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            symbol: None,
            generation: 0,
            detail: LoadState::Loading,
            range: config.default_range,
            forecast: ForecastLoader::new(),
            default_range: config.default_range,
            forecast_days: config.forecast_days,
        }
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    pub fn detail(&self) -> &LoadState<StockDetail> {
        &self.detail
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn forecast(&self) -> &ForecastState {
        self.forecast.state()
    }

    pub fn forecast_error(&self) -> Option<&str> {
        self.forecast.error()
    }

    pub fn forecast_is_requesting(&self) -> bool {
        self.forecast.is_requesting()
    }

    /// Switch to `symbol`: drops the loaded detail and any forecast, restores
    /// the default range and invalidates every outstanding ticket.
    pub fn select_symbol(&mut self, symbol: Symbol) -> DetailTicket {
        self.generation += 1;
        self.symbol = Some(symbol.clone());
        self.detail = LoadState::Loading;
        self.range = self.default_range;
        self.forecast.reset();
        DetailTicket { symbol, generation: self.generation }
    }

    /// Apply a detail response. Returns `false` for a stale ticket.
    pub fn apply_detail(&mut self, ticket: &DetailTicket, result: AppResult<StockDetail>) -> bool {
        if ticket.generation != self.generation {
            log_debug!(
                LogComponent::Application("DetailView"),
                "dropping late detail for {} (generation {} != {})",
                ticket.symbol,
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.detail = match result {
            Ok(detail) if detail.has_history() => LoadState::Loaded(detail),
            Ok(_) => LoadState::Empty,
            Err(err) => {
                log_error!(LogComponent::Application("DetailView"), "detail for {} failed: {}", ticket.symbol, err);
                LoadState::Failed(DETAIL_FAILED.to_string())
            }
        };
        true
    }

    /// Change the lookback window. Any forecast, shown or in flight, is
    /// dropped. Re-selecting the current range is a no-op and returns
    /// `false`; a forecast in flight stays valid and must not be cancelled.
    pub fn select_range(&mut self, range: TimeRange) -> bool {
        if range == self.range {
            return false;
        }
        self.range = range;
        self.forecast.reset();
        true
    }

    /// Start a forecast for the loaded symbol. `None` when there is nothing
    /// loaded or the loader is busy or already showing a forecast.
    pub fn request_forecast(&mut self) -> Option<ForecastRequest> {
        self.detail.loaded()?;
        let symbol = self.symbol.clone()?;
        let ticket = self.forecast.request()?;
        Some(ForecastRequest { symbol, days: self.forecast_days, ticket })
    }

    /// Apply a forecast response. Returns `false` when it arrived for a
    /// symbol or range that is no longer selected.
    pub fn apply_forecast(&mut self, request: &ForecastRequest, result: AppResult<Vec<ForecastPoint>>) -> bool {
        if self.symbol.as_ref() != Some(&request.symbol) {
            return false;
        }
        self.forecast.complete(request.ticket, result)
    }

    /// Series for the chart: the selected window plus the forecast, if any.
    pub fn render_points(&self) -> Vec<RenderPoint> {
        match self.detail.loaded() {
            Some(detail) => chart::assemble(&detail.prices, self.range.window_len(), self.forecast.points()),
            None => Vec::new(),
        }
    }

    pub fn headline(&self) -> Option<Headline> {
        let latest = self.detail.loaded()?.latest()?;
        Some(Headline { close: latest.close, change: display::derive_change(latest.change_rate) })
    }

    pub fn key_statistics(&self) -> Option<KeyStatistics> {
        let detail = self.detail.loaded()?;
        Some(KeyStatistics::from_latest(&detail.info, detail.latest()))
    }

    /// Chart stroke follows the latest day's move.
    pub fn chart_color(&self) -> ColorToken {
        let rate = self.detail.loaded().and_then(|d| d.latest()).and_then(|p| p.change_rate);
        display::derive_change(rate).color
    }
}
