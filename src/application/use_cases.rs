use super::detail_view::{DetailTicket, ForecastRequest};
use super::load_state::LoadState;
use crate::config::AppConfig;
use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{ForecastPoint, IndexSnapshot, MarketDataRepository, RankingRow, StockDetail};
use crate::{log_error, log_info};

/// Notice shown when the ranking grid could not be loaded.
pub const RANKING_FAILED: &str = "Failed to load market data.";
/// Hint shown under [`RANKING_FAILED`].
pub const RANKING_FAILED_HINT: &str = "Please ensure the backend server is running.";

/// Fetch orchestration for the dashboard views, over any repository.
pub struct MarketDashboardUseCase<R: MarketDataRepository> {
    repository: R,
    config: AppConfig,
}

impl<R: MarketDataRepository> MarketDashboardUseCase<R> {
    pub fn new(repository: R, config: AppConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Ranking grid state for the configured limit.
    pub async fn load_ranking(&self) -> LoadState<Vec<RankingRow>> {
        match self.repository.ranking(self.config.ranking_limit).await {
            Ok(rows) => {
                log_info!(LogComponent::Application("Dashboard"), "ranking loaded: {} rows", rows.len());
                LoadState::from_items(rows)
            }
            Err(err) => {
                log_error!(LogComponent::Application("Dashboard"), "ranking failed: {}", err);
                LoadState::Failed(RANKING_FAILED.to_string())
            }
        }
    }

    /// Index banner state; the banner hides itself unless `Loaded`.
    pub async fn load_indices(&self) -> LoadState<Vec<IndexSnapshot>> {
        match self.repository.major_indices().await {
            Ok(indices) => LoadState::from_items(indices),
            Err(err) => {
                log_error!(LogComponent::Application("Dashboard"), "indices failed: {}", err);
                LoadState::Failed(err.to_string())
            }
        }
    }

    /// Fetch the detail for a ticket issued by
    /// [`DetailViewModel::select_symbol`](super::DetailViewModel::select_symbol).
    pub async fn fetch_detail(&self, ticket: &DetailTicket) -> AppResult<StockDetail> {
        self.repository.stock_detail(&ticket.symbol).await
    }

    /// Fetch the forecast for a request issued by
    /// [`DetailViewModel::request_forecast`](super::DetailViewModel::request_forecast).
    pub async fn fetch_forecast(&self, request: &ForecastRequest) -> AppResult<Vec<ForecastPoint>> {
        self.repository.forecast(&request.symbol, request.days).await
    }
}
