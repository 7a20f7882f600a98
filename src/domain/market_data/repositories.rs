use crate::domain::errors::AppResult;
use crate::domain::market_data::{ForecastPoint, IndexSnapshot, RankingRow, StockDetail, Symbol};

/// Port to the market data backend. The browser client implements it over
/// HTTP; tests plug in an in-memory double.
///
/// All futures run on the single-threaded browser executor, so they are not
/// required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait MarketDataRepository {
    /// Headline indices in server order.
    async fn major_indices(&self) -> AppResult<Vec<IndexSnapshot>>;

    /// At most `limit` instruments, in rank order.
    async fn ranking(&self, limit: usize) -> AppResult<Vec<RankingRow>>;

    /// Instrument info plus history, most recent day first.
    async fn stock_detail(&self, symbol: &Symbol) -> AppResult<StockDetail>;

    /// Up to `days` predicted points, oldest first.
    async fn forecast(&self, symbol: &Symbol, days: usize) -> AppResult<Vec<ForecastPoint>>;
}
