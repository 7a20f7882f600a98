use super::value_objects::{ChangeRate, MarketCap, Price, Symbol, TradeDate, Volume};
use serde::{Deserialize, Serialize};

/// One trading day of history. Only `close` is guaranteed; every other
/// figure is `None` when the backend did not have it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: TradeDate,
    pub close: Price,
    pub open: Option<Price>,
    pub high: Option<Price>,
    pub low: Option<Price>,
    pub volume: Option<Volume>,
    pub change_rate: Option<ChangeRate>,
    pub moving_average_20: Option<Price>,
    pub rsi_14: Option<f64>,
}

impl PricePoint {
    pub fn new(date: TradeDate, close: Price) -> Self {
        Self {
            date,
            close,
            open: None,
            high: None,
            low: None,
            volume: None,
            change_rate: None,
            moving_average_20: None,
            rsi_14: None,
        }
    }
}

/// Predicted close for a future day, with an optional confidence band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: TradeDate,
    pub predicted_close: Price,
    pub upper_bound: Option<Price>,
    pub lower_bound: Option<Price>,
}

impl ForecastPoint {
    pub fn new(date: TradeDate, predicted_close: Price) -> Self {
        Self { date, predicted_close, upper_bound: None, lower_bound: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentInfo {
    pub symbol: Symbol,
    pub name: String,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub market_cap: Option<MarketCap>,
}

/// Row of the overview grid. Collections of rows keep server rank order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    pub symbol: Symbol,
    pub name: String,
    pub market_cap: Option<MarketCap>,
    pub close: Price,
    pub change_rate: Option<ChangeRate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub symbol: Symbol,
    pub name: String,
    pub close: Price,
    pub change_rate: Option<ChangeRate>,
}

impl IndexSnapshot {
    /// Banner title; long index names are shortened to their common form.
    pub fn display_name(&self) -> String {
        self.name
            .replace("Dow Jones Industrial Average", "Dow Jones 30")
            .replace("NASDAQ Composite", "NASDAQ")
    }
}

/// Detail payload: instrument info plus history, most recent day first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockDetail {
    pub info: InstrumentInfo,
    pub prices: Vec<PricePoint>,
}

impl StockDetail {
    pub fn latest(&self) -> Option<&PricePoint> {
        self.prices.first()
    }

    pub fn has_history(&self) -> bool {
        !self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(name: &str) -> IndexSnapshot {
        IndexSnapshot {
            symbol: Symbol::new("^DJI").unwrap(),
            name: name.to_string(),
            close: Price::new(38_000.0),
            change_rate: None,
        }
    }

    #[test]
    fn index_names_are_shortened() {
        assert_eq!(snapshot("Dow Jones Industrial Average").display_name(), "Dow Jones 30");
        assert_eq!(snapshot("NASDAQ Composite").display_name(), "NASDAQ");
        assert_eq!(snapshot("S&P 500").display_name(), "S&P 500");
    }

    #[test]
    fn latest_is_first_point() {
        let d1 = TradeDate::from_ymd(2024, 1, 2).unwrap();
        let d2 = TradeDate::from_ymd(2024, 1, 1).unwrap();
        let detail = StockDetail {
            info: InstrumentInfo {
                symbol: Symbol::new("AAPL").unwrap(),
                name: "Apple Inc.".into(),
                sector: None,
                industry: None,
                market_cap: None,
            },
            prices: vec![PricePoint::new(d1, Price::new(2.0)), PricePoint::new(d2, Price::new(1.0))],
        };
        assert_eq!(detail.latest().map(|p| p.date), Some(d1));
        assert!(detail.has_history());
    }
}
