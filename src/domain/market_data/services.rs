use crate::domain::market_data::{InstrumentInfo, MarketCap, Price, PricePoint, Volume};
use crate::number_format;

/// Headline figures shown under the chart, taken from the most recent day.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyStatistics {
    pub market_cap: Option<MarketCap>,
    pub volume: Option<Volume>,
    pub high: Option<Price>,
    pub low: Option<Price>,
    pub open: Option<Price>,
    pub rsi_14: Option<f64>,
    pub moving_average_20: Option<Price>,
}

/// Label/value pair ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatItem {
    pub label: &'static str,
    pub value: String,
}

impl KeyStatistics {
    pub fn from_latest(info: &InstrumentInfo, latest: Option<&PricePoint>) -> Self {
        Self {
            market_cap: info.market_cap,
            volume: latest.and_then(|p| p.volume),
            high: latest.and_then(|p| p.high),
            low: latest.and_then(|p| p.low),
            open: latest.and_then(|p| p.open),
            rsi_14: latest.and_then(|p| p.rsi_14),
            moving_average_20: latest.and_then(|p| p.moving_average_20),
        }
    }

    /// Display order matches the statistics grid. Unknown figures become a dash.
    pub fn items(&self) -> Vec<StatItem> {
        vec![
            StatItem { label: "Market Cap", value: number_format::format_market_cap(self.market_cap) },
            StatItem { label: "Volume", value: number_format::format_volume(self.volume) },
            StatItem { label: "High (Today)", value: number_format::format_optional_price(self.high) },
            StatItem { label: "Low (Today)", value: number_format::format_optional_price(self.low) },
            StatItem { label: "Open", value: number_format::format_optional_price(self.open) },
            StatItem { label: "RSI (14)", value: number_format::format_rsi(self.rsi_14) },
            StatItem {
                label: "MA (20)",
                value: number_format::format_optional_price(self.moving_average_20),
            },
        ]
    }
}
