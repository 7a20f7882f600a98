//! Wire shapes served by the market API and their conversion into domain
//! entities. Optional numbers arrive as `null` or are missing entirely;
//! both become `None`.

use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{
    ChangeRate, ForecastPoint, IndexSnapshot, InstrumentInfo, MarketCap, Price, PricePoint, RankingRow,
    StockDetail, Symbol, TradeDate, Volume,
};
use crate::log_warn;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexDto {
    pub symbol: String,
    pub name: String,
    pub close: f64,
    pub change_rate: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RankingDto {
    pub symbol: String,
    pub name: String,
    pub market_cap: Option<f64>,
    pub close: f64,
    pub change_rate: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InfoDto {
    pub symbol: String,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub market_cap: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceDto {
    pub date: String,
    pub close: Option<f64>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    /// Some backends serialize volume as a float.
    pub volume: Option<f64>,
    pub change_rate: Option<f64>,
    #[serde(rename = "MA_20")]
    pub ma_20: Option<f64>,
    #[serde(rename = "RSI_14")]
    pub rsi_14: Option<f64>,
}

/// `{ "info": {...}, "prices": [...] }`, prices most recent first.
#[derive(Debug, Clone, Deserialize)]
pub struct StockDetailDto {
    pub info: InfoDto,
    #[serde(default)]
    pub prices: Vec<PriceDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForecastDto {
    pub date: String,
    pub predicted_close: f64,
    pub upper_bound: Option<f64>,
    pub lower_bound: Option<f64>,
}

/// Dates may carry a time part (`2024-03-08T00:00:00`); only the day counts.
fn parse_date(raw: &str) -> AppResult<TradeDate> {
    let raw = raw.trim();
    TradeDate::parse(raw.get(..10).unwrap_or(raw))
}

fn price(value: Option<f64>) -> Option<Price> {
    value.filter(|v| v.is_finite()).map(Price::new)
}

fn volume(value: Option<f64>) -> Option<Volume> {
    value.filter(|v| v.is_finite() && *v >= 0.0).map(|v| Volume::new(v.round() as u64))
}

fn name_or_symbol(name: Option<String>, symbol: &Symbol) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => symbol.value().to_string(),
    }
}

impl TryFrom<IndexDto> for IndexSnapshot {
    type Error = AppError;

    fn try_from(dto: IndexDto) -> AppResult<Self> {
        Ok(Self {
            symbol: Symbol::new(dto.symbol)?,
            name: dto.name,
            close: Price::new(dto.close),
            change_rate: dto.change_rate.map(ChangeRate::new),
        })
    }
}

impl TryFrom<RankingDto> for RankingRow {
    type Error = AppError;

    fn try_from(dto: RankingDto) -> AppResult<Self> {
        Ok(Self {
            symbol: Symbol::new(dto.symbol)?,
            name: dto.name,
            market_cap: dto.market_cap.map(MarketCap::new),
            close: Price::new(dto.close),
            change_rate: dto.change_rate.map(ChangeRate::new),
        })
    }
}

impl TryFrom<InfoDto> for InstrumentInfo {
    type Error = AppError;

    fn try_from(dto: InfoDto) -> AppResult<Self> {
        let symbol = Symbol::new(dto.symbol)?;
        Ok(Self {
            name: name_or_symbol(dto.name, &symbol),
            symbol,
            sector: dto.sector,
            industry: dto.industry,
            market_cap: dto.market_cap.map(MarketCap::new),
        })
    }
}

impl PriceDto {
    /// `Ok(None)` for a day without a close; such rows cannot be charted.
    fn into_point(self) -> AppResult<Option<PricePoint>> {
        let date = parse_date(&self.date)?;
        let Some(close) = price(self.close) else {
            return Ok(None);
        };
        Ok(Some(PricePoint {
            date,
            close,
            open: price(self.open),
            high: price(self.high),
            low: price(self.low),
            volume: volume(self.volume),
            change_rate: self.change_rate.map(ChangeRate::new),
            moving_average_20: price(self.ma_20),
            rsi_14: self.rsi_14,
        }))
    }
}

impl TryFrom<StockDetailDto> for StockDetail {
    type Error = AppError;

    fn try_from(dto: StockDetailDto) -> AppResult<Self> {
        let info = InstrumentInfo::try_from(dto.info)?;
        let total = dto.prices.len();
        let mut prices = Vec::with_capacity(total);
        for row in dto.prices {
            if let Some(point) = row.into_point()? {
                prices.push(point);
            }
        }
        if prices.len() < total {
            log_warn!(
                LogComponent::Infrastructure("Dto"),
                "{}: skipped {} price rows without a close",
                info.symbol,
                total - prices.len()
            );
        }
        Ok(Self { info, prices })
    }
}

impl TryFrom<ForecastDto> for ForecastPoint {
    type Error = AppError;

    fn try_from(dto: ForecastDto) -> AppResult<Self> {
        Ok(Self {
            date: parse_date(&dto.date)?,
            predicted_close: Price::new(dto.predicted_close),
            upper_bound: price(dto.upper_bound),
            lower_bound: price(dto.lower_bound),
        })
    }
}

/// Convert every element, failing on the first bad one.
pub fn convert_all<D, T>(items: Vec<D>) -> AppResult<Vec<T>>
where
    T: TryFrom<D, Error = AppError>,
{
    items.into_iter().map(T::try_from).collect()
}
