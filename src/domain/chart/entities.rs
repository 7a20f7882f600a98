use crate::domain::market_data::{ForecastPoint, Price, PricePoint, TradeDate};
use serde::Serialize;

/// One x-position on the chart. Historical points carry `close`, forecast
/// points carry the predicted fields; the sink plots each series where set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPoint {
    pub date: TradeDate,
    pub close: Option<Price>,
    pub predicted_close: Option<Price>,
    pub upper_bound: Option<Price>,
    pub lower_bound: Option<Price>,
}

impl RenderPoint {
    pub fn is_forecast(&self) -> bool {
        self.predicted_close.is_some()
    }

    /// Every value drawn at this x-position.
    pub fn plotted_values(&self) -> impl Iterator<Item = f64> + '_ {
        [self.close, self.predicted_close, self.upper_bound, self.lower_bound]
            .into_iter()
            .flatten()
            .map(|p| p.value())
    }
}

impl From<&PricePoint> for RenderPoint {
    fn from(point: &PricePoint) -> Self {
        Self {
            date: point.date,
            close: Some(point.close),
            predicted_close: None,
            upper_bound: None,
            lower_bound: None,
        }
    }
}

impl From<&ForecastPoint> for RenderPoint {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            date: point.date,
            close: None,
            predicted_close: Some(point.predicted_close),
            upper_bound: point.upper_bound,
            lower_bound: point.lower_bound,
        }
    }
}

/// Vertical extent of everything plotted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
