use super::entities::{PriceBounds, RenderPoint};
use crate::domain::market_data::{ForecastPoint, PricePoint, TradeDate};

/// Build the chronologically ordered series handed to the chart.
///
/// `history` is most-recent-first with unique dates; the first `window_len`
/// points are taken and reversed. `forecast` is oldest-first and dated after
/// the window, so it is appended as is. A window longer than the history
/// takes everything; an empty history yields the forecast alone.
pub fn assemble(history: &[PricePoint], window_len: usize, forecast: &[ForecastPoint]) -> Vec<RenderPoint> {
    let take = window_len.min(history.len());
    let mut points = Vec::with_capacity(take + forecast.len());
    points.extend(history[..take].iter().rev().map(RenderPoint::from));
    points.extend(forecast.iter().map(RenderPoint::from));
    points
}

/// Date of the first predicted point, where the chart draws its forecast marker.
pub fn forecast_start(points: &[RenderPoint]) -> Option<TradeDate> {
    points.iter().find(|p| p.is_forecast()).map(|p| p.date)
}

/// Min/max over every plotted value; `None` when nothing is plotted.
pub fn price_bounds(points: &[RenderPoint]) -> Option<PriceBounds> {
    points
        .iter()
        .flat_map(|p| p.plotted_values())
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<PriceBounds>, v| match acc {
            None => Some(PriceBounds { min: v, max: v }),
            Some(b) => Some(PriceBounds { min: b.min.min(v), max: b.max.max(v) }),
        })
}
