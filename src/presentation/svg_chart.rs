//! Geometry for the SVG price chart. Everything here is pure so the layout
//! can be checked without a browser.

use crate::domain::chart::{self, PriceBounds, RenderPoint};

pub const VIEW_WIDTH: f64 = 1000.0;
pub const VIEW_HEIGHT: f64 = 400.0;
/// Vertical breathing room above and below the plotted extent.
const PADDING: f64 = 16.0;

/// Polylines and markers for one chart, in view-box coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartGeometry {
    /// `points` attribute for the historical close line.
    pub close_line: String,
    /// `points` attribute for the dashed forecast line.
    pub forecast_line: String,
    /// `points` attribute for the confidence band polygon.
    pub band: String,
    /// X position of the first forecast point.
    pub forecast_x: Option<f64>,
}

struct Scale {
    bounds: PriceBounds,
    step: f64,
    single: bool,
}

impl Scale {
    fn x(&self, index: usize) -> f64 {
        if self.single { VIEW_WIDTH / 2.0 } else { index as f64 * self.step }
    }

    fn y(&self, value: f64) -> f64 {
        let span = self.bounds.span();
        if span <= f64::EPSILON {
            return VIEW_HEIGHT / 2.0;
        }
        let usable = VIEW_HEIGHT - 2.0 * PADDING;
        PADDING + (self.bounds.max - value) / span * usable
    }
}

fn coord(x: f64, y: f64) -> String {
    format!("{:.1},{:.1}", x, y)
}

/// Lay out `points` in a `VIEW_WIDTH` by `VIEW_HEIGHT` box. `None` when
/// there is nothing to draw.
pub fn layout(points: &[RenderPoint]) -> Option<ChartGeometry> {
    let bounds = chart::price_bounds(points)?;
    let scale = Scale {
        bounds,
        step: VIEW_WIDTH / (points.len().max(2) - 1) as f64,
        single: points.len() == 1,
    };

    let line = |pick: fn(&RenderPoint) -> Option<f64>| -> String {
        points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| pick(p).map(|v| coord(scale.x(i), scale.y(v))))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let close_line = line(|p| p.close.map(|c| c.value()));
    let forecast_line = line(|p| p.predicted_close.map(|c| c.value()));

    let banded: Vec<(usize, f64, f64)> = points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| Some((i, p.upper_bound?.value(), p.lower_bound?.value())))
        .collect();
    let band = banded
        .iter()
        .map(|(i, upper, _)| coord(scale.x(*i), scale.y(*upper)))
        .chain(banded.iter().rev().map(|(i, _, lower)| coord(scale.x(*i), scale.y(*lower))))
        .collect::<Vec<_>>()
        .join(" ");

    let forecast_x = points.iter().position(RenderPoint::is_forecast).map(|i| scale.x(i));

    Some(ChartGeometry { close_line, forecast_line, band, forecast_x })
}
