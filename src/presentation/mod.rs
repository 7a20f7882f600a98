pub mod in_flight;
pub mod svg_chart;

pub use in_flight::InFlight;
