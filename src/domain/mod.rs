pub mod chart;
pub mod display;
pub mod errors;
pub mod logging;
pub mod market_data;
