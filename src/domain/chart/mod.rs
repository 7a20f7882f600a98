//! Chart aggregate: range windows and the render series fed to the chart sink.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::{assemble, forecast_start, price_bounds};
pub use value_objects::*;
