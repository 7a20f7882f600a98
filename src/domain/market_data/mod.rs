//! Market data aggregate: instruments, price history, forecasts and rankings.

pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use repositories::MarketDataRepository;
pub use services::{KeyStatistics, StatItem};
pub use value_objects::*;
