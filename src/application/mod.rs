pub mod detail_view;
pub mod forecast_loader;
pub mod load_state;
pub mod use_cases;

pub use detail_view::*;
pub use forecast_loader::*;
pub use load_state::LoadState;
pub use use_cases::*;
