pub mod dto;
pub mod http;
pub mod services;

pub use http::ApiHttpClient;
pub use services::{BrowserTimeProvider, ConsoleLogger};
