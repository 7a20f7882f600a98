use crate::domain::chart::TimeRange;

/// Meta tag that overrides the API origin: `<meta name="ticker-api-base" content="https://...">`.
pub const API_BASE_META: &str = "ticker-api-base";

/// Client settings. Defaults talk to the same origin that served the page.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub ranking_limit: usize,
    pub forecast_days: usize,
    pub default_range: TimeRange,
    pub skeleton_cards: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            ranking_limit: 100,
            forecast_days: 30,
            default_range: TimeRange::default(),
            skeleton_cards: 20,
        }
    }
}

impl AppConfig {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_ranking_limit(mut self, limit: usize) -> Self {
        self.ranking_limit = limit;
        self
    }

    pub fn with_forecast_days(mut self, days: usize) -> Self {
        self.forecast_days = days;
        self
    }

    pub fn with_default_range(mut self, range: TimeRange) -> Self {
        self.default_range = range;
        self
    }

    pub fn with_skeleton_cards(mut self, count: usize) -> Self {
        self.skeleton_cards = count;
        self
    }

    /// Defaults plus whatever the host page overrides.
    pub fn from_document() -> Self {
        let config = Self::default();
        match read_meta(API_BASE_META) {
            Some(base) if !base.trim().is_empty() => config.with_api_base_url(base.trim()),
            _ => config,
        }
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|element| element.get_attribute("content"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_layout() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.ranking_limit, 100);
        assert_eq!(config.forecast_days, 30);
        assert_eq!(config.default_range, TimeRange::OneMonth);
        assert_eq!(config.skeleton_cards, 20);
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let config = AppConfig::default()
            .with_api_base_url("http://localhost:8000/")
            .with_ranking_limit(10)
            .with_skeleton_cards(4);
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.ranking_limit, 10);
        assert_eq!(config.skeleton_cards, 4);
    }
}
