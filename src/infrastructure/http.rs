use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::{self, LogComponent, LogLevel};
use crate::domain::market_data::{ForecastPoint, IndexSnapshot, MarketDataRepository, RankingRow, StockDetail, Symbol};
use crate::infrastructure::dto::{self, ForecastDto, IndexDto, RankingDto, StockDetailDto};
use crate::{log_debug, log_error, log_info};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

const API_PREFIX: &str = "/api/v1";

/// HTTP client for the market API, built on gloo-net.
#[derive(Debug, Clone, Default)]
pub struct ApiHttpClient {
    base_url: String,
}

impl ApiHttpClient {
    /// `base_url` is the API origin; empty means same origin as the page.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn indices_url(&self) -> String {
        format!("{}{}/indices/major", self.base_url, API_PREFIX)
    }

    pub fn ranking_url(&self, limit: usize) -> String {
        format!("{}{}/stocks/ranking?limit={}", self.base_url, API_PREFIX, limit)
    }

    pub fn detail_url(&self, symbol: &Symbol) -> String {
        format!("{}{}/stocks/{}", self.base_url, API_PREFIX, encode_path_segment(symbol.value()))
    }

    pub fn forecast_url(&self, symbol: &Symbol, days: usize) -> String {
        format!(
            "{}{}/stocks/{}/predict?days={}",
            self.base_url,
            API_PREFIX,
            encode_path_segment(symbol.value()),
            days
        )
    }

    /// GET `url` and decode its JSON body. Send failures and non-2xx
    /// statuses are network errors; an undecodable body is a parse error.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        log_debug!(LogComponent::Infrastructure("ApiHttpClient"), "GET {}", url);

        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                log_error!(LogComponent::Infrastructure("ApiHttpClient"), "GET {} failed: {}", url, e);
                AppError::Network(format!("request to {} failed: {}", url, e))
            })?;

        if !response.ok() {
            let status = format!("HTTP {} {}", response.status(), response.status_text());
            logging::emit_with_metadata(
                LogLevel::Error,
                LogComponent::Infrastructure("ApiHttpClient"),
                &status,
                &format!("url={}", url),
            );
            return Err(AppError::Network(format!("{} for {}", status, url)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Parse(format!("invalid JSON from {}: {}", url, e)))
    }
}

impl MarketDataRepository for ApiHttpClient {
    async fn major_indices(&self) -> AppResult<Vec<IndexSnapshot>> {
        let rows: Vec<IndexDto> = self.get_json(&self.indices_url()).await?;
        dto::convert_all(rows)
    }

    async fn ranking(&self, limit: usize) -> AppResult<Vec<RankingRow>> {
        let rows: Vec<RankingDto> = self.get_json(&self.ranking_url(limit)).await?;
        let mut ranking: Vec<RankingRow> = dto::convert_all(rows)?;
        ranking.truncate(limit);
        Ok(ranking)
    }

    async fn stock_detail(&self, symbol: &Symbol) -> AppResult<StockDetail> {
        let payload: StockDetailDto = self.get_json(&self.detail_url(symbol)).await?;
        let detail = StockDetail::try_from(payload)?;
        log_info!(
            LogComponent::Infrastructure("ApiHttpClient"),
            "{}: {} price points",
            symbol,
            detail.prices.len()
        );
        Ok(detail)
    }

    async fn forecast(&self, symbol: &Symbol, days: usize) -> AppResult<Vec<ForecastPoint>> {
        let rows: Vec<ForecastDto> = self.get_json(&self.forecast_url(symbol, days)).await?;
        dto::convert_all(rows)
    }
}

/// Percent-encode one URL path segment. Unreserved characters pass through.
pub fn encode_path_segment(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
