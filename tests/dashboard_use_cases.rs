use futures::executor::block_on;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use ticker_dashboard_wasm::application::{
    DetailViewModel, ForecastState, LoadState, MarketDashboardUseCase, RANKING_FAILED,
};
use ticker_dashboard_wasm::config::AppConfig;
use ticker_dashboard_wasm::domain::chart::TimeRange;
use ticker_dashboard_wasm::domain::errors::{AppError, AppResult};
use ticker_dashboard_wasm::domain::market_data::{
    ChangeRate, ForecastPoint, IndexSnapshot, InstrumentInfo, MarketDataRepository, Price, PricePoint, RankingRow,
    StockDetail, Symbol, TradeDate,
};
use ticker_dashboard_wasm::presentation::InFlight;

#[derive(Default)]
struct InMemoryRepository {
    ranking: Option<Vec<RankingRow>>,
    details: HashMap<String, StockDetail>,
    forecast: RefCell<Option<Vec<ForecastPoint>>>,
    last_limit: Cell<usize>,
    forecast_calls: Cell<usize>,
}

impl MarketDataRepository for InMemoryRepository {
    async fn major_indices(&self) -> AppResult<Vec<IndexSnapshot>> {
        Ok(vec![IndexSnapshot {
            symbol: Symbol::new("^IXIC").unwrap(),
            name: "NASDAQ Composite".into(),
            close: Price::new(16_274.94),
            change_rate: None,
        }])
    }

    async fn ranking(&self, limit: usize) -> AppResult<Vec<RankingRow>> {
        self.last_limit.set(limit);
        self.ranking
            .clone()
            .ok_or_else(|| AppError::Network("connection refused".into()))
    }

    async fn stock_detail(&self, symbol: &Symbol) -> AppResult<StockDetail> {
        self.details
            .get(symbol.value())
            .cloned()
            .ok_or_else(|| AppError::Network(format!("HTTP 404 Not Found for {}", symbol)))
    }

    async fn forecast(&self, _symbol: &Symbol, days: usize) -> AppResult<Vec<ForecastPoint>> {
        self.forecast_calls.set(self.forecast_calls.get() + 1);
        let mut points = self.forecast.borrow().clone().unwrap_or_default();
        points.truncate(days);
        Ok(points)
    }
}

fn date(day: u32) -> TradeDate {
    TradeDate::from_ymd(2024, 5, day).unwrap()
}

fn detail(symbol: &str, days: u32, base: f64) -> StockDetail {
    StockDetail {
        info: InstrumentInfo {
            symbol: Symbol::new(symbol).unwrap(),
            name: format!("{} Corp", symbol),
            sector: Some("Technology".into()),
            industry: None,
            market_cap: None,
        },
        prices: (1..=days).rev().map(|d| PricePoint::new(date(d), Price::new(base + d as f64))).collect(),
    }
}

fn repository() -> InMemoryRepository {
    let mut repo = InMemoryRepository::default();
    repo.details.insert("AAPL".into(), detail("AAPL", 10, 100.0));
    repo.details.insert("MSFT".into(), detail("MSFT", 10, 400.0));
    repo
}

#[test]
fn ranking_uses_configured_limit_and_keeps_order() {
    let mut repo = repository();
    repo.ranking = Some(vec![
        RankingRow {
            symbol: Symbol::new("MSFT").unwrap(),
            name: "Microsoft".into(),
            market_cap: None,
            close: Price::new(420.0),
            change_rate: None,
        },
        RankingRow {
            symbol: Symbol::new("AAPL").unwrap(),
            name: "Apple".into(),
            market_cap: None,
            close: Price::new(190.0),
            change_rate: Some(ChangeRate::new(-1.2)),
        },
    ]);
    let use_case = MarketDashboardUseCase::new(repo, AppConfig::default());

    let state = block_on(use_case.load_ranking());
    let symbols: Vec<String> = state.loaded().unwrap().iter().map(|r| r.symbol.to_string()).collect();
    assert_eq!(symbols, ["MSFT", "AAPL"]);
    assert_eq!(use_case.repository().last_limit.get(), 100);
}

#[test]
fn ranking_failure_becomes_notice() {
    let use_case = MarketDashboardUseCase::new(repository(), AppConfig::default().with_ranking_limit(5));
    assert_eq!(block_on(use_case.load_ranking()), LoadState::Failed(RANKING_FAILED.to_string()));
    assert_eq!(use_case.repository().last_limit.get(), 5);
}

#[test]
fn indices_load_in_server_order() {
    let use_case = MarketDashboardUseCase::new(repository(), AppConfig::default());
    let state = block_on(use_case.load_indices());
    assert_eq!(state.loaded().unwrap()[0].display_name(), "NASDAQ");
}

/// Select `symbol` and apply its detail, the way the detail page does.
fn open(use_case: &MarketDashboardUseCase<InMemoryRepository>, model: &mut DetailViewModel, symbol: &str) -> bool {
    let ticket = model.select_symbol(Symbol::new(symbol).unwrap());
    let result = block_on(use_case.fetch_detail(&ticket));
    model.apply_detail(&ticket, result)
}

/// Request, fetch and apply a forecast. `false` when nothing was requested
/// or the result was stale.
fn forecast(use_case: &MarketDashboardUseCase<InMemoryRepository>, model: &mut DetailViewModel) -> bool {
    let Some(request) = model.request_forecast() else {
        return false;
    };
    let result = block_on(use_case.fetch_forecast(&request));
    model.apply_forecast(&request, result)
}

fn forecast_points(days: std::ops::RangeInclusive<u32>) -> Option<Vec<ForecastPoint>> {
    Some(days.map(|d| ForecastPoint::new(date(d), Price::new(120.0))).collect())
}

#[test]
fn late_detail_for_previous_symbol_is_discarded() {
    let use_case = MarketDashboardUseCase::new(repository(), AppConfig::default());
    let mut model = DetailViewModel::new(use_case.config());

    let first = model.select_symbol(Symbol::new("AAPL").unwrap());
    let first_result = block_on(use_case.fetch_detail(&first));
    let second = model.select_symbol(Symbol::new("MSFT").unwrap());
    let second_result = block_on(use_case.fetch_detail(&second));

    assert!(model.apply_detail(&second, second_result));
    let shown = model.detail().clone();
    assert!(!model.apply_detail(&first, first_result));

    assert_eq!(model.detail(), &shown);
    assert_eq!(model.detail().loaded().unwrap().info.symbol, Symbol::new("MSFT").unwrap());
}

#[test]
fn forecast_extends_the_series_until_range_changes() {
    let repo = repository();
    *repo.forecast.borrow_mut() = forecast_points(11..=13);
    let use_case = MarketDashboardUseCase::new(repo, AppConfig::default().with_default_range(TimeRange::OneWeek));
    let mut model = DetailViewModel::new(use_case.config());

    assert!(open(&use_case, &mut model, "AAPL"));
    assert_eq!(model.render_points().len(), 7);

    assert!(forecast(&use_case, &mut model));
    let points = model.render_points();
    assert_eq!(points.len(), 10);
    assert_eq!(points.first().unwrap().date, date(4));
    assert_eq!(points.last().unwrap().date, date(13));

    // Ready: a second trigger does not reach the repository.
    assert!(!forecast(&use_case, &mut model));
    assert_eq!(use_case.repository().forecast_calls.get(), 1);

    assert!(model.select_range(TimeRange::OneMonth));
    assert_eq!(model.forecast(), &ForecastState::Idle);
    assert_eq!(model.render_points().len(), 10);
}

#[test]
fn reclicking_selected_range_lets_requested_forecast_finish() {
    let repo = repository();
    *repo.forecast.borrow_mut() = forecast_points(11..=13);
    let use_case = MarketDashboardUseCase::new(repo, AppConfig::default().with_default_range(TimeRange::OneWeek));
    let mut model = DetailViewModel::new(use_case.config());
    assert!(open(&use_case, &mut model, "AAPL"));

    let request = model.request_forecast().unwrap();
    let mut in_flight = InFlight::new();
    let fetch = in_flight.start(use_case.fetch_forecast(&request));

    // Range button handler: cancel only when the range actually changed.
    if model.select_range(model.range()) {
        in_flight.cancel();
    }
    assert!(matches!(model.forecast(), ForecastState::Requesting(_)));

    let result = block_on(fetch).expect("fetch was not aborted");
    assert!(model.apply_forecast(&request, result));
    assert!(matches!(model.forecast(), ForecastState::Ready(_)));
    assert_eq!(model.render_points().len(), 10);
}

#[test]
fn switching_symbol_drops_pending_forecast() {
    let repo = repository();
    *repo.forecast.borrow_mut() = forecast_points(11..=13);
    let use_case = MarketDashboardUseCase::new(repo, AppConfig::default());
    let mut model = DetailViewModel::new(use_case.config());
    assert!(open(&use_case, &mut model, "AAPL"));

    let aapl_request = model.request_forecast().unwrap();
    let aapl_result = block_on(use_case.fetch_forecast(&aapl_request));

    assert!(open(&use_case, &mut model, "MSFT"));
    assert_eq!(model.forecast(), &ForecastState::Idle);
    assert!(!model.apply_forecast(&aapl_request, aapl_result));

    assert_eq!(model.forecast(), &ForecastState::Idle);
    let points = model.render_points();
    assert_eq!(points.len(), 10);
    assert_eq!(points.last().unwrap().close.unwrap(), Price::new(410.0));

    // The new symbol can run its own forecast.
    assert!(forecast(&use_case, &mut model));
    assert_eq!(model.render_points().len(), 13);
}

#[test]
fn empty_forecast_leaves_chart_untouched() {
    let use_case = MarketDashboardUseCase::new(repository(), AppConfig::default());
    let mut model = DetailViewModel::new(use_case.config());
    assert!(open(&use_case, &mut model, "AAPL"));

    assert!(forecast(&use_case, &mut model));
    assert!(matches!(model.forecast(), ForecastState::Failed(_)));
    assert_eq!(model.render_points().len(), 10);
}

#[test]
fn unknown_symbol_fails_without_forecast() {
    let use_case = MarketDashboardUseCase::new(repository(), AppConfig::default());
    let mut model = DetailViewModel::new(use_case.config());
    assert!(open(&use_case, &mut model, "ZZZZ"));

    assert!(model.detail().error().is_some());
    assert!(!forecast(&use_case, &mut model));
}

#[test]
fn forecast_horizon_follows_config() {
    let repo = repository();
    *repo.forecast.borrow_mut() = forecast_points(11..=13);
    let config = AppConfig::default().with_default_range(TimeRange::OneWeek).with_forecast_days(2);
    let use_case = MarketDashboardUseCase::new(repo, config);
    let mut model = DetailViewModel::new(use_case.config());

    assert!(open(&use_case, &mut model, "AAPL"));
    assert!(forecast(&use_case, &mut model));
    assert_eq!(model.render_points().len(), 9);
}
