use ticker_dashboard_wasm::domain::display::{Trend, derive_change};
use ticker_dashboard_wasm::domain::errors::AppError;
use ticker_dashboard_wasm::domain::market_data::{
    ForecastPoint, IndexSnapshot, Price, RankingRow, StockDetail, TradeDate, Volume,
};
use ticker_dashboard_wasm::infrastructure::dto::{
    ForecastDto, IndexDto, RankingDto, StockDetailDto, convert_all,
};

#[test]
fn ranking_nulls_stay_unknown() {
    let json = r#"[
        {"Symbol": "AAPL", "Name": "Apple Inc.", "MarketCap": 2950000000000.0, "Close": 189.87, "ChangeRate": 1.25},
        {"Symbol": "BRK-B", "Name": "Berkshire Hathaway", "MarketCap": null, "Close": 408.1, "ChangeRate": null}
    ]"#;
    let rows: Vec<RankingRow> = convert_all(serde_json::from_str::<Vec<RankingDto>>(json).unwrap()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].symbol.value(), "AAPL");
    assert_eq!(rows[1].market_cap, None);
    assert_eq!(rows[1].change_rate, None);

    let badge = derive_change(rows[1].change_rate);
    assert_eq!(badge.trend, Trend::Up);
    assert_eq!(badge.badge_text(), "0.00%");
}

#[test]
fn index_symbols_keep_caret_for_requests() {
    let json = r#"[{"Symbol": "^DJI", "Name": "Dow Jones Industrial Average", "Close": 38654.42, "ChangeRate": -0.12}]"#;
    let indices: Vec<IndexSnapshot> = convert_all(serde_json::from_str::<Vec<IndexDto>>(json).unwrap()).unwrap();
    assert_eq!(indices[0].symbol.value(), "^DJI");
    assert_eq!(indices[0].symbol.display_code(), "DJI");
    assert_eq!(indices[0].display_name(), "Dow Jones 30");
}

#[test]
fn detail_payload_maps_indicator_columns() {
    let json = r#"{
        "info": {"Symbol": "MSFT", "Name": "Microsoft Corporation", "Sector": "Technology", "Industry": null, "MarketCap": 3.1e12},
        "prices": [
            {"Date": "2024-05-03", "Close": 406.66, "Open": 402.28, "High": 407.15, "Low": 401.86,
             "Volume": 17446700.0, "ChangeRate": 2.22, "MA_20": 410.5, "RSI_14": 48.3},
            {"Date": "2024-05-02", "Close": 397.84, "Open": null, "High": null, "Low": null,
             "Volume": null, "ChangeRate": null, "MA_20": null, "RSI_14": null},
            {"Date": "2024-05-01", "Close": null}
        ]
    }"#;
    let detail = StockDetail::try_from(serde_json::from_str::<StockDetailDto>(json).unwrap()).unwrap();

    assert_eq!(detail.info.industry, None);
    assert_eq!(detail.prices.len(), 2);
    let latest = detail.latest().unwrap();
    assert_eq!(latest.date, TradeDate::from_ymd(2024, 5, 3).unwrap());
    assert_eq!(latest.volume, Some(Volume::new(17_446_700)));
    assert_eq!(latest.moving_average_20, Some(Price::new(410.5)));
    assert_eq!(latest.rsi_14, Some(48.3));

    let older = &detail.prices[1];
    assert_eq!(older.open, None);
    assert_eq!(older.volume, None);
    assert_eq!(older.rsi_14, None);
}

#[test]
fn missing_prices_key_means_no_history() {
    let json = r#"{"info": {"Symbol": "NEW", "Name": null}}"#;
    let detail = StockDetail::try_from(serde_json::from_str::<StockDetailDto>(json).unwrap()).unwrap();
    assert!(!detail.has_history());
    assert_eq!(detail.info.name, "NEW");
}

#[test]
fn forecast_points_carry_bounds() {
    let json = r#"[{"Date": "2024-05-06", "PredictedClose": 408.12, "LowerBound": 399.5, "UpperBound": 416.9}]"#;
    let points: Vec<ForecastPoint> = convert_all(serde_json::from_str::<Vec<ForecastDto>>(json).unwrap()).unwrap();
    assert_eq!(points[0].predicted_close, Price::new(408.12));
    assert_eq!(points[0].lower_bound, Some(Price::new(399.5)));
    assert_eq!(points[0].upper_bound, Some(Price::new(416.9)));
}

#[test]
fn malformed_payloads_are_errors() {
    let bad_date = r#"[{"Date": "05/06/2024", "PredictedClose": 1.0}]"#;
    let err = convert_all::<_, ForecastPoint>(serde_json::from_str::<Vec<ForecastDto>>(bad_date).unwrap()).unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));

    let empty_symbol = r#"[{"Symbol": "  ", "Name": "?", "Close": 1.0}]"#;
    let err = convert_all::<_, RankingRow>(serde_json::from_str::<Vec<RankingDto>>(empty_symbol).unwrap()).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(serde_json::from_str::<Vec<RankingDto>>(r#"[{"Symbol": "X"}]"#).is_err());
}
