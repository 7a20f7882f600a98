use crate::domain::errors::{AppError, AppResult};
use chrono::NaiveDate;
use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Value Object - per-share price or index level
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - daily change in percent (`1.5` means +1.5%)
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeRate(f64);

impl ChangeRate {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - traded shares
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Into, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volume(u64);

impl Volume {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Value Object - market capitalisation in currency units
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketCap(f64);

impl MarketCap {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn in_billions(&self) -> f64 {
        self.0 / 1e9
    }
}

/// Value Object - calendar trading day, serialized as `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeDate(NaiveDate);

impl fmt::Display for TradeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl TradeDate {
    pub fn parse(value: &str) -> AppResult<Self> {
        Ok(Self(NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")?))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for TradeDate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Value Object - instrument or index ticker (`AAPL`, `^GSPC`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Trimmed and upper-cased; blank input is rejected.
    pub fn new(symbol: impl Into<String>) -> AppResult<Self> {
        let symbol = symbol.into();
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("Symbol cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Ticker as shown on a badge: index carets are dropped (`^DJI` -> `DJI`).
    pub fn display_code(&self) -> &str {
        self.0.trim_start_matches('^')
    }
}

impl FromStr for Symbol {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        Self::new(value)
    }
}
