use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// Value Object - lookback range selectable above the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, AsRefStr)]
pub enum TimeRange {
    #[display(fmt = "1W")]
    #[strum(serialize = "1W")]
    OneWeek,
    #[default]
    #[display(fmt = "1M")]
    #[strum(serialize = "1M")]
    OneMonth,
    #[display(fmt = "3M")]
    #[strum(serialize = "3M")]
    ThreeMonths,
    #[display(fmt = "1Y")]
    #[strum(serialize = "1Y")]
    OneYear,
}

impl TimeRange {
    /// Resolve a range label. Unknown labels fall back to the widest range.
    pub fn resolve(label: &str) -> Self {
        label.parse().unwrap_or(Self::OneYear)
    }

    /// Number of most-recent price points shown for this range.
    pub fn window_len(&self) -> usize {
        match self {
            Self::OneWeek => 7,
            Self::OneMonth => 30,
            Self::ThreeMonths => 90,
            Self::OneYear => 365,
        }
    }

    pub fn label(&self) -> &str {
        self.as_ref()
    }

    /// All ranges in button order.
    pub fn all() -> impl Iterator<Item = TimeRange> {
        Self::iter()
    }
}

/// Window length for a raw range label; `365` for anything unrecognised.
pub fn resolve_window(label: &str) -> usize {
    TimeRange::resolve(label).window_len()
}
