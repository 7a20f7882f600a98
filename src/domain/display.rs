//! Change-rate styling shared by every place a daily move is shown: ranking
//! cards, the index banner, the detail headline and the chart color.

use crate::domain::market_data::ChangeRate;
use crate::number_format;
use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Trend {
    #[display(fmt = "up")]
    Up,
    #[display(fmt = "down")]
    Down,
}

/// Color token for a trend; the view maps it to classes or a stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Affirmative,
    Negative,
}

impl ColorToken {
    pub fn text_class(&self) -> &'static str {
        match self {
            Self::Affirmative => "text-rh-green",
            Self::Negative => "text-rh-red",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Affirmative => "bg-rh-green/10",
            Self::Negative => "bg-rh-red/10",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Self::Affirmative => "#00C805",
            Self::Negative => "#FF5000",
        }
    }
}

impl From<Trend> for ColorToken {
    fn from(trend: Trend) -> Self {
        match trend {
            Trend::Up => Self::Affirmative,
            Trend::Down => Self::Negative,
        }
    }
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDisplay {
    pub trend: Trend,
    pub color: ColorToken,
    pub arrow: &'static str,
    /// Absolute value, exactly two fractional digits, no sign or `%`.
    pub magnitude_text: String,
}

impl ChangeDisplay {
    /// Card and banner badge form: `1.23%` next to the arrow.
    pub fn badge_text(&self) -> String {
        format!("{}%", self.magnitude_text)
    }

    /// Detail headline form: `+1.23%` / `-1.23%`.
    pub fn signed_text(&self) -> String {
        match self.trend {
            Trend::Up => format!("+{}%", self.magnitude_text),
            Trend::Down => format!("-{}%", self.magnitude_text),
        }
    }
}

/// Derive trend, color, arrow and magnitude from a change rate that may be
/// unknown. An unknown (or non-finite) rate counts as zero, and zero is up.
pub fn derive_change(raw: Option<ChangeRate>) -> ChangeDisplay {
    let value = raw.map(|r| r.value()).filter(|v| v.is_finite()).unwrap_or(0.0);
    let trend = if value >= 0.0 { Trend::Up } else { Trend::Down };
    ChangeDisplay {
        trend,
        color: trend.into(),
        arrow: trend.arrow(),
        magnitude_text: number_format::format_percent(value.abs()),
    }
}
