use crate::domain::market_data::{MarketCap, Price, Volume};

/// Rendered in place of any figure that is unknown.
pub const PLACEHOLDER: &str = "-";

/// Insert `,` every three digits of an unsigned integer string.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped decimal with between `min_frac` and `max_frac` fractional digits
/// (trailing zeros beyond `min_frac` are trimmed).
pub fn format_grouped(value: f64, min_frac: usize, max_frac: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let fixed = format!("{:.*}", max_frac, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), ""),
    };
    let mut frac = frac_part.to_string();
    while frac.len() > min_frac && frac.ends_with('0') {
        frac.pop();
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac.bytes().all(|b| b == b'0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    if frac.is_empty() {
        format!("{}{}", sign, group_digits(int_part))
    } else {
        format!("{}{}.{}", sign, group_digits(int_part), frac)
    }
}

/// Percentage magnitude: always two fractional digits, no grouping, no `%`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.2}", value)
}

/// Per-share price: `$1,234.50`.
pub fn format_price(price: Price) -> String {
    let value = price.value();
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let grouped = format_grouped(value.abs(), 2, 2);
    if value < 0.0 && grouped != "0.00" {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn format_optional_price(price: Option<Price>) -> String {
    price.map(format_price).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Index level: grouped, at most two fractional digits (`38,654.4`).
pub fn format_index_level(level: Price) -> String {
    format_grouped(level.value(), 0, 2)
}

pub fn format_volume(volume: Option<Volume>) -> String {
    match volume {
        Some(v) => group_digits(&v.value().to_string()),
        None => PLACEHOLDER.to_string(),
    }
}

/// Market cap in billions: `$2,345.67B`.
pub fn format_market_cap(market_cap: Option<MarketCap>) -> String {
    match market_cap.map(|m| m.in_billions()).filter(|b| b.is_finite()) {
        Some(billions) => format!("${}B", format_grouped(billions, 2, 2)),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_rsi(rsi: Option<f64>) -> String {
    match rsi.filter(|v| v.is_finite()) {
        Some(v) => format!("{:.1}", v),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(1234567.891, 2, 2), "1,234,567.89");
        assert_eq!(format_grouped(999.0, 0, 2), "999");
        assert_eq!(format_grouped(1000.0, 0, 2), "1,000");
        assert_eq!(format_grouped(-1234.5, 2, 2), "-1,234.50");
        assert_eq!(format_grouped(-0.001, 2, 2), "0.00");
    }

    #[test]
    fn prices_always_have_two_digits() {
        assert_eq!(format_price(Price::new(1234.5)), "$1,234.50");
        assert_eq!(format_price(Price::new(0.0)), "$0.00");
        assert_eq!(format_price(Price::new(f64::NAN)), "-");
    }

    #[test]
    fn index_levels_trim_trailing_zeros() {
        assert_eq!(format_index_level(Price::new(38654.40)), "38,654.4");
        assert_eq!(format_index_level(Price::new(5000.0)), "5,000");
        assert_eq!(format_index_level(Price::new(16274.946)), "16,274.95");
    }

    #[test]
    fn unknown_figures_render_placeholder() {
        assert_eq!(format_optional_price(None), "-");
        assert_eq!(format_volume(None), "-");
        assert_eq!(format_market_cap(None), "-");
        assert_eq!(format_rsi(None), "-");
        assert_eq!(format_rsi(Some(f64::INFINITY)), "-");
    }

    #[test]
    fn volume_and_market_cap() {
        assert_eq!(format_volume(Some(Volume::new(52_164_300))), "52,164,300");
        assert_eq!(format_market_cap(Some(MarketCap::new(2_345_670_000_000.0))), "$2,345.67B");
        assert_eq!(format_rsi(Some(61.27)), "61.3");
    }
}
