//! Parser for the combined rebate cell.
//!
//! The cell reads `"<amount> <currency>\u{a0}(<percent>%)"`, for example
//! `"12,50 $\u{a0}(25%)"`. The non-breaking space is the only separator
//! between the two halves; plain spaces may appear inside the amount.
//! The percent sign is kept when present but not required.

use crate::domain::discount::parse_percent;
use thiserror::Error;

const SEPARATOR: char = '\u{a0}';

#[derive(Debug, Clone, PartialEq)]
pub struct Rebate {
    pub amount: f64,
    pub percent: String,
}

#[derive(Error, Debug, PartialEq)]
pub enum RebateError {
    #[error("expected 2 segments separated by a non-breaking space, found {0}")]
    Segments(usize),
    #[error("invalid rebate amount {0:?}")]
    Amount(String),
    #[error("invalid rebate percent {0:?}")]
    Percent(String),
}

pub fn parse_rebate(text: &str) -> Result<Rebate, RebateError> {
    let segments: Vec<&str> = text.trim().split(SEPARATOR).collect();
    let [amount, percent] = segments.as_slice() else {
        return Err(RebateError::Segments(segments.len()));
    };

    Ok(Rebate {
        amount: parse_amount(amount)?,
        percent: parse_percent_text(percent)?,
    })
}

fn parse_amount(segment: &str) -> Result<f64, RebateError> {
    let cleaned: String = segment
        .chars()
        .filter(|&c| !matches!(c, '$' | ' ' | SEPARATOR))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    match cleaned.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(RebateError::Amount(segment.to_string())),
    }
}

fn parse_percent_text(segment: &str) -> Result<String, RebateError> {
    let percent = segment.trim().trim_start_matches('(').trim_end_matches(')').trim();

    if parse_percent(percent).is_none() {
        return Err(RebateError::Percent(segment.to_string()));
    }

    Ok(percent.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_amount_and_percent() {
        let rebate = parse_rebate("12,50 $\u{a0}(25%)").unwrap();
        assert_eq!(rebate.amount, 12.50);
        assert_eq!(rebate.percent, "25%");
    }

    #[test]
    fn tolerates_surrounding_whitespace_and_dot_decimals() {
        let rebate = parse_rebate("  3.00$\u{a0}(7%)\n ").unwrap();
        assert_eq!(rebate.amount, 3.0);
        assert_eq!(rebate.percent, "7%");
    }

    #[test]
    fn strips_spaces_inside_amount() {
        let rebate = parse_rebate("1 250,00 $\u{a0}(33%)").unwrap();
        assert_eq!(rebate.amount, 1250.0);
        assert_eq!(rebate.percent, "33%");
    }

    #[test]
    fn amount_without_space_before_currency() {
        let rebate = parse_rebate("0,75$\u{a0}(15%)").unwrap();
        assert_eq!(rebate.amount, 0.75);
        assert_eq!(rebate.percent, "15%");
    }

    #[test]
    fn accepts_percent_without_sign() {
        let rebate = parse_rebate("1,00 $\u{a0}(20)").unwrap();
        assert_eq!(rebate.amount, 1.0);
        assert_eq!(rebate.percent, "20");
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(
            parse_rebate("12,50 $ (25%)"),
            Err(RebateError::Segments(1))
        );
    }

    #[test]
    fn rejects_extra_segments() {
        assert_eq!(
            parse_rebate("12,50\u{a0}$\u{a0}(25%)"),
            Err(RebateError::Segments(3))
        );
    }

    #[test]
    fn rejects_empty_cell() {
        assert_eq!(parse_rebate(""), Err(RebateError::Segments(1)));
        assert_eq!(parse_rebate("   "), Err(RebateError::Segments(1)));
    }

    #[test]
    fn rejects_non_numeric_amount() {
        assert!(matches!(
            parse_rebate("gratuit\u{a0}(25%)"),
            Err(RebateError::Amount(_))
        ));
        assert!(matches!(
            parse_rebate("$\u{a0}(25%)"),
            Err(RebateError::Amount(_))
        ));
        assert!(matches!(
            parse_rebate("inf $\u{a0}(25%)"),
            Err(RebateError::Amount(_))
        ));
    }

    #[test]
    fn rejects_malformed_percent() {
        assert!(matches!(
            parse_rebate("12,50 $\u{a0}(abc%)"),
            Err(RebateError::Percent(_))
        ));
        assert!(matches!(
            parse_rebate("12,50 $\u{a0}()"),
            Err(RebateError::Percent(_))
        ));
    }
}
