//! Free-text salary summary parsing (`"$155K - $190K"`, `"€185K – €317K"`).

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Structured result of [`parse_compensation`].
///
/// `parsed` is false when no amount could be found; amounts are then zero.
/// `offers_equity` is reported independently of `parsed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compensation {
    pub currency: String,
    pub min_salary: f64,
    pub max_salary: f64,
    pub offers_equity: bool,
    pub parsed: bool,
}

fn compensation_regex() -> &'static Regex {
    static COMPENSATION_REGEX: OnceLock<Regex> = OnceLock::new();
    COMPENSATION_REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)([A-Z]*\$|€|£)?\s*\$?(\d[\d.,]*)(K)?(?:\s*[–-]\s*([A-Z]*\$|€|£)?\s*\$?(\d[\d.,]*)(K)?)?",
        )
        .expect("valid regex")
    })
}

/// Extract currency, salary range and an equity flag from a summary string.
///
/// A single amount yields `min == max`. When both sides carry a currency
/// marker the first one wins without reconciliation.
pub fn parse_compensation(text: &str) -> Compensation {
    let mut result = Compensation {
        offers_equity: text.to_lowercase().contains("equity"),
        ..Compensation::default()
    };

    let Some(caps) = compensation_regex().captures(text) else {
        tracing::debug!(input = text, "compensation string did not match");
        return result;
    };

    result.parsed = true;

    let currency = group(&caps, 1)
        .filter(|c| !c.is_empty())
        .or_else(|| group(&caps, 4))
        .unwrap_or_default();
    result.currency = currency.trim().to_string();

    result.min_salary = parse_amount(group(&caps, 2), group(&caps, 3));
    result.max_salary = parse_amount(group(&caps, 5), group(&caps, 6));
    if result.max_salary == 0.0 {
        result.max_salary = result.min_salary;
    }

    result
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index).map(|m| m.as_str())
}

fn parse_amount(amount: Option<&str>, multiplier: Option<&str>) -> f64 {
    let Some(amount) = amount.filter(|a| !a.is_empty()) else {
        return 0.0;
    };

    let Ok(value) = amount.replace(',', "").parse::<f64>() else {
        tracing::debug!(amount, "compensation amount is not numeric");
        return 0.0;
    };

    match multiplier {
        Some(k) if k.eq_ignore_ascii_case("k") => value * 1000.0,
        _ => value,
    }
}
