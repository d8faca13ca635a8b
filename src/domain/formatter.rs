use super::amount::SalaryAmount;
use crate::error::{EstimatorError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SYMBOL: &str = "₹";
const GROUP_SEPARATOR: &str = ",";
const LAKH: i64 = 100_000;
const CRORE: i64 = 10_000_000;

/// How salary amounts are rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatPolicy {
    /// South Asian digit grouping of the integral part: `12,34,567`.
    #[default]
    Grouped,
    /// Lakh/crore units with one decimal place: `₹4.5 L`, `₹1.2 Cr`.
    Abbreviated,
}

impl FromStr for FormatPolicy {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grouped" => Ok(FormatPolicy::Grouped),
            "abbreviated" => Ok(FormatPolicy::Abbreviated),
            other => Err(EstimatorError::Config(format!(
                "unknown format policy {other:?}, expected \"grouped\" or \"abbreviated\""
            ))),
        }
    }
}

impl fmt::Display for FormatPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatPolicy::Grouped => f.write_str("grouped"),
            FormatPolicy::Abbreviated => f.write_str("abbreviated"),
        }
    }
}

/// Renders amounts in Indian notation according to a `FormatPolicy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    policy: FormatPolicy,
    symbol: String,
}

impl CurrencyFormatter {
    pub fn new(policy: FormatPolicy, symbol: impl Into<String>) -> Self {
        Self {
            policy,
            symbol: symbol.into(),
        }
    }

    pub fn policy(&self) -> FormatPolicy {
        self.policy
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Formats a raw model value. Negative and non-finite values are rejected.
    pub fn format(&self, value: f64) -> Result<String> {
        Ok(self.format_amount(SalaryAmount::try_from(value)?))
    }

    /// Policy output: bare grouped digits, or a symbol-prefixed abbreviation.
    pub fn format_amount(&self, amount: SalaryAmount) -> String {
        match self.policy {
            FormatPolicy::Grouped => group_digits(amount),
            FormatPolicy::Abbreviated => self.abbreviate(amount),
        }
    }

    /// User-facing string; always begins with the currency symbol.
    pub fn display(&self, amount: SalaryAmount) -> String {
        match self.policy {
            FormatPolicy::Grouped => format!("{}{}", self.symbol, group_digits(amount)),
            FormatPolicy::Abbreviated => self.abbreviate(amount),
        }
    }

    fn abbreviate(&self, amount: SalaryAmount) -> String {
        let value = amount.value();
        if value >= Decimal::from(CRORE) {
            format!("{}{} Cr", self.symbol, in_units(amount, CRORE))
        } else if value >= Decimal::from(LAKH) {
            format!("{}{} L", self.symbol, in_units(amount, LAKH))
        } else {
            format!("{}{}", self.symbol, group_digits(amount))
        }
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(FormatPolicy::default(), DEFAULT_SYMBOL)
    }
}

/// One decimal place of `amount / unit`, rounding the binary quotient the
/// way `{:.1}` does. 115000 is 1.1 lakh because 1.15 is stored just below
/// the midpoint.
fn in_units(amount: SalaryAmount, unit: i64) -> String {
    match amount.to_f64() {
        Some(value) => format!("{:.1}", value / unit as f64),
        None => {
            let mut quotient = (amount.value() / Decimal::from(unit)).round_dp(1);
            quotient.rescale(1);
            quotient.to_string()
        }
    }
}

/// Groups the integral part of an amount: last three digits, then pairs.
///
/// Works on the reversed digit string so groups can be peeled from the
/// least significant end, then reverses the joined result back.
pub fn group_digits(amount: SalaryAmount) -> String {
    let digits = amount.whole_units().normalize().to_string();
    let reversed: Vec<char> = digits.chars().rev().collect();
    let (head, rest) = reversed.split_at(reversed.len().min(3));

    let groups: Vec<String> = std::iter::once(head)
        .chain(rest.chunks(2))
        .map(|group| group.iter().collect())
        .collect();

    groups.join(GROUP_SEPARATOR).chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn grouped() -> CurrencyFormatter {
        CurrencyFormatter::new(FormatPolicy::Grouped, DEFAULT_SYMBOL)
    }

    fn abbreviated() -> CurrencyFormatter {
        CurrencyFormatter::new(FormatPolicy::Abbreviated, DEFAULT_SYMBOL)
    }

    #[test]
    fn test_grouped_digits() {
        let f = grouped();
        assert_eq!(f.format(1234567.0).unwrap(), "12,34,567");
        assert_eq!(f.format(100.0).unwrap(), "100");
        assert_eq!(f.format(1000.0).unwrap(), "1,000");
        assert_eq!(f.format(0.0).unwrap(), "0");
        assert_eq!(f.format(99999.0).unwrap(), "99,999");
        assert_eq!(f.format(100000.0).unwrap(), "1,00,000");
        assert_eq!(f.format(123456789.0).unwrap(), "12,34,56,789");
    }

    #[test]
    fn test_grouped_truncates_fraction() {
        let f = grouped();
        assert_eq!(f.format(1234567.99).unwrap(), "12,34,567");
        assert_eq!(f.format(999.5).unwrap(), "999");
        assert_eq!(f.format(999999.9999999999).unwrap(), "9,99,999");
    }

    #[test]
    fn test_abbreviated_units() {
        let f = abbreviated();
        assert_eq!(f.format(12000000.0).unwrap(), "₹1.2 Cr");
        assert_eq!(f.format(450000.0).unwrap(), "₹4.5 L");
        assert_eq!(f.format(5000.0).unwrap(), "₹5,000");
    }

    #[test]
    fn test_abbreviated_thresholds() {
        let f = abbreviated();
        assert_eq!(f.format(10000000.0).unwrap(), "₹1.0 Cr");
        assert_eq!(f.format(9999999.0).unwrap(), "₹100.0 L");
        assert_eq!(f.format(100000.0).unwrap(), "₹1.0 L");
        assert_eq!(f.format(99999.0).unwrap(), "₹99,999");
        assert_eq!(f.format(123456789.0).unwrap(), "₹12.3 Cr");
    }

    #[test]
    fn test_abbreviated_rounds_float_quotient() {
        let f = abbreviated();
        assert_eq!(f.format(105000.0).unwrap(), "₹1.1 L");
        assert_eq!(f.format(115000.0).unwrap(), "₹1.1 L");
        assert_eq!(f.format(125000.0).unwrap(), "₹1.2 L");
        assert_eq!(f.format(10500000.0).unwrap(), "₹1.1 Cr");
    }

    #[test]
    fn test_display_always_prefixed() {
        let amount = SalaryAmount::new(dec!(704000)).unwrap();
        assert_eq!(grouped().display(amount), "₹7,04,000");
        assert_eq!(abbreviated().display(amount), "₹7.0 L");

        let inr = CurrencyFormatter::new(FormatPolicy::Grouped, "INR ");
        assert_eq!(inr.display(amount), "INR 7,04,000");
    }

    #[test]
    fn test_rejects_invalid_amounts() {
        for f in [grouped(), abbreviated()] {
            for value in [-1.0, f64::NAN, f64::INFINITY] {
                assert!(matches!(
                    f.format(value),
                    Err(EstimatorError::InvalidAmount(_))
                ));
            }
        }
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("grouped".parse::<FormatPolicy>().unwrap(), FormatPolicy::Grouped);
        assert_eq!(
            "abbreviated".parse::<FormatPolicy>().unwrap(),
            FormatPolicy::Abbreviated
        );
        assert!(matches!(
            "lakh".parse::<FormatPolicy>(),
            Err(EstimatorError::Config(_))
        ));
        assert_eq!(FormatPolicy::default(), FormatPolicy::Grouped);
    }
}
