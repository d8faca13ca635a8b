use crate::error::EstimatorError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;

/// A non-negative annual or monthly salary amount.
///
/// Wraps `rust_decimal::Decimal`. Model output arrives as `f64` and keeps its
/// exact binary value on conversion, so truncation and band thresholds see
/// the number the model produced rather than a rounded neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SalaryAmount(Decimal);

impl SalaryAmount {
    pub fn new(value: Decimal) -> Result<Self, EstimatorError> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(EstimatorError::InvalidAmount(format!(
                "amount must not be negative, got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The monthly share of an annual amount.
    pub fn monthly(&self) -> Self {
        Self(self.0 / Decimal::from(12))
    }

    /// Integral part, fractional paise dropped.
    pub fn whole_units(&self) -> Decimal {
        self.0.trunc()
    }

    /// Nearest `f64`, for float-style display rounding.
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }
}

impl TryFrom<f64> for SalaryAmount {
    type Error = EstimatorError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(EstimatorError::InvalidAmount(format!(
                "amount must be finite, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(EstimatorError::InvalidAmount(format!(
                "amount must not be negative, got {value}"
            )));
        }
        let decimal = Decimal::from_f64_retain(value).ok_or_else(|| {
            EstimatorError::InvalidAmount(format!("amount {value} is out of range"))
        })?;
        Self::new(decimal)
    }
}

/// Coarse salary bucket by fixed thresholds. Not a statistical percentile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryBand {
    BottomQuartile,
    SecondQuartile,
    ThirdQuartile,
    TopQuartile,
}

impl SalaryBand {
    /// Exclusive upper bounds of the first three bands.
    pub const THRESHOLDS: [i64; 3] = [400_000, 600_000, 1_000_000];

    pub fn classify(annual: SalaryAmount) -> Self {
        let value = annual.value();
        let [low, mid, high] = Self::THRESHOLDS.map(Decimal::from);
        if value < low {
            SalaryBand::BottomQuartile
        } else if value < mid {
            SalaryBand::SecondQuartile
        } else if value < high {
            SalaryBand::ThirdQuartile
        } else {
            SalaryBand::TopQuartile
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SalaryBand::BottomQuartile => "Bottom 25%",
            SalaryBand::SecondQuartile => "25-50%",
            SalaryBand::ThirdQuartile => "50-75%",
            SalaryBand::TopQuartile => "Top 25%",
        }
    }
}

impl fmt::Display for SalaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
