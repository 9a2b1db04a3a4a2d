//! Weight-tiered cost per unit of distance.
//!
//! Up to the allowance the base rate applies. Every started step of
//! `step_weight` above the allowance adds `step_rate`, so the rate is a
//! monotone step function of the onboard weight.

use thiserror::Error;

/// Errors returned by [`Tariff::new`] and [`Tariff::rate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TariffError {
    /// The onboard weight was negative.
    #[error("onboard weight must not be negative, found {weight}")]
    NegativeWeight {
        /// Rejected weight.
        weight: f64,
    },
    /// The onboard weight was NaN or infinite.
    #[error("onboard weight must be finite, found {weight}")]
    NonFiniteWeight {
        /// Rejected weight.
        weight: f64,
    },
    /// A tariff parameter was out of range.
    #[error("tariff {parameter} is invalid: {value}")]
    InvalidParameter {
        /// Parameter name.
        parameter: &'static str,
        /// Rejected value.
        value: f64,
    },
}

/// Cost-per-distance schedule keyed by onboard weight.
///
/// # Examples
/// ```
/// use hubhaul_core::Tariff;
///
/// # fn main() -> Result<(), hubhaul_core::TariffError> {
/// let tariff = Tariff::default();
/// assert_eq!(tariff.rate(3.0)?, 10.0);
/// assert_eq!(tariff.rate(5.5)?, 18.0);
/// assert_eq!(tariff.rate(10.0001)?, 26.0);
/// assert!(tariff.rate(-1.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    base_rate: f64,
    allowance: f64,
    step_weight: f64,
    step_rate: f64,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            base_rate: 10.0,
            allowance: 5.0,
            step_weight: 5.0,
            step_rate: 8.0,
        }
    }
}

impl Tariff {
    /// Validate and construct a tariff.
    ///
    /// All parameters must be finite and non-negative; `step_weight` must be
    /// strictly positive.
    pub fn new(
        base_rate: f64,
        allowance: f64,
        step_weight: f64,
        step_rate: f64,
    ) -> Result<Self, TariffError> {
        for (parameter, value) in [
            ("base_rate", base_rate),
            ("allowance", allowance),
            ("step_weight", step_weight),
            ("step_rate", step_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TariffError::InvalidParameter { parameter, value });
            }
        }
        if step_weight <= 0.0 {
            return Err(TariffError::InvalidParameter {
                parameter: "step_weight",
                value: step_weight,
            });
        }
        Ok(Self {
            base_rate,
            allowance,
            step_weight,
            step_rate,
        })
    }

    /// Rate charged while carrying `weight`.
    #[expect(
        clippy::float_arithmetic,
        reason = "the tariff is defined over real-valued weights"
    )]
    pub fn rate(&self, weight: f64) -> Result<f64, TariffError> {
        if !weight.is_finite() {
            return Err(TariffError::NonFiniteWeight { weight });
        }
        if weight < 0.0 {
            return Err(TariffError::NegativeWeight { weight });
        }
        if weight <= self.allowance {
            return Ok(self.base_rate);
        }
        let steps = ((weight - self.allowance) / self.step_weight).ceil();
        Ok(self.step_rate.mul_add(steps, self.base_rate))
    }

    /// Rate at or below the allowance.
    pub const fn base_rate(&self) -> f64 {
        self.base_rate
    }

    /// Weight carried at the base rate.
    pub const fn allowance(&self) -> f64 {
        self.allowance
    }

    /// Width of each surcharge step.
    pub const fn step_weight(&self) -> f64 {
        self.step_weight
    }

    /// Surcharge per started step.
    pub const fn step_rate(&self) -> f64 {
        self.step_rate
    }
}
