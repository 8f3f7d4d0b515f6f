//! Exact decimal accumulation
//!
//! Each `f64` is converted through its shortest decimal representation,
//! so sums no longer depend on iteration order. Values the decimal type
//! cannot hold are reported, never clamped.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::{AlignError, AlignResult};

const DECIMAL_RESOLUTION: f64 = 1e-28;

pub(crate) fn to_decimal(value: f64) -> AlignResult<Decimal> {
    if !value.is_finite() {
        return Err(AlignError::NotRepresentable(value));
    }
    // Below the finest decimal scale
    if value.abs() < DECIMAL_RESOLUTION {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_f64(value).ok_or(AlignError::NotRepresentable(value))
}

pub(crate) fn to_f64(value: Decimal) -> AlignResult<f64> {
    value.to_f64().ok_or(AlignError::DecimalOverflow)
}

/// Running sum of decimal terms
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DecimalSum {
    total: Decimal,
}

impl DecimalSum {
    pub(crate) fn add(&mut self, value: f64) -> AlignResult<()> {
        let term = to_decimal(value)?;
        self.add_decimal(term)
    }

    pub(crate) fn add_decimal(&mut self, term: Decimal) -> AlignResult<()> {
        self.total = self
            .total
            .checked_add(term)
            .ok_or(AlignError::DecimalOverflow)?;
        Ok(())
    }

    /// Add `a * b` with the product formed in decimal
    pub(crate) fn add_product(&mut self, a: f64, b: f64) -> AlignResult<()> {
        let product = to_decimal(a)?
            .checked_mul(to_decimal(b)?)
            .ok_or(AlignError::DecimalOverflow)?;
        self.add_decimal(product)
    }

    pub(crate) fn value(&self) -> AlignResult<f64> {
        to_f64(self.total)
    }

    /// Sum divided by `count`, rounded to `f64` only at the end
    pub(crate) fn mean(&self, count: usize) -> AlignResult<f64> {
        if count == 0 {
            return Err(AlignError::EmptyInput);
        }
        let quotient = self
            .total
            .checked_div(Decimal::from(count as u64))
            .ok_or(AlignError::DecimalOverflow)?;
        to_f64(quotient)
    }
}
