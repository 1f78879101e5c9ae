//! Exponentiation by repeated multiplication

use crate::error::{Fatal, Result};
use crate::number::BigDecimal;
use tracing::trace;

impl BigDecimal {
    /// The value as a machine integer, for use as an exponent. Values that
    /// do not fit are reported as overflow.
    pub fn to_exponent(&self) -> Result<i32> {
        let mut value: i32 = 0;
        for i in (0..self.significant_length()).rev() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i32::from(self.digit(i))))
                .ok_or(Fatal::Overflow)?;
        }
        Ok(value)
    }

    /// `self = self ^ exponent`.
    ///
    /// A base of 0 or 1 is returned unchanged before the exponent is even
    /// looked at, so `0 ^ 0` stays 0. Any other base raised to 0 is 1.
    pub fn power(&mut self, exponent: &BigDecimal) -> Result<()> {
        self.normalize();
        if self.is_zero_or_one() {
            return Ok(());
        }

        let times = exponent.to_exponent()?;
        if times == 0 {
            *self = BigDecimal::one();
            return Ok(());
        }

        trace!(exponent = times, "repeated multiplication");
        let base = self.clone();
        for _ in 1..times {
            self.multiply(&base)?;
        }
        Ok(())
    }
}
