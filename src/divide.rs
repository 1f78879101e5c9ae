//! Truncating long division on `BigDecimal`
//!
//! The working window always holds the remainder of the dividend digits
//! from `cursor` upward, with the most recently pulled-down digit at
//! index 0. Each pass fixes the quotient digit at `cursor`.

use crate::error::{Fatal, Result};
use crate::number::BigDecimal;
use tracing::trace;

impl BigDecimal {
    /// `self /= divisor`, discarding the remainder.
    pub fn divide(&mut self, divisor: &BigDecimal) -> Result<()> {
        self.normalize();
        if divisor.is_zero() {
            return Err(Fatal::DivisionByZero);
        }

        if !self.at_least(divisor) {
            *self = BigDecimal::new();
            return Ok(());
        }

        let dividend_len = self.significant_length();
        let divisor_len = divisor.significant_length();
        trace!(dividend_len, divisor_len, "long division");

        let mut cursor = dividend_len - divisor_len;
        let mut window = self.upper_digits(cursor);
        let mut quotient = BigDecimal::new();

        loop {
            // window < 10 * divisor here, so the count is a single digit
            let mut count = 0;
            while window.at_least(divisor) {
                window.subtract(divisor);
                window.normalize();
                count += 1;
            }
            quotient.set_digit(cursor, count);

            if cursor == 0 {
                break;
            }
            cursor -= 1;
            window.shift_in(self.digit(cursor));
        }

        self.assign(&quotient)
    }
}
