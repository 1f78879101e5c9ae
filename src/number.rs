//! Fixed-capacity decimal integers for the register calculator
//!
//! Digit layout (least significant first):
//! - `digits[0]` is the units digit, `digits[i]` holds the 10^i digit
//! - `digits[INTSIZE]` is a guard slot; any nonzero value there means the
//!   number no longer fits and is treated as overflow
//! - `length` counts the slots considered significant. It is an upper
//!   bound only; high-order zeros are trimmed on demand. Every slot from
//!   `length` up to the guard holds 0.

use crate::error::{Fatal, Result};
use std::cmp::Ordering;
use std::fmt::{self, Write};

/// Maximum number of decimal digits in a value.
pub const INTSIZE: usize = 500;

/// Index of the overflow guard slot.
const GUARD: usize = INTSIZE;

/// Digits between commas in printed values.
const GROUP_WIDTH: usize = 3;

const TEN: u8 = 10;

#[derive(Clone)]
pub struct BigDecimal {
    digits: [u8; INTSIZE + 1],
    length: usize,
}

impl BigDecimal {
    /// Zero with every slot considered significant, the state a register
    /// or scratch accumulator starts in.
    pub fn new() -> Self {
        BigDecimal {
            digits: [0; INTSIZE + 1],
            length: INTSIZE,
        }
    }

    pub fn one() -> Self {
        let mut num = BigDecimal::new();
        num.digits[0] = 1;
        num
    }

    /// Build a value from an all-digit string. The caller has already
    /// checked the characters; leading zeros are allowed.
    pub fn parse(text: &str) -> Result<Self> {
        debug_assert!(text.bytes().all(|b| b.is_ascii_digit()));

        let mut num = BigDecimal::new();
        num.length = text.len().min(INTSIZE);

        for (i, ch) in text.bytes().rev().enumerate() {
            let digit = ch - b'0';
            if i < INTSIZE {
                num.digits[i] = digit;
            } else if digit != 0 {
                return Err(Fatal::Overflow);
            }
        }

        Ok(num)
    }

    /// The digit at position `index` (0 = units).
    pub fn digit(&self, index: usize) -> u8 {
        self.digits[index]
    }

    pub(crate) fn set_digit(&mut self, index: usize, digit: u8) {
        debug_assert!(index < GUARD && digit < TEN);
        self.digits[index] = digit;
    }

    /// Number of digits once high-order zeros are dropped. Never less
    /// than one: zero is the single digit 0.
    pub fn significant_length(&self) -> usize {
        let mut len = self.length.max(1);
        while len > 1 && self.digits[len - 1] == 0 {
            len -= 1;
        }
        len
    }

    /// Store the trimmed length back into `length`. The digit slots are
    /// left as they are.
    pub fn normalize(&mut self) {
        self.length = self.significant_length();
    }

    pub fn is_overflowed(&self) -> bool {
        self.digits[GUARD] > 0
    }

    pub fn is_zero(&self) -> bool {
        self.significant_length() == 1 && self.digits[0] == 0
    }

    pub fn is_zero_or_one(&self) -> bool {
        self.significant_length() == 1 && self.digits[0] <= 1
    }

    /// True when `self >= other` by magnitude.
    pub fn at_least(&self, other: &BigDecimal) -> bool {
        let len = self.significant_length();

        match len.cmp(&other.significant_length()) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => {
                for i in (0..len).rev() {
                    if self.digits[i] != other.digits[i] {
                        return self.digits[i] > other.digits[i];
                    }
                }
                true
            }
        }
    }

    /// Copy `src` into `self`, clearing whatever was there before.
    pub fn assign(&mut self, src: &BigDecimal) -> Result<()> {
        if src.is_overflowed() {
            return Err(Fatal::Overflow);
        }

        *self = BigDecimal::new();
        self.digits[..src.length].copy_from_slice(&src.digits[..src.length]);
        Ok(())
    }

    /// `self += addend`. Works over the whole `addend.length` window, so
    /// unused high-order slots of the addend must be zero.
    pub fn add(&mut self, addend: &BigDecimal) -> Result<()> {
        for i in 0..addend.length {
            self.digits[i] += addend.digits[i];
            if self.digits[i] >= TEN {
                self.carry_from(i);
            }
        }
        // a carry can reach at most one slot past the longer operand
        self.length = (self.length.max(addend.length) + 1).min(INTSIZE);

        if self.is_overflowed() {
            return Err(Fatal::Overflow);
        }
        Ok(())
    }

    /// `self *= rhs`, grade-school style. Partial products accumulate in a
    /// separate buffer so `rhs` may hold the same value as `self`.
    pub fn multiply(&mut self, rhs: &BigDecimal) -> Result<()> {
        let mut product = BigDecimal::new();
        let lhs_len = self.significant_length();
        let rhs_len = rhs.significant_length();

        for i in 0..rhs_len {
            let multiplier = rhs.digits[i];

            for j in 0..lhs_len {
                let partial = self.digits[j] * multiplier;
                if partial == 0 {
                    continue;
                }

                let position = i + j;
                if position >= GUARD {
                    return Err(Fatal::Overflow);
                }

                product.digits[position] += partial;
                product.carry_from(position);
            }

            if product.is_overflowed() {
                return Err(Fatal::Overflow);
            }
        }

        self.assign(&product)
    }

    /// `self -= rhs` by magnitude. Requires `self >= rhs`; the length is
    /// left untouched, call `normalize` afterwards when it matters.
    pub(crate) fn subtract(&mut self, rhs: &BigDecimal) {
        debug_assert!(self.at_least(rhs));

        let rhs_len = rhs.significant_length();
        let mut borrow = 0;
        let mut i = 0;

        while i < rhs_len || borrow > 0 {
            let sub = if i < rhs_len { rhs.digits[i] } else { 0 };
            let take = sub + borrow;
            if self.digits[i] >= take {
                self.digits[i] -= take;
                borrow = 0;
            } else {
                self.digits[i] = self.digits[i] + TEN - take;
                borrow = 1;
            }
            i += 1;
        }
    }

    /// Multiply by ten and place `digit` in the units slot, i.e. bring the
    /// next dividend digit down into a long-division window.
    pub(crate) fn shift_in(&mut self, digit: u8) {
        let len = self.significant_length();
        debug_assert!(len <= INTSIZE);

        self.digits.copy_within(0..len, 1);
        self.digits[0] = digit;
        self.length = len + 1;
    }

    /// The run of digits from `from` up to the significant length, moved
    /// down so that `digits[from]` becomes the units digit.
    pub(crate) fn upper_digits(&self, from: usize) -> BigDecimal {
        let len = self.significant_length();
        let mut run = BigDecimal::new();
        run.digits[..len - from].copy_from_slice(&self.digits[from..len]);
        run.length = len - from;
        run
    }

    /// Push a slot that went past 9 into the slots above it, for as long
    /// as the carry keeps spilling over. Stops at the guard slot.
    fn carry_from(&mut self, mut position: usize) {
        while position < GUARD && self.digits[position] >= TEN {
            let carry = self.digits[position] / TEN;
            self.digits[position + 1] = self.digits[position + 1].saturating_add(carry);
            self.digits[position] %= TEN;
            position += 1;
        }
    }
}

impl Default for BigDecimal {
    fn default() -> Self {
        BigDecimal::new()
    }
}

/// Equal by value; `length` is bookkeeping and does not take part.
impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for BigDecimal {}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.significant_length()).rev() {
            f.write_char(char::from(b'0' + self.digits[i]))?;
            if i > 0 && i % GROUP_WIDTH == 0 {
                f.write_char(',')?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigDecimal({})", self)
    }
}
