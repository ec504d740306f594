//! USD running totals.
//!
//! [`Balances`] is the accumulator the host hands out through
//! [`FetchOptions::create_balances`](crate::FetchOptions::create_balances).
//! Amounts are kept as exact decimals so sums and differences carry no
//! rounding error.

use alloy::primitives::U256;
use fastnum::decimal::{Context, Decimal, RoundingMode, Sign};
use fastnum::{D256, bint, dec256};
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Decimals of the collateral token and of the fee/rebate amounts.
pub const COLLATERAL_DECIMALS: u8 = 18;

/// Convert a raw on-chain integer into a decimal scaled by `10^decimals`.
///
/// # Errors
///
/// Returns [`Error::AmountOverflow`] if `value` does not fit the decimal
/// mantissa.
pub fn to_decimal(value: U256, decimals: u8) -> Result<D256> {
    let unscaled =
        bint::UInt::<4>::from_le_slice(value.as_le_slice()).ok_or(Error::AmountOverflow(value))?;
    Ok(Decimal::<4>::from_parts(
        unscaled,
        -i32::from(decimals),
        Sign::Plus,
        Context::default().with_rounding_mode(RoundingMode::Floor),
    ))
}

/// A USD-denominated running total.
#[derive(Debug, Clone, PartialEq)]
pub struct Balances {
    usd: D256,
}

impl Default for Balances {
    fn default() -> Self {
        Self::new()
    }
}

impl Balances {
    /// An empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self { usd: D256::ZERO }
    }

    /// Add an amount already expressed in USD.
    pub fn add_usd_value(&mut self, value: D256) {
        self.usd = self.usd + value;
    }

    /// Add a raw integer amount that carries `decimals` decimals.
    ///
    /// # Errors
    ///
    /// See [`to_decimal`].
    pub fn add_scaled(&mut self, raw: U256, decimals: u8) -> Result<()> {
        self.add_usd_value(to_decimal(raw, decimals)?);
        Ok(())
    }

    /// Add half of a raw integer amount that carries `decimals` decimals.
    ///
    /// # Errors
    ///
    /// See [`to_decimal`].
    pub fn add_scaled_half(&mut self, raw: U256, decimals: u8) -> Result<()> {
        self.add_usd_value(to_decimal(raw, decimals)? / dec256!(2));
        Ok(())
    }

    /// Subtract another accumulator's total from this one.
    pub fn subtract(&mut self, other: &Self) {
        self.usd = self.usd - other.usd;
    }

    /// The accumulated USD value.
    #[must_use]
    pub const fn usd_value(&self) -> D256 {
        self.usd
    }

    /// Whether nothing (or a net zero) has been accumulated.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.usd == D256::ZERO
    }
}

/// Render `value` in positional notation, without an exponent and without
/// trailing fractional zeros.
fn plain(value: D256) -> String {
    let value = value.reduce();
    let digits = value.digits().to_str_radix(10);
    let scale = value.fractional_digits_count();

    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() && !value.is_zero() {
        out.push('-');
    }
    match usize::try_from(scale) {
        Ok(0) => out.push_str(&digits),
        Ok(scale) if scale < digits.len() => {
            let (whole, frac) = digits.split_at(digits.len() - scale);
            out.push_str(whole);
            out.push('.');
            out.push_str(frac);
        }
        Ok(scale) => {
            out.push_str("0.");
            out.extend(std::iter::repeat_n('0', scale - digits.len()));
            out.push_str(&digits);
        }
        // Negative scale: whole number with `-scale` implied trailing zeros.
        Err(_) => {
            out.push_str(&digits);
            if !value.is_zero() {
                out.extend(std::iter::repeat_n('0', usize::from(scale.unsigned_abs())));
            }
        }
    }
    out
}

impl std::fmt::Display for Balances {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&plain(self.usd))
    }
}

impl Serialize for Balances {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(units: u64) -> U256 {
        U256::from(units) * U256::from(10u64).pow(U256::from(18))
    }

    #[test]
    fn scales_by_decimals() {
        assert_eq!(to_decimal(wei(3), 18).unwrap(), dec256!(3), "whole units");
        assert_eq!(
            to_decimal(U256::from(1_500_000u64), 6).unwrap(),
            dec256!(1.5),
            "six decimals"
        );
        assert_eq!(
            to_decimal(U256::from(1u64), 18).unwrap(),
            dec256!(0.000000000000000001),
            "one wei"
        );
    }

    #[test]
    fn converts_the_largest_amount() {
        assert!(to_decimal(U256::MAX, 18).is_ok(), "U256::MAX fits the mantissa");
    }

    #[test]
    fn halving_keeps_odd_wei() {
        let mut b = Balances::new();
        b.add_scaled_half(U256::from(3u64), 18).unwrap();
        assert_eq!(
            b.usd_value(),
            dec256!(0.0000000000000000015),
            "half of three wei"
        );
    }

    #[test]
    fn renders_without_exponent() {
        let mut b = Balances::new();
        b.add_scaled(U256::from(105u64), 18).unwrap();
        assert_eq!(b.to_string(), "0.000000000000000105", "tiny amounts stay positional");

        let mut whole = Balances::new();
        whole.add_scaled(wei(2_000), 18).unwrap();
        assert_eq!(whole.to_string(), "2000", "trailing zeros are not an exponent");

        let mut net = Balances::new();
        net.add_usd_value(dec256!(-3.50));
        assert_eq!(net.to_string(), "-3.5", "sign kept, fraction trimmed");

        assert_eq!(Balances::new().to_string(), "0", "zero");
        assert_eq!(
            serde_json::to_value(&b).unwrap(),
            "0.000000000000000105",
            "serialized like display"
        );
    }

    #[test]
    fn subtract_can_go_negative() {
        let mut fees = Balances::new();
        fees.add_scaled(wei(1), 18).unwrap();
        let mut rebates = Balances::new();
        rebates.add_scaled(wei(3), 18).unwrap();

        let mut net = fees.clone();
        net.subtract(&rebates);
        assert_eq!(net.usd_value(), dec256!(-2), "rebates exceed fees");
        assert_eq!(fees.usd_value(), dec256!(1), "clone leaves the source intact");
        assert!(!net.is_zero(), "non-zero");
        assert!(Balances::default().is_zero(), "default is zero");
    }
}
