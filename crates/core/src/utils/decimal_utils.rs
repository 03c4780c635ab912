//! Decimal quantization helpers.
//!
//! All monetary amounts are quantized half-up (midpoint away from zero)
//! at 2 fractional digits, exchange rates at 6. Every module rounds
//! through these helpers so the policy lives in one place.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serializer;
use std::collections::HashMap;

use crate::constants::{MONEY_SCALE, RATE_SCALE};

/// Quantize a monetary amount to 2 fractional digits, half-up.
///
/// Idempotent: `quantize_money(quantize_money(x)) == quantize_money(x)`.
pub fn quantize_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Quantize an exchange rate to 6 fractional digits, half-up.
pub fn quantize_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a monetary amount with exactly 2 fractional digits.
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", quantize_money(value))
}

/// Render an exchange rate with exactly 6 fractional digits.
pub fn format_rate(value: Decimal) -> String {
    format!("{:.6}", quantize_rate(value))
}

/// Serialize a Decimal as a 2-fractional-digit string.
pub fn serialize_money<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_money(*value))
}

/// Serialize an optional Decimal as a 2-fractional-digit string.
pub fn serialize_opt_money<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_some(&format_money(*v)),
        None => serializer.serialize_none(),
    }
}

/// Serialize an optional Decimal as a 6-fractional-digit string.
pub fn serialize_opt_rate<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_some(&format_rate(*v)),
        None => serializer.serialize_none(),
    }
}

/// Serialize a member -> amount map as 2-fractional-digit strings.
pub fn serialize_money_map<S>(
    value: &HashMap<String, Decimal>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rendered: HashMap<&String, String> = value
        .iter()
        .map(|(k, v)| (k, format_money(*v)))
        .collect();
    serializer.collect_map(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quantize_money_half_up() {
        assert_eq!(quantize_money(dec!(1.005)), dec!(1.01));
        assert_eq!(quantize_money(dec!(1.004)), dec!(1.00));
        assert_eq!(quantize_money(dec!(-1.005)), dec!(-1.01));
    }

    #[test]
    fn test_quantize_money_idempotent() {
        let once = quantize_money(dec!(33.333333));
        assert_eq!(quantize_money(once), once);
    }

    #[test]
    fn test_quantize_rate_half_up() {
        assert_eq!(quantize_rate(dec!(0.0000005)), dec!(0.000001));
        assert_eq!(quantize_rate(dec!(0.0000004)), dec!(0.000000));
    }

    #[test]
    fn test_format_money_pads_to_two_digits() {
        assert_eq!(format_money(dec!(30)), "30.00");
        assert_eq!(format_money(dec!(-0.5)), "-0.50");
    }

    #[test]
    fn test_format_rate_pads_to_six_digits() {
        assert_eq!(format_rate(dec!(90)), "90.000000");
    }
}
