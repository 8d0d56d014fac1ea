//! Conversion between microalgos and algos.
//!
//! Amounts are converted with exact decimal arithmetic. Binary floating point
//! is never involved, so a microalgo count survives a round trip through its
//! algo representation unchanged.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::MICROALGOS_TO_ALGOS_RATIO;
use crate::error::{Result, UtilError};

/// Convert microalgos to algos.
///
/// Negative amounts keep their sign. No bounds checking is applied.
pub fn microalgos_to_algos(microalgos: i64) -> Decimal {
    Decimal::from(microalgos) / Decimal::from(MICROALGOS_TO_ALGOS_RATIO)
}

/// Convert algos to microalgos.
///
/// Accepts integers or decimals. Fractions of a microalgo are rounded to the
/// nearest integer, ties to even, so `0.0000025` algos is `2` microalgos.
pub fn algos_to_microalgos(algos: impl Into<Decimal>) -> Result<i64> {
    let algos = algos.into();
    let scaled = algos
        .checked_mul(Decimal::from(MICROALGOS_TO_ALGOS_RATIO))
        .ok_or_else(|| UtilError::AmountOverflow(algos.to_string()))?;

    scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()
        .ok_or_else(|| UtilError::AmountOverflow(algos.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_microalgos_to_algos() {
        assert_eq!(microalgos_to_algos(1_000_000), Decimal::ONE);
        assert_eq!(microalgos_to_algos(1), Decimal::new(1, 6));
        assert_eq!(microalgos_to_algos(0), Decimal::ZERO);
        assert_eq!(microalgos_to_algos(-2_500_000), Decimal::new(-25, 1));
    }

    #[test]
    fn test_algos_to_microalgos_integer_input() {
        assert_eq!(algos_to_microalgos(3).unwrap(), 3_000_000);
        assert_eq!(algos_to_microalgos(0u64).unwrap(), 0);
        assert_eq!(algos_to_microalgos(-1i32).unwrap(), -1_000_000);
    }

    #[test]
    fn test_algos_to_microalgos_decimal_input() {
        assert_eq!(algos_to_microalgos(Decimal::new(123_456_789, 6)).unwrap(), 123_456_789);
        assert_eq!(algos_to_microalgos(Decimal::new(15, 1)).unwrap(), 1_500_000);
    }

    #[test]
    fn test_rounding_is_half_to_even() {
        assert_eq!(algos_to_microalgos(Decimal::new(5, 7)).unwrap(), 0);
        assert_eq!(algos_to_microalgos(Decimal::new(15, 7)).unwrap(), 2);
        assert_eq!(algos_to_microalgos(Decimal::new(25, 7)).unwrap(), 2);
        assert_eq!(algos_to_microalgos(Decimal::new(35, 7)).unwrap(), 4);
        assert_eq!(algos_to_microalgos(Decimal::new(-25, 7)).unwrap(), -2);

        // Not a tie: ordinary nearest rounding.
        assert_eq!(algos_to_microalgos(Decimal::new(26, 7)).unwrap(), 3);
        assert_eq!(algos_to_microalgos(Decimal::new(24, 7)).unwrap(), 2);
    }

    #[test]
    fn test_algos_to_microalgos_overflow() {
        let result = algos_to_microalgos(Decimal::MAX);
        assert!(matches!(result, Err(UtilError::AmountOverflow(_))));

        // Fits in a Decimal but not in an i64 microalgo count.
        let result = algos_to_microalgos(Decimal::from(i64::MAX));
        assert!(matches!(result, Err(UtilError::AmountOverflow(_))));
    }

    proptest! {
        #[test]
        fn test_roundtrip_exact(microalgos in any::<i64>()) {
            let algos = microalgos_to_algos(microalgos);
            prop_assert_eq!(algos_to_microalgos(algos).unwrap(), microalgos);
        }
    }
}
