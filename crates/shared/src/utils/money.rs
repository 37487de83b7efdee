use crate::errors::ServiceError;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds half away from zero: 2.345 becomes 2.35, -2.345 becomes -2.35.
/// The result always carries exactly `precision` decimal places.
pub fn to_fixed(amount: Decimal, precision: u32) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(precision);
    rounded
}

pub fn round_money(amount: Decimal) -> Decimal {
    to_fixed(amount, 2)
}

/// Rounds a monetary amount and rejects anything that is not strictly positive
/// after rounding.
pub fn ensure_positive_amount(field: &str, amount: Decimal) -> Result<Decimal, ServiceError> {
    let rounded = round_money(amount);
    if rounded <= Decimal::ZERO {
        return Err(ServiceError::invalid(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn midpoint_rounds_away_from_zero() {
        assert_eq!(to_fixed(dec!(2.345), 2), dec!(2.35));
        assert_eq!(to_fixed(dec!(2.344), 2), dec!(2.34));
        assert_eq!(to_fixed(dec!(-2.345), 2), dec!(-2.35));
        assert_eq!(to_fixed(dec!(0.005), 2), dec!(0.01));
    }

    #[test]
    fn precision_is_respected() {
        assert_eq!(to_fixed(dec!(7.25), 1), dec!(7.3));
        assert_eq!(to_fixed(dec!(7.5), 0), dec!(8));
        assert_eq!(round_money(dec!(5)), dec!(5.00));
    }

    #[test]
    fn scale_is_padded_for_display() {
        assert_eq!(round_money(dec!(13)).to_string(), "13.00");
        assert_eq!(round_money(dec!(2.5)).to_string(), "2.50");
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        assert_eq!(ensure_positive_amount("price", dec!(4.999)).unwrap(), dec!(5.00));
        assert!(ensure_positive_amount("price", dec!(0)).is_err());
        assert!(ensure_positive_amount("price", dec!(0.004)).is_err());
        assert!(ensure_positive_amount("unitPrice", dec!(-1)).is_err());
    }
}
