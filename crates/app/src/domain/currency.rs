//! Kenyan shilling formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as whole Kenyan shillings with thousands separators,
/// e.g. `KES 4,500`.
#[must_use]
pub fn format_kes(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("KES -{grouped}")
    } else {
        format!("KES {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_kes(Decimal::from(4500)), "KES 4,500");
        assert_eq!(format_kes(Decimal::from(1_250_000)), "KES 1,250,000");
        assert_eq!(format_kes(Decimal::from(800)), "KES 800");
    }

    #[test]
    fn rounds_to_whole_shillings() {
        assert_eq!(format_kes(Decimal::new(99_950, 2)), "KES 1,000");
        assert_eq!(format_kes(Decimal::new(12_344, 1)), "KES 1,234");
    }

    #[test]
    fn zero_has_no_sign() {
        assert_eq!(format_kes(Decimal::ZERO), "KES 0");
        assert_eq!(format_kes(Decimal::new(-1, 1)), "KES 0");
    }
}
