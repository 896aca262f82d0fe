//! Amounts
//!
//! Decimal arithmetic that refuses to round. `rust_decimal`'s `checked_*`
//! methods only fail on magnitude overflow and silently drop low-order digits
//! once a result needs more than 28 significant digits; these fail instead.

use rust_decimal::Decimal;

/// Add two amounts, `None` on overflow or loss of precision.
pub fn exact_add(a: Decimal, b: Decimal) -> Option<Decimal> {
    let sum = a.checked_add(b)?;

    (sum.scale() >= a.scale().max(b.scale()) && sum.checked_sub(b) == Some(a)).then_some(sum)
}

/// Subtract `b` from `a`, `None` on overflow or loss of precision.
pub fn exact_sub(a: Decimal, b: Decimal) -> Option<Decimal> {
    let difference = a.checked_sub(b)?;

    (difference.scale() >= a.scale().max(b.scale()) && difference.checked_add(b) == Some(a))
        .then_some(difference)
}

/// Multiply an amount by a whole quantity, `None` on overflow or loss of precision.
pub fn exact_mul(amount: Decimal, quantity: u64) -> Option<Decimal> {
    let product = amount.checked_mul(Decimal::from(quantity))?;

    (product.scale() >= amount.scale()).then_some(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_pow_28() -> Decimal {
        Decimal::from_i128_with_scale(10_i128.pow(28), 0)
    }

    #[test]
    fn exact_add_keeps_every_digit() {
        assert_eq!(
            exact_add(Decimal::new(1, 1), Decimal::new(2, 1)),
            Some(Decimal::new(3, 1))
        );
        assert_eq!(
            exact_add(Decimal::from(-10), Decimal::new(25, 1)),
            Some(Decimal::new(-75, 1))
        );
    }

    #[test]
    fn exact_add_rejects_rounded_sum() {
        assert_eq!(exact_add(ten_pow_28(), Decimal::new(3, 1)), None);
    }

    #[test]
    fn exact_add_rejects_overflow() {
        assert_eq!(exact_add(Decimal::MAX, Decimal::ONE), None);
    }

    #[test]
    fn exact_sub_allows_negative_results() {
        assert_eq!(
            exact_sub(Decimal::from(10), Decimal::from(20)),
            Some(Decimal::from(-10))
        );
    }

    #[test]
    fn exact_sub_rejects_rounded_difference() {
        assert_eq!(exact_sub(ten_pow_28(), Decimal::new(3, 1)), None);
    }

    #[test]
    fn exact_sub_rejects_overflow() {
        assert_eq!(exact_sub(Decimal::MAX, Decimal::MIN), None);
    }

    #[test]
    fn exact_mul_scales_by_quantity() {
        assert_eq!(exact_mul(Decimal::new(3, 2), 3), Some(Decimal::new(9, 2)));
    }

    #[test]
    fn exact_mul_rejects_rounded_product() {
        let amount = Decimal::from_i128_with_scale(7_000_000_000_000_000_000_000_000_001, 28);

        assert_eq!(exact_mul(amount, 20), None);
    }

    #[test]
    fn exact_mul_rejects_overflow() {
        assert_eq!(exact_mul(Decimal::MAX, 2), None);
    }
}
