use serde::{Deserialize, Serialize};

use crate::models::coupon::Coupon;

/// A named item with a mutable price. Two products are equal when both the
/// name and the price match.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Discount this product in place: `price *= 1 - discount / 100`.
    ///
    /// The discount is not range checked, so a coupon above 100% yields a
    /// negative price. Use [`Coupon::validated`] to reject such coupons.
    pub fn apply(&mut self, coupon: &Coupon) {
        self.price *= coupon.multiplier();
    }

    /// Consuming variant of [`Product::apply`].
    pub fn with_coupon(mut self, coupon: &Coupon) -> Self {
        self.apply(coupon);
        self
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - ${:.2}", self.name, self.price)
    }
}

/// Returns a discounted copy of `product`, leaving the original untouched.
pub fn apply_coupon(product: &Product, coupon: &Coupon) -> Product {
    product.clone().with_coupon(coupon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applying_coupon() {
        // Given
        let mut product = Product::new("Book", 25.0);
        let coupon = Coupon::new("Holiday Sale", 20.0);

        // When
        product.apply(&coupon);

        // Then
        assert_eq!(product.price, 20.0);
        assert_eq!(product.name, "Book");
    }

    #[test]
    fn test_with_coupon_matches_apply() {
        let coupon = Coupon::new("Spring", 35.0);
        let mut mutated = Product::new("Lamp", 42.5);
        mutated.apply(&coupon);

        let transformed = Product::new("Lamp", 42.5).with_coupon(&coupon);
        assert_eq!(mutated, transformed);
    }

    #[test]
    fn test_apply_coupon_leaves_original_untouched() {
        let original = Product::new("Movie", 15.0);
        let coupon = Coupon::new("Holiday Sale", 20.0);

        let discounted = apply_coupon(&original, &coupon);

        assert_eq!(original.price, 15.0);
        assert_eq!(discounted.price, 12.0);
    }

    #[test]
    fn test_zero_discount_keeps_price() {
        let product = Product::new("Pen", 3.75).with_coupon(&Coupon::new("Nothing", 0.0));
        assert_eq!(product.price, 3.75);
    }

    #[test]
    fn test_unvalidated_discount_over_hundred_goes_negative() {
        let product = Product::new("Book", 10.0).with_coupon(&Coupon::new("Broken", 150.0));
        assert!(product.price < 0.0);
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(Product::new("Book", 10.0), Product::new("Book", 10.0));
        assert_ne!(Product::new("Book", 10.0), Product::new("Book", 11.0));
        assert_ne!(Product::new("Book", 10.0), Product::new("Movie", 10.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Product::new("Book", 20.0).to_string(), "Book - $20.00");
    }
}
