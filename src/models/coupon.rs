use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// A named percentage discount. Immutable once constructed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct Coupon {
    #[validate(length(min = 1, max = 255, message = "Coupon name must be 1-255 characters"))]
    name: String,

    #[validate(range(min = 0.0, max = 100.0, message = "Discount must be between 0 and 100"))]
    discount: f64,
}

// custom error
#[derive(Debug, thiserror::Error)]
pub enum CouponError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),
}

impl Coupon {
    /// Builds a coupon without checking the discount range.
    pub fn new(name: impl Into<String>, discount: f64) -> Self {
        Self {
            name: name.into(),
            discount,
        }
    }

    /// Builds a coupon whose discount lies in `[0, 100]` and whose name is
    /// not blank.
    pub fn validated(name: impl Into<String>, discount: f64) -> Result<Self, CouponError> {
        let coupon = Self::new(name, discount);
        coupon.check()?;
        Ok(coupon)
    }

    /// Runs the same checks as [`Coupon::validated`] on an existing coupon.
    pub fn check(&self) -> Result<(), CouponError> {
        self.validate()?;

        // range() lets NaN through since every comparison with it is false
        if self.discount.is_nan() {
            let mut errors = ValidationErrors::new();
            errors.add("discount", ValidationError::new("discount_not_a_number"));
            return Err(CouponError::ValidationError(errors));
        }

        if self.name.trim().is_empty() {
            let mut errors = ValidationErrors::new();
            errors.add("name", ValidationError::new("name_blank"));
            return Err(CouponError::ValidationError(errors));
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Factor a price is multiplied by when this coupon is applied.
    pub fn multiplier(&self) -> f64 {
        1.0 - self.discount / 100.0
    }
}

impl std::fmt::Display for Coupon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}% off)", self.name, self.discount)
    }
}
