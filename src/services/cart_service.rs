use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{Coupon, CouponError, Product, ShoppingCart};

#[derive(Error, Debug)]
pub enum CartServiceError {
    #[error("Invalid coupon: {0}")]
    InvalidCoupon(#[from] CouponError),

    #[error("Invalid price {price} for product '{name}': must be a finite, non-negative number")]
    InvalidPrice { name: String, price: f64 },
}

/// Contents and total of a cart at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub products: Vec<Product>,
    pub total_price: f64,
}

impl From<&ShoppingCart> for CartSummary {
    fn from(cart: &ShoppingCart) -> Self {
        Self {
            products: cart.products(),
            total_price: cart.total_price(),
        }
    }
}

pub struct CartService {
    cart: ShoppingCart,
    strict_coupons: bool,
}

impl CartService {
    pub fn new(strict_coupons: bool) -> Self {
        Self::with_cart(ShoppingCart::new(), strict_coupons)
    }

    pub fn with_cart(cart: ShoppingCart, strict_coupons: bool) -> Self {
        Self {
            cart,
            strict_coupons,
        }
    }

    /// Adds `product` to the cart. In strict mode a negative or non-finite
    /// price is rejected and the cart is left as it was.
    pub fn add_product(&mut self, product: Product) -> Result<(), CartServiceError> {
        if self.strict_coupons && !(product.price.is_finite() && product.price >= 0.0) {
            warn!("Rejected product '{}' with price {}", product.name, product.price);
            return Err(CartServiceError::InvalidPrice {
                name: product.name,
                price: product.price,
            });
        }

        info!("Adding product '{}' at {:.2}", product.name, product.price);
        self.cart.add(product);
        Ok(())
    }

    pub fn remove_product(&mut self, product: &Product) -> bool {
        let removed = self.cart.remove(product);
        if removed {
            info!("Removed product '{}' at {:.2}", product.name, product.price);
        } else {
            warn!(
                "Product '{}' at {:.2} is not in the cart, nothing removed",
                product.name, product.price
            );
        }
        removed
    }

    /// Applies `coupon` to the whole cart and returns the resulting summary.
    /// In strict mode an out-of-range coupon is rejected before the cart is
    /// touched.
    pub fn apply_coupon(&mut self, coupon: &Coupon) -> Result<CartSummary, CartServiceError> {
        if self.strict_coupons {
            coupon.check().map_err(|e| {
                warn!("Rejected coupon '{}': {}", coupon.name(), e);
                CartServiceError::InvalidCoupon(e)
            })?;
        }

        let before = self.cart.total_price();
        self.log_contents("before coupon");

        self.cart.apply(coupon);

        self.log_contents("after coupon");
        let summary = self.summary();
        info!(
            "Applied coupon '{}': total {:.2} -> {:.2}",
            coupon.name(),
            before,
            summary.total_price
        );
        Ok(summary)
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from(&self.cart)
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    pub fn into_cart(self) -> ShoppingCart {
        self.cart
    }

    fn log_contents(&self, stage: &str) {
        debug!("Shopping cart {}:", stage);
        for product in &self.cart {
            debug!("  {}", product);
        }
        debug!("Total price: ${:.2}", self.cart.total_price());
    }
}
