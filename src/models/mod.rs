pub mod product;
pub mod coupon;
pub mod cart;

// Re-exports
pub use product::*;
pub use coupon::*;
pub use cart::*;
