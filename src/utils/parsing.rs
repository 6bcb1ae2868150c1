use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::models::{Coupon, Product};

/// Splits `NAME=VALUE` on the last `=`, so names may contain `=` themselves.
fn split_pair<'a>(input: &'a str, what: &str) -> Result<(&'a str, f64)> {
    let (name, value) = input
        .rsplit_once('=')
        .with_context(|| format!("Invalid {} '{}'. Use NAME=VALUE", what, input))?;

    let name = name.trim();
    if name.is_empty() {
        bail!("Invalid {} '{}': name is empty", what, input);
    }

    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid {} '{}': '{}' is not a number", what, input, value))?;

    Ok((name, value))
}

/// Parses `Book=20` into a product.
pub fn parse_product(input: &str) -> Result<Product> {
    let (name, price) = split_pair(input, "product")?;
    Ok(Product::new(name, price))
}

/// Parses `Holiday Sale=20` into a coupon. The range is checked later, and
/// only in strict mode.
pub fn parse_coupon(input: &str) -> Result<Coupon> {
    let (name, discount) = split_pair(input, "coupon")?;
    Ok(Coupon::new(name, discount))
}

/// Reads a JSON array of products, e.g. `[{"name": "Book", "price": 20.0}]`.
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read product file {}", path.display()))?;

    let products: Vec<Product> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse product file {}", path.display()))?;

    tracing::debug!("Loaded {} products from {}", products.len(), path.display());
    Ok(products)
}
