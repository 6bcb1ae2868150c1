use serde::{Deserialize, Serialize};

use crate::models::{coupon::Coupon, product::Product};

/// Ordered collection of products. Insertion order is kept and duplicates
/// are allowed; the cart owns its own copies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingCart {
    products: Vec<Product>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes the first product equal to `product`. Returns `false` and
    /// leaves the cart alone when there is no match.
    pub fn remove(&mut self, product: &Product) -> bool {
        match self.products.iter().position(|p| p == product) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sum of all prices, recomputed on every call. Starts from `0.0`, so an
    /// empty cart totals positive zero.
    pub fn total_price(&self) -> f64 {
        self.products.iter().fold(0.0, |acc, p| acc + p.price)
    }

    /// Applies `coupon` to every product, in order.
    pub fn apply(&mut self, coupon: &Coupon) {
        for product in self.products.iter_mut() {
            product.apply(coupon);
        }
    }

    /// Snapshot of the current products.
    pub fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for ShoppingCart {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

impl Extend<Product> for ShoppingCart {
    fn extend<I: IntoIterator<Item = Product>>(&mut self, iter: I) {
        self.products.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ShoppingCart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::apply_coupon;

    fn setup() -> ShoppingCart {
        ShoppingCart::new()
    }

    fn assert_close(left: f64, right: f64) {
        assert!((left - right).abs() < 1e-9, "{} != {}", left, right);
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = setup();
        assert_eq!(cart.total_price(), 0.0);
        assert!(!cart.total_price().is_sign_negative());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_emptied_cart_total_is_positive_zero() {
        let mut cart = setup();
        cart.add(Product::new("Book", 10.0));
        cart.remove(&Product::new("Book", 10.0));

        assert!(!cart.total_price().is_sign_negative());
        assert_eq!(format!("{:.2}", cart.total_price()), "0.00");
    }

    #[test]
    fn test_calculating_total_price() {
        let mut cart = setup();
        assert_eq!(cart.total_price(), 0.0);

        cart.add(Product::new("Book", 20.0));
        cart.add(Product::new("Movie", 15.0));

        assert_eq!(cart.total_price(), 35.0);
    }

    #[test]
    fn test_applying_coupon_to_cart() {
        let mut cart = setup();
        cart.add(Product::new("Book", 20.0));
        cart.add(Product::new("Movie", 15.0));

        cart.apply(&Coupon::new("Holiday Sale", 20.0));

        assert_eq!(cart.total_price(), 28.0);
    }

    #[test]
    fn test_total_tracks_every_add() {
        let mut cart = setup();
        let prices = [1.25, 9.99, 0.0, 100.0, 3.5];
        let mut running = 0.0;
        for (i, price) in prices.iter().enumerate() {
            cart.add(Product::new(format!("item-{}", i), *price));
            running += price;
            assert_close(cart.total_price(), running);
        }
    }

    #[test]
    fn test_cart_apply_equals_per_product_apply() {
        let originals = vec![
            Product::new("Book", 19.99),
            Product::new("Movie", 7.5),
            Product::new("Game", 59.0),
        ];
        let coupon = Coupon::new("Odd", 13.0);
        let mut cart: ShoppingCart = originals.iter().cloned().collect();

        cart.apply(&coupon);

        let expected: Vec<Product> = originals.iter().map(|p| apply_coupon(p, &coupon)).collect();
        assert_eq!(cart.products(), expected);
        assert_close(cart.total_price(), expected.iter().map(|p| p.price).sum());
    }

    #[test]
    fn test_remove_only_first_duplicate() {
        let mut cart = setup();
        cart.add(Product::new("Book", 10.0));
        cart.add(Product::new("Book", 10.0));

        assert!(cart.remove(&Product::new("Book", 10.0)));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_price(), 10.0);
    }

    #[test]
    fn test_remove_keeps_order_of_remaining() {
        let mut cart = setup();
        cart.add(Product::new("A", 1.0));
        cart.add(Product::new("B", 2.0));
        cart.add(Product::new("A", 1.0));
        cart.add(Product::new("C", 3.0));

        cart.remove(&Product::new("A", 1.0));

        let names: Vec<&str> = cart.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = setup();
        cart.add(Product::new("Book", 10.0));
        let before = cart.clone();

        assert!(!cart.remove(&Product::new("Book", 11.0)));
        assert!(!cart.remove(&Product::new("Movie", 10.0)));

        assert_eq!(cart, before);
    }

    #[test]
    fn test_products_is_a_snapshot() {
        let mut cart = setup();
        cart.add(Product::new("Book", 20.0));

        let mut snapshot = cart.products();
        snapshot[0].price = 0.0;
        snapshot.push(Product::new("Movie", 15.0));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_price(), 20.0);
    }

    #[test]
    fn test_extend_appends_in_order() {
        let mut cart = setup();
        cart.add(Product::new("First", 1.0));
        cart.extend(vec![Product::new("Second", 2.0), Product::new("Third", 3.0)]);

        let names: Vec<String> = cart.products().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}
