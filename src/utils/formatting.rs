use console::style;
use tabled::{Table, Tabled, settings::{Style, Alignment}};

use crate::models::{Coupon, Product};
use crate::services::CartSummary;

#[derive(Tabled)]
struct ProductTableRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn format_product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let rows: Vec<ProductTableRow> = products
        .iter()
        .enumerate()
        .map(|(i, product)| ProductTableRow {
            position: i + 1,
            name: if product.name.chars().count() > 30 {
                format!("{}...", product.name.chars().take(27).collect::<String>())
            } else {
                product.name.clone()
            },
            price: format_price(product.price),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}

pub fn format_cart_summary(summary: &CartSummary) -> String {
    let mut output = String::new();

    if summary.products.is_empty() {
        output.push_str(&format!("{}\n", style("Cart is empty").dim()));
    } else {
        output.push_str(&format_product_table(&summary.products));
        output.push('\n');
    }

    let total = format_price(summary.total_price);
    let total = if summary.total_price < 0.0 {
        style(total).red()
    } else {
        style(total).green()
    };
    output.push_str(&format!("{}: {}\n", style("Total price").bold(), total));

    output
}

pub fn format_coupon(coupon: &Coupon) -> String {
    format!(
        "{} {}",
        style(coupon.name()).cyan(),
        style(format!("({}% off)", coupon.discount())).yellow()
    )
}
