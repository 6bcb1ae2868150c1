use std::path::PathBuf;

use anyhow::{Context, Result};
use console::{style, Emoji};
use tracing::{error, info};

use crate::{
    cli::args::*,
    models::{Coupon, Product},
    services::{CartService, CartSummary},
    utils::{
        formatting::{format_cart_summary, format_coupon, format_price},
        load_products, parse_coupon, parse_product, Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static CART: Emoji<'_, '_> = Emoji("🛒 ", "");

/// Everything `checkout` needs, already taken out of the clap arguments.
#[derive(Debug, Default)]
pub struct CheckoutRequest {
    pub items: Vec<String>,
    pub file: Option<PathBuf>,
    pub remove: Vec<String>,
    pub coupon: Option<String>,
}

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self, args: Args) -> Result<()> {
        match args.command {
            Commands::Demo => self.handle_demo(),
            Commands::Checkout { items, file, remove, coupon, format } => {
                let request = CheckoutRequest { items, file, remove, coupon };
                self.handle_checkout(request, format)
            }
        }
    }

    fn handle_demo(&self) -> Result<()> {
        println!("{} {}", CART, style("Applying a coupon to a product").bold().cyan());
        let coupon = Coupon::new("Holiday Sale", 20.0);
        let mut product = Product::new("Book", 25.0);
        println!("Before: {}", product);
        product.apply(&coupon);
        println!("After {}: {}", format_coupon(&coupon), product);
        println!();

        println!("{} {}", CART, style("Calculating the total price").bold().cyan());
        let mut service = CartService::new(self.config.strict_coupons);
        println!("Empty cart total: {}", format_price(service.summary().total_price));
        service.add_product(Product::new("Book", 20.0))?;
        service.add_product(Product::new("Movie", 15.0))?;
        print!("{}", format_cart_summary(&service.summary()));
        println!();

        println!("{} {}", CART, style("Applying a coupon to the cart").bold().cyan());
        println!("Coupon: {}", format_coupon(&coupon));
        let summary = service.apply_coupon(&coupon)?;
        print!("{}", format_cart_summary(&summary));

        println!("{} Demo finished", CHECKMARK);
        info!("Demo finished with total {:.2}", summary.total_price);
        Ok(())
    }

    fn handle_checkout(&self, request: CheckoutRequest, format: OutputFormat) -> Result<()> {
        let summary = match self.checkout(request) {
            Ok(summary) => summary,
            Err(e) => {
                println!("{} Checkout failed: {}", CROSS, style(format!("{:#}", e)).red());
                error!("Checkout failed: {:#}", e);
                return Err(e);
            }
        };

        match format {
            OutputFormat::Table => {
                if summary.products.is_empty() {
                    println!("{} No products in cart", INFO);
                }
                print!("{}", format_cart_summary(&summary));
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&summary)
                    .context("Failed to serialize cart summary")?;
                println!("{}", json);
            }
        }

        Ok(())
    }

    /// Builds the cart described by `request` and returns its final state.
    pub fn checkout(&self, request: CheckoutRequest) -> Result<CartSummary> {
        let mut service = CartService::new(self.config.strict_coupons);
        if let Some(path) = &request.file {
            for product in load_products(path)? {
                service
                    .add_product(product)
                    .with_context(|| format!("Invalid product in {}", path.display()))?;
            }
        }

        for item in &request.items {
            service.add_product(parse_product(item)?)?;
        }

        for item in &request.remove {
            service.remove_product(&parse_product(item)?);
        }

        match &request.coupon {
            Some(raw) => {
                let coupon = parse_coupon(raw)?;
                let summary = service
                    .apply_coupon(&coupon)
                    .with_context(|| format!("Could not apply coupon '{}'", coupon.name()))?;
                Ok(summary)
            }
            None => Ok(service.summary()),
        }
    }
}
