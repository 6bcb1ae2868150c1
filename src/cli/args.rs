use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shopping-cart")]
#[command(about = "Products, coupons and a shopping cart, driven from the command line")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in product, cart and coupon scenarios
    Demo,
    /// Build a cart, optionally apply a coupon, and print the result
    Checkout {
        /// Product to add, as NAME=PRICE (repeatable)
        #[arg(short, long = "item", value_name = "NAME=PRICE")]
        items: Vec<String>,
        /// JSON file with an array of products, added before --item
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Product to remove after adding, as NAME=PRICE (repeatable)
        #[arg(short, long = "remove", value_name = "NAME=PRICE")]
        remove: Vec<String>,
        /// Coupon to apply to the whole cart, as NAME=DISCOUNT
        #[arg(short, long, value_name = "NAME=DISCOUNT")]
        coupon: Option<String>,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
