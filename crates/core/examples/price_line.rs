//! Price Line Example
//!
//! Prices a single product line and prints the audit trail.
//!
//! Use `-p` to set the unit price, `-q` the quantity and `-d` to add discounts
//! in order, e.g. `-d percentage:10 -d flat:5 -d bogo`.

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;

use rebate::prelude::*;

#[derive(Debug, Parser)]
struct Args {
    /// Unit price
    #[arg(short, long, default_value = "100.00")]
    price: Decimal,

    /// Number of units
    #[arg(short, long, default_value_t = 1)]
    quantity: i64,

    /// Discounts as `type[:value]`, applied in order
    #[arg(short, long = "discount")]
    discounts: Vec<String>,
}

fn parse_discount(raw: &str) -> Result<DiscountSpec> {
    match raw.split_once(':') {
        Some((kind, value)) => {
            let value = value
                .parse::<Decimal>()
                .with_context(|| format!("invalid discount value in {raw:?}"))?;

            Ok(DiscountSpec::new(kind, Some(value)))
        }
        None => Ok(DiscountSpec::new(raw, None)),
    }
}

#[expect(clippy::print_stdout, reason = "Example program output to user")]
pub fn main() -> Result<()> {
    let args = Args::parse();

    let product = Product::new("example", "Example Product", Money::from_decimal(args.price)?)?;

    let discounts = args
        .discounts
        .iter()
        .map(|raw| parse_discount(raw))
        .collect::<Result<Vec<_>>>()?;

    let result = calculate(&product, args.quantity, &discounts)?;

    println!("{} x {}", result.quantity(), product.unit_price());
    println!("Original:   {}", result.original_price());

    for applied in result.applied_discounts() {
        println!("  {:<24} -{}", applied.rule(), applied.saved());
    }

    println!("Discounted: {}", result.discounted_price());
    println!("Savings:    {}", result.savings());

    Ok(())
}
