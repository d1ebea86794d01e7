// examples/pricing_demo.rs

//! Demonstration of single-point Black-Scholes pricing
//!
//! This example shows how to:
//! 1. Build and validate market inputs
//! 2. Evaluate call/put prices and the full Greek set in one pass
//! 3. Pull one side's Greeks out of the shared report
//! 4. Check put-call parity on the result

use anyhow::Result;
use bs_heatmap_lib::{evaluate, price_and_greeks, MarketInputs, OptionKind};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2)?;
    println!(
        "Spot {:.2}, strike {:.2}, expiry {:.2}y, rate {:.2}%, vol {:.2}%",
        inputs.spot,
        inputs.strike,
        inputs.time_to_expiry,
        inputs.risk_free_rate * 100.0,
        inputs.volatility * 100.0
    );

    let report = evaluate(&inputs)?;
    println!("\nd1 = {:.6}, d2 = {:.6}", report.d1, report.d2);

    println!("\n{:<8} {:>10} {:>10}", "", "Call", "Put");
    println!("{}", "-".repeat(30));
    println!("{:<8} {:>10.4} {:>10.4}", "Price", report.call_price, report.put_price);
    println!("{:<8} {:>10.4} {:>10.4}", "Delta", report.call_delta, report.put_delta);
    println!("{:<8} {:>10.4} {:>10.4}", "Theta", report.call_theta, report.put_theta);
    println!("{:<8} {:>10.4} {:>10.4}", "Rho", report.call_rho, report.put_rho);

    println!("\nShared Greeks:");
    println!("  Gamma: {:.6}", report.gamma);
    println!("  Vega:  {:.6}", report.vega);
    println!("  Vanna: {:.6}", report.vanna);
    println!("  Volga: {:.6}", report.volga);

    let put = report.greeks(OptionKind::Put);
    println!("\nPut view: {:?}", put);

    let parity = inputs.spot - inputs.strike * inputs.discount_factor();
    println!(
        "\nPut-call parity: C - P = {:.10}, S - K*e^(-rT) = {:.10}",
        report.call_price - report.put_price,
        parity
    );

    // Invalid inputs are rejected before any arithmetic
    match price_and_greeks(100.0, 100.0, 0.0, 0.05, 0.2) {
        Ok(_) => println!("\nUnexpectedly priced an expired option"),
        Err(e) => println!("\nRejected: {}", e),
    }

    Ok(())
}
