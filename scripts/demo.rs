// scripts/demo.rs
//
// Prints closed-form prices for the illustrative parameter set under both
// models. Optionally takes selector strings ("van call", "aon put", ...)
// to price a subset; an unrecognized selector reports the parse error.

use option_analytics::analytics::{bachelier, black_scholes};
use option_analytics::payoff::PayoffKind;

fn main() {
    let spot = 50.0;
    let strike = 20.0;
    let r = 0.13;
    let sigma = 0.2;
    let t = 4.0;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let payoffs: Vec<PayoffKind> = if args.is_empty() {
        PayoffKind::ALL.to_vec()
    } else {
        let mut selected = Vec::with_capacity(args.len());
        for arg in &args {
            match arg.parse::<PayoffKind>() {
                Ok(kind) => selected.push(kind),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        selected
    };

    println!("Parameters: S0={}, K={}, r={}, sigma={}, T={}\n", spot, strike, r, sigma, t);

    println!("Bachelier model");
    for payoff in &payoffs {
        let price = bachelier::price(spot, strike, sigma, t, *payoff);
        println!("{}: {:.6}", payoff.description(), price);
    }

    println!("\nBlack-Scholes model");
    for payoff in &payoffs {
        let price = black_scholes::price(spot, strike, r, sigma, t, *payoff);
        println!("{}: {:.6}", payoff.description(), price);
    }

    println!("\nBlack-Scholes vanilla call Greeks");
    println!("Delta: {:.6}", black_scholes::call_delta(spot, strike, r, sigma, t));
    println!("Gamma: {:.6}", black_scholes::call_gamma(spot, strike, r, sigma, t));
    println!("Vega:  {:.6}", black_scholes::call_vega(spot, strike, r, sigma, t));
    println!("Theta: {:.6}", black_scholes::call_theta(spot, strike, r, sigma, t));
    println!("Rho:   {:.6}", black_scholes::call_rho(spot, strike, r, sigma, t));
}
