//! # option-analytics: Closed-Form European Option Pricing
//!
//! A Rust library for analytical pricing of European-style options under
//! two classical models, with six payoff variants each.
//!
//! ## Key Features
//!
//! - **Bachelier model**: arithmetic Brownian dynamics `dS = σ S₀ dW`
//! - **Black-Scholes model**: geometric Brownian dynamics `dS = r S dt + σ S dW`
//! - **Six payoffs per model**: vanilla call/put, cash-or-nothing digital
//!   call/put, asset-or-nothing digital call/put
//! - **Closed, exhaustive payoff enum**: every call site handles every case
//! - **Analytical Greeks**: Delta, Gamma, Vega, Theta, Rho for the
//!   Black-Scholes vanilla call
//!
//! ## Quick Start
//!
//! ```rust
//! use option_analytics::analytics::{bachelier, black_scholes};
//! use option_analytics::payoff::PayoffKind;
//!
//! // Price a vanilla call under both models
//! let (spot, strike, rate, sigma, t) = (50.0, 20.0, 0.13, 0.2, 4.0);
//!
//! let normal_price = bachelier::price(spot, strike, sigma, t, PayoffKind::VanillaCall);
//! let lognormal_price = black_scholes::price(spot, strike, rate, sigma, t, PayoffKind::VanillaCall);
//!
//! assert!(normal_price > 0.0);
//! assert!(lognormal_price > normal_price);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Every price is an expectation of the payoff under the model's terminal
//! distribution, reduced to a closed-form expression in the standard normal
//! CDF Φ and PDF φ. All functions are pure: no state, no I/O, safe to call
//! concurrently from any number of threads.

// Module declarations
pub mod error;
pub mod math_utils;
pub mod payoff;
pub mod analytics;

// Re-export commonly used types for convenience
pub use error::{PricingError, PricingResult};
pub use payoff::PayoffKind;
