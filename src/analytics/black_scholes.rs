// src/analytics/black_scholes.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! Risk-neutral pricing gives closed-form solutions in the cumulative
//! normal distribution Φ and density φ, via the standardized moneyness
//! terms:
//! ```text
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! ```

use super::at_the_money_limit;
use crate::math_utils::{norm_cdf, norm_pdf};
use crate::payoff::PayoffKind;

/// Standardized moneyness terms (d₁, d₂) shared by price and Greeks.
#[inline]
fn d1_d2(spot: f64, strike: f64, r: f64, sigma: f64, t: f64) -> (f64, f64) {
    let sig_sqrt_t = sigma * t.sqrt();
    let d1 = ((spot / strike).ln() + (r + 0.5 * sigma * sigma) * t) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Black-Scholes price for a European option
///
/// # Formulas
/// ```text
/// Vanilla call:        S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
/// Vanilla put:         K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
/// Cash-or-nothing:     e^(-rT)·Φ(d₂) call, e^(-rT)·Φ(-d₂) put
/// Asset-or-nothing:    S·Φ(d₁) call, S·Φ(-d₁) put
/// ```
///
/// At spot == strike the per-payoff limiting value is returned instead
/// (σ·S·√(T/(2π)) vanilla, 0.5 cash, S/2 asset).
///
/// # Parameters
/// - `spot`: Price of the underlying at time 0
/// - `strike`: Strike price
/// - `r`: Risk-free rate (drift of S)
/// - `sigma`: Volatility
/// - `t`: Time to expiration in years
/// - `payoff`: Payoff variant to price
///
/// # Returns
/// Present value of the option
pub fn price(spot: f64, strike: f64, r: f64, sigma: f64, t: f64, payoff: PayoffKind) -> f64 {
    if spot == strike {
        return at_the_money_limit(spot, sigma, t, payoff);
    }

    let (d1, d2) = d1_d2(spot, strike, r, sigma, t);
    let discount = (-r * t).exp();

    match payoff {
        PayoffKind::VanillaCall => spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
        PayoffKind::VanillaPut => strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1),
        PayoffKind::CashOrNothingCall => discount * norm_cdf(d2),
        PayoffKind::CashOrNothingPut => discount * norm_cdf(-d2),
        PayoffKind::AssetOrNothingCall => spot * norm_cdf(d1),
        PayoffKind::AssetOrNothingPut => spot * norm_cdf(-d1),
    }
}

/// Black-Scholes Delta (∂V/∂S) for the vanilla call: Φ(d₁).
pub fn call_delta(spot: f64, strike: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, _) = d1_d2(spot, strike, r, sigma, t);
    norm_cdf(d1)
}

/// Black-Scholes Gamma (∂²V/∂S²) for the vanilla call: φ(d₁)/(S·σ·√T).
///
/// Identical for the vanilla put.
pub fn call_gamma(spot: f64, strike: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, _) = d1_d2(spot, strike, r, sigma, t);
    norm_pdf(d1) / (spot * sigma * t.sqrt())
}

/// Black-Scholes Vega (∂V/∂σ) for the vanilla call: S·φ(d₁)·√T.
pub fn call_vega(spot: f64, strike: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, _) = d1_d2(spot, strike, r, sigma, t);
    spot * norm_pdf(d1) * t.sqrt()
}

/// Black-Scholes Theta (∂V/∂t) for the vanilla call:
/// -S·φ(d₁)·σ/(2√T) - r·K·e^(-rT)·Φ(d₂).
pub fn call_theta(spot: f64, strike: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(spot, strike, r, sigma, t);
    -spot * norm_pdf(d1) * sigma / (2.0 * t.sqrt()) - r * strike * (-r * t).exp() * norm_cdf(d2)
}

/// Black-Scholes Rho (∂V/∂r) for the vanilla call: K·T·e^(-rT)·Φ(d₂).
pub fn call_rho(spot: f64, strike: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (_, d2) = d1_d2(spot, strike, r, sigma, t);
    strike * t * (-r * t).exp() * norm_cdf(d2)
}
