// src/analytics/bachelier.rs
//! Analytical Bachelier (arithmetic Brownian) formulas for European options
//!
//! # Mathematical Foundation
//!
//! Under this Bachelier variant, the underlying follows additive dynamics
//! scaled by the initial spot:
//! ```text
//! dS_t = σ S_0 dW_t,   so   S_T = S_0 (1 + σ W_T)
//! ```
//!
//! The terminal price is normal with mean S_0 and standard deviation
//! S_0 σ √T, which gives closed-form prices in terms of the standardized
//! moneyness:
//! ```text
//! d = (K - S_0) / (S_0 σ √T)
//! ```

use super::at_the_money_limit;
use crate::math_utils::{norm_cdf, norm_pdf};
use crate::payoff::PayoffKind;

/// Bachelier price for a European option
///
/// # Formulas
/// ```text
/// Vanilla call:        (S-K)·Φ(-d) + Sσ√T·φ(-d)
/// Vanilla put:         (K-S)·Φ(d)  + Sσ√T·φ(d)
/// Cash-or-nothing:     Φ(-d) call, Φ(d) put
/// Asset-or-nothing:    S·Φ(-d) + Sσ√T·φ(-d) call, S·Φ(d) - Sσ√T·φ(d) put
/// ```
///
/// At spot == strike the per-payoff limiting value is returned instead
/// (σ·S·√(T/(2π)) vanilla, 0.5 cash, S/2 asset).
///
/// # Parameters
/// - `spot`: Price of the underlying at time 0
/// - `strike`: Strike price
/// - `sigma`: Volatility of the Brownian motion
/// - `t`: Time to expiration in years
/// - `payoff`: Payoff variant to price
///
/// # Returns
/// Value of the option at time 0
pub fn price(spot: f64, strike: f64, sigma: f64, t: f64, payoff: PayoffKind) -> f64 {
    if spot == strike {
        return at_the_money_limit(spot, sigma, t, payoff);
    }

    let vol_term = spot * sigma * t.sqrt();
    let d = (strike - spot) / vol_term;

    match payoff {
        PayoffKind::VanillaCall => (spot - strike) * norm_cdf(-d) + vol_term * norm_pdf(-d),
        PayoffKind::VanillaPut => (strike - spot) * norm_cdf(d) + vol_term * norm_pdf(d),
        PayoffKind::CashOrNothingCall => norm_cdf(-d),
        PayoffKind::CashOrNothingPut => norm_cdf(d),
        PayoffKind::AssetOrNothingCall => spot * norm_cdf(-d) + vol_term * norm_pdf(-d),
        PayoffKind::AssetOrNothingPut => spot * norm_cdf(d) - vol_term * norm_pdf(d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_vanilla_put_call_parity() {
        // put = call + (K - S)
        let (sigma, t) = (0.2, 4.0);
        for strike in [20.0, 40.0, 60.0, 80.0] {
            let call = price(50.0, strike, sigma, t, PayoffKind::VanillaCall);
            let put = price(50.0, strike, sigma, t, PayoffKind::VanillaPut);
            assert_relative_eq!(put, call + (strike - 50.0), max_relative = 1e-9, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cash_or_nothing_complementarity() {
        // call + put = 1
        let (sigma, t) = (0.2, 4.0);
        for strike in [20.0, 45.0, 55.0, 90.0] {
            let call = price(50.0, strike, sigma, t, PayoffKind::CashOrNothingCall);
            let put = price(50.0, strike, sigma, t, PayoffKind::CashOrNothingPut);
            assert_abs_diff_eq!(call + put, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_asset_or_nothing_complementarity() {
        // call + put = S
        let (sigma, t) = (0.2, 4.0);
        for strike in [20.0, 45.0, 55.0, 90.0] {
            let call = price(50.0, strike, sigma, t, PayoffKind::AssetOrNothingCall);
            let put = price(50.0, strike, sigma, t, PayoffKind::AssetOrNothingPut);
            assert_relative_eq!(call + put, 50.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_at_the_money_values() {
        let (spot, sigma, t) = (50.0, 0.2, 4.0);
        let vanilla = price(spot, spot, sigma, t, PayoffKind::VanillaCall);
        assert_abs_diff_eq!(vanilla, sigma * spot * (t / (2.0 * std::f64::consts::PI)).sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(price(spot, spot, sigma, t, PayoffKind::CashOrNothingPut), 0.5, epsilon = 0.0);
        assert_abs_diff_eq!(price(spot, spot, sigma, t, PayoffKind::AssetOrNothingCall), 25.0, epsilon = 0.0);
    }

    #[test]
    fn test_deep_in_the_money_call_approaches_intrinsic() {
        // Far in the money, the call is worth nearly S - K
        let call = price(50.0, 1.0, 0.05, 0.25, PayoffKind::VanillaCall);
        assert_relative_eq!(call, 49.0, max_relative = 1e-6);
    }
}
