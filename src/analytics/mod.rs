// src/analytics/mod.rs
//! Closed-form pricing evaluators for European options
//!
//! Two model variants, each a pure function of its inputs:
//! - [`bachelier`]: arithmetic Brownian dynamics with noise scaled by the
//!   initial spot
//! - [`black_scholes`]: geometric Brownian dynamics with drift
//!
//! Both share the standard normal primitive in `math_utils` and the
//! at-the-money limiting values below. Parameters are not validated:
//! non-positive volatility, maturity, spot, or strike propagate NaN or
//! infinity from the underlying arithmetic.

pub mod bachelier;
pub mod black_scholes;

use crate::payoff::PayoffKind;
use std::f64::consts::PI;

/// Limiting price at spot == strike, keyed per payoff.
///
/// At the money the moneyness term is Φ(0) = 0.5 under both models, so the
/// digitals have simple limits. The vanilla limit σ·S·√(T/(2π)) is the
/// classical at-the-money approximation used by the reference formulas.
pub(crate) fn at_the_money_limit(spot: f64, sigma: f64, t: f64, payoff: PayoffKind) -> f64 {
    match payoff {
        PayoffKind::VanillaCall | PayoffKind::VanillaPut => {
            sigma * spot * (t / (2.0 * PI)).sqrt()
        }
        PayoffKind::CashOrNothingCall | PayoffKind::CashOrNothingPut => 0.5,
        PayoffKind::AssetOrNothingCall | PayoffKind::AssetOrNothingPut => 0.5 * spot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_atm_vanilla_limit() {
        // σ·S·√(T/(2π)) with S=50, σ=0.2, T=4
        let limit = at_the_money_limit(50.0, 0.2, 4.0, PayoffKind::VanillaCall);
        assert_abs_diff_eq!(limit, 7.978845608028654, epsilon = 1e-12);
        let put_limit = at_the_money_limit(50.0, 0.2, 4.0, PayoffKind::VanillaPut);
        assert_abs_diff_eq!(limit, put_limit, epsilon = 0.0);
    }

    #[test]
    fn test_atm_digital_limits() {
        assert_abs_diff_eq!(
            at_the_money_limit(50.0, 0.2, 4.0, PayoffKind::CashOrNothingCall),
            0.5,
            epsilon = 0.0
        );
        assert_abs_diff_eq!(
            at_the_money_limit(50.0, 0.2, 4.0, PayoffKind::AssetOrNothingPut),
            25.0,
            epsilon = 0.0
        );
    }
}
