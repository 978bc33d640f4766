// src/payoff.rs
//! European payoff variants
//!
//! # Payoff Definitions
//!
//! - **Vanilla call/put**: max(S_T - K, 0) / max(K - S_T, 0)
//! - **Cash-or-nothing call/put**: pays one unit of cash if the underlying
//!   finishes in-the-money, else zero
//! - **Asset-or-nothing call/put**: pays the underlying's terminal value if
//!   in-the-money, else zero
//!
//! The enum is closed and exhaustive: adding or removing a variant is a
//! compile-time-checked decision at every pricing call site. The historical
//! string selectors ("van call", "con put", ...) survive only at the
//! parsing edge via `FromStr`.

use crate::error::{PricingError, PricingResult};
use std::fmt;
use std::str::FromStr;

/// Enumeration of the six supported European payoff variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayoffKind {
    /// Vanilla call: max(S_T - K, 0)
    VanillaCall,
    /// Vanilla put: max(K - S_T, 0)
    VanillaPut,
    /// Cash-or-nothing digital call: 1 if S_T > K, else 0
    CashOrNothingCall,
    /// Cash-or-nothing digital put: 1 if S_T < K, else 0
    CashOrNothingPut,
    /// Asset-or-nothing digital call: S_T if S_T > K, else 0
    AssetOrNothingCall,
    /// Asset-or-nothing digital put: S_T if S_T < K, else 0
    AssetOrNothingPut,
}

impl PayoffKind {
    /// All six variants, in documentation order.
    pub const ALL: [PayoffKind; 6] = [
        PayoffKind::VanillaCall,
        PayoffKind::VanillaPut,
        PayoffKind::CashOrNothingCall,
        PayoffKind::CashOrNothingPut,
        PayoffKind::AssetOrNothingCall,
        PayoffKind::AssetOrNothingPut,
    ];

    /// The selector code used by the string-facing interfaces.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffKind::VanillaCall => "van call",
            PayoffKind::VanillaPut => "van put",
            PayoffKind::CashOrNothingCall => "con call",
            PayoffKind::CashOrNothingPut => "con put",
            PayoffKind::AssetOrNothingCall => "aon call",
            PayoffKind::AssetOrNothingPut => "aon put",
        }
    }

    /// Human-readable contract name for reports and demos.
    pub fn description(&self) -> &'static str {
        match self {
            PayoffKind::VanillaCall => "Vanilla Call",
            PayoffKind::VanillaPut => "Vanilla Put",
            PayoffKind::CashOrNothingCall => "Cash-or-Nothing Call",
            PayoffKind::CashOrNothingPut => "Cash-or-Nothing Put",
            PayoffKind::AssetOrNothingCall => "Asset-or-Nothing Call",
            PayoffKind::AssetOrNothingPut => "Asset-or-Nothing Put",
        }
    }
}

impl fmt::Display for PayoffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoffKind {
    type Err = PricingError;

    fn from_str(s: &str) -> PricingResult<Self> {
        PayoffKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PricingError::InvalidPayoff {
                selector: s.to_string(),
            })
    }
}
