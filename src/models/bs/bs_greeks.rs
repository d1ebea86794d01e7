//! Black-Scholes sensitivities
//!
//! A [`SensitivityReport`] carries both sides of the option from one
//! evaluation. Greeks are raw partial derivatives: per unit of spot, per 1.0 of
//! volatility, per year of calendar time and per 1.0 of rate.

use super::bs_model::OptionKind;

/// Prices and Greeks for one set of market inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityReport {
    pub call_price: f64,
    pub put_price: f64,
    /// Φ(d1), in [0, 1]
    pub call_delta: f64,
    /// Φ(d1) − 1, in [−1, 0]
    pub put_delta: f64,
    /// d²V/dS², same for call and put
    pub gamma: f64,
    /// dV/dσ, same for call and put
    pub vega: f64,
    /// dV/dt for the call (time decay, per year)
    pub call_theta: f64,
    pub put_theta: f64,
    /// dV/dr for the call
    pub call_rho: f64,
    pub put_rho: f64,
    /// vega · d1 / σ
    pub vanna: f64,
    /// Volga (vomma): vega · d1 · d2 / σ
    pub volga: f64,
    pub d1: f64,
    pub d2: f64,
}

impl SensitivityReport {
    pub fn price(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.call_price,
            OptionKind::Put => self.put_price,
        }
    }

    pub fn delta(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.call_delta,
            OptionKind::Put => self.put_delta,
        }
    }

    pub fn theta(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.call_theta,
            OptionKind::Put => self.put_theta,
        }
    }

    pub fn rho(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.call_rho,
            OptionKind::Put => self.put_rho,
        }
    }

    /// Project the report onto one side of the option.
    pub fn greeks(&self, kind: OptionKind) -> OptionGreeks {
        OptionGreeks {
            kind,
            price: self.price(kind),
            delta: self.delta(kind),
            gamma: self.gamma,
            vega: self.vega,
            theta: self.theta(kind),
            rho: self.rho(kind),
            vanna: self.vanna,
            volga: self.volga,
        }
    }
}

/// Price and Greeks of a single option side
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionGreeks {
    pub kind: OptionKind,
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
    pub vanna: f64,
    pub volga: f64,
}
