// src/models/bs/bs_model.rs

//! Closed-form Black-Scholes evaluation for European options
//!
//! Given spot S, strike K, time to expiry T (years), continuously-compounded
//! rate r and volatility σ:
//!
//! d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
//! d2 = d1 − σ·√T
//!
//! A single evaluation produces both the call and the put side together with
//! every first- and second-order sensitivity, see [`SensitivityReport`].

use std::fmt;
use std::str::FromStr;

use super::bs_greeks::SensitivityReport;
use crate::error::{ensure_finite, ensure_positive, BsError, BsResult};
use crate::models::utils::{norm_cdf, norm_pdf};

/// Market inputs for one Black-Scholes evaluation.
///
/// Spot, strike, time and volatility must be strictly positive and finite; the
/// rate may be any finite number, negative included.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketInputs {
    /// Current underlying price (S)
    pub spot: f64,
    /// Option strike (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub time_to_expiry: f64,
    /// Continuously-compounded annual risk-free rate (r)
    pub risk_free_rate: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
}

impl MarketInputs {
    /// Build validated market inputs.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> BsResult<Self> {
        let inputs = Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Check the model domain. Fields are checked in declaration order and the
    /// first offending one is reported.
    pub fn validate(&self) -> BsResult<()> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("time_to_expiry", self.time_to_expiry)?;
        ensure_finite("risk_free_rate", self.risk_free_rate)?;
        ensure_positive("volatility", self.volatility)?;
        Ok(())
    }

    /// Same market with a different spot.
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Same market with a different volatility.
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Discount factor e^(−rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiry).exp()
    }
}

/// Option side selector used by the single-price wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }

    /// "Call" / "Put", for titles and labels
    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::Call => "Call",
            OptionKind::Put => "Put",
        }
    }
}

impl FromStr for OptionKind {
    type Err = BsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(BsError::invalid_option_kind(s)),
        }
    }
}

impl TryFrom<String> for OptionKind {
    type Error = BsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OptionKind> for String {
    fn from(kind: OptionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluate price and Greeks for both sides of the option.
///
/// Fails with [`BsError::InvalidInput`] before doing any arithmetic if the
/// inputs are outside the model domain. Very small but positive σ or T are
/// accepted; d1/d2 then grow without bound and the results may lose accuracy
/// or turn into NaN/∞.
#[allow(non_snake_case)]
pub fn evaluate(inputs: &MarketInputs) -> BsResult<SensitivityReport> {
    inputs.validate()?;

    let MarketInputs {
        spot: S,
        strike: K,
        time_to_expiry: T,
        risk_free_rate: r,
        volatility: sigma,
    } = *inputs;

    let sqrt_t = T.sqrt();
    let sigma_sqrt_t = sigma * sqrt_t;
    let d1 = ((S / K).ln() + (r + 0.5 * sigma * sigma) * T) / sigma_sqrt_t;
    let d2 = d1 - sigma_sqrt_t;

    let df = inputs.discount_factor();
    let nd1 = norm_cdf(d1);
    let nd2 = norm_cdf(d2);
    let nd1m = norm_cdf(-d1);
    let nd2m = norm_cdf(-d2);
    let pdf_d1 = norm_pdf(d1);

    let call_price = S * nd1 - K * df * nd2;
    let put_price = K * df * nd2m - S * nd1m;

    let gamma = pdf_d1 / (S * sigma_sqrt_t);
    let vega = S * pdf_d1 * sqrt_t;

    // Time decay shared by both sides
    let decay = -S * pdf_d1 * sigma / (2.0 * sqrt_t);

    Ok(SensitivityReport {
        call_price,
        put_price,
        call_delta: nd1,
        put_delta: nd1 - 1.0,
        gamma,
        vega,
        call_theta: decay - r * K * df * nd2,
        put_theta: decay + r * K * df * nd2m,
        call_rho: K * T * df * nd2,
        put_rho: -K * T * df * nd2m,
        vanna: vega * d1 / sigma,
        volga: vega * d1 * d2 / sigma,
        d1,
        d2,
    })
}

/// Price a single side of the option from a `"call"` / `"put"` tag.
pub fn black_scholes(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: &str,
) -> BsResult<f64> {
    let kind: OptionKind = option_type.parse()?;
    let inputs = MarketInputs::new(spot, strike, time_to_expiry, risk_free_rate, volatility)?;
    Ok(evaluate(&inputs)?.price(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm_inputs() -> MarketInputs {
        MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn test_reference_values() {
        let report = evaluate(&atm_inputs()).unwrap();

        assert_relative_eq!(report.d1, 0.35, epsilon = 1e-12);
        assert_relative_eq!(report.d2, 0.15, epsilon = 1e-12);
        assert_relative_eq!(report.call_price, 10.450_583_572_185_565, epsilon = 1e-9);
        assert_relative_eq!(report.put_price, 5.573_526_022_256_971, epsilon = 1e-9);
        assert_relative_eq!(report.call_delta, 0.636_830_651_175_619, epsilon = 1e-9);
        assert_relative_eq!(report.gamma, 0.018_762_017_345_846_9, epsilon = 1e-9);
        assert_relative_eq!(report.vega, 37.524_034_691_693_79, epsilon = 1e-8);
        assert_relative_eq!(report.call_theta, -6.414_027_546_438_197, epsilon = 1e-8);
        assert_relative_eq!(report.put_theta, -1.657_880_423_934_626, epsilon = 1e-8);
        assert_relative_eq!(report.call_rho, 53.232_481_545_376_345, epsilon = 1e-8);
        assert_relative_eq!(report.put_rho, -41.890_460_904_695_06, epsilon = 1e-8);
        assert_relative_eq!(report.vanna, 65.667_060_710_464_14, epsilon = 1e-7);
        assert_relative_eq!(report.volga, 9.850_059_106_569_622, epsilon = 1e-7);
    }

    #[test]
    fn test_validation_order() {
        let err = MarketInputs::new(0.0, -5.0, 0.0, 0.05, 0.0).unwrap_err();
        assert!(matches!(err, BsError::InvalidInput { name: "spot", .. }));

        let err = MarketInputs::new(100.0, 100.0, 1.0, f64::NAN, 0.2).unwrap_err();
        assert!(matches!(
            err,
            BsError::InvalidInput {
                name: "risk_free_rate",
                ..
            }
        ));
    }

    #[test]
    fn test_evaluate_rejects_unvalidated_inputs() {
        // Public fields allow bypassing `new`; evaluate must still refuse.
        let inputs = MarketInputs {
            volatility: 0.0,
            ..atm_inputs()
        };
        let err = evaluate(&inputs).unwrap_err();
        assert!(matches!(
            err,
            BsError::InvalidInput {
                name: "volatility",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_rate_is_accepted() {
        let inputs = MarketInputs::new(100.0, 100.0, 1.0, -0.01, 0.2).unwrap();
        let report = evaluate(&inputs).unwrap();
        let parity = report.call_price - report.put_price;
        assert_relative_eq!(parity, 100.0 - 100.0 * 0.01_f64.exp(), epsilon = 1e-10);
    }

    #[test]
    fn test_option_kind_parsing() {
        assert_eq!("call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!(" PUT ".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!(
            "straddle".parse::<OptionKind>().unwrap_err(),
            BsError::InvalidOptionKind("straddle".to_string())
        );
        assert_eq!(OptionKind::Put.to_string(), "put");
    }

    #[test]
    fn test_black_scholes_selector() {
        let call = black_scholes(100.0, 100.0, 1.0, 0.05, 0.2, "call").unwrap();
        let put = black_scholes(100.0, 100.0, 1.0, 0.05, 0.2, "put").unwrap();
        assert_relative_eq!(call, 10.450_583_572_185_565, epsilon = 1e-9);
        assert_relative_eq!(put, 5.573_526_022_256_971, epsilon = 1e-9);

        assert!(matches!(
            black_scholes(100.0, 100.0, 1.0, 0.05, 0.2, "forward"),
            Err(BsError::InvalidOptionKind(_))
        ));
    }

    #[test]
    fn test_selector_checks_kind_before_inputs() {
        let err = black_scholes(0.0, 100.0, 1.0, 0.05, 0.2, "binary").unwrap_err();
        assert!(matches!(err, BsError::InvalidOptionKind(_)));
    }
}
