//! # BS-Heatmap-Lib: Black-Scholes Pricing, Greeks and Price Heatmaps
//!
//! `bs-heatmap-lib` prices European options under the Black-Scholes closed-form
//! model and sweeps the pricer over spot × volatility grids to produce price
//! heatmaps.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: call and put prices from a single evaluation
//! - **Full Greek set**: delta, gamma, vega, theta, rho, vanna and volga
//! - **Grid sweeps**: call/put price grids over any spot and volatility sequences,
//!   evaluated in parallel with rayon for large grids
//! - **Heatmap requests**: TOML-configurable sweeps with presets, and SVG rendering
//!   behind the `plot` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_heatmap_lib::{evaluate, evaluate_grid, MarketInputs, OptionKind};
//!
//! // Single point
//! let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2)?;
//! let report = evaluate(&inputs)?;
//! assert!((report.call_price - 10.45).abs() < 1e-2);
//! assert!((report.put_price - 5.57).abs() < 1e-2);
//!
//! // Spot × volatility sweep: rows are volatilities, columns are spots
//! let spots = [90.0, 100.0, 110.0];
//! let vols = [0.1, 0.2, 0.3, 0.4];
//! let grid = evaluate_grid(&spots, &vols, 100.0, 1.0, 0.05)?;
//! assert_eq!(grid.shape(), (4, 3));
//! let atm_call = grid.get(OptionKind::Call, 1, 1).unwrap();
//! assert!((atm_call - report.call_price).abs() < 1e-12);
//! # Ok::<(), bs_heatmap_lib::BsError>(())
//! ```
//!
//! ## Configuration Presets
//!
//! - `standard()`: strike 100, one year, 5% rate, spot 80..=120 step 5, vol 0.1..=0.6 step 0.05
//! - `fine()`: same market on a 41 × 51 grid
//! - `minimal()`: 3 × 3 grid evaluated on the calling thread

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod grid;
pub mod models;
#[cfg(feature = "plot")]
pub mod render;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{BsError, BsResult};

// Single-point pricing
pub use models::bs::{
    black_scholes, evaluate, MarketInputs, OptionGreeks, OptionKind, SensitivityReport,
};
pub use models::utils::{norm_cdf, norm_pdf};

// Grid sweeps and heatmap requests
pub use grid::{
    evaluate_grid, evaluate_grid_with, generate_heatmap, sweep, AxisRange, HeatmapConfig,
    ParallelConfig, PriceGrid,
};

#[cfg(feature = "plot")]
pub use render::{render_heatmap_svg, write_heatmap_svg, HeatmapStyle};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured heatmap requests.
///
/// # Available Configurations
///
/// - [`standard()`]: the classic at-the-money one-year sweep
/// - [`fine()`]: dense grid for smooth surfaces
/// - [`minimal()`]: tiny grid for quick checks and tests
pub mod default_configs {
    use crate::grid::HeatmapConfig;

    /// At-the-money one-year sweep.
    ///
    /// **Characteristics:**
    /// - Strike 100, expiry 1 year, rate 5%
    /// - Spot 80..=120 step 5 (9 columns)
    /// - Volatility 0.10..=0.60 step 0.05 (11 rows)
    /// - Call side shown when rendered
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_heatmap_lib::{default_configs, generate_heatmap};
    ///
    /// let grid = generate_heatmap(&default_configs::standard()).unwrap();
    /// assert_eq!(grid.shape(), (11, 9));
    /// ```
    pub fn standard() -> HeatmapConfig {
        HeatmapConfig::standard()
    }

    /// Dense sweep of the standard market.
    ///
    /// **Characteristics:**
    /// - Spot 80..=120 step 1 (41 columns)
    /// - Volatility 0.10..=0.60 step 0.01 (51 rows)
    /// - Large enough to be evaluated on the rayon pool
    pub fn fine() -> HeatmapConfig {
        HeatmapConfig::fine()
    }

    /// 3 × 3 sweep evaluated on the calling thread.
    pub fn minimal() -> HeatmapConfig {
        HeatmapConfig::minimal()
    }
}

// ================================================================================================
// CONVENIENCE API
// ================================================================================================

/// Price and Greeks from five scalars.
///
/// Shorthand for building [`MarketInputs`] and calling [`evaluate`]. Fails with
/// [`BsError::InvalidInput`] when spot, strike, time or volatility is not
/// strictly positive, or the rate is not finite.
///
/// # Example
///
/// ```rust
/// use bs_heatmap_lib::price_and_greeks;
///
/// let report = price_and_greeks(10.0, 10.0, 1.5, 0.05, 0.2)?;
/// let parity = 10.0 - 10.0 * (-0.05_f64 * 1.5).exp();
/// assert!((report.call_price - report.put_price - parity).abs() < 1e-12);
/// # Ok::<(), bs_heatmap_lib::BsError>(())
/// ```
pub fn price_and_greeks(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
) -> BsResult<SensitivityReport> {
    let inputs = MarketInputs::new(spot, strike, time_to_expiry, risk_free_rate, volatility)?;
    evaluate(&inputs)
}

/// Price one side of every cell of a heatmap request.
///
/// Runs [`generate_heatmap`] and keeps the grid for `config.option_kind`,
/// rows indexed by volatility and columns by spot.
pub fn heatmap_prices(config: &HeatmapConfig) -> BsResult<Vec<Vec<f64>>> {
    let grid = generate_heatmap(config)?;
    Ok(grid.prices(config.option_kind).to_vec())
}
