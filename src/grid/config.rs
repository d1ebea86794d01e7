use crate::error::{ensure_finite, ensure_positive, BsResult};
use crate::grid::types::AxisRange;
use crate::models::bs::OptionKind;

/// Grids with more cells than this are logged as unusually large.
pub const LARGE_GRID_CELLS: usize = 100_000;

/// Parallel evaluation settings for grid sweeps
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParallelConfig {
    /// Evaluate rows on the rayon thread pool
    pub enabled: bool,
    /// Below this many cells the sweep stays on the calling thread
    pub min_cells: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_cells: 256,
        }
    }
}

impl ParallelConfig {
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn should_parallelise(&self, cells: usize) -> bool {
        self.enabled && cells >= self.min_cells
    }
}

/// A complete spot × volatility heatmap request.
///
/// Every field may be omitted from a TOML document; missing values fall back to
/// the [`HeatmapConfig::standard`] preset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatmapConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_strike"))]
    pub strike: f64,

    /// Years to expiry
    #[cfg_attr(feature = "serde", serde(default = "default_time_to_expiry"))]
    pub time_to_expiry: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_risk_free_rate"))]
    pub risk_free_rate: f64,

    /// Side shown when the grid is rendered
    #[cfg_attr(feature = "serde", serde(default = "default_option_kind"))]
    pub option_kind: OptionKind,

    /// Column axis
    #[cfg_attr(feature = "serde", serde(default = "default_spot_axis"))]
    pub spot_axis: AxisRange,

    /// Row axis
    #[cfg_attr(feature = "serde", serde(default = "default_vol_axis"))]
    pub vol_axis: AxisRange,

    #[cfg_attr(feature = "serde", serde(default))]
    pub parallel: ParallelConfig,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl HeatmapConfig {
    /// At-the-money one-year sweep: spot 80..=120 step 5, volatility 0.1..=0.6 step 0.05.
    pub fn standard() -> Self {
        Self {
            strike: default_strike(),
            time_to_expiry: default_time_to_expiry(),
            risk_free_rate: default_risk_free_rate(),
            spot_axis: default_spot_axis(),
            vol_axis: default_vol_axis(),
            option_kind: default_option_kind(),
            parallel: ParallelConfig::default(),
        }
    }

    /// Dense sweep (41 × 51) for smooth surfaces.
    pub fn fine() -> Self {
        Self {
            spot_axis: AxisRange::new(80.0, 120.0, 1.0),
            vol_axis: AxisRange::new(0.1, 0.6, 0.01),
            ..Self::standard()
        }
    }

    /// 3 × 3 sweep on the calling thread, for quick checks.
    pub fn minimal() -> Self {
        Self {
            spot_axis: AxisRange::new(90.0, 110.0, 10.0),
            vol_axis: AxisRange::new(0.1, 0.3, 0.1),
            parallel: ParallelConfig::sequential(),
            ..Self::standard()
        }
    }

    /// Check the shared scalars and both axes without evaluating anything.
    pub fn validate(&self) -> BsResult<()> {
        ensure_positive("strike", self.strike)?;
        ensure_positive("time_to_expiry", self.time_to_expiry)?;
        ensure_finite("risk_free_rate", self.risk_free_rate)?;
        self.spot_axis.point_count()?;
        self.vol_axis.point_count()?;
        Ok(())
    }

    /// `(rows, cols)` of the grid this request produces.
    pub fn grid_shape(&self) -> BsResult<(usize, usize)> {
        Ok((self.vol_axis.point_count()?, self.spot_axis.point_count()?))
    }
}

#[cfg(feature = "serde")]
impl HeatmapConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let config: HeatmapConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading heatmap config {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("parsing heatmap config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded heatmap configuration");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }
}

fn default_strike() -> f64 {
    100.0
}

fn default_time_to_expiry() -> f64 {
    1.0
}

fn default_risk_free_rate() -> f64 {
    0.05
}

fn default_spot_axis() -> AxisRange {
    AxisRange::new(80.0, 120.0, 5.0)
}

fn default_vol_axis() -> AxisRange {
    AxisRange::new(0.1, 0.6, 0.05)
}

fn default_option_kind() -> OptionKind {
    OptionKind::Call
}
