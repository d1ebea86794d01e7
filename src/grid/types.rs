use crate::error::{BsError, BsResult};
use crate::models::bs::OptionKind;

/// Upper bound on the number of points a single [`AxisRange`] may expand to.
pub const MAX_AXIS_POINTS: usize = 10_000;

/// Inclusive `min..=max` sequence sampled every `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Number of points in the range.
    pub fn point_count(&self) -> BsResult<usize> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(BsError::invalid_axis(format!(
                "bounds and step must be finite (min={}, max={}, step={})",
                self.min, self.max, self.step
            )));
        }
        if self.step <= 0.0 {
            return Err(BsError::invalid_axis(format!(
                "step must be > 0, got {}",
                self.step
            )));
        }
        if self.max < self.min {
            return Err(BsError::invalid_axis(format!(
                "max ({}) is below min ({})",
                self.max, self.min
            )));
        }

        // Absorb representation error so that e.g. 0.05..=0.95 step 0.01 keeps its endpoint
        let span = (self.max - self.min) / self.step + 1e-9;
        if span >= MAX_AXIS_POINTS as f64 {
            return Err(BsError::invalid_axis(format!(
                "range expands to more than {} points",
                MAX_AXIS_POINTS
            )));
        }
        Ok(span.floor() as usize + 1)
    }

    /// Expand into `min, min + step, ...` up to and including `max`.
    pub fn values(&self) -> BsResult<Vec<f64>> {
        let n = self.point_count()?;
        Ok((0..n)
            .map(|i| (self.min + i as f64 * self.step).min(self.max))
            .collect())
    }
}

/// Call and put prices over a volatility × spot grid.
///
/// Rows are indexed by volatility and columns by spot: `call()[i][j]` is the
/// call price at `(spots()[j], vols()[i])`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceGrid {
    spots: Vec<f64>,
    vols: Vec<f64>,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    call: Vec<Vec<f64>>,
    put: Vec<Vec<f64>>,
}

impl PriceGrid {
    pub(crate) fn new(
        spots: Vec<f64>,
        vols: Vec<f64>,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        call: Vec<Vec<f64>>,
        put: Vec<Vec<f64>>,
    ) -> Self {
        debug_assert_eq!(call.len(), vols.len());
        debug_assert_eq!(put.len(), vols.len());
        debug_assert!(call.iter().chain(put.iter()).all(|row| row.len() == spots.len()));
        Self {
            spots,
            vols,
            strike,
            time_to_expiry,
            risk_free_rate,
            call,
            put,
        }
    }

    /// Spot values labelling the columns
    pub fn spots(&self) -> &[f64] {
        &self.spots
    }

    /// Volatility values labelling the rows
    pub fn vols(&self) -> &[f64] {
        &self.vols
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn time_to_expiry(&self) -> f64 {
        self.time_to_expiry
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// `(rows, cols)` = `(vols().len(), spots().len())`
    pub fn shape(&self) -> (usize, usize) {
        (self.vols.len(), self.spots.len())
    }

    pub fn call(&self) -> &[Vec<f64>] {
        &self.call
    }

    pub fn put(&self) -> &[Vec<f64>] {
        &self.put
    }

    pub fn prices(&self, kind: OptionKind) -> &[Vec<f64>] {
        match kind {
            OptionKind::Call => &self.call,
            OptionKind::Put => &self.put,
        }
    }

    /// Price at `(vols()[vol_idx], spots()[spot_idx])`, `None` when out of range.
    pub fn get(&self, kind: OptionKind, vol_idx: usize, spot_idx: usize) -> Option<f64> {
        self.prices(kind)
            .get(vol_idx)
            .and_then(|row| row.get(spot_idx))
            .copied()
    }

    /// Smallest and largest price in the grid for one side.
    pub fn price_range(&self, kind: OptionKind) -> (f64, f64) {
        self.prices(kind)
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| {
                (lo.min(p), hi.max(p))
            })
    }
}
