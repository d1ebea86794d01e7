use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{ensure_finite, ensure_positive, BsError, BsResult};
use crate::grid::config::{HeatmapConfig, ParallelConfig, LARGE_GRID_CELLS};
use crate::grid::types::PriceGrid;
use crate::models::bs::{evaluate, MarketInputs, SensitivityReport};

/// Call and put prices for every (spot, volatility) pair.
///
/// The result has `vols.len()` rows and `spots.len()` columns. Rows are
/// evaluated on the rayon pool once the grid reaches the default
/// [`ParallelConfig`] threshold; see [`evaluate_grid_with`].
pub fn evaluate_grid(
    spots: &[f64],
    vols: &[f64],
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
) -> BsResult<PriceGrid> {
    evaluate_grid_with(
        spots,
        vols,
        strike,
        time_to_expiry,
        risk_free_rate,
        &ParallelConfig::default(),
    )
}

/// [`evaluate_grid`] with explicit parallelism settings.
pub fn evaluate_grid_with(
    spots: &[f64],
    vols: &[f64],
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    parallel: &ParallelConfig,
) -> BsResult<PriceGrid> {
    let cells = sweep(
        spots,
        vols,
        strike,
        time_to_expiry,
        risk_free_rate,
        parallel,
        |report| (report.call_price, report.put_price),
    )?;

    let (call, put): (Vec<Vec<f64>>, Vec<Vec<f64>>) = cells
        .into_iter()
        .map(|row| row.into_iter().unzip::<f64, f64, Vec<f64>, Vec<f64>>())
        .unzip();

    Ok(PriceGrid::new(
        spots.to_vec(),
        vols.to_vec(),
        strike,
        time_to_expiry,
        risk_free_rate,
        call,
        put,
    ))
}

/// Evaluate the pricer on every (spot, volatility) pair and keep `measure` of
/// each report, e.g. `|r| r.gamma` for a gamma surface.
///
/// `result[i][j]` belongs to `(spots[j], vols[i])` whether or not the rows ran
/// in parallel. All inputs are validated before any cell is evaluated: the
/// shared strike, time and rate first, then spots in order, then volatilities
/// in order. The first invalid value fails the whole sweep.
pub fn sweep<T, F>(
    spots: &[f64],
    vols: &[f64],
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    parallel: &ParallelConfig,
    measure: F,
) -> BsResult<Vec<Vec<T>>>
where
    T: Send,
    F: Fn(&SensitivityReport) -> T + Sync,
{
    let base = validate_sweep(spots, vols, strike, time_to_expiry, risk_free_rate)?;

    let rows = vols.len();
    let cols = spots.len();
    let run_parallel = parallel.should_parallelise(rows * cols);
    debug!(rows, cols, parallel = run_parallel, "evaluating price grid");

    let eval_row = |vol: f64| -> BsResult<Vec<T>> {
        let market = base.with_volatility(vol);
        spots
            .iter()
            .map(|&spot| evaluate(&market.with_spot(spot)).map(|report| measure(&report)))
            .collect()
    };

    if run_parallel {
        vols.par_iter().map(|&vol| eval_row(vol)).collect()
    } else {
        vols.iter().map(|&vol| eval_row(vol)).collect()
    }
}

/// Build the axes described by `config` and sweep them.
pub fn generate_heatmap(config: &HeatmapConfig) -> BsResult<PriceGrid> {
    config.validate()?;
    let spots = config.spot_axis.values()?;
    let vols = config.vol_axis.values()?;

    let cells = spots.len() * vols.len();
    if cells > LARGE_GRID_CELLS {
        warn!(
            cells,
            limit = LARGE_GRID_CELLS,
            "heatmap request is unusually large"
        );
    }

    evaluate_grid_with(
        &spots,
        &vols,
        config.strike,
        config.time_to_expiry,
        config.risk_free_rate,
        &config.parallel,
    )
}

fn validate_sweep(
    spots: &[f64],
    vols: &[f64],
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
) -> BsResult<MarketInputs> {
    let (first_spot, first_vol) = match (spots.first(), vols.first()) {
        (Some(&s), Some(&v)) => (s, v),
        (None, _) => return Err(BsError::invalid_axis("spot sequence is empty")),
        (_, None) => return Err(BsError::invalid_axis("volatility sequence is empty")),
    };

    ensure_positive("strike", strike)?;
    ensure_positive("time_to_expiry", time_to_expiry)?;
    ensure_finite("risk_free_rate", risk_free_rate)?;
    for &spot in spots {
        ensure_positive("spot", spot)?;
    }
    for &vol in vols {
        ensure_positive("volatility", vol)?;
    }

    Ok(MarketInputs {
        spot: first_spot,
        strike,
        time_to_expiry,
        risk_free_rate,
        volatility: first_vol,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bs::OptionKind;

    #[test]
    fn test_shape_follows_vols_by_spots() {
        let grid = evaluate_grid(&[90.0, 100.0, 110.0, 120.0], &[0.2, 0.4], 100.0, 1.0, 0.05)
            .unwrap();
        assert_eq!(grid.shape(), (2, 4));
        assert_eq!(grid.call().len(), 2);
        assert!(grid.put().iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_cells_match_single_evaluation() {
        let spots = [95.0, 105.0];
        let vols = [0.15, 0.25, 0.35];
        let grid = evaluate_grid(&spots, &vols, 100.0, 0.5, 0.02).unwrap();

        for (i, &vol) in vols.iter().enumerate() {
            for (j, &spot) in spots.iter().enumerate() {
                let inputs = MarketInputs::new(spot, 100.0, 0.5, 0.02, vol).unwrap();
                let report = evaluate(&inputs).unwrap();
                assert_eq!(grid.get(OptionKind::Call, i, j), Some(report.call_price));
                assert_eq!(grid.get(OptionKind::Put, i, j), Some(report.put_price));
            }
        }
    }

    #[test]
    fn test_empty_axes_rejected() {
        assert!(matches!(
            evaluate_grid(&[], &[0.2], 100.0, 1.0, 0.05),
            Err(BsError::InvalidAxis(_))
        ));
        assert!(matches!(
            evaluate_grid(&[100.0], &[], 100.0, 1.0, 0.05),
            Err(BsError::InvalidAxis(_))
        ));
    }

    #[test]
    fn test_validation_order_is_deterministic() {
        // Shared scalars are reported ahead of bad axis values
        let err = evaluate_grid(&[-1.0], &[0.0], 0.0, 1.0, 0.05).unwrap_err();
        assert!(matches!(err, BsError::InvalidInput { name: "strike", .. }));

        // Spots ahead of volatilities, regardless of cell order
        let err = evaluate_grid(&[100.0, -1.0], &[0.0, 0.2], 100.0, 1.0, 0.05).unwrap_err();
        assert!(matches!(err, BsError::InvalidInput { name: "spot", value, .. } if value == -1.0));
    }

    #[test]
    fn test_sweep_custom_measure() {
        let gamma = sweep(
            &[100.0],
            &[0.2],
            100.0,
            1.0,
            0.05,
            &ParallelConfig::sequential(),
            |r| r.gamma,
        )
        .unwrap();
        assert!((gamma[0][0] - 0.018_762_017_345_846_9).abs() < 1e-12);
    }

    #[test]
    fn test_generate_heatmap_from_preset() {
        let grid = generate_heatmap(&HeatmapConfig::standard()).unwrap();
        assert_eq!(grid.shape(), (11, 9));
        assert_eq!(grid.spots()[0], 80.0);
        assert_eq!(grid.strike(), 100.0);
    }
}
