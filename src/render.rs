//! SVG heatmap rendering for price grids
//!
//! Cells are laid out by index (spot along x, volatility along y) so the chart
//! stays readable for unevenly spaced or unsorted axes; tick labels show the
//! actual axis values.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::grid::PriceGrid;
use crate::models::bs::OptionKind;

/// Output size and cell annotation switch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapStyle {
    pub width: u32,
    pub height: u32,
    /// Print each cell's price (2 decimals) inside the cell
    pub annotate: bool,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            annotate: true,
        }
    }
}

/// Chart title for one option side
pub fn heatmap_title(kind: OptionKind) -> String {
    format!("Black-Scholes {} Option Price Heatmap", kind.label())
}

/// Render one side of `grid` as an SVG document.
pub fn render_heatmap_svg(
    grid: &PriceGrid,
    kind: OptionKind,
    style: &HeatmapStyle,
) -> Result<String> {
    let (rows, cols) = grid.shape();
    let prices = grid.prices(kind);
    let (lo, hi) = grid.price_range(kind);
    let spots = grid.spots();
    let vols = grid.vols();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(heatmap_title(kind), ("sans-serif", 28))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5..(cols as f64 - 0.5), -0.5..(rows as f64 - 0.5))?;

        let x_labels = |x: &f64| axis_label(spots, *x);
        let y_labels = |y: &f64| axis_label(vols, *y);
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(cols)
            .y_labels(rows)
            .x_label_formatter(&x_labels)
            .y_label_formatter(&y_labels)
            .x_desc("Spot Price")
            .y_desc("Volatility")
            .draw()?;

        let mut cells = Vec::with_capacity(rows * cols);
        for (i, row) in prices.iter().enumerate() {
            for (j, &price) in row.iter().enumerate() {
                let (x, y) = (j as f64, i as f64);
                cells.push(Rectangle::new(
                    [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                    cell_color(price, lo, hi).filled(),
                ));
            }
        }
        chart.draw_series(cells)?;

        if style.annotate {
            let font = ("sans-serif", 12)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center));
            let mut labels = Vec::with_capacity(rows * cols);
            for (i, row) in prices.iter().enumerate() {
                for (j, &price) in row.iter().enumerate() {
                    labels.push(Text::new(
                        format!("{:.2}", price),
                        (j as f64, i as f64),
                        font.clone(),
                    ));
                }
            }
            chart.draw_series(labels)?;
        }

        root.present()?;
    }
    Ok(svg)
}

/// Render and write to `path`.
pub fn write_heatmap_svg<P: AsRef<Path>>(
    grid: &PriceGrid,
    kind: OptionKind,
    style: &HeatmapStyle,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let svg = render_heatmap_svg(grid, kind, style)?;
    std::fs::write(path, svg).with_context(|| format!("writing heatmap {}", path.display()))?;
    tracing::info!(path = %path.display(), kind = %kind, "heatmap written");
    Ok(())
}

/// Tick label for an index-based coordinate; blank between cells.
fn axis_label(values: &[f64], coord: f64) -> String {
    let idx = coord.round();
    if (coord - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    values
        .get(idx as usize)
        .map(|v| format!("{:.2}", v))
        .unwrap_or_default()
}

/// Purple (cheap) through green to yellow (expensive).
fn cell_color(price: f64, lo: f64, hi: f64) -> HSLColor {
    let t = if hi > lo {
        ((price - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    HSLColor(0.75 - 0.6 * t, 0.7, 0.3 + 0.35 * t)
}
