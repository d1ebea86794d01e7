pub mod config;
pub mod evaluator;
pub mod types;

pub use config::{HeatmapConfig, ParallelConfig};
pub use evaluator::{evaluate_grid, evaluate_grid_with, generate_heatmap, sweep};
pub use types::{AxisRange, PriceGrid};
