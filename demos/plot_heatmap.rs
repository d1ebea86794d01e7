// Example: plot_heatmap.rs
// Evaluates a spot x volatility sweep and writes call and put heatmaps as SVG.
//
// Usage:
//     cargo run --example plot_heatmap -- [config.toml] [output_dir]
//
// Without a config path the standard preset is used. A sample configuration
// lives in configs/heatmap.toml.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use bs_heatmap_lib::{
    default_configs, generate_heatmap, write_heatmap_svg, HeatmapConfig, HeatmapStyle,
    OptionKind,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => HeatmapConfig::from_file(path)?,
        None => default_configs::standard(),
    };
    let out_dir = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)?;

    let grid = generate_heatmap(&config)?;
    let (rows, cols) = grid.shape();
    println!("Evaluated {} x {} grid (K = {})", rows, cols, grid.strike());

    let style = HeatmapStyle::default();
    for kind in [OptionKind::Call, OptionKind::Put] {
        let (lo, hi) = grid.price_range(kind);
        let path = out_dir.join(format!("{}_heatmap.svg", kind.as_str()));
        write_heatmap_svg(&grid, kind, &style, &path)?;
        println!(
            "{:<4} prices {:8.2} .. {:8.2} -> {}",
            kind.label(),
            lo,
            hi,
            path.display()
        );
    }

    Ok(())
}
