use bs_heatmap_lib::{default_configs, generate_heatmap, HeatmapConfig, OptionKind};

fn describe(name: &str, config: &HeatmapConfig, use_case: &str) {
    println!("{}:", name);
    println!(
        "   Market: K={}, T={}y, r={}",
        config.strike, config.time_to_expiry, config.risk_free_rate
    );
    println!(
        "   Spot axis: {}..={} step {}",
        config.spot_axis.min, config.spot_axis.max, config.spot_axis.step
    );
    println!(
        "   Vol axis: {}..={} step {}",
        config.vol_axis.min, config.vol_axis.max, config.vol_axis.step
    );
    match config.grid_shape() {
        Ok((rows, cols)) => println!("   Grid: {} rows x {} columns", rows, cols),
        Err(e) => println!("   Grid: invalid ({})", e),
    }
    println!(
        "   Parallel: {} (threshold {} cells)",
        config.parallel.enabled, config.parallel.min_cells
    );
    println!("   Use case: {}\n", use_case);
}

fn main() {
    println!("BS-Heatmap-Lib Default Configuration Examples\n");

    describe(
        "1. Standard Configuration",
        &default_configs::standard(),
        "Interactive exploration around the money",
    );
    describe(
        "2. Fine Configuration",
        &default_configs::fine(),
        "Smooth surfaces for charts",
    );
    describe(
        "3. Minimal Configuration",
        &default_configs::minimal(),
        "Quick checks and tests",
    );

    // Customising a preset
    println!("4. Custom Configuration (put side, shorter expiry):");
    let custom = HeatmapConfig {
        time_to_expiry: 0.25,
        option_kind: OptionKind::Put,
        ..default_configs::minimal()
    };

    match generate_heatmap(&custom) {
        Ok(grid) => {
            for (vol, row) in grid.vols().iter().zip(grid.put()) {
                let cells: Vec<String> = row.iter().map(|p| format!("{:8.2}", p)).collect();
                println!("   vol {:.2} | {}", vol, cells.join(" "));
            }
        }
        Err(e) => println!("   Heatmap failed: {}", e),
    }
}
