mod chart;
mod config;
mod derived;
mod error;
mod loader;
mod mode;
mod numeral;
mod position;
mod report;
mod table;
mod tradingpair;
mod trend;
mod utils;

use log::info;
use mode::PlotModes;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_file = match std::env::args_os().nth(1) {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(config::DEFAULT_CONFIG_FILE),
    };
    let config = config::new(&config_file)?;

    let _logger = utils::init_logging(&config.log_dir, &config.log_spec)?;
    match &config.source {
        Some(path) => info!("loaded configuration from {:?}.", path),
        None => info!("no configuration file at {:?}, using defaults.", config_file),
    }

    let input_file = &config.input;
    info!("reading {:?}...", input_file);

    let data = loader::load(input_file, &config.report)?;

    info!("available columns:\n\t{}", data.columns().join("\n\t"));

    if config.modes.contains(PlotModes::Scatter) {
        info!("drawing scatter plots for selected column combinations...");
        let pairs = chart::product(&config.scatter.x_axes, &config.scatter.y_axes);
        let out = chart::scatter_output_path(input_file);
        chart::draw_scatterplots(&data, &pairs, &config.scatter, &config.image, &out)?;
        info!("scatter plots written to {:?}", out);
    }

    if config.modes.contains(PlotModes::Grouped) {
        info!("drawing grouped plots for selected column combinations...");
        let triples = chart::product3(
            &config.grouped.x_axes,
            &config.grouped.y_axes,
            &config.grouped.hues,
        );
        let out = chart::grouped_output_path(input_file);
        chart::draw_grouped(&data, &triples, &config.grouped, &config.image, &out)?;
        info!("grouped plots written to {:?}", out);
    }

    info!("finished.");

    Ok(())
}
