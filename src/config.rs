use crate::chart::{GroupedOptions, ImageOptions, ScatterOptions};
use crate::error::{AnalysisError, Result};
use crate::mode::{self, PlotModes};
use crate::report::ReportOptions;

use ini::{Ini, Properties};
use log::{debug, log_enabled, Level::Debug};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_CONFIG_FILE: &str = "conf/analysis.ini";
pub const DEFAULT_INPUT_FILE: &str = "input-20190122.html";

#[derive(Debug, Clone)]
pub struct Config {
    pub source: Option<PathBuf>, // None when running on the defaults.
    pub input: PathBuf,
    pub log_dir: String,
    pub log_spec: String,
    pub modes: PlotModes,
    pub report: ReportOptions,
    pub image: ImageOptions,
    pub scatter: ScatterOptions,
    pub grouped: GroupedOptions,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: None,
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            log_dir: "logs".to_string(),
            log_spec: "info".to_string(),
            modes: PlotModes::Scatter,
            report: ReportOptions::default(),
            image: ImageOptions::default(),
            scatter: ScatterOptions::default(),
            grouped: GroupedOptions::default(),
        }
    }
}

// Comma separated list, e.g. "Asset,Duration (s),Provider".
fn get_list(section: Option<&Properties>, key: &str, default: &[String]) -> Vec<String> {
    match section.and_then(|s| s.get(key)) {
        Some(v) => v
            .split(',')
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect(),
        None => default.to_vec(),
    }
}

fn get_parsed<T: FromStr>(
    section: Option<&Properties>,
    name: &str,
    key: &str,
    default: T,
) -> Result<T> {
    match section.and_then(|s| s.get(key)) {
        Some(v) => v.trim().parse::<T>().map_err(|_| {
            AnalysisError::Config(format!(
                "section {:?} entry {:?} has invalid value {:?}",
                name, key, v
            ))
        }),
        None => Ok(default),
    }
}

fn positive(name: &str, key: &str) -> AnalysisError {
    AnalysisError::Config(format!("section {:?} entry {:?} must be positive", name, key))
}

fn get_bool(section: Option<&Properties>, key: &str, default: bool) -> bool {
    match section.and_then(|s| s.get(key)) {
        Some(v) => v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes"),
        None => default,
    }
}

fn get_string(section: Option<&Properties>, key: &str, default: &str) -> String {
    section
        .and_then(|s| s.get(key))
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| default.to_string())
}

// Every section and entry is optional.
pub fn from_ini(inifile: &Ini) -> Result<Config> {
    if log_enabled!(Debug) {
        debug!("configuration file: ");
        for (section, prop) in inifile.iter() {
            debug!("[{:?}]", section);
            for (k, v) in prop.iter() {
                debug!("{:?}={:?}", k, v);
            }
        }
    }

    let d = Config::default();

    let input_section = inifile.section(Some("Input"));
    let logging_section = inifile.section(Some("Logging"));
    let plots_section = inifile.section(Some("Plots"));
    let scatter_section = inifile.section(Some("Scatter"));
    let grouped_section = inifile.section(Some("Grouped"));

    let input = match input_section.and_then(|s| s.get("File")) {
        Some(f) => PathBuf::from(f.trim()),
        None => d.input,
    };

    let mut report = d.report;
    report.table_class = get_string(input_section, "TableClass", &report.table_class);

    let modes = match plots_section.and_then(|s| s.get("Modes")) {
        Some(m) => mode::from_str_cs(m)?,
        None => d.modes,
    };

    let image = ImageOptions {
        dpi: get_parsed(plots_section, "Plots", "Dpi", d.image.dpi)?,
        padding: get_parsed(plots_section, "Plots", "Padding", d.image.padding)?,
    };
    if image.dpi == 0 {
        return Err(positive("Plots", "Dpi"));
    }

    let ds = d.scatter;
    let scatter = ScatterOptions {
        x_axes: get_list(scatter_section, "XAxes", &ds.x_axes),
        y_axes: get_list(scatter_section, "YAxes", &ds.y_axes),
        centered: get_list(scatter_section, "Centered", &ds.centered),
        limit: get_parsed(scatter_section, "Scatter", "Limit", ds.limit)?,
        limit_enabled: get_bool(scatter_section, "LimitEnabled", ds.limit_enabled),
        width: get_parsed(scatter_section, "Scatter", "Width", ds.width)?,
        height: get_parsed(scatter_section, "Scatter", "Height", ds.height)?,
    };

    let dg = d.grouped;
    let grouped = GroupedOptions {
        x_axes: get_list(grouped_section, "XAxes", &dg.x_axes),
        y_axes: get_list(grouped_section, "YAxes", &dg.y_axes),
        hues: get_list(grouped_section, "Hues", &dg.hues),
        facet: get_string(grouped_section, "Facet", &dg.facet),
        wrap: get_parsed(grouped_section, "Grouped", "Wrap", dg.wrap)?,
        width: get_parsed(grouped_section, "Grouped", "Width", dg.width)?,
        height: get_parsed(grouped_section, "Grouped", "Height", dg.height)?,
    };
    if grouped.wrap == 0 {
        return Err(positive("Grouped", "Wrap"));
    }

    Ok(Config {
        source: None,
        input,
        log_dir: get_string(logging_section, "Directory", &d.log_dir),
        log_spec: get_string(logging_section, "Spec", &d.log_spec),
        modes,
        report,
        image,
        scatter,
        grouped,
    })
}

// Load the configuration file, the defaults apply when there is none.
pub fn new(cfg_file_path: &Path) -> Result<Config> {
    if !cfg_file_path.exists() {
        return Ok(Config::default());
    }

    let inifile = Ini::load_from_file(cfg_file_path)?;
    let mut config = from_ini(&inifile)?;
    config.source = Some(cfg_file_path.to_path_buf());
    Ok(config)
}
