use crate::error::{AnalysisError, Result};

use bitmask_enum::bitmask;

#[bitmask]
#[derive(Debug)]
pub enum PlotModes {
    Scatter, // One subplot per (x, y) combination, with trend lines.
    Grouped, // Facets per provider, points coloured by a categorical.
}

// Parse a comma separated list of plot modes, e.g. "Scatter,Grouped".
pub fn from_str_cs(mode_list: &str) -> Result<PlotModes> {
    let mut modes = PlotModes::none();
    for m in mode_list.split(',').map(str::trim).filter(|m| !m.is_empty()) {
        if m.eq_ignore_ascii_case("Scatter") {
            modes = modes.or(PlotModes::Scatter);
        } else if m.eq_ignore_ascii_case("Grouped") {
            modes = modes.or(PlotModes::Grouped);
        } else {
            return Err(AnalysisError::Config(format!("unsupported plot mode: {:?}", m)));
        }
    }

    Ok(modes)
}
