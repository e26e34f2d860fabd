use crate::error::{AnalysisError, Result};
use crate::table::{ColumnKind, Table};
use crate::trend;

use chrono::{Local, TimeZone};
use log::{debug, info, warn};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::collections::HashMap;
use std::ops::Range;
use std::path::{Path, PathBuf};

// Number of points sampled along a trend line.
const TREND_SAMPLES: usize = 100;

#[derive(Debug, PartialEq, Clone)]
pub struct ImageOptions {
    pub dpi: u32,
    pub padding: f64, // Inches of blank border around the figure.
}

impl Default for ImageOptions {
    fn default() -> Self {
        ImageOptions {
            dpi: 72,
            padding: 1.0,
        }
    }
}

impl ImageOptions {
    fn pixels(&self, inches: f64) -> u32 {
        (inches * self.dpi as f64).round().max(1.0) as u32
    }

    // Font sizes are given in points, 72 to the inch.
    fn font(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ScatterOptions {
    pub x_axes: Vec<String>,
    pub y_axes: Vec<String>,
    // Metrics that swing around zero get a reference line there.
    pub centered: Vec<String>,
    pub limit: usize,
    pub limit_enabled: bool,
    pub width: f64,  // Inches per subplot.
    pub height: f64, // Inches per subplot.
}

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

impl Default for ScatterOptions {
    fn default() -> Self {
        ScatterOptions {
            x_axes: strings(&["Asset", "Duration (s)", "Provider", "Status"]),
            y_axes: strings(&["Profit (%)"]),
            centered: strings(&["Strategy vs Market", "Sharpe"]),
            limit: 16,
            limit_enabled: true,
            width: 6.4,
            height: 4.8,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct GroupedOptions {
    pub x_axes: Vec<String>,
    pub y_axes: Vec<String>,
    pub hues: Vec<String>,
    pub facet: String,
    pub wrap: usize,  // Facets per row.
    pub width: f64,   // Inches per facet.
    pub height: f64,  // Inches per facet.
}

impl Default for GroupedOptions {
    fn default() -> Self {
        GroupedOptions {
            x_axes: strings(&["Duration (s)"]),
            y_axes: strings(&["Profit (%)"]),
            hues: strings(&["Asset"]),
            facet: "Provider".to_string(),
            wrap: 2,
            width: 5.0,
            height: 5.0,
        }
    }
}

// Rows and columns of a near square grid holding n plots.
pub fn grid_shape(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let cols = ((n as f64).sqrt().floor() as usize).max(1);
    let rows = (n + cols - 1) / cols;
    (rows, cols)
}

pub fn product(xs: &[String], ys: &[String]) -> Vec<(String, String)> {
    xs.iter()
        .flat_map(|x| ys.iter().map(move |y| (x.clone(), y.clone())))
        .collect()
}

pub fn product3(xs: &[String], ys: &[String], hues: &[String]) -> Vec<(String, String, String)> {
    product(xs, ys)
        .into_iter()
        .flat_map(|(x, y)| hues.iter().map(move |h| (x.clone(), y.clone(), h.clone())))
        .collect()
}

fn sibling(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "positions".to_string());
    input.with_file_name(format!("{}{}.png", stem, suffix))
}

// input-20190122.html -> input-20190122_scatter.png
pub fn scatter_output_path(input: &Path) -> PathBuf {
    sibling(input, "_scatter")
}

// input-20190122.html -> input-20190122.png
pub fn grouped_output_path(input: &Path) -> PathBuf {
    sibling(input, "")
}

// Distinct labels of a column in order of first appearance, and the label
// index of every row.
fn categories(table: &Table, name: &str) -> Result<(Vec<String>, Vec<Option<usize>>)> {
    let mut labels: Vec<String> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    let codes = table
        .column(name)?
        .into_iter()
        .map(|cell| {
            cell.label().map(|l| {
                *seen.entry(l.clone()).or_insert_with(|| {
                    labels.push(l);
                    labels.len() - 1
                })
            })
        })
        .collect();

    Ok((labels, codes))
}

// One plotted dimension: numbers and instants are placed by value,
// categories at their index.
#[derive(Debug)]
struct Axis {
    kind: ColumnKind,
    values: Vec<Option<f64>>,
    labels: Vec<String>,
}

impl Axis {
    fn new(table: &Table, name: &str) -> Result<Axis> {
        let kind = table.kind(name)?;
        match kind {
            ColumnKind::Numeric | ColumnKind::Time => Ok(Axis {
                kind,
                values: table
                    .column(name)?
                    .into_iter()
                    .map(|c| c.as_f64().filter(|v| v.is_finite()))
                    .collect(),
                labels: Vec::new(),
            }),
            ColumnKind::Categorical => {
                let (labels, codes) = categories(table, name)?;
                Ok(Axis {
                    kind,
                    values: codes.into_iter().map(|c| c.map(|i| i as f64)).collect(),
                    labels,
                })
            }
        }
    }

    fn range(&self) -> Range<f64> {
        if self.kind == ColumnKind::Categorical {
            return -0.5..(self.labels.len().max(1) as f64 - 0.5);
        }

        let present = self.values.iter().flatten();
        let min = present.clone().copied().fold(f64::INFINITY, f64::min);
        let max = present.copied().fold(f64::NEG_INFINITY, f64::max);
        if !min.is_finite() {
            return 0.0..1.0;
        }
        if min == max {
            return (min - 1.0)..(max + 1.0);
        }
        let margin = (max - min) * 0.05;
        (min - margin)..(max + margin)
    }

    fn label_count(&self) -> usize {
        match self.kind {
            ColumnKind::Categorical => self.labels.len().max(2),
            ColumnKind::Time => 5,
            ColumnKind::Numeric => 8,
        }
    }

    // Enough decimals that neighbouring ticks read differently.
    fn decimals(&self) -> usize {
        let r = self.range();
        let step = (r.end - r.start) / self.label_count() as f64;
        if !step.is_finite() || step <= 0.0 {
            return 0;
        }
        ((-step.log10()).ceil() + 1.0).clamp(0.0, 12.0) as usize
    }

    fn format(&self, v: f64) -> String {
        match self.kind {
            ColumnKind::Numeric => {
                let s = format!("{:.*}", self.decimals(), v);
                let t = if s.contains('.') {
                    s.trim_end_matches('0').trim_end_matches('.')
                } else {
                    s.as_str()
                };
                if t == "-0" {
                    "0".to_string()
                } else {
                    t.to_string()
                }
            }
            ColumnKind::Time => Local
                .timestamp_opt(v.round() as i64, 0)
                .single()
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            ColumnKind::Categorical => {
                let i = v.round();
                if (v - i).abs() > 1e-6 || i < 0.0 {
                    return String::new();
                }
                self.labels.get(i as usize).cloned().unwrap_or_default()
            }
        }
    }

    fn points(&self, other: &Axis) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .zip(other.values.iter())
            .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
            .collect()
    }
}

struct ScatterPlot<'a> {
    x_name: &'a str,
    y_name: &'a str,
    x: Axis,
    y: Axis,
    centered: bool,
}

fn draw_scatter_cell<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    plot: &ScatterPlot,
    image: &ImageOptions,
) -> Result<()> {
    let (xr, yr) = (plot.x.range(), plot.y.range());
    let font = image.font(10.0);

    let mut chart = ChartBuilder::on(area)
        .margin(image.pixels(0.1))
        .x_label_area_size(image.pixels(0.6))
        .y_label_area_size(image.pixels(0.9))
        .build_cartesian_2d(xr.clone(), yr)?;

    let x_fmt = |v: &f64| plot.x.format(*v);
    let y_fmt = |v: &f64| plot.y.format(*v);
    chart
        .configure_mesh()
        .light_line_style(&TRANSPARENT)
        .x_desc(plot.x_name)
        .y_desc(plot.y_name)
        .x_labels(plot.x.label_count())
        .y_labels(plot.y.label_count())
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .label_style(("sans-serif", font))
        .axis_desc_style(("sans-serif", font))
        .draw()?;

    // Zero line sits underneath the points.
    if plot.centered {
        chart.draw_series(LineSeries::new(vec![(xr.start, 0.0), (xr.end, 0.0)], &RED))?;
    }

    let points = plot.x.points(&plot.y);
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLACK.filled())),
    )?;

    if plot.x.kind == ColumnKind::Numeric && plot.y.kind == ColumnKind::Numeric {
        let lo = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let hi = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let samples: Vec<f64> = (0..TREND_SAMPLES)
            .map(|i| lo + (hi - lo) * i as f64 / (TREND_SAMPLES - 1) as f64)
            .collect();

        for (degree, color) in [(1, GREEN), (2, YELLOW)] {
            match trend::polyfit(&points, degree) {
                Some(p) => {
                    chart.draw_series(LineSeries::new(
                        samples.iter().map(|&x| (x, p.eval(x))),
                        &color,
                    ))?;
                }
                None => debug!(
                    "no degree {} trend for {} vs {}, not enough points",
                    degree, plot.y_name, plot.x_name
                ),
            }
        }
    }

    Ok(())
}

// Every column is resolved before the image is created.
pub fn draw_scatterplots(
    table: &Table,
    combinations: &[(String, String)],
    opts: &ScatterOptions,
    image: &ImageOptions,
    out: &Path,
) -> Result<()> {
    let n = combinations.len();
    if opts.limit_enabled && n > opts.limit {
        return Err(AnalysisError::TooManyPlots {
            count: n,
            limit: opts.limit,
        });
    }
    if n == 0 {
        warn!("no scatter plot combinations selected");
        return Ok(());
    }

    let mut plots = Vec::with_capacity(n);
    for (x, y) in combinations {
        plots.push(ScatterPlot {
            x_name: x,
            y_name: y,
            x: Axis::new(table, x)?,
            y: Axis::new(table, y)?,
            centered: opts.centered.iter().any(|c| c == y),
        });
    }

    let (rows, cols) = grid_shape(n);
    let pad = image.pixels(image.padding);
    let size = (
        cols as u32 * image.pixels(opts.width) + 2 * pad,
        rows as u32 * image.pixels(opts.height) + 2 * pad,
    );
    info!("drawing {} scatter plots in a {}x{} grid to {:?}", n, rows, cols, out);

    let root = BitMapBackend::new(out, size).into_drawing_area();
    root.fill(&WHITE)?;
    let inner = root.margin(pad, pad, pad, pad);

    for (area, plot) in inner.split_evenly((rows, cols)).iter().zip(plots.iter()) {
        debug!("scatter {} vs {}", plot.y_name, plot.x_name);
        draw_scatter_cell(area, plot, image)?;
    }

    root.present()?;
    Ok(())
}

struct Facets {
    labels: Vec<String>,
    codes: Vec<Option<usize>>,
}

impl Facets {
    fn shape(&self, wrap: usize) -> (usize, usize) {
        let n = self.labels.len().max(1);
        let cols = n.min(wrap);
        ((n + cols - 1) / cols, cols)
    }
}

struct GroupedPlot<'a> {
    x_name: &'a str,
    y_name: &'a str,
    hue_name: &'a str,
    x: Axis,
    y: Axis,
    hues: Vec<String>,
    hue_codes: Vec<Option<usize>>,
}

fn draw_facet<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    plot: &GroupedPlot,
    caption: &str,
    rows: &[usize],
    image: &ImageOptions,
) -> Result<()> {
    let font = image.font(10.0);

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", image.font(12.0)))
        .margin(image.pixels(0.1))
        .x_label_area_size(image.pixels(0.6))
        .y_label_area_size(image.pixels(0.9))
        .build_cartesian_2d(plot.x.range(), plot.y.range())?;

    let x_fmt = |v: &f64| plot.x.format(*v);
    let y_fmt = |v: &f64| plot.y.format(*v);
    chart
        .configure_mesh()
        .light_line_style(&TRANSPARENT)
        .x_desc(plot.x_name)
        .y_desc(plot.y_name)
        .x_labels(plot.x.label_count())
        .y_labels(plot.y.label_count())
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .label_style(("sans-serif", font))
        .axis_desc_style(("sans-serif", font))
        .draw()?;

    let mut labelled = false;
    for (h, hue) in plot.hues.iter().enumerate() {
        let points: Vec<(f64, f64)> = rows
            .iter()
            .filter(|&&r| plot.hue_codes[r] == Some(h))
            .filter_map(|&r| Some((plot.x.values[r]?, plot.y.values[r]?)))
            .collect();
        if points.is_empty() {
            continue;
        }

        let color = Palette99::pick(h).to_rgba();
        chart
            .draw_series(points.into_iter().map(move |p| Circle::new(p, 3, color.filled())))?
            .label(format!("{} = {}", plot.hue_name, hue))
            .legend(move |(x, y)| Circle::new((x, y), 3, color.filled()));
        labelled = true;
    }

    if labelled {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", font))
            .draw()?;
    }

    Ok(())
}

// All combinations are stacked into one image, one facet per distinct value
// of the facet column.
pub fn draw_grouped(
    table: &Table,
    combinations: &[(String, String, String)],
    opts: &GroupedOptions,
    image: &ImageOptions,
    out: &Path,
) -> Result<()> {
    if combinations.is_empty() {
        warn!("no grouped plot combinations selected");
        return Ok(());
    }

    let (facet_labels, facet_codes) = categories(table, &opts.facet)?;
    let facets = Facets {
        labels: facet_labels,
        codes: facet_codes,
    };

    let mut plots = Vec::with_capacity(combinations.len());
    for (x, y, hue) in combinations {
        let (hues, hue_codes) = categories(table, hue)?;
        plots.push(GroupedPlot {
            x_name: x,
            y_name: y,
            hue_name: hue,
            x: Axis::new(table, x)?,
            y: Axis::new(table, y)?,
            hues,
            hue_codes,
        });
    }

    // Rows of the table that fall into each facet.
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); facets.labels.len()];
    for (r, code) in facets.codes.iter().enumerate() {
        if let Some(f) = code {
            members[*f].push(r);
        }
    }

    let (rows, cols) = facets.shape(opts.wrap);
    let pad = image.pixels(image.padding);
    let block = (
        cols as u32 * image.pixels(opts.width),
        rows as u32 * image.pixels(opts.height),
    );
    let size = (block.0 + 2 * pad, block.1 * plots.len() as u32 + 2 * pad);
    let facet_count = facets.labels.len();
    info!("drawing {} grouped plots, {} facets each, to {:?}", plots.len(), facet_count, out);

    let root = BitMapBackend::new(out, size).into_drawing_area();
    root.fill(&WHITE)?;
    let inner = root.margin(pad, pad, pad, pad);

    for (section, plot) in inner.split_evenly((plots.len(), 1)).iter().zip(plots.iter()) {
        debug!("grouped {} vs {} by {}", plot.y_name, plot.x_name, plot.hue_name);
        for (f, area) in section.split_evenly((rows, cols)).iter().enumerate() {
            if let Some(label) = facets.labels.get(f) {
                let caption = format!("{} = {}", opts.facet, label);
                draw_facet(area, plot, &caption, &members[f], image)?;
            }
        }
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;

    fn table() -> Table {
        let columns = strings(&["Provider", "Asset", "Duration (s)", "Profit (%)"]);
        let rows = vec![
            vec![
                Cell::Text("Acme".into()),
                Cell::Text("ETH".into()),
                Cell::Number(3600.0),
                Cell::Number(0.04),
            ],
            vec![
                Cell::Text("Zeta".into()),
                Cell::Text("ADA".into()),
                Cell::Number(60.0),
                Cell::Number(-0.01),
            ],
            vec![
                Cell::Text("Acme".into()),
                Cell::Text("ADA".into()),
                Cell::Number(f64::NAN),
                Cell::Missing,
            ],
        ];
        Table::new(columns, rows)
    }

    // Two providers, enough numeric points for both trend lines.
    fn positions() -> Table {
        let columns = strings(&["Provider", "Asset", "Duration (s)", "Profit (%)", "Sharpe"]);
        let data = [
            ("Acme", "ETH", 3600.0, 0.04, 1.2),
            ("Zeta", "ADA", 60.0, -0.01, -0.4),
            ("Acme", "ADA", 7200.0, 0.02, 0.3),
            ("Zeta", "ETH", 86400.0, -0.05, -1.1),
            ("Acme", "BTC", 600.0, 0.01, 0.0),
            ("Zeta", "BTC", 1800.0, 0.03, 0.8),
        ];
        let rows = data
            .iter()
            .map(|&(p, a, d, pct, sharpe)| {
                vec![
                    Cell::Text(p.into()),
                    Cell::Text(a.into()),
                    Cell::Number(d),
                    Cell::Number(pct),
                    Cell::Number(sharpe),
                ]
            })
            .collect();
        Table::new(columns, rows)
    }

    fn temp_png(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}-{}.png", std::process::id(), name))
    }

    #[test]
    fn grid() {
        assert_eq!(grid_shape(0), (0, 0));
        assert_eq!(grid_shape(1), (1, 1));
        assert_eq!(grid_shape(2), (2, 1));
        assert_eq!(grid_shape(3), (3, 1));
        assert_eq!(grid_shape(4), (2, 2));
        assert_eq!(grid_shape(5), (3, 2));
        assert_eq!(grid_shape(9), (3, 3));
        assert_eq!(grid_shape(10), (4, 3));
        assert_eq!(grid_shape(16), (4, 4));
    }

    #[test]
    fn combinations() {
        let opts = ScatterOptions::default();
        let pairs = product(&opts.x_axes, &opts.y_axes);
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0], ("Asset".to_string(), "Profit (%)".to_string()));
        assert_eq!(pairs[3].0, "Status");

        let triples = product3(
            &strings(&["a", "b"]),
            &strings(&["y"]),
            &strings(&["h1", "h2"]),
        );
        assert_eq!(triples.len(), 4);
        assert_eq!(triples[1], ("a".into(), "y".into(), "h2".into()));
    }

    #[test]
    fn output_paths() {
        let input = Path::new("data/input-20190122.html");
        assert_eq!(
            grouped_output_path(input),
            PathBuf::from("data/input-20190122.png")
        );
        assert_eq!(
            scatter_output_path(input),
            PathBuf::from("data/input-20190122_scatter.png")
        );
    }

    #[test]
    fn categorical_axis() {
        let axis = Axis::new(&table(), "Asset").unwrap();
        assert_eq!(axis.kind, ColumnKind::Categorical);
        assert_eq!(axis.labels, vec!["ETH", "ADA"]);
        assert_eq!(axis.values, vec![Some(0.0), Some(1.0), Some(1.0)]);
        assert_eq!(axis.range(), -0.5..1.5);
        assert_eq!(axis.format(1.0), "ADA");
        assert_eq!(axis.format(0.5), "");
        assert_eq!(axis.format(7.0), "");
    }

    #[test]
    fn numeric_axis() {
        let t = table();
        let x = Axis::new(&t, "Duration (s)").unwrap();
        let y = Axis::new(&t, "Profit (%)").unwrap();
        assert_eq!(x.values[2], None);
        assert_eq!(x.points(&y), vec![(3600.0, 0.04), (60.0, -0.01)]);

        let r = x.range();
        assert!(r.start < 60.0 && r.end > 3600.0);
        assert_eq!(x.format(3600.0), "3600");
        assert_eq!(y.format(0.04), "0.04");
    }

    #[test]
    fn small_values_keep_their_digits() {
        let columns = strings(&["Buy Price"]);
        let rows = [0.00002, 0.00004, 0.00006]
            .iter()
            .map(|&v| vec![Cell::Number(v)])
            .collect();
        let axis = Axis::new(&Table::new(columns, rows), "Buy Price").unwrap();

        let labels: Vec<String> = (2..=6).map(|i| axis.format(i as f64 * 1e-5)).collect();
        assert_eq!(labels, vec!["0.00002", "0.00003", "0.00004", "0.00005", "0.00006"]);
        assert_eq!(axis.format(0.0), "0");
    }

    #[test]
    fn scatter_with_zero_line() {
        let t = positions();
        let pairs = product(
            &strings(&["Duration (s)", "Asset", "Provider"]),
            &strings(&["Sharpe", "Profit (%)"]),
        );
        let out = temp_png("scatter");
        let opts = ScatterOptions::default();
        assert!(opts.centered.contains(&"Sharpe".to_string()));

        draw_scatterplots(&t, &pairs, &opts, &ImageOptions::default(), &out).unwrap();
        assert!(out.exists());
        std::fs::remove_file(&out).unwrap();
    }

    #[test]
    fn grouped_by_provider() {
        let t = positions();
        let triples = product3(
            &strings(&["Duration (s)"]),
            &strings(&["Profit (%)", "Sharpe"]),
            &strings(&["Asset"]),
        );
        let out = temp_png("grouped");
        let opts = GroupedOptions::default();
        draw_grouped(&t, &triples, &opts, &ImageOptions::default(), &out).unwrap();
        assert!(out.exists());
        std::fs::remove_file(&out).unwrap();
    }

    #[test]
    fn limit_disabled() {
        let t = positions();
        let xs: Vec<String> = (0..17).map(|_| "Duration (s)".to_string()).collect();
        let pairs = product(&xs, &strings(&["Profit (%)"]));
        let out = temp_png("unlimited");
        let opts = ScatterOptions {
            limit_enabled: false,
            ..ScatterOptions::default()
        };
        draw_scatterplots(&t, &pairs, &opts, &ImageOptions::default(), &out).unwrap();
        assert!(out.exists());
        std::fs::remove_file(&out).unwrap();
    }

    #[test]
    fn too_many_plots() {
        let t = table();
        let xs: Vec<String> = (0..17).map(|_| "Asset".to_string()).collect();
        let pairs = product(&xs, &strings(&["Profit (%)"]));
        let out = temp_png("too-many");
        match draw_scatterplots(
            &t,
            &pairs,
            &ScatterOptions::default(),
            &ImageOptions::default(),
            &out,
        ) {
            Err(AnalysisError::TooManyPlots { count, limit }) => {
                assert_eq!(count, 17);
                assert_eq!(limit, 16);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!out.exists());
    }

    #[test]
    fn unknown_columns_fail_before_drawing() {
        let t = table();
        let out = temp_png("unknown");
        let pairs = product(&strings(&["Asset"]), &strings(&["Sharpe"]));
        let opts = ScatterOptions::default();
        assert!(matches!(
            draw_scatterplots(&t, &pairs, &opts, &ImageOptions::default(), &out),
            Err(AnalysisError::UnknownColumn(_))
        ));

        let triples = product3(
            &strings(&["Duration (s)"]),
            &strings(&["Profit (%)"]),
            &strings(&["Currency"]),
        );
        assert!(matches!(
            draw_grouped(&t, &triples, &GroupedOptions::default(), &ImageOptions::default(), &out),
            Err(AnalysisError::UnknownColumn(_))
        ));
        assert!(!out.exists());
    }

    #[test]
    fn nothing_to_draw() {
        let out = temp_png("empty");
        let image = ImageOptions::default();
        draw_scatterplots(&table(), &[], &ScatterOptions::default(), &image, &out).unwrap();
        draw_grouped(&table(), &[], &GroupedOptions::default(), &image, &out).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn facet_layout() {
        let (labels, codes) = categories(&table(), "Provider").unwrap();
        assert_eq!(labels, vec!["Acme", "Zeta"]);
        assert_eq!(codes, vec![Some(0), Some(1), Some(0)]);

        let facets = Facets { labels, codes };
        assert_eq!(facets.shape(2), (1, 2));
        let three = Facets {
            labels: strings(&["a", "b", "c"]),
            codes: Vec::new(),
        };
        assert_eq!(three.shape(2), (2, 2));
        assert_eq!(three.shape(5), (1, 3));
    }
}
