use crate::derived;
use crate::error::{AnalysisError, Result};
use crate::numeral::NumberFormat;
use crate::position::{PositionRecord, RawPosition};

use chrono::{DateTime, Local, TimeZone};
use log::{debug, info};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_TABLE_CLASS: &str = "table-striped";

// Header texts of the columns every report must carry.
const PAIR: &str = "Pair";
const STATUS: &str = "Status";
const BUY_PRICE: &str = "Buy Price";
const SELL_PRICE: &str = "Sell Price";
const AMOUNT: &str = "Amount";
const INVESTED: &str = "Invested";
const PROFIT: &str = "Profit BTC"; // Denominated in the pair's currency, not always BTC.

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub table_class: String,
    pub number_format: NumberFormat,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            table_class: DEFAULT_TABLE_CLASS.to_string(),
            number_format: NumberFormat::EN_US,
        }
    }
}

// Cell positions of the required columns, resolved once from the header.
#[derive(Debug, PartialEq)]
struct HeaderMap {
    pair: usize,
    status: usize,
    buy_price: usize,
    sell_price: usize,
    amount: usize,
    invested: usize,
    profit: usize,
}

impl HeaderMap {
    fn new(header: &[String]) -> Result<HeaderMap> {
        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(header.len());
        for (i, h) in header.iter().enumerate() {
            // The first of two identically named columns wins.
            positions.entry(h.as_str()).or_insert(i);
        }

        let find = |name: &str| -> Result<usize> {
            positions
                .get(name)
                .copied()
                .ok_or_else(|| AnalysisError::MissingColumn(name.to_string()))
        };

        Ok(HeaderMap {
            pair: find(PAIR)?,
            status: find(STATUS)?,
            buy_price: find(BUY_PRICE)?,
            sell_price: find(SELL_PRICE)?,
            amount: find(AMOUNT)?,
            invested: find(INVESTED)?,
            profit: find(PROFIT)?,
        })
    }
}

struct Selectors {
    table: Selector,
    header: Selector,
    row: Selector,
    cell: Selector,
    date: Selector,
    time: Selector,
    image: Selector,
}

impl Selectors {
    fn new(table_class: &str) -> Result<Selectors> {
        let parse = |s: &str| {
            Selector::parse(s)
                .map_err(|e| AnalysisError::Config(format!("invalid selector {:?}: {:?}", s, e)))
        };

        Ok(Selectors {
            table: parse(&format!("table.{}", table_class))?,
            header: parse("thead th")?,
            row: parse("tbody tr")?,
            cell: parse("td")?,
            date: parse("td.date")?,
            time: parse("time")?,
            image: parse("img")?,
        })
    }
}

fn text_of(el: &ElementRef) -> String {
    el.text().collect::<String>()
}

fn cell_text(cells: &[ElementRef], idx: usize, name: &str, row: usize) -> Result<String> {
    match cells.get(idx) {
        Some(c) => Ok(text_of(c)),
        None => Err(AnalysisError::MissingElement {
            row,
            what: format!("cell for column {:?}", name),
        }),
    }
}

fn epoch_ms_to_local(attr: Option<&str>, row: usize, which: &str) -> Result<DateTime<Local>> {
    let raw = attr.ok_or_else(|| AnalysisError::MalformedTimestamp {
        row,
        reason: format!("{} marker has no datetime attribute", which),
    })?;

    let ms = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| AnalysisError::MalformedTimestamp {
            row,
            reason: format!("{} marker value {:?} is not an integer", which, raw),
        })?;

    Local
        .timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| AnalysisError::MalformedTimestamp {
            row,
            reason: format!("{} marker value {} is out of range", which, ms),
        })
}

fn parse_row(
    row: &ElementRef,
    n: usize,
    hm: &HeaderMap,
    sel: &Selectors,
    fmt: &NumberFormat,
) -> Result<RawPosition> {
    let cells: Vec<ElementRef> = row.select(&sel.cell).collect();

    // Open and close times are the first two markers of the date cell.
    let date_cell = row
        .select(&sel.date)
        .next()
        .ok_or_else(|| AnalysisError::MalformedTimestamp {
            row: n,
            reason: "no date cell".to_string(),
        })?;
    let times: Vec<ElementRef> = date_cell.select(&sel.time).collect();
    if times.len() < 2 {
        return Err(AnalysisError::MalformedTimestamp {
            row: n,
            reason: format!("expected open and close markers, found {}", times.len()),
        });
    }
    let open_time = epoch_ms_to_local(times[0].value().attr("datetime"), n, "open")?;
    let close_time = epoch_ms_to_local(times[1].value().attr("datetime"), n, "close")?;

    // The provider is named by the title of its logo.
    let provider = row
        .select(&sel.image)
        .next()
        .and_then(|img| img.value().attr("title"))
        .ok_or_else(|| AnalysisError::MissingElement {
            row: n,
            what: "provider logo title".to_string(),
        })?;

    let number = |idx: usize, name: &str| -> Result<f64> {
        fmt.parse_with_unit(&cell_text(&cells, idx, name, n)?)
    };

    Ok(RawPosition {
        open_time,
        close_time,
        provider: provider.to_string(),
        pair: cell_text(&cells, hm.pair, PAIR, n)?.trim().to_string(),
        status: cell_text(&cells, hm.status, STATUS, n)?.trim().to_string(),
        buy_price: number(hm.buy_price, BUY_PRICE)?,
        sell_price: number(hm.sell_price, SELL_PRICE)?,
        amount: number(hm.amount, AMOUNT)?,
        invested: number(hm.invested, INVESTED)?,
        profit: number(hm.profit, PROFIT)?,
    })
}

// All rows or an error, never a partial result.
pub fn parse_report(html: &str, options: &ReportOptions) -> Result<Vec<PositionRecord>> {
    let sel = Selectors::new(&options.table_class)?;
    let document = Html::parse_document(html);

    let table = document
        .select(&sel.table)
        .next()
        .ok_or_else(|| AnalysisError::TableNotFound(options.table_class.clone()))?;

    let header: Vec<String> = table
        .select(&sel.header)
        .map(|th| text_of(&th).trim().to_string())
        .collect();
    debug!("report table header: {:?}", header);

    let hm = HeaderMap::new(&header)?;

    let mut records = Vec::new();
    for (i, row) in table.select(&sel.row).enumerate() {
        let raw = parse_row(&row, i + 1, &hm, &sel, &options.number_format)?;
        records.push(derived::derive(raw)?);
    }

    Ok(records)
}

pub fn get_data_from_html(path: &Path, options: &ReportOptions) -> Result<Vec<PositionRecord>> {
    let bytes = fs::read(path)?;
    let html = String::from_utf8_lossy(&bytes);
    let records = parse_report(&html, options)?;
    info!("extracted {} positions from {:?}", records.len(), path);
    Ok(records)
}
