use crate::error::{AnalysisError, Result};

use chrono::{DateTime, Local};
use log::warn;
use std::collections::{HashMap, HashSet};

#[derive(Debug, PartialEq, Clone)]
pub enum Cell {
    Number(f64),
    Text(String),
    Time(DateTime<Local>),
    Missing,
}

impl Cell {
    // Interpret a raw text field: numbers become numbers, blanks are missing.
    pub fn infer(s: &str) -> Cell {
        let t = s.trim();
        if t.is_empty() {
            return Cell::Missing;
        }
        match t.parse::<f64>() {
            Ok(v) => Cell::Number(v),
            Err(_) => Cell::Text(s.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Time(t) => Some(t.timestamp_millis() as f64 / 1000.0),
            Cell::Text(_) | Cell::Missing => None,
        }
    }

    // Text used for categorical axes and legends.
    pub fn label(&self) -> Option<String> {
        match self {
            Cell::Number(v) => Some(v.to_string()),
            Cell::Text(s) => Some(s.clone()),
            Cell::Time(t) => Some(t.format("%Y-%m-%d %H:%M:%S").to_string()),
            Cell::Missing => None,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ColumnKind {
    Numeric,
    Time,
    Categorical,
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    // Rows shorter than the header are padded with missing cells, repeated
    // column names get a ".1", ".2", ... suffix.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Table {
        let columns = dedup(columns);
        let index: HashMap<String, usize> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();

        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, Cell::Missing);
                r
            })
            .collect();

        Table {
            columns,
            index,
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn position(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| AnalysisError::UnknownColumn(name.to_string()))
    }

    pub fn column(&self, name: &str) -> Result<Vec<&Cell>> {
        let i = self.position(name)?;
        Ok(self.rows.iter().map(|r| &r[i]).collect())
    }

    // A column is numeric when every cell present holds a number, time
    // when every cell present holds an instant.
    pub fn kind(&self, name: &str) -> Result<ColumnKind> {
        let cells = self.column(name)?;
        let present = || cells.iter().filter(|c| !matches!(c, Cell::Missing));

        if present().all(|c| matches!(c, Cell::Number(_))) {
            Ok(ColumnKind::Numeric)
        } else if present().all(|c| matches!(c, Cell::Time(_))) {
            Ok(ColumnKind::Time)
        } else {
            Ok(ColumnKind::Categorical)
        }
    }

    pub fn is_numeric(&self, name: &str) -> Result<bool> {
        Ok(self.kind(name)? == ColumnKind::Numeric)
    }
}

fn dedup(columns: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(columns.len());
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(columns.len());

    for c in columns {
        if seen.insert(c.clone()) {
            out.push(c);
            continue;
        }
        let n = counts.entry(c.clone()).or_insert(0);
        let renamed = loop {
            *n += 1;
            let candidate = format!("{}.{}", c, n);
            if !seen.contains(&candidate) {
                break candidate;
            }
        };
        warn!("duplicate column {:?} renamed to {:?}.", c, renamed);
        seen.insert(renamed.clone());
        out.push(renamed);
    }
    out
}
