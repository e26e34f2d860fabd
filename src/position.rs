use crate::table::{Cell, Table};

use chrono::{DateTime, Local};

// Fields as they appear in one report row, before anything is derived.
#[derive(Debug, PartialEq, Clone)]
pub struct RawPosition {
    pub open_time: DateTime<Local>,
    pub close_time: DateTime<Local>,
    pub provider: String,
    pub pair: String,
    pub status: String,
    pub buy_price: f64,  // In currency.
    pub sell_price: f64, // In currency.
    pub amount: f64,     // In asset.
    pub invested: f64,   // In currency.
    pub profit: f64,     // In currency.
}

#[derive(Debug, PartialEq, Clone)]
pub struct PositionRecord {
    pub open_time: DateTime<Local>,
    pub close_time: DateTime<Local>,
    pub provider: String,
    pub pair: String,
    pub status: String,
    pub buy_price: f64,
    pub sell_price: f64,
    pub amount: f64,
    pub invested: f64,
    pub profit: f64,

    pub duration_seconds: f64, // close_time - open_time, may be negative.
    pub profit_pct: f64,       // profit / invested, NaN when nothing was invested.
    pub asset: String,
    pub currency: String,
}

impl PositionRecord {
    // Table layout, see cells().
    pub const COLUMNS: [&'static str; 14] = [
        "Open",
        "Close",
        "Provider",
        "Pair",
        "Status",
        "Buy Price",
        "Sell Price",
        "Amount",
        "Invested",
        "Profit",
        "Duration (s)",
        "Profit (%)",
        "Asset",
        "Currency",
    ];

    // Cells in the same order as COLUMNS.
    pub fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Time(self.open_time),
            Cell::Time(self.close_time),
            Cell::Text(self.provider.clone()),
            Cell::Text(self.pair.clone()),
            Cell::Text(self.status.clone()),
            Cell::Number(self.buy_price),
            Cell::Number(self.sell_price),
            Cell::Number(self.amount),
            Cell::Number(self.invested),
            Cell::Number(self.profit),
            Cell::Number(self.duration_seconds),
            Cell::Number(self.profit_pct),
            Cell::Text(self.asset.clone()),
            Cell::Text(self.currency.clone()),
        ]
    }
}

pub fn to_table(records: &[PositionRecord]) -> Table {
    let columns = PositionRecord::COLUMNS.iter().map(|c| c.to_string()).collect();
    let rows = records.iter().map(|r| r.cells()).collect();
    Table::new(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived;
    use chrono::TimeZone;

    fn sample() -> PositionRecord {
        derived::derive(RawPosition {
            open_time: Local.timestamp_millis_opt(1_000_000).unwrap(),
            close_time: Local.timestamp_millis_opt(1_003_600_000).unwrap(),
            provider: "Acme Signals".to_string(),
            pair: "ETH/BTC".to_string(),
            status: "Closed".to_string(),
            buy_price: 0.05,
            sell_price: 0.052,
            amount: 10.0,
            invested: 0.5,
            profit: 0.02,
        })
        .unwrap()
    }

    #[test]
    fn table_layout() {
        let table = to_table(&[sample(), sample()]);
        assert_eq!(table.columns().len(), PositionRecord::COLUMNS.len());
        assert_eq!(table.len(), 2);

        let asset = table.column("Asset").unwrap();
        assert_eq!(asset[0], &Cell::Text("ETH".to_string()));
        assert!(table.is_numeric("Profit (%)").unwrap());
        assert!(!table.is_numeric("Provider").unwrap());
        assert!(!table.is_numeric("Open").unwrap());
    }
}
