use crate::error::Result;
use crate::position::{PositionRecord, RawPosition};
use crate::tradingpair::TradingPair;

use log::warn;

// Seconds between open and close, negative when the close precedes the open.
pub fn duration_seconds(raw: &RawPosition) -> f64 {
    (raw.close_time - raw.open_time).num_milliseconds() as f64 / 1000.0
}

// Realized return as a fraction of the invested amount.
pub fn profit_pct(profit: f64, invested: f64) -> f64 {
    if invested == 0.0 {
        f64::NAN
    } else {
        profit / invested
    }
}

// Only a pair without a '/' fails, odd durations and investments are kept.
pub fn derive(raw: RawPosition) -> Result<PositionRecord> {
    let tp = TradingPair::parse(&raw.pair)?;

    let duration = duration_seconds(&raw);
    if duration < 0.0 {
        warn!(
            "{} position by {:?} closed {}s before it opened",
            raw.pair, raw.provider, -duration
        );
    }

    let pct = profit_pct(raw.profit, raw.invested);
    if pct.is_nan() {
        warn!(
            "{} position by {:?} has nothing invested, profit percentage is undefined",
            raw.pair, raw.provider
        );
    }

    Ok(PositionRecord {
        asset: tp.asset().to_string(),
        currency: tp.currency().to_string(),
        duration_seconds: duration,
        profit_pct: pct,

        open_time: raw.open_time,
        close_time: raw.close_time,
        provider: raw.provider,
        pair: raw.pair,
        status: raw.status,
        buy_price: raw.buy_price,
        sell_price: raw.sell_price,
        amount: raw.amount,
        invested: raw.invested,
        profit: raw.profit,
    })
}
