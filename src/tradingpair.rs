use crate::error::{AnalysisError, Result};

#[derive(Debug, PartialEq, Clone, PartialOrd)]
pub struct TradingPair {
    name: String,     // ETH/BTC.
    asset: String,    // ETH.
    currency: String, // BTC.
}

impl TradingPair {
    // Split on the first '/', anything after it belongs to the currency so
    // that asset + "/" + currency always reproduces the name.
    pub fn parse(n: &str) -> Result<TradingPair> {
        match n.split_once('/') {
            Some((asset, currency)) => Ok(TradingPair {
                name: String::from(n),
                asset: String::from(asset),
                currency: String::from(currency),
            }),
            None => Err(AnalysisError::MalformedPair(n.to_string())),
        }
    }

    #[allow(dead_code)]
    pub fn name(&self) -> &str {
        &self.name
    }

    // The asset that was bought, Amount is denominated in it.
    pub fn asset(&self) -> &str {
        &self.asset
    }

    // The currency the asset was paid for with.
    pub fn currency(&self) -> &str {
        &self.currency
    }
}
