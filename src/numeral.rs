use crate::error::{AnalysisError, Result};

// The report separates a value from its unit with a non-breaking space.
pub const UNIT_SEPARATOR: char = '\u{a0}';

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct NumberFormat {
    pub thousands: char,
    pub decimal: char,
}

impl NumberFormat {
    pub const EN_US: NumberFormat = NumberFormat {
        thousands: ',',
        decimal: '.',
    };

    // "1,234.56" -> 1234.56, thousands separators may appear anywhere.
    pub fn parse(&self, text: &str) -> Result<f64> {
        let normalized: String = text
            .trim()
            .chars()
            .filter(|c| *c != self.thousands)
            .map(|c| if c == self.decimal { '.' } else { c })
            .collect();

        normalized
            .parse::<f64>()
            .map_err(|_| AnalysisError::MalformedNumber(text.to_string()))
    }

    // Parse a cell like "1,234.56 USDT", ignoring everything from the
    // first non-breaking space onwards.
    pub fn parse_with_unit(&self, text: &str) -> Result<f64> {
        let numeral = match text.split_once(UNIT_SEPARATOR) {
            Some((n, _unit)) => n,
            None => text,
        };
        self.parse(numeral)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::EN_US
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_and_unit() {
        let v = NumberFormat::EN_US
            .parse_with_unit("1,234.56\u{a0}USDT")
            .unwrap();
        assert!((v - 1234.56).abs() < 1e-9);
    }

    #[test]
    fn plain_values() {
        let fmt = NumberFormat::EN_US;
        assert_eq!(fmt.parse("10").unwrap(), 10.0);
        assert_eq!(fmt.parse(" 0.0500 ").unwrap(), 0.05);
        assert_eq!(fmt.parse("-1,000").unwrap(), -1000.0);
        assert_eq!(fmt.parse_with_unit("0.0200").unwrap(), 0.02);
    }

    #[test]
    fn other_conventions() {
        let de = NumberFormat {
            thousands: '.',
            decimal: ',',
        };
        assert_eq!(de.parse("1.234,5").unwrap(), 1234.5);
    }

    #[test]
    fn garbage_is_rejected() {
        match NumberFormat::EN_US.parse_with_unit("n/a\u{a0}BTC") {
            Err(AnalysisError::MalformedNumber(s)) => assert_eq!(s, "n/a"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(NumberFormat::EN_US.parse("").is_err());
    }
}
