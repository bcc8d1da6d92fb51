//! Currency rate table and FX conversion
//!
//! Every rate is quoted against a single reference currency (USD by default),
//! so any pair converts in two hops: `amount / rate[from] * rate[to]`.

use crate::error::{CalcError, Result};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Reference currency of the built-in table
pub const REFERENCE_CURRENCY: &str = "USD";

/// Built-in rates, in definition order
pub const DEFAULT_EXCHANGE_RATES: [(&str, f64); 20] = [
    ("USD", 1.0),
    ("EUR", 0.85),
    ("GBP", 0.73),
    ("JPY", 110.0),
    ("CAD", 1.25),
    ("AUD", 1.35),
    ("CHF", 0.92),
    ("CNY", 6.45),
    ("INR", 74.5),
    ("BRL", 5.2),
    ("MXN", 20.1),
    ("KRW", 1150.0),
    ("SGD", 1.35),
    ("HKD", 7.78),
    ("SEK", 8.65),
    ("NOK", 8.45),
    ("DKK", 6.35),
    ("PLN", 3.85),
    ("CZK", 21.5),
    ("HUF", 300.0),
];

/// A single `code -> rate` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub code: String,
    pub rate: f64,
}

/// Immutable table of rates relative to a reference currency.
///
/// Codes are stored uppercase and keep their definition order.
///
/// # Example
/// ```
/// use rusty_calculator::currency::RateTable;
///
/// let table = RateTable::default_table();
/// let eur = table.convert(100.0, "usd", "EUR").unwrap();
/// assert_eq!(eur, 85.0);
/// ```
#[derive(Debug, Clone)]
pub struct RateTable {
    reference: String,
    entries: Vec<CurrencyRate>,
    index: HashMap<String, usize>,
}

fn normalize_code(code: &str) -> String {
    code.to_ascii_uppercase()
}

fn validate_code(code: &str) -> Result<()> {
    if !(3..=4).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CalcError::ConfigError(format!(
            "Invalid currency code: {:?} (expected 3-4 letters)",
            code
        )));
    }
    Ok(())
}

impl RateTable {
    /// Build a validated table.
    ///
    /// Codes are normalized to uppercase. Fails if a code is malformed or
    /// duplicated, a rate is not a positive finite number, or the reference
    /// currency is missing or not quoted at exactly 1.0.
    pub fn new<I, S>(reference: &str, rates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let reference = normalize_code(reference);
        validate_code(&reference)?;

        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for (code, rate) in rates {
            let code = normalize_code(code.as_ref());
            validate_code(&code)?;

            if !rate.is_finite() || rate <= 0.0 {
                return Err(CalcError::ConfigError(format!(
                    "Rate for {} must be positive, got: {}",
                    code, rate
                )));
            }
            if index.contains_key(&code) {
                return Err(CalcError::ConfigError(format!(
                    "Duplicate currency code: {}",
                    code
                )));
            }

            index.insert(code.clone(), entries.len());
            entries.push(CurrencyRate { code, rate });
        }

        match index.get(&reference) {
            Some(&i) if entries[i].rate == 1.0 => {}
            Some(&i) => {
                return Err(CalcError::ConfigError(format!(
                    "Reference currency {} must have rate 1.0, got: {}",
                    reference, entries[i].rate
                )))
            }
            None => {
                return Err(CalcError::ConfigError(format!(
                    "Reference currency {} missing from rate table",
                    reference
                )))
            }
        }

        log::debug!(
            "Built rate table with {} currencies (reference {})",
            entries.len(),
            reference
        );

        Ok(Self {
            reference,
            entries,
            index,
        })
    }

    /// Process-wide built-in table, constructed on first use
    pub fn default_table() -> &'static RateTable {
        static DEFAULT: OnceLock<RateTable> = OnceLock::new();
        DEFAULT.get_or_init(RateTable::builtin)
    }

    /// A fresh copy of the built-in table
    pub fn builtin() -> Self {
        let mut entries = Vec::with_capacity(DEFAULT_EXCHANGE_RATES.len());
        let mut index = HashMap::with_capacity(DEFAULT_EXCHANGE_RATES.len());
        for (i, (code, rate)) in DEFAULT_EXCHANGE_RATES.iter().enumerate() {
            index.insert(code.to_string(), i);
            entries.push(CurrencyRate {
                code: code.to_string(),
                rate: *rate,
            });
        }

        Self {
            reference: REFERENCE_CURRENCY.to_string(),
            entries,
            index,
        }
    }

    /// Parse a JSON table: `[{"code": "USD", "rate": 1.0}, ...]`
    pub fn from_json_str(reference: &str, json: &str) -> Result<Self> {
        let rates: Vec<CurrencyRate> = serde_json::from_str(json)?;
        Self::new(reference, rates.into_iter().map(|r| (r.code, r.rate)))
    }

    /// Reference currency code
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rate of `code` relative to the reference currency (case-insensitive)
    pub fn rate(&self, code: &str) -> Result<f64> {
        let code = normalize_code(code);
        self.index
            .get(&code)
            .map(|&i| self.entries[i].rate)
            .ok_or(CalcError::UnsupportedCurrency(code))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(&normalize_code(code))
    }

    /// Supported codes in definition order
    pub fn codes(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.code.clone()).collect()
    }

    /// All entries in definition order
    pub fn entries(&self) -> &[CurrencyRate] {
        &self.entries
    }

    /// Convert `amount` from one currency to another via the reference currency
    pub fn convert(&self, amount: f64, from_currency: &str, to_currency: &str) -> Result<f64> {
        let from_rate = self.rate(from_currency)?;
        let to_rate = self.rate(to_currency)?;

        let reference_amount = amount / from_rate;
        Ok(reference_amount * to_rate)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Convert `amount` using the built-in rate table
pub fn convert_currency(amount: f64, from_currency: &str, to_currency: &str) -> Result<f64> {
    RateTable::default_table().convert(amount, from_currency, to_currency)
}

/// Supported currency codes of the built-in table, in definition order
pub fn get_currency_list() -> Vec<String> {
    RateTable::default_table().codes()
}

/// Snapshot of the built-in rates
pub fn get_exchange_rates() -> Vec<CurrencyRate> {
    RateTable::default_table().entries().to_vec()
}

/// Spread between buy and sell rates, as a percentage of the buy rate
pub fn calculate_currency_spread(buy_rate: f64, sell_rate: f64) -> Result<f64> {
    if buy_rate <= 0.0 || sell_rate <= 0.0 {
        return Err(CalcError::InvalidDomain("Rates must be positive".to_string()));
    }
    Ok((sell_rate - buy_rate) / buy_rate * 100.0)
}

/// Display symbol for a currency code, if known
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    let symbol = match normalize_code(code).as_str() {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        "CHF" => "CHF",
        "AUD" => "A$",
        "CAD" => "C$",
        "HKD" => "HK$",
        "SGD" => "S$",
        "KRW" => "₩",
        "INR" => "₹",
        "BRL" => "R$",
        "MXN" => "MX$",
        "SEK" | "NOK" | "DKK" => "kr",
        "PLN" => "zł",
        "CZK" => "Kč",
        "HUF" => "Ft",
        _ => return None,
    };
    Some(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_table() {
        let table = RateTable::default_table();
        assert_eq!(table.len(), 20);
        assert_eq!(table.reference(), "USD");
        assert_eq!(table.rate("USD").unwrap(), 1.0);
        assert_eq!(table.rate("eur").unwrap(), 0.85);
    }

    #[test]
    fn test_builtin_matches_validated_construction() {
        let validated = RateTable::new("USD", DEFAULT_EXCHANGE_RATES).unwrap();
        assert_eq!(validated.entries(), RateTable::builtin().entries());
    }

    #[test]
    fn test_currency_list_order() {
        let list = get_currency_list();
        assert_eq!(list.len(), 20);
        assert_eq!(&list[..4], &["USD", "EUR", "GBP", "JPY"]);
        assert_eq!(list.last().map(String::as_str), Some("HUF"));
    }

    #[test]
    fn test_convert_currency() {
        assert_eq!(convert_currency(100.0, "USD", "EUR").unwrap(), 85.0);
        assert_eq!(convert_currency(100.0, "usd", "eur").unwrap(), 85.0);
        assert_relative_eq!(convert_currency(85.0, "EUR", "USD").unwrap(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(
            convert_currency(1000.0, "EUR", "JPY").unwrap(),
            1000.0 / 0.85 * 110.0,
            epsilon = 1e-9
        );
        assert_eq!(convert_currency(42.0, "GBP", "GBP").unwrap(), 42.0);
    }

    #[test]
    fn test_convert_unsupported() {
        let err = convert_currency(100.0, "USD", "xyz").unwrap_err();
        match err {
            CalcError::UnsupportedCurrency(code) => assert_eq!(code, "XYZ"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(convert_currency(100.0, "ABC", "USD").is_err());
    }

    #[test]
    fn test_codes_are_not_trimmed() {
        assert!(matches!(
            convert_currency(1.0, " usd ", "EUR"),
            Err(CalcError::UnsupportedCurrency(code)) if code == " USD "
        ));
        assert!(!RateTable::default_table().contains("EUR\n"));
        assert!(RateTable::new(" USD", vec![(" USD", 1.0)]).is_err());
    }

    #[test]
    fn test_custom_table() {
        let table = RateTable::new("usd", vec![("usd", 1.0), ("eur", 0.5)]).unwrap();
        assert_eq!(table.codes(), vec!["USD", "EUR"]);
        assert_eq!(table.convert(10.0, "EUR", "USD").unwrap(), 20.0);
        assert!(!table.contains("GBP"));
    }

    #[test]
    fn test_table_validation() {
        assert!(matches!(
            RateTable::new("USD", vec![("USD", 1.0), ("EUR", 0.0)]),
            Err(CalcError::ConfigError(_))
        ));
        assert!(RateTable::new("USD", vec![("USD", 1.0), ("EUR", f64::NAN)]).is_err());
        assert!(RateTable::new("USD", vec![("USD", 1.0), ("usd", 1.0)]).is_err());
        assert!(RateTable::new("USD", vec![("EUR", 0.85)]).is_err());
        assert!(RateTable::new("USD", vec![("USD", 2.0)]).is_err());
        assert!(RateTable::new("USD", vec![("USD", 1.0), ("EURO5", 1.1)]).is_err());
        assert!(RateTable::new("USD", vec![("USD", 1.0), ("E1R", 1.1)]).is_err());
        assert!(RateTable::new("USD", vec![("USD", 1.0), ("USDT", 1.0)]).is_ok());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"code": "USD", "rate": 1.0}, {"code": "chf", "rate": 0.9}]"#;
        let table = RateTable::from_json_str("USD", json).unwrap();
        assert_eq!(table.rate("CHF").unwrap(), 0.9);

        assert!(matches!(
            RateTable::from_json_str("USD", "{"),
            Err(CalcError::SerdeError(_))
        ));
    }

    #[test]
    fn test_exchange_rates_snapshot() {
        let rates = get_exchange_rates();
        assert_eq!(rates.len(), DEFAULT_EXCHANGE_RATES.len());
        assert_eq!(rates[1], CurrencyRate { code: "EUR".to_string(), rate: 0.85 });
    }

    #[test]
    fn test_currency_spread() {
        assert_relative_eq!(calculate_currency_spread(1.20, 1.25).unwrap(), 4.1666666, epsilon = 1e-6);
        assert_eq!(calculate_currency_spread(2.0, 2.0).unwrap(), 0.0);
        assert!(calculate_currency_spread(1.25, 1.20).unwrap() < 0.0);
        assert!(matches!(
            calculate_currency_spread(0.0, 1.0),
            Err(CalcError::InvalidDomain(_))
        ));
        assert!(calculate_currency_spread(1.0, -1.0).is_err());
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(currency_symbol("USD"), Some("$"));
        assert_eq!(currency_symbol("eur"), Some("€"));
        assert_eq!(currency_symbol("GBP"), Some("£"));
        assert_eq!(currency_symbol("XYZ"), None);
    }
}
