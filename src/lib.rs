//! # rusty-calculator
//!
//! A stateless formula library: arithmetic, trigonometry, currency conversion
//! against a static rate table, interest/loan formulas and number theory.
//!
//! Every function is pure. The only shared data is the immutable
//! [`currency::RateTable`], built once and passed by reference.
//!
//! ## Example
//!
//! ```rust
//! use rusty_calculator::prelude::*;
//!
//! assert_eq!(divide(10.0, 4.0).unwrap(), 2.5);
//! assert!(matches!(sqrt(-1.0), Err(CalcError::InvalidDomain(_))));
//! assert_eq!(convert_currency(100.0, "USD", "EUR").unwrap(), 85.0);
//! assert_eq!(fibonacci(10).unwrap(), 55);
//! ```

pub mod api;
pub mod arithmetic;
pub mod config;
pub mod currency;
pub mod error;
pub mod finance;
pub mod number_theory;
#[cfg(feature = "server")]
pub mod server;
pub mod trigonometry;

pub mod prelude {
    //! Commonly used functions and types
    pub use crate::api::{BasicOp, TrigFunc};
    pub use crate::arithmetic::*;
    pub use crate::currency::{
        calculate_currency_spread, convert_currency, get_currency_list, get_exchange_rates,
        RateTable,
    };
    pub use crate::error::{CalcError, Result};
    pub use crate::finance::*;
    pub use crate::number_theory::*;
    pub use crate::trigonometry::*;
}
