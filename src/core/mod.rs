//! Core types, configuration and abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod log;
pub mod symbols;

// Re-export main types for cleaner imports
pub use currency::{ConversionResult, Currency, RateProvider, RateTable};
pub use error::{ConvertError, ErrorKind};
