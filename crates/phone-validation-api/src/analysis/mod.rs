//! Phone number analysis.
//!
//! Parsing, validity, formatting and the metadata lookups (location, carrier,
//! timezones) sit behind [`NumberAnalyzer`] so the HTTP layer never depends on
//! a particular phone number library.

mod phone;
pub mod regions;

pub use phone::PhoneNumberAnalyzer;

use thiserror::Error;

/// Locale used for human-readable descriptions.
pub const DEFAULT_LOCALE: &str = "en";

/// Errors raised while analysing a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The input could not be read as a phone number at all.
    #[error("{0}")]
    Parse(String),

    /// Anything else that went wrong inside the analyzer.
    #[error("{0}")]
    Internal(String),
}

/// A successfully parsed phone number.
///
/// `is_valid` is false when the input parsed but is not a number that can be
/// assigned in its region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub country_code: u16,
    /// National significant number, leading zeros kept.
    pub national_number: String,
    pub is_valid: bool,
    pub e164: String,
    pub international: String,
    pub national: String,
    /// ISO 3166-1 alpha-2 region, if the number maps to one.
    pub region: Option<String>,
}

/// Number parsing and metadata lookups.
pub trait NumberAnalyzer: Send + Sync {
    /// Parse and validate `input`. The input must carry its country code.
    fn parse(&self, input: &str) -> Result<ParsedNumber, AnalysisError>;

    /// Human-readable location for the number in `locale`.
    fn location_description(&self, number: &ParsedNumber, locale: &str) -> Option<String>;

    /// Carrier name for the number in `locale`.
    fn carrier_name(&self, number: &ParsedNumber, locale: &str) -> Option<String>;

    /// IANA timezone identifiers the number may be in.
    fn time_zones(&self, number: &ParsedNumber) -> Option<Vec<String>>;
}
