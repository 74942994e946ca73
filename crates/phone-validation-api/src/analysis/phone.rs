//! [`NumberAnalyzer`] backed by the `phonenumber` crate.

use super::{regions, AnalysisError, NumberAnalyzer, ParsedNumber, DEFAULT_LOCALE};
use phonenumber::{metadata::DATABASE, Mode, PhoneNumber};
use tracing::debug;

/// Analyzer using libphonenumber metadata for parsing and formatting, and the
/// bundled region table for location and timezones.
///
/// No carrier data ships with `phonenumber`, so `carrier_name` is always `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneNumberAnalyzer;

impl PhoneNumberAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn describe(number: &PhoneNumber) -> ParsedNumber {
        ParsedNumber {
            country_code: number.code().value(),
            national_number: number.national().to_string(),
            is_valid: phonenumber::is_valid(number),
            e164: number.format().mode(Mode::E164).to_string(),
            international: number.format().mode(Mode::International).to_string(),
            national: number.format().mode(Mode::National).to_string(),
            region: Self::region(number),
        }
    }

    /// Region of the number, falling back to the main region of its calling
    /// code. `country().id()` strips Italian leading zeros before matching, so
    /// valid +39 fixed-line numbers resolve to no region without the fallback.
    fn region(number: &PhoneNumber) -> Option<String> {
        if let Some(id) = number.country().id() {
            return Some(id.as_ref().to_string());
        }

        DATABASE
            .region(&number.code().value())
            .and_then(|regions| {
                regions
                    .into_iter()
                    .find(|r| *r != NON_GEOGRAPHIC_REGION)
                    .map(|r| r.to_string())
            })
    }
}

/// Region id libphonenumber uses for non-geographic calling codes.
const NON_GEOGRAPHIC_REGION: &str = "001";

impl NumberAnalyzer for PhoneNumberAnalyzer {
    fn parse(&self, input: &str) -> Result<ParsedNumber, AnalysisError> {
        // No default region: numbers without a country code are rejected
        let number = phonenumber::parse(None, input).map_err(|e| {
            debug!(error = %e, "Phone number parse failed");
            AnalysisError::Parse(e.to_string())
        })?;

        Ok(Self::describe(&number))
    }

    fn location_description(&self, number: &ParsedNumber, locale: &str) -> Option<String> {
        if locale != DEFAULT_LOCALE {
            return None;
        }
        number
            .region
            .as_deref()
            .and_then(regions::lookup)
            .map(|r| r.name.to_string())
    }

    fn carrier_name(&self, _number: &ParsedNumber, _locale: &str) -> Option<String> {
        None
    }

    /// Zones of the number's whole region; no per-prefix timezone data is
    /// available, so e.g. every US zone is returned for a New York number.
    fn time_zones(&self, number: &ParsedNumber) -> Option<Vec<String>> {
        let region = regions::lookup(number.region.as_deref()?)?;
        if region.time_zones.is_empty() {
            return None;
        }
        Some(region.time_zones.iter().map(|tz| tz.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_kenyan_mobile() {
        let parsed = PhoneNumberAnalyzer::new().parse("+254743968877").unwrap();

        assert!(parsed.is_valid);
        assert_eq!(parsed.country_code, 254);
        assert_eq!(parsed.national_number, "743968877");
        assert_eq!(parsed.e164, "+254743968877");
        assert!(parsed.international.starts_with("+254"));
        assert!(!parsed.national.is_empty());
        assert_eq!(parsed.region.as_deref(), Some("KE"));
    }

    #[test]
    fn test_italian_fixed_line_resolves_to_italy() {
        let analyzer = PhoneNumberAnalyzer::new();
        let parsed = analyzer.parse("+390612345678").unwrap();

        assert!(parsed.is_valid);
        assert_eq!(parsed.country_code, 39);
        assert_eq!(parsed.national_number, "0612345678");
        assert_eq!(parsed.region.as_deref(), Some("IT"));
        assert_eq!(
            analyzer.location_description(&parsed, "en").as_deref(),
            Some("Italy")
        );
        assert_eq!(
            analyzer.time_zones(&parsed),
            Some(vec!["Europe/Rome".to_string()])
        );
    }

    #[test]
    fn test_parseable_but_invalid_number() {
        let parsed = PhoneNumberAnalyzer::new().parse("+11234567890").unwrap();

        assert!(!parsed.is_valid);
        assert_eq!(parsed.country_code, 1);
    }

    #[test]
    fn test_multi_zone_region_reports_every_zone() {
        let analyzer = PhoneNumberAnalyzer::new();
        let parsed = analyzer.parse("+12125551234").unwrap();
        let zones = analyzer.time_zones(&parsed).unwrap();

        assert!(zones.contains(&"America/New_York".to_string()));
        assert!(zones.contains(&"America/Los_Angeles".to_string()));
    }

    #[test]
    fn test_parse_rejects_text() {
        let err = PhoneNumberAnalyzer::new().parse("abc").unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_number_without_country_code() {
        let err = PhoneNumberAnalyzer::new().parse("0743968877").unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[test]
    fn test_metadata_for_kenyan_number() {
        let analyzer = PhoneNumberAnalyzer::new();
        let parsed = analyzer.parse("+254743968877").unwrap();

        assert_eq!(
            analyzer.location_description(&parsed, "en").as_deref(),
            Some("Kenya")
        );
        assert_eq!(
            analyzer.time_zones(&parsed),
            Some(vec!["Africa/Nairobi".to_string()])
        );
        assert_eq!(analyzer.carrier_name(&parsed, "en"), None);
    }

    #[test]
    fn test_unsupported_locale_has_no_description() {
        let analyzer = PhoneNumberAnalyzer::new();
        let parsed = analyzer.parse("+254743968877").unwrap();
        assert_eq!(analyzer.location_description(&parsed, "fr"), None);
    }

    #[test]
    fn test_number_without_region_has_no_metadata() {
        let analyzer = PhoneNumberAnalyzer::new();
        let parsed = ParsedNumber {
            country_code: 800,
            national_number: "12345678".into(),
            is_valid: true,
            e164: "+80012345678".into(),
            international: "+800 1234 5678".into(),
            national: "1234 5678".into(),
            region: None,
        };

        assert_eq!(analyzer.location_description(&parsed, "en"), None);
        assert_eq!(analyzer.time_zones(&parsed), None);
    }
}
