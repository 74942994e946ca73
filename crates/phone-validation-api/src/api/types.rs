//! API request and response types.

use serde::Serialize;

/// Query parameters for `/validate`.
#[derive(Debug, Default)]
pub struct ValidateParams {
    /// Phone number to validate, with country code (e.g. `+254743968877`)
    pub number: Option<String>,
}

impl ValidateParams {
    /// Build from decoded query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let number = pairs
            .into_iter()
            .find(|(key, _)| key == "number")
            .map(|(_, value)| value);

        Self { number }
    }
}

/// Result of validating a phone number.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    /// Input after leading-space repair
    pub input_number: String,
    pub is_valid: bool,
    #[serde(flatten)]
    pub outcome: ValidationOutcome,
}

/// Fields present only for valid or only for invalid numbers.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ValidationOutcome {
    Valid(NumberDetails),
    Invalid { reason: String },
}

/// Details reported for a valid number.
#[derive(Debug, Serialize)]
pub struct NumberDetails {
    pub country_code: u16,
    pub national_number: String,
    pub e164_format: String,
    pub international_format: String,
    pub national_format: String,
    pub location: String,
    /// `"N/A"` when no carrier is known
    pub carrier: String,
    /// Empty when no timezone is known
    pub timezones: Vec<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_number_wins() {
        let params = ValidateParams::from_pairs(pairs(&[
            ("number", "+254743968877"),
            ("number", "x"),
        ]));
        assert_eq!(params.number.as_deref(), Some("+254743968877"));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let params = ValidateParams::from_pairs(pairs(&[("format", "json")]));
        assert!(params.number.is_none());

        let params =
            ValidateParams::from_pairs(pairs(&[("format", "json"), ("number", "+254743968877")]));
        assert_eq!(params.number.as_deref(), Some("+254743968877"));
    }

    #[test]
    fn test_empty_first_value_is_kept() {
        let params = ValidateParams::from_pairs(pairs(&[("number", ""), ("number", "+254743968877")]));
        assert_eq!(params.number.as_deref(), Some(""));
    }
}
