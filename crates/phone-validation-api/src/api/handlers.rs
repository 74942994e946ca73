//! HTTP request handlers.

use super::types::{
    HealthResponse, NumberDetails, ValidateParams, ValidationOutcome, ValidationResponse,
};
use super::AppState;
use crate::analysis::{AnalysisError, NumberAnalyzer, ParsedNumber, DEFAULT_LOCALE};
use crate::error::ApiError;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Reason reported for numbers that parse but are not valid.
pub const INVALID_NUMBER_REASON: &str =
    "The provided phone number is not a valid or recognized phone number format.";

/// Reported when no carrier is known.
pub const CARRIER_NOT_AVAILABLE: &str = "N/A";

/// Health check endpoint. Deliberately ignores the proxy secret and its
/// configuration so liveness probes pass even while misconfigured.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Validate a phone number passed as `?number=`.
pub async fn validate(
    State(state): State<AppState>,
    headers: HeaderMap,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ValidationResponse>, ApiError> {
    state.gate.check(&headers)?;

    // A query string that fails to decode carries no usable number either
    let params = pairs
        .map(|Query(pairs)| ValidateParams::from_pairs(pairs))
        .unwrap_or_default();
    let number = params
        .number
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing required parameter: 'number'".to_string()))?;

    let input = restore_leading_plus(number);

    let analyzer = Arc::clone(&state.analyzer);
    let task_input = input.clone();
    let response =
        tokio::task::spawn_blocking(move || analyze(analyzer.as_ref(), task_input)).await??;

    info!(
        number = %response.input_number,
        valid = response.is_valid,
        "Validated phone number"
    );

    Ok(Json(response))
}

/// Undo a `+` that URL decoding turned into a space. Only the first
/// character is inspected.
pub fn restore_leading_plus(number: String) -> String {
    match number.strip_prefix(' ') {
        Some(rest) => format!("+{}", rest),
        None => number,
    }
}

/// Parse `input` and shape the response body.
fn analyze(analyzer: &dyn NumberAnalyzer, input: String) -> Result<ValidationResponse, AnalysisError> {
    let parsed = analyzer.parse(&input)?;
    debug!(country_code = parsed.country_code, valid = parsed.is_valid, "Number parsed");

    let outcome = if parsed.is_valid {
        ValidationOutcome::Valid(details(analyzer, parsed))
    } else {
        ValidationOutcome::Invalid {
            reason: INVALID_NUMBER_REASON.to_string(),
        }
    };

    Ok(ValidationResponse {
        is_valid: matches!(outcome, ValidationOutcome::Valid(_)),
        input_number: input,
        outcome,
    })
}

fn details(analyzer: &dyn NumberAnalyzer, parsed: ParsedNumber) -> NumberDetails {
    let location = analyzer
        .location_description(&parsed, DEFAULT_LOCALE)
        .unwrap_or_default();
    let carrier = analyzer
        .carrier_name(&parsed, DEFAULT_LOCALE)
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| CARRIER_NOT_AVAILABLE.to_string());
    let timezones = analyzer.time_zones(&parsed).unwrap_or_default();

    NumberDetails {
        country_code: parsed.country_code,
        national_number: parsed.national_number,
        e164_format: parsed.e164,
        international_format: parsed.international,
        national_format: parsed.national,
        location,
        carrier,
        timezones,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leading_plus() {
        assert_eq!(restore_leading_plus(" 254743968877".into()), "+254743968877");
        assert_eq!(restore_leading_plus("+254743968877".into()), "+254743968877");
        assert_eq!(restore_leading_plus("254743968877".into()), "254743968877");
    }

    #[test]
    fn test_restore_leading_plus_only_touches_first_character() {
        assert_eq!(restore_leading_plus("  254".into()), "+ 254");
        assert_eq!(restore_leading_plus("254 743".into()), "254 743");
        assert_eq!(restore_leading_plus(" ".into()), "+");
    }

    #[test]
    fn test_invalid_number_response_shape() {
        let response = ValidationResponse {
            input_number: "+11234567890".into(),
            is_valid: false,
            outcome: ValidationOutcome::Invalid {
                reason: INVALID_NUMBER_REASON.into(),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input_number": "+11234567890",
                "is_valid": false,
                "reason": INVALID_NUMBER_REASON,
            })
        );
    }
}
