//! Phone Validation API - validates phone numbers and reports formatting,
//! region and timezone metadata.
//!
//! The service sits behind the RapidAPI gateway:
//! - `/validate` requires the gateway's shared proxy secret
//! - `/health` is open so liveness probes work even when misconfigured

pub mod analysis;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;

pub use analysis::{AnalysisError, NumberAnalyzer, ParsedNumber, PhoneNumberAnalyzer};
pub use auth::{AuthError, ProxySecretGate};
pub use config::Config;
pub use error::ApiError;
