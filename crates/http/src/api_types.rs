//! Request and response bodies of the JSON API.

use bankdash_core::BankDetails;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self { message: message.to_owned() }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub record: BankDetails,
}

/// The raw local storage value as the dashboard page read it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChartsRequest {
    #[serde(default)]
    pub stored: Option<String>,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
