//! The bank details record captured by the form and read by the dashboard.

mod fields;
mod form;

use serde::{Deserialize, Serialize};

pub use fields::{FIELD_DEFINITIONS, FieldDefinition, FieldKind, field_definition};
pub use form::{FieldErrors, RawForm, coerce_form};

/// One complete record as written under the local storage key.
///
/// Field names on the wire match the keys the browser stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_holder_name: String,
    pub account_number: String,
    pub bank_name: String,
    pub branch_code: String,
    pub ifsc_code: String,
    pub loan_amount: f64,
    pub interest_rate: f64,
    pub loan_tenure: f64,
    #[serde(rename = "monthlyEMI")]
    pub monthly_emi: f64,
    pub credit_score: f64,
    pub transaction_limit: f64,
    pub last_transaction_date: String,
    pub nominee_name: String,
    pub account_type: String,
    #[serde(rename = "customerID")]
    pub customer_id: String,
}

/// What the dashboard reads back. Every field may be missing; numbers that
/// are absent or `null` read as zero in the charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredBankDetails {
    pub account_holder_name: Option<String>,
    pub account_number: Option<String>,
    pub bank_name: Option<String>,
    pub branch_code: Option<String>,
    pub ifsc_code: Option<String>,
    pub loan_amount: Option<f64>,
    pub interest_rate: Option<f64>,
    pub loan_tenure: Option<f64>,
    #[serde(rename = "monthlyEMI")]
    pub monthly_emi: Option<f64>,
    pub credit_score: Option<f64>,
    pub transaction_limit: Option<f64>,
    pub last_transaction_date: Option<String>,
    pub nominee_name: Option<String>,
    pub account_type: Option<String>,
    #[serde(rename = "customerID")]
    pub customer_id: Option<String>,
}

impl StoredBankDetails {
    /// Parse a raw local storage value. `None` when it is not a JSON object
    /// of the expected shape.
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::debug!(error = %e, "stored bank details are not parsable");
                None
            },
        }
    }

    /// The full record, when all fifteen fields are present.
    pub fn into_complete(self) -> Option<BankDetails> {
        Some(BankDetails {
            account_holder_name: self.account_holder_name?,
            account_number: self.account_number?,
            bank_name: self.bank_name?,
            branch_code: self.branch_code?,
            ifsc_code: self.ifsc_code?,
            loan_amount: self.loan_amount?,
            interest_rate: self.interest_rate?,
            loan_tenure: self.loan_tenure?,
            monthly_emi: self.monthly_emi?,
            credit_score: self.credit_score?,
            transaction_limit: self.transaction_limit?,
            last_transaction_date: self.last_transaction_date?,
            nominee_name: self.nominee_name?,
            account_type: self.account_type?,
            customer_id: self.customer_id?,
        })
    }
}

impl From<BankDetails> for StoredBankDetails {
    fn from(record: BankDetails) -> Self {
        Self {
            account_holder_name: Some(record.account_holder_name),
            account_number: Some(record.account_number),
            bank_name: Some(record.bank_name),
            branch_code: Some(record.branch_code),
            ifsc_code: Some(record.ifsc_code),
            loan_amount: Some(record.loan_amount),
            interest_rate: Some(record.interest_rate),
            loan_tenure: Some(record.loan_tenure),
            monthly_emi: Some(record.monthly_emi),
            credit_score: Some(record.credit_score),
            transaction_limit: Some(record.transaction_limit),
            last_transaction_date: Some(record.last_transaction_date),
            nominee_name: Some(record.nominee_name),
            account_type: Some(record.account_type),
            customer_id: Some(record.customer_id),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_record() -> BankDetails {
    BankDetails {
        account_holder_name: "Asha Rao".to_owned(),
        account_number: "001234567890".to_owned(),
        bank_name: "Demo Bank".to_owned(),
        branch_code: "BR-042".to_owned(),
        ifsc_code: "DEMO0000042".to_owned(),
        loan_amount: 250_000.0,
        interest_rate: 8.5,
        loan_tenure: 60.0,
        monthly_emi: 5129.5,
        credit_score: 742.0,
        transaction_limit: 50_000.0,
        last_transaction_date: "2024-02-28".to_owned(),
        nominee_name: "Ravi Rao".to_owned(),
        account_type: "Savings".to_owned(),
        customer_id: "CUST-9001".to_owned(),
    }
}
