//! The fifteen form fields, in display order.

/// Input kind of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Coerced to a number. `any_step` allows fractional values in the browser.
    Number { any_step: bool },
    /// `YYYY-MM-DD` from a date picker, kept as the submitted string.
    Date,
}

impl FieldKind {
    /// HTML `<input type>`.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number { .. } => "number",
            Self::Date => "date",
        }
    }

    pub fn step(self) -> Option<&'static str> {
        match self {
            Self::Number { any_step: true } => Some("any"),
            _ => None,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Number { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Storage key of the field.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required_message: &'static str,
}

const fn text(name: &'static str, label: &'static str, required_message: &'static str) -> FieldDefinition {
    FieldDefinition { name, label, kind: FieldKind::Text, required_message }
}

const fn number(
    name: &'static str,
    label: &'static str,
    required_message: &'static str,
    any_step: bool,
) -> FieldDefinition {
    FieldDefinition { name, label, kind: FieldKind::Number { any_step }, required_message }
}

pub static FIELD_DEFINITIONS: [FieldDefinition; 15] = [
    text("accountHolderName", "Account Holder Name", "Account holder name is required"),
    text("accountNumber", "Account Number", "Account number is required"),
    text("bankName", "Bank Name", "Bank name is required"),
    text("branchCode", "Branch Code", "Branch code is required"),
    text("ifscCode", "IFSC Code", "IFSC code is required"),
    number("loanAmount", "Loan Amount (Numeric)", "Loan amount is required", true),
    number("interestRate", "Interest Rate (%) (Numeric)", "Interest rate is required", true),
    number("loanTenure", "Loan Tenure (Months) (Numeric)", "Loan tenure is required", false),
    number("monthlyEMI", "Monthly EMI (Numeric)", "Monthly EMI is required", true),
    number("creditScore", "Credit Score (Numeric)", "Credit score is required", false),
    number("transactionLimit", "Transaction Limit (Numeric)", "Transaction limit is required", true),
    FieldDefinition {
        name: "lastTransactionDate",
        label: "Last Transaction Date",
        kind: FieldKind::Date,
        required_message: "Date is required",
    },
    text("nomineeName", "Nominee Name", "Nominee name is required"),
    text("accountType", "Account Type (e.g., Savings)", "Account type is required"),
    text("customerID", "Customer ID", "Customer ID is required"),
];

/// Look up a field by its storage key.
pub fn field_definition(name: &str) -> Option<&'static FieldDefinition> {
    FIELD_DEFINITIONS.iter().find(|def| def.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_numeric_fields() {
        let numeric: Vec<_> =
            FIELD_DEFINITIONS.iter().filter(|d| d.kind.is_numeric()).map(|d| d.name).collect();
        assert_eq!(
            numeric,
            ["loanAmount", "interestRate", "loanTenure", "monthlyEMI", "creditScore", "transactionLimit"]
        );
    }

    #[test]
    fn test_input_attributes() {
        let loan = field_definition("loanAmount").unwrap();
        assert_eq!(loan.kind.input_type(), "number");
        assert_eq!(loan.kind.step(), Some("any"));
        assert_eq!(field_definition("loanTenure").unwrap().kind.step(), None);
        assert_eq!(field_definition("lastTransactionDate").unwrap().kind.input_type(), "date");
        assert!(field_definition("unknown").is_none());
    }
}
