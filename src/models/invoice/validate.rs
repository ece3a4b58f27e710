use std::str::FromStr;

use crate::form::FormData;
use super::types::{FieldErrors, InvoiceFields, InvoiceStatus};

pub const CUSTOMER_REQUIRED: &str = "Select a customer";
pub const AMOUNT_NOT_POSITIVE: &str = "Enter an amount greater than 0";
pub const AMOUNT_TOO_LARGE: &str = "Enter a smaller amount";
pub const STATUS_REQUIRED: &str = "Select an invoice status";

/// Upper bound that keeps the cents value exact in an `f64` and inside `BIGINT`.
pub const MAX_AMOUNT: f64 = 90_000_000_000_000.0;

/// Customer reference: required, non-blank.
pub fn validate_customer_id(value: Option<&str>) -> Result<String, String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CUSTOMER_REQUIRED.to_string()),
    }
}

/// Amount: coerced from text, must be a finite number worth at least one
/// cent once rounded. A blank value coerces to zero and is rejected as such.
pub fn validate_amount(value: Option<&str>) -> Result<f64, String> {
    let raw = value.unwrap_or("").trim();
    let amount = if raw.is_empty() {
        0.0
    } else {
        raw.parse::<f64>().unwrap_or(f64::NAN)
    };

    if !amount.is_finite() || (amount * 100.0).round() < 1.0 {
        return Err(AMOUNT_NOT_POSITIVE.to_string());
    }
    if amount > MAX_AMOUNT {
        return Err(AMOUNT_TOO_LARGE.to_string());
    }
    Ok(amount)
}

/// Status: exactly one of the enum literals.
pub fn validate_status(value: Option<&str>) -> Result<InvoiceStatus, String> {
    value
        .and_then(|v| InvoiceStatus::from_str(v).ok())
        .ok_or_else(|| STATUS_REQUIRED.to_string())
}

/// Validate the invoice form used by both create and update. Every field is
/// checked so the caller gets the full error set in one pass.
pub fn parse_invoice_form(form: &FormData) -> Result<InvoiceFields, FieldErrors> {
    let customer_id = validate_customer_id(form.get("customerId"));
    let amount = validate_amount(form.get("amount"));
    let status = validate_status(form.get("status"));

    match (customer_id, amount, status) {
        (Ok(customer_id), Ok(amount), Ok(status)) => Ok(InvoiceFields { customer_id, amount, status }),
        (customer_id, amount, status) => Err(FieldErrors {
            customer_id: customer_id.err().map(|e| vec![e]),
            amount: amount.err().map(|e| vec![e]),
            status: status.err().map(|e| vec![e]),
        }),
    }
}
