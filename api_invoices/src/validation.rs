//! Invoice form schema.
//!
//! Fields are checked independently and every failure is reported, so the
//! form can highlight all offending inputs after a single submission.

use common::form::{FieldErrors, RawForm, field};
use db::models::invoice::InvoiceStatus;

pub const CUSTOMER_ID: &str = "customerId";
pub const AMOUNT: &str = "amount";
pub const STATUS: &str = "status";

pub const CUSTOMER_ID_MESSAGE: &str = "Please select a customer.";
pub const AMOUNT_MESSAGE: &str = "Please enter an amount greater than $0.";
pub const AMOUNT_TYPE_MESSAGE: &str = "Expected number, received nan";
pub const AMOUNT_RANGE_MESSAGE: &str = "Please enter a smaller amount.";
pub const STATUS_MESSAGE: &str = "Please select an invoice status.";

/// Validated invoice fields, with the submitted dollar amount already
/// converted to cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceInput {
    pub customer_id: String,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}

pub fn validate_invoice_form(form: &RawForm) -> Result<InvoiceInput, FieldErrors> {
    let customer_id = parse_customer_id(field(form, CUSTOMER_ID));
    let amount = parse_amount(field(form, AMOUNT));
    let status = parse_status(field(form, STATUS));

    match (customer_id, amount, status) {
        (Ok(customer_id), Ok(amount_cents), Ok(status)) => Ok(InvoiceInput {
            customer_id,
            amount_cents,
            status,
        }),
        (customer_id, amount, status) => {
            let mut errors = FieldErrors::new();
            if let Err(message) = customer_id {
                errors.add(CUSTOMER_ID, message);
            }
            if let Err(message) = amount {
                errors.add(AMOUNT, message);
            }
            if let Err(message) = status {
                errors.add(STATUS, message);
            }
            Err(errors)
        }
    }
}

/// Largest cent value that survives the `f64` round trip into a `BIGINT`.
const MAX_CENTS: f64 = i64::MAX as f64;

/// Dollars to cents, rounded to the nearest cent.
///
/// `None` when the result is not representable as an `i64`.
pub fn to_cents(amount: f64) -> Option<i64> {
    let cents = (amount * 100.0).round();
    (cents.is_finite() && cents.abs() < MAX_CENTS).then_some(cents as i64)
}

fn parse_customer_id(raw: Option<&str>) -> Result<String, &'static str> {
    match raw.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(CUSTOMER_ID_MESSAGE),
    }
}

fn parse_amount(raw: Option<&str>) -> Result<i64, &'static str> {
    let raw = raw.ok_or(AMOUNT_TYPE_MESSAGE)?.trim();
    // blank input coerces to zero and then fails the positivity rule
    let amount = if raw.is_empty() {
        0.0
    } else {
        raw.parse::<f64>().map_err(|_| AMOUNT_TYPE_MESSAGE)?
    };
    if !amount.is_finite() {
        return Err(AMOUNT_TYPE_MESSAGE);
    }
    if amount <= 0.0 {
        return Err(AMOUNT_MESSAGE);
    }
    match to_cents(amount) {
        None => Err(AMOUNT_RANGE_MESSAGE),
        Some(cents) if cents <= 0 => Err(AMOUNT_MESSAGE),
        Some(cents) => Ok(cents),
    }
}

fn parse_status(raw: Option<&str>) -> Result<InvoiceStatus, &'static str> {
    raw.and_then(|s| s.parse().ok()).ok_or(STATUS_MESSAGE)
}
