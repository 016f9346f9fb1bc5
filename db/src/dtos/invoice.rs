use chrono::NaiveDate;

use crate::models::invoice::InvoiceStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceCreateRequest {
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceUpdateRequest {
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
}
