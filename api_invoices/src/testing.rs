//! In-memory doubles for the invoice store and the view layer.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::NaiveDate;
use common::error::{AppError, Res};
use db::{
    dtos::invoice::{InvoiceCreateRequest, InvoiceUpdateRequest},
    models::invoice::InvoiceStatus,
    store::InvoiceStore,
};

use crate::views::{Redirect, ViewInvalidator, ViewRevisions};

/// Row as the in-memory store keeps it. `amount` is in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredInvoice {
    pub id: String,
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

#[derive(Default)]
pub struct MemoryInvoiceStore {
    invoices: Mutex<Vec<StoredInvoice>>,
    writes: AtomicUsize,
    fail: bool,
}

impl MemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(invoices: Vec<StoredInvoice>) -> Self {
        Self {
            invoices: Mutex::new(invoices),
            ..Self::default()
        }
    }

    /// Every statement fails like a lost connection.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn invoices(&self) -> Vec<StoredInvoice> {
        self.invoices.lock().unwrap().clone()
    }

    /// Statements attempted, failed ones included.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Res<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Internal("connection reset by peer".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for MemoryInvoiceStore {
    async fn insert_invoice(&self, data: InvoiceCreateRequest) -> Res<()> {
        self.begin()?;
        let mut invoices = self.invoices.lock().unwrap();
        let id = format!("inv-{}", invoices.len() + 1);
        invoices.push(StoredInvoice {
            id,
            customer_id: data.customer_id,
            amount: data.amount,
            status: data.status,
            date: data.date,
        });
        Ok(())
    }

    async fn update_invoice(&self, invoice_id: &str, data: InvoiceUpdateRequest) -> Res<u64> {
        self.begin()?;
        let mut invoices = self.invoices.lock().unwrap();
        let mut updated = 0;
        for invoice in invoices.iter_mut().filter(|i| i.id == invoice_id) {
            invoice.customer_id = data.customer_id.clone();
            invoice.amount = data.amount;
            invoice.status = data.status;
            updated += 1;
        }
        Ok(updated)
    }

    async fn delete_invoice(&self, invoice_id: &str) -> Res<u64> {
        self.begin()?;
        let mut invoices = self.invoices.lock().unwrap();
        let before = invoices.len();
        invoices.retain(|i| i.id != invoice_id);
        Ok((before - invoices.len()) as u64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Invalidate(String),
    Redirect(String),
}

/// Records calls in order while keeping real revision counters.
#[derive(Default)]
pub struct RecordingViews {
    revisions: ViewRevisions,
    calls: Mutex<Vec<ViewCall>>,
}

impl RecordingViews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ViewInvalidator for RecordingViews {
    fn invalidate(&self, path: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(ViewCall::Invalidate(path.to_string()));
        self.revisions.invalidate(path);
    }

    fn redirect(&self, path: &str) -> Redirect {
        self.calls
            .lock()
            .unwrap()
            .push(ViewCall::Redirect(path.to_string()));
        self.revisions.redirect(path)
    }
}
