//! Storage seams for the request handlers.
//!
//! Handlers receive an `Arc<dyn InvoiceStore>` / `Arc<dyn UserStore>` through
//! app data instead of reaching for a global pool, so tests can substitute
//! in-memory stores.

use std::sync::Arc;

use async_trait::async_trait;
use common::error::Res;
use sqlx::PgPool;

use crate::{
    dtos::invoice::{InvoiceCreateRequest, InvoiceUpdateRequest},
    models::user::User,
};

#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn insert_invoice(&self, data: InvoiceCreateRequest) -> Res<()>;

    /// Rows updated; zero is not an error.
    async fn update_invoice(&self, invoice_id: &str, data: InvoiceUpdateRequest) -> Res<u64>;

    /// Rows deleted; zero is not an error.
    async fn delete_invoice(&self, invoice_id: &str) -> Res<u64>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, email: &str) -> Res<Option<User>>;
}

/// Postgres-backed store shared by every worker.
#[derive(Clone)]
pub struct PgStore {
    pool: Arc<PgPool>,
}

impl PgStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceStore for PgStore {
    async fn insert_invoice(&self, data: InvoiceCreateRequest) -> Res<()> {
        crate::invoice::insert_invoice(&*self.pool, data).await
    }

    async fn update_invoice(&self, invoice_id: &str, data: InvoiceUpdateRequest) -> Res<u64> {
        crate::invoice::update_invoice(&*self.pool, invoice_id, data).await
    }

    async fn delete_invoice(&self, invoice_id: &str) -> Res<u64> {
        crate::invoice::delete_invoice(&*self.pool, invoice_id).await
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn get_user(&self, email: &str) -> Res<Option<User>> {
        crate::user::fetch_user(&self.pool, email).await
    }
}
