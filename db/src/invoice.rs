use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::dtos::invoice::{InvoiceCreateRequest, InvoiceUpdateRequest};

pub async fn insert_invoice<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: InvoiceCreateRequest,
) -> Res<()> {
    sqlx::query(
        r#"
        INSERT INTO invoices (customer_id, amount, status, date)
        VALUES ($1::uuid, $2, $3, $4)
        "#,
    )
    .bind(data.customer_id)
    .bind(data.amount)
    .bind(data.status.as_str())
    .bind(data.date)
    .execute(executor)
    .await?;
    Ok(())
}

/// Returns the number of rows touched; zero when `invoice_id` does not exist.
pub async fn update_invoice<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    invoice_id: &str,
    data: InvoiceUpdateRequest,
) -> Res<u64> {
    sqlx::query(
        r#"
        UPDATE invoices
        SET customer_id = $1::uuid, amount = $2, status = $3
        WHERE id = $4::uuid
        "#,
    )
    .bind(data.customer_id)
    .bind(data.amount)
    .bind(data.status.as_str())
    .bind(invoice_id)
    .execute(executor)
    .await
    .map(|res| res.rows_affected())
    .map_err(AppError::from)
}

pub async fn delete_invoice<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    invoice_id: &str,
) -> Res<u64> {
    sqlx::query("DELETE FROM invoices WHERE id = $1::uuid")
        .bind(invoice_id)
        .execute(executor)
        .await
        .map(|res| res.rows_affected())
        .map_err(AppError::from)
}
