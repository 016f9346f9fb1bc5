use actix_web::HttpResponse;
use chrono::{NaiveDate, Utc};
use common::{
    error::Res,
    form::{FormState, RawForm},
};
use db::{
    dtos::invoice::{InvoiceCreateRequest, InvoiceUpdateRequest},
    store::InvoiceStore,
};

use crate::{
    validation::{self, InvoiceInput},
    views::{Redirect, ViewInvalidator},
};

pub const INVOICES_PATH: &str = "/dashboard/invoices";

pub const CREATE_INVALID_MESSAGE: &str = "Missing Fields. Failed to Create Invoice.";
pub const CREATE_DATABASE_MESSAGE: &str = "Database Error: Failed to Create Invoice.";

/// What a form action hands back to the HTTP layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Stay on the form and show this state.
    State(FormState),
    Redirect(Redirect),
}

impl ActionOutcome {
    pub fn into_response(self) -> HttpResponse {
        match self {
            ActionOutcome::State(state) => HttpResponse::Ok().json(state),
            ActionOutcome::Redirect(redirect) => redirect.into_response(),
        }
    }
}

/// Validates the form and inserts a new invoice dated today.
///
/// A failed insert is reported in the returned state, not as an error.
/// `_prev_state` is the state the form last rendered with; it does not
/// influence the result.
pub async fn create_invoice(
    store: &dyn InvoiceStore,
    views: &dyn ViewInvalidator,
    _prev_state: &FormState,
    form: &RawForm,
) -> Res<ActionOutcome> {
    let InvoiceInput {
        customer_id,
        amount_cents,
        status,
    } = match validation::validate_invoice_form(form) {
        Ok(input) => input,
        Err(errors) => {
            return Ok(ActionOutcome::State(FormState::invalid(
                errors,
                CREATE_INVALID_MESSAGE,
            )));
        }
    };

    let request = InvoiceCreateRequest {
        customer_id,
        amount: amount_cents,
        status,
        date: today(),
    };

    if let Err(e) = store.insert_invoice(request).await {
        log::error!("Error creating invoice: {}", e);
        return Ok(ActionOutcome::State(FormState::message(
            CREATE_DATABASE_MESSAGE,
        )));
    }

    views.invalidate(INVOICES_PATH);
    Ok(ActionOutcome::Redirect(views.redirect(INVOICES_PATH)))
}

/// Validates the form and overwrites customer, amount and status of
/// `invoice_id`. Store failures propagate to the caller.
pub async fn update_invoice(
    store: &dyn InvoiceStore,
    views: &dyn ViewInvalidator,
    _prev_state: &FormState,
    invoice_id: &str,
    form: &RawForm,
) -> Res<ActionOutcome> {
    let InvoiceInput {
        customer_id,
        amount_cents,
        status,
    } = match validation::validate_invoice_form(form) {
        Ok(input) => input,
        Err(errors) => {
            return Ok(ActionOutcome::State(FormState::invalid(
                errors,
                CREATE_INVALID_MESSAGE,
            )));
        }
    };

    let request = InvoiceUpdateRequest {
        customer_id,
        amount: amount_cents,
        status,
    };

    let updated = store
        .update_invoice(invoice_id, request)
        .await
        .inspect_err(|e| log::error!("Error updating invoice with ID {}: {}", invoice_id, e))?;
    if updated == 0 {
        log::warn!("Update matched no invoice with ID {}", invoice_id);
    }

    views.invalidate(INVOICES_PATH);
    Ok(ActionOutcome::Redirect(views.redirect(INVOICES_PATH)))
}

/// Deletes `invoice_id` and always redirects to the listing.
///
/// The view is only invalidated when the delete went through; a store failure
/// is logged and the redirect still happens.
pub async fn delete_invoice(
    store: &dyn InvoiceStore,
    views: &dyn ViewInvalidator,
    invoice_id: &str,
) -> Redirect {
    match store.delete_invoice(invoice_id).await {
        Ok(deleted) => {
            if deleted == 0 {
                log::warn!("Delete matched no invoice with ID {}", invoice_id);
            }
            views.invalidate(INVOICES_PATH);
        }
        Err(e) => log::error!("Error deleting invoice with ID {}: {}", invoice_id, e),
    }
    views.redirect(INVOICES_PATH)
}

/// Today's date in UTC.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        testing::{MemoryInvoiceStore, RecordingViews, StoredInvoice, ViewCall},
        validation::{AMOUNT, AMOUNT_RANGE_MESSAGE, CUSTOMER_ID, STATUS},
    };
    use db::models::invoice::InvoiceStatus;

    const CUSTOMER: &str = "3958dc9e-712f-4377-85e9-fec4b6a6442a";

    fn form(pairs: &[(&str, &str)]) -> RawForm {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid_form() -> RawForm {
        form(&[
            ("customerId", CUSTOMER),
            ("amount", "123.45"),
            ("status", "pending"),
        ])
    }

    fn listing_redirect(revision: u64) -> ActionOutcome {
        ActionOutcome::Redirect(Redirect {
            location: INVOICES_PATH.to_string(),
            revision,
        })
    }

    #[tokio::test]
    async fn create_stores_cents_and_todays_date() {
        let store = MemoryInvoiceStore::new();
        let views = RecordingViews::new();

        let outcome = create_invoice(&store, &views, &FormState::default(), &valid_form())
            .await
            .unwrap();

        assert_eq!(outcome, listing_redirect(1));
        let invoices = store.invoices();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].customer_id, CUSTOMER);
        assert_eq!(invoices[0].amount, 12345);
        assert_eq!(invoices[0].status, InvoiceStatus::Pending);
        assert_eq!(invoices[0].date, Utc::now().date_naive());
        assert_eq!(
            views.calls(),
            vec![
                ViewCall::Invalidate(INVOICES_PATH.to_string()),
                ViewCall::Redirect(INVOICES_PATH.to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn create_with_invalid_fields_writes_nothing() {
        let store = MemoryInvoiceStore::new();
        let views = RecordingViews::new();

        let outcome = create_invoice(
            &store,
            &views,
            &FormState::default(),
            &form(&[("customerId", CUSTOMER), ("amount", "0")]),
        )
        .await
        .unwrap();

        let ActionOutcome::State(state) = outcome else {
            panic!("expected form state");
        };
        assert_eq!(state.message.as_deref(), Some(CREATE_INVALID_MESSAGE));
        let errors = state.errors.unwrap();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![AMOUNT, STATUS]);
        assert!(errors.get(CUSTOMER_ID).is_none());
        assert_eq!(store.writes(), 0);
        assert!(views.calls().is_empty());
    }

    #[tokio::test]
    async fn create_database_failure_becomes_state() {
        let store = MemoryInvoiceStore::failing();
        let views = RecordingViews::new();

        let outcome = create_invoice(&store, &views, &FormState::default(), &valid_form())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::State(FormState::message(CREATE_DATABASE_MESSAGE))
        );
        assert!(views.calls().is_empty());
    }

    #[tokio::test]
    async fn update_rewrites_fields_but_keeps_id_and_date() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let store = MemoryInvoiceStore::with(vec![StoredInvoice {
            id: "inv-1".to_string(),
            customer_id: "old".to_string(),
            amount: 100,
            status: InvoiceStatus::Pending,
            date,
        }]);
        let views = RecordingViews::new();
        let form = form(&[
            ("customerId", CUSTOMER),
            ("amount", "20"),
            ("status", "paid"),
        ]);

        let first = update_invoice(&store, &views, &FormState::default(), "inv-1", &form)
            .await
            .unwrap();
        let after_first = store.invoices();
        let second = update_invoice(&store, &views, &FormState::default(), "inv-1", &form)
            .await
            .unwrap();

        assert_eq!(first, listing_redirect(1));
        assert_eq!(second, listing_redirect(2));
        assert_eq!(store.invoices(), after_first);
        assert_eq!(
            after_first,
            vec![StoredInvoice {
                id: "inv-1".to_string(),
                customer_id: CUSTOMER.to_string(),
                amount: 2000,
                status: InvoiceStatus::Paid,
                date,
            }]
        );
    }

    #[tokio::test]
    async fn update_with_invalid_fields_returns_state() {
        let store = MemoryInvoiceStore::new();
        let views = RecordingViews::new();

        let outcome = update_invoice(
            &store,
            &views,
            &FormState::default(),
            "inv-1",
            &form(&[("amount", "ten")]),
        )
        .await
        .unwrap();

        let ActionOutcome::State(state) = outcome else {
            panic!("expected form state");
        };
        // update reports the same message as create
        assert_eq!(state.message.as_deref(), Some(CREATE_INVALID_MESSAGE));
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn create_rejects_amount_too_large_for_storage() {
        let store = MemoryInvoiceStore::new();
        let views = RecordingViews::new();

        let outcome = create_invoice(
            &store,
            &views,
            &FormState::default(),
            &form(&[("customerId", "c1"), ("amount", "1e20"), ("status", "paid")]),
        )
        .await
        .unwrap();

        let ActionOutcome::State(state) = outcome else {
            panic!("expected form state");
        };
        assert_eq!(
            state.errors.unwrap().get(AMOUNT),
            Some(&[AMOUNT_RANGE_MESSAGE.to_string()][..])
        );
        assert_eq!(store.writes(), 0);
        assert!(views.calls().is_empty());
    }

    #[tokio::test]
    async fn update_database_failure_propagates() {
        let store = MemoryInvoiceStore::failing();
        let views = RecordingViews::new();

        let result =
            update_invoice(&store, &views, &FormState::default(), "inv-1", &valid_form()).await;

        assert!(result.is_err());
        assert!(views.calls().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_and_redirects() {
        let store = MemoryInvoiceStore::with(vec![StoredInvoice {
            id: "inv-1".to_string(),
            customer_id: CUSTOMER.to_string(),
            amount: 100,
            status: InvoiceStatus::Paid,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        }]);
        let views = RecordingViews::new();

        let redirect = delete_invoice(&store, &views, "inv-1").await;

        assert_eq!(redirect.location, INVOICES_PATH);
        assert!(store.invoices().is_empty());
        assert_eq!(
            views.calls(),
            vec![
                ViewCall::Invalidate(INVOICES_PATH.to_string()),
                ViewCall::Redirect(INVOICES_PATH.to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn delete_of_missing_id_still_redirects() {
        let store = MemoryInvoiceStore::new();
        let views = RecordingViews::new();

        let redirect = delete_invoice(&store, &views, "nope").await;

        assert_eq!(redirect.location, INVOICES_PATH);
        assert_eq!(
            views.calls().last(),
            Some(&ViewCall::Redirect(INVOICES_PATH.to_string()))
        );
    }

    #[tokio::test]
    async fn delete_failure_skips_invalidation_but_redirects() {
        let store = MemoryInvoiceStore::failing();
        let views = RecordingViews::new();

        let redirect = delete_invoice(&store, &views, "inv-1").await;

        assert_eq!(redirect.location, INVOICES_PATH);
        assert_eq!(
            views.calls(),
            vec![ViewCall::Redirect(INVOICES_PATH.to_string())]
        );
    }
}
