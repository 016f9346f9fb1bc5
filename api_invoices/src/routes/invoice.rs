use actix_web::{HttpResponse, post, web};
use common::{
    error::Res,
    form::{FormState, RawForm},
};
use db::store::InvoiceStore;

use crate::{actions, views::ViewRevisions};

/// Creates an invoice from a submitted form.
///
/// # Input
/// - `form`: `customerId`, `amount` (dollars) and `status` (`pending` | `paid`)
///
/// # Output
/// - Success: `303 See Other` to `/dashboard/invoices`
/// - Invalid form or failed insert: `200 OK` with the form state,
///   e.g. `{"errors": {"amount": ["..."]}, "message": "..."}`
#[post("/create")]
pub async fn post_create_invoice(
    form: web::Form<RawForm>,
    store: web::Data<dyn InvoiceStore>,
    views: web::Data<ViewRevisions>,
) -> Res<HttpResponse> {
    let outcome = actions::create_invoice(
        store.get_ref(),
        views.get_ref(),
        &FormState::default(),
        &form,
    )
    .await?;
    Ok(outcome.into_response())
}

/// Updates customer, amount and status of invoice `{id}`.
///
/// Responds like [`post_create_invoice`]; a database failure surfaces as a
/// `500` error response.
#[post("/{id}/update")]
pub async fn post_update_invoice(
    path: web::Path<String>,
    form: web::Form<RawForm>,
    store: web::Data<dyn InvoiceStore>,
    views: web::Data<ViewRevisions>,
) -> Res<HttpResponse> {
    let invoice_id = path.into_inner();
    let outcome = actions::update_invoice(
        store.get_ref(),
        views.get_ref(),
        &FormState::default(),
        &invoice_id,
        &form,
    )
    .await?;
    Ok(outcome.into_response())
}

/// Deletes invoice `{id}`. Always answers with a redirect to the listing.
#[post("/{id}/delete")]
pub async fn post_delete_invoice(
    path: web::Path<String>,
    store: web::Data<dyn InvoiceStore>,
    views: web::Data<ViewRevisions>,
) -> HttpResponse {
    let invoice_id = path.into_inner();
    actions::delete_invoice(store.get_ref(), views.get_ref(), &invoice_id)
        .await
        .into_response()
}
