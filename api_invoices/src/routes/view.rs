use actix_web::{Responder, get, web};
use common::{error::Res, http::Success};

use crate::{
    dtos::view::{ViewRevisionQuery, ViewRevisionResponse},
    views::ViewRevisions,
};

/// Current revision of a dashboard view.
///
/// The revision increases each time an action invalidates `path`; a client
/// holding a copy rendered at an older revision should refetch.
#[get("/revision")]
pub async fn get_revision(
    query: web::Query<ViewRevisionQuery>,
    views: web::Data<ViewRevisions>,
) -> Res<impl Responder> {
    let ViewRevisionQuery { path } = query.into_inner();
    let revision = views.revision(&path);
    Success::ok(ViewRevisionResponse { path, revision })
}
