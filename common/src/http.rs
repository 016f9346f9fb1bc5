use actix_web::{HttpResponse, Responder, http::header::LOCATION};
use serde::Serialize;

use super::error::Res;

pub struct Success;
impl Success {
    pub fn ok<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Ok().json(body))
    }
    /// `303 See Other`, so a browser follows a form POST with a GET.
    pub fn see_other(location: &str) -> HttpResponse {
        HttpResponse::SeeOther()
            .append_header((LOCATION, location))
            .finish()
    }
}
