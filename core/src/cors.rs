use actix_cors::Cors;
use actix_web::http::header;

pub fn middleware(origin: &str) -> Cors {
    Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::COOKIE,
            header::SET_COOKIE,
        ])
        .allowed_origin(origin)
        .expose_headers(vec![
            header::SET_COOKIE,
            header::LOCATION,
            header::HeaderName::from_static("x-view-revision"),
        ])
        .supports_credentials()
        .max_age(3600)
}
