use actix_session::{SessionMiddleware, config::CookieContentSecurity, storage::CookieSessionStore};
use actix_web::{
    cookie::{Key, SameSite},
    web,
};
use middleware::auth::SessionGuard;

pub mod middleware {
    pub mod auth;
}
pub mod routes {
    pub mod auth;
    pub mod session;
}
pub mod services {
    pub mod auth;
}
pub mod dtos {
    pub mod auth;
}

#[cfg(test)]
mod testing;

pub fn mount_auth() -> actix_web::Scope {
    web::scope("/auth")
        .service(routes::auth::post_login)
        .service(routes::auth::post_logout)
        .service(routes::session::get_session)
}

/// Signed and encrypted cookie sessions. `secret` must be at least 64 bytes.
pub fn session_middleware(
    cookie_secure: bool,
    secret: &[u8],
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::from(secret))
        .cookie_name("dashboard_session".to_string())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .cookie_content_security(CookieContentSecurity::Private)
        .build()
}

pub fn session_guard() -> SessionGuard {
    SessionGuard
}
