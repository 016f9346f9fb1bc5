use std::sync::Arc;

use actix_session::Session;
use actix_web::{HttpResponse, post, web};
use common::{
    env_config::Config,
    error::{AppError, Res},
    form::RawForm,
    http::Success,
    session::{SESSION_USER_KEY, SessionUser},
};
use db::store::UserStore;

use crate::{dtos::auth::AuthResult, services};

/// Signs a user in with email and password.
///
/// # Input
/// - `form`: `email` and `password` form fields
///
/// # Output
/// - Success: `303 See Other` to the configured dashboard path, with the
///   session cookie set
/// - Error: `401 Unauthorized` with `{"error": "..."}`, whatever the reason
///
/// # Frontend Example
/// ```html
/// <form method="post" action="/api/auth/login">
///   <input type="email" name="email" required />
///   <input type="password" name="password" minlength="6" required />
///   <button>Log in</button>
/// </form>
/// ```
#[post("/login")]
pub async fn post_login(
    form: web::Form<RawForm>,
    users: web::Data<dyn UserStore>,
    config: web::Data<Arc<Config>>,
    session: Session,
) -> Res<HttpResponse> {
    match services::auth::authorize(users.get_ref(), &form).await? {
        AuthResult::Authenticated(user) => {
            session.renew();
            session
                .insert(
                    SESSION_USER_KEY,
                    SessionUser {
                        id: user.id,
                        email: user.email,
                    },
                )
                .map_err(|_| AppError::Internal("Failed to insert session user".to_string()))?;
            Ok(Success::see_other(&config.login_redirect_path))
        }
        AuthResult::Denied => Err(AppError::Unauthorized("Invalid credentials.".to_string())),
    }
}

/// Ends the session and redirects to the configured sign-in page.
#[post("/logout")]
pub async fn post_logout(session: Session, config: web::Data<Arc<Config>>) -> HttpResponse {
    session.purge();
    Success::see_other(&config.logout_redirect_path)
}
