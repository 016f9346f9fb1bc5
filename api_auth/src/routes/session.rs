use actix_session::Session;
use actix_web::{Responder, get};
use common::{
    error::{AppError, Res},
    http::Success,
    session::{SESSION_USER_KEY, SessionUser},
};

/// Returns the signed-in user stored in the session cookie.
///
/// # Output
/// - Success: `{"id": "...", "email": "..."}`
/// - Error: `401 Unauthorized` if no user is signed in
#[get("/session")]
async fn get_session(session: Session) -> Res<impl Responder> {
    let user = session
        .get::<SessionUser>(SESSION_USER_KEY)
        .map_err(|_| AppError::BadRequest("Session user error".to_string()))?
        .ok_or_else(|| AppError::Unauthorized("No user data found".to_string()))?;
    Success::ok(user)
}
