use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session key the signed-in user is stored under.
pub const SESSION_USER_KEY: &str = "user";

/// Identity kept in the session cookie once credentials were accepted.
///
/// The session guard also places it in request extensions for handlers and
/// the request logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}
