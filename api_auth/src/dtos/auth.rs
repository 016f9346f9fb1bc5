use db::models::user::User;

/// Credentials that passed the shape check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Outcome of a sign-in attempt.
///
/// Unknown email, wrong password and malformed input all yield `Denied`;
/// callers cannot tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Authenticated(User),
    Denied,
}
