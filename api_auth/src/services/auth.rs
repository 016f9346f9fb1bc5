use actix_web::web;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use common::{
    error::{AppError, Res},
    form::{FieldErrors, RawForm, field},
};
use db::store::UserStore;
use validator::ValidateEmail;

use crate::dtos::auth::{AuthResult, Credentials};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Checks the `{email, password}` shape of submitted credentials.
pub fn validate_credentials(credentials: &RawForm) -> Result<Credentials, FieldErrors> {
    let email = field(credentials, "email").unwrap_or_default().to_string();
    let password = field(credentials, "password")
        .unwrap_or_default()
        .to_string();

    let mut errors = FieldErrors::new();
    errors
        .check("email", || {
            if email.validate_email() {
                Ok(())
            } else {
                Err("Invalid email".to_string())
            }
        })
        .check("password", || {
            if password.chars().count() >= MIN_PASSWORD_LENGTH {
                Ok(())
            } else {
                Err(format!(
                    "String must contain at least {} character(s)",
                    MIN_PASSWORD_LENGTH
                ))
            }
        });

    if errors.is_empty() {
        Ok(Credentials { email, password })
    } else {
        Err(errors)
    }
}

/// Authorization callback for credentials sign-in.
///
/// Malformed credentials are denied without touching the store. Failures of
/// the user lookup itself are returned as errors.
///
/// # Arguments
///
/// * `users` - Where users are looked up by email.
/// * `credentials` - Submitted form fields, expected to hold `email` and `password`.
///
/// # Returns
///
/// `AuthResult::Authenticated` with the stored user when the password matches
/// its hash, `AuthResult::Denied` otherwise.
pub async fn authorize(users: &dyn UserStore, credentials: &RawForm) -> Res<AuthResult> {
    let Credentials { email, password } = match validate_credentials(credentials) {
        Ok(credentials) => credentials,
        Err(errors) => {
            log::info!(
                "Invalid credentials structure: {}",
                errors.fields().collect::<Vec<_>>().join(", ")
            );
            return Ok(AuthResult::Denied);
        }
    };

    let Some(user) = users.get_user(&email).await? else {
        log::info!("User not found");
        return Ok(AuthResult::Denied);
    };

    let password_hash = user.password.clone();
    let matches = web::block(move || verify_password(&password, &password_hash))
        .await
        .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

    if matches {
        Ok(AuthResult::Authenticated(user))
    } else {
        log::info!("Invalid credentials");
        Ok(AuthResult::Denied)
    }
}

/// Compares `password` against a stored Argon2 PHC string.
///
/// A hash that cannot be parsed never matches.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(password_hash) {
        Ok(hash) => hash,
        Err(e) => {
            log::error!("Stored password hash is malformed: {}", e);
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
