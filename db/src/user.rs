use common::error::{AppError, Res};
use sqlx::{Executor, PgPool, Postgres};

use crate::models::user::User;

pub async fn get_user_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Looks a user up on a dedicated pooled connection.
///
/// The connection is held for the duration of the query and goes back to the
/// pool when `conn` drops, whichever way this function returns. Database
/// failures are logged and reported without their detail.
pub async fn fetch_user(pool: &PgPool, email: &str) -> Res<Option<User>> {
    let mut conn = pool.acquire().await.map_err(|e| {
        log::error!("Failed to fetch user: {}", e);
        AppError::Internal("Failed to fetch user.".to_string())
    })?;

    get_user_by_email(&mut *conn, email).await.map_err(|e| {
        log::error!("Failed to fetch user: {}", e);
        AppError::Internal("Failed to fetch user.".to_string())
    })
}
