//! In-memory user store and fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use common::error::{AppError, Res};
use db::{models::user::User, store::UserStore};
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryUserStore {
    users: Vec<User>,
    lookups: AtomicUsize,
    fail: bool,
}

impl MemoryUserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_user(&self, email: &str) -> Res<Option<User>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Internal("Failed to fetch user.".to_string()));
        }
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }
}

pub fn hash(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

pub fn user(email: &str, password_hash: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: "User".to_string(),
        email: email.to_string(),
        password: password_hash.to_string(),
    }
}
