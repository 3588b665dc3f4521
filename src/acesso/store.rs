//! In-process user store backing the demo register/login endpoints.
//!
//! Passwords are kept as plaintext [`SecretString`]s and compared directly.
//! This exists so the UI has something to talk to; it is not an auth backend.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("email already registered")]
    EmailTaken,
}

#[derive(Debug)]
struct Account {
    user: User,
    password: SecretString,
}

#[derive(Debug, Default)]
struct Accounts {
    accounts: Vec<Account>,
    last_id: u64,
}

#[derive(Debug, Default)]
pub struct UserStore {
    inner: RwLock<Accounts>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user with the next sequential id.
    ///
    /// # Errors
    /// Returns [`StoreError::EmailTaken`] if the email is already registered.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: SecretString,
    ) -> Result<User, StoreError> {
        let mut state = self.inner.write().await;

        if state.accounts.iter().any(|account| account.user.email == email) {
            return Err(StoreError::EmailTaken);
        }

        state.last_id += 1;
        let user = User {
            id: state.last_id,
            name,
            email,
        };

        state.accounts.push(Account {
            user: user.clone(),
            password,
        });

        Ok(user)
    }

    /// Returns the user whose email and password both match.
    pub async fn authenticate(&self, email: &str, password: &str) -> Option<User> {
        let state = self.inner.read().await;

        state
            .accounts
            .iter()
            .find(|account| {
                account.user.email == email && account.password.expose_secret() == password
            })
            .map(|account| account.user.clone())
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.inner.read().await.accounts.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
