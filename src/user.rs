//! Registered users.
//!
//! The repository is a concurrent in-memory table keyed by account name.
//! Nothing is persisted across restarts.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("account {0} is already registered")]
    DuplicateAccount(String),
    #[error("missing form field `{0}`")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    account: String,
    password: String,
    email: String,
}

impl User {
    pub fn new(
        account: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    /// Builds a user from decoded `account`, `password` and `email` fields.
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, UserError> {
        let field = |name: &'static str| {
            form.get(name)
                .filter(|v| !v.is_empty())
                .cloned()
                .ok_or(UserError::MissingField(name))
        };
        Ok(Self::new(field("account")?, field("password")?, field("email")?))
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }
}

#[derive(Clone, Default)]
pub struct UserRepository {
    users: Arc<DashMap<String, User>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user. Fails if the account name is taken.
    pub fn save(&self, user: User) -> Result<(), UserError> {
        match self.users.entry(user.account.clone()) {
            Entry::Occupied(_) => Err(UserError::DuplicateAccount(user.account)),
            Entry::Vacant(slot) => {
                slot.insert(user);
                Ok(())
            }
        }
    }

    pub fn find_by_account(&self, account: &str) -> Option<User> {
        self.users.get(account).map(|u| u.value().clone())
    }
}
