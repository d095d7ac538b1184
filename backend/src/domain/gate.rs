//! Required-field checks and the user existence gate.
//!
//! Every read and write path tied to a user runs these checks before any
//! other store work and stops at the first failure.

use std::sync::Arc;

use tracing::error;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{DomainResult, Error, User, UserId, UserValidationError};

/// Truthiness of a client-supplied value.
///
/// Empty strings, zero and NaN count as absent, matching the loose presence
/// rules clients of this API already rely on.
pub trait Presence {
    /// Whether the value counts as supplied.
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        self.as_str().is_present()
    }
}

impl Presence for f64 {
    fn is_present(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

/// Return the value when present and truthy, else a `missing_field` error.
///
/// # Examples
/// ```
/// use expense_tracker::domain::{ErrorCode, require_field};
///
/// assert_eq!(require_field(Some(12.5), "sum").expect("present"), 12.5);
/// let err = require_field(Some(0.0), "sum").expect_err("zero is missing");
/// assert_eq!(err.code(), ErrorCode::MissingField);
/// let err = require_field(None::<String>, "description").expect_err("absent");
/// assert_eq!(err.message(), "missing required field: description");
/// ```
pub fn require_field<T: Presence>(value: Option<T>, field: &str) -> DomainResult<T> {
    value
        .filter(Presence::is_present)
        .ok_or_else(|| Error::missing_field(field))
}

/// Parse a required identity key, treating a blank key as missing.
pub fn require_user_id(raw: Option<&str>, field: &str) -> DomainResult<UserId> {
    let raw = require_field(raw, field)?;
    UserId::new(raw).map_err(|err| match err {
        UserValidationError::EmptyId | UserValidationError::EmptyName { .. } => {
            Error::missing_field(field)
        }
    })
}

/// Map a user store failure into a domain error, logging the cause.
pub(crate) fn map_user_persistence_error(err: UserPersistenceError) -> Error {
    error!(error = %err, "user store failure");
    Error::store_failure(err.to_string())
}

/// Existence check in front of every user-scoped operation.
#[derive(Clone)]
pub struct UserExistenceGate<U> {
    users: Arc<U>,
}

impl<U> UserExistenceGate<U> {
    /// Wrap a user repository.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

impl<U: UserRepository> UserExistenceGate<U> {
    /// Whether a user with this key exists. One store round-trip.
    pub async fn user_exists(&self, id: &UserId) -> DomainResult<bool> {
        self.users
            .find_by_id(id)
            .await
            .map(|user| user.is_some())
            .map_err(map_user_persistence_error)
    }

    /// Fetch the user, failing with `user_not_found` when absent.
    pub async fn require_user(&self, id: &UserId) -> DomainResult<User> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| Error::user_not_found(id.as_ref()))
    }
}
