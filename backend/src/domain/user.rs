//! User data model.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validation errors returned by [`UserId`] and [`User`] constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identity key was empty once trimmed.
    #[error("user id must not be empty")]
    EmptyId,
    /// A required name part was empty once trimmed.
    #[error("{field} must not be empty")]
    EmptyName {
        /// Which name part was empty.
        field: &'static str,
    },
}

/// Externally supplied identity key of a user.
///
/// The key is opaque text (the legacy data set uses small integers such as
/// `"1"`). Surrounding whitespace is removed on construction.
///
/// # Examples
/// ```
/// use expense_tracker::domain::UserId;
///
/// let id = UserId::new(" 1 ").expect("valid id");
/// assert_eq!(id.as_ref(), "1");
/// assert!(UserId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A person whose costs are tracked.
///
/// ## Invariants
/// - `first_name` and `last_name` are non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    marital_status: Option<String>,
}

impl User {
    /// Build a user from its required parts.
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::domain::{User, UserId};
    ///
    /// let id = UserId::new("1").expect("valid id");
    /// let user = User::new(id, "John", "Doe").expect("valid user");
    /// assert_eq!(user.first_name(), "John");
    /// assert!(user.birthday().is_none());
    /// ```
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        if first_name.trim().is_empty() {
            return Err(UserValidationError::EmptyName {
                field: "first_name",
            });
        }
        if last_name.trim().is_empty() {
            return Err(UserValidationError::EmptyName { field: "last_name" });
        }
        Ok(Self {
            id,
            first_name,
            last_name,
            birthday: None,
            marital_status: None,
        })
    }

    /// Attach a date of birth.
    #[must_use]
    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Attach a marital status.
    #[must_use]
    pub fn with_marital_status(mut self, status: impl Into<String>) -> Self {
        self.marital_status = Some(status.into());
        self
    }

    /// Identity key.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Date of birth, when recorded.
    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    /// Marital status, when recorded.
    pub fn marital_status(&self) -> Option<&str> {
        self.marital_status.as_deref()
    }
}
