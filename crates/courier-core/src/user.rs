//! User value object and its step-by-step builder.
//!
//! Fields may be set in any order; nothing is validated or persisted.
//! Unset fields default to empty strings (`bio` to `None`).

use std::fmt;

use serde::Serialize;

use crate::utils::mask_secret;

/// An immutable user record. Build one with [`User::builder`].
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct User {
    name: String,
    email: String,
    #[serde(skip_serializing)]
    password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    bio: Option<String>,
}

impl User {
    /// Start assembling a new user.
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &mask_secret(&self.password))
            .field("bio", &self.bio)
            .finish()
    }
}

/// Fluent builder for [`User`]. Consumed by [`UserBuilder::build`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    bio: Option<String>,
}

impl UserBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Finalize the user. Later setter calls win over earlier ones.
    pub fn build(self) -> User {
        User {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            bio: self.bio,
        }
    }
}
