use serde::{Deserialize, Serialize};

/// A registered employee account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Insertion-ordered collection of user accounts.
///
/// User ids are not required to be unique. Duplicate registrations are legal
/// and authentication resolves against the *first* record whose id and
/// password both match. Records are never mutated or deleted.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user unconditionally. No uniqueness check, no error
    /// conditions.
    pub fn register(&mut self, user: User) {
        self.users.push(user);
    }

    /// Linear scan in insertion order; true on the first exact match of both
    /// id and password. A failed login is a normal boolean outcome, not an
    /// error. No lockout, no rate limiting.
    pub fn authenticate(&self, user_id: &str, password: &str) -> bool {
        self.users
            .iter()
            .any(|u| u.user_id == user_id && u.password == password)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
