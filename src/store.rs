//! In-memory user store: record type, validation predicate, and mutations.

/// A single user entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: i64,
}

/// Result of an `add` attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Rejected,
}

/// Result of a `remove` attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Whether a candidate record may enter the store: non-empty name and a
/// strictly positive age. Pure predicate, no coercion.
pub fn validate(candidate: &User) -> bool {
    !candidate.name.is_empty() && candidate.age > 0
}

/// Ordered collection of user records. Insertion order is preserved, names
/// are not required to be unique, and lookups return the first match.
#[derive(Clone, Debug, Default)]
pub struct UserStore {
    data: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Read-only view of all records, in insertion order.
    pub fn list(&self) -> &[User] {
        &self.data
    }

    /// Validate the candidate and append it on success. A rejected candidate
    /// leaves the store untouched.
    pub fn add(&mut self, candidate: User) -> AddOutcome {
        if validate(&candidate) {
            self.data.push(candidate);
            AddOutcome::Added
        } else {
            AddOutcome::Rejected
        }
    }

    /// Remove the first record whose name matches exactly (case-sensitive).
    /// Remaining records keep their relative order.
    pub fn remove(&mut self, name: &str) -> RemoveOutcome {
        match self.data.iter().position(|u| u.name == name) {
            Some(index) => {
                self.data.remove(index);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }

    /// First record matching `name`, if any. Does not mutate.
    pub fn find(&self, name: &str) -> Option<&User> {
        self.data.iter().find(|u| u.name == name)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
