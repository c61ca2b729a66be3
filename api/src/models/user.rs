use serde::{Deserialize, Serialize};

/// Authenticated user as returned by `GET /auth/me`.
///
/// An immutable snapshot: replaced wholesale on each successful validation,
/// never partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl User {
    /// Get display name, falling back to the username if no full name is set.
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}
