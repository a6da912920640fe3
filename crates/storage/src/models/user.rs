use chrono::NaiveDateTime;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub is_admin: bool,
    pub api_key: Uuid,
    pub created_at: NaiveDateTime,
}

/// The authenticated caller of a request.
///
/// `is_admin` is the only capability the API distinguishes: it grants write
/// access to the shared catalogue and makes created exercises default ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub is_admin: bool,
}

impl Principal {
    pub fn is_founder_of(&self, founder_id: i32) -> bool {
        self.user_id == founder_id
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            is_admin: user.is_admin,
        }
    }
}
