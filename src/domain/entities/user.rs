//! User entity.

/// A registered user that may own advertisements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
}

impl User {
    pub fn new(id: i32, username: String) -> Self {
        Self { id, username }
    }
}

/// Input data for creating a new user. The id is generated by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(7, "алиса".to_string());

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "алиса");
    }
}
