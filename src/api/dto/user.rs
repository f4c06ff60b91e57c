//! DTOs for user endpoints.

use serde::Serialize;

use crate::domain::entities::User;

pub const USER_CREATED: &str = "Пользователь создан";

#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i32,
    pub username: String,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Response body for `POST /create_user`.
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub message: &'static str,
    pub user: UserItem,
}
