//! User creation and lookup.

use serde_json::{Map, Value};

use crate::domain::entities::{NewUser, User};
use crate::domain::session::UnitOfWork;
use crate::error::AppError;
use crate::utils::json_value::{required, to_text};

/// Fetches the user with the given id.
///
/// # Errors
///
/// Returns [`AppError::UserNotFound`] (served as 400) if there is no such user.
/// Returns [`AppError::Database`] on storage errors.
pub async fn get_user(session: &mut dyn UnitOfWork, id: i32) -> Result<User, AppError> {
    session.get_user(id).await?.ok_or(AppError::UserNotFound)
}

/// Creates a user from a request body and commits it.
///
/// # Errors
///
/// Returns [`AppError::MissingField`] if `username` is absent or empty.
/// Returns [`AppError::Database`] if the username is taken; duplicates are
/// not translated into a client error.
pub async fn create_user(
    session: &mut dyn UnitOfWork,
    body: &Map<String, Value>,
) -> Result<User, AppError> {
    let username = required(body, "username").ok_or(AppError::MissingField)?;
    let username = to_text("username", username)?;

    let user = session.add_user(NewUser { username }).await?;
    session.commit().await?;

    tracing::info!(user_id = user.id, "User created");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::MockUnitOfWork;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut session = MockUnitOfWork::new();

        session
            .expect_add_user()
            .withf(|new_user| new_user.username == "борис")
            .times(1)
            .returning(|new_user| Ok(User::new(1, new_user.username)));
        session.expect_commit().times(1).returning(|| Ok(()));

        let user = create_user(&mut session, &body(json!({"username": "борис"})))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.username, "борис");
    }

    #[tokio::test]
    async fn test_create_user_missing_username() {
        let mut session = MockUnitOfWork::new();
        session.expect_add_user().never();
        session.expect_commit().never();

        let result = create_user(&mut session, &body(json!({}))).await;
        assert!(matches!(result, Err(AppError::MissingField)));

        let result = create_user(&mut session, &body(json!({"username": ""}))).await;
        assert!(matches!(result, Err(AppError::MissingField)));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_is_not_translated() {
        let mut session = MockUnitOfWork::new();

        session
            .expect_add_user()
            .times(1)
            .returning(|_| Err(AppError::Database(sqlx::Error::RowNotFound)));
        session.expect_commit().never();

        let result = create_user(&mut session, &body(json!({"username": "dup"}))).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut session = MockUnitOfWork::new();
        session.expect_get_user().times(1).returning(|_| Ok(None));

        let result = get_user(&mut session, 42).await;

        assert!(matches!(result, Err(AppError::UserNotFound)));
    }
}
