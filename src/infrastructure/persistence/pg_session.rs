//! PostgreSQL implementation of the unit-of-work.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::domain::entities::{
    Advertisement, NewAdvertisement, NewUser, User, default_created_at,
};
use crate::domain::session::{SessionFactory, UnitOfWork};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    username: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.id, row.username)
    }
}

#[derive(sqlx::FromRow)]
struct AdvertisementRow {
    id: i32,
    title: String,
    description: String,
    created_at: NaiveDateTime,
    owner_id: i32,
}

impl From<AdvertisementRow> for Advertisement {
    fn from(row: AdvertisementRow) -> Self {
        Advertisement::new(
            row.id,
            row.title,
            row.description,
            row.created_at,
            row.owner_id,
        )
    }
}

/// Hands out [`PgSession`]s bound to a shared connection pool.
#[derive(Clone)]
pub struct PgSessionFactory {
    pool: PgPool,
}

impl PgSessionFactory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SessionFactory for PgSessionFactory {
    fn open_session(&self) -> Box<dyn UnitOfWork> {
        Box::new(PgSession::new(self.pool.clone()))
    }
}

/// A session over one pooled connection.
///
/// The connection is checked out and a transaction begun on first use.
/// `commit` ends the transaction; the next operation begins a new one.
/// Dropping the session rolls back anything uncommitted and returns the
/// connection to the pool.
pub struct PgSession {
    pool: PgPool,
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgSession {
    pub fn new(pool: PgPool) -> Self {
        Self { pool, tx: None }
    }

    async fn conn(&mut self) -> Result<&mut PgConnection, AppError> {
        let tx = match self.tx.take() {
            Some(tx) => tx,
            None => self.pool.begin().await?,
        };
        Ok(&mut **self.tx.insert(tx))
    }
}

impl Drop for PgSession {
    fn drop(&mut self) {
        if self.tx.is_some() {
            tracing::trace!("Rolling back uncommitted session changes");
        }
    }
}

#[async_trait]
impl UnitOfWork for PgSession {
    async fn get_user(&mut self, id: i32) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.conn().await?)
        .await?;

        Ok(row.map(User::from))
    }

    async fn get_advertisement(&mut self, id: i32) -> Result<Option<Advertisement>, AppError> {
        let row = sqlx::query_as::<_, AdvertisementRow>(
            r#"
            SELECT id, title, description, created_at, owner_id
            FROM advertisements
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.conn().await?)
        .await?;

        Ok(row.map(Advertisement::from))
    }

    async fn add_user(&mut self, new_user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username
            "#,
        )
        .bind(new_user.username)
        .fetch_one(self.conn().await?)
        .await?;

        Ok(row.into())
    }

    async fn add_advertisement(
        &mut self,
        new_advertisement: NewAdvertisement,
    ) -> Result<Advertisement, AppError> {
        let created_at = new_advertisement
            .created_at
            .unwrap_or_else(default_created_at);

        let row = sqlx::query_as::<_, AdvertisementRow>(
            r#"
            INSERT INTO advertisements (title, description, created_at, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, created_at, owner_id
            "#,
        )
        .bind(new_advertisement.title)
        .bind(new_advertisement.description)
        .bind(created_at)
        .bind(new_advertisement.owner_id)
        .fetch_one(self.conn().await?)
        .await?;

        Ok(row.into())
    }

    async fn save_advertisement(
        &mut self,
        original_id: i32,
        advertisement: &Advertisement,
    ) -> Result<Advertisement, AppError> {
        let row = sqlx::query_as::<_, AdvertisementRow>(
            r#"
            UPDATE advertisements SET
                id          = $2,
                title       = $3,
                description = $4,
                created_at  = $5,
                owner_id    = $6
            WHERE id = $1
            RETURNING id, title, description, created_at, owner_id
            "#,
        )
        .bind(original_id)
        .bind(advertisement.id)
        .bind(&advertisement.title)
        .bind(&advertisement.description)
        .bind(advertisement.created_at)
        .bind(advertisement.owner_id)
        .fetch_one(self.conn().await?)
        .await?;

        Ok(row.into())
    }

    async fn delete_advertisement(&mut self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM advertisements WHERE id = $1")
            .bind(id)
            .execute(self.conn().await?)
            .await?;

        Ok(())
    }

    async fn commit(&mut self) -> Result<(), AppError> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
        }
        Ok(())
    }

    async fn ping(&mut self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.conn().await?)
            .await?;
        Ok(())
    }
}
