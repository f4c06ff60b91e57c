#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::NaiveDateTime;
use classifieds::api::routes::api_routes;
use classifieds::domain::entities::{
    Advertisement, NewAdvertisement, NewUser, User, default_created_at,
};
use classifieds::domain::session::{SessionFactory, UnitOfWork};
use classifieds::error::AppError;
use classifieds::state::AppState;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    advertisements: BTreeMap<i32, Advertisement>,
    last_user_id: i32,
    last_advertisement_id: i32,
}

/// In-process store with per-session snapshots.
///
/// Each session works on a private copy taken at first use; `commit`
/// publishes that copy, dropping the session discards it. Unique and
/// foreign-key constraints mirror the Postgres schema.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
    unreachable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose sessions fail the connectivity check.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn seed_user(&self, username: &str) -> User {
        let mut tables = self.tables.lock().unwrap();
        tables.last_user_id += 1;
        let user = User::new(tables.last_user_id, username.to_string());
        tables.users.insert(user.id, user.clone());
        user
    }

    pub fn seed_advertisement(&self, title: &str, description: &str, owner_id: i32) -> Advertisement {
        let mut tables = self.tables.lock().unwrap();
        tables.last_advertisement_id += 1;
        let ad = Advertisement::new(
            tables.last_advertisement_id,
            title.to_string(),
            description.to_string(),
            default_created_at(),
            owner_id,
        );
        tables.advertisements.insert(ad.id, ad.clone());
        ad
    }

    pub fn advertisement(&self, id: i32) -> Option<Advertisement> {
        self.tables.lock().unwrap().advertisements.get(&id).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    pub fn advertisement_count(&self) -> usize {
        self.tables.lock().unwrap().advertisements.len()
    }

    pub fn sessions_opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn sessions_closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

impl SessionFactory for MemoryStore {
    fn open_session(&self) -> Box<dyn UnitOfWork> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Box::new(MemorySession {
            store: self.clone(),
            staged: None,
        })
    }
}

struct MemorySession {
    store: MemoryStore,
    staged: Option<Tables>,
}

impl MemorySession {
    fn tables(&mut self) -> &mut Tables {
        self.staged
            .get_or_insert_with(|| self.store.tables.lock().unwrap().clone())
    }
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        self.store.closed.fetch_add(1, Ordering::SeqCst);
    }
}

fn storage_error(message: &str) -> AppError {
    AppError::Database(sqlx::Error::Protocol(message.to_string()))
}

fn check_owner(tables: &Tables, owner_id: i32) -> Result<(), AppError> {
    if tables.users.contains_key(&owner_id) {
        Ok(())
    } else {
        Err(storage_error(
            "insert or update on table \"advertisements\" violates foreign key constraint",
        ))
    }
}

#[async_trait]
impl UnitOfWork for MemorySession {
    async fn get_user(&mut self, id: i32) -> Result<Option<User>, AppError> {
        Ok(self.tables().users.get(&id).cloned())
    }

    async fn get_advertisement(&mut self, id: i32) -> Result<Option<Advertisement>, AppError> {
        Ok(self.tables().advertisements.get(&id).cloned())
    }

    async fn add_user(&mut self, new_user: NewUser) -> Result<User, AppError> {
        let tables = self.tables();
        if tables.users.values().any(|u| u.username == new_user.username) {
            return Err(storage_error(
                "duplicate key value violates unique constraint \"users_username_key\"",
            ));
        }

        tables.last_user_id += 1;
        let user = User::new(tables.last_user_id, new_user.username);
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn add_advertisement(
        &mut self,
        new_advertisement: NewAdvertisement,
    ) -> Result<Advertisement, AppError> {
        let tables = self.tables();
        check_owner(tables, new_advertisement.owner_id)?;

        tables.last_advertisement_id += 1;
        let created_at: NaiveDateTime = new_advertisement
            .created_at
            .unwrap_or_else(default_created_at);
        let ad = Advertisement::new(
            tables.last_advertisement_id,
            new_advertisement.title,
            new_advertisement.description,
            created_at,
            new_advertisement.owner_id,
        );
        tables.advertisements.insert(ad.id, ad.clone());
        Ok(ad)
    }

    async fn save_advertisement(
        &mut self,
        original_id: i32,
        advertisement: &Advertisement,
    ) -> Result<Advertisement, AppError> {
        let tables = self.tables();
        check_owner(tables, advertisement.owner_id)?;

        if advertisement.id != original_id && tables.advertisements.contains_key(&advertisement.id)
        {
            return Err(storage_error(
                "duplicate key value violates unique constraint \"advertisements_pkey\"",
            ));
        }

        tables
            .advertisements
            .remove(&original_id)
            .ok_or_else(|| storage_error("no row to update"))?;
        tables
            .advertisements
            .insert(advertisement.id, advertisement.clone());
        Ok(advertisement.clone())
    }

    async fn delete_advertisement(&mut self, id: i32) -> Result<(), AppError> {
        self.tables().advertisements.remove(&id);
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), AppError> {
        if let Some(staged) = self.staged.take() {
            *self.store.tables.lock().unwrap() = staged;
        }
        Ok(())
    }

    async fn ping(&mut self) -> Result<(), AppError> {
        if self.store.unreachable {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

pub fn create_test_state(store: &MemoryStore) -> AppState {
    AppState::new(Arc::new(store.clone()))
}

pub fn make_server(store: &MemoryStore) -> TestServer {
    let app = api_routes().with_state(create_test_state(store));
    TestServer::new(app).unwrap()
}
