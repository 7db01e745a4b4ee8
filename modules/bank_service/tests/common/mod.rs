//! Common test utilities: mock repository, database and router fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use bank_service::domain::{BankRepository, RepositoryError, RepositoryResult};
use bank_service::{Bank, BankInput, BankServiceModule, Config};
use chrono::Utc;
use parking_lot::RwLock;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

pub fn input(code: &str, name: &str) -> BankInput {
    BankInput {
        code: code.to_string(),
        name: name.to_string(),
        country: None,
        active: true,
    }
}

// ===== Mock repository =====

/// In-memory repository with failure injection
///
/// `fail_storage` turns every call into a storage error. `lose_next_race`
/// makes the next insert or update report a unique index violation, as if a
/// concurrent writer took the code between the pre-check and the write.
#[derive(Clone, Default)]
pub struct MockBankRepo {
    data: Arc<RwLock<BTreeMap<i64, Bank>>>,
    next_id: Arc<AtomicI64>,
    fail_storage: Arc<AtomicBool>,
    lose_next_race: Arc<AtomicBool>,
    update_code_checks: Arc<AtomicUsize>,
}

impl MockBankRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_storage(&self, fail: bool) {
        self.fail_storage.store(fail, Ordering::SeqCst);
    }

    pub fn lose_next_race(&self) {
        self.lose_next_race.store(true, Ordering::SeqCst);
    }

    /// Store a record as-is, bypassing the code uniqueness check
    pub fn seed(&self, code: &str, name: &str) -> Bank {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let bank = Bank {
            id,
            code: code.to_string(),
            name: name.to_string(),
            country: None,
            active: true,
            creation_date: Utc::now(),
        };
        self.data.write().insert(id, bank.clone());
        bank
    }

    /// Calls to `exists_by_code_excluding_id` so far
    pub fn update_code_checks(&self) -> usize {
        self.update_code_checks.load(Ordering::SeqCst)
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    pub fn snapshot(&self, id: i64) -> Option<Bank> {
        self.data.read().get(&id).cloned()
    }

    fn check(&self) -> RepositoryResult<()> {
        if self.fail_storage.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage(anyhow::anyhow!(
                "connection reset by peer"
            )));
        }
        Ok(())
    }

    fn check_race(&self, code: &str) -> RepositoryResult<()> {
        if self.lose_next_race.swap(false, Ordering::SeqCst) {
            return Err(RepositoryError::DuplicateCode(code.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl BankRepository for MockBankRepo {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Bank>> {
        self.check()?;
        Ok(self.data.read().get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool> {
        self.check()?;
        Ok(self.data.read().contains_key(&id))
    }

    async fn exists_by_code(&self, code: &str) -> RepositoryResult<bool> {
        self.check()?;
        Ok(self.data.read().values().any(|b| b.code == code))
    }

    async fn exists_by_code_excluding_id(&self, code: &str, id: i64) -> RepositoryResult<bool> {
        self.check()?;
        self.update_code_checks.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .data
            .read()
            .values()
            .any(|b| b.code == code && b.id != id))
    }

    async fn insert(&self, input: &BankInput) -> RepositoryResult<Bank> {
        self.check()?;
        self.check_race(&input.code)?;

        // Yield between check and write so unserialized callers would interleave
        tokio::task::yield_now().await;

        let mut data = self.data.write();
        if data.values().any(|b| b.code == input.code) {
            return Err(RepositoryError::DuplicateCode(input.code.clone()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let bank = Bank {
            id,
            code: input.code.clone(),
            name: input.name.clone(),
            country: input.country.clone(),
            active: input.active,
            creation_date: Utc::now(),
        };
        data.insert(id, bank.clone());
        Ok(bank)
    }

    async fn update(&self, bank: &Bank) -> RepositoryResult<Bank> {
        self.check()?;
        self.check_race(&bank.code)?;

        let mut data = self.data.write();
        let stored = data
            .get_mut(&bank.id)
            .ok_or_else(|| RepositoryError::Storage(anyhow::anyhow!("row {} vanished", bank.id)))?;
        stored.code = bank.code.clone();
        stored.name = bank.name.clone();
        stored.country = bank.country.clone();
        stored.active = bank.active;
        Ok(stored.clone())
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.check()?;
        self.data.write().remove(&id);
        Ok(())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Bank>> {
        self.check()?;
        Ok(self.data.read().values().cloned().collect())
    }
}

// ===== Database and router fixtures =====

/// Fresh in-memory SQLite database (single connection, so one database)
pub async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(options).await.unwrap()
}

/// Module over a migrated in-memory database
pub async fn module_with(config: Config) -> BankServiceModule {
    let module = BankServiceModule::init(config, memory_db().await).unwrap();
    module.migrate().await.unwrap();
    module
}

/// Router with both catalogs in native self-query mode
pub async fn test_router() -> Router {
    let module = module_with(Config::default()).await;
    module.register_rest(Router::new()).unwrap()
}

/// Send one request and return the status with the decoded JSON body
///
/// An empty body decodes to `Value::Null`.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };
    send_request(router, request).await
}

pub async fn send_request(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
