#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use xeon_shortener::application::services::ShortenerService;
use xeon_shortener::domain::entities::{Mapping, NewMapping};
use xeon_shortener::domain::repositories::{InsertOutcome, MappingRepository};
use xeon_shortener::error::AppError;
use xeon_shortener::infrastructure::template::{TemplateError, TemplateResult, TemplateStore};
use xeon_shortener::state::{AppState, RedirectPolicy};

pub const TEST_BASE_URL: &str = "https://sho.rt";

/// In-memory mapping store with the same conditional-insert semantics as the
/// PostgreSQL repository.
pub struct InMemoryMappingRepository {
    mappings: Mutex<HashMap<String, Mapping>>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self {
            mappings: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored mappings, for side-effect assertions.
    pub fn count(&self) -> usize {
        self.mappings.lock().unwrap().len()
    }

    /// Seeds a mapping directly, bypassing code generation.
    pub fn seed(&self, code: &str, url: &str) {
        self.mappings.lock().unwrap().insert(
            code.to_string(),
            Mapping::new(code.to_string(), url.to_string(), Utc::now()),
        );
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn insert_if_absent(&self, new_mapping: NewMapping) -> Result<InsertOutcome, AppError> {
        let mut mappings = self.mappings.lock().unwrap();

        if mappings.contains_key(&new_mapping.short_code) {
            return Ok(InsertOutcome::CodeTaken);
        }

        let mapping = Mapping::new(new_mapping.short_code.clone(), new_mapping.long_url, Utc::now());
        mappings.insert(new_mapping.short_code, mapping.clone());
        Ok(InsertOutcome::Inserted(mapping))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError> {
        Ok(self.mappings.lock().unwrap().get(code).cloned())
    }
}

/// Wrapper that makes the first insert lose the race, as if a concurrent
/// writer had just claimed the same candidate code for its own URL.
pub struct ConflictOnceRepository {
    inner: Arc<InMemoryMappingRepository>,
    rival_url: &'static str,
    conflicted: Mutex<bool>,
}

impl ConflictOnceRepository {
    pub fn new(inner: Arc<InMemoryMappingRepository>, rival_url: &'static str) -> Self {
        Self {
            inner,
            rival_url,
            conflicted: Mutex::new(false),
        }
    }
}

#[async_trait]
impl MappingRepository for ConflictOnceRepository {
    async fn insert_if_absent(&self, new_mapping: NewMapping) -> Result<InsertOutcome, AppError> {
        {
            let mut conflicted = self.conflicted.lock().unwrap();
            if !*conflicted {
                *conflicted = true;
                // The rival wins the candidate code; the caller must retry.
                self.inner.seed(&new_mapping.short_code, self.rival_url);
                return Ok(InsertOutcome::CodeTaken);
            }
        }

        self.inner.insert_if_absent(new_mapping).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError> {
        self.inner.find_by_code(code).await
    }
}

/// Mapping store whose every call fails, for opaque-500 assertions.
pub struct FailingMappingRepository;

#[async_trait]
impl MappingRepository for FailingMappingRepository {
    async fn insert_if_absent(&self, _new_mapping: NewMapping) -> Result<InsertOutcome, AppError> {
        Err(AppError::dependency("Internal server error"))
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Mapping>, AppError> {
        Err(AppError::dependency("Internal server error"))
    }
}

/// Template store returning a fixed body.
pub struct StaticTemplateStore(pub &'static str);

#[async_trait]
impl TemplateStore for StaticTemplateStore {
    async fn fetch(&self) -> TemplateResult<String> {
        Ok(self.0.to_string())
    }
}

/// Template store whose every fetch fails.
pub struct FailingTemplateStore;

#[async_trait]
impl TemplateStore for FailingTemplateStore {
    async fn fetch(&self) -> TemplateResult<String> {
        Err(TemplateError::ReadError("simulated failure".to_string()))
    }
}

pub fn create_test_state_with(
    policy: RedirectPolicy,
) -> (AppState, Arc<InMemoryMappingRepository>) {
    let repository = Arc::new(InMemoryMappingRepository::new());
    let shortener = Arc::new(ShortenerService::new(
        repository.clone(),
        TEST_BASE_URL.to_string(),
        6,
    ));

    let state = AppState {
        shortener,
        redirect_policy: policy,
    };

    (state, repository)
}

pub fn create_test_state() -> (AppState, Arc<InMemoryMappingRepository>) {
    create_test_state_with(RedirectPolicy::Http)
}

pub fn create_failing_state() -> AppState {
    let shortener = Arc::new(ShortenerService::new(
        Arc::new(FailingMappingRepository),
        TEST_BASE_URL.to_string(),
        6,
    ));

    AppState {
        shortener,
        redirect_policy: RedirectPolicy::Http,
    }
}
