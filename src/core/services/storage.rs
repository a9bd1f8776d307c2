#[cfg(test)]
use std::cell::{Cell, RefCell};
#[cfg(test)]
use std::collections::HashMap;
use std::collections::HashSet;

use async_trait::async_trait;

use crate::core::error::{CodecError, StorageError};
use crate::core::models::{Task, TaskId};

/// String key-value storage the board persists into.
#[async_trait(?Send)]
pub trait KeyValueStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces whatever is stored under `key`.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn handle() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window.local_storage()?.ok_or(StorageError::Unavailable)
    }
}

#[async_trait(?Send)]
impl KeyValueStorage for LocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(Self::handle()?.get_item(key)?)
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(Self::handle()?.set_item(key, value)?)
    }
}

/// In-process storage that records every write and can be told to fail.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    writes: RefCell<Vec<(String, String)>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.items.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Every successful write so far as `(key, value)`, oldest first.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

#[cfg(test)]
#[async_trait(?Send)]
impl KeyValueStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.item(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Rejected("QuotaExceededError".to_string()));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.borrow_mut().push((key.to_string(), value.to_string()));
        Ok(())
    }
}

pub fn encode_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Parses a stored blob, rejecting data that breaks the board's invariants.
pub fn decode_tasks(raw: &str) -> Result<Vec<Task>, CodecError> {
    let tasks: Vec<Task> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        if task.id > TaskId::MAX {
            return Err(CodecError::IdOutOfRange(task.id));
        }
        if task.title.trim().is_empty() {
            return Err(CodecError::BlankTitle(task.id));
        }
        if !seen.insert(task.id) {
            return Err(CodecError::DuplicateId(task.id));
        }
    }

    Ok(tasks)
}
