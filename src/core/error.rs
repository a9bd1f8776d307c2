use futures::task::SpawnError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::core::models::TaskId;

/// Failure reported by a key-value storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        StorageError::Rejected(message)
    }
}

/// The stored blob could not be turned back into a valid task list.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid task JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("task id {0} appears more than once")]
    DuplicateId(TaskId),
    #[error("task id {0} is too large")]
    IdOutOfRange(TaskId),
    #[error("task {0} has a blank title")]
    BlankTitle(TaskId),
}

/// The two ways the board can fail to keep its tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    LoadFailure,
    SaveFailure,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read saved tasks: {0}")]
    Read(#[source] StorageError),
    #[error("saved tasks are malformed: {0}")]
    Decode(#[from] CodecError),
    #[error("failed to encode tasks: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to schedule save: {0}")]
    Spawn(#[from] SpawnError),
    #[error("failed to write tasks: {0}")]
    Write(#[source] StorageError),
}

impl StoreError {
    pub fn kind(&self) -> FailureKind {
        match self {
            StoreError::Read(_) | StoreError::Decode(_) => FailureKind::LoadFailure,
            StoreError::Encode(_) | StoreError::Spawn(_) | StoreError::Write(_) => FailureKind::SaveFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_classified_by_phase() {
        assert_eq!(StoreError::Read(StorageError::Unavailable).kind(), FailureKind::LoadFailure);
        assert_eq!(StoreError::Decode(CodecError::BlankTitle(TaskId(1))).kind(), FailureKind::LoadFailure);
        assert_eq!(StoreError::Spawn(SpawnError::shutdown()).kind(), FailureKind::SaveFailure);
        assert_eq!(
            StoreError::Write(StorageError::Rejected("QuotaExceededError".into())).kind(),
            FailureKind::SaveFailure
        );
    }

    #[test]
    fn messages_name_the_cause() {
        let err = StoreError::Write(StorageError::Rejected("quota exceeded".into()));
        assert_eq!(err.to_string(), "failed to write tasks: storage rejected the operation: quota exceeded");
    }
}
