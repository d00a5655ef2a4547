//! Recording mock of the image store for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::StorageError;

use super::traits::{ImageStore, UploadOptions};

#[derive(Default)]
struct MockState {
    uploads: Vec<String>,
    deletes: Vec<String>,
}

/// Mock image store that records every call and serves deterministic URLs.
///
/// Failure behavior is fixed at construction: uploads can be armed to fail
/// after `n` successes, deletes to fail on every call (while still being
/// recorded, so tests can count attempts).
pub struct MockImageStore {
    state: Arc<Mutex<MockState>>,
    fail_uploads_after: Option<usize>,
    fail_deletes: bool,
}

impl MockImageStore {
    /// Create a mock store where every call succeeds
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
            fail_uploads_after: None,
            fail_deletes: false,
        }
    }

    /// Create a mock store whose uploads fail after `n` successes
    pub fn failing_uploads_after(n: usize) -> Self {
        Self {
            fail_uploads_after: Some(n),
            ..Self::new()
        }
    }

    /// Create a mock store whose deletes always fail
    pub fn failing_deletes() -> Self {
        Self {
            fail_deletes: true,
            ..Self::new()
        }
    }

    /// Payloads successfully uploaded so far, in call order
    pub async fn uploaded(&self) -> Vec<String> {
        self.state.lock().await.uploads.clone()
    }

    /// URLs passed to delete so far, in call order
    pub async fn deleted(&self) -> Vec<String> {
        self.state.lock().await.deletes.clone()
    }
}

impl Default for MockImageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageStore for MockImageStore {
    async fn upload(&self, payload: &str, options: &UploadOptions) -> Result<String, StorageError> {
        let mut state = self.state.lock().await;

        if let Some(n) = self.fail_uploads_after {
            if state.uploads.len() >= n {
                return Err(StorageError::UploadFailed {
                    message: "mock upload failure".to_string(),
                });
            }
        }

        state.uploads.push(payload.to_string());
        Ok(format!(
            "https://res.cloudinary.com/mock/image/upload/{}/img-{}.jpg",
            options.folder,
            state.uploads.len()
        ))
    }

    async fn delete(&self, url: &str) -> Result<(), StorageError> {
        let mut state = self.state.lock().await;
        state.deletes.push(url.to_string());

        if self.fail_deletes {
            return Err(StorageError::DeleteFailed {
                message: "mock delete failure".to_string(),
            });
        }
        Ok(())
    }
}
