//! Credential manager
//!
//! Owns the in-memory API key and mirrors it, together with the quota
//! flag, into the injected key-value store.

use crate::models::AssistantMode;
use crate::store::{KeyValueStore, API_KEY, QUOTA_ERROR_KEY};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

pub struct CredentialManager {
    store: Arc<dyn KeyValueStore>,
    api_key: RwLock<Option<String>>,
}

impl CredentialManager {
    /// Create a manager, restoring any key already in the store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let api_key = store.get(API_KEY).filter(|k| !k.is_empty());
        if api_key.is_some() {
            info!("Restored Gemini API key from store");
        }
        Self {
            store,
            api_key: RwLock::new(api_key),
        }
    }

    /// Store a new key and reset the quota flag
    pub fn set_credential(&self, key: impl Into<String>) {
        let key = key.into();
        let mut current = self.api_key.write().unwrap_or_else(PoisonError::into_inner);
        self.store.set(API_KEY, &key);
        self.store.remove(QUOTA_ERROR_KEY);
        *current = Some(key);
        info!("Gemini API key updated");
    }

    pub fn has_credential(&self) -> bool {
        self.api_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_deref()
            .is_some_and(|k| !k.is_empty())
    }

    /// Forget the key and the quota flag
    pub fn clear_credential(&self) {
        let mut current = self.api_key.write().unwrap_or_else(PoisonError::into_inner);
        self.store.remove(API_KEY);
        self.store.remove(QUOTA_ERROR_KEY);
        *current = None;
        info!("Gemini API key cleared");
    }

    /// Current key, if any
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|k| !k.is_empty())
    }

    /// Quota flag; always false without a credential
    pub fn quota_exceeded(&self) -> bool {
        self.has_credential() && self.store.get(QUOTA_ERROR_KEY).as_deref() == Some("true")
    }

    pub fn mark_quota_exceeded(&self) {
        warn!("Recording Gemini quota exhaustion");
        self.store.set(QUOTA_ERROR_KEY, "true");
    }

    pub fn clear_quota_flag(&self) {
        if self.store.get(QUOTA_ERROR_KEY).is_some() {
            debug!("Clearing stale quota flag");
            self.store.remove(QUOTA_ERROR_KEY);
        }
    }

    pub fn mode(&self) -> AssistantMode {
        if !self.has_credential() {
            AssistantMode::NoCredential
        } else if self.quota_exceeded() {
            AssistantMode::QuotaBackoff
        } else {
            AssistantMode::Live
        }
    }
}
