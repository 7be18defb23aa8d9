use super::StoreError;
use crate::features::qr_auth::AuthToken;
use crate::qr_login::ports::SessionStore;
use std::sync::{Arc, Mutex};

/// Keeps the token in process memory. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<AuthToken>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

impl SessionStore for MemoryTokenStore {
    fn save(&self, token: &AuthToken) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::Unavailable("token slot poisoned".to_string()))?;
        *slot = Some(token.clone());
        Ok(())
    }
}
