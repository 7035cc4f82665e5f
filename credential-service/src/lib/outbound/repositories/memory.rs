use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::HashedCredential;
use chrono::Utc;

use crate::identity::errors::StoreError;
use crate::identity::models::EmailAddress;
use crate::identity::models::Identity;
use crate::identity::models::IdentityId;
use crate::identity::ports::IdentityStore;

/// Process-local identity store.
///
/// Check-and-insert happens under one lock acquisition, matching the unique
/// constraint a database would provide.
#[derive(Default)]
pub struct InMemoryIdentityStore {
    identities: Mutex<HashMap<String, Identity>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored identities. A poisoned lock still reports the map as
    /// it was left, since inserts are single `Entry` operations.
    pub fn len(&self) -> usize {
        match self.identities.lock() {
            Ok(identities) => identities.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> StoreError {
    StoreError::Database("identity store lock poisoned".to_string())
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn create_identity(
        &self,
        email: &EmailAddress,
        password_hash: HashedCredential,
    ) -> Result<Identity, StoreError> {
        let mut identities = self.identities.lock().map_err(|_| poisoned())?;

        match identities.entry(email.as_str().to_string()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateIdentity),
            Entry::Vacant(slot) => {
                let identity = Identity {
                    id: IdentityId::new(),
                    email: email.clone(),
                    password_hash,
                    created_at: Utc::now(),
                };
                slot.insert(identity.clone());
                Ok(identity)
            }
        }
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Identity>, StoreError> {
        let identities = self.identities.lock().map_err(|_| poisoned())?;
        Ok(identities.get(email.as_str()).cloned())
    }
}
