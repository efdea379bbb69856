//! Session/access gate: login against a static staff directory, session
//! persistence, profile edits and password changes.
//!
//! The stored identity blob carries the credential material so a changed
//! password survives re-login; the password never leaves this module — every
//! public method returns the stripped [`User`]. Failed authentication is a
//! routine result, not an error.

use std::sync::Arc;

use icqa_providers::{
    common_models::user::{User, UserPatch},
    record_storage::RecordStorage,
};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::config::DirectoryAccount;
use crate::service::error::SessionServiceError;

pub struct SessionService {
    storage: Arc<dyn RecordStorage>,
    session_key: String,
    directory: Vec<DirectoryAccount>,
}

#[derive(Serialize, Deserialize)]
struct StoredIdentity {
    #[serde(flatten)]
    user: User,
    password: Zeroizing<String>,
}

impl SessionService {
    pub fn new(
        storage: Arc<dyn RecordStorage>,
        session_key: String,
        directory: Vec<DirectoryAccount>,
    ) -> Self {
        Self {
            storage,
            session_key,
            directory,
        }
    }

    /// Checks the stored identity first (its password may differ from the
    /// directory after a password change), then the static directory.
    /// `Ok(None)` on wrong credentials.
    pub fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, SessionServiceError> {
        if let Some(stored) = self.load()? {
            if stored.user.email == email && stored.password.as_str() == password {
                return Ok(Some(stored.user));
            }
        }

        let Some(account) = self
            .directory
            .iter()
            .find(|account| account.user.email == email && account.password.as_str() == password)
        else {
            tracing::debug!(email, "login rejected");
            return Ok(None);
        };

        let identity = StoredIdentity {
            user: account.user.clone(),
            password: account.password.clone(),
        };
        self.store(&identity)?;

        tracing::debug!(email, role = %identity.user.role, "login accepted");
        Ok(Some(identity.user))
    }

    pub fn current_user(&self) -> Result<Option<User>, SessionServiceError> {
        Ok(self.load()?.map(|identity| identity.user))
    }

    pub fn logout(&self) -> Result<(), SessionServiceError> {
        self.storage.remove_value(&self.session_key)?;
        Ok(())
    }

    /// Merges the patch over the stored identity. `Ok(None)` when nobody is
    /// logged in.
    pub fn update_profile(&self, patch: UserPatch) -> Result<Option<User>, SessionServiceError> {
        let Some(mut identity) = self.load()? else {
            return Ok(None);
        };

        patch.apply_to(&mut identity.user);
        self.store(&identity)?;

        Ok(Some(identity.user))
    }

    /// `Ok(false)` when nobody is logged in or `current` does not match the
    /// stored password.
    pub fn change_password(
        &self,
        current: &str,
        new: &str,
    ) -> Result<bool, SessionServiceError> {
        let Some(mut identity) = self.load()? else {
            return Ok(false);
        };

        if identity.password.as_str() != current {
            tracing::debug!(email = %identity.user.email, "password change rejected");
            return Ok(false);
        }

        identity.password = Zeroizing::new(new.to_string());
        self.store(&identity)?;

        Ok(true)
    }

    fn load(&self) -> Result<Option<StoredIdentity>, SessionServiceError> {
        match self.storage.get_value_by_key(&self.session_key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn store(&self, identity: &StoredIdentity) -> Result<(), SessionServiceError> {
        let raw = serde_json::to_string(identity)?;
        self.storage.insert_value(&self.session_key, &raw)?;
        Ok(())
    }
}
