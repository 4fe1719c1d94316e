//! Bearer token persistence backed by the platform keychain.
//!
//! The token itself is issued elsewhere (the login flow stores it); this
//! module only reads and writes the stored value. Clients re-read the token
//! on every request, so a login or logout takes effect immediately.

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Mutex, OnceLock};

#[cfg(not(test))]
use keyring::Entry;

use crate::error::{Error, Result};

#[cfg(not(test))]
const KEYRING_SERVICE_NAME: &str = "inkpad";
const TOKEN_KEY: &str = "auth_token";

/// Read/write access to the persisted bearer token.
///
/// Abstracted as a trait so the HTTP clients can be exercised against an
/// in-memory store in tests.
pub trait TokenStore: Clone + Send + Sync + 'static {
    /// Load the stored token, if any. Storage failures propagate unhandled.
    fn load_token(&self) -> Result<Option<String>>;
    fn save_token(&self, token: &str) -> Result<()>;
    fn clear_token(&self) -> Result<()>;
}

/// Token store persisting to the OS keychain under a fixed service/key.
#[derive(Clone, Default)]
pub struct KeyringTokenStore;

impl KeyringTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[cfg(test)]
    fn test_store() -> &'static Mutex<HashMap<String, String>> {
        static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
        STORE.get_or_init(|| Mutex::new(HashMap::new()))
    }

    #[cfg(not(test))]
    fn entry() -> Result<Entry> {
        Entry::new(KEYRING_SERVICE_NAME, TOKEN_KEY)
            .map_err(|error| Error::SecureStorage(error.to_string()))
    }
}

impl TokenStore for KeyringTokenStore {
    #[cfg(not(test))]
    fn load_token(&self) -> Result<Option<String>> {
        match Self::entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(Error::SecureStorage(error.to_string())),
        }
    }

    #[cfg(test)]
    fn load_token(&self) -> Result<Option<String>> {
        let guard = Self::test_store()
            .lock()
            .map_err(|error| Error::SecureStorage(error.to_string()))?;
        Ok(guard.get(TOKEN_KEY).cloned())
    }

    #[cfg(not(test))]
    fn save_token(&self, token: &str) -> Result<()> {
        Self::entry()?
            .set_password(token)
            .map_err(|error| Error::SecureStorage(error.to_string()))
    }

    #[cfg(test)]
    fn save_token(&self, token: &str) -> Result<()> {
        let mut guard = Self::test_store()
            .lock()
            .map_err(|error| Error::SecureStorage(error.to_string()))?;
        guard.insert(TOKEN_KEY.to_string(), token.to_string());
        Ok(())
    }

    #[cfg(not(test))]
    fn clear_token(&self) -> Result<()> {
        match Self::entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(Error::SecureStorage(error.to_string())),
        }
    }

    #[cfg(test)]
    fn clear_token(&self) -> Result<()> {
        let mut guard = Self::test_store()
            .lock()
            .map_err(|error| Error::SecureStorage(error.to_string()))?;
        guard.remove(TOKEN_KEY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The in-memory test store is process-global, so the round trip runs as
    // a single test to avoid interleaving with itself.
    #[test]
    fn keyring_store_round_trips_token() {
        let store = KeyringTokenStore::new();

        store.clear_token().unwrap();
        assert_eq!(store.load_token().unwrap(), None);

        store.save_token("secret-token").unwrap();
        assert_eq!(store.load_token().unwrap().as_deref(), Some("secret-token"));

        store.clear_token().unwrap();
        assert_eq!(store.load_token().unwrap(), None);
    }
}
