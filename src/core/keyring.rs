use std::error::Error;
use std::fmt;

use keyring::Entry;
use tracing::debug;

use crate::core::constants::{KEYRING_SERVICE, KEYRING_USER};

/// A keyring operation that did not complete.
#[derive(Debug)]
pub enum KeyringAccessError {
    /// The credential store could not be reached, e.g. a locked keychain
    /// or no secret service running. Trying again later may work.
    Unavailable(keyring::Error),
    /// The store answered but rejected the operation.
    Failed(keyring::Error),
}

impl KeyringAccessError {
    fn inner(&self) -> &keyring::Error {
        match self {
            KeyringAccessError::Unavailable(err) | KeyringAccessError::Failed(err) => err,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, KeyringAccessError::Unavailable(_))
    }

    /// One-line message for the chat screen notice.
    pub fn notice(&self) -> String {
        match self {
            KeyringAccessError::Unavailable(_) => {
                "System keyring is locked or unavailable; key kept for this session only"
                    .to_string()
            }
            KeyringAccessError::Failed(err) => {
                format!("Could not save key to keyring ({err}); key kept for this session only")
            }
        }
    }
}

impl From<keyring::Error> for KeyringAccessError {
    fn from(err: keyring::Error) -> Self {
        match err {
            keyring::Error::PlatformFailure(_) | keyring::Error::NoStorageAccess(_) => {
                KeyringAccessError::Unavailable(err)
            }
            other => KeyringAccessError::Failed(other),
        }
    }
}

impl fmt::Display for KeyringAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyringAccessError::Unavailable(err) => write!(f, "keyring unavailable: {err}"),
            KeyringAccessError::Failed(err) => write!(f, "keyring error: {err}"),
        }
    }
}

impl Error for KeyringAccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.inner())
    }
}

/// The remembered Gemini key in the platform credential store.
///
/// A disabled store never touches the keyring; loads return `None` and
/// writes succeed without effect.
pub struct KeyStore {
    enabled: bool,
}

impl KeyStore {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn entry() -> Result<Entry, KeyringAccessError> {
        Ok(Entry::new(KEYRING_SERVICE, KEYRING_USER)?)
    }

    pub fn load(&self) -> Result<Option<String>, KeyringAccessError> {
        if !self.enabled {
            return Ok(None);
        }
        match Self::entry()?.get_password() {
            Ok(key) => {
                debug!("loaded stored API key");
                Ok(Some(key))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn store(&self, key: &str) -> Result<(), KeyringAccessError> {
        if !self.enabled {
            return Ok(());
        }
        Self::entry()?.set_password(key)?;
        debug!("stored API key in keyring");
        Ok(())
    }

    /// Remove the stored key. Returns `false` when nothing was stored.
    pub fn clear(&self) -> Result<bool, KeyringAccessError> {
        if !self.enabled {
            return Ok(false);
        }
        match Self::entry()?.delete_credential() {
            Ok(()) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
