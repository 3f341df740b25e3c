// Session state - per-session key/value store
//
// One `SessionState` exists per running dashboard session. It is created empty
// when the session starts, passed by reference into every panel handler, and
// dropped when the session ends. Nothing here is ever written to disk.

use chrono::Utc;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Key holding the text-generation API credential
pub const API_CREDENTIAL: &str = "api_credential";

/// Unique session identifier
///
/// Format: YYYYMMDD-HHMMSS-XXXX (timestamp + 4 random hex chars)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        use std::collections::hash_map::RandomState;
        use std::hash::{BuildHasher, Hasher};

        let timestamp = Utc::now().format("%Y%m%d-%H%M%S");
        let random = RandomState::new().build_hasher().finish();
        Self(format!("{}-{:04x}", timestamp, random & 0xFFFF))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session-scoped key/value state
///
/// Reads of unset keys return the empty string and never fail.
#[derive(Debug)]
pub struct SessionState {
    id: SessionId,
    values: HashMap<String, String>,
}

impl SessionState {
    /// Start a new, empty session
    pub fn new() -> Self {
        Self::with_id(SessionId::generate())
    }

    pub fn with_id(id: SessionId) -> Self {
        tracing::debug!("Session {} started", id);
        Self {
            id,
            values: HashMap::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Current value for `key`, or `""` when unset
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Overwrite the value for `key`
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// True iff a non-empty API credential is present.
    ///
    /// Recomputed on every call so a credential saved in Settings unlocks gated
    /// panels on the very next dispatch.
    pub fn has_credential(&self) -> bool {
        !self.get(API_CREDENTIAL).is_empty()
    }

    /// The API credential (empty when absent)
    pub fn credential(&self) -> &str {
        self.get(API_CREDENTIAL)
    }

    /// Short, non-reversible identifier for the credential, safe for logs
    pub fn credential_fingerprint(&self) -> Option<String> {
        if !self.has_credential() {
            return None;
        }
        Some(fingerprint(self.credential()))
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SessionState {
    fn drop(&mut self) {
        tracing::debug!("Session {} ended", self.id);
    }
}

/// First 8 hex chars of the SHA-256 of `secret`
pub fn fingerprint(secret: &str) -> String {
    let digest = Sha256::digest(secret.as_bytes());
    digest.iter().take(4).map(|b| format!("{:02x}", b)).collect()
}
