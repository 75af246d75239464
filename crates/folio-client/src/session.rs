//! Client session identity.
//!
//! A session identifier (`session_<epoch millis>_<9 base36 chars>`) names this
//! client across interaction requests without any authentication. It is
//! created lazily on first read, persisted under a fixed key, and reused for
//! as long as that entry exists. When storage is unavailable the provider
//! degrades to an identifier held in memory for its own lifetime.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use rand::Rng;

use crate::error::SessionError;

const SESSION_PREFIX: &str = "session_";
const RANDOM_SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Durable storage for a single session identifier.
pub trait SessionStore: Send + Sync {
    /// Returns the stored identifier, or `None` if no entry exists.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the storage cannot be read.
    fn load(&self) -> Result<Option<String>, SessionError>;

    /// Persists `session_id`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the storage cannot be written.
    fn save(&self, session_id: &str) -> Result<(), SessionError>;
}

/// Stores the identifier as the sole contents of a file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                Ok((!trimmed.is_empty()).then(|| trimmed.to_owned()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&self, session_id: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        std::fs::write(&self.path, session_id).map_err(|e| self.io_error(e))
    }
}

/// Process-local store; each instance is its own storage scope.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    value: Mutex<Option<String>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self
            .value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session_id: &str) -> Result<(), SessionError> {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(session_id.to_owned());
        Ok(())
    }
}

/// Hands out the session identifier, creating and persisting it on first use.
#[derive(Debug)]
pub struct SessionProvider<S> {
    store: S,
    /// Serialises load-then-save so one provider never mints two identifiers.
    lock: Mutex<()>,
    /// Set once storage has failed; used for the rest of the provider's life.
    in_memory: OnceLock<String>,
}

impl<S: SessionStore> SessionProvider<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
            in_memory: OnceLock::new(),
        }
    }

    /// Returns the session identifier. Never fails.
    pub fn session_id(&self) -> String {
        if let Some(id) = self.in_memory.get() {
            return id.clone();
        }

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        match self.store.load() {
            Ok(Some(id)) => id,
            Ok(None) => {
                let id = generate_session_id();
                match self.store.save(&id) {
                    Ok(()) => {
                        tracing::debug!(session_id = %id, "created new session identifier");
                        id
                    }
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            "could not persist session identifier; keeping it in memory"
                        );
                        self.in_memory.get_or_init(|| id).clone()
                    }
                }
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "session storage unavailable; using an in-memory session identifier"
                );
                self.in_memory.get_or_init(generate_session_id).clone()
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Builds a fresh `session_<epoch millis>_<9 base36 chars>` identifier.
#[must_use]
pub fn generate_session_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let suffix: String = (0..RANDOM_SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect();
    format!("{SESSION_PREFIX}{millis}_{suffix}")
}

/// Checks the `session_<digits>_<alnum>` shape.
#[must_use]
pub fn is_well_formed(session_id: &str) -> bool {
    let Some(rest) = session_id.strip_prefix(SESSION_PREFIX) else {
        return false;
    };
    let Some((millis, suffix)) = rest.split_once('_') else {
        return false;
    };
    !millis.is_empty()
        && millis.bytes().all(|b| b.is_ascii_digit())
        && !suffix.is_empty()
        && suffix.bytes().all(|b| b.is_ascii_alphanumeric())
}
