//! Key-value namespaces that flags are read from.
//!
//! The provider only ever reads. Who writes a namespace, and when, is up to
//! its owner; providers observe changes on their next lookup.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::trace;

/// Read-only, string-keyed lookup used by the provider.
///
/// Implementations must be safe to query from many threads at once.
pub trait Namespace: Send + Sync {
    /// Returns the raw value stored under `key`, or `None` if there is none.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Namespace for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        // Such names can never be set in the environment.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                trace!(env_var = %key, "Ignoring non-UTF-8 environment value");
                None
            }
        }
    }
}

/// In-memory namespace guarded by a read-write lock.
///
/// Useful for embedding (values pushed from elsewhere) and for tests that
/// must not mutate the real environment.
#[derive(Debug, Default)]
pub struct MemoryNamespace {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryNamespace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, returning the previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryNamespace {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl Namespace for MemoryNamespace {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl Namespace for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Namespace for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<N: Namespace + ?Sized> Namespace for Arc<N> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<N: Namespace + ?Sized> Namespace for &N {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
