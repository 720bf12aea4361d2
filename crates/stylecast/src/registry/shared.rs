//! A cloneable handle to one registry shared across threads.

use std::sync::{Arc, PoisonError, RwLock};

use super::classes::ClassRegistry;

/// Shared, last-writer-wins access to a [`ClassRegistry`].
///
/// Every write runs under the lock, so concurrent `update` calls are
/// serialized and the last one wins. Callers needing read-modify-write
/// atomicity across several calls must group them in one [`write`] closure.
/// Resolution should work from a [`snapshot`] so it never holds the lock.
///
/// [`write`]: SharedClassRegistry::write
/// [`snapshot`]: SharedClassRegistry::snapshot
#[derive(Debug, Clone, Default)]
pub struct SharedClassRegistry {
    inner: Arc<RwLock<ClassRegistry>>,
}

impl SharedClassRegistry {
    pub fn new(registry: ClassRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Runs `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&ClassRegistry) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Runs `f` with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut ClassRegistry) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// A point-in-time copy for resolution.
    pub fn snapshot(&self) -> ClassRegistry {
        self.read(ClassRegistry::clone)
    }
}

impl From<ClassRegistry> for SharedClassRegistry {
    fn from(registry: ClassRegistry) -> Self {
        Self::new(registry)
    }
}
