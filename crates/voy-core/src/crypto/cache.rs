//! Per-session cache of derived keys.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::key::{derive_key, DerivedKey, APP_SALT};
use crate::error::Result;

/// Derived keys keyed by user id.
///
/// Create one when the application starts and call [`KeyCache::clear`] on
/// logout so keys never outlive the session that needed them. Keys are
/// derived outside the lock: two threads missing on the same new user id
/// may both derive, and the last insert wins. Both results are identical.
#[derive(Default)]
pub struct KeyCache {
    keys: RwLock<HashMap<String, Arc<DerivedKey>>>,
}

impl KeyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached key for `user_id`, deriving it on first use.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`derive_key`].
    pub fn get_or_derive(&self, user_id: &str) -> Result<Arc<DerivedKey>> {
        if let Some(key) = self.read().get(user_id) {
            return Ok(Arc::clone(key));
        }

        let key = Arc::new(derive_key(user_id, APP_SALT)?);
        tracing::debug!(cached_users = self.len() + 1, "Derived field key");
        self.write().insert(user_id.to_string(), Arc::clone(&key));

        Ok(key)
    }

    /// Whether a key for `user_id` is cached.
    pub fn contains(&self, user_id: &str) -> bool {
        self.read().contains_key(user_id)
    }

    /// Drop the key for a single user. Returns `true` if one was cached.
    pub fn forget(&self, user_id: &str) -> bool {
        self.write().remove(user_id).is_some()
    }

    /// Drop every cached key.
    pub fn clear(&self) {
        let mut keys = self.write();
        let dropped = keys.len();
        keys.clear();
        tracing::debug!(dropped, "Cleared field key cache");
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Entries are deterministic keys, so a poisoned map is still consistent
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<DerivedKey>>> {
        self.keys.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<DerivedKey>>> {
        self.keys.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for KeyCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyCache")
            .field("cached_users", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_use_derives_and_caches() {
        let cache = KeyCache::new();
        assert!(cache.is_empty());

        let key = cache.get_or_derive("user-123").unwrap();
        assert!(cache.contains("user-123"));
        assert_eq!(cache.len(), 1);

        let expected = derive_key("user-123", APP_SALT).unwrap();
        assert_eq!(key.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn test_repeat_lookup_returns_same_key() {
        let cache = KeyCache::new();
        let first = cache.get_or_derive("user-123").unwrap();
        let second = cache.get_or_derive("user-123").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_users_get_separate_entries() {
        let cache = KeyCache::new();
        let a = cache.get_or_derive("user-a").unwrap();
        let b = cache.get_or_derive("user-b").unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clear_on_logout() {
        let cache = KeyCache::new();
        cache.get_or_derive("user-a").unwrap();
        cache.get_or_derive("user-b").unwrap();

        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.contains("user-a"));
    }

    #[test]
    fn test_forget_single_user() {
        let cache = KeyCache::new();
        cache.get_or_derive("user-a").unwrap();
        assert!(cache.forget("user-a"));
        assert!(!cache.forget("user-a"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_empty_user_id_is_a_regular_entry() {
        let cache = KeyCache::new();
        cache.get_or_derive("").unwrap();
        assert!(cache.contains(""));
        assert!(!cache.contains("user-a"));
    }

    #[test]
    fn test_concurrent_misses_converge() {
        let cache = Arc::new(KeyCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get_or_derive("shared-user").unwrap())
            })
            .collect();

        let keys: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for key in &keys[1..] {
            assert_eq!(key.as_bytes(), keys[0].as_bytes());
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_debug_hides_user_ids() {
        let cache = KeyCache::new();
        cache.get_or_derive("secret-user").unwrap();
        let debug_output = format!("{:?}", cache);
        assert!(debug_output.contains("cached_users: 1"));
        assert!(!debug_output.contains("secret-user"));
    }
}
