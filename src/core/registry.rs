//! Category name to logger handle registry

use super::error::{Result, SinkError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Reject empty and whitespace-only category names
pub fn validate_category(category: &str) -> Result<()> {
    if category.trim().is_empty() {
        return Err(SinkError::invalid_category(category));
    }
    Ok(())
}

/// Concurrent map from category to one shared handle per category.
///
/// Keys compare case-insensitively; the handle keeps the spelling used by the
/// first caller.
pub struct CategoryRegistry<H> {
    handles: RwLock<HashMap<String, Arc<H>>>,
}

impl<H> CategoryRegistry<H> {
    pub fn new() -> Self {
        Self {
            handles: RwLock::new(HashMap::new()),
        }
    }

    fn key(category: &str) -> String {
        category.to_lowercase()
    }

    /// Return the handle for `category`, creating it with `create` on first use.
    ///
    /// Creation happens under the write lock, so concurrent first calls for the
    /// same category observe a single handle.
    pub fn get_or_create<F>(&self, category: &str, create: F) -> Result<Arc<H>>
    where
        F: FnOnce(&str) -> Result<H>,
    {
        validate_category(category)?;
        let key = Self::key(category);

        if let Some(handle) = self.handles.read().get(&key) {
            return Ok(Arc::clone(handle));
        }

        let mut handles = self.handles.write();
        if let Some(handle) = handles.get(&key) {
            return Ok(Arc::clone(handle));
        }

        let handle = Arc::new(create(category)?);
        handles.insert(key, Arc::clone(&handle));
        Ok(handle)
    }

    pub fn get(&self, category: &str) -> Option<Arc<H>> {
        self.handles.read().get(&Self::key(category)).cloned()
    }

    pub fn len(&self) -> usize {
        self.handles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.read().is_empty()
    }

    pub fn clear(&self) {
        self.handles.write().clear();
    }
}

impl<H> Default for CategoryRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_case_insensitive_lookup() {
        let registry: CategoryRegistry<String> = CategoryRegistry::new();
        let first = registry
            .get_or_create("App.Service", |name| Ok(name.to_string()))
            .expect("create");
        let second = registry
            .get_or_create("app.service", |name| Ok(name.to_string()))
            .expect("lookup");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.as_str(), "App.Service");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_categories_rejected() {
        let registry: CategoryRegistry<String> = CategoryRegistry::new();
        for bad in ["", "   ", "\t\n"] {
            let err = registry
                .get_or_create(bad, |name| Ok(name.to_string()))
                .unwrap_err();
            assert!(matches!(err, SinkError::InvalidCategory { .. }));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_concurrent_creation_yields_one_handle() {
        let registry: Arc<CategoryRegistry<usize>> = Arc::new(CategoryRegistry::new());
        let created = Arc::new(AtomicUsize::new(0));

        let threads: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let created = Arc::clone(&created);
                thread::spawn(move || {
                    registry
                        .get_or_create("Shared", |_| Ok(created.fetch_add(1, Ordering::SeqCst)))
                        .expect("handle")
                })
            })
            .collect();

        let handles: Vec<Arc<usize>> = threads
            .into_iter()
            .map(|t| t.join().expect("thread"))
            .collect();

        assert_eq!(created.load(Ordering::SeqCst), 1);
        assert!(handles.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn test_clear() {
        let registry: CategoryRegistry<u8> = CategoryRegistry::new();
        registry.get_or_create("a", |_| Ok(1)).expect("a");
        registry.get_or_create("b", |_| Ok(2)).expect("b");
        assert_eq!(registry.len(), 2);

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get("a").is_none());
    }
}
