//! Shared storage for repeated state names.

use std::collections::HashSet;
use std::sync::Arc;

/// Deduplicates state names while a dataset is parsed.
///
/// A weekly dataset repeats the same few dozen state names for every row, so
/// each distinct name is allocated once and handed out as an `Arc<str>`.
///
/// ```
/// use ilidash::StateInterner;
/// use std::sync::Arc;
///
/// let mut names = StateInterner::new();
/// let a = names.intern("Texas");
/// let b = names.intern("Texas");
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Default)]
pub struct StateInterner {
    pool: HashSet<Arc<str>>,
}

impl StateInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared copy of `name`, allocating it on first sight.
    pub fn intern(&mut self, name: &str) -> Arc<str> {
        if let Some(existing) = self.pool.get(name) {
            return Arc::clone(existing);
        }
        let shared: Arc<str> = Arc::from(name);
        self.pool.insert(Arc::clone(&shared));
        shared
    }

    /// Number of distinct names seen so far.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}
