//! In-memory class pool.

use std::sync::Arc;

use parking_lot::RwLock;
use refract_ir::{ClassInfo, ClassName};
use rustc_hash::FxHashMap;

use crate::{platform, ClassSource, SharedClassSource};

/// A class source backed by a map of registered classes.
///
/// # Thread Safety
/// Lookups take a shared read lock; registration takes the write lock
/// briefly. The pool can be wrapped in `Arc` and registered into while
/// other threads resolve against it.
#[derive(Default)]
pub struct ClassPool {
    classes: RwLock<FxHashMap<ClassName, Arc<ClassInfo>>>,
}

impl ClassPool {
    /// An empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// A pool preloaded with the platform classes (`java.lang.Object`,
    /// `String`, boxed primitives, the collection hierarchy, ...).
    pub fn with_platform() -> Self {
        let pool = Self::new();
        {
            let mut classes = pool.classes.write();
            for class in platform::classes() {
                classes.insert(class.name.clone(), Arc::new(class));
            }
        }
        pool
    }

    /// Register a class, replacing any class of the same name.
    pub fn register(&self, class: ClassInfo) -> Arc<ClassInfo> {
        let class = Arc::new(class);
        self.classes
            .write()
            .insert(class.name.clone(), Arc::clone(&class));
        class
    }

    pub fn get(&self, name: &str) -> Option<Arc<ClassInfo>> {
        self.classes.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.read().is_empty()
    }

    /// Wrap the pool for sharing with resolvers and synthesizers.
    pub fn into_shared(self) -> SharedClassSource {
        Arc::new(self)
    }
}

impl ClassSource for ClassPool {
    fn find_class(&self, name: &str) -> Option<Arc<ClassInfo>> {
        self.get(name)
    }
}
