//! The host capability trait.

use std::sync::Arc;

use refract_ir::{ClassInfo, Member};

use crate::HostError;

/// Where class metadata comes from.
///
/// Implementations must be safe to share across threads; resolvers and
/// synthesizers hold a [`SharedClassSource`] and may be used concurrently.
pub trait ClassSource: Send + Sync {
    /// Look up a class by its dotted qualified name.
    fn find_class(&self, name: &str) -> Option<Arc<ClassInfo>>;

    /// Open `member` for reflective access.
    ///
    /// Hosts without access control allow everything.
    fn make_accessible(&self, _member: Member<'_>) -> Result<(), HostError> {
        Ok(())
    }
}

/// A reference-counted, thread-safe class source.
pub type SharedClassSource = Arc<dyn ClassSource>;
