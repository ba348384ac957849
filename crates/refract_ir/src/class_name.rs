//! Reference-counted qualified class names.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A fully qualified, dot-separated class name (`java.util.ArrayList`).
///
/// Cloning shares the underlying string, so names can be stored in every
/// member and map key without copying.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassName(Arc<str>);

impl ClassName {
    pub fn new(name: &str) -> Self {
        ClassName(Arc::from(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last dot-separated segment (`ArrayList` for `java.util.ArrayList`).
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Everything before the last dot, if the name has a package.
    pub fn package(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(pkg, _)| pkg)
    }
}

impl From<&str> for ClassName {
    fn from(name: &str) -> Self {
        ClassName::new(name)
    }
}

impl From<String> for ClassName {
    fn from(name: String) -> Self {
        ClassName(Arc::from(name))
    }
}

impl Borrow<str> for ClassName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ClassName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for ClassName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Debug for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassName({})", self.0)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
