//! Refract Host - the reflection capability everything else is written over.
//!
//! - [`ClassSource`]: the narrow trait a host implements (class lookup and
//!   member accessibility)
//! - [`ClassPool`]: an in-memory source, optionally preloaded with the
//!   platform classes the reflection layer relies on
//! - [`hierarchy`]: ancestor chains, supertypes, assignability and public
//!   member enumeration, all as explicit iterative walks

mod error;
pub mod hierarchy;
mod platform;
mod pool;
mod source;

pub use error::HostError;
pub use pool::ClassPool;
pub use source::{ClassSource, SharedClassSource};
