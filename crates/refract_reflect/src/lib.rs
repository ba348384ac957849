//! Refract Reflect - reflection utilities over a host class source.
//!
//! # Modules
//!
//! - [`format`]: human-readable member signatures and signature keys
//! - [`generic`]: generic argument extraction from implemented interfaces
//! - [`resolve`]: method and constructor resolution with an injected cache
//! - [`bean`]: bean property introspection (`getX`/`isX`/`setX`)
//! - [`value`]: the synthesized value model and compatibility checks
//! - [`synth`]: depth-bounded empty-value synthesis
//!
//! Every operation takes its class source explicitly; the only shared state
//! is the [`SignatureCache`] handed to a [`MemberResolver`].

pub mod bean;
mod error;
pub mod format;
pub mod generic;
mod names;
pub mod resolve;
pub mod synth;
pub mod value;

pub use error::{GenericShapeError, ReflectError};
pub use names::resolve_type_name;
pub use resolve::{CacheStats, MemberResolver, SignatureCache};
pub use synth::{EmptyValueSynthesizer, SynthesisConfig, Synthesized};
pub use value::{Heap, Instance, ObjectId, Value};
