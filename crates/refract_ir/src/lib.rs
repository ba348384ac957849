//! Refract IR - type identity and class metadata.
//!
//! This crate holds the plain data that every other refract crate works on:
//! - [`TypeRef`]: a type identity (primitive, class, or array of either)
//! - [`ClassInfo`]: reflected metadata for one class or interface
//! - [`FieldInfo`], [`MethodInfo`], [`ConstructorInfo`]: reflected members
//! - [`GenericType`]: declared generic shapes of implemented interfaces
//!
//! Nothing here knows how to print descriptors or walk hierarchies; that is
//! the job of `refract_desc` and `refract_host`. All types are immutable
//! once built and cheap to clone (class names are reference counted).

mod class;
mod class_name;
mod generic;
mod member;
mod modifiers;
mod primitive;
mod type_ref;
pub mod well_known;

pub use class::{ClassBuilder, ClassInfo};
pub use class_name::ClassName;
pub use generic::GenericType;
pub use member::{ConstructorInfo, FieldInfo, Member, MethodInfo};
pub use modifiers::Modifiers;
pub use primitive::Primitive;
pub use type_ref::TypeRef;
