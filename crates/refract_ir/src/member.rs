//! Reflected class members.

use crate::{ClassName, Modifiers, TypeRef};

/// A declared field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldInfo {
    pub name: String,
    pub ty: TypeRef,
    /// Class that declares the field.
    pub declaring: ClassName,
    pub modifiers: Modifiers,
}

/// A declared method.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodInfo {
    pub name: String,
    pub params: Vec<TypeRef>,
    pub return_type: TypeRef,
    /// Class that declares the method.
    pub declaring: ClassName,
    pub modifiers: Modifiers,
}

impl MethodInfo {
    /// Whether `other` has the same name and parameter list.
    ///
    /// Return types are not compared; an override with a narrower return
    /// type still has the same signature.
    pub fn same_signature(&self, other: &MethodInfo) -> bool {
        self.name == other.name && self.params == other.params
    }
}

/// A declared constructor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructorInfo {
    pub params: Vec<TypeRef>,
    pub declaring: ClassName,
    pub modifiers: Modifiers,
}

/// A borrowed view of any member kind.
#[derive(Copy, Clone, Debug)]
pub enum Member<'a> {
    Field(&'a FieldInfo),
    Method(&'a MethodInfo),
    Constructor(&'a ConstructorInfo),
}

impl Member<'_> {
    pub fn declaring(&self) -> &ClassName {
        match self {
            Member::Field(field) => &field.declaring,
            Member::Method(method) => &method.declaring,
            Member::Constructor(ctor) => &ctor.declaring,
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        match self {
            Member::Field(field) => field.modifiers,
            Member::Method(method) => method.modifiers,
            Member::Constructor(ctor) => ctor.modifiers,
        }
    }

    /// Member name; constructors are reported as `<init>`.
    pub fn name(&self) -> &str {
        match self {
            Member::Field(field) => &field.name,
            Member::Method(method) => &method.name,
            Member::Constructor(_) => "<init>",
        }
    }
}
