//! Declared generic shapes.

use crate::{ClassName, TypeRef};

/// A generic type as declared in an `implements` clause.
///
/// `Comparable<List<String>[]>` is
/// `Parameterized { raw: Comparable, args: [Array(Parameterized { raw: List, .. })] }`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenericType {
    /// A concrete, non-generic type.
    Type(TypeRef),
    /// A generic class applied to arguments.
    Parameterized {
        raw: ClassName,
        args: Vec<GenericType>,
    },
    /// An array whose component is generic (`T[]`, `List<String>[]`).
    Array(Box<GenericType>),
    /// A type variable (`T`).
    Variable(String),
    /// A wildcard (`?`, `? extends T`).
    Wildcard,
}

impl GenericType {
    pub fn class(name: impl Into<ClassName>) -> Self {
        GenericType::Type(TypeRef::class(name))
    }

    pub fn parameterized(raw: impl Into<ClassName>, args: Vec<GenericType>) -> Self {
        GenericType::Parameterized {
            raw: raw.into(),
            args,
        }
    }

    /// The class this shape names when erased, if it names one.
    pub fn raw_class(&self) -> Option<&ClassName> {
        match self {
            GenericType::Type(ty) => ty.as_class(),
            GenericType::Parameterized { raw, .. } => Some(raw),
            GenericType::Array(_) | GenericType::Variable(_) | GenericType::Wildcard => None,
        }
    }
}
