//! Type identities.

use crate::{ClassName, Primitive};

/// A type identity: a primitive, a class or interface, or an array.
///
/// Arrays are a chain of components; a `String[][]` is
/// `Array(Array(Class("java.lang.String")))`, so its dimension count is the
/// chain length and its base type is the innermost non-array type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeRef {
    Primitive(Primitive),
    Class(ClassName),
    Array(Box<TypeRef>),
}

impl TypeRef {
    pub const VOID: TypeRef = TypeRef::Primitive(Primitive::Void);
    pub const BOOLEAN: TypeRef = TypeRef::Primitive(Primitive::Boolean);
    pub const BYTE: TypeRef = TypeRef::Primitive(Primitive::Byte);
    pub const CHAR: TypeRef = TypeRef::Primitive(Primitive::Char);
    pub const DOUBLE: TypeRef = TypeRef::Primitive(Primitive::Double);
    pub const FLOAT: TypeRef = TypeRef::Primitive(Primitive::Float);
    pub const INT: TypeRef = TypeRef::Primitive(Primitive::Int);
    pub const LONG: TypeRef = TypeRef::Primitive(Primitive::Long);
    pub const SHORT: TypeRef = TypeRef::Primitive(Primitive::Short);

    /// A class or interface type.
    pub fn class(name: impl Into<ClassName>) -> Self {
        TypeRef::Class(name.into())
    }

    /// A one-dimensional array of `component`.
    pub fn array_of(component: TypeRef) -> Self {
        TypeRef::Array(Box::new(component))
    }

    /// An array of `base` with `dimensions` levels; zero dimensions is `base`.
    pub fn array(base: TypeRef, dimensions: usize) -> Self {
        (0..dimensions).fold(base, |ty, _| TypeRef::array_of(ty))
    }

    /// The element type of an array, `None` for non-arrays.
    pub fn component(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(component) => Some(component),
            _ => None,
        }
    }

    /// The innermost non-array type.
    pub fn base(&self) -> &TypeRef {
        let mut ty = self;
        while let TypeRef::Array(component) = ty {
            ty = component;
        }
        ty
    }

    /// Number of array dimensions, zero for non-arrays.
    pub fn dimensions(&self) -> usize {
        let mut dims = 0;
        let mut ty = self;
        while let TypeRef::Array(component) = ty {
            dims += 1;
            ty = component;
        }
        dims
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, TypeRef::Array(_))
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Primitive(Primitive::Void))
    }

    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            TypeRef::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassName> {
        match self {
            TypeRef::Class(name) => Some(name),
            _ => None,
        }
    }

    /// Whether this is the class type named `name`.
    pub fn is_class_named(&self, name: &str) -> bool {
        self.as_class().is_some_and(|class| class == name)
    }
}

impl From<Primitive> for TypeRef {
    fn from(primitive: Primitive) -> Self {
        TypeRef::Primitive(primitive)
    }
}

#[cfg(test)]
mod tests;
