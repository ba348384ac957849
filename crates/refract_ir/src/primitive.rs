//! Primitive value types and their three spellings.
//!
//! Every primitive has a descriptor letter (`I`), a source keyword (`int`)
//! and a boxed reference counterpart (`java.lang.Integer`).

use crate::well_known;

/// A primitive type, including `void`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    Void,
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
}

impl Primitive {
    /// All primitives in descriptor-letter order (`V Z B C D F I J S`).
    pub const ALL: [Primitive; 9] = [
        Primitive::Void,
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Char,
        Primitive::Double,
        Primitive::Float,
        Primitive::Int,
        Primitive::Long,
        Primitive::Short,
    ];

    /// Descriptor letter code.
    pub const fn descriptor(self) -> char {
        match self {
            Primitive::Void => 'V',
            Primitive::Boolean => 'Z',
            Primitive::Byte => 'B',
            Primitive::Char => 'C',
            Primitive::Double => 'D',
            Primitive::Float => 'F',
            Primitive::Int => 'I',
            Primitive::Long => 'J',
            Primitive::Short => 'S',
        }
    }

    pub const fn from_descriptor(code: char) -> Option<Self> {
        Some(match code {
            'V' => Primitive::Void,
            'Z' => Primitive::Boolean,
            'B' => Primitive::Byte,
            'C' => Primitive::Char,
            'D' => Primitive::Double,
            'F' => Primitive::Float,
            'I' => Primitive::Int,
            'J' => Primitive::Long,
            'S' => Primitive::Short,
            _ => return None,
        })
    }

    /// Source keyword (`int`, `boolean`, ...).
    pub const fn keyword(self) -> &'static str {
        match self {
            Primitive::Void => "void",
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Double => "double",
            Primitive::Float => "float",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Short => "short",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// Qualified name of the boxed reference type.
    pub const fn boxed(self) -> &'static str {
        match self {
            Primitive::Void => well_known::VOID,
            Primitive::Boolean => well_known::BOOLEAN,
            Primitive::Byte => well_known::BYTE,
            Primitive::Char => well_known::CHARACTER,
            Primitive::Double => well_known::DOUBLE,
            Primitive::Float => well_known::FLOAT,
            Primitive::Int => well_known::INTEGER,
            Primitive::Long => well_known::LONG,
            Primitive::Short => well_known::SHORT,
        }
    }

    /// The primitive a boxed class name unboxes to.
    pub fn from_boxed(class_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.boxed() == class_name)
    }
}
