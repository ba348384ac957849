//! Synthesized values.
//!
//! Values are plain data; objects live in a [`Heap`] owned by the caller
//! and are referenced by [`ObjectId`], so cyclic object graphs need no
//! shared ownership.

mod compat;
mod heap;

use refract_ir::{well_known, Primitive, TypeRef};

pub use compat::{boxed, is_compatible, is_compatible_all, is_value_like, is_value_like_array};
pub use heap::{Heap, Instance, ObjectId};

/// A synthesized value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Char(char),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(String),
    Array {
        component: TypeRef,
        elements: Vec<Value>,
    },
    List(Vec<Value>),
    Set(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Object(ObjectId),
}

impl Value {
    /// The zero value of a primitive; `void` has none.
    pub fn zero(primitive: Primitive) -> Option<Value> {
        Some(match primitive {
            Primitive::Void => return None,
            Primitive::Boolean => Value::Bool(false),
            Primitive::Char => Value::Char('\0'),
            Primitive::Byte => Value::Byte(0),
            Primitive::Short => Value::Short(0),
            Primitive::Int => Value::Int(0),
            Primitive::Long => Value::Long(0),
            Primitive::Float => Value::Float(0.0),
            Primitive::Double => Value::Double(0.0),
        })
    }

    /// An empty array of `component`.
    pub fn empty_array(component: TypeRef) -> Value {
        Value::Array {
            component,
            elements: Vec::new(),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The runtime class of this value; `None` for `Null` and dangling
    /// object ids.
    ///
    /// Primitive values report their boxed class, collections their
    /// default implementation class.
    pub fn runtime_type(&self, heap: &Heap) -> Option<TypeRef> {
        let boxed = |primitive: Primitive| Some(TypeRef::class(primitive.boxed()));
        match self {
            Value::Null => None,
            Value::Bool(_) => boxed(Primitive::Boolean),
            Value::Char(_) => boxed(Primitive::Char),
            Value::Byte(_) => boxed(Primitive::Byte),
            Value::Short(_) => boxed(Primitive::Short),
            Value::Int(_) => boxed(Primitive::Int),
            Value::Long(_) => boxed(Primitive::Long),
            Value::Float(_) => boxed(Primitive::Float),
            Value::Double(_) => boxed(Primitive::Double),
            Value::Str(_) => Some(TypeRef::class(well_known::STRING)),
            Value::Array { component, .. } => Some(TypeRef::array_of(component.clone())),
            Value::List(_) => Some(TypeRef::class(well_known::ARRAY_LIST)),
            Value::Set(_) => Some(TypeRef::class(well_known::HASH_SET)),
            Value::Map(_) => Some(TypeRef::class(well_known::HASH_MAP)),
            Value::Object(id) => heap
                .get(*id)
                .map(|instance| TypeRef::Class(instance.class.clone())),
        }
    }
}
