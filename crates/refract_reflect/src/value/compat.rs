//! Value-likeness and value/type compatibility.

use refract_host::hierarchy::is_assignable;
use refract_host::ClassSource;
use refract_ir::{well_known, TypeRef};

use super::{Heap, Value};

/// The boxed class of a primitive; other types are returned unchanged.
pub fn boxed(ty: &TypeRef) -> TypeRef {
    match ty {
        TypeRef::Primitive(primitive) => TypeRef::class(primitive.boxed()),
        _ => ty.clone(),
    }
}

/// Whether `ty` is a scalar, value-like type: a primitive, `String`,
/// `Boolean`, `Character`, or a subtype of `Number` or `Date`.
pub fn is_value_like(source: &dyn ClassSource, ty: &TypeRef) -> bool {
    match ty {
        TypeRef::Primitive(_) => true,
        TypeRef::Array(_) => false,
        TypeRef::Class(name) => {
            name == well_known::STRING
                || name == well_known::BOOLEAN
                || name == well_known::CHARACTER
                || is_assignable(source, &TypeRef::class(well_known::NUMBER), ty)
                || is_assignable(source, &TypeRef::class(well_known::DATE), ty)
        }
    }
}

/// [`is_value_like`] applied to the component of an array type, or to the
/// type itself when it is not an array.
pub fn is_value_like_array(source: &dyn ClassSource, ty: &TypeRef) -> bool {
    is_value_like(source, ty.component().unwrap_or(ty))
}

/// Whether `value` may be stored in a slot of type `ty`.
///
/// `Null` fits every reference type and no primitive. Other values are
/// checked by their runtime class against the boxed slot type.
pub fn is_compatible(source: &dyn ClassSource, heap: &Heap, ty: &TypeRef, value: &Value) -> bool {
    if value.is_null() {
        return !ty.is_primitive();
    }
    value
        .runtime_type(heap)
        .is_some_and(|runtime| is_assignable(source, &boxed(ty), &runtime))
}

/// Pairwise [`is_compatible`]; lengths must match.
pub fn is_compatible_all(
    source: &dyn ClassSource,
    heap: &Heap,
    types: &[TypeRef],
    values: &[Value],
) -> bool {
    types.len() == values.len()
        && types
            .iter()
            .zip(values)
            .all(|(ty, value)| is_compatible(source, heap, ty, value))
}
