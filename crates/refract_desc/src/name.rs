//! Human name to type.

use refract_ir::{ClassName, Primitive, TypeRef};

use crate::encode::encode;
use crate::ident::is_qualified;
use crate::{DescError, MAX_ARRAY_DIMENSIONS};

/// Parse a human type name (`int`, `java.util.Map[][]`).
///
/// Accepts a primitive keyword or a dotted qualified name followed by up to
/// [`MAX_ARRAY_DIMENSIONS`] `[]` pairs. No whitespace is allowed anywhere.
pub fn parse_name(name: &str) -> Result<TypeRef, DescError> {
    let mut base = name;
    let mut dimensions = 0;
    while let Some(rest) = base.strip_suffix("[]") {
        if dimensions == MAX_ARRAY_DIMENSIONS {
            return Err(DescError::name(name, "too many array dimensions"));
        }
        base = rest;
        dimensions += 1;
    }

    if base.is_empty() {
        return Err(DescError::name(name, "missing base type"));
    }

    let base = match Primitive::from_keyword(base) {
        Some(primitive) => TypeRef::Primitive(primitive),
        None if is_qualified(base, '.') => TypeRef::Class(ClassName::new(base)),
        None if base.contains(['[', ']']) => {
            return Err(DescError::name(name, "unbalanced array brackets"))
        }
        None => return Err(DescError::name(name, "invalid identifier")),
    };

    Ok(TypeRef::array(base, dimensions))
}

/// Convert a human type name straight to its descriptor.
///
/// `java.util.Map[][]` becomes `[[Ljava/util/Map;`.
pub fn name_to_desc(name: &str) -> Result<String, DescError> {
    parse_name(name).map(|ty| encode(&ty))
}
