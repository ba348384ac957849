//! Descriptor to type.

use refract_ir::TypeRef;

use crate::cursor::Cursor;
use crate::{human_name, DescError};

/// Parse a complete descriptor into a type identity.
pub fn parse(descriptor: &str) -> Result<TypeRef, DescError> {
    let mut cursor = Cursor::new(descriptor);
    let ty = cursor.parse_type()?;
    cursor.finish()?;
    Ok(ty)
}

/// Decode a descriptor into its human name.
///
/// `[[Ljava/lang/String;` becomes `java.lang.String[][]`, `I` becomes `int`.
pub fn decode(descriptor: &str) -> Result<String, DescError> {
    parse(descriptor).map(|ty| human_name(&ty))
}

/// Whether `s` is exactly one well-formed descriptor.
pub fn is_descriptor(s: &str) -> bool {
    parse(s).is_ok()
}
