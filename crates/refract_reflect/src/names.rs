//! Type name resolution against a class source.

use refract_desc::{parse, parse_name};
use refract_host::ClassSource;
use refract_ir::{well_known, TypeRef};

use crate::ReflectError;

/// Resolve a type name to a type identity.
///
/// Accepts primitive keywords (`int`), human array names (`int[][]`,
/// `java.lang.String[]`), host binary array names (`[I`,
/// `[Ljava.lang.String;`) and class names. Class names must exist in
/// `source`; an unqualified name that is not found is retried in
/// `java.lang`.
pub fn resolve_type_name(source: &dyn ClassSource, name: &str) -> Result<TypeRef, ReflectError> {
    let parsed = if name.starts_with('[') {
        parse(&name.replace('.', "/"))
    } else {
        parse_name(name)
    };
    let ty = parsed.map_err(|_| ReflectError::unknown_type(name))?;

    let dimensions = ty.dimensions();
    match ty.base() {
        TypeRef::Class(class) if source.find_class(class.as_str()).is_none() => {
            if class.package().is_none() {
                let qualified = format!("{}.{class}", well_known::LANG_PACKAGE);
                if source.find_class(&qualified).is_some() {
                    return Ok(TypeRef::array(TypeRef::class(qualified), dimensions));
                }
            }
            Err(ReflectError::unknown_type(name))
        }
        _ => Ok(ty),
    }
}
