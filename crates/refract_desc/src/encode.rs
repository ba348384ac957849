//! Type to descriptor, human name and binary name.

use refract_ir::TypeRef;

/// Encode a type as a descriptor.
///
/// One `[` per array dimension, then the primitive letter or
/// `L<slash/separated/name>;`.
pub fn encode(ty: &TypeRef) -> String {
    let mut out = String::new();
    encode_into(&mut out, ty);
    out
}

/// Concatenate the descriptors of `types` with no separator.
///
/// `[int, boolean[], java.lang.Object]` encodes as `I[ZLjava/lang/Object;`.
pub fn encode_all<'a>(types: impl IntoIterator<Item = &'a TypeRef>) -> String {
    let mut out = String::new();
    for ty in types {
        encode_into(&mut out, ty);
    }
    out
}

pub(crate) fn encode_into(out: &mut String, ty: &TypeRef) {
    push_brackets(out, ty.dimensions());
    match ty.base() {
        TypeRef::Primitive(primitive) => out.push(primitive.descriptor()),
        TypeRef::Class(name) => {
            out.push('L');
            out.extend(name.as_str().chars().map(|c| if c == '.' { '/' } else { c }));
            out.push(';');
        }
        // `base` never returns an array
        TypeRef::Array(_) => {}
    }
}

/// The dotted human name, with `[]` per array dimension.
///
/// `int`, `java.lang.String`, `java.util.Map[][]`.
pub fn human_name(ty: &TypeRef) -> String {
    let mut out = base_name(ty.base()).to_owned();
    for _ in 0..ty.dimensions() {
        out.push_str("[]");
    }
    out
}

/// The host binary name used in signature keys.
///
/// Non-arrays use their plain name (`int`, `java.lang.String`); arrays use
/// the descriptor form with dotted class names (`[I`,
/// `[[Ljava.lang.String;`).
pub fn binary_name(ty: &TypeRef) -> String {
    if !ty.is_array() {
        return base_name(ty).to_owned();
    }

    let mut out = String::new();
    push_brackets(&mut out, ty.dimensions());
    match ty.base() {
        TypeRef::Primitive(primitive) => out.push(primitive.descriptor()),
        TypeRef::Class(name) => {
            out.push('L');
            out.push_str(name.as_str());
            out.push(';');
        }
        TypeRef::Array(_) => {}
    }
    out
}

fn base_name(ty: &TypeRef) -> &str {
    match ty {
        TypeRef::Primitive(primitive) => primitive.keyword(),
        TypeRef::Class(name) => name.as_str(),
        TypeRef::Array(_) => "",
    }
}

fn push_brackets(out: &mut String, dimensions: usize) {
    out.push_str(&"[".repeat(dimensions));
}

#[cfg(test)]
mod tests;
