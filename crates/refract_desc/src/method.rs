//! Method and constructor descriptors.

use refract_ir::{ConstructorInfo, MethodInfo, TypeRef};

use crate::cursor::Cursor;
use crate::encode::encode_into;
use crate::ident::is_identifier;
use crate::DescError;

/// A parsed `ident? '(' desc* ')' desc?` descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: Option<String>,
    pub params: Vec<TypeRef>,
    pub return_type: Option<TypeRef>,
}

/// `name(params)return`, e.g. `do(I)I`.
pub fn method_descriptor(method: &MethodInfo) -> String {
    let mut out = method.name.clone();
    push_signature(&mut out, &method.params, &method.return_type);
    out
}

/// `(params)return`, e.g. `(I)I`.
pub fn method_descriptor_without_name(method: &MethodInfo) -> String {
    let mut out = String::new();
    push_signature(&mut out, &method.params, &method.return_type);
    out
}

/// `(params)V`; constructors always return void.
pub fn constructor_descriptor(ctor: &ConstructorInfo) -> String {
    let mut out = String::new();
    push_signature(&mut out, &ctor.params, &TypeRef::VOID);
    out
}

fn push_signature(out: &mut String, params: &[TypeRef], return_type: &TypeRef) {
    out.push('(');
    for param in params {
        encode_into(out, param);
    }
    out.push(')');
    encode_into(out, return_type);
}

/// Parse a method descriptor with optional name and return type.
///
/// `do(I)I`, `(Ljava/lang/String;)V` and `(IJ)` are all accepted.
pub fn parse_method_descriptor(input: &str) -> Result<MethodDescriptor, DescError> {
    let mut cursor = Cursor::new(input);

    let name = cursor.take_until(b'(');
    if cursor.is_at_end() {
        return Err(cursor.error("missing parameter list"));
    }
    let name = match name {
        "" => None,
        name if is_identifier(name) => Some(name.to_owned()),
        _ => return Err(DescError::descriptor(input, 0, "invalid method name")),
    };

    cursor.expect(b'(', "missing parameter list")?;
    let mut params = Vec::new();
    loop {
        match cursor.peek() {
            Some(b')') => break,
            None => return Err(cursor.error("unterminated parameter list")),
            Some(_) => params.push(cursor.parse_type()?),
        }
    }
    cursor.expect(b')', "unterminated parameter list")?;

    let return_type = if cursor.is_at_end() {
        None
    } else {
        Some(cursor.parse_type()?)
    };
    cursor.finish()?;

    Ok(MethodDescriptor {
        name,
        params,
        return_type,
    })
}
