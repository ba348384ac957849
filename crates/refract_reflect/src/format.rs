//! Member signature formatting.
//!
//! Two spellings are produced:
//! - display strings with human names (`int do(java.lang.String,boolean)`)
//! - signature keys with binary names (`do([I,java.lang.String)`), the
//!   identity used by the resolver cache

use refract_desc::{binary_name, human_name};
use refract_ir::{ConstructorInfo, MethodInfo, TypeRef};

/// `<return> <name>(<param>,...)` using human names.
pub fn method_display(method: &MethodInfo) -> String {
    format!(
        "{} {}{}",
        human_name(&method.return_type),
        method.name,
        param_list(&method.params)
    )
}

/// `(<param>,...)` using human names.
pub fn constructor_display(ctor: &ConstructorInfo) -> String {
    param_list(&ctor.params)
}

fn param_list(params: &[TypeRef]) -> String {
    let names: Vec<String> = params.iter().map(human_name).collect();
    format!("({})", names.join(","))
}

/// `name(p1,p2)`.
///
/// Parentheses and the comma separator keep keys distinct for distinct
/// `(name, parameter list)` pairs.
pub fn signature_key<S: AsRef<str>>(method_name: &str, param_type_names: &[S]) -> String {
    let mut key = String::with_capacity(method_name.len() + 2);
    key.push_str(method_name);
    key.push('(');
    for (i, param) in param_type_names.iter().enumerate() {
        if i > 0 {
            key.push(',');
        }
        key.push_str(param.as_ref());
    }
    key.push(')');
    key
}

/// The signature key for `types`, spelled with binary names.
pub fn signature_of(method_name: &str, types: &[TypeRef]) -> String {
    let names: Vec<String> = types.iter().map(binary_name).collect();
    signature_key(method_name, &names)
}
