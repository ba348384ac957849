//! Generic argument extraction.
//!
//! Reads the type arguments of the first interface a class declares, so a
//! `class UserDao implements Dao<User>` can report `User`.

use refract_ir::{ClassInfo, GenericType, TypeRef};

use crate::{GenericShapeError, ReflectError};

/// The concrete type bound to argument 0 of the first declared interface.
pub fn first_generic_argument(class: &ClassInfo) -> Result<TypeRef, ReflectError> {
    generic_argument(class, 0)
}

/// The concrete type bound to argument `index` of the first declared
/// interface.
///
/// A parameterized argument reduces to its raw class, a generic array to its
/// component when that component is concrete, and a concrete type to
/// itself. Type variables and wildcards have no concrete binding.
pub fn generic_argument(class: &ClassInfo, index: usize) -> Result<TypeRef, ReflectError> {
    argument_shape(class, index).map_err(|source| ReflectError::UnsupportedGenericShape {
        class: class.name.clone(),
        index,
        source,
    })
}

fn argument_shape(class: &ClassInfo, index: usize) -> Result<TypeRef, GenericShapeError> {
    let first = class
        .interfaces
        .first()
        .ok_or(GenericShapeError::NoInterfaces)?;

    let GenericType::Parameterized { args, .. } = first else {
        return Err(GenericShapeError::NotParameterized);
    };

    let arg = args
        .get(index)
        .ok_or(GenericShapeError::IndexOutOfRange { len: args.len() })?;

    match arg {
        GenericType::Type(ty) => Ok(ty.clone()),
        GenericType::Parameterized { raw, .. } => Ok(TypeRef::Class(raw.clone())),
        GenericType::Array(component) => match component.as_ref() {
            GenericType::Type(ty) => Ok(ty.clone()),
            _ => Err(GenericShapeError::GenericArray),
        },
        GenericType::Variable(name) => Err(GenericShapeError::TypeVariable(name.clone())),
        GenericType::Wildcard => Err(GenericShapeError::Wildcard),
    }
}
