//! Reflection errors.

use refract_desc::DescError;
use refract_host::HostError;
use refract_ir::ClassName;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReflectError {
    #[error(transparent)]
    MalformedDescriptor(#[from] DescError),

    #[error("unknown type `{name}`")]
    UnknownType { name: String },

    #[error("no public member `{name}` on `{class}`")]
    NoSuchMember { class: ClassName, name: String },

    #[error("{count} public members match `{name}` on `{class}`")]
    AmbiguousMember {
        class: ClassName,
        name: String,
        count: usize,
    },

    #[error("cannot extract generic argument {index} of `{class}`")]
    UnsupportedGenericShape {
        class: ClassName,
        index: usize,
        source: GenericShapeError,
    },

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("value is not compatible with `{class}.{field}` of type `{expected}`")]
    IncompatibleValue {
        class: ClassName,
        field: String,
        expected: String,
    },

    #[error("`{class}` cannot be instantiated: {reason}")]
    NotInstantiable {
        class: ClassName,
        reason: &'static str,
    },
}

impl ReflectError {
    pub(crate) fn unknown_type(name: &str) -> Self {
        ReflectError::UnknownType {
            name: name.to_owned(),
        }
    }
}

/// Why a generic argument could not be reduced to a concrete type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenericShapeError {
    #[error("class declares no interfaces")]
    NoInterfaces,
    #[error("first interface is not parameterized")]
    NotParameterized,
    #[error("index out of range for {len} type arguments")]
    IndexOutOfRange { len: usize },
    #[error("type variable `{0}` has no concrete binding")]
    TypeVariable(String),
    #[error("wildcard has no concrete binding")]
    Wildcard,
    #[error("generic array component is not concrete")]
    GenericArray,
}
