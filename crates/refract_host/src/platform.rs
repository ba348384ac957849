//! Platform classes preloaded by [`ClassPool::with_platform`].
//!
//! Only the shape the reflection layer depends on is modelled: the
//! hierarchy, constructors, and the handful of methods that bean and
//! resolver logic would otherwise trip over (`Object.getClass`, ...).
//!
//! [`ClassPool::with_platform`]: crate::ClassPool::with_platform

use refract_ir::well_known::{
    ABSTRACT_COLLECTION, ABSTRACT_LIST, ABSTRACT_MAP, ABSTRACT_SET, ARRAY_LIST, CHAR_SEQUENCE,
    CLONEABLE, COLLECTION, COMPARABLE, DATE, HASH_MAP, HASH_SET, ITERABLE, LIST, MAP, NUMBER,
    OBJECT, SERIALIZABLE, SET, STRING,
};
use refract_ir::{ClassBuilder, ClassInfo, GenericType, Modifiers, Primitive, TypeRef};

const ABSTRACT_METHOD: Modifiers = Modifiers::PUBLIC.union(Modifiers::ABSTRACT);

fn class(name: &str) -> TypeRef {
    TypeRef::class(name)
}

/// `raw<V1, V2, ..>` over type variables.
fn generic(raw: &str, vars: &[&str]) -> GenericType {
    GenericType::parameterized(
        raw,
        vars.iter()
            .map(|var| GenericType::Variable((*var).to_owned()))
            .collect(),
    )
}

/// `raw<arg>` over a concrete class.
fn generic_of(raw: &str, arg: &str) -> GenericType {
    GenericType::parameterized(raw, vec![GenericType::class(arg)])
}

pub(crate) fn classes() -> Vec<ClassInfo> {
    let mut classes = vec![
        object(),
        ClassBuilder::interface(SERIALIZABLE).build(),
        ClassBuilder::interface(CLONEABLE).build(),
        ClassBuilder::interface(COMPARABLE)
            .method_with("compareTo", vec![class(OBJECT)], TypeRef::INT, ABSTRACT_METHOD)
            .build(),
        ClassBuilder::interface(CHAR_SEQUENCE)
            .method_with("length", vec![], TypeRef::INT, ABSTRACT_METHOD)
            .method_with("charAt", vec![TypeRef::INT], TypeRef::CHAR, ABSTRACT_METHOD)
            .build(),
        string(),
        ClassInfo::builder(NUMBER)
            .modifiers(Modifiers::PUBLIC | Modifiers::ABSTRACT)
            .implements(SERIALIZABLE)
            .method_with("intValue", vec![], TypeRef::INT, ABSTRACT_METHOD)
            .method_with("longValue", vec![], TypeRef::LONG, ABSTRACT_METHOD)
            .method_with("doubleValue", vec![], TypeRef::DOUBLE, ABSTRACT_METHOD)
            .build(),
        date(),
    ];
    classes.extend(Primitive::ALL.into_iter().map(boxed));
    classes.extend(collections());
    classes
}

fn object() -> ClassInfo {
    ClassInfo::builder(OBJECT)
        .method("getClass", vec![], class("java.lang.Class"))
        .method("hashCode", vec![], TypeRef::INT)
        .method("equals", vec![class(OBJECT)], TypeRef::BOOLEAN)
        .method("toString", vec![], class(STRING))
        .build()
}

fn string() -> ClassInfo {
    ClassInfo::builder(STRING)
        .modifiers(Modifiers::PUBLIC | Modifiers::FINAL)
        .implements(SERIALIZABLE)
        .implements_generic(generic_of(COMPARABLE, STRING))
        .implements(CHAR_SEQUENCE)
        .constructor(vec![])
        .constructor(vec![class(STRING)])
        .method("length", vec![], TypeRef::INT)
        .method("isEmpty", vec![], TypeRef::BOOLEAN)
        .method("charAt", vec![TypeRef::INT], TypeRef::CHAR)
        .method("compareTo", vec![class(STRING)], TypeRef::INT)
        .build()
}

fn date() -> ClassInfo {
    ClassInfo::builder(DATE)
        .implements(SERIALIZABLE)
        .implements(CLONEABLE)
        .implements_generic(generic_of(COMPARABLE, DATE))
        .constructor(vec![])
        .constructor(vec![TypeRef::LONG])
        .method("getTime", vec![], TypeRef::LONG)
        .method("setTime", vec![TypeRef::LONG], TypeRef::VOID)
        .build()
}

/// The boxed counterpart of a primitive.
fn boxed(primitive: Primitive) -> ClassInfo {
    let name = primitive.boxed();
    let builder = ClassInfo::builder(name).modifiers(Modifiers::PUBLIC | Modifiers::FINAL);

    match primitive {
        // not instantiable from outside
        Primitive::Void => builder.constructor_with(vec![], Modifiers::PRIVATE).build(),
        Primitive::Boolean | Primitive::Char => builder
            .implements(SERIALIZABLE)
            .implements_generic(generic_of(COMPARABLE, name))
            .constructor(vec![TypeRef::Primitive(primitive)])
            .build(),
        _ => builder
            .extends(NUMBER)
            .implements_generic(generic_of(COMPARABLE, name))
            .constructor(vec![TypeRef::Primitive(primitive)])
            .constructor(vec![class(STRING)])
            .build(),
    }
}

fn collections() -> Vec<ClassInfo> {
    let abstract_class = Modifiers::PUBLIC | Modifiers::ABSTRACT;

    vec![
        ClassBuilder::interface(ITERABLE).build(),
        ClassBuilder::interface(COLLECTION)
            .implements_generic(generic(ITERABLE, &["E"]))
            .method_with("size", vec![], TypeRef::INT, ABSTRACT_METHOD)
            .method_with("isEmpty", vec![], TypeRef::BOOLEAN, ABSTRACT_METHOD)
            .method_with("add", vec![class(OBJECT)], TypeRef::BOOLEAN, ABSTRACT_METHOD)
            .build(),
        ClassBuilder::interface(LIST)
            .implements_generic(generic(COLLECTION, &["E"]))
            .method_with("get", vec![TypeRef::INT], class(OBJECT), ABSTRACT_METHOD)
            .build(),
        ClassBuilder::interface(SET)
            .implements_generic(generic(COLLECTION, &["E"]))
            .build(),
        ClassBuilder::interface(MAP)
            .method_with("size", vec![], TypeRef::INT, ABSTRACT_METHOD)
            .method_with("isEmpty", vec![], TypeRef::BOOLEAN, ABSTRACT_METHOD)
            .method_with("get", vec![class(OBJECT)], class(OBJECT), ABSTRACT_METHOD)
            .method_with(
                "put",
                vec![class(OBJECT), class(OBJECT)],
                class(OBJECT),
                ABSTRACT_METHOD,
            )
            .build(),
        ClassInfo::builder(ABSTRACT_COLLECTION)
            .modifiers(abstract_class)
            .implements_generic(generic(COLLECTION, &["E"]))
            .constructor_with(vec![], Modifiers::PROTECTED)
            .build(),
        ClassInfo::builder(ABSTRACT_LIST)
            .modifiers(abstract_class)
            .extends(ABSTRACT_COLLECTION)
            .implements_generic(generic(LIST, &["E"]))
            .constructor_with(vec![], Modifiers::PROTECTED)
            .build(),
        ClassInfo::builder(ARRAY_LIST)
            .extends(ABSTRACT_LIST)
            .implements_generic(generic(LIST, &["E"]))
            .implements(CLONEABLE)
            .implements(SERIALIZABLE)
            .constructor(vec![])
            .constructor(vec![TypeRef::INT])
            .constructor(vec![class(COLLECTION)])
            .method("size", vec![], TypeRef::INT)
            .method("isEmpty", vec![], TypeRef::BOOLEAN)
            .method("add", vec![class(OBJECT)], TypeRef::BOOLEAN)
            .method("get", vec![TypeRef::INT], class(OBJECT))
            .build(),
        ClassInfo::builder(ABSTRACT_SET)
            .modifiers(abstract_class)
            .extends(ABSTRACT_COLLECTION)
            .implements_generic(generic(SET, &["E"]))
            .constructor_with(vec![], Modifiers::PROTECTED)
            .build(),
        ClassInfo::builder(HASH_SET)
            .extends(ABSTRACT_SET)
            .implements_generic(generic(SET, &["E"]))
            .implements(CLONEABLE)
            .implements(SERIALIZABLE)
            .constructor(vec![])
            .constructor(vec![TypeRef::INT])
            .constructor(vec![class(COLLECTION)])
            .method("size", vec![], TypeRef::INT)
            .method("add", vec![class(OBJECT)], TypeRef::BOOLEAN)
            .build(),
        ClassInfo::builder(ABSTRACT_MAP)
            .modifiers(abstract_class)
            .implements_generic(generic(MAP, &["K", "V"]))
            .constructor_with(vec![], Modifiers::PROTECTED)
            .build(),
        ClassInfo::builder(HASH_MAP)
            .extends(ABSTRACT_MAP)
            .implements_generic(generic(MAP, &["K", "V"]))
            .implements(CLONEABLE)
            .implements(SERIALIZABLE)
            .constructor(vec![])
            .constructor(vec![TypeRef::INT])
            .constructor(vec![class(MAP)])
            .method("size", vec![], TypeRef::INT)
            .method("get", vec![class(OBJECT)], class(OBJECT))
            .method(
                "put",
                vec![class(OBJECT), class(OBJECT)],
                class(OBJECT),
            )
            .build(),
    ]
}
