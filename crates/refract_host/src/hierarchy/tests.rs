#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::ClassPool;
use pretty_assertions::assert_eq;
use refract_ir::{ClassBuilder, GenericType, Modifiers};

fn pool() -> ClassPool {
    let pool = ClassPool::with_platform();
    pool.register(
        ClassBuilder::interface("com.acme.Named")
            .method_with(
                "getName",
                vec![],
                TypeRef::class(well_known::STRING),
                Modifiers::PUBLIC | Modifiers::ABSTRACT,
            )
            .build(),
    );
    pool.register(
        ClassInfo::builder("com.acme.Base")
            .implements_generic(GenericType::parameterized(
                well_known::COMPARABLE,
                vec![GenericType::class("com.acme.Base")],
            ))
            .method("getName", vec![], TypeRef::class(well_known::STRING))
            .method("toString", vec![], TypeRef::class(well_known::STRING))
            .build(),
    );
    pool.register(
        ClassInfo::builder("com.acme.Derived")
            .extends("com.acme.Base")
            .implements("com.acme.Named")
            .method("getName", vec![], TypeRef::class(well_known::STRING))
            .method_with("secret", vec![], TypeRef::VOID, Modifiers::PRIVATE)
            .build(),
    );
    pool
}

fn names(classes: &[Arc<ClassInfo>]) -> Vec<&str> {
    classes.iter().map(|class| class.name.as_str()).collect()
}

#[test]
fn chain_runs_to_root() {
    let pool = pool();
    let derived = pool.get("com.acme.Derived").unwrap();
    assert_eq!(
        names(&superclass_chain(&pool, &derived)),
        ["com.acme.Derived", "com.acme.Base", well_known::OBJECT]
    );
}

#[test]
fn chain_stops_at_missing_ancestor() {
    let pool = ClassPool::new();
    let orphan = pool.register(
        ClassInfo::builder("com.acme.Orphan")
            .extends("gone.Parent")
            .build(),
    );
    assert_eq!(names(&superclass_chain(&pool, &orphan)), ["com.acme.Orphan"]);
}

#[test]
fn supertypes_are_breadth_first_and_unique() {
    let pool = pool();
    let derived = pool.get("com.acme.Derived").unwrap();
    assert_eq!(
        names(&supertypes(&pool, &derived)),
        [
            "com.acme.Derived",
            "com.acme.Base",
            "com.acme.Named",
            well_known::OBJECT,
            well_known::COMPARABLE,
        ]
    );
}

#[test]
fn assignability() {
    let pool = pool();
    let derived = TypeRef::class("com.acme.Derived");
    let base = TypeRef::class("com.acme.Base");
    let object = TypeRef::class(well_known::OBJECT);

    assert!(is_assignable(&pool, &base, &derived));
    assert!(!is_assignable(&pool, &derived, &base));
    assert!(is_assignable(&pool, &TypeRef::class("com.acme.Named"), &derived));
    assert!(is_assignable(&pool, &TypeRef::class(well_known::COMPARABLE), &derived));
    assert!(is_assignable(&pool, &object, &derived));
    assert!(is_assignable(&pool, &TypeRef::INT, &TypeRef::INT));
    assert!(!is_assignable(&pool, &TypeRef::LONG, &TypeRef::INT));
    assert!(!is_assignable(&pool, &object, &TypeRef::INT));
    assert!(!is_assignable(
        &pool,
        &TypeRef::class(well_known::INTEGER),
        &TypeRef::INT
    ));
}

#[test]
fn array_assignability() {
    let pool = pool();
    let ints = TypeRef::array_of(TypeRef::INT);
    let longs = TypeRef::array_of(TypeRef::LONG);
    let derived_array = TypeRef::array_of(TypeRef::class("com.acme.Derived"));
    let base_array = TypeRef::array_of(TypeRef::class("com.acme.Base"));

    assert!(is_assignable(&pool, &TypeRef::class(well_known::OBJECT), &ints));
    assert!(is_assignable(&pool, &TypeRef::class(well_known::CLONEABLE), &ints));
    assert!(is_assignable(&pool, &TypeRef::class(well_known::SERIALIZABLE), &ints));
    assert!(!is_assignable(&pool, &TypeRef::class(well_known::STRING), &ints));
    assert!(!is_assignable(&pool, &longs, &ints));
    assert!(is_assignable(&pool, &base_array, &derived_array));
    assert!(!is_assignable(&pool, &derived_array, &base_array));
    assert!(!is_assignable(&pool, &ints, &TypeRef::class(well_known::OBJECT)));
    assert!(is_assignable(
        &pool,
        &TypeRef::array_of(TypeRef::class(well_known::OBJECT)),
        &TypeRef::array(TypeRef::INT, 2)
    ));
}

#[test]
fn unknown_classes_are_not_assignable() {
    let pool = pool();
    assert!(!is_assignable(
        &pool,
        &TypeRef::class("com.acme.Base"),
        &TypeRef::class("com.acme.Missing")
    ));
}

#[test]
fn collections_are_assignable_to_their_interfaces() {
    let pool = ClassPool::with_platform();
    let list = TypeRef::class(well_known::ARRAY_LIST);
    for target in [
        well_known::LIST,
        well_known::COLLECTION,
        well_known::ITERABLE,
        well_known::ABSTRACT_LIST,
        well_known::SERIALIZABLE,
    ] {
        assert!(is_assignable(&pool, &TypeRef::class(target), &list), "{target}");
    }
    assert!(!is_assignable(
        &pool,
        &TypeRef::class(well_known::SET),
        &list
    ));
    assert!(is_assignable(
        &pool,
        &TypeRef::class(well_known::MAP),
        &TypeRef::class(well_known::HASH_MAP)
    ));
}

#[test]
fn interface_search_skips_root() {
    let pool = pool();
    let derived = pool.get("com.acme.Derived").unwrap();
    assert!(implements_interface_named(&pool, &derived, "com.acme.Named"));
    assert!(implements_interface_named(&pool, &derived, well_known::COMPARABLE));
    assert!(!implements_interface_named(&pool, &derived, well_known::SERIALIZABLE));
}

#[test]
fn public_methods_prefer_most_derived() {
    let pool = pool();
    let derived = pool.get("com.acme.Derived").unwrap();
    let methods = public_methods(&pool, &derived);

    let get_name: Vec<_> = methods.iter().filter(|m| m.name == "getName").collect();
    assert_eq!(get_name.len(), 1);
    assert_eq!(get_name[0].declaring.as_str(), "com.acme.Derived");

    let to_string: Vec<_> = methods.iter().filter(|m| m.name == "toString").collect();
    assert_eq!(to_string.len(), 1);
    assert_eq!(to_string[0].declaring.as_str(), "com.acme.Base");

    assert!(methods.iter().all(|m| m.name != "secret"));
    assert!(methods.iter().any(|m| m.name == "hashCode"));
}

#[test]
fn narrower_override_hides_inherited_method_but_overloads_stay() {
    let pool = ClassPool::with_platform();
    pool.register(
        ClassInfo::builder("com.acme.Shape")
            .method("copy", vec![], TypeRef::class(well_known::OBJECT))
            .build(),
    );
    let square = pool.register(
        ClassInfo::builder("com.acme.Square")
            .extends("com.acme.Shape")
            .method("copy", vec![], TypeRef::class("com.acme.Square"))
            .method("copy", vec![TypeRef::INT], TypeRef::class("com.acme.Square"))
            .build(),
    );

    let copies: Vec<_> = public_methods(&pool, &square)
        .into_iter()
        .filter(|m| m.name == "copy")
        .collect();
    assert_eq!(copies.len(), 2);
    assert!(copies.iter().all(|m| m.declaring.as_str() == "com.acme.Square"));
    assert!(copies[0].same_signature(&square.methods[0]));
    assert!(!copies[0].same_signature(&copies[1]));
}

#[test]
fn only_public_constructors_are_listed() {
    let class = ClassInfo::builder("com.acme.Guarded")
        .constructor(vec![TypeRef::INT])
        .constructor_with(vec![], Modifiers::PRIVATE)
        .build();
    let ctors: Vec<_> = public_constructors(&class).collect();
    assert_eq!(ctors.len(), 1);
    assert_eq!(ctors[0].params, vec![TypeRef::INT]);
}
