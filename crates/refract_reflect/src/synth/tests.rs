#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use refract_host::{ClassPool, HostError};
use refract_ir::{ClassBuilder, Modifiers};

use crate::value::Instance;

fn string() -> TypeRef {
    TypeRef::class(well_known::STRING)
}

fn class(name: &str) -> TypeRef {
    TypeRef::class(name)
}

fn pool() -> ClassPool {
    let pool = ClassPool::with_platform();
    pool.register(
        ClassInfo::builder("com.acme.Profile")
            .field("active", TypeRef::BOOLEAN)
            .field("age", TypeRef::INT)
            .field("name", string())
            .field("tags", TypeRef::array_of(string()))
            .field("scores", TypeRef::array_of(TypeRef::INT))
            .field("friends", class(well_known::LIST))
            .field("labels", class(well_known::SET))
            .field("extra", class(well_known::MAP))
            .field("boxed", class(well_known::LONG))
            .field("shape", class("com.acme.Shape"))
            .field_with("cache", string(), Modifiers::PRIVATE | Modifiers::TRANSIENT)
            .build(),
    );
    pool.register(ClassBuilder::interface("com.acme.Shape").build());
    pool.register(
        ClassInfo::builder("com.acme.Node")
            .field("next", class("com.acme.Node"))
            .field("value", TypeRef::INT)
            .build(),
    );
    pool.register(ClassInfo::builder("com.acme.A").field("b", class("com.acme.B")).build());
    pool.register(ClassInfo::builder("com.acme.B").field("c", class("com.acme.C")).build());
    pool.register(ClassInfo::builder("com.acme.C").field("d", class("com.acme.D")).build());
    pool.register(ClassInfo::builder("com.acme.D").field("n", TypeRef::INT).build());
    pool.register(
        ClassInfo::builder("com.acme.Base")
            .modifiers(Modifiers::PUBLIC | Modifiers::ABSTRACT)
            .build(),
    );
    pool.register(
        ClassInfo::builder("com.acme.NeedsArg")
            .constructor(vec![TypeRef::INT])
            .build(),
    );
    pool.register(
        ClassInfo::builder("com.acme.Holder")
            .field("base", class("com.acme.Base"))
            .field("needs", class("com.acme.NeedsArg"))
            .field("missing", class("com.acme.Missing"))
            .field("id", TypeRef::LONG)
            .build(),
    );
    pool
}

fn synthesizer(pool: ClassPool) -> EmptyValueSynthesizer {
    EmptyValueSynthesizer::new(pool.into_shared(), SynthesisConfig::default())
}

fn object(result: &Synthesized) -> &Instance {
    match &result.value {
        Some(Value::Object(id)) => result.heap.get(*id).unwrap(),
        other => panic!("expected an object, got {other:?}"),
    }
}

#[test]
fn default_config() {
    assert_eq!(SynthesisConfig::default().max_depth, 2);
    assert_eq!(SynthesisConfig::default().with_max_depth(5).max_depth, 5);
}

#[test]
fn scalar_empty_values() {
    let synth = synthesizer(pool());
    let cases = [
        (TypeRef::BOOLEAN, Some(Value::Bool(false))),
        (TypeRef::CHAR, Some(Value::Char('\0'))),
        (TypeRef::BYTE, Some(Value::Byte(0))),
        (TypeRef::SHORT, Some(Value::Short(0))),
        (TypeRef::INT, Some(Value::Int(0))),
        (TypeRef::LONG, Some(Value::Long(0))),
        (TypeRef::FLOAT, Some(Value::Float(0.0))),
        (TypeRef::DOUBLE, Some(Value::Double(0.0))),
        (TypeRef::VOID, None),
        (class(well_known::INTEGER), Some(Value::Int(0))),
        (class(well_known::BOOLEAN), Some(Value::Bool(false))),
        (class(well_known::VOID), None),
        (string(), Some(Value::Str(String::new()))),
    ];
    for (ty, expected) in cases {
        assert_eq!(synth.synthesize(&ty).value, expected, "{ty:?}");
    }
}

#[test]
fn containers_are_empty() {
    let synth = synthesizer(pool());
    assert_eq!(
        synth.synthesize(&TypeRef::array(TypeRef::INT, 2)).value,
        Some(Value::empty_array(TypeRef::array_of(TypeRef::INT)))
    );
    assert_eq!(
        synth.synthesize(&class(well_known::LIST)).value,
        Some(Value::List(vec![]))
    );
    assert_eq!(
        synth.synthesize(&class(well_known::COLLECTION)).value,
        Some(Value::List(vec![]))
    );
    assert_eq!(
        synth.synthesize(&class(well_known::HASH_SET)).value,
        Some(Value::Set(vec![]))
    );
    assert_eq!(
        synth.synthesize(&class(well_known::MAP)).value,
        Some(Value::Map(vec![]))
    );
    // the root type can hold a list
    assert_eq!(
        synth.synthesize(&class(well_known::OBJECT)).value,
        Some(Value::List(vec![]))
    );
}

#[test]
fn bean_fields_get_empty_values() {
    let synth = synthesizer(pool());
    let result = synth.synthesize(&class("com.acme.Profile"));
    let profile = object(&result);

    assert_eq!(profile.class.as_str(), "com.acme.Profile");
    assert_eq!(profile.fields.get("active"), Some(&Value::Bool(false)));
    assert_eq!(profile.fields.get("age"), Some(&Value::Int(0)));
    assert_eq!(profile.fields.get("name"), Some(&Value::Str(String::new())));
    assert_eq!(
        profile.fields.get("tags"),
        Some(&Value::empty_array(string()))
    );
    assert_eq!(
        profile.fields.get("scores"),
        Some(&Value::empty_array(TypeRef::INT))
    );
    assert_eq!(profile.fields.get("friends"), Some(&Value::List(vec![])));
    assert_eq!(profile.fields.get("labels"), Some(&Value::Set(vec![])));
    assert_eq!(profile.fields.get("extra"), Some(&Value::Map(vec![])));
    assert_eq!(profile.fields.get("boxed"), Some(&Value::Long(0)));
    // interfaces and transient fields are left unset
    assert_eq!(profile.fields.get("shape"), None);
    assert_eq!(profile.fields.get("cache"), None);
}

#[test]
fn interfaces_and_unknown_classes_have_no_value() {
    let synth = synthesizer(pool());
    assert_eq!(synth.synthesize(&class("com.acme.Shape")).value, None);
    assert_eq!(synth.synthesize(&class("com.acme.Missing")).value, None);
}

#[test]
fn self_reference_terminates_on_one_instance() {
    let synth = synthesizer(pool());
    let result = synth.synthesize(&class("com.acme.Node"));

    let Some(Value::Object(id)) = result.value else {
        panic!("expected an object");
    };
    assert_eq!(result.heap.len(), 1);
    let node = result.heap.get(id).unwrap();
    assert_eq!(node.fields.get("next"), Some(&Value::Object(id)));
    assert_eq!(node.fields.get("value"), Some(&Value::Int(0)));
}

#[test]
fn depth_cap_leaves_deep_fields_absent() {
    let synth = synthesizer(pool());
    let result = synth.synthesize(&class("com.acme.A"));
    let heap = &result.heap;

    let a = object(&result);
    let Some(Value::Object(b)) = a.fields.get("b") else {
        panic!("level 1 present");
    };
    let b = heap.get(*b).unwrap();
    let Some(Value::Object(c)) = b.fields.get("c") else {
        panic!("level 2 present");
    };
    let c = heap.get(*c).unwrap();
    assert_eq!(c.class.as_str(), "com.acme.C");
    assert_eq!(c.fields.get("d"), None);
    assert_eq!(heap.len(), 3);
}

#[test]
fn deeper_config_reaches_further() {
    let synth = EmptyValueSynthesizer::new(
        pool().into_shared(),
        SynthesisConfig::default().with_max_depth(4),
    );
    let result = synth.synthesize(&class("com.acme.A"));
    assert_eq!(result.heap.len(), 4);
}

#[test]
fn zero_depth_still_yields_top_level() {
    let synth = EmptyValueSynthesizer::new(
        pool().into_shared(),
        SynthesisConfig::default().with_max_depth(0),
    );
    let result = synth.synthesize(&class("com.acme.Node"));
    assert!(object(&result).fields.is_empty());
}

#[test]
fn uninstantiable_field_types_are_skipped() {
    let synth = synthesizer(pool());
    let result = synth.synthesize(&class("com.acme.Holder"));
    let holder = object(&result);

    assert_eq!(holder.fields.get("base"), None);
    assert_eq!(holder.fields.get("needs"), None);
    assert_eq!(holder.fields.get("missing"), None);
    assert_eq!(holder.fields.get("id"), Some(&Value::Long(0)));
}

#[test]
fn uninstantiable_top_level_types() {
    let synth = synthesizer(pool());
    for name in ["com.acme.Base", "com.acme.NeedsArg"] {
        assert_eq!(synth.synthesize(&class(name)).value, None, "{name}");
    }
    let color = ClassInfo::builder("com.acme.Color")
        .modifiers(Modifiers::PUBLIC | Modifiers::FINAL | Modifiers::ENUM)
        .build();
    let pool = pool();
    pool.register(color);
    assert_eq!(
        synthesizer(pool).synthesize(&class("com.acme.Color")).value,
        None
    );
}

/// Refuses to open the fields of `com.acme.D`.
struct Guarded {
    pool: ClassPool,
}

impl ClassSource for Guarded {
    fn find_class(&self, name: &str) -> Option<Arc<ClassInfo>> {
        self.pool.find_class(name)
    }

    fn make_accessible(&self, member: Member<'_>) -> Result<(), HostError> {
        if matches!(member, Member::Field(_)) && member.declaring() == "com.acme.D" {
            return Err(HostError::AccessDenied {
                owner: member.declaring().clone(),
                member: member.name().to_owned(),
            });
        }
        Ok(())
    }
}

#[test]
fn access_failure_drops_only_that_branch() {
    let synth = EmptyValueSynthesizer::new(
        Arc::new(Guarded { pool: pool() }),
        SynthesisConfig::default().with_max_depth(4),
    );

    let result = synth.synthesize(&class("com.acme.D"));
    assert_eq!(result.value, None);

    let result = synth.synthesize(&class("com.acme.A"));
    assert!(result.value.is_some());
    // A, B, C, plus the abandoned D
    assert_eq!(result.heap.len(), 4);
}

#[test]
fn memo_is_per_call() {
    let synth = synthesizer(pool());
    let first = synth.synthesize(&class("com.acme.Node"));
    let second = synth.synthesize(&class("com.acme.Node"));
    assert_eq!(first.heap.len(), 1);
    assert_eq!(second.heap.len(), 1);
}

#[test]
fn synthesize_by_name() {
    let synth = synthesizer(pool());
    let result = synth.synthesize_named("int[]").unwrap();
    assert_eq!(result.value, Some(Value::empty_array(TypeRef::INT)));
    assert_eq!(result.render(), "int[0]");

    assert!(matches!(
        synth.synthesize_named("com.acme.Nope"),
        Err(ReflectError::UnknownType { .. })
    ));
}

#[test]
fn render_object_graph() {
    let synth = synthesizer(pool());
    let result = synth.synthesize(&class("com.acme.Node"));
    assert_eq!(result.render(), "Node #0 { next: #0, value: 0 }");
    assert_eq!(synth.synthesize(&TypeRef::VOID).render(), "null");
}
