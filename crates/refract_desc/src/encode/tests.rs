use super::*;
use pretty_assertions::assert_eq;

fn string() -> TypeRef {
    TypeRef::class("java.lang.String")
}

#[test]
fn encodes_primitives_and_classes() {
    assert_eq!(encode(&TypeRef::INT), "I");
    assert_eq!(encode(&TypeRef::LONG), "J");
    assert_eq!(encode(&TypeRef::VOID), "V");
    assert_eq!(encode(&string()), "Ljava/lang/String;");
}

#[test]
fn three_dimensional_reference_array() {
    let ty = TypeRef::array(TypeRef::class("java.util.Map"), 3);
    assert_eq!(encode(&ty), "[[[Ljava/util/Map;");
}

#[test]
fn encode_all_concatenates() {
    let types = [
        TypeRef::INT,
        TypeRef::array_of(TypeRef::BOOLEAN),
        TypeRef::class("java.lang.Object"),
    ];
    assert_eq!(encode_all(&types), "I[ZLjava/lang/Object;");
    let none: [TypeRef; 0] = [];
    assert_eq!(encode_all(&none), "");
}

#[test]
fn human_names() {
    assert_eq!(human_name(&TypeRef::BOOLEAN), "boolean");
    assert_eq!(human_name(&TypeRef::array(TypeRef::INT, 2)), "int[][]");
    assert_eq!(
        human_name(&TypeRef::array_of(string())),
        "java.lang.String[]"
    );
}

#[test]
fn binary_names() {
    assert_eq!(binary_name(&TypeRef::INT), "int");
    assert_eq!(binary_name(&string()), "java.lang.String");
    assert_eq!(binary_name(&TypeRef::array_of(TypeRef::INT)), "[I");
    assert_eq!(
        binary_name(&TypeRef::array(string(), 2)),
        "[[Ljava.lang.String;"
    );
}
