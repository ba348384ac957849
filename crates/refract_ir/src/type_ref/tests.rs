use super::*;
use pretty_assertions::assert_eq;

#[test]
fn array_chain_counts_dimensions() {
    let ty = TypeRef::array(TypeRef::class("java.lang.String"), 3);

    assert_eq!(ty.dimensions(), 3);
    assert_eq!(ty.base(), &TypeRef::class("java.lang.String"));
    assert_eq!(
        ty.component(),
        Some(&TypeRef::array(TypeRef::class("java.lang.String"), 2))
    );
}

#[test]
fn zero_dimensions_is_the_base_type() {
    assert_eq!(TypeRef::array(TypeRef::INT, 0), TypeRef::INT);
    assert_eq!(TypeRef::INT.dimensions(), 0);
    assert_eq!(TypeRef::INT.component(), None);
}

#[test]
fn classification() {
    assert!(TypeRef::VOID.is_void());
    assert!(TypeRef::LONG.is_primitive());
    assert!(!TypeRef::array_of(TypeRef::LONG).is_primitive());
    assert!(TypeRef::array_of(TypeRef::LONG).is_array());
    assert_eq!(TypeRef::CHAR.as_primitive(), Some(Primitive::Char));
    assert!(TypeRef::class("java.util.List").is_class_named("java.util.List"));
    assert!(!TypeRef::class("java.util.List").is_class_named("java.util.Set"));
}

#[test]
fn primitive_spellings_agree() {
    for p in Primitive::ALL {
        assert_eq!(Primitive::from_descriptor(p.descriptor()), Some(p));
        assert_eq!(Primitive::from_keyword(p.keyword()), Some(p));
        assert_eq!(Primitive::from_boxed(p.boxed()), Some(p));
    }
    assert_eq!(Primitive::from_descriptor('L'), None);
    assert_eq!(Primitive::from_keyword("integer"), None);
}
