//! Qualified names of platform types the library treats specially.

/// Package searched for unqualified type names.
pub const LANG_PACKAGE: &str = "java.lang";

/// Root of every class hierarchy.
pub const OBJECT: &str = "java.lang.Object";
pub const STRING: &str = "java.lang.String";
pub const CHAR_SEQUENCE: &str = "java.lang.CharSequence";
pub const COMPARABLE: &str = "java.lang.Comparable";
pub const NUMBER: &str = "java.lang.Number";
pub const CLONEABLE: &str = "java.lang.Cloneable";
pub const SERIALIZABLE: &str = "java.io.Serializable";
pub const DATE: &str = "java.util.Date";

// Boxed primitives
pub const VOID: &str = "java.lang.Void";
pub const BOOLEAN: &str = "java.lang.Boolean";
pub const BYTE: &str = "java.lang.Byte";
pub const CHARACTER: &str = "java.lang.Character";
pub const DOUBLE: &str = "java.lang.Double";
pub const FLOAT: &str = "java.lang.Float";
pub const INTEGER: &str = "java.lang.Integer";
pub const LONG: &str = "java.lang.Long";
pub const SHORT: &str = "java.lang.Short";

// Collections
pub const ITERABLE: &str = "java.lang.Iterable";
pub const COLLECTION: &str = "java.util.Collection";
pub const ABSTRACT_COLLECTION: &str = "java.util.AbstractCollection";
pub const LIST: &str = "java.util.List";
pub const ABSTRACT_LIST: &str = "java.util.AbstractList";
pub const ARRAY_LIST: &str = "java.util.ArrayList";
pub const SET: &str = "java.util.Set";
pub const ABSTRACT_SET: &str = "java.util.AbstractSet";
pub const HASH_SET: &str = "java.util.HashSet";
pub const MAP: &str = "java.util.Map";
pub const ABSTRACT_MAP: &str = "java.util.AbstractMap";
pub const HASH_MAP: &str = "java.util.HashMap";
