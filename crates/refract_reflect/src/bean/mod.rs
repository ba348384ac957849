//! Bean property introspection.
//!
//! A bean property is inferred from `getX`/`isX` accessors, `setX`
//! mutators and non-transient instance fields. Every walk runs over the
//! superclass chain from the most-derived class up, and the most-derived
//! declaration of a name wins.

use std::collections::BTreeMap;
use std::sync::Arc;

use refract_host::hierarchy::superclass_chain;
use refract_host::ClassSource;
use refract_ir::{well_known, ClassInfo, FieldInfo, Member, MethodInfo};
use rustc_hash::FxHashMap;

use crate::ReflectError;

/// A derived bean property and the members backing it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BeanProperty {
    pub name: String,
    pub field: Option<Arc<FieldInfo>>,
    pub read: Option<Arc<MethodInfo>>,
    pub write: Option<Arc<MethodInfo>>,
}

impl BeanProperty {
    fn named(name: &str) -> Self {
        BeanProperty {
            name: name.to_owned(),
            ..Self::default()
        }
    }
}

/// Public, non-static, declared below the root class.
fn is_bean_method(method: &MethodInfo) -> bool {
    method.modifiers.is_public()
        && !method.modifiers.is_static()
        && method.declaring != well_known::OBJECT
}

/// `getX()` or `isX()` returning a value.
pub fn is_read_accessor(method: &MethodInfo) -> bool {
    is_bean_method(method)
        && !method.return_type.is_void()
        && method.params.is_empty()
        && (suffix_after(&method.name, "get").is_some()
            || suffix_after(&method.name, "is").is_some())
}

/// `setX(value)`.
pub fn is_write_mutator(method: &MethodInfo) -> bool {
    is_bean_method(method)
        && method.params.len() == 1
        && suffix_after(&method.name, "set").is_some()
}

/// The property an accessor reads, `None` if `method` is not an accessor.
pub fn read_property_name(method: &MethodInfo) -> Option<String> {
    if !is_read_accessor(method) {
        return None;
    }
    suffix_after(&method.name, "get")
        .or_else(|| suffix_after(&method.name, "is"))
        .map(decapitalize)
}

/// The property a mutator writes, `None` if `method` is not a mutator.
pub fn write_property_name(method: &MethodInfo) -> Option<String> {
    if !is_write_mutator(method) {
        return None;
    }
    suffix_after(&method.name, "set").map(decapitalize)
}

/// The property an accessor or mutator belongs to.
///
/// `getAge` gives `age`, `isActive` gives `active`, `setName` gives `name`.
pub fn property_name(method: &MethodInfo) -> Option<String> {
    read_property_name(method).or_else(|| write_property_name(method))
}

/// Public, non-static, non-final and compiler-visible.
pub fn is_public_instance_field(field: &FieldInfo) -> bool {
    let modifiers = field.modifiers;
    modifiers.is_public()
        && !modifiers.is_static()
        && !modifiers.is_final()
        && !modifiers.is_synthetic()
}

/// The non-empty remainder of `name` after `prefix`.
fn suffix_after<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    name.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Persistable fields in walk order: most-derived class first, each class
/// in declaration order. Transient and static fields are skipped; every
/// kept field is made accessible. A name shadowed by a subclass field is
/// reported once, from the subclass.
pub fn persistable_fields(
    source: &dyn ClassSource,
    class: &Arc<ClassInfo>,
) -> Result<Vec<Arc<FieldInfo>>, ReflectError> {
    let mut fields: Vec<Arc<FieldInfo>> = Vec::new();
    for ancestor in superclass_chain(source, class) {
        for field in &ancestor.fields {
            if field.modifiers.is_transient() || field.modifiers.is_static() {
                continue;
            }
            source.make_accessible(Member::Field(field))?;
            if fields.iter().all(|kept| kept.name != field.name) {
                fields.push(Arc::clone(field));
            }
        }
    }
    Ok(fields)
}

/// Persistable fields by name.
pub fn collect_persistable_fields(
    source: &dyn ClassSource,
    class: &Arc<ClassInfo>,
) -> Result<FxHashMap<String, Arc<FieldInfo>>, ReflectError> {
    Ok(persistable_fields(source, class)?
        .into_iter()
        .map(|field| (field.name.clone(), field))
        .collect())
}

/// Read accessors by property name, most-derived first.
pub fn collect_read_accessors(
    source: &dyn ClassSource,
    class: &Arc<ClassInfo>,
) -> Result<FxHashMap<String, Arc<MethodInfo>>, ReflectError> {
    collect_methods(source, class, read_property_name)
}

/// Write mutators by property name, most-derived first.
pub fn collect_write_mutators(
    source: &dyn ClassSource,
    class: &Arc<ClassInfo>,
) -> Result<FxHashMap<String, Arc<MethodInfo>>, ReflectError> {
    collect_methods(source, class, write_property_name)
}

fn collect_methods(
    source: &dyn ClassSource,
    class: &Arc<ClassInfo>,
    property_of: fn(&MethodInfo) -> Option<String>,
) -> Result<FxHashMap<String, Arc<MethodInfo>>, ReflectError> {
    let mut methods = FxHashMap::default();
    for ancestor in superclass_chain(source, class) {
        for method in &ancestor.methods {
            let Some(property) = property_of(method) else {
                continue;
            };
            source.make_accessible(Member::Method(method))?;
            methods
                .entry(property)
                .or_insert_with(|| Arc::clone(method));
        }
    }
    Ok(methods)
}

/// Every bean property of `class`, merging fields, accessors and mutators.
#[tracing::instrument(level = "debug", skip_all, fields(class = %class.name))]
pub fn describe_properties(
    source: &dyn ClassSource,
    class: &Arc<ClassInfo>,
) -> Result<BTreeMap<String, BeanProperty>, ReflectError> {
    let mut properties: BTreeMap<String, BeanProperty> = BTreeMap::new();

    for field in persistable_fields(source, class)? {
        let name = field.name.clone();
        properties
            .entry(name)
            .or_insert_with_key(|name| BeanProperty::named(name))
            .field = Some(field);
    }
    for (name, method) in collect_read_accessors(source, class)? {
        properties
            .entry(name)
            .or_insert_with_key(|name| BeanProperty::named(name))
            .read = Some(method);
    }
    for (name, method) in collect_write_mutators(source, class)? {
        properties
            .entry(name)
            .or_insert_with_key(|name| BeanProperty::named(name))
            .write = Some(method);
    }

    Ok(properties)
}
