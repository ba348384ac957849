//! Hierarchy walks over a [`ClassSource`].
//!
//! Every walk is an explicit loop over a worklist; class graphs supplied by
//! a host can be arbitrarily deep, and a missing ancestor simply ends the
//! walk along that edge.

use std::collections::VecDeque;
use std::sync::Arc;

use refract_ir::{well_known, ClassInfo, ClassName, ConstructorInfo, MethodInfo, TypeRef};
use rustc_hash::FxHashSet;

use crate::ClassSource;

/// `class` followed by its superclasses, most-derived first.
pub fn superclass_chain(source: &dyn ClassSource, class: &Arc<ClassInfo>) -> Vec<Arc<ClassInfo>> {
    let mut chain = vec![Arc::clone(class)];
    let mut seen = FxHashSet::default();
    seen.insert(class.name.clone());

    let mut next = class.superclass.clone();
    while let Some(name) = next {
        if !seen.insert(name.clone()) {
            tracing::debug!(class = %name, "cyclic superclass chain");
            break;
        }
        let Some(ancestor) = source.find_class(name.as_str()) else {
            tracing::trace!(class = %name, "superclass not found, chain ends");
            break;
        };
        next = ancestor.superclass.clone();
        chain.push(ancestor);
    }
    chain
}

/// `class` and every superclass and superinterface, breadth first.
///
/// Each type appears once, at the position it is first reached.
pub fn supertypes(source: &dyn ClassSource, class: &Arc<ClassInfo>) -> Vec<Arc<ClassInfo>> {
    let mut order = Vec::new();
    let mut seen: FxHashSet<ClassName> = FxHashSet::default();
    let mut queue = VecDeque::from([Arc::clone(class)]);
    seen.insert(class.name.clone());

    while let Some(current) = queue.pop_front() {
        let parents = current
            .superclass
            .iter()
            .chain(current.interface_names());
        for parent in parents {
            if seen.insert(parent.clone()) {
                if let Some(found) = source.find_class(parent.as_str()) {
                    queue.push_back(found);
                }
            }
        }
        order.push(current);
    }
    order
}

/// Whether a value of type `from` can be stored in a slot of type `target`.
pub fn is_assignable(source: &dyn ClassSource, target: &TypeRef, from: &TypeRef) -> bool {
    let mut target = target;
    let mut from = from;

    loop {
        if target == from {
            return true;
        }
        match (target, from) {
            (TypeRef::Primitive(_), _) | (_, TypeRef::Primitive(_)) => return false,
            (TypeRef::Class(name), _) if name == well_known::OBJECT => return true,
            (TypeRef::Class(name), TypeRef::Array(_)) => {
                return name == well_known::CLONEABLE || name == well_known::SERIALIZABLE;
            }
            (TypeRef::Array(_), TypeRef::Class(_)) => return false,
            (TypeRef::Array(target_component), TypeRef::Array(from_component)) => {
                if target_component.is_primitive() || from_component.is_primitive() {
                    return false;
                }
                target = target_component;
                from = from_component;
            }
            (TypeRef::Class(target_name), TypeRef::Class(from_name)) => {
                return is_subclass_named(source, from_name, target_name);
            }
        }
    }
}

fn is_subclass_named(source: &dyn ClassSource, class: &ClassName, ancestor: &ClassName) -> bool {
    let Some(class) = source.find_class(class.as_str()) else {
        return false;
    };
    supertypes(source, &class)
        .iter()
        .any(|supertype| &supertype.name == ancestor)
}

/// Whether any class on the superclass chain, below the root, directly
/// declares the interface `name`.
pub fn implements_interface_named(
    source: &dyn ClassSource,
    class: &Arc<ClassInfo>,
    name: &str,
) -> bool {
    superclass_chain(source, class)
        .iter()
        .take_while(|ancestor| ancestor.name != well_known::OBJECT)
        .any(|ancestor| ancestor.interface_names().any(|iface| iface == name))
}

/// Public methods visible on `class`, most-derived declaration first.
///
/// A `(name, params)` pair declared on several supertypes is reported once,
/// from the type closest to `class`.
pub fn public_methods(source: &dyn ClassSource, class: &Arc<ClassInfo>) -> Vec<Arc<MethodInfo>> {
    let mut methods: Vec<Arc<MethodInfo>> = Vec::new();

    for supertype in supertypes(source, class) {
        for method in &supertype.methods {
            if method.modifiers.is_public()
                && !methods.iter().any(|seen| seen.same_signature(method))
            {
                methods.push(Arc::clone(method));
            }
        }
    }
    methods
}

/// Public constructors declared on `class`.
pub fn public_constructors(class: &ClassInfo) -> impl Iterator<Item = &Arc<ConstructorInfo>> {
    class
        .constructors
        .iter()
        .filter(|ctor| ctor.modifiers.is_public())
}

#[cfg(test)]
mod tests;
