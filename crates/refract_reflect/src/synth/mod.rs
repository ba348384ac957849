//! Empty-value synthesis.
//!
//! Produces a default ("empty") value for a declared type: zero for
//! primitives, empty arrays and collections, `""` for strings, and for
//! ordinary classes a fresh instance whose fields are filled the same way.
//!
//! # Termination
//!
//! Recursion is bounded twice over: by `max_depth`, and by a per-call memo
//! that hands out one instance per class, so a self-referential type ends
//! up pointing at itself instead of nesting forever.

use std::sync::Arc;

use refract_desc::human_name;
use refract_host::hierarchy::is_assignable;
use refract_host::{ClassSource, SharedClassSource};
use refract_ir::{well_known, ClassInfo, ClassName, Member, Primitive, TypeRef};
use refract_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::bean::persistable_fields;
use crate::value::{Heap, ObjectId, Value};
use crate::{resolve_type_name, ReflectError};

/// Synthesis limits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Deepest nesting level that still receives a value; the top-level
    /// type is level 0.
    pub max_depth: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        SynthesisConfig { max_depth: 2 }
    }
}

impl SynthesisConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// The result of one synthesis call: the value and the heap its objects
/// live in.
#[derive(Debug)]
pub struct Synthesized {
    pub value: Option<Value>,
    pub heap: Heap,
}

impl Synthesized {
    /// Render the value for display; `None` renders as `null`.
    pub fn render(&self) -> String {
        match &self.value {
            Some(value) => self.heap.render(value),
            None => self.heap.render(&Value::Null),
        }
    }
}

pub struct EmptyValueSynthesizer {
    source: SharedClassSource,
    config: SynthesisConfig,
}

impl EmptyValueSynthesizer {
    pub fn new(source: SharedClassSource, config: SynthesisConfig) -> Self {
        EmptyValueSynthesizer { source, config }
    }

    /// Synthesize the empty value of `ty`.
    ///
    /// Never fails: types that cannot be synthesized yield `value: None`.
    #[tracing::instrument(level = "debug", skip_all, fields(ty = %human_name(ty)))]
    pub fn synthesize(&self, ty: &TypeRef) -> Synthesized {
        let mut run = SynthesisRun {
            source: self.source.as_ref(),
            max_depth: self.config.max_depth,
            memo: FxHashMap::default(),
            heap: Heap::new(),
        };
        let value = run.empty_value(ty, 0);
        Synthesized {
            value,
            heap: run.heap,
        }
    }

    /// Resolve `name` against the source, then synthesize it.
    pub fn synthesize_named(&self, name: &str) -> Result<Synthesized, ReflectError> {
        let ty = resolve_type_name(self.source.as_ref(), name)?;
        Ok(self.synthesize(&ty))
    }
}

/// State of one top-level synthesis call.
struct SynthesisRun<'a> {
    source: &'a dyn ClassSource,
    max_depth: usize,
    memo: FxHashMap<ClassName, ObjectId>,
    heap: Heap,
}

impl SynthesisRun<'_> {
    fn empty_value(&mut self, ty: &TypeRef, level: usize) -> Option<Value> {
        ensure_sufficient_stack(|| self.empty_value_at(ty, level))
    }

    fn empty_value_at(&mut self, ty: &TypeRef, level: usize) -> Option<Value> {
        if level > self.max_depth {
            return None;
        }

        let name = match ty {
            TypeRef::Primitive(primitive) => return Value::zero(*primitive),
            TypeRef::Array(component) => return Some(Value::empty_array((**component).clone())),
            TypeRef::Class(name) => name,
        };

        if let Some(primitive) = Primitive::from_boxed(name.as_str()) {
            return Value::zero(primitive);
        }
        if let Some(collection) = self.empty_collection(ty) {
            return Some(collection);
        }
        if name == well_known::STRING {
            return Some(Value::Str(String::new()));
        }

        let Some(class) = self.source.find_class(name.as_str()) else {
            tracing::debug!(class = %name, "unknown class, no empty value");
            return None;
        };
        if class.is_interface() {
            return None;
        }

        match self.object(&class, level) {
            Ok(id) => Some(Value::Object(id)),
            Err(err) => {
                tracing::debug!(class = %name, error = %err, "empty value synthesis failed");
                self.memo.remove(name);
                None
            }
        }
    }

    /// An empty list, set or map when the declared type can hold one.
    fn empty_collection(&self, ty: &TypeRef) -> Option<Value> {
        let holds = |implementation: &str| {
            is_assignable(self.source, ty, &TypeRef::class(implementation))
        };
        if holds(well_known::ARRAY_LIST) {
            Some(Value::List(Vec::new()))
        } else if holds(well_known::HASH_SET) {
            Some(Value::Set(Vec::new()))
        } else if holds(well_known::HASH_MAP) {
            Some(Value::Map(Vec::new()))
        } else {
            None
        }
    }

    /// The memoized instance of `class` with every persistable field
    /// synthesized one level deeper.
    fn object(&mut self, class: &Arc<ClassInfo>, level: usize) -> Result<ObjectId, ReflectError> {
        let id = match self.memo.get(&class.name) {
            Some(&id) => id,
            None => {
                let id = self.instantiate(class)?;
                self.memo.insert(class.name.clone(), id);
                id
            }
        };

        for field in persistable_fields(self.source, class)? {
            let Some(value) = self.empty_value(&field.ty, level + 1) else {
                continue;
            };
            self.heap.assign(self.source, id, &field, value)?;
        }
        Ok(id)
    }

    fn instantiate(&mut self, class: &ClassInfo) -> Result<ObjectId, ReflectError> {
        let not_instantiable = |reason| ReflectError::NotInstantiable {
            class: class.name.clone(),
            reason,
        };
        if class.is_abstract() {
            return Err(not_instantiable("abstract class"));
        }
        if class.modifiers.is_enum() {
            return Err(not_instantiable("enum class"));
        }
        let ctor = class
            .no_arg_constructor()
            .ok_or_else(|| not_instantiable("no public no-argument constructor"))?;
        self.source.make_accessible(Member::Constructor(ctor))?;
        Ok(self.heap.instantiate(class.name.clone()))
    }
}

#[cfg(test)]
mod tests;
