//! Object storage for synthesized values.

use std::collections::BTreeMap;

use refract_desc::human_name;
use refract_host::ClassSource;
use refract_ir::{ClassName, FieldInfo};
use rustc_hash::FxHashSet;

use super::{is_compatible, Value};
use crate::ReflectError;

/// Handle of an object in a [`Heap`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One object: its class and the fields assigned so far.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub class: ClassName,
    pub fields: BTreeMap<String, Value>,
}

/// Append-only object arena.
#[derive(Clone, Debug, Default)]
pub struct Heap {
    objects: Vec<Instance>,
}

impl Heap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an object of `class` with no fields assigned.
    pub fn instantiate(&mut self, class: ClassName) -> ObjectId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "heaps are bounded by synthesis depth, far below u32::MAX"
        )]
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(Instance {
            class,
            fields: BTreeMap::new(),
        });
        id
    }

    /// Store `value` into `field` of object `id`.
    ///
    /// Rejects values whose runtime type does not fit the declared field
    /// type, and ids this heap never handed out.
    pub fn assign(
        &mut self,
        source: &dyn ClassSource,
        id: ObjectId,
        field: &FieldInfo,
        value: Value,
    ) -> Result<(), ReflectError> {
        if !is_compatible(source, self, &field.ty, &value) {
            return Err(ReflectError::IncompatibleValue {
                class: field.declaring.clone(),
                field: field.name.clone(),
                expected: human_name(&field.ty),
            });
        }
        let instance = self
            .objects
            .get_mut(id.index())
            .ok_or_else(|| ReflectError::NotInstantiable {
                class: field.declaring.clone(),
                reason: "object id does not belong to this heap",
            })?;
        instance.fields.insert(field.name.clone(), value);
        Ok(())
    }

    pub fn get(&self, id: ObjectId) -> Option<&Instance> {
        self.objects.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Render `value` for display, following object references.
    ///
    /// An object already being rendered further up is printed as `#<id>`.
    pub fn render(&self, value: &Value) -> String {
        let mut out = String::new();
        let mut open = FxHashSet::default();
        self.render_into(&mut out, value, &mut open);
        out
    }

    fn render_into(&self, out: &mut String, value: &Value, open: &mut FxHashSet<ObjectId>) {
        let text = match value {
            Value::Object(id) => return self.render_object(out, *id, open),
            Value::Null => "null".to_owned(),
            Value::Bool(b) => b.to_string(),
            Value::Char(c) => format!("{c:?}"),
            Value::Byte(n) => n.to_string(),
            Value::Short(n) => n.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Long(n) => format!("{n}L"),
            Value::Float(n) => format!("{n:?}f"),
            Value::Double(n) => format!("{n:?}"),
            Value::Str(s) => format!("{s:?}"),
            Value::Array {
                component,
                elements,
            } => format!("{}[{}]", human_name(component), elements.len()),
            Value::List(items) => format!("[{} items]", items.len()),
            Value::Set(items) => format!("{{{} items}}", items.len()),
            Value::Map(entries) => format!("{{{} entries}}", entries.len()),
        };
        out.push_str(&text);
    }

    fn render_object(&self, out: &mut String, id: ObjectId, open: &mut FxHashSet<ObjectId>) {
        let Some(instance) = self.get(id) else {
            out.push_str(&format!("<dangling #{}>", id.index()));
            return;
        };
        if !open.insert(id) {
            out.push_str(&format!("#{}", id.index()));
            return;
        }

        out.push_str(&format!("{} #{} {{", instance.class.simple_name(), id.index()));
        for (i, (name, field)) in instance.fields.iter().enumerate() {
            out.push_str(if i == 0 { " " } else { ", " });
            out.push_str(name);
            out.push_str(": ");
            self.render_into(out, field, open);
        }
        out.push_str(if instance.fields.is_empty() { "}" } else { " }" });
        open.remove(&id);
    }
}
