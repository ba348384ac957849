//! Reflected class metadata and its builder.

use std::sync::Arc;

use crate::{
    well_known, ClassName, ConstructorInfo, FieldInfo, GenericType, MethodInfo, Modifiers,
    TypeRef,
};

/// Reflected metadata of one class or interface.
///
/// Members are kept in declaration order and shared behind `Arc`, so a
/// resolved member can be handed out and compared by identity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassInfo {
    pub name: ClassName,
    pub modifiers: Modifiers,
    /// Direct superclass; `None` for the root class and for interfaces.
    pub superclass: Option<ClassName>,
    /// Declared interfaces, with their generic arguments.
    pub interfaces: Vec<GenericType>,
    pub fields: Vec<Arc<FieldInfo>>,
    pub methods: Vec<Arc<MethodInfo>>,
    pub constructors: Vec<Arc<ConstructorInfo>>,
}

impl ClassInfo {
    /// Start building a public class.
    pub fn builder(name: impl Into<ClassName>) -> ClassBuilder {
        ClassBuilder::new(name)
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        self.modifiers.is_interface()
    }

    #[inline]
    pub fn is_abstract(&self) -> bool {
        self.modifiers.is_abstract()
    }

    /// Erased names of the declared interfaces, in declaration order.
    pub fn interface_names(&self) -> impl Iterator<Item = &ClassName> {
        self.interfaces.iter().filter_map(GenericType::raw_class)
    }

    pub fn declared_field(&self, name: &str) -> Option<&Arc<FieldInfo>> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The public constructor taking no arguments, if declared.
    pub fn no_arg_constructor(&self) -> Option<&Arc<ConstructorInfo>> {
        self.constructors
            .iter()
            .find(|ctor| ctor.params.is_empty() && ctor.modifiers.is_public())
    }
}

/// Builder for [`ClassInfo`].
///
/// Mirrors what a compiler would emit for a source declaration: a class with
/// no explicit superclass extends the root object type, and a class with no
/// declared constructor gets an implicit public no-argument one.
#[derive(Clone, Debug)]
pub struct ClassBuilder {
    name: ClassName,
    modifiers: Modifiers,
    superclass: Option<ClassName>,
    interfaces: Vec<GenericType>,
    fields: Vec<FieldInfo>,
    methods: Vec<MethodInfo>,
    constructors: Vec<ConstructorInfo>,
}

impl ClassBuilder {
    pub fn new(name: impl Into<ClassName>) -> Self {
        ClassBuilder {
            name: name.into(),
            modifiers: Modifiers::PUBLIC,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Start building a public interface.
    pub fn interface(name: impl Into<ClassName>) -> Self {
        Self::new(name).modifiers(Modifiers::PUBLIC | Modifiers::INTERFACE | Modifiers::ABSTRACT)
    }

    /// Replace the class modifiers.
    #[must_use]
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn extends(mut self, superclass: impl Into<ClassName>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Implement a non-generic interface.
    #[must_use]
    pub fn implements(mut self, interface: impl Into<ClassName>) -> Self {
        self.interfaces.push(GenericType::class(interface));
        self
    }

    /// Implement an interface with explicit generic arguments.
    #[must_use]
    pub fn implements_generic(mut self, interface: GenericType) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Declare a private instance field.
    #[must_use]
    pub fn field(self, name: &str, ty: TypeRef) -> Self {
        self.field_with(name, ty, Modifiers::PRIVATE)
    }

    #[must_use]
    pub fn field_with(mut self, name: &str, ty: TypeRef, modifiers: Modifiers) -> Self {
        self.fields.push(FieldInfo {
            name: name.to_owned(),
            ty,
            declaring: self.name.clone(),
            modifiers,
        });
        self
    }

    /// Declare a public instance method.
    #[must_use]
    pub fn method(self, name: &str, params: Vec<TypeRef>, return_type: TypeRef) -> Self {
        self.method_with(name, params, return_type, Modifiers::PUBLIC)
    }

    #[must_use]
    pub fn method_with(
        mut self,
        name: &str,
        params: Vec<TypeRef>,
        return_type: TypeRef,
        modifiers: Modifiers,
    ) -> Self {
        self.methods.push(MethodInfo {
            name: name.to_owned(),
            params,
            return_type,
            declaring: self.name.clone(),
            modifiers,
        });
        self
    }

    /// Declare a public constructor.
    #[must_use]
    pub fn constructor(self, params: Vec<TypeRef>) -> Self {
        self.constructor_with(params, Modifiers::PUBLIC)
    }

    #[must_use]
    pub fn constructor_with(mut self, params: Vec<TypeRef>, modifiers: Modifiers) -> Self {
        self.constructors.push(ConstructorInfo {
            params,
            declaring: self.name.clone(),
            modifiers,
        });
        self
    }

    pub fn build(self) -> ClassInfo {
        let is_interface = self.modifiers.is_interface();
        let is_root = self.name == well_known::OBJECT;

        let superclass = match self.superclass {
            _ if is_interface || is_root => None,
            Some(superclass) => Some(superclass),
            None => Some(ClassName::new(well_known::OBJECT)),
        };

        let mut constructors = self.constructors;
        if constructors.is_empty() && !is_interface && !self.modifiers.is_enum() {
            constructors.push(ConstructorInfo {
                params: Vec::new(),
                declaring: self.name.clone(),
                modifiers: Modifiers::PUBLIC,
            });
        }

        ClassInfo {
            name: self.name,
            modifiers: self.modifiers,
            superclass,
            interfaces: self.interfaces,
            fields: self.fields.into_iter().map(Arc::new).collect(),
            methods: self.methods.into_iter().map(Arc::new).collect(),
            constructors: constructors.into_iter().map(Arc::new).collect(),
        }
    }
}
