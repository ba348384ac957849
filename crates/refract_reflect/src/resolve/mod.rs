//! Method and constructor resolution.
//!
//! A [`MemberResolver`] pairs a class source with a [`SignatureCache`]. The
//! cache is injected so callers choose its scope: one per resolver, one per
//! process, or one per test.

mod cache;

use std::sync::Arc;

use refract_host::hierarchy::{is_assignable, public_constructors, public_methods};
use refract_host::SharedClassSource;
use refract_ir::{ClassInfo, ConstructorInfo, MethodInfo, TypeRef};
use smallvec::SmallVec;

pub use cache::{CacheStats, SignatureCache};

use crate::format::{signature_key, signature_of};
use crate::{resolve_type_name, ReflectError};

/// Resolves public methods and constructors of host classes.
pub struct MemberResolver {
    source: SharedClassSource,
    cache: Arc<SignatureCache>,
}

impl MemberResolver {
    pub fn new(source: SharedClassSource, cache: Arc<SignatureCache>) -> Self {
        MemberResolver { source, cache }
    }

    pub fn cache(&self) -> &Arc<SignatureCache> {
        &self.cache
    }

    /// The single public method named `name` on `class`.
    ///
    /// Fails with `AmbiguousMember` when the name is overloaded.
    #[tracing::instrument(level = "debug", skip_all, fields(class = class, name = name))]
    pub fn resolve_by_name(
        &self,
        class: &str,
        name: &str,
    ) -> Result<Arc<MethodInfo>, ReflectError> {
        let key = format!("{class}#{name}");
        if let Some(method) = self.cache.get(&key) {
            tracing::trace!(%key, "signature cache hit");
            return Ok(method);
        }

        let class_info = self.class(class)?;
        let mut matches: SmallVec<[Arc<MethodInfo>; 4]> =
            public_methods(self.source.as_ref(), &class_info)
                .into_iter()
                .filter(|method| method.name == name)
                .collect();

        match matches.len() {
            0 => Err(no_such_member(&class_info, name)),
            1 => {
                let method = matches.swap_remove(0);
                self.cache.insert(key, Arc::clone(&method));
                Ok(method)
            }
            count => Err(ReflectError::AmbiguousMember {
                class: class_info.name.clone(),
                name: name.to_owned(),
                count,
            }),
        }
    }

    /// The public method on `class` with exactly the given parameter types.
    ///
    /// Parameter types are names in any form [`resolve_type_name`] accepts.
    /// Results are memoized under `"<class>#<name>(<p1>,<p2>)"`.
    #[tracing::instrument(level = "debug", skip_all, fields(class = class, name = name))]
    pub fn resolve_by_signature<S: AsRef<str>>(
        &self,
        class: &str,
        name: &str,
        param_type_names: &[S],
    ) -> Result<Arc<MethodInfo>, ReflectError> {
        let key = format!("{class}#{}", signature_key(name, param_type_names));
        if let Some(method) = self.cache.get(&key) {
            tracing::trace!(%key, "signature cache hit");
            return Ok(method);
        }

        let class_info = self.class(class)?;
        let params = param_type_names
            .iter()
            .map(|param| resolve_type_name(self.source.as_ref(), param.as_ref()))
            .collect::<Result<Vec<TypeRef>, _>>()?;

        let method = public_methods(self.source.as_ref(), &class_info)
            .into_iter()
            .find(|method| method.name == name && method.params == params)
            .ok_or_else(|| no_such_member(&class_info, &signature_of(name, &params)))?;

        self.cache.insert(key, Arc::clone(&method));
        Ok(method)
    }

    /// A public single-parameter constructor of `class` accepting
    /// `param_type`.
    ///
    /// An exact parameter match wins. Otherwise exactly one constructor
    /// whose parameter is assignable from `param_type` must exist.
    #[tracing::instrument(level = "debug", skip_all, fields(class = class))]
    pub fn resolve_constructor_by_param_type(
        &self,
        class: &str,
        param_type: &TypeRef,
    ) -> Result<Arc<ConstructorInfo>, ReflectError> {
        let class_info = self.class(class)?;
        let single_param = || {
            public_constructors(&class_info).filter(|ctor| ctor.params.len() == 1)
        };

        if let Some(exact) = single_param().find(|ctor| &ctor.params[0] == param_type) {
            return Ok(Arc::clone(exact));
        }

        let mut candidates: SmallVec<[&Arc<ConstructorInfo>; 2]> = single_param()
            .filter(|ctor| is_assignable(self.source.as_ref(), &ctor.params[0], param_type))
            .collect();

        match candidates.len() {
            0 => Err(no_such_member(
                &class_info,
                &signature_of("<init>", std::slice::from_ref(param_type)),
            )),
            1 => Ok(Arc::clone(candidates.swap_remove(0))),
            count => Err(ReflectError::AmbiguousMember {
                class: class_info.name.clone(),
                name: "<init>".to_owned(),
                count,
            }),
        }
    }

    fn class(&self, name: &str) -> Result<Arc<ClassInfo>, ReflectError> {
        self.source
            .find_class(name)
            .ok_or_else(|| ReflectError::unknown_type(name))
    }
}

fn no_such_member(class: &ClassInfo, name: &str) -> ReflectError {
    ReflectError::NoSuchMember {
        class: class.name.clone(),
        name: name.to_owned(),
    }
}
