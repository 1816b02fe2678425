//! Type Registry - Map resource types to their kind identity
//!
//! The registry is filled once at startup, one [`Registry::register`] call per
//! kind, and is read-only afterwards. It answers two questions: which
//! (group, version, kind) a typed value belongs to, and which type a
//! (group, version, kind) decodes into.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use super::object::Object;
use super::shape::Shape;
use crate::api::meta::GroupVersionKind;
use crate::error::{Error, Result};

/// Registered identity and shape of one resource type.
#[derive(Debug, Clone)]
pub struct KindDescriptor {
    pub gvk: GroupVersionKind,
    pub shape: &'static Shape,
    type_id: TypeId,
    type_name: &'static str,
    factory: fn() -> Box<dyn Object>,
}

impl KindDescriptor {
    /// Name of the registered Rust type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Allocate a fresh, empty instance of the registered type.
    pub fn new_object(&self) -> Box<dyn Object> {
        (self.factory)()
    }
}

fn new_boxed<K: Object + Default>() -> Box<dyn Object> {
    Box::new(K::default())
}

/// Table of registered resource types.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<KindDescriptor>,
    by_type: HashMap<TypeId, usize>,
    by_kind: HashMap<GroupVersionKind, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `K` under `gvk`.
    ///
    /// Registering the same type with the same identity again is a no-op. A
    /// type that is already registered under another identity, or an identity
    /// already taken by another type, fails with [`Error::DuplicateKind`].
    pub fn register<K: Object + Default>(&mut self, gvk: GroupVersionKind) -> Result<()> {
        let type_id = TypeId::of::<K>();
        let shape = K::descriptor();

        if let Some(&index) = self.by_type.get(&type_id) {
            let existing = &self.entries[index];
            if existing.gvk == gvk {
                return Ok(());
            }
            return Err(Error::DuplicateKind {
                type_name: shape.name,
                requested: gvk.to_string(),
                existing: existing.gvk.to_string(),
            });
        }

        if let Some(&index) = self.by_kind.get(&gvk) {
            let existing = &self.entries[index];
            return Err(Error::DuplicateKind {
                type_name: shape.name,
                requested: gvk.to_string(),
                existing: format!("{} by {}", existing.gvk, existing.type_name),
            });
        }

        tracing::trace!(kind = %gvk, type_name = shape.name, "registering kind");
        let index = self.entries.len();
        self.by_type.insert(type_id, index);
        self.by_kind.insert(gvk.clone(), index);
        self.entries.push(KindDescriptor {
            gvk,
            shape,
            type_id,
            type_name: shape.name,
            factory: new_boxed::<K>,
        });
        Ok(())
    }

    /// Descriptor for the runtime type of `value`.
    pub fn lookup(&self, value: &dyn Object) -> Result<&KindDescriptor> {
        self.lookup_type(Any::type_id(value.as_any()))
            .ok_or(Error::NotFound {
                type_name: value.type_name(),
            })
    }

    /// Descriptor registered for `K`.
    pub fn lookup_type_of<K: Object>(&self) -> Option<&KindDescriptor> {
        self.lookup_type(TypeId::of::<K>())
    }

    fn lookup_type(&self, type_id: TypeId) -> Option<&KindDescriptor> {
        let index = *self.by_type.get(&type_id)?;
        let entry = &self.entries[index];
        debug_assert_eq!(entry.type_id, type_id);
        Some(entry)
    }

    /// Descriptor registered under `gvk`.
    pub fn lookup_kind(&self, gvk: &GroupVersionKind) -> Option<&KindDescriptor> {
        self.by_kind.get(gvk).map(|&index| &self.entries[index])
    }

    /// All descriptors, ordered by identity.
    pub fn kinds(&self) -> Vec<&KindDescriptor> {
        let mut kinds: Vec<&KindDescriptor> = self.entries.iter().collect();
        kinds.sort_by(|a, b| a.gvk.cmp(&b.gvk));
        kinds
    }

    /// Find a descriptor by kind name alone, case-insensitively.
    pub fn find_kind(&self, kind: &str) -> Option<&KindDescriptor> {
        self.entries
            .iter()
            .find(|entry| entry.gvk.kind.eq_ignore_ascii_case(kind))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
