//! Top-level resource objects.

use std::any::Any;

use super::shape::Structured;
use crate::api::meta::TypeMeta;

/// A top-level resource: a [`Structured`] value that carries identity metadata.
///
/// Implemented with [`object!`](crate::object) for every kind and list kind.
pub trait Object: Structured + Send + Sync + 'static {
    fn type_meta(&self) -> &TypeMeta;

    fn type_meta_mut(&mut self) -> &mut TypeMeta;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn structured(&self) -> &dyn Structured;

    fn structured_mut(&mut self) -> &mut dyn Structured;

    /// Name of the Rust type, for diagnostics.
    fn type_name(&self) -> &'static str {
        self.shape().name
    }
}

impl dyn Object {
    pub fn downcast_ref<K: Object>(&self) -> Option<&K> {
        self.as_any().downcast_ref::<K>()
    }

    pub fn downcast<K: Object>(self: Box<Self>) -> Option<Box<K>> {
        self.into_any().downcast::<K>().ok()
    }
}

/// Implement [`Object`] for structures with a `type_meta: TypeMeta` field.
#[macro_export]
macro_rules! object {
    ($($name:ident),* $(,)?) => {
        $(
            impl $crate::resource::object::Object for $name {
                fn type_meta(&self) -> &$crate::api::meta::TypeMeta {
                    &self.type_meta
                }

                fn type_meta_mut(&mut self) -> &mut $crate::api::meta::TypeMeta {
                    &mut self.type_meta
                }

                fn as_any(&self) -> &dyn std::any::Any {
                    self
                }

                fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
                    self
                }

                fn structured(&self) -> &dyn $crate::resource::shape::Structured {
                    self
                }

                fn structured_mut(&mut self) -> &mut dyn $crate::resource::shape::Structured {
                    self
                }
            }
        )*
    };
}
