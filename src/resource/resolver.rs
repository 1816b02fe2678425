//! Kind Resolver
//!
//! Stamps (group, version, kind) onto a typed value before conversion so the
//! identity shows up in the document. Explicit identity is never overwritten,
//! and a failed lookup only means the identity stays blank.

use super::object::Object;
use super::registry::Registry;
use crate::api::meta::GroupVersionKind;

/// Outcome of [`resolve_kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The value already carried identity metadata.
    Explicit,
    /// Identity was filled in from the registry.
    Inferred(GroupVersionKind),
    /// The type is not registered; identity stays empty.
    Unresolved,
}

/// Fill in missing identity metadata on `value` from `registry`.
pub fn resolve_kind(registry: &Registry, value: &mut dyn Object) -> Resolution {
    if !value.type_meta().is_empty() {
        return Resolution::Explicit;
    }

    match registry.lookup(value) {
        Ok(descriptor) => {
            tracing::debug!(kind = %descriptor.gvk, "inferred kind identity");
            value.type_meta_mut().set_group_version_kind(&descriptor.gvk);
            Resolution::Inferred(descriptor.gvk.clone())
        }
        Err(err) => {
            tracing::debug!(error = %err, "leaving kind identity blank");
            Resolution::Unresolved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::meta::TypeMeta;
    use crate::{object, structured};

    structured! {
        pub struct Probe {
            pub type_meta: TypeMeta as "" inline,
        }
    }

    structured! {
        pub struct Stray {
            pub type_meta: TypeMeta as "" inline,
        }
    }

    object!(Probe, Stray);

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register::<Probe>(GroupVersionKind::new("example.io", "v1", "Probe"))
            .unwrap();
        registry
    }

    #[test]
    fn test_infers_missing_identity() {
        let mut probe = Probe::default();
        let resolution = resolve_kind(&registry(), &mut probe);
        assert_eq!(
            resolution,
            Resolution::Inferred(GroupVersionKind::new("example.io", "v1", "Probe"))
        );
        assert_eq!(probe.type_meta.api_version, "example.io/v1");
        assert_eq!(probe.type_meta.kind, "Probe");
    }

    #[test]
    fn test_explicit_identity_wins() {
        let mut probe = Probe {
            type_meta: TypeMeta {
                api_version: "other.io/v9".to_string(),
                kind: "Elsewhere".to_string(),
            },
        };
        assert_eq!(resolve_kind(&registry(), &mut probe), Resolution::Explicit);
        assert_eq!(probe.type_meta.kind, "Elsewhere");
    }

    #[test]
    fn test_unregistered_type_stays_blank() {
        let mut stray = Stray::default();
        assert_eq!(resolve_kind(&registry(), &mut stray), Resolution::Unresolved);
        assert!(stray.type_meta.is_empty());
    }
}
