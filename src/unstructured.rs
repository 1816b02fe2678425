//! Conversion facade
//!
//! [`Converter`] is the entry point for turning typed resources into
//! [`Document`]s and back. It resolves missing identity metadata through the
//! registry before encoding, then hands the value to the structural converter.

use crate::api::meta::GroupVersionKind;
use crate::api::v1alpha1::{
    Datacenter, KubernetesCluster, KubernetesProvider, LoadBalancer, Machine, MachineProvider,
    NetworkConfiguration, NetworkNamespace, ProxmoxConfig, Vitistack,
};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::resource::convert::{decode_struct, encode_struct};
use crate::resource::{resolve_kind, Object, Registry};

/// Converts between typed resources and generic documents.
///
/// Holds the registry by reference; any number of converters may share one
/// registry across threads once registration is done.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'r> {
    registry: &'r Registry,
}

impl<'r> Converter<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Convert `value` to a document, stamping its kind identity first when
    /// it has none.
    pub fn to_document(&self, value: Option<&mut dyn Object>) -> Result<Document> {
        let value = value.ok_or(Error::NilValue)?;
        let resolution = resolve_kind(self.registry, value);
        tracing::trace!(type_name = value.type_name(), ?resolution, "encoding object");
        Ok(Document::from_map(encode_struct(value.structured())))
    }

    /// Convert `document` into the caller-allocated `target`.
    ///
    /// Keys without a matching field are ignored, and fields without a key
    /// keep whatever `target` held.
    pub fn from_document(
        &self,
        document: Option<&Document>,
        target: Option<&mut dyn Object>,
    ) -> Result<()> {
        let document = document.ok_or(Error::NilDocument)?;
        let target = target.ok_or(Error::NilTarget)?;
        tracing::trace!(type_name = target.type_name(), "decoding document");
        decode_struct(target.structured_mut(), document.as_map())
    }

    /// Typed form of [`Converter::to_document`].
    pub fn encode<K: Object>(&self, value: &mut K) -> Result<Document> {
        self.to_document(Some(value as &mut dyn Object))
    }

    /// Decode `document` into a freshly allocated `K`.
    pub fn decode<K: Object + Default>(&self, document: &Document) -> Result<K> {
        let mut target = K::default();
        self.from_document(Some(document), Some(&mut target as &mut dyn Object))?;
        Ok(target)
    }

    /// Decode `document` into the type registered for the kind it names.
    pub fn decode_any(&self, document: &Document) -> Result<Box<dyn Object>> {
        let gvk = document.group_version_kind().unwrap_or_else(|| {
            GroupVersionKind::from_api_version(document.api_version().unwrap_or_default(), "")
        });
        let descriptor = self
            .registry
            .lookup_kind(&gvk)
            .ok_or_else(|| Error::UnknownKind {
                api_version: gvk.api_version(),
                kind: gvk.kind.clone(),
            })?;

        tracing::trace!(kind = %descriptor.gvk, "decoding document");
        let mut target = descriptor.new_object();
        decode_struct(target.structured_mut(), document.as_map())?;
        Ok(target)
    }
}

macro_rules! kind_conversions {
    ($($kind:ident => $to:ident, $from:ident;)*) => {
        impl Converter<'_> {
            $(
                #[doc = concat!("Convert a [`", stringify!($kind), "`] to a document.")]
                pub fn $to(&self, value: &mut $kind) -> Result<Document> {
                    self.encode(value)
                }

                #[doc = concat!("Decode a document into a new [`", stringify!($kind), "`].")]
                pub fn $from(&self, document: &Document) -> Result<$kind> {
                    self.decode(document)
                }
            )*
        }
    };
}

kind_conversions! {
    Machine => machine_to_document, machine_from_document;
    MachineProvider => machine_provider_to_document, machine_provider_from_document;
    KubernetesProvider => kubernetes_provider_to_document, kubernetes_provider_from_document;
    KubernetesCluster => kubernetes_cluster_to_document, kubernetes_cluster_from_document;
    NetworkConfiguration => network_configuration_to_document, network_configuration_from_document;
    NetworkNamespace => network_namespace_to_document, network_namespace_from_document;
    LoadBalancer => load_balancer_to_document, load_balancer_from_document;
    Datacenter => datacenter_to_document, datacenter_from_document;
    Vitistack => vitistack_to_document, vitistack_from_document;
    ProxmoxConfig => proxmox_config_to_document, proxmox_config_from_document;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::v1alpha1::{self, machine::MachineSpecDisk, MachineList};
    use serde_json::json;

    fn web_1() -> Machine {
        let mut machine = Machine::default();
        machine.metadata.name = "web-1".to_string();
        machine.spec.name = "web-1".to_string();
        machine.spec.instance_type = "t3.medium".to_string();
        machine.spec.disks = vec![
            MachineSpecDisk {
                name: "root".to_string(),
                size_gb: 20,
                boot: true,
                ..Default::default()
            },
            MachineSpecDisk {
                name: "data".to_string(),
                size_gb: 100,
                ..Default::default()
            },
        ];
        machine
    }

    #[test]
    fn test_nil_arguments() {
        let registry = v1alpha1::registry().unwrap();
        let converter = Converter::new(&registry);
        let mut machine = Machine::default();

        assert!(matches!(converter.to_document(None), Err(Error::NilValue)));
        assert!(matches!(
            converter.from_document(None, Some(&mut machine as &mut dyn Object)),
            Err(Error::NilDocument)
        ));
        assert!(matches!(
            converter.from_document(Some(&Document::new()), None),
            Err(Error::NilTarget)
        ));
    }

    #[test]
    fn test_machine_document() {
        let registry = v1alpha1::registry().unwrap();
        let converter = Converter::new(&registry);
        let mut machine = web_1();

        let document = converter.machine_to_document(&mut machine).unwrap();
        assert_eq!(document.api_version(), Some("vitistack.io/v1alpha1"));
        assert_eq!(document.kind(), Some("Machine"));

        let spec = document.get("spec").and_then(|spec| spec.as_object()).unwrap();
        let keys: Vec<&str> = spec.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["disks", "instanceType", "name"]);
        assert_eq!(
            spec["disks"],
            json!([
                {"boot": true, "name": "root", "sizeGB": 20},
                {"name": "data", "sizeGB": 100}
            ])
        );
        assert!(document.get("status").is_none());

        let decoded = converter.machine_from_document(&document).unwrap();
        assert_eq!(decoded, machine);
        assert_eq!(decoded.spec.memory, 0);
    }

    #[test]
    fn test_from_document_fills_caller_target() {
        let registry = v1alpha1::registry().unwrap();
        let converter = Converter::new(&registry);
        let document = Document::try_from(json!({"spec": {"endpoint": "pve.local", "port": "8006"}})).unwrap();

        let mut target = ProxmoxConfig::default();
        converter
            .from_document(Some(&document), Some(&mut target as &mut dyn Object))
            .unwrap();
        assert_eq!(target.spec.endpoint, "pve.local");
        assert_eq!(target.spec.port, "8006");
        assert!(target.type_meta.is_empty());
    }

    #[test]
    fn test_decode_any_uses_document_kind() {
        let registry = v1alpha1::registry().unwrap();
        let converter = Converter::new(&registry);
        let document = Document::try_from(json!({
            "apiVersion": "vitistack.io/v1alpha1",
            "kind": "MachineList",
            "items": [{"spec": {"name": "a"}}, {"spec": {"name": "b"}}]
        }))
        .unwrap();

        let object = converter.decode_any(&document).unwrap();
        let list = object.downcast::<MachineList>().unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[1].spec.name, "b");
        assert_eq!(list.type_meta.kind, "MachineList");
    }

    #[test]
    fn test_decode_any_unknown_kind() {
        let registry = v1alpha1::registry().unwrap();
        let converter = Converter::new(&registry);

        let document = Document::try_from(json!({"apiVersion": "vitistack.io/v1", "kind": "Machine"})).unwrap();
        let err = converter.decode_any(&document).err().unwrap();
        assert!(matches!(err, Error::UnknownKind { ref kind, .. } if kind == "Machine"));

        let err = converter.decode_any(&Document::new()).err().unwrap();
        assert!(matches!(err, Error::UnknownKind { .. }));
    }

    #[test]
    fn test_type_mismatch_aborts_decode() {
        let registry = v1alpha1::registry().unwrap();
        let converter = Converter::new(&registry);
        let document = Document::try_from(json!({"spec": {"disks": [{"sizeGB": 1.5}]}})).unwrap();

        let err = converter.machine_from_document(&document).unwrap_err();
        match err {
            Error::TypeMismatch { path, .. } => assert_eq!(path, "spec.disks[0].sizeGB"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
