//! The `vitistack.io/v1alpha1` API group.
//!
//! Field keys and omit-empty rules follow the published CRDs. Fields that are
//! required by the CRD are declared `always`, everything else is omitted from
//! documents while empty.

pub mod datacenter;
pub mod kubernetes_cluster;
pub mod kubernetes_provider;
pub mod load_balancer;
pub mod machine;
pub mod machine_provider;
pub mod network_configuration;
pub mod network_namespace;
pub mod proxmox_config;
pub mod vitistack;

pub use datacenter::{Datacenter, DatacenterList};
pub use kubernetes_cluster::{KubernetesCluster, KubernetesClusterList};
pub use kubernetes_provider::{KubernetesProvider, KubernetesProviderList};
pub use load_balancer::{LoadBalancer, LoadBalancerList};
pub use machine::{Machine, MachineList};
pub use machine_provider::{MachineProvider, MachineProviderList};
pub use network_configuration::{NetworkConfiguration, NetworkConfigurationList};
pub use network_namespace::{NetworkNamespace, NetworkNamespaceList};
pub use proxmox_config::{ProxmoxConfig, ProxmoxConfigList};
pub use vitistack::{Vitistack, VitistackList};

use crate::api::meta::GroupVersionKind;
use crate::error::Result;
use crate::resource::{Object, Registry};

pub const GROUP: &str = "vitistack.io";
pub const VERSION: &str = "v1alpha1";

/// `vitistack.io/v1alpha1`
pub fn api_version() -> String {
    format!("{GROUP}/{VERSION}")
}

/// Identity of `kind` in this group version.
pub fn kind(kind: &str) -> GroupVersionKind {
    GroupVersionKind::new(GROUP, VERSION, kind)
}

fn register<K: Object + Default>(registry: &mut Registry, name: &str) -> Result<()> {
    registry.register::<K>(kind(name))
}

/// Register every kind of this group version, list kinds included.
pub fn add_to_registry(registry: &mut Registry) -> Result<()> {
    register::<Machine>(registry, "Machine")?;
    register::<MachineList>(registry, "MachineList")?;
    register::<MachineProvider>(registry, "MachineProvider")?;
    register::<MachineProviderList>(registry, "MachineProviderList")?;
    register::<KubernetesProvider>(registry, "KubernetesProvider")?;
    register::<KubernetesProviderList>(registry, "KubernetesProviderList")?;
    register::<KubernetesCluster>(registry, "KubernetesCluster")?;
    register::<KubernetesClusterList>(registry, "KubernetesClusterList")?;
    register::<NetworkConfiguration>(registry, "NetworkConfiguration")?;
    register::<NetworkConfigurationList>(registry, "NetworkConfigurationList")?;
    register::<NetworkNamespace>(registry, "NetworkNamespace")?;
    register::<NetworkNamespaceList>(registry, "NetworkNamespaceList")?;
    register::<LoadBalancer>(registry, "LoadBalancer")?;
    register::<LoadBalancerList>(registry, "LoadBalancerList")?;
    register::<Datacenter>(registry, "Datacenter")?;
    register::<DatacenterList>(registry, "DatacenterList")?;
    register::<Vitistack>(registry, "Vitistack")?;
    register::<VitistackList>(registry, "VitistackList")?;
    register::<ProxmoxConfig>(registry, "ProxmoxConfig")?;
    register::<ProxmoxConfigList>(registry, "ProxmoxConfigList")?;
    Ok(())
}

/// A fresh registry holding every kind of this group version.
pub fn registry() -> Result<Registry> {
    let mut registry = Registry::new();
    add_to_registry(&mut registry)?;
    Ok(registry)
}
