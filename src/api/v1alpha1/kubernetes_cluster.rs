//! KubernetesCluster: a cluster requested from a Kubernetes provider.

use std::collections::BTreeMap;

use crate::api::meta::{Condition, ListMeta, ObjectMeta, Time, TypeMeta};
use crate::{object, structured};

structured! {
    pub struct KubernetesCluster {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ObjectMeta as "metadata",
        pub spec: KubernetesClusterSpec as "spec",
        pub status: KubernetesClusterStatus as "status",
    }
}

structured! {
    pub struct KubernetesClusterSpec {
        pub cluster: KubernetesClusterSpecData as "cluster" always,
        pub topology: KubernetesClusterSpecTopology as "topology" always,
    }
}

structured! {
    /// Placement and ownership of the cluster.
    pub struct KubernetesClusterSpecData {
        pub cluster_uid: String as "clusterUid",
        pub cluster_id: String as "clusterId" always,
        pub provider: String as "provider" always,
        pub datacenter: String as "datacenter" always,
        pub region: String as "region",
        pub zone: String as "zone",
        pub project: String as "project",
        pub workspace: String as "workspace",
        pub workorder: String as "workorder",
        /// dev, test, qa or prod
        pub environment: String as "environment" always,
        pub tags: BTreeMap<String, String> as "tags",
    }
}

structured! {
    pub struct KubernetesClusterSpecTopology {
        /// Kubernetes version, e.g. "1.31.2"
        pub version: String as "version" always,
        pub control_plane: KubernetesClusterSpecControlPlane as "controlplane" always,
        pub workers: KubernetesClusterSpecWorkers as "workers" always,
    }
}

structured! {
    pub struct KubernetesClusterSpecControlPlane {
        pub replicas: i32 as "replicas" always,
        pub version: String as "version",
        pub provider: String as "provider",
        pub machine_class: String as "machineClass" always,
        pub storage: Vec<KubernetesClusterStorage> as "storage",
        pub metadata: KubernetesClusterNodeMetadata as "metadata",
    }
}

structured! {
    pub struct KubernetesClusterSpecWorkers {
        pub node_pools: Vec<KubernetesClusterNodePool> as "nodePools" always,
    }
}

structured! {
    pub struct KubernetesClusterNodePool {
        pub name: String as "name" always,
        pub replicas: i32 as "replicas" always,
        pub version: String as "version",
        pub provider: String as "provider",
        pub machine_class: String as "machineClass" always,
        pub autoscaling: KubernetesClusterAutoscaling as "autoscaling",
        pub storage: Vec<KubernetesClusterStorage> as "storage",
        pub metadata: KubernetesClusterNodeMetadata as "metadata",
    }
}

structured! {
    pub struct KubernetesClusterAutoscaling {
        pub enabled: bool as "enabled" always,
        pub min_replicas: i32 as "minReplicas",
        pub max_replicas: i32 as "maxReplicas",
    }
}

structured! {
    pub struct KubernetesClusterStorage {
        pub class: String as "class" always,
        pub path: String as "path" always,
        /// Kubernetes quantity, e.g. "50Gi"
        pub size: String as "size" always,
    }
}

structured! {
    pub struct KubernetesClusterNodeMetadata {
        pub labels: BTreeMap<String, String> as "labels",
        pub annotations: BTreeMap<String, String> as "annotations",
    }
}

structured! {
    pub struct KubernetesClusterStatus {
        pub state: KubernetesClusterStatusState as "state",
        pub phase: String as "phase",
        pub message: String as "message",
        pub conditions: Vec<Condition> as "conditions",
        pub last_updated: Option<Time> as "lastUpdated",
    }
}

structured! {
    pub struct KubernetesClusterStatusState {
        pub cluster: KubernetesClusterStatusCluster as "cluster",
        pub versions: KubernetesClusterStatusVersions as "versions",
        pub egress_ip: String as "egressIP",
        pub last_updated: Option<Time> as "lastUpdated",
    }
}

structured! {
    pub struct KubernetesClusterStatusCluster {
        pub api_endpoint: String as "apiEndpoint",
        pub node_count: i64 as "nodeCount",
        pub ready_node_count: i64 as "readyNodeCount",
        pub resources: BTreeMap<String, String> as "resources",
    }
}

structured! {
    pub struct KubernetesClusterStatusVersions {
        pub kubernetes: String as "kubernetes",
        pub platform: String as "platform",
        pub components: BTreeMap<String, String> as "components",
    }
}

structured! {
    pub struct KubernetesClusterList {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ListMeta as "metadata",
        pub items: Vec<KubernetesCluster> as "items" always,
    }
}

object!(KubernetesCluster, KubernetesClusterList);
