//! NetworkNamespace: the network segment allocated to a supervisor cluster.

use crate::api::meta::{Condition, ListMeta, ObjectMeta, Time, TypeMeta};
use crate::{object, structured};

structured! {
    pub struct NetworkNamespace {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ObjectMeta as "metadata",
        pub spec: NetworkNamespaceSpec as "spec",
        pub status: NetworkNamespaceStatus as "status",
    }
}

structured! {
    pub struct NetworkNamespaceSpec {
        /// `<country>-<region>-<availability zone>`, e.g. no-west-az1
        pub datacenter_identifier: String as "datacenterIdentifier",
        /// Unique per datacenter
        pub supervisor_identifier: String as "supervisorIdentifier",
        /// Unique per availability zone
        pub cluster_identifier: String as "clusterIdentifier",
        pub provider: String as "provider",
        pub environment: String as "environment",
    }
}

structured! {
    pub struct NetworkNamespaceStatus {
        pub conditions: Vec<Condition> as "conditions",
        pub phase: String as "phase",
        pub status: String as "status",
        pub message: String as "message",
        pub created: Time as "created",
        pub datacenter_identifier: String as "datacenterIdentifier",
        pub supervisor_identifier: String as "supervisorIdentifier",
        pub namespace_id: String as "namespaceId",
        pub cluster_identifier: String as "clusterIdentifier",
        pub ipv4_prefix: String as "ipv4Prefix",
        pub ipv6_prefix: String as "ipv6Prefix",
        pub ipv4_egress_ip: String as "ipv4EgressIp",
        pub ipv6_egress_ip: String as "ipv6EgressIp",
        pub vlan_id: i64 as "vlanId",
        pub associated_kubernetes_cluster_ids: Vec<String> as "associatedKubernetesClusterIds",
    }
}

structured! {
    pub struct NetworkNamespaceList {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ListMeta as "metadata",
        pub items: Vec<NetworkNamespace> as "items" always,
    }
}

object!(NetworkNamespace, NetworkNamespaceList);
