//! LoadBalancer: a virtual IP spreading traffic over a pool of members.

use crate::api::meta::{Condition, ListMeta, ObjectMeta, Time, TypeMeta};
use crate::{object, structured};

structured! {
    pub struct LoadBalancer {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ObjectMeta as "metadata",
        pub spec: LoadBalancerSpec as "spec",
        pub status: LoadBalancerStatus as "status",
    }
}

structured! {
    pub struct LoadBalancerSpec {
        pub datacenter_name: String as "datacenterName",
        pub cluster_name: String as "clusterName",
        pub provider: String as "provider",
        /// round-robin, least-session or first-alive
        pub method: String as "method",
        /// e.g. control plane addresses
        pub pool_members: Vec<String> as "poolMembers",
    }
}

structured! {
    pub struct LoadBalancerStatus {
        pub conditions: Vec<Condition> as "conditions",
        pub phase: String as "phase",
        pub status: String as "status",
        pub message: String as "message",
        pub created: Time as "created",
        pub load_balancer_ips: Vec<String> as "loadBalancerIps",
        pub method: String as "method",
        pub pool_members: Vec<String> as "poolMembers",
    }
}

structured! {
    pub struct LoadBalancerList {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ListMeta as "metadata",
        pub items: Vec<LoadBalancer> as "items" always,
    }
}

object!(LoadBalancer, LoadBalancerList);

pub const LOAD_BALANCER_METHOD_ROUND_ROBIN: &str = "round-robin";
pub const LOAD_BALANCER_METHOD_LEAST_SESSION: &str = "least-session";
pub const LOAD_BALANCER_METHOD_FIRST_ALIVE: &str = "first-alive";
