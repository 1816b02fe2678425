//! ProxmoxConfig: connection settings for a Proxmox VE endpoint.

use crate::api::meta::{ListMeta, ObjectMeta, TypeMeta};
use crate::{object, structured};

structured! {
    pub struct ProxmoxConfig {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ObjectMeta as "metadata",
        pub spec: ProxmoxConfigSpec as "spec",
        pub status: ProxmoxConfigStatus as "status",
    }
}

structured! {
    pub struct ProxmoxConfigSpec {
        pub endpoint: String as "endpoint",
        pub port: String as "port",
        pub username: String as "username",
        pub token: String as "token",
        pub name: String as "name",
    }
}

structured! {
    pub struct ProxmoxConfigStatus {
        pub phase: String as "phase",
        pub status: String as "status",
        pub message: String as "message",
        pub created: String as "created",
    }
}

structured! {
    pub struct ProxmoxConfigList {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ListMeta as "metadata",
        pub items: Vec<ProxmoxConfig> as "items" always,
    }
}

object!(ProxmoxConfig, ProxmoxConfigList);
