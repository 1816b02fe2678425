//! NetworkConfiguration: the network interfaces handed to a machine.

use crate::api::meta::{Condition, ListMeta, ObjectMeta, Time, TypeMeta};
use crate::{object, structured};

structured! {
    pub struct NetworkConfiguration {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ObjectMeta as "metadata",
        pub spec: NetworkConfigurationSpec as "spec",
        pub status: NetworkConfigurationStatus as "status",
    }
}

structured! {
    pub struct NetworkConfigurationSpec {
        /// 2 to 32 characters of `[A-Za-z0-9_-]`
        pub name: String as "name" always,
        pub description: String as "description",
        pub datacenter_identifier: String as "datacenterIdentifier",
        pub supervisor_identifier: String as "supervisorIdentifier",
        pub cluster_identifier: String as "clusterIdentifier",
        pub provider: String as "provider",
        pub network_interfaces: Vec<NetworkConfigurationInterface> as "networkInterfaces",
    }
}

structured! {
    pub struct NetworkConfigurationStatus {
        pub conditions: Vec<Condition> as "conditions",
        pub phase: String as "phase",
        pub status: String as "status",
        pub message: String as "message",
        pub created: Time as "created",
        pub network_interfaces: Vec<NetworkConfigurationInterface> as "networkInterfaces",
    }
}

structured! {
    pub struct NetworkConfigurationInterface {
        pub name: String as "name",
        pub mac_address: String as "macAddress",
        pub ipv4_addresses: Vec<String> as "ipv4Addresses",
        pub ipv6_addresses: Vec<String> as "ipv6Addresses",
        pub vlan: String as "vlan",
        pub ipv4_subnet: String as "ipv4Subnet",
        pub ipv6_subnet: String as "ipv6Subnet",
        pub ipv4_gateway: String as "ipv4Gateway",
        pub ipv6_gateway: String as "ipv6Gateway",
        pub dns: Vec<String> as "dns",
        /// Reserved in the DHCP server(s)
        pub dhcp_reserved: bool as "dhcpReserved",
    }
}

structured! {
    pub struct NetworkConfigurationList {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ListMeta as "metadata",
        pub items: Vec<NetworkConfiguration> as "items" always,
    }
}

object!(NetworkConfiguration, NetworkConfigurationList);
