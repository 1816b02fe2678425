//! MachineProvider: an infrastructure backend that machines are created on.

use std::collections::BTreeMap;

use super::machine::CredentialsReference;
use crate::api::meta::{ListMeta, ObjectMeta, Time, TypeMeta};
use crate::{object, structured};

structured! {
    pub struct MachineProvider {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ObjectMeta as "metadata",
        pub spec: MachineProviderSpec as "spec",
        pub status: MachineProviderStatus as "status",
    }
}

structured! {
    pub struct MachineProviderSpec {
        /// aws, azure, gcp, vsphere, openstack, proxmox, ...
        pub provider_type: String as "providerType" always,
        pub display_name: String as "displayName" always,
        pub region: String as "region" always,
        pub zones: Vec<String> as "zones",
        pub endpoint: ProviderEndpoint as "endpoint",
        pub authentication: ProviderAuthentication as "authentication" always,
        pub capabilities: ProviderCapabilities as "capabilities",
        pub network: ProviderNetworkConfig as "network",
        pub storage: ProviderStorageConfig as "storage",
        pub compute: ProviderComputeConfig as "compute",
        pub default_tags: BTreeMap<String, String> as "defaultTags",
        pub config: BTreeMap<String, String> as "config",
    }
}

structured! {
    pub struct ProviderEndpoint {
        pub url: String as "url",
        pub insecure_skip_verify: bool as "insecureSkipVerify",
        pub ca_bundle: String as "caBundle",
        pub timeout_seconds: i64 as "timeoutSeconds",
        pub retry_attempts: i64 as "retryAttempts",
    }
}

structured! {
    pub struct ProviderAuthentication {
        pub auth_type: String as "type" always,
        pub credentials_ref: Option<CredentialsReference> as "credentialsRef",
        pub service_account: Option<ServiceAccountConfig> as "serviceAccount",
        pub parameters: BTreeMap<String, String> as "parameters",
    }
}

structured! {
    pub struct ServiceAccountConfig {
        pub account_id: String as "accountID" always,
        pub key_ref: Option<CredentialsReference> as "keyRef",
        pub scopes: Vec<String> as "scopes",
    }
}

structured! {
    pub struct ProviderCapabilities {
        pub instance_types: Vec<InstanceTypeInfo> as "instanceTypes",
        pub operating_systems: Vec<OSInfo> as "operatingSystems",
        pub storage_types: Vec<StorageTypeInfo> as "storageTypes",
        pub network_features: Vec<String> as "networkFeatures",
        pub max_machines: i64 as "maxMachines",
        pub auto_scaling: bool as "autoScaling",
        pub load_balancers: bool as "loadBalancers",
        pub persistent_volumes: bool as "persistentVolumes",
    }
}

structured! {
    pub struct InstanceTypeInfo {
        pub name: String as "name" always,
        pub display_name: String as "displayName",
        pub vcpus: i64 as "vcpus" always,
        pub memory_gb: String as "memoryGB" always,
        pub storage_gb: i64 as "storageGB",
        pub network_performance: String as "networkPerformance",
        pub gpu: bool as "gpu",
        pub cost_per_hour: String as "costPerHour",
    }
}

structured! {
    pub struct OSInfo {
        pub family: String as "family" always,
        pub distribution: String as "distribution" always,
        pub versions: Vec<String> as "versions" always,
        pub architectures: Vec<String> as "architectures" always,
        pub default_image_id: String as "defaultImageID",
    }
}

structured! {
    pub struct StorageTypeInfo {
        pub name: String as "name" always,
        pub display_name: String as "displayName",
        /// ssd, hdd, nvme
        pub class: String as "class" always,
        pub iops_range: Option<IOPSRange> as "iopsRange",
        pub throughput_range: Option<ThroughputRange> as "throughputRange",
        pub encryption_supported: bool as "encryptionSupported",
    }
}

structured! {
    pub struct IOPSRange {
        pub min: i64 as "min" always,
        pub max: i64 as "max" always,
    }
}

structured! {
    pub struct ThroughputRange {
        pub min: i64 as "min" always,
        pub max: i64 as "max" always,
    }
}

structured! {
    pub struct ProviderNetworkConfig {
        pub default_vpc: String as "defaultVPC",
        pub available_vpcs: Vec<VPCInfo> as "availableVPCs",
        pub default_security_groups: Vec<String> as "defaultSecurityGroups",
        pub public_ip_support: bool as "publicIPSupport",
        pub ipv6_support: bool as "ipv6Support",
        pub load_balancer_support: bool as "loadBalancerSupport",
    }
}

structured! {
    pub struct VPCInfo {
        pub id: String as "id" always,
        pub name: String as "name" always,
        pub cidr: String as "cidr" always,
        pub subnets: Vec<SubnetInfo> as "subnets",
    }
}

structured! {
    pub struct SubnetInfo {
        pub id: String as "id" always,
        pub name: String as "name" always,
        pub cidr: String as "cidr" always,
        pub zone: String as "zone" always,
        pub public: bool as "public" always,
    }
}

structured! {
    pub struct ProviderStorageConfig {
        pub default_type: String as "defaultType",
        pub storage_classes: Vec<StorageClassInfo> as "storageClasses",
        pub default_encryption: bool as "defaultEncryption",
        pub max_storage_gb: i64 as "maxStorageGB",
    }
}

structured! {
    pub struct StorageClassInfo {
        pub name: String as "name" always,
        pub display_name: String as "displayName",
        pub provisioner: String as "provisioner" always,
        pub parameters: BTreeMap<String, String> as "parameters",
        pub default: bool as "default",
    }
}

structured! {
    pub struct ProviderComputeConfig {
        pub default_instance_type: String as "defaultInstanceType",
        pub max_cpus: i64 as "maxCPUs",
        pub max_memory_gb: i64 as "maxMemoryGB",
        pub gpu_support: bool as "gpuSupport",
        pub gpu_types: Vec<String> as "gpuTypes",
        pub nested_virtualization: bool as "nestedVirtualization",
    }
}

structured! {
    pub struct MachineProviderStatus {
        pub phase: String as "phase",
        pub message: String as "message",
        pub last_verified: Option<Time> as "lastVerified",
        pub quota: ProviderQuotaStatus as "quota",
        pub health: ProviderHealthStatus as "health",
        pub available_resources: ProviderResourcesStatus as "availableResources",
        pub active_machines: i64 as "activeMachines",
        pub provider_status: BTreeMap<String, String> as "providerStatus",
        pub conditions: Vec<ProviderCondition> as "conditions",
    }
}

structured! {
    pub struct ProviderQuotaStatus {
        pub cpu_quota: i64 as "cpuQuota",
        pub cpu_used: i64 as "cpuUsed",
        pub memory_quota_gb: i64 as "memoryQuotaGB",
        pub memory_used_gb: i64 as "memoryUsedGB",
        pub storage_quota_gb: i64 as "storageQuotaGB",
        pub storage_used_gb: i64 as "storageUsedGB",
        pub instance_quota: i64 as "instanceQuota",
        pub instance_used: i64 as "instanceUsed",
        pub network_quota: BTreeMap<String, i64> as "networkQuota",
        pub network_used: BTreeMap<String, i64> as "networkUsed",
    }
}

structured! {
    pub struct ProviderHealthStatus {
        /// Healthy, Degraded, Unhealthy
        pub status: String as "status",
        pub api_connectivity: String as "apiConnectivity",
        pub authentication: String as "authentication",
        pub service_availability: BTreeMap<String, String> as "serviceAvailability",
        pub last_check: Option<Time> as "lastCheck",
        pub response_time_ms: i64 as "responseTimeMs",
    }
}

structured! {
    pub struct ProviderResourcesStatus {
        pub instance_types: Vec<String> as "instanceTypes",
        pub zones: Vec<String> as "zones",
        pub storage_types: Vec<String> as "storageTypes",
        pub images: Vec<ImageInfo> as "images",
        pub limits: ProviderLimits as "limits",
    }
}

structured! {
    pub struct ImageInfo {
        pub id: String as "id" always,
        pub name: String as "name" always,
        pub os_family: String as "osFamily" always,
        pub os_distribution: String as "osDistribution" always,
        pub os_version: String as "osVersion" always,
        pub architecture: String as "architecture" always,
        pub public: bool as "public" always,
        pub creation_date: Option<Time> as "creationDate",
    }
}

structured! {
    pub struct ProviderLimits {
        pub max_machines_per_zone: i64 as "maxMachinesPerZone",
        pub max_storage_per_machine_gb: i64 as "maxStoragePerMachineGB",
        pub max_network_interfaces: i64 as "maxNetworkInterfaces",
        pub rate_limits: BTreeMap<String, String> as "rateLimits",
    }
}

structured! {
    pub struct ProviderCondition {
        pub condition_type: String as "type" always,
        pub status: String as "status" always,
        pub last_transition_time: Time as "lastTransitionTime" always,
        pub reason: String as "reason" always,
        pub message: String as "message" always,
    }
}

structured! {
    pub struct MachineProviderList {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ListMeta as "metadata",
        pub items: Vec<MachineProvider> as "items" always,
    }
}

object!(MachineProvider, MachineProviderList);

pub const MACHINE_PROVIDER_PHASE_PENDING: &str = "Pending";
pub const MACHINE_PROVIDER_PHASE_READY: &str = "Ready";
pub const MACHINE_PROVIDER_PHASE_FAILED: &str = "Failed";
pub const MACHINE_PROVIDER_PHASE_OFFLINE: &str = "Offline";

pub const MACHINE_PROVIDER_CONDITION_READY: &str = "Ready";
pub const MACHINE_PROVIDER_CONDITION_HEALTHY: &str = "Healthy";
pub const MACHINE_PROVIDER_CONDITION_AUTHENTICATED: &str = "Authenticated";
pub const MACHINE_PROVIDER_CONDITION_CONNECTED: &str = "Connected";
pub const MACHINE_PROVIDER_CONDITION_QUOTA_VALID: &str = "QuotaValid";

pub const PROVIDER_HEALTH_STATUS_HEALTHY: &str = "Healthy";
pub const PROVIDER_HEALTH_STATUS_DEGRADED: &str = "Degraded";
pub const PROVIDER_HEALTH_STATUS_UNHEALTHY: &str = "Unhealthy";
