//! Vitistack: the top-level stack description tying providers to a region.

use std::collections::BTreeMap;

use crate::api::meta::{Condition, ListMeta, ObjectMeta, Time, TypeMeta};
use crate::{object, structured};

structured! {
    pub struct Vitistack {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ObjectMeta as "metadata",
        pub spec: VitistackSpec as "spec",
        pub status: VitistackStatus as "status",
    }
}

structured! {
    /// Desired state of a Vitistack.
    pub struct VitistackSpec {
        pub display_name: String as "displayName" always,
        pub zone: String as "zone",
        pub description: String as "description",
        pub region: String as "region" always,
        pub location: VitistackLocation as "location",
        pub machine_providers: Vec<VitistackProviderReference> as "machineProviders",
        pub kubernetes_providers: Vec<VitistackProviderReference> as "kubernetesProviders",
        pub networking: VitistackNetworking as "networking",
        pub security: VitistackSecurity as "security",
        pub monitoring: VitistackMonitoring as "monitoring",
        pub backup: VitistackBackup as "backup",
        pub resource_quotas: VitistackResourceQuotas as "resourceQuotas",
        pub tags: BTreeMap<String, String> as "tags",
    }
}

structured! {
    pub struct VitistackLocation {
        pub country: String as "country",
        pub city: String as "city",
        pub address: String as "address",
        pub coordinates: VitistackCoordinates as "coordinates",
    }
}

structured! {
    pub struct VitistackCoordinates {
        /// -90 to 90
        pub latitude: String as "latitude",
        /// -180 to 180
        pub longitude: String as "longitude",
    }
}

structured! {
    pub struct VitistackProviderReference {
        pub name: String as "name" always,
        pub namespace: String as "namespace",
        /// 1 is the highest priority
        pub priority: i32 as "priority",
        pub enabled: bool as "enabled",
        pub configuration: BTreeMap<String, String> as "configuration",
    }
}

structured! {
    pub struct VitistackNetworking {
        pub vpcs: Vec<VitistackVPC> as "vpcs",
        pub load_balancers: Vec<VitistackLoadBalancer> as "loadBalancers",
        pub dns: VitistackDNS as "dns",
        pub firewall: VitistackFirewall as "firewall",
    }
}

structured! {
    pub struct VitistackVPC {
        pub name: String as "name" always,
        pub cidr: String as "cidr" always,
        pub subnets: Vec<VitistackSubnet> as "subnets",
        pub default: bool as "default",
    }
}

structured! {
    pub struct VitistackSubnet {
        pub name: String as "name" always,
        pub cidr: String as "cidr" always,
        pub zone: String as "zone",
        pub public: bool as "public",
    }
}

structured! {
    pub struct VitistackLoadBalancer {
        pub name: String as "name" always,
        /// application, network or classic
        pub lb_type: String as "type" always,
        /// internet-facing or internal
        pub scheme: String as "scheme",
    }
}

structured! {
    pub struct VitistackDNS {
        pub servers: Vec<String> as "servers",
        pub domain: String as "domain",
        pub search_domains: Vec<String> as "searchDomains",
    }
}

structured! {
    pub struct VitistackFirewall {
        /// allow or deny
        pub default_policy: String as "defaultPolicy",
        pub rules: Vec<VitistackFirewallRule> as "rules",
    }
}

structured! {
    pub struct VitistackFirewallRule {
        pub name: String as "name" always,
        pub action: String as "action" always,
        /// tcp, udp, icmp or all
        pub protocol: String as "protocol",
        pub port: String as "port",
        pub source: String as "source",
        pub destination: String as "destination",
    }
}

structured! {
    pub struct VitistackSecurity {
        pub compliance_frameworks: Vec<String> as "complianceFrameworks",
        pub encryption: VitistackEncryption as "encryption",
        pub access_control: VitistackAccessControl as "accessControl",
        pub audit_logging: VitistackAuditLogging as "auditLogging",
    }
}

structured! {
    pub struct VitistackEncryption {
        pub at_rest: bool as "atRest",
        pub in_transit: bool as "inTransit",
        pub key_management: String as "keyManagement",
    }
}

structured! {
    pub struct VitistackAccessControl {
        pub rbac: bool as "rbac",
        pub mfa: bool as "mfa",
        pub allowed_users: Vec<String> as "allowedUsers",
        pub allowed_groups: Vec<String> as "allowedGroups",
    }
}

structured! {
    pub struct VitistackAuditLogging {
        pub enabled: bool as "enabled",
        pub retention_days: i32 as "retentionDays",
        /// local, s3, azure or gcs
        pub destination: String as "destination",
    }
}

structured! {
    pub struct VitistackMonitoring {
        pub enabled: bool as "enabled",
        pub metrics_retention_days: i32 as "metricsRetentionDays",
        pub alerting_enabled: bool as "alertingEnabled",
        pub alert_receivers: Vec<String> as "alertReceivers",
        pub custom_dashboards: Vec<String> as "customDashboards",
    }
}

structured! {
    pub struct VitistackBackup {
        pub enabled: bool as "enabled",
        /// Cron schedule
        pub schedule: String as "schedule",
        pub retention_policy: VitistackBackupRetention as "retentionPolicy",
        pub destinations: Vec<VitistackBackupDestination> as "destinations",
        pub disaster_recovery: VitistackDisasterRecovery as "disasterRecovery",
    }
}

structured! {
    pub struct VitistackBackupRetention {
        pub daily: i32 as "daily",
        pub weekly: i32 as "weekly",
        pub monthly: i32 as "monthly",
    }
}

structured! {
    pub struct VitistackBackupDestination {
        pub name: String as "name" always,
        /// s3, azure, gcs or local
        pub destination_type: String as "type" always,
        pub configuration: BTreeMap<String, String> as "configuration",
        pub encryption: bool as "encryption",
    }
}

structured! {
    pub struct VitistackDisasterRecovery {
        pub enabled: bool as "enabled",
        pub target_vitistack: String as "targetVitistack",
        /// Recovery point objective
        pub rpo_minutes: i32 as "rpoMinutes",
        /// Recovery time objective
        pub rto_minutes: i32 as "rtoMinutes",
    }
}

structured! {
    pub struct VitistackResourceQuotas {
        pub max_machines: i32 as "maxMachines",
        pub max_clusters: i32 as "maxClusters",
        pub max_cpu_cores: i32 as "maxCPUCores",
        pub max_memory_gb: i32 as "maxMemoryGB",
        pub max_storage_gb: i32 as "maxStorageGB",
        pub max_network_interfaces: i32 as "maxNetworkInterfaces",
    }
}

structured! {
    /// Observed state of a Vitistack.
    pub struct VitistackStatus {
        pub phase: String as "phase",
        pub conditions: Vec<Condition> as "conditions",
        pub machine_provider_count: i32 as "machineProviderCount",
        pub kubernetes_provider_count: i32 as "kubernetesProviderCount",
        pub active_machines: i32 as "activeMachines",
        pub active_clusters: i32 as "activeClusters",
        pub resource_usage: VitistackResourceUsage as "resourceUsage",
        pub provider_statuses: Vec<VitistackProviderStatus> as "providerStatuses",
        pub last_reconcile_time: Option<Time> as "lastReconcileTime",
        pub observed_generation: i64 as "observedGeneration",
    }
}

structured! {
    pub struct VitistackResourceUsage {
        pub cpu_cores_used: i32 as "cpuCoresUsed",
        pub cpu_cores_total: i32 as "cpuCoresTotal",
        pub memory_gb_used: i32 as "memoryGBUsed",
        pub memory_gb_total: i32 as "memoryGBTotal",
        pub storage_gb_used: i32 as "storageGBUsed",
        pub storage_gb_total: i32 as "storageGBTotal",
        pub network_interfaces_used: i32 as "networkInterfacesUsed",
        pub network_interfaces_total: i32 as "networkInterfacesTotal",
    }
}

structured! {
    pub struct VitistackProviderStatus {
        pub name: String as "name" always,
        /// machine or kubernetes
        pub provider_type: String as "type" always,
        pub phase: String as "phase",
        pub healthy: bool as "healthy",
        pub last_health_check: Option<Time> as "lastHealthCheck",
        pub message: String as "message",
        pub resources_managed: i32 as "resourcesManaged",
    }
}

structured! {
    pub struct VitistackList {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ListMeta as "metadata",
        pub items: Vec<Vitistack> as "items" always,
    }
}

object!(Vitistack, VitistackList);

pub const VITISTACK_PHASE_INITIALIZING: &str = "Initializing";
pub const VITISTACK_PHASE_PROVISIONING: &str = "Provisioning";
pub const VITISTACK_PHASE_READY: &str = "Ready";
pub const VITISTACK_PHASE_DEGRADED: &str = "Degraded";
pub const VITISTACK_PHASE_DELETING: &str = "Deleting";
pub const VITISTACK_PHASE_FAILED: &str = "Failed";

pub const VITISTACK_CONDITION_READY: &str = "Ready";
pub const VITISTACK_CONDITION_PROVIDERS_HEALTHY: &str = "ProvidersHealthy";
pub const VITISTACK_CONDITION_NETWORKING_READY: &str = "NetworkingReady";
pub const VITISTACK_CONDITION_MONITORING_READY: &str = "MonitoringReady";
pub const VITISTACK_CONDITION_BACKUP_READY: &str = "BackupReady";
pub const VITISTACK_CONDITION_SECURITY_COMPLIANT: &str = "SecurityCompliant";
pub const VITISTACK_CONDITION_QUOTA_AVAILABLE: &str = "QuotaAvailable";
