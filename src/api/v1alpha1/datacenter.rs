//! Datacenter: a physical or logical site and the providers available in it.

use std::collections::BTreeMap;

use crate::api::meta::{Condition, ListMeta, ObjectMeta, Time, TypeMeta};
use crate::{object, structured};

structured! {
    pub struct Datacenter {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ObjectMeta as "metadata",
        pub spec: DatacenterSpec as "spec",
        pub status: DatacenterStatus as "status",
    }
}

structured! {
    /// Desired state of a Datacenter.
    pub struct DatacenterSpec {
        pub display_name: String as "displayName" always,
        pub description: String as "description",
        pub region: String as "region" always,
        pub zone: String as "zone",
        pub location: DatacenterLocation as "location",
        pub machine_providers: Vec<DatacenterProviderReference> as "machineProviders" always,
        pub kubernetes_providers: Vec<DatacenterProviderReference> as "kubernetesProviders",
        pub networking: DatacenterNetworking as "networking",
        pub security: DatacenterSecurity as "security",
        pub monitoring: DatacenterMonitoring as "monitoring",
        pub backup: DatacenterBackup as "backup",
        pub resource_quotas: DatacenterResourceQuotas as "resourceQuotas",
        pub tags: BTreeMap<String, String> as "tags",
    }
}

structured! {
    pub struct DatacenterLocation {
        pub country: String as "country",
        pub city: String as "city",
        pub address: String as "address",
        pub coordinates: DatacenterCoordinates as "coordinates",
    }
}

structured! {
    pub struct DatacenterCoordinates {
        /// -90 to 90
        pub latitude: String as "latitude",
        /// -180 to 180
        pub longitude: String as "longitude",
    }
}

structured! {
    pub struct DatacenterProviderReference {
        pub name: String as "name" always,
        pub namespace: String as "namespace",
        /// 1 is the highest priority
        pub priority: i32 as "priority",
        pub enabled: bool as "enabled",
        pub configuration: BTreeMap<String, String> as "configuration",
    }
}

structured! {
    pub struct DatacenterNetworking {
        pub vpcs: Vec<DatacenterVPC> as "vpcs",
        pub load_balancers: Vec<DatacenterLoadBalancer> as "loadBalancers",
        pub dns: DatacenterDNS as "dns",
        pub firewall: DatacenterFirewall as "firewall",
    }
}

structured! {
    pub struct DatacenterVPC {
        pub name: String as "name" always,
        pub cidr: String as "cidr" always,
        pub subnets: Vec<DatacenterSubnet> as "subnets",
        pub default: bool as "default",
    }
}

structured! {
    pub struct DatacenterSubnet {
        pub name: String as "name" always,
        pub cidr: String as "cidr" always,
        pub zone: String as "zone",
        pub public: bool as "public",
    }
}

structured! {
    pub struct DatacenterLoadBalancer {
        pub name: String as "name" always,
        /// application, network or classic
        pub lb_type: String as "type" always,
        /// internet-facing or internal
        pub scheme: String as "scheme",
    }
}

structured! {
    pub struct DatacenterDNS {
        pub servers: Vec<String> as "servers",
        pub domain: String as "domain",
        pub search_domains: Vec<String> as "searchDomains",
    }
}

structured! {
    pub struct DatacenterFirewall {
        /// allow or deny
        pub default_policy: String as "defaultPolicy",
        pub rules: Vec<DatacenterFirewallRule> as "rules",
    }
}

structured! {
    pub struct DatacenterFirewallRule {
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
    pub struct DatacenterSecurity {
        pub compliance_frameworks: Vec<String> as "complianceFrameworks",
        pub encryption: DatacenterEncryption as "encryption",
        pub access_control: DatacenterAccessControl as "accessControl",
        pub audit_logging: DatacenterAuditLogging as "auditLogging",
    }
}

structured! {
    pub struct DatacenterEncryption {
        pub at_rest: bool as "atRest",
        pub in_transit: bool as "inTransit",
        pub key_management: String as "keyManagement",
    }
}

structured! {
    pub struct DatacenterAccessControl {
        pub rbac: bool as "rbac",
        pub mfa: bool as "mfa",
        pub allowed_users: Vec<String> as "allowedUsers",
        pub allowed_groups: Vec<String> as "allowedGroups",
    }
}

structured! {
    pub struct DatacenterAuditLogging {
        pub enabled: bool as "enabled",
        pub retention_days: i32 as "retentionDays",
        /// local, s3, azure or gcs
        pub destination: String as "destination",
    }
}

structured! {
    pub struct DatacenterMonitoring {
        pub enabled: bool as "enabled",
        pub metrics_retention_days: i32 as "metricsRetentionDays",
        pub alerting_enabled: bool as "alertingEnabled",
        pub alert_receivers: Vec<String> as "alertReceivers",
        pub custom_dashboards: Vec<String> as "customDashboards",
    }
}

structured! {
    pub struct DatacenterBackup {
        pub enabled: bool as "enabled",
        /// Cron schedule
        pub schedule: String as "schedule",
        pub retention_policy: DatacenterBackupRetention as "retentionPolicy",
        pub destinations: Vec<DatacenterBackupDestination> as "destinations",
        pub disaster_recovery: DatacenterDisasterRecovery as "disasterRecovery",
    }
}

structured! {
    pub struct DatacenterBackupRetention {
        pub daily: i32 as "daily",
        pub weekly: i32 as "weekly",
        pub monthly: i32 as "monthly",
    }
}

structured! {
    pub struct DatacenterBackupDestination {
        pub name: String as "name" always,
        /// s3, azure, gcs or local
        pub destination_type: String as "type" always,
        pub configuration: BTreeMap<String, String> as "configuration",
        pub encryption: bool as "encryption",
    }
}

structured! {
    pub struct DatacenterDisasterRecovery {
        pub enabled: bool as "enabled",
        pub target_datacenter: String as "targetDatacenter",
        /// Recovery point objective
        pub rpo_minutes: i32 as "rpoMinutes",
        /// Recovery time objective
        pub rto_minutes: i32 as "rtoMinutes",
    }
}

structured! {
    pub struct DatacenterResourceQuotas {
        pub max_machines: i32 as "maxMachines",
        pub max_clusters: i32 as "maxClusters",
        pub max_cpu_cores: i32 as "maxCPUCores",
        pub max_memory_gb: i32 as "maxMemoryGB",
        pub max_storage_gb: i32 as "maxStorageGB",
        pub max_network_interfaces: i32 as "maxNetworkInterfaces",
    }
}

structured! {
    /// Observed state of a Datacenter.
    pub struct DatacenterStatus {
        pub phase: String as "phase",
        pub conditions: Vec<Condition> as "conditions",
        pub machine_provider_count: i32 as "machineProviderCount",
        pub kubernetes_provider_count: i32 as "kubernetesProviderCount",
        pub active_machines: i32 as "activeMachines",
        pub active_clusters: i32 as "activeClusters",
        pub resource_usage: DatacenterResourceUsage as "resourceUsage",
        pub provider_statuses: Vec<DatacenterProviderStatus> as "providerStatuses",
        pub last_reconcile_time: Option<Time> as "lastReconcileTime",
        pub observed_generation: i64 as "observedGeneration",
    }
}

structured! {
    pub struct DatacenterResourceUsage {
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
    pub struct DatacenterProviderStatus {
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
    pub struct DatacenterList {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ListMeta as "metadata",
        pub items: Vec<Datacenter> as "items" always,
    }
}

object!(Datacenter, DatacenterList);

pub const DATACENTER_PHASE_INITIALIZING: &str = "Initializing";
pub const DATACENTER_PHASE_PROVISIONING: &str = "Provisioning";
pub const DATACENTER_PHASE_READY: &str = "Ready";
pub const DATACENTER_PHASE_DEGRADED: &str = "Degraded";
pub const DATACENTER_PHASE_DELETING: &str = "Deleting";
pub const DATACENTER_PHASE_FAILED: &str = "Failed";

pub const DATACENTER_CONDITION_READY: &str = "Ready";
pub const DATACENTER_CONDITION_PROVIDERS_HEALTHY: &str = "ProvidersHealthy";
pub const DATACENTER_CONDITION_NETWORKING_READY: &str = "NetworkingReady";
pub const DATACENTER_CONDITION_MONITORING_READY: &str = "MonitoringReady";
pub const DATACENTER_CONDITION_BACKUP_READY: &str = "BackupReady";
pub const DATACENTER_CONDITION_SECURITY_COMPLIANT: &str = "SecurityCompliant";
pub const DATACENTER_CONDITION_QUOTA_AVAILABLE: &str = "QuotaAvailable";
