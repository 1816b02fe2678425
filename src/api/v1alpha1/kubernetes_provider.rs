//! KubernetesProvider: a managed Kubernetes offering and the clusters it runs.

use std::collections::BTreeMap;

use super::machine::CredentialsReference;
use crate::api::meta::{ListMeta, ObjectMeta, Time, TypeMeta};
use crate::{object, structured};

structured! {
    pub struct KubernetesProvider {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ObjectMeta as "metadata",
        pub spec: KubernetesProviderSpec as "spec",
        pub status: KubernetesProviderStatus as "status",
    }
}

structured! {
    pub struct KubernetesProviderSpec {
        /// eks, aks, gke, talos, rke2, ...
        pub provider_type: String as "providerType" always,
        pub display_name: String as "displayName" always,
        /// Kubernetes version to deploy
        pub version: String as "version" always,
        pub region: String as "region" always,
        pub zones: Vec<String> as "zones",
        pub cluster: KubernetesClusterConfig as "cluster" always,
        pub node_pools: Vec<NodePoolConfig> as "nodePools",
        pub network: KubernetesNetworkConfig as "network",
        pub addons: KubernetesAddonsConfig as "addons",
        pub security: KubernetesSecurityConfig as "security",
        pub observability: KubernetesObservabilityConfig as "observability",
        pub backup: KubernetesBackupConfig as "backup",
        pub machine_provider_ref: Option<MachineProviderReference> as "machineProviderRef",
        pub authentication: KubernetesAuthConfig as "authentication",
        pub default_tags: BTreeMap<String, String> as "defaultTags",
        pub config: BTreeMap<String, String> as "config",
    }
}

structured! {
    pub struct KubernetesClusterConfig {
        pub endpoint: String as "endpoint",
        pub api_server: APIServerConfig as "apiServer",
        pub etcd: ETCDConfig as "etcd",
        pub control_plane: ControlPlaneConfig as "controlPlane",
        pub dns: DNSConfig as "dns",
        pub feature_gates: BTreeMap<String, bool> as "featureGates",
        pub api_server_extra_args: BTreeMap<String, String> as "apiServerExtraArgs",
        pub controller_manager_extra_args: BTreeMap<String, String> as "controllerManagerExtraArgs",
        pub scheduler_extra_args: BTreeMap<String, String> as "schedulerExtraArgs",
    }
}

structured! {
    pub struct APIServerConfig {
        pub audit_logging: bool as "auditLogging",
        pub audit_log_retention_days: i64 as "auditLogRetentionDays",
        pub encryption_at_rest: bool as "encryptionAtRest",
        pub admission_plugins: Vec<String> as "admissionPlugins",
        pub disable_admission_plugins: Vec<String> as "disableAdmissionPlugins",
    }
}

structured! {
    pub struct ETCDConfig {
        pub version: String as "version",
        pub backup_enabled: bool as "backupEnabled",
        pub backup_schedule: String as "backupSchedule",
        pub backup_retention_days: i64 as "backupRetentionDays",
        pub encryption: bool as "encryption",
    }
}

structured! {
    pub struct ControlPlaneConfig {
        pub replicas: i64 as "replicas",
        pub instance_type: String as "instanceType",
        pub disk_size_gb: i64 as "diskSizeGB",
    }
}

structured! {
    pub struct DNSConfig {
        pub provider: String as "provider",
        pub domain: String as "domain",
        pub upstream_servers: Vec<String> as "upstreamServers",
    }
}

structured! {
    pub struct NodePoolConfig {
        pub name: String as "name" always,
        pub instance_type: String as "instanceType" always,
        pub min_nodes: i64 as "minNodes" always,
        pub max_nodes: i64 as "maxNodes" always,
        pub desired_nodes: i64 as "desiredNodes" always,
        pub labels: BTreeMap<String, String> as "labels",
        pub taints: Vec<NodeTaint> as "taints",
        pub zones: Vec<String> as "zones",
        pub auto_scaling: Option<NodePoolAutoScaling> as "autoScaling",
        pub node_config: NodeConfig as "nodeConfig",
    }
}

structured! {
    pub struct NodeTaint {
        pub key: String as "key" always,
        pub value: String as "value",
        /// NoSchedule, PreferNoSchedule or NoExecute
        pub effect: String as "effect" always,
    }
}

structured! {
    pub struct NodePoolAutoScaling {
        pub enabled: bool as "enabled" always,
        pub scale_down_delay_after_add: String as "scaleDownDelayAfterAdd",
        pub scale_down_delay_after_delete: String as "scaleDownDelayAfterDelete",
        pub scale_down_delay_after_failure: String as "scaleDownDelayAfterFailure",
        pub scale_down_unneeded_time: String as "scaleDownUnneededTime",
    }
}

structured! {
    pub struct NodeConfig {
        pub os: NodeOSConfig as "os",
        pub disk: NodeDiskConfig as "disk",
        pub network: NodeNetworkConfig as "network",
        pub security: NodeSecurityConfig as "security",
        pub kubelet: KubeletConfig as "kubelet",
    }
}

structured! {
    pub struct NodeOSConfig {
        pub image: String as "image",
        pub os_type: String as "type",
        pub user_data: String as "userData",
    }
}

structured! {
    pub struct NodeDiskConfig {
        pub size_gb: i64 as "sizeGB",
        pub disk_type: String as "type",
        pub encrypted: bool as "encrypted",
    }
}

structured! {
    pub struct NodeNetworkConfig {
        pub subnet_ids: Vec<String> as "subnetIDs",
        pub security_group_ids: Vec<String> as "securityGroupIDs",
        pub assign_public_ip: bool as "assignPublicIP",
    }
}

structured! {
    pub struct NodeSecurityConfig {
        pub ssh_key_pairs: Vec<String> as "sshKeyPairs",
        pub iam_instance_profile: String as "iamInstanceProfile",
        pub security_groups: Vec<String> as "securityGroups",
    }
}

structured! {
    pub struct KubeletConfig {
        pub extra_args: BTreeMap<String, String> as "extraArgs",
        pub max_pods: i64 as "maxPods",
    }
}

structured! {
    pub struct KubernetesNetworkConfig {
        pub cni_plugin: String as "cniPlugin",
        pub pod_cidr: String as "podCIDR",
        pub service_cidr: String as "serviceCIDR",
        pub dns_service_ip: String as "dnsServiceIP",
        pub network_policy: bool as "networkPolicy",
        pub load_balancer: LoadBalancerConfig as "loadBalancer",
    }
}

structured! {
    pub struct LoadBalancerConfig {
        pub lb_type: String as "type",
        pub class: String as "class",
        pub annotations: BTreeMap<String, String> as "annotations",
    }
}

structured! {
    pub struct KubernetesAddonsConfig {
        pub ingress_controller: Option<IngressControllerConfig> as "ingressController",
        pub storage: Option<StorageConfig> as "storage",
        pub monitoring: Option<MonitoringConfig> as "monitoring",
        pub service_mesh: Option<ServiceMeshConfig> as "serviceMesh",
        pub additional: Vec<AddonConfig> as "additional",
    }
}

structured! {
    pub struct IngressControllerConfig {
        pub controller_type: String as "type",
        pub enabled: bool as "enabled" always,
        pub config: BTreeMap<String, String> as "config",
    }
}

structured! {
    pub struct StorageConfig {
        pub default_class: String as "defaultClass",
        pub classes: Vec<StorageClassConfig> as "classes",
    }
}

structured! {
    pub struct StorageClassConfig {
        pub name: String as "name" always,
        pub provisioner: String as "provisioner" always,
        pub parameters: BTreeMap<String, String> as "parameters",
        pub default: bool as "default",
    }
}

structured! {
    pub struct MonitoringConfig {
        pub prometheus: bool as "prometheus",
        pub grafana: bool as "grafana",
        pub alert_manager: bool as "alertManager",
        pub config: BTreeMap<String, String> as "config",
    }
}

structured! {
    pub struct ServiceMeshConfig {
        pub mesh_type: String as "type",
        pub enabled: bool as "enabled" always,
        pub config: BTreeMap<String, String> as "config",
    }
}

structured! {
    pub struct AddonConfig {
        pub name: String as "name" always,
        pub version: String as "version",
        pub enabled: bool as "enabled" always,
        pub config: BTreeMap<String, String> as "config",
    }
}

structured! {
    pub struct KubernetesSecurityConfig {
        pub pod_security_standards: bool as "podSecurityStandards",
        /// privileged, baseline or restricted
        pub pod_security_level: String as "podSecurityLevel",
        pub network_policies: bool as "networkPolicies",
        pub rbac: bool as "rbac",
        pub image_scanning: bool as "imageScanning",
        pub runtime_security: Option<RuntimeSecurityConfig> as "runtimeSecurity",
    }
}

structured! {
    pub struct RuntimeSecurityConfig {
        pub enabled: bool as "enabled" always,
        pub provider: String as "provider",
        pub config: BTreeMap<String, String> as "config",
    }
}

structured! {
    pub struct KubernetesObservabilityConfig {
        pub logging: Option<LoggingConfig> as "logging",
        pub metrics: Option<MetricsConfig> as "metrics",
        pub tracing: Option<TracingConfig> as "tracing",
    }
}

structured! {
    pub struct LoggingConfig {
        pub enabled: bool as "enabled" always,
        pub backend: String as "backend",
        pub retention_days: i64 as "retentionDays",
        pub config: BTreeMap<String, String> as "config",
    }
}

structured! {
    pub struct MetricsConfig {
        pub enabled: bool as "enabled" always,
        pub backend: String as "backend",
        pub retention_days: i64 as "retentionDays",
        pub config: BTreeMap<String, String> as "config",
    }
}

structured! {
    pub struct TracingConfig {
        pub enabled: bool as "enabled" always,
        pub backend: String as "backend",
        pub sampling_rate: String as "samplingRate",
        pub config: BTreeMap<String, String> as "config",
    }
}

structured! {
    pub struct KubernetesBackupConfig {
        pub enabled: bool as "enabled" always,
        pub provider: String as "provider",
        pub schedule: String as "schedule",
        pub retention_days: i64 as "retentionDays",
        pub storage_location: String as "storageLocation",
        pub config: BTreeMap<String, String> as "config",
    }
}

structured! {
    pub struct MachineProviderReference {
        pub name: String as "name" always,
        pub namespace: String as "namespace",
    }
}

structured! {
    pub struct KubernetesAuthConfig {
        pub providers: Vec<AuthProvider> as "providers",
        pub oidc: Option<OIDCConfig> as "oidc",
        pub ldap: Option<LDAPConfig> as "ldap",
        pub service_account: Option<ServiceAccountAuthConfig> as "serviceAccount",
    }
}

structured! {
    pub struct AuthProvider {
        pub name: String as "name" always,
        pub provider_type: String as "type" always,
        pub config: BTreeMap<String, String> as "config",
    }
}

structured! {
    pub struct OIDCConfig {
        pub issuer_url: String as "issuerURL" always,
        pub client_id: String as "clientID" always,
        pub client_secret_ref: Option<CredentialsReference> as "clientSecretRef",
        pub username_claim: String as "usernameClaim",
        pub groups_claim: String as "groupsClaim",
    }
}

structured! {
    pub struct LDAPConfig {
        pub server_url: String as "serverURL" always,
        pub bind_dn: String as "bindDN" always,
        pub bind_password_ref: Option<CredentialsReference> as "bindPasswordRef",
        pub user_search_base: String as "userSearchBase" always,
        pub group_search_base: String as "groupSearchBase" always,
    }
}

structured! {
    pub struct ServiceAccountAuthConfig {
        pub default_name: String as "defaultName",
        pub signing_key_ref: Option<CredentialsReference> as "signingKeyRef",
    }
}

structured! {
    pub struct KubernetesProviderStatus {
        pub phase: String as "phase",
        pub message: String as "message",
        pub cluster: KubernetesClusterStatus as "cluster",
        pub node_pools: Vec<NodePoolStatus> as "nodePools",
        pub node_count: i64 as "nodeCount",
        pub ready_node_count: i64 as "readyNodeCount",
        pub version: KubernetesVersionStatus as "version",
        pub addons: Vec<AddonStatus> as "addons",
        pub capacity: KubernetesCapacityStatus as "capacity",
        pub health: KubernetesHealthStatus as "health",
        pub security: KubernetesSecurityStatus as "security",
        pub endpoints: KubernetesEndpointStatus as "endpoints",
        pub last_updated: Option<Time> as "lastUpdated",
        pub conditions: Vec<KubernetesProviderCondition> as "conditions",
    }
}

structured! {
    pub struct KubernetesClusterStatus {
        pub id: String as "id",
        pub state: String as "state",
        pub endpoint: String as "endpoint",
        pub certificate_authority_data: String as "certificateAuthorityData",
        pub oidc_issuer_url: String as "oidcIssuerURL",
        pub platform_version: String as "platformVersion",
        pub created_at: Option<Time> as "createdAt",
    }
}

structured! {
    pub struct NodePoolStatus {
        pub name: String as "name" always,
        pub state: String as "state" always,
        pub current_nodes: i64 as "currentNodes" always,
        pub ready_nodes: i64 as "readyNodes" always,
        pub desired_nodes: i64 as "desiredNodes" always,
        pub instance_type: String as "instanceType" always,
        pub auto_scaling: Option<NodePoolAutoScalingStatus> as "autoScaling",
        pub health: String as "health",
        pub last_updated: Option<Time> as "lastUpdated",
    }
}

structured! {
    pub struct NodePoolAutoScalingStatus {
        pub enabled: bool as "enabled" always,
        pub min_nodes: i64 as "minNodes" always,
        pub max_nodes: i64 as "maxNodes" always,
        pub last_scaling_action: String as "lastScalingAction",
        pub last_scaling_time: Option<Time> as "lastScalingTime",
    }
}

structured! {
    pub struct KubernetesVersionStatus {
        pub current: String as "current",
        pub available_upgrades: Vec<String> as "availableUpgrades",
        pub platform: String as "platform",
        pub control_plane: String as "controlPlane",
        pub node: String as "node",
    }
}

structured! {
    pub struct AddonStatus {
        pub name: String as "name" always,
        pub version: String as "version",
        pub status: String as "status" always,
        pub health: String as "health",
        pub configuration_status: String as "configurationStatus",
        pub last_updated: Option<Time> as "lastUpdated",
    }
}

structured! {
    /// Capacity and usage, as Kubernetes quantity strings.
    pub struct KubernetesCapacityStatus {
        pub cpu: String as "cpu",
        pub memory: String as "memory",
        pub storage: String as "storage",
        pub pods: String as "pods",
        pub cpu_usage: String as "cpuUsage",
        pub memory_usage: String as "memoryUsage",
        pub storage_usage: String as "storageUsage",
        pub pods_usage: String as "podsUsage",
    }
}

structured! {
    pub struct KubernetesHealthStatus {
        pub overall: String as "overall",
        pub api_server: String as "apiServer",
        pub etcd: String as "etcd",
        pub controller_manager: String as "controllerManager",
        pub scheduler: String as "scheduler",
        pub core_dns: String as "coreDNS",
        pub nodes: String as "nodes",
        pub last_check: Option<Time> as "lastCheck",
    }
}

structured! {
    pub struct KubernetesSecurityStatus {
        pub pod_security_standards: String as "podSecurityStandards",
        pub network_policies: String as "networkPolicies",
        pub rbac: String as "rbac",
        pub image_scanning: String as "imageScanning",
        pub runtime_security: String as "runtimeSecurity",
        pub security_scan_results: BTreeMap<String, String> as "securityScanResults",
        pub last_security_scan: Option<Time> as "lastSecurityScan",
    }
}

structured! {
    pub struct KubernetesEndpointStatus {
        pub api_server: String as "apiServer",
        pub ingress: Vec<String> as "ingress",
        pub load_balancer: Vec<String> as "loadBalancer",
        pub monitoring: BTreeMap<String, String> as "monitoring",
    }
}

structured! {
    pub struct KubernetesProviderCondition {
        pub condition_type: String as "type" always,
        pub status: String as "status" always,
        pub last_transition_time: Time as "lastTransitionTime" always,
        pub reason: String as "reason" always,
        pub message: String as "message" always,
    }
}

structured! {
    pub struct KubernetesProviderList {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ListMeta as "metadata",
        pub items: Vec<KubernetesProvider> as "items" always,
    }
}

object!(KubernetesProvider, KubernetesProviderList);

pub const KUBERNETES_PROVIDER_PHASE_PENDING: &str = "Pending";
pub const KUBERNETES_PROVIDER_PHASE_READY: &str = "Ready";
pub const KUBERNETES_PROVIDER_PHASE_FAILED: &str = "Failed";
pub const KUBERNETES_PROVIDER_PHASE_UPDATING: &str = "Updating";

pub const KUBERNETES_PROVIDER_CONDITION_READY: &str = "Ready";
pub const KUBERNETES_PROVIDER_CONDITION_HEALTHY: &str = "Healthy";
pub const KUBERNETES_PROVIDER_CONDITION_API_SERVER_READY: &str = "APIServerReady";
pub const KUBERNETES_PROVIDER_CONDITION_NODES_READY: &str = "NodesReady";
pub const KUBERNETES_PROVIDER_CONDITION_ADDONS_READY: &str = "AddonsReady";
pub const KUBERNETES_PROVIDER_CONDITION_NETWORK_READY: &str = "NetworkReady";
pub const KUBERNETES_PROVIDER_CONDITION_SECURITY_READY: &str = "SecurityReady";

pub const KUBERNETES_CLUSTER_STATE_CREATING: &str = "creating";
pub const KUBERNETES_CLUSTER_STATE_ACTIVE: &str = "active";
pub const KUBERNETES_CLUSTER_STATE_UPDATING: &str = "updating";
pub const KUBERNETES_CLUSTER_STATE_DELETING: &str = "deleting";
pub const KUBERNETES_CLUSTER_STATE_FAILED: &str = "failed";
