//! Machine: a single virtual or physical machine managed through a provider.

use std::collections::BTreeMap;

use crate::api::meta::{ListMeta, ObjectMeta, Time, TypeMeta};
use crate::{object, structured};

structured! {
    /// Machine is the schema for the machines API.
    pub struct Machine {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ObjectMeta as "metadata",
        pub spec: MachineSpec as "spec",
        pub status: MachineStatus as "status",
    }
}

structured! {
    pub struct MachineSpec {
        /// The name of the machine
        pub name: String as "name",
        /// The instance type/size of the machine (e.g. t3.medium, Standard_B2s)
        pub instance_type: String as "instanceType",
        /// Provider-specific machine type override
        pub machine_type: String as "machineType",
        pub cpu: MachineCPU as "cpu",
        /// Memory in bytes
        pub memory: i64 as "memory",
        pub disks: Vec<MachineSpecDisk> as "disks",
        pub network: MachineNetwork as "network",
        pub os: MachineOS as "os",
        pub provider_config: CloudProviderConfig as "providerConfig",
        pub ssh_keys: Vec<String> as "sshKeys",
        /// User data script to run on first boot
        pub user_data: String as "userData",
        pub tags: BTreeMap<String, String> as "tags",
        pub security_groups: Vec<String> as "securityGroups",
        pub monitoring: bool as "monitoring",
        pub backup: MachineBackup as "backup",
    }
}

structured! {
    pub struct MachineCPU {
        pub cores: i64 as "cores",
        pub threads_per_core: i64 as "threadsPerCore",
        pub sockets: i64 as "sockets",
    }
}

structured! {
    pub struct MachineSpecDisk {
        pub name: String as "name",
        /// Size of the disk in GB
        pub size_gb: i64 as "sizeGB",
        /// Disk type (e.g. gp3, pd-ssd, Premium_LRS)
        pub disk_type: String as "type",
        pub boot: bool as "boot",
        /// Device name (e.g. /dev/sda)
        pub device: String as "device",
        pub encrypted: bool as "encrypted",
        pub iops: i64 as "iops",
        /// Throughput in MB/s
        pub throughput: i64 as "throughput",
    }
}

structured! {
    pub struct MachineNetwork {
        pub vpc: String as "vpc",
        pub subnet: String as "subnet",
        pub assign_public_ip: bool as "assignPublicIP",
        pub private_ip: String as "privateIP",
        pub public_ip: String as "publicIP",
        pub interfaces: Vec<NetworkInterface> as "interfaces",
    }
}

structured! {
    pub struct NetworkInterface {
        pub name: String as "name",
        pub subnet: String as "subnet",
        pub security_groups: Vec<String> as "securityGroups",
        pub primary: bool as "primary",
    }
}

structured! {
    pub struct MachineOS {
        /// linux, windows
        pub family: String as "family",
        pub distribution: String as "distribution",
        pub version: String as "version",
        /// amd64, arm64 or x86_64
        pub architecture: String as "architecture",
        pub image_id: String as "imageID",
        pub image_family: String as "imageFamily",
    }
}

structured! {
    pub struct CloudProviderConfig {
        /// aws, azure, gcp, vsphere, openstack
        pub name: String as "name",
        pub region: String as "region",
        pub zone: String as "zone",
        pub config: BTreeMap<String, String> as "config",
        pub credentials_ref: Option<CredentialsReference> as "credentialsRef",
    }
}

structured! {
    /// Reference to a secret holding credentials.
    pub struct CredentialsReference {
        pub secret_name: String as "secretName",
        /// Defaults to the namespace of the referring object
        pub namespace: String as "namespace",
    }
}

structured! {
    pub struct MachineBackup {
        pub enabled: bool as "enabled",
        /// Cron schedule
        pub schedule: String as "schedule",
        pub retention_days: i64 as "retentionDays",
    }
}

structured! {
    pub struct MachineStatus {
        pub phase: String as "phase",
        pub message: String as "message",
        /// Identifier assigned by the provider
        pub provider_id: String as "providerID",
        pub machine_id: String as "machineID",
        pub state: String as "state",
        pub last_updated: Time as "lastUpdated",
        pub provider: String as "provider",
        pub region: String as "region",
        pub zone: String as "zone",
        pub ip_addresses: Vec<String> as "ipAddresses",
        pub ipv6_addresses: Vec<String> as "ipv6Addresses",
        pub public_ip_addresses: Vec<String> as "publicIPAddresses",
        pub private_ip_addresses: Vec<String> as "privateIPAddresses",
        pub hostname: String as "hostname",
        pub architecture: String as "architecture",
        pub operating_system: String as "operatingSystem",
        pub operating_system_version: String as "operatingSystemVersion",
        pub kernel_version: String as "kernelVersion",
        pub cpus: i64 as "cpus",
        /// Actual memory in bytes
        pub memory: i64 as "memory",
        pub disks: Vec<MachineStatusDisk> as "disks",
        pub network_interfaces: Vec<NetworkInterfaceStatus> as "networkInterfaces",
        pub conditions: Vec<MachineCondition> as "conditions",
        pub boot_time: Option<Time> as "bootTime",
        pub creation_time: Option<Time> as "creationTime",
        pub failure_reason: Option<String> as "failureReason",
        pub failure_message: Option<String> as "failureMessage",
    }
}

structured! {
    /// Disk as reported by the guest.
    pub struct MachineDisk {
        pub name: String as "name" always,
        /// Size in bytes
        pub size: i64 as "size" always,
        pub disk_type: String as "type" always,
        pub mount_point: String as "mountPoint" always,
        pub filesystem_type: String as "filesystemType" always,
        pub uuid: String as "uuid" always,
        pub label: String as "label" always,
        pub serial_number: String as "serialNumber" always,
    }
}

structured! {
    pub struct MachineStatusDisk {
        pub name: String as "name",
        /// Size in bytes
        pub size: i64 as "size",
        pub disk_type: String as "type",
        pub mount_point: String as "mountPoint",
        pub pvc_name: String as "pvcName",
        /// filesystem or block
        pub volume_mode: String as "volumeMode",
        pub access_modes: Vec<String> as "accessModes",
        pub filesystem_type: String as "filesystemType",
        pub uuid: String as "uuid",
        pub label: String as "label",
        pub serial_number: String as "serialNumber",
        pub device: String as "device",
        pub used_bytes: i64 as "usedBytes",
        pub available_bytes: i64 as "availableBytes",
        /// e.g. "75.5%"
        pub usage_percent: String as "usagePercent",
    }
}

structured! {
    pub struct NetworkInterfaceStatus {
        pub name: String as "name",
        pub mac_address: String as "macAddress",
        pub ip_addresses: Vec<String> as "ipAddresses",
        pub ipv6_addresses: Vec<String> as "ipv6Addresses",
        /// up, down
        pub state: String as "state",
        pub mtu: i64 as "mtu",
        pub interface_type: String as "type",
    }
}

structured! {
    pub struct MachineCondition {
        pub condition_type: String as "type",
        /// True, False or Unknown
        pub status: String as "status",
        pub last_transition_time: Time as "lastTransitionTime",
        pub reason: String as "reason",
        pub message: String as "message",
    }
}

structured! {
    /// MachineList contains a list of Machine.
    pub struct MachineList {
        pub type_meta: TypeMeta as "" inline,
        pub metadata: ListMeta as "metadata",
        pub items: Vec<Machine> as "items" always,
    }
}

object!(Machine, MachineList);

pub const MACHINE_PHASE_PENDING: &str = "Pending";
pub const MACHINE_PHASE_CREATING: &str = "Creating";
pub const MACHINE_PHASE_RUNNING: &str = "Running";
pub const MACHINE_PHASE_STOPPING: &str = "Stopping";
pub const MACHINE_PHASE_STOPPED: &str = "Stopped";
pub const MACHINE_PHASE_TERMINATING: &str = "Terminating";
pub const MACHINE_PHASE_TERMINATED: &str = "Terminated";
pub const MACHINE_PHASE_FAILED: &str = "Failed";

pub const MACHINE_CONDITION_READY: &str = "Ready";
pub const MACHINE_CONDITION_NETWORK_READY: &str = "NetworkReady";
pub const MACHINE_CONDITION_BOOTSTRAP_READY: &str = "BootstrapReady";
pub const MACHINE_CONDITION_INFRASTRUCTURE_READY: &str = "InfrastructureReady";
pub const MACHINE_CONDITION_DRAIN_READY: &str = "DrainReady";
pub const MACHINE_CONDITION_BACKUP_READY: &str = "BackupReady";
