//! Conversion tests against the vitistack.io/v1alpha1 registry
//!
//! These tests drive the public facade the way a consumer would: build typed
//! resources, turn them into documents and back, and check the laws the
//! converter promises.

use serde_json::{json, Value};
use vitistack_crds::api::meta::{Condition, Time, CONDITION_TRUE};
use vitistack_crds::api::v1alpha1::{
    self, datacenter::DatacenterProviderReference, machine::MachineSpecDisk, Datacenter,
    KubernetesCluster, KubernetesProvider, LoadBalancer, Machine, MachineProvider,
    NetworkConfiguration, NetworkNamespace, ProxmoxConfig, Vitistack,
};
use vitistack_crds::{Converter, Document, Error, Object, Registry};

fn registry() -> Registry {
    v1alpha1::registry().unwrap()
}

fn doc(value: Value) -> Document {
    Document::try_from(value).unwrap()
}

fn web_1() -> Machine {
    let mut machine = Machine::default();
    machine.spec.name = "web-1".to_string();
    machine.spec.instance_type = "t3.medium".to_string();
    machine.spec.disks = vec![
        MachineSpecDisk {
            name: "root".to_string(),
            size_gb: 20,
            disk_type: "gp3".to_string(),
            boot: true,
            ..Default::default()
        },
        MachineSpecDisk {
            name: "data".to_string(),
            size_gb: 200,
            encrypted: true,
            ..Default::default()
        },
    ];
    machine
}

mod example_scenario {
    use super::*;

    #[test]
    fn test_machine_spec_keys() {
        let registry = registry();
        let converter = Converter::new(&registry);
        let mut machine = web_1();

        let document = converter.machine_to_document(&mut machine).unwrap();
        let spec = document.get("spec").unwrap();

        assert_eq!(spec["name"], json!("web-1"));
        assert_eq!(spec["instanceType"], json!("t3.medium"));
        assert_eq!(spec["disks"].as_array().unwrap().len(), 2);
        assert_eq!(spec["disks"][1], json!({"name": "data", "sizeGB": 200, "encrypted": true}));
        assert!(spec.get("memory").is_none());
    }

    #[test]
    fn test_machine_round_trip() {
        let registry = registry();
        let converter = Converter::new(&registry);
        let mut machine = web_1();

        let document = converter.machine_to_document(&mut machine).unwrap();
        let decoded = converter.machine_from_document(&document).unwrap();

        assert_eq!(decoded.spec.name, "web-1");
        assert_eq!(decoded.spec.instance_type, "t3.medium");
        assert_eq!(decoded.spec.disks, machine.spec.disks);
        assert_eq!(decoded.spec.memory, 0);
        assert_eq!(decoded, machine);
    }
}

mod laws {
    use super::*;

    #[test]
    fn test_omit_empty_leaves_only_identity() {
        let registry = registry();
        let converter = Converter::new(&registry);

        let document = converter.machine_to_document(&mut Machine::default()).unwrap();
        assert_eq!(
            Value::from(document),
            json!({"apiVersion": "vitistack.io/v1alpha1", "kind": "Machine"})
        );
    }

    #[test]
    fn test_always_fields_survive_zero_values() {
        let registry = registry();
        let converter = Converter::new(&registry);

        let mut datacenter = Datacenter::default();
        datacenter.spec.description = "lab".to_string();

        let document = converter.datacenter_to_document(&mut datacenter).unwrap();
        assert_eq!(
            document.get("spec"),
            Some(&json!({
                "description": "lab",
                "displayName": "",
                "machineProviders": [],
                "region": ""
            }))
        );
        assert!(document.get("status").is_none());
    }

    #[test]
    fn test_idempotence() {
        let registry = registry();
        let converter = Converter::new(&registry);
        let mut machine = web_1();

        let first = converter.machine_to_document(&mut machine).unwrap();
        let second = converter.machine_to_document(&mut machine).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_forward_compatibility() {
        let registry = registry();
        let converter = Converter::new(&registry);
        let document = doc(json!({
            "apiVersion": "vitistack.io/v1alpha1",
            "kind": "LoadBalancer",
            "spec": {"method": "round-robin", "sessionAffinity": "ClientIP"},
            "extra": {"nested": [1, 2, 3]}
        }));

        let balancer = converter.load_balancer_from_document(&document).unwrap();
        assert_eq!(balancer.spec.method, v1alpha1::load_balancer::LOAD_BALANCER_METHOD_ROUND_ROBIN);
    }

    #[test]
    fn test_identity_inferred_when_missing() {
        let registry = registry();
        let converter = Converter::new(&registry);

        let mut namespace = NetworkNamespace::default();
        namespace.spec.provider = "nsx".to_string();
        let document = converter.network_namespace_to_document(&mut namespace).unwrap();

        assert_eq!(document.api_version(), Some("vitistack.io/v1alpha1"));
        assert_eq!(document.kind(), Some("NetworkNamespace"));
        assert_eq!(namespace.type_meta.kind, "NetworkNamespace");
    }

    #[test]
    fn test_explicit_identity_preserved() {
        let registry = registry();
        let converter = Converter::new(&registry);

        let mut machine = web_1();
        machine.type_meta.api_version = "legacy.example/v0".to_string();
        machine.type_meta.kind = "Server".to_string();

        let document = converter.machine_to_document(&mut machine).unwrap();
        assert_eq!(document.api_version(), Some("legacy.example/v0"));
        assert_eq!(document.kind(), Some("Server"));
    }

    #[test]
    fn test_half_identity_counts_as_explicit() {
        let registry = registry();
        let converter = Converter::new(&registry);

        let mut machine = Machine::default();
        machine.type_meta.kind = "Machine".to_string();
        let document = converter.machine_to_document(&mut machine).unwrap();
        assert_eq!(document.api_version(), None);
    }

    #[test]
    fn test_unregistered_kind_converts_without_identity() {
        let registry = Registry::new();
        let converter = Converter::new(&registry);

        let document = converter.machine_to_document(&mut web_1()).unwrap();
        assert_eq!(document.kind(), None);
        assert!(document.get("spec").is_some());
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_nil_arguments() {
        let registry = registry();
        let converter = Converter::new(&registry);
        let mut target = Vitistack::default();

        assert!(matches!(converter.to_document(None), Err(Error::NilValue)));
        assert!(matches!(
            converter.from_document(None, Some(&mut target as &mut dyn Object)),
            Err(Error::NilDocument)
        ));
        assert!(matches!(
            converter.from_document(Some(&Document::new()), None),
            Err(Error::NilTarget)
        ));
    }

    #[test]
    fn test_scalar_where_sequence_expected() {
        let registry = registry();
        let converter = Converter::new(&registry);
        let document = doc(json!({"spec": {"poolMembers": "10.0.0.1"}}));

        let err = converter.load_balancer_from_document(&document).unwrap_err();
        match err {
            Error::TypeMismatch { path, expected, found } => {
                assert_eq!(path, "spec.poolMembers");
                assert_eq!(expected, "[]string");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fraction_into_integer() {
        let registry = registry();
        let converter = Converter::new(&registry);
        let document = doc(json!({"status": {"vlanId": 100.5}}));

        let err = converter.network_namespace_from_document(&document).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { ref path, .. } if path == "status.vlanId"));

        let document = doc(json!({"status": {"vlanId": 100.0}}));
        let namespace = converter.network_namespace_from_document(&document).unwrap();
        assert_eq!(namespace.status.vlan_id, 100);
    }

    #[test]
    fn test_int32_range_is_checked() {
        let registry = registry();
        let converter = Converter::new(&registry);
        let document = doc(json!({"spec": {"resourceQuotas": {"maxMachines": 4_294_967_296_i64}}}));

        let err = converter.datacenter_from_document(&document).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_bad_timestamp() {
        let registry = registry();
        let converter = Converter::new(&registry);
        let document = doc(json!({"status": {"created": "yesterday"}}));

        let err = converter.network_configuration_from_document(&document).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { ref path, .. } if path == "status.created"));
    }
}

/// One populated document per kind, decoded and re-encoded unchanged.
mod every_kind {
    use super::*;

    fn assert_round_trip<K: Object + Default + std::fmt::Debug + PartialEq>(value: Value) {
        let registry = registry();
        let converter = Converter::new(&registry);
        let document = doc(value);

        let mut decoded: K = converter.decode(&document).unwrap();
        let encoded = converter.encode(&mut decoded).unwrap();
        assert_eq!(encoded, document);

        let again: K = converter.decode(&encoded).unwrap();
        assert_eq!(again, decoded);
    }

    #[test]
    fn test_machine() {
        assert_round_trip::<Machine>(json!({
            "apiVersion": "vitistack.io/v1alpha1",
            "kind": "Machine",
            "metadata": {
                "name": "web-1",
                "namespace": "prod",
                "labels": {"app": "web", "tier": "frontend"},
                "creationTimestamp": "2024-05-01T12:00:00Z"
            },
            "spec": {
                "name": "web-1",
                "instanceType": "t3.medium",
                "cpu": {"cores": 2, "sockets": 1},
                "memory": 4294967296_i64,
                "os": {"family": "linux", "distribution": "ubuntu", "version": "24.04"},
                "providerConfig": {
                    "name": "proxmox",
                    "credentialsRef": {"secretName": "pve-token"}
                },
                "tags": {"owner": "platform"}
            },
            "status": {
                "phase": "Running",
                "ipAddresses": ["10.0.0.4"],
                "bootTime": "2024-05-01T12:03:00Z",
                "conditions": [{
                    "type": "Ready",
                    "status": "True",
                    "lastTransitionTime": "2024-05-01T12:04:00Z"
                }],
                "failureReason": ""
            }
        }));
    }

    #[test]
    fn test_machine_provider() {
        assert_round_trip::<MachineProvider>(json!({
            "apiVersion": "vitistack.io/v1alpha1",
            "kind": "MachineProvider",
            "metadata": {"name": "pve-west"},
            "spec": {
                "providerType": "proxmox",
                "displayName": "Proxmox west",
                "region": "west",
                "authentication": {"type": "token", "parameters": {"realm": "pve"}},
                "capabilities": {
                    "instanceTypes": [{"name": "small", "vcpus": 2, "memoryGB": "4"}],
                    "autoScaling": true
                }
            },
            "status": {
                "phase": "Ready",
                "quota": {"cpuQuota": 512, "networkQuota": {"vlans": 40}},
                "health": {"status": "Healthy", "responseTimeMs": 12}
            }
        }));
    }

    #[test]
    fn test_kubernetes_provider() {
        assert_round_trip::<KubernetesProvider>(json!({
            "apiVersion": "vitistack.io/v1alpha1",
            "kind": "KubernetesProvider",
            "metadata": {"name": "talos"},
            "spec": {
                "providerType": "talos",
                "displayName": "Talos",
                "version": "1.31.2",
                "region": "west",
                "cluster": {
                    "controlPlane": {"replicas": 3},
                    "featureGates": {"InPlacePodVerticalScaling": true}
                },
                "nodePools": [{
                    "name": "workers",
                    "instanceType": "medium",
                    "minNodes": 1,
                    "maxNodes": 5,
                    "desiredNodes": 0,
                    "taints": [{"key": "gpu", "effect": "NoSchedule"}],
                    "autoScaling": {"enabled": false}
                }],
                "machineProviderRef": {"name": "pve-west"}
            },
            "status": {
                "nodeCount": 4,
                "conditions": [{
                    "type": "Ready",
                    "status": "True",
                    "lastTransitionTime": null,
                    "reason": "",
                    "message": ""
                }]
            }
        }));
    }

    #[test]
    fn test_kubernetes_cluster() {
        assert_round_trip::<KubernetesCluster>(json!({
            "apiVersion": "vitistack.io/v1alpha1",
            "kind": "KubernetesCluster",
            "metadata": {"name": "apps-prod"},
            "spec": {
                "cluster": {
                    "clusterId": "apps-prod",
                    "provider": "talos",
                    "datacenter": "no-west-az1",
                    "environment": "prod"
                },
                "topology": {
                    "version": "1.31.2",
                    "controlplane": {"replicas": 3, "machineClass": "medium"},
                    "workers": {"nodePools": [{
                        "name": "default",
                        "replicas": 4,
                        "machineClass": "large",
                        "autoscaling": {"enabled": true, "minReplicas": 2, "maxReplicas": 8}
                    }]}
                }
            }
        }));
    }

    #[test]
    fn test_network_configuration() {
        assert_round_trip::<NetworkConfiguration>(json!({
            "apiVersion": "vitistack.io/v1alpha1",
            "kind": "NetworkConfiguration",
            "metadata": {"name": "web-1-net"},
            "spec": {
                "name": "web-1-net",
                "networkInterfaces": [{
                    "name": "eth0",
                    "macAddress": "52:54:00:12:34:56",
                    "ipv4Addresses": ["10.0.0.4"],
                    "dhcpReserved": true
                }]
            },
            "status": {"phase": "Ready", "created": "2024-05-01T12:00:00Z"}
        }));
    }

    #[test]
    fn test_network_namespace() {
        assert_round_trip::<NetworkNamespace>(json!({
            "apiVersion": "vitistack.io/v1alpha1",
            "kind": "NetworkNamespace",
            "metadata": {"name": "apps"},
            "spec": {
                "datacenterIdentifier": "no-west-az1",
                "supervisorIdentifier": "sup-1",
                "clusterIdentifier": "apps",
                "provider": "nsx",
                "environment": "prod"
            },
            "status": {"vlanId": 210, "associatedKubernetesClusterIds": ["c-1"]}
        }));
    }

    #[test]
    fn test_load_balancer() {
        assert_round_trip::<LoadBalancer>(json!({
            "apiVersion": "vitistack.io/v1alpha1",
            "kind": "LoadBalancer",
            "metadata": {"name": "apps-api"},
            "spec": {"method": "first-alive", "poolMembers": ["10.0.0.10", "10.0.0.11"]},
            "status": {"loadBalancerIps": ["10.0.1.1"]}
        }));
    }

    #[test]
    fn test_datacenter() {
        assert_round_trip::<Datacenter>(json!({
            "apiVersion": "vitistack.io/v1alpha1",
            "kind": "Datacenter",
            "metadata": {"name": "no-west-az1"},
            "spec": {
                "displayName": "West AZ1",
                "region": "west",
                "location": {"country": "NO", "coordinates": {"latitude": "60.39"}},
                "machineProviders": [{"name": "pve-west", "priority": 1, "enabled": true}],
                "backup": {"retentionPolicy": {"daily": 7}, "disasterRecovery": {"targetDatacenter": "no-east-az1"}}
            },
            "status": {"activeMachines": 12, "lastReconcileTime": "2024-05-01T12:00:00Z"}
        }));
    }

    #[test]
    fn test_vitistack() {
        assert_round_trip::<Vitistack>(json!({
            "apiVersion": "vitistack.io/v1alpha1",
            "kind": "Vitistack",
            "metadata": {"name": "west"},
            "spec": {
                "displayName": "West",
                "zone": "az1",
                "region": "west",
                "backup": {"disasterRecovery": {"targetVitistack": "east", "rpoMinutes": 15}}
            }
        }));
    }

    #[test]
    fn test_proxmox_config() {
        assert_round_trip::<ProxmoxConfig>(json!({
            "apiVersion": "vitistack.io/v1alpha1",
            "kind": "ProxmoxConfig",
            "metadata": {"name": "pve"},
            "spec": {"endpoint": "pve.local", "port": "8006", "username": "root@pam"},
            "status": {"created": "2024-05-01"}
        }));
    }
}

#[test]
fn test_typed_value_with_conditions_round_trips() {
    let registry = registry();
    let converter = Converter::new(&registry);

    let mut datacenter = Datacenter::default();
    datacenter.spec.display_name = "West".to_string();
    datacenter.spec.machine_providers = vec![DatacenterProviderReference {
        name: "pve-west".to_string(),
        configuration: [("pool".to_string(), "gold".to_string())].into_iter().collect(),
        ..Default::default()
    }];
    datacenter.status.conditions = vec![Condition {
        condition_type: "Ready".to_string(),
        status: CONDITION_TRUE.to_string(),
        last_transition_time: Time::parse("2024-05-01T12:00:00Z").unwrap(),
        ..Default::default()
    }];

    let document = converter.datacenter_to_document(&mut datacenter).unwrap();
    assert_eq!(
        document.get_path("status.conditions.0.lastTransitionTime"),
        Some(&json!("2024-05-01T12:00:00Z"))
    );
    assert_eq!(converter.datacenter_from_document(&document).unwrap(), datacenter);
}

#[test]
fn test_converter_shared_across_threads() {
    let registry = registry();
    let converter = Converter::new(&registry);

    std::thread::scope(|scope| {
        for i in 0..4 {
            scope.spawn(move || {
                let mut machine = web_1();
                machine.spec.memory = i;
                let document = converter.machine_to_document(&mut machine).unwrap();
                assert_eq!(converter.machine_from_document(&document).unwrap(), machine);
            });
        }
    });
}
