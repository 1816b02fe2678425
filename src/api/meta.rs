//! Metadata shared by every resource kind.

use std::fmt;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde_json::Value;

use crate::error::Result;
use crate::resource::shape::{FieldKind, FieldPath, FieldType, FieldValue, ScalarKind};
use crate::structured;

/// Canonical identity of a resource kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    pub fn new(group: &str, version: &str, kind: &str) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
        }
    }

    /// Split an `apiVersion` string (`group/version` or a bare core `version`).
    pub fn from_api_version(api_version: &str, kind: &str) -> Self {
        let (group, version) = match api_version.split_once('/') {
            Some((group, version)) => (group, version),
            None => ("", api_version),
        };
        Self::new(group, version, kind)
    }

    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.version.is_empty() && self.kind.is_empty()
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Kind={}", self.api_version(), self.kind)
    }
}

/// A timestamp with second precision, serialized as RFC 3339.
///
/// The zero value is "no time" and encodes as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(Option<DateTime<Utc>>);

impl Time {
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    pub fn get(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    pub fn parse(s: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| Self::from(dt.with_timezone(&Utc)))
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(Some(dt.trunc_subsecs(0)))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => f.write_str("<none>"),
        }
    }
}

impl FieldValue for Time {
    fn is_zero(&self) -> bool {
        Time::is_zero(self)
    }

    fn clear(&mut self) {
        self.0 = None;
    }

    fn encode(&self) -> Value {
        match self.0 {
            Some(dt) => Value::String(dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => Value::Null,
        }
    }

    fn assign(&mut self, value: &Value, path: &FieldPath) -> Result<()> {
        let Value::String(s) = value else {
            return Err(path.mismatch(ScalarKind::Time.type_name(), value));
        };
        *self = Time::parse(s)
            .ok_or_else(|| path.mismatch_described("RFC 3339 timestamp", format!("string {s:?}")))?;
        Ok(())
    }
}

impl FieldType for Time {
    const KIND: FieldKind = FieldKind::Scalar(ScalarKind::Time);
}

structured! {
    /// Kind identity carried inline at the top level of every document.
    pub struct TypeMeta {
        pub api_version: String as "apiVersion",
        pub kind: String as "kind",
    }
}

impl TypeMeta {
    /// Identity metadata is explicit as soon as either half is set.
    pub fn is_empty(&self) -> bool {
        self.api_version.is_empty() && self.kind.is_empty()
    }

    pub fn group_version_kind(&self) -> GroupVersionKind {
        GroupVersionKind::from_api_version(&self.api_version, &self.kind)
    }

    pub fn set_group_version_kind(&mut self, gvk: &GroupVersionKind) {
        self.api_version = gvk.api_version();
        self.kind = gvk.kind.clone();
    }
}

structured! {
    /// Reference to the object that owns another.
    pub struct OwnerReference {
        pub api_version: String as "apiVersion" always,
        pub kind: String as "kind" always,
        pub name: String as "name" always,
        pub uid: String as "uid" always,
        pub controller: Option<bool> as "controller",
        pub block_owner_deletion: Option<bool> as "blockOwnerDeletion",
    }
}

structured! {
    /// Standard object metadata.
    pub struct ObjectMeta {
        pub name: String as "name",
        pub generate_name: String as "generateName",
        pub namespace: String as "namespace",
        pub uid: String as "uid",
        pub resource_version: String as "resourceVersion",
        pub generation: i64 as "generation",
        pub creation_timestamp: Time as "creationTimestamp",
        pub deletion_timestamp: Option<Time> as "deletionTimestamp",
        pub deletion_grace_period_seconds: Option<i64> as "deletionGracePeriodSeconds",
        pub labels: std::collections::BTreeMap<String, String> as "labels",
        pub annotations: std::collections::BTreeMap<String, String> as "annotations",
        pub owner_references: Vec<OwnerReference> as "ownerReferences",
        pub finalizers: Vec<String> as "finalizers",
    }
}

structured! {
    /// Metadata of list kinds.
    pub struct ListMeta {
        pub resource_version: String as "resourceVersion",
        pub continue_token: String as "continue",
        pub remaining_item_count: Option<i64> as "remainingItemCount",
    }
}

structured! {
    /// Observation of one aspect of a resource's state.
    pub struct Condition {
        pub condition_type: String as "type" always,
        pub status: String as "status" always,
        pub observed_generation: i64 as "observedGeneration",
        pub last_transition_time: Time as "lastTransitionTime" always,
        pub reason: String as "reason" always,
        pub message: String as "message" always,
    }
}

pub const CONDITION_TRUE: &str = "True";
pub const CONDITION_FALSE: &str = "False";
pub const CONDITION_UNKNOWN: &str = "Unknown";
