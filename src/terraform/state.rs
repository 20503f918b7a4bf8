//! Terraform state snapshots (`tfstate`, format version 1).
//!
//! Fresh snapshots start at serial 1. When a base snapshot is given, it is
//! carried over verbatim except for the serial, which is bumped by one, and
//! the root module's resources, which receive the regenerated entries.
//! Keys this model does not know about (`lineage`, `terraform_version`,
//! module `depends_on`, ...) are kept as they were.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::{RESOURCE_TYPE, resource_key};
use crate::resource::{LoadBalancer, NetworkPlacement};

pub const STATE_VERSION: u64 = 1;
pub const ROOT_MODULE: &str = "root";

#[derive(Debug, Error)]
pub enum StateError {
    #[error("tfstate serial {0} cannot be incremented")]
    SerialOverflow(u64),

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub version: u64,
    pub serial: u64,
    // `Some(Value::Null)` keeps an explicit `"remote": null`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub remote: Option<Value>,
    pub modules: Vec<StateModule>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateModule {
    pub path: Vec<String>,
    #[serde(default)]
    pub outputs: Map<String, Value>,
    // Insertion ordered: existing keys keep their position on overwrite.
    #[serde(default)]
    pub resources: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StateModule {
    fn root() -> Self {
        Self {
            path: vec![ROOT_MODULE.to_string()],
            outputs: Map::new(),
            resources: Map::new(),
            extra: Map::new(),
        }
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceState {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub primary: PrimaryState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryState {
    pub id: String,
    pub attributes: BTreeMap<String, String>,
}

impl StateSnapshot {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    fn fresh() -> Self {
        Self {
            version: STATE_VERSION,
            serial: 0,
            remote: None,
            modules: vec![StateModule::root()],
            extra: Map::new(),
        }
    }
}

impl ResourceState {
    pub fn from_load_balancer(lb: &LoadBalancer) -> Self {
        let mut attributes = BTreeMap::new();
        let mut set = |key: &str, value: String| {
            attributes.insert(key.to_string(), value);
        };

        set("id", lb.name.clone());
        set("name", lb.name.clone());
        set("dns_name", lb.dns_name.clone());
        set(
            "cross_zone_load_balancing",
            lb.cross_zone_load_balancing.to_string(),
        );
        set("idle_timeout", lb.idle_timeout.to_string());
        set("connection_draining", lb.connection_draining.to_string());
        set(
            "connection_draining_timeout",
            lb.connection_draining_timeout.to_string(),
        );
        set("instances.#", lb.instance_ids.len().to_string());
        set("listener.#", lb.listeners.len().to_string());
        set("health_check.#", "1".to_string());

        match &lb.placement {
            NetworkPlacement::Isolated {
                subnets,
                security_groups,
            } => {
                set("security_groups.#", security_groups.len().to_string());
                set("subnets.#", subnets.len().to_string());
            }
            NetworkPlacement::Classic { availability_zones } => {
                set("availability_zones.#", availability_zones.len().to_string());
                if let Some(group) = &lb.source_security_group {
                    set("source_security_group", group.clone());
                }
            }
        }

        Self {
            resource_type: RESOURCE_TYPE.to_string(),
            primary: PrimaryState {
                id: lb.name.clone(),
                attributes,
            },
        }
    }
}

/// Builds the next snapshot: a copy of `base` (or a fresh skeleton) with the
/// serial bumped and every load balancer upserted into the root module.
pub fn merge(
    load_balancers: &[LoadBalancer],
    base: Option<&StateSnapshot>,
) -> Result<StateSnapshot, StateError> {
    let mut snapshot = base.cloned().unwrap_or_else(StateSnapshot::fresh);
    snapshot.serial = snapshot
        .serial
        .checked_add(1)
        .ok_or(StateError::SerialOverflow(snapshot.serial))?;

    if snapshot.modules.is_empty() {
        snapshot.modules.push(StateModule::root());
    }
    let resources = &mut snapshot.modules[0].resources;

    for lb in load_balancers {
        let state = serde_json::to_value(ResourceState::from_load_balancer(lb))?;
        resources.insert(resource_key(&lb.name), state);
    }

    Ok(snapshot)
}

/// Renders the snapshot as pretty-printed JSON.
pub fn render_state(
    load_balancers: &[LoadBalancer],
    base: Option<&StateSnapshot>,
) -> Result<String, StateError> {
    Ok(serde_json::to_string_pretty(&merge(load_balancers, base)?)?)
}
