use thiserror::Error;

use super::raw::{RawAttributes, RawListener, RawLoadBalancer};
use super::{HealthCheck, Listener, LoadBalancer, NetworkPlacement};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("load balancer description has an empty name")]
    EmptyName,

    #[error("load balancer '{name}' matches neither a VPC nor a classic network placement")]
    AmbiguousNetworkPlacement { name: String },
}

/// Builds the canonical record for one load balancer from its description and
/// its extended attributes.
pub fn normalize(
    raw: &RawLoadBalancer,
    attributes: &RawAttributes,
) -> Result<LoadBalancer, NormalizeError> {
    if raw.load_balancer_name.is_empty() {
        return Err(NormalizeError::EmptyName);
    }

    Ok(LoadBalancer {
        name: raw.load_balancer_name.clone(),
        placement: placement(raw)?,
        dns_name: raw.dns_name.clone(),
        source_security_group: raw
            .source_security_group
            .as_ref()
            .and_then(|group| group.group_name.clone()),
        instance_ids: raw
            .instances
            .iter()
            .map(|instance| instance.instance_id.clone())
            .collect(),
        listeners: raw
            .listener_descriptions
            .iter()
            .map(|description| listener(&description.listener))
            .collect(),
        health_check: HealthCheck {
            healthy_threshold: raw.health_check.healthy_threshold.into(),
            unhealthy_threshold: raw.health_check.unhealthy_threshold.into(),
            interval: raw.health_check.interval.into(),
            target: raw.health_check.target.clone(),
            timeout: raw.health_check.timeout.into(),
        },
        cross_zone_load_balancing: attributes.cross_zone_load_balancing.enabled,
        idle_timeout: attributes.connection_settings.idle_timeout.into(),
        connection_draining: attributes.connection_draining.enabled,
        connection_draining_timeout: attributes.connection_draining.timeout.into(),
    })
}

fn placement(raw: &RawLoadBalancer) -> Result<NetworkPlacement, NormalizeError> {
    // An explicit VPC id decides; without one, subnets alone mark VPC membership.
    let in_vpc = match raw.vpc_id.as_deref() {
        Some(vpc_id) => !vpc_id.is_empty(),
        None => !raw.subnets.is_empty(),
    };

    if in_vpc && !raw.subnets.is_empty() {
        Ok(NetworkPlacement::Isolated {
            subnets: raw.subnets.clone(),
            security_groups: raw.security_groups.clone(),
        })
    } else if !in_vpc && !raw.availability_zones.is_empty() {
        Ok(NetworkPlacement::Classic {
            availability_zones: raw.availability_zones.clone(),
        })
    } else {
        Err(NormalizeError::AmbiguousNetworkPlacement {
            name: raw.load_balancer_name.clone(),
        })
    }
}

fn listener(raw: &RawListener) -> Listener {
    let instance_protocol = raw
        .instance_protocol
        .as_deref()
        .unwrap_or(&raw.protocol)
        .to_lowercase();

    Listener {
        instance_port: raw.instance_port.into(),
        instance_protocol,
        lb_port: raw.load_balancer_port.into(),
        lb_protocol: raw.protocol.to_lowercase(),
        ssl_certificate_id: raw
            .ssl_certificate_id
            .clone()
            .filter(|certificate| !certificate.is_empty()),
    }
}
