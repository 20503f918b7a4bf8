//! Conversions from SDK shapes into the provider-neutral raw descriptions.

use aws_sdk_elasticloadbalancing::types::{
    HealthCheck, Listener, LoadBalancerAttributes, LoadBalancerDescription,
};

use crate::providers::FetchError;
use crate::resource::{
    RawAttributes, RawConnectionDraining, RawConnectionSettings, RawEnabled, RawHealthCheck,
    RawInstance, RawListener, RawListenerDescription, RawLoadBalancer, RawSourceSecurityGroup,
};

fn strings(values: &[String]) -> Vec<String> {
    values.to_vec()
}

pub(super) fn load_balancer(lb: &LoadBalancerDescription) -> Result<RawLoadBalancer, FetchError> {
    let name = lb
        .load_balancer_name()
        .ok_or_else(|| FetchError::IncompleteResponse {
            load_balancer: String::new(),
            field: "LoadBalancerName",
        })?
        .to_string();
    let missing = |field| FetchError::IncompleteResponse {
        load_balancer: name.clone(),
        field,
    };

    let dns_name = lb.dns_name().ok_or_else(|| missing("DNSName"))?.to_string();
    let health_check = lb
        .health_check()
        .map(health_check)
        .ok_or_else(|| missing("HealthCheck"))?;

    Ok(RawLoadBalancer {
        dns_name,
        vpc_id: lb.vpc_id().map(str::to_string),
        subnets: strings(lb.subnets()),
        availability_zones: strings(lb.availability_zones()),
        security_groups: strings(lb.security_groups()),
        instances: lb
            .instances()
            .iter()
            .filter_map(|instance| instance.instance_id())
            .map(|instance_id| RawInstance {
                instance_id: instance_id.to_string(),
            })
            .collect(),
        listener_descriptions: lb
            .listener_descriptions()
            .iter()
            .filter_map(|description| {
                description.listener().map(|l| RawListenerDescription {
                    listener: listener(l),
                    policy_names: strings(description.policy_names()),
                })
            })
            .collect(),
        health_check,
        source_security_group: lb.source_security_group().map(|group| RawSourceSecurityGroup {
            owner_alias: group.owner_alias().map(str::to_string),
            group_name: group.group_name().map(str::to_string),
        }),
        load_balancer_name: name,
    })
}

fn listener(listener: &Listener) -> RawListener {
    RawListener {
        protocol: listener.protocol().to_string(),
        load_balancer_port: listener.load_balancer_port(),
        instance_protocol: listener.instance_protocol().map(str::to_string),
        instance_port: listener.instance_port(),
        ssl_certificate_id: listener.ssl_certificate_id().map(str::to_string),
    }
}

fn health_check(health_check: &HealthCheck) -> RawHealthCheck {
    RawHealthCheck {
        healthy_threshold: health_check.healthy_threshold(),
        unhealthy_threshold: health_check.unhealthy_threshold(),
        interval: health_check.interval(),
        target: health_check.target().to_string(),
        timeout: health_check.timeout(),
    }
}

pub(super) fn attributes(
    name: &str,
    attributes: &LoadBalancerAttributes,
) -> Result<RawAttributes, FetchError> {
    let missing = |field| FetchError::IncompleteResponse {
        load_balancer: name.to_string(),
        field,
    };

    let cross_zone = attributes
        .cross_zone_load_balancing()
        .ok_or_else(|| missing("CrossZoneLoadBalancing"))?;
    let draining = attributes
        .connection_draining()
        .ok_or_else(|| missing("ConnectionDraining"))?;
    let settings = attributes
        .connection_settings()
        .ok_or_else(|| missing("ConnectionSettings"))?;

    Ok(RawAttributes {
        cross_zone_load_balancing: RawEnabled {
            enabled: cross_zone.enabled(),
        },
        access_log: attributes.access_log().map(|log| RawEnabled {
            enabled: log.enabled(),
        }),
        connection_draining: RawConnectionDraining {
            enabled: draining.enabled(),
            timeout: draining.timeout().unwrap_or_default(),
        },
        connection_settings: RawConnectionSettings {
            idle_timeout: settings.idle_timeout(),
        },
    })
}
