use serde::Deserialize;

/// A load balancer description as the provider reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawLoadBalancer {
    pub load_balancer_name: String,
    pub dns_name: String,
    #[serde(default)]
    pub vpc_id: Option<String>,
    #[serde(default)]
    pub subnets: Vec<String>,
    #[serde(default)]
    pub availability_zones: Vec<String>,
    #[serde(default)]
    pub security_groups: Vec<String>,
    #[serde(default)]
    pub instances: Vec<RawInstance>,
    #[serde(default)]
    pub listener_descriptions: Vec<RawListenerDescription>,
    pub health_check: RawHealthCheck,
    #[serde(default)]
    pub source_security_group: Option<RawSourceSecurityGroup>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawInstance {
    pub instance_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawListenerDescription {
    pub listener: RawListener,
    #[serde(default)]
    pub policy_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawListener {
    pub protocol: String,
    pub load_balancer_port: i32,
    #[serde(default)]
    pub instance_protocol: Option<String>,
    pub instance_port: i32,
    #[serde(default)]
    pub ssl_certificate_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawHealthCheck {
    pub healthy_threshold: i32,
    pub unhealthy_threshold: i32,
    pub interval: i32,
    pub target: String,
    pub timeout: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSourceSecurityGroup {
    #[serde(default)]
    pub owner_alias: Option<String>,
    #[serde(default)]
    pub group_name: Option<String>,
}

/// Extended attributes, fetched separately per load balancer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAttributes {
    pub cross_zone_load_balancing: RawEnabled,
    #[serde(default)]
    pub access_log: Option<RawEnabled>,
    pub connection_draining: RawConnectionDraining,
    pub connection_settings: RawConnectionSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawEnabled {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawConnectionDraining {
    pub enabled: bool,
    #[serde(default)]
    pub timeout: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawConnectionSettings {
    pub idle_timeout: i32,
}
