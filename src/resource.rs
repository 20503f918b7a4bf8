mod normalize;
mod raw;

pub use normalize::{NormalizeError, normalize};
pub use raw::{
    RawAttributes, RawConnectionDraining, RawConnectionSettings, RawEnabled, RawHealthCheck,
    RawInstance, RawListener, RawListenerDescription, RawLoadBalancer, RawSourceSecurityGroup,
};

/// Where a load balancer lives on the network.
///
/// Classic load balancers are addressed by availability zone; load balancers
/// inside a VPC are addressed by subnet and carry their own security groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkPlacement {
    Classic {
        availability_zones: Vec<String>,
    },
    Isolated {
        subnets: Vec<String>,
        security_groups: Vec<String>,
    },
}

impl NetworkPlacement {
    pub fn kind(&self) -> &'static str {
        match self {
            NetworkPlacement::Classic { .. } => "classic",
            NetworkPlacement::Isolated { .. } => "vpc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener {
    pub instance_port: i64,
    pub instance_protocol: String,
    pub lb_port: i64,
    pub lb_protocol: String,
    pub ssl_certificate_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheck {
    pub healthy_threshold: i64,
    pub unhealthy_threshold: i64,
    pub interval: i64,
    pub target: String,
    pub timeout: i64,
}

/// Canonical, renderer-agnostic view of one classic load balancer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancer {
    pub name: String,
    pub placement: NetworkPlacement,
    pub dns_name: String,
    pub source_security_group: Option<String>,
    pub instance_ids: Vec<String>,
    pub listeners: Vec<Listener>,
    pub health_check: HealthCheck,
    pub cross_zone_load_balancing: bool,
    pub idle_timeout: i64,
    pub connection_draining: bool,
    pub connection_draining_timeout: i64,
}
