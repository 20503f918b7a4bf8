//! Terraform artifacts rendered from canonical load balancer records.

pub mod config;
pub mod state;

pub use config::render_config;
pub use state::{StateError, StateSnapshot, render_state};

/// Terraform resource type for classic load balancers.
pub const RESOURCE_TYPE: &str = "aws_elb";

/// Key of a resource inside a state module, e.g. `aws_elb.hoge`.
pub fn resource_key(name: &str) -> String {
    format!("{}.{}", RESOURCE_TYPE, name)
}
