//! elbform - Terraform for existing classic load balancers
//!
//! Reads live AWS classic load balancers and renders them as `aws_elb`
//! configuration blocks and as a tfstate snapshot that can be merged into an
//! existing one.

pub mod generate;
pub mod output;
pub mod providers;
pub mod resource;
pub mod terraform;

mod error;

pub use error::ElbformError;
pub use generate::{load_load_balancers, tf, tfstate};
pub use providers::aws::{AwsElbSource, AwsSettings};
pub use providers::{FetchError, LoadBalancerSource};
pub use resource::{LoadBalancer, NetworkPlacement, NormalizeError, RawAttributes, RawLoadBalancer};
pub use terraform::{StateError, StateSnapshot, render_config, render_state};
