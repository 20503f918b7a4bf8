pub mod aws;

use async_trait::async_trait;
use thiserror::Error;

use crate::resource::{RawAttributes, RawLoadBalancer};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("load balancer API error: {0}")]
    Api(#[from] aws_sdk_elasticloadbalancing::Error),
    #[error("incomplete response: missing {field} for load balancer '{load_balancer}'")]
    IncompleteResponse {
        load_balancer: String,
        field: &'static str,
    },
}

/// Read-only view of the provider's classic load balancers.
///
/// Implementations do the network work (pagination included); callers only
/// see plain descriptions in the order the provider returned them.
#[async_trait]
pub trait LoadBalancerSource: Send + Sync {
    async fn list_load_balancers(&self) -> Result<Vec<RawLoadBalancer>, FetchError>;
    async fn load_balancer_attributes(&self, name: &str) -> Result<RawAttributes, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_response_display() {
        let err = FetchError::IncompleteResponse {
            load_balancer: "hoge".to_string(),
            field: "HealthCheck",
        };
        assert_eq!(
            err.to_string(),
            "incomplete response: missing HealthCheck for load balancer 'hoge'"
        );
    }
}
