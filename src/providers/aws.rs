mod convert;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_config::SdkConfig;
use aws_sdk_elasticloadbalancing::Client as ELBClient;

use super::{FetchError, LoadBalancerSource};
use crate::resource::{RawAttributes, RawLoadBalancer};

const DEFAULT_REGION: &str = "us-east-1";

/// Region and profile overrides; unset values fall back to the SDK's usual
/// environment and profile resolution.
#[derive(Debug, Clone, Default)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub profile: Option<String>,
}

pub async fn aws_setup(settings: &AwsSettings) -> SdkConfig {
    let region_provider = RegionProviderChain::first_try(
        settings
            .region
            .clone()
            .map(aws_config::Region::new),
    )
    .or_default_provider()
    .or_else(DEFAULT_REGION);

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
    if let Some(profile) = &settings.profile {
        tracing::debug!(profile = %profile, "using named profile");
        loader = loader.profile_name(profile);
    }

    let config = loader.load().await;
    tracing::debug!(region = ?config.region(), "AWS configuration loaded");
    config
}

#[derive(Clone, Debug)]
pub struct AwsElbSource {
    client: ELBClient,
}

impl AwsElbSource {
    pub fn new(client: ELBClient) -> Self {
        Self { client }
    }

    pub async fn from_settings(settings: &AwsSettings) -> Self {
        let config = aws_setup(settings).await;
        Self::new(ELBClient::new(&config))
    }
}

#[async_trait]
impl LoadBalancerSource for AwsElbSource {
    async fn list_load_balancers(&self) -> Result<Vec<RawLoadBalancer>, FetchError> {
        let mut load_balancers = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let page = self
                .client
                .describe_load_balancers()
                .set_marker(marker.take())
                .send()
                .await
                .map_err(aws_sdk_elasticloadbalancing::Error::from)?;

            for description in page.load_balancer_descriptions() {
                load_balancers.push(convert::load_balancer(description)?);
            }
            tracing::debug!(
                count = page.load_balancer_descriptions().len(),
                "load balancer page received"
            );

            match page.next_marker() {
                Some(next) if !next.is_empty() => marker = Some(next.to_string()),
                _ => break,
            }
        }

        Ok(load_balancers)
    }

    async fn load_balancer_attributes(&self, name: &str) -> Result<RawAttributes, FetchError> {
        let output = self
            .client
            .describe_load_balancer_attributes()
            .load_balancer_name(name)
            .send()
            .await
            .map_err(aws_sdk_elasticloadbalancing::Error::from)?;

        let attributes =
            output
                .load_balancer_attributes()
                .ok_or_else(|| FetchError::IncompleteResponse {
                    load_balancer: name.to_string(),
                    field: "LoadBalancerAttributes",
                })?;

        convert::attributes(name, attributes)
    }
}
