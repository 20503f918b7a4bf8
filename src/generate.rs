use std::collections::HashSet;
use std::path::Path;

use crate::error::ElbformError;
use crate::providers::LoadBalancerSource;
use crate::resource::{LoadBalancer, normalize};
use crate::terraform::{StateSnapshot, render_config, render_state};

/// Fetches every load balancer with its attributes and normalizes them,
/// keeping the order the provider listed them in.
pub async fn load_load_balancers(
    source: &dyn LoadBalancerSource,
) -> Result<Vec<LoadBalancer>, ElbformError> {
    let descriptions = source.list_load_balancers().await?;
    tracing::info!(count = descriptions.len(), "load balancers listed");

    let mut seen = HashSet::new();
    let mut load_balancers = Vec::with_capacity(descriptions.len());

    for description in &descriptions {
        let attributes = source
            .load_balancer_attributes(&description.load_balancer_name)
            .await?;
        let lb = normalize(description, &attributes)?;
        tracing::debug!(name = %lb.name, placement = lb.placement.kind(), "normalized load balancer");

        if !seen.insert(lb.name.clone()) {
            return Err(ElbformError::DuplicateName(lb.name));
        }
        load_balancers.push(lb);
    }

    Ok(load_balancers)
}

/// Generates the Terraform configuration for every load balancer.
pub async fn tf(source: &dyn LoadBalancerSource) -> Result<String, ElbformError> {
    let load_balancers = load_load_balancers(source).await?;
    Ok(render_config(&load_balancers))
}

/// Generates a tfstate snapshot, merged into `tfstate_base` when one is given.
///
/// The base is parsed before anything is fetched so a broken base never costs
/// an API round trip.
pub async fn tfstate(
    source: &dyn LoadBalancerSource,
    tfstate_base: Option<&str>,
) -> Result<String, ElbformError> {
    let base = tfstate_base
        .map(StateSnapshot::parse)
        .transpose()
        .map_err(ElbformError::MalformedBaseSnapshot)?;

    let load_balancers = load_load_balancers(source).await?;
    Ok(render_state(&load_balancers, base.as_ref())?)
}

pub fn read_tfstate_base(path: &Path) -> Result<String, ElbformError> {
    Ok(std::fs::read_to_string(path)?)
}

pub fn write_tfstate(path: &Path, tfstate: &str) -> Result<(), ElbformError> {
    Ok(std::fs::write(path, tfstate)?)
}
