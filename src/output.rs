use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::resource::{LoadBalancer, NetworkPlacement};

#[derive(Debug, Tabled)]
struct LoadBalancerRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PLACEMENT")]
    placement: String,
    #[tabled(rename = "DNS NAME")]
    dns_name: String,
    #[tabled(rename = "INSTANCES")]
    instances: usize,
    #[tabled(rename = "LISTENERS")]
    listeners: usize,
}

impl From<&LoadBalancer> for LoadBalancerRow {
    fn from(lb: &LoadBalancer) -> Self {
        let placement = match &lb.placement {
            NetworkPlacement::Classic { availability_zones } => {
                format!("classic ({})", availability_zones.join(", "))
            }
            NetworkPlacement::Isolated { subnets, .. } => format!("vpc ({})", subnets.join(", ")),
        };
        Self {
            name: lb.name.clone(),
            placement,
            dns_name: lb.dns_name.clone(),
            instances: lb.instance_ids.len(),
            listeners: lb.listeners.len(),
        }
    }
}

/// Human-readable summary of the discovered load balancers.
pub fn summary_table(load_balancers: &[LoadBalancer]) -> String {
    let rows: Vec<LoadBalancerRow> = load_balancers.iter().map(LoadBalancerRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::HealthCheck;

    fn load_balancer(name: &str, placement: NetworkPlacement) -> LoadBalancer {
        LoadBalancer {
            name: name.to_string(),
            placement,
            dns_name: format!("{}.elb.amazonaws.com", name),
            source_security_group: None,
            instance_ids: vec!["i-1234abcd".to_string(), "i-5678efgh".to_string()],
            listeners: vec![],
            health_check: HealthCheck {
                healthy_threshold: 10,
                unhealthy_threshold: 2,
                interval: 30,
                target: "TCP:80".to_string(),
                timeout: 5,
            },
            cross_zone_load_balancing: false,
            idle_timeout: 60,
            connection_draining: false,
            connection_draining_timeout: 300,
        }
    }

    #[test]
    fn test_summary_table_lists_each_load_balancer() {
        let table = summary_table(&[
            load_balancer(
                "hoge",
                NetworkPlacement::Isolated {
                    subnets: vec!["subnet-1234abcd".to_string()],
                    security_groups: vec![],
                },
            ),
            load_balancer(
                "fuga",
                NetworkPlacement::Classic {
                    availability_zones: vec!["ap-northeast-1b".to_string()],
                },
            ),
        ]);
        assert!(table.contains("NAME"));
        assert!(table.contains("DNS NAME"));
        assert!(table.contains("vpc (subnet-1234abcd)"));
        assert!(table.contains("classic (ap-northeast-1b)"));
        assert!(table.find("hoge").unwrap() < table.find("fuga").unwrap());
    }
}
