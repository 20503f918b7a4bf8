use std::fmt::{self, Write};

use super::RESOURCE_TYPE;
use crate::resource::{HealthCheck, Listener, LoadBalancer, NetworkPlacement};

const INDENT: &str = "    ";

const RESOURCE_LABELS: &[&str] = &[
    "name",
    "subnets",
    "security_groups",
    "availability_zones",
    "instances",
    "cross_zone_load_balancing",
    "idle_timeout",
    "connection_draining",
    "connection_draining_timeout",
];

const LISTENER_LABELS: &[&str] = &[
    "instance_port",
    "instance_protocol",
    "lb_port",
    "lb_protocol",
    "ssl_certificate_id",
];

const HEALTH_CHECK_LABELS: &[&str] = &[
    "healthy_threshold",
    "unhealthy_threshold",
    "interval",
    "target",
    "timeout",
];

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

impl Value {
    fn render(&self) -> String {
        match self {
            Value::Str(s) => quote(s),
            Value::Int(i) => i.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::List(items) => {
                let items: Vec<String> = items.iter().map(|s| quote(s)).collect();
                format!("[{}]", items.join(", "))
            }
        }
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// One HCL block. Attribute labels are padded to the widest label the block
/// kind can carry, so optional attributes never shift the `=` column.
struct Block {
    header: String,
    label_width: usize,
    attributes: Vec<(&'static str, Value)>,
    children: Vec<Block>,
}

impl Block {
    fn new(header: impl Into<String>, labels: &[&str]) -> Self {
        Self {
            header: header.into(),
            label_width: labels.iter().map(|l| l.len()).max().unwrap_or(0),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    fn attr(mut self, label: &'static str, value: Value) -> Self {
        self.attributes.push((label, value));
        self
    }

    fn attr_opt(self, label: &'static str, value: Option<Value>) -> Self {
        match value {
            Some(value) => self.attr(label, value),
            None => self,
        }
    }

    fn child(mut self, block: Block) -> Self {
        self.children.push(block);
        self
    }

    fn write<W: Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        let indent = INDENT.repeat(depth);
        let inner = INDENT.repeat(depth + 1);

        writeln!(out, "{}{} {{", indent, self.header)?;
        for (label, value) in &self.attributes {
            writeln!(
                out,
                "{}{:<width$} = {}",
                inner,
                label,
                value.render(),
                width = self.label_width
            )?;
        }
        for child in &self.children {
            out.write_char('\n')?;
            child.write(out, depth + 1)?;
        }
        writeln!(out, "{}}}", indent)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, 0)
    }
}

/// Renders `aws_elb` resource blocks for every load balancer, in input order.
pub fn render_config(load_balancers: &[LoadBalancer]) -> String {
    let mut out = String::new();
    for lb in load_balancers {
        out.push_str(&resource_block(lb).to_string());
        out.push('\n');
    }
    out
}

fn resource_block(lb: &LoadBalancer) -> Block {
    let header = format!("resource {} {}", quote(RESOURCE_TYPE), quote(&lb.name));
    let mut block = Block::new(header, RESOURCE_LABELS).attr("name", Value::Str(lb.name.clone()));

    block = match &lb.placement {
        NetworkPlacement::Isolated {
            subnets,
            security_groups,
        } => block
            .attr("subnets", Value::List(subnets.clone()))
            .attr("security_groups", Value::List(security_groups.clone())),
        NetworkPlacement::Classic { availability_zones } => {
            block.attr("availability_zones", Value::List(availability_zones.clone()))
        }
    };

    block = block
        .attr("instances", Value::List(lb.instance_ids.clone()))
        .attr(
            "cross_zone_load_balancing",
            Value::Bool(lb.cross_zone_load_balancing),
        )
        .attr("idle_timeout", Value::Int(lb.idle_timeout))
        .attr("connection_draining", Value::Bool(lb.connection_draining))
        .attr(
            "connection_draining_timeout",
            Value::Int(lb.connection_draining_timeout),
        );

    for listener in &lb.listeners {
        block = block.child(listener_block(listener));
    }
    block.child(health_check_block(&lb.health_check))
}

fn listener_block(listener: &Listener) -> Block {
    Block::new("listener", LISTENER_LABELS)
        .attr("instance_port", Value::Int(listener.instance_port))
        .attr(
            "instance_protocol",
            Value::Str(listener.instance_protocol.clone()),
        )
        .attr("lb_port", Value::Int(listener.lb_port))
        .attr("lb_protocol", Value::Str(listener.lb_protocol.clone()))
        .attr_opt(
            "ssl_certificate_id",
            listener.ssl_certificate_id.clone().map(Value::Str),
        )
}

fn health_check_block(health_check: &HealthCheck) -> Block {
    Block::new("health_check", HEALTH_CHECK_LABELS)
        .attr("healthy_threshold", Value::Int(health_check.healthy_threshold))
        .attr(
            "unhealthy_threshold",
            Value::Int(health_check.unhealthy_threshold),
        )
        .attr("interval", Value::Int(health_check.interval))
        .attr("target", Value::Str(health_check.target.clone()))
        .attr("timeout", Value::Int(health_check.timeout))
}
