//! OCI route table data model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single routing rule.
///
/// Equality is structural over every field, which is what duplicate checks
/// compare when they need more than the destination.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all(serialize = "camelCase", deserialize = "kebab-case"))]
pub struct RouteRule {
    /// Destination CIDR block.
    #[serde(default)]
    pub destination: String,
    /// OCID of the target (gateway, private IP, ...).
    #[serde(default)]
    pub network_entity_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `CIDR_BLOCK` or `SERVICE_CIDR_BLOCK`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<String>,
    /// Deprecated alias of `destination`, still echoed by older tables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_type: Option<String>,
}

impl RouteRule {
    /// Rule routing `destination` to `network_entity_id`.
    pub fn new(destination: &str, network_entity_id: &str, description: Option<&str>) -> RouteRule {
        RouteRule {
            destination: destination.to_string(),
            network_entity_id: network_entity_id.to_string(),
            description: description.map(str::to_string),
            ..Default::default()
        }
    }
}

impl fmt::Display for RouteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.destination, self.network_entity_id)?;
        if let Some(description) = &self.description {
            write!(f, " '{description}'")?;
        }
        Ok(())
    }
}

/// A route table with its ordered rules.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all(serialize = "camelCase", deserialize = "kebab-case"))]
pub struct RouteTable {
    /// Route table OCID.
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(default)]
    pub route_rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new(id: &str, route_rules: Vec<RouteRule>) -> RouteTable {
        RouteTable {
            id: id.to_string(),
            display_name: id.to_string(),
            compartment_id: None,
            route_rules,
        }
    }

    /// True if any rule already routes `destination`.
    pub fn has_destination(&self, destination: &str) -> bool {
        self.route_rules.iter().any(|r| r.destination == destination)
    }
}
