//! Domain models for OCI networking resources.
//!
//! This module contains the data structures exchanged with the OCI CLI:
//! - [`Compartment`] - a node of the tenancy hierarchy
//! - [`RouteRule`] and [`RouteTable`] - routing rules keyed by destination CIDR
//! - [`IngressRule`] and [`SecurityList`] - ingress rules keyed by source CIDR
//!
//! The CLI prints resources with kebab-case keys but takes complex parameters
//! as camelCase JSON, so every model deserializes one and serializes the other.

mod compartment;
mod route;
mod security;

// Re-export public types
pub use compartment::Compartment;
pub use route::{RouteRule, RouteTable};
pub use security::{IcmpOptions, IngressRule, PortOptions, PortRange, SecurityList, PROTOCOL_ALL};

use serde::Deserialize;

/// Envelope of every `oci ... list` response.
#[derive(Deserialize, Debug, Default)]
pub struct Data<T> {
    /// Items returned in this page.
    pub data: Vec<T>,
    /// Token for the next page. Never followed, only the first page is processed.
    #[serde(rename = "opc-next-page")]
    pub next_page: Option<String>,
}
