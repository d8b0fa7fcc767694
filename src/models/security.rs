//! OCI security list data model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Protocol used for rules created from scratch; OCI's wildcard.
pub const PROTOCOL_ALL: &str = "all";

/// Inclusive port range.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    pub min: u16,
    pub max: u16,
}

/// TCP or UDP options of an ingress rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all(serialize = "camelCase", deserialize = "kebab-case"))]
pub struct PortOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_port_range: Option<PortRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port_range: Option<PortRange>,
}

/// ICMP type and optional code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IcmpOptions {
    #[serde(rename = "type")]
    pub icmp_type: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u8>,
}

/// A single ingress rule.
///
/// Everything but `source` is carried as payload; duplicate detection compares
/// the whole value, so two rules differing only in `description` are distinct.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all(serialize = "camelCase", deserialize = "kebab-case"))]
pub struct IngressRule {
    /// Source CIDR block.
    #[serde(default)]
    pub source: String,
    /// Protocol number as a string, or `all`.
    #[serde(default = "default_protocol")]
    pub protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_stateless: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_options: Option<PortOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udp_options: Option<PortOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icmp_options: Option<IcmpOptions>,
}

fn default_protocol() -> String {
    PROTOCOL_ALL.to_string()
}

impl Default for IngressRule {
    fn default() -> Self {
        IngressRule {
            source: String::new(),
            protocol: default_protocol(),
            source_type: None,
            is_stateless: None,
            description: None,
            tcp_options: None,
            udp_options: None,
            icmp_options: None,
        }
    }
}

impl IngressRule {
    /// Minimal rule: source and description, every other field at its default.
    pub fn new(source: &str, description: Option<&str>) -> IngressRule {
        IngressRule {
            source: source.to_string(),
            description: description.map(str::to_string),
            ..Default::default()
        }
    }
}

impl fmt::Display for IngressRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} proto={}", self.source, self.protocol)?;
        let ports = self
            .tcp_options
            .as_ref()
            .or(self.udp_options.as_ref())
            .and_then(|o| o.destination_port_range);
        if let Some(range) = ports {
            write!(f, " ports={}-{}", range.min, range.max)?;
        }
        if let Some(description) = &self.description {
            write!(f, " '{description}'")?;
        }
        Ok(())
    }
}

/// A security list with its ordered ingress rules.
///
/// Egress rules are not modelled; updates only ever send ingress rules.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all(serialize = "camelCase", deserialize = "kebab-case"))]
pub struct SecurityList {
    /// Security list OCID.
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(default)]
    pub ingress_security_rules: Vec<IngressRule>,
}

impl SecurityList {
    pub fn new(id: &str, ingress_security_rules: Vec<IngressRule>) -> SecurityList {
        SecurityList {
            id: id.to_string(),
            display_name: id.to_string(),
            compartment_id: None,
            ingress_security_rules,
        }
    }

    /// True if any ingress rule already has `source`.
    pub fn has_source(&self, source: &str) -> bool {
        self.ingress_security_rules.iter().any(|r| r.source == source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oci::fake::tcp_rule;

    #[test]
    fn test_ingress_rule_parse_cli_output() {
        let json = r#"{
            "description": null,
            "icmp-options": null,
            "is-stateless": false,
            "protocol": "6",
            "source": "10.0.0.0/24",
            "source-type": "CIDR_BLOCK",
            "tcp-options": {
                "destination-port-range": { "max": 22, "min": 22 },
                "source-port-range": null
            },
            "udp-options": null
        }"#;
        let rule: IngressRule = serde_json::from_str(json).expect("Error parsing ingress rule");
        assert_eq!(rule, {
            let mut expected = tcp_rule("10.0.0.0/24", 22);
            expected.source_type = Some("CIDR_BLOCK".to_string());
            expected.is_stateless = Some(false);
            expected
        });
    }

    #[test]
    fn test_ingress_rule_serializes_camel_case() {
        let rule = tcp_rule("10.1.0.0/24", 443);
        let json = serde_json::to_value(&rule).expect("Error serializing ingress rule");
        assert_eq!(json["source"], "10.1.0.0/24");
        assert_eq!(json["tcpOptions"]["destinationPortRange"]["min"], 443);
        assert!(json.get("udpOptions").is_none());
    }

    #[test]
    fn test_icmp_options_type_key() {
        let json = r#"{
            "source": "0.0.0.0/0",
            "protocol": "1",
            "icmp-options": {"type": 3, "code": 4}
        }"#;
        let rule: IngressRule = serde_json::from_str(json).expect("Error parsing icmp rule");
        assert_eq!(
            rule.icmp_options,
            Some(IcmpOptions {
                icmp_type: 3,
                code: Some(4)
            })
        );
    }

    #[test]
    fn test_minimal_rule_defaults() {
        let rule = IngressRule::new("10.1.0.0/24", Some("migrated"));
        assert_eq!(rule.protocol, PROTOCOL_ALL);
        assert_eq!(rule.description.as_deref(), Some("migrated"));
        assert!(rule.tcp_options.is_none());
        assert!(rule.is_stateless.is_none());
    }

    #[test]
    fn test_equality_covers_description() {
        let a = IngressRule::new("10.1.0.0/24", Some("a"));
        let b = IngressRule::new("10.1.0.0/24", Some("b"));
        assert_ne!(a, b);
    }
}
