//! CIDR rewrite processing.
//!
//! This module contains the business logic of both run modes:
//! - [`walker`] - Recursive compartment traversal (rewrite mode)
//! - [`route_tables`] - Rewriting route rules matching a destination CIDR
//! - [`security_lists`] - Rewriting ingress rules matching a source CIDR
//! - [`append`] - Single-level append-if-absent mode
//! - [`summary`] - Counters collected during a run

mod append;
mod route_tables;
mod security_lists;
mod summary;
mod walker;

// Re-export public functions
pub use append::{append_compartment, append_route_rule, append_ingress_rule};
pub use route_tables::{process_route_tables, rewrite_route_rules};
pub use security_lists::{process_security_lists, rewrite_ingress_rules};
pub use summary::RunSummary;
pub use walker::process_compartment;

/// The CIDR pair a run works with, plus the description for appended rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidrChange {
    /// CIDR looked up in existing rules.
    pub cidr_to_find: String,
    /// CIDR written into new rules.
    pub cidr_to_add: String,
    /// Description of rules created by append mode; unused by rewrite mode.
    pub description: String,
}

impl CidrChange {
    pub fn new(cidr_to_find: &str, cidr_to_add: &str, description: &str) -> CidrChange {
        CidrChange {
            cidr_to_find: cidr_to_find.to_string(),
            cidr_to_add: cidr_to_add.to_string(),
            description: description.to_string(),
        }
    }
}

/// Drop later elements equal to an earlier one, keeping order.
fn dedup_in_order<T: PartialEq>(items: &mut Vec<T>) {
    let mut i = 0;
    while i < items.len() {
        if items[..i].contains(&items[i]) {
            items.remove(i);
        } else {
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_in_order() {
        let mut items = vec![3, 1, 3, 2, 1];
        dedup_in_order(&mut items);
        assert_eq!(items, vec![3, 1, 2]);
    }
}
