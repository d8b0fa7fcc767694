//! Recursive compartment traversal.

use super::{process_route_tables, process_security_lists, CidrChange, RunSummary};
use crate::oci::NetworkClient;

/// Rewrite `compartment_id`, then every compartment below it, depth first.
///
/// The compartment's own route tables and security lists are processed
/// before its children are listed. If listing the children fails the
/// subtree below is skipped and the walk continues with the caller's
/// remaining siblings. Compartments form a tree, so nothing is visited twice.
pub fn process_compartment(
    client: &dyn NetworkClient,
    compartment_id: &str,
    change: &CidrChange,
    summary: &mut RunSummary,
) {
    log::info!("Processing compartment {compartment_id}");
    summary.compartments_visited += 1;

    process_route_tables(client, compartment_id, change, summary);
    process_security_lists(client, compartment_id, change, summary);

    let children = match client.list_compartments(compartment_id) {
        Ok(children) => children,
        Err(e) => {
            log::error!("listing compartments under {compartment_id}: {e}");
            println!("Error listing compartments: {e}");
            summary.listing_failures += 1;
            return;
        }
    };
    log::debug!("{} sub-compartments under {compartment_id}", children.len());

    for child in children {
        process_compartment(client, &child.id, change, summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RouteRule, RouteTable};
    use crate::oci::fake::FakeNetwork;
    use std::collections::HashSet;

    const FIND: &str = "10.0.0.0/24";
    const ADD: &str = "10.1.0.0/24";

    fn tree() -> FakeNetwork {
        // root -> a -> a1, a2
        //      -> b -> b1
        let mut network = FakeNetwork::default();
        network.add_child("root", "a");
        network.add_child("root", "b");
        network.add_child("a", "a1");
        network.add_child("a", "a2");
        network.add_child("b", "b1");
        for c in ["root", "a", "a1", "a2", "b", "b1"] {
            network.add_route_table(
                c,
                RouteTable::new(&format!("rt-{c}"), vec![RouteRule::new(FIND, "E", None)]),
            );
        }
        network
    }

    fn updated_tables(network: &FakeNetwork) -> Vec<String> {
        network
            .route_updates
            .borrow()
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }

    #[test]
    fn test_walk_depth_first_each_once() {
        let network = tree();
        let mut summary = RunSummary::new();

        process_compartment(&network, "root", &CidrChange::new(FIND, ADD, ""), &mut summary);

        let visited = network.visited.borrow();
        assert_eq!(*visited, vec!["root", "a", "a1", "a2", "b", "b1"]);
        let unique: HashSet<&String> = visited.iter().collect();
        assert_eq!(unique.len(), visited.len(), "no compartment visited twice");
        assert_eq!(
            updated_tables(&network),
            vec!["rt-root", "rt-a", "rt-a1", "rt-a2", "rt-b", "rt-b1"]
        );
        assert_eq!(summary.compartments_visited, 6);
        assert_eq!(summary.route_tables_updated, 6);
    }

    #[test]
    fn test_child_listing_failure_skips_only_subtree() {
        let mut network = tree();
        network.failing_compartment_lists.insert("a".to_string());
        let mut summary = RunSummary::new();

        process_compartment(&network, "root", &CidrChange::new(FIND, ADD, ""), &mut summary);

        // a itself is processed before its children are listed
        assert_eq!(updated_tables(&network), vec!["rt-root", "rt-a", "rt-b", "rt-b1"]);
        assert_eq!(summary.listing_failures, 1);
        assert_eq!(summary.compartments_visited, 4);
    }

    #[test]
    fn test_resource_listing_failures_do_not_stop_descent() {
        let mut network = tree();
        network.failing_route_table_lists.insert("a".to_string());
        network.failing_security_list_lists.insert("a".to_string());
        let mut summary = RunSummary::new();

        process_compartment(&network, "root", &CidrChange::new(FIND, ADD, ""), &mut summary);

        assert_eq!(
            updated_tables(&network),
            vec!["rt-root", "rt-a1", "rt-a2", "rt-b", "rt-b1"]
        );
        assert_eq!(summary.listing_failures, 2);
    }
}
