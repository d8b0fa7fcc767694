//! Route table rewriting.
//!
//! Rules whose destination equals the CIDR to find are copied with the new
//! CIDR and appended to the table. The originals stay in place.

use super::{dedup_in_order, CidrChange, RunSummary};
use crate::models::{RouteRule, RouteTable};
use crate::oci::NetworkClient;
use crate::output::print_rules;

/// Rules to append to `table`: matches of `cidr_to_find` rewritten to `cidr_to_add`.
///
/// A candidate is dropped when any original rule already routes its new
/// destination. Only the destination is compared. The deprecated
/// `cidr_block` is cleared on candidates so it can't contradict `destination`.
pub fn rewrite_route_rules(
    table: &RouteTable,
    cidr_to_find: &str,
    cidr_to_add: &str,
) -> Vec<RouteRule> {
    let mut found: Vec<RouteRule> = table
        .route_rules
        .iter()
        .filter(|r| r.destination == cidr_to_find)
        .cloned()
        .collect();
    print_rules("Found routes:", &found);

    for rule in found.iter_mut() {
        rule.destination = cidr_to_add.to_string();
        rule.cidr_block = None;
    }
    print_rules("Rewriting CIDR in found routes:", &found);

    found.retain(|candidate| !table.has_destination(&candidate.destination));
    dedup_in_order(&mut found);
    print_rules("Removed duplicate routes from found routes:", &found);

    found
}

/// Rewrite every route table of a compartment.
///
/// A listing failure skips all tables of the compartment; an update failure
/// only skips that table.
pub fn process_route_tables(
    client: &dyn NetworkClient,
    compartment_id: &str,
    change: &CidrChange,
    summary: &mut RunSummary,
) {
    let tables = match client.list_route_tables(compartment_id) {
        Ok(tables) => tables,
        Err(e) => {
            log::error!("listing route tables of {compartment_id}: {e}");
            println!("Error listing route tables: {e}");
            summary.listing_failures += 1;
            return;
        }
    };
    log::info!("{} route tables in {compartment_id}", tables.len());

    for table in tables {
        summary.route_tables_scanned += 1;
        log::debug!("route table {} '{}'", table.id, table.display_name);
        let new_rules = rewrite_route_rules(&table, &change.cidr_to_find, &change.cidr_to_add);
        if new_rules.is_empty() {
            continue;
        }

        let added = new_rules.len();
        let mut rules = table.route_rules;
        rules.extend(new_rules);

        match client.update_route_table(&table.id, &rules) {
            Ok(()) => {
                println!("Successfully updated route table: {}", table.id);
                summary.route_tables_updated += 1;
                summary.rules_added += added;
            }
            Err(e) => {
                log::error!("updating route table {}: {e}", table.id);
                println!("Error updating route table: {e}");
                summary.update_failures += 1;
            }
        }
    }
}
