//! Append-if-absent mode.
//!
//! Works on a single compartment. Existing rules are never modified; at most
//! one rule is appended per route table and per security list.

use super::{CidrChange, RunSummary};
use crate::models::{IngressRule, RouteRule, RouteTable, SecurityList};
use crate::oci::NetworkClient;

/// Route rule to append to `table`, if any.
///
/// Uses the target of the first rule routing `cidr_to_find`. Nothing is
/// returned when no rule matches or `cidr_to_add` is already routed.
pub fn append_route_rule(
    table: &RouteTable,
    cidr_to_find: &str,
    cidr_to_add: &str,
    description: &str,
) -> Option<RouteRule> {
    let found = table
        .route_rules
        .iter()
        .find(|r| r.destination == cidr_to_find)?;
    if table.has_destination(cidr_to_add) {
        log::debug!("{} already routes {cidr_to_add}", table.id);
        return None;
    }
    Some(RouteRule::new(
        cidr_to_add,
        &found.network_entity_id,
        Some(description),
    ))
}

/// Minimal ingress rule to append to `list`, if any.
///
/// Requires a rule with source `cidr_to_find` and none with `cidr_to_add`.
pub fn append_ingress_rule(
    list: &SecurityList,
    cidr_to_find: &str,
    cidr_to_add: &str,
    description: &str,
) -> Option<IngressRule> {
    if !list.has_source(cidr_to_find) || list.has_source(cidr_to_add) {
        return None;
    }
    Some(IngressRule::new(cidr_to_add, Some(description)))
}

/// Append the new CIDR to route tables and security lists of one compartment.
///
/// Children are not visited.
pub fn append_compartment(
    client: &dyn NetworkClient,
    compartment_id: &str,
    change: &CidrChange,
    summary: &mut RunSummary,
) {
    log::info!("Processing compartment {compartment_id}");
    summary.compartments_visited += 1;
    append_route_tables(client, compartment_id, change, summary);
    append_security_lists(client, compartment_id, change, summary);
}

fn append_route_tables(
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

    for table in tables {
        summary.route_tables_scanned += 1;
        let Some(rule) = append_route_rule(
            &table,
            &change.cidr_to_find,
            &change.cidr_to_add,
            &change.description,
        ) else {
            println!("Skipping route table {}: nothing to add", table.id);
            continue;
        };

        let mut rules = table.route_rules;
        rules.push(rule);
        match client.update_route_table(&table.id, &rules) {
            Ok(()) => {
                println!(
                    "Added rule {} to route table {}",
                    change.cidr_to_add, table.id
                );
                summary.route_tables_updated += 1;
                summary.rules_added += 1;
            }
            Err(e) => {
                log::error!("updating route table {}: {e}", table.id);
                println!("Error updating route table: {e}");
                summary.update_failures += 1;
            }
        }
    }
}

fn append_security_lists(
    client: &dyn NetworkClient,
    compartment_id: &str,
    change: &CidrChange,
    summary: &mut RunSummary,
) {
    let lists = match client.list_security_lists(compartment_id) {
        Ok(lists) => lists,
        Err(e) => {
            log::error!("listing security lists of {compartment_id}: {e}");
            println!("Error listing security lists: {e}");
            summary.listing_failures += 1;
            return;
        }
    };

    for list in lists {
        summary.security_lists_scanned += 1;
        let Some(rule) = append_ingress_rule(
            &list,
            &change.cidr_to_find,
            &change.cidr_to_add,
            &change.description,
        ) else {
            println!("Skipping security list {}: nothing to add", list.id);
            continue;
        };

        let mut rules = list.ingress_security_rules;
        rules.push(rule);
        match client.update_security_list(&list.id, &rules) {
            Ok(()) => {
                println!(
                    "Added ingress rule {} to security list {}",
                    change.cidr_to_add, list.id
                );
                summary.security_lists_updated += 1;
                summary.rules_added += 1;
            }
            Err(e) => {
                log::error!("updating security list {}: {e}", list.id);
                println!("Error updating security list: {e}");
                summary.update_failures += 1;
            }
        }
    }
}
