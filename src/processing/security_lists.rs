//! Security list rewriting.
//!
//! Ingress rules whose source equals the CIDR to find are copied with the new
//! CIDR and appended to the list. The originals stay in place.

use super::{dedup_in_order, CidrChange, RunSummary};
use crate::models::{IngressRule, SecurityList};
use crate::oci::NetworkClient;
use crate::output::print_rules;

/// Ingress rules to append to `list`: matches of `cidr_to_find` rewritten to `cidr_to_add`.
///
/// A candidate is dropped only when an original rule is equal to it in every
/// field; a rule that differs in description alone is still added.
pub fn rewrite_ingress_rules(
    list: &SecurityList,
    cidr_to_find: &str,
    cidr_to_add: &str,
) -> Vec<IngressRule> {
    let mut found: Vec<IngressRule> = list
        .ingress_security_rules
        .iter()
        .filter(|r| r.source == cidr_to_find)
        .cloned()
        .collect();
    print_rules("Found ingress rules:", &found);

    for rule in found.iter_mut() {
        rule.source = cidr_to_add.to_string();
    }
    print_rules("Rewriting source CIDRs in found ingress rules:", &found);

    found.retain(|candidate| !list.ingress_security_rules.contains(candidate));
    dedup_in_order(&mut found);
    print_rules("Removed duplicate ingress rules from found rules:", &found);

    found
}

/// Rewrite every security list of a compartment.
///
/// A listing failure skips all lists of the compartment; an update failure
/// only skips that list.
pub fn process_security_lists(
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
    log::info!("{} security lists in {compartment_id}", lists.len());

    for list in lists {
        summary.security_lists_scanned += 1;
        log::debug!("security list {} '{}'", list.id, list.display_name);
        let new_rules = rewrite_ingress_rules(&list, &change.cidr_to_find, &change.cidr_to_add);
        if new_rules.is_empty() {
            continue;
        }

        let added = new_rules.len();
        let mut rules = list.ingress_security_rules;
        rules.extend(new_rules);

        match client.update_security_list(&list.id, &rules) {
            Ok(()) => {
                println!("Successfully updated security list: {}", list.id);
                summary.security_lists_updated += 1;
                summary.rules_added += added;
            }
            Err(e) => {
                log::error!("updating security list {}: {e}", list.id);
                println!("Error updating security list: {e}");
                summary.update_failures += 1;
            }
        }
    }
}
