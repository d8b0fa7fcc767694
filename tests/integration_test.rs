//! Integration tests for oci-cidr-rewrite
//!
//! These tests drive both run modes against an in-memory tenancy.

use oci_cidr_rewrite::models::{IngressRule, RouteRule, RouteTable, SecurityList};
use oci_cidr_rewrite::oci::fake::{tcp_rule, FakeNetwork};
use oci_cidr_rewrite::processing::CidrChange;
use oci_cidr_rewrite::{run_append, run_rewrite};

const FIND: &str = "10.0.0.0/24";
const ADD: &str = "10.1.0.0/24";

fn matching_table(id: &str) -> RouteTable {
    RouteTable::new(id, vec![RouteRule::new(FIND, "E", None)])
}

fn rewrite() -> CidrChange {
    CidrChange::new(FIND, ADD, "ignored in rewrite mode")
}

fn rules(network: &FakeNetwork, rt_id: &str) -> Vec<RouteRule> {
    network
        .route_table(rt_id)
        .map(|t| t.route_rules)
        .unwrap_or_default()
}

fn ingress(network: &FakeNetwork, list_id: &str) -> Vec<IngressRule> {
    network
        .security_list(list_id)
        .map(|l| l.ingress_security_rules)
        .unwrap_or_default()
}

#[test]
fn test_rewrite_adds_rule_next_to_original() {
    let mut network = FakeNetwork::default();
    network.add_route_table("root", matching_table("rt"));

    let summary = run_rewrite(&network, "root", &rewrite());

    assert_eq!(
        rules(&network, "rt"),
        vec![RouteRule::new(FIND, "E", None), RouteRule::new(ADD, "E", None)]
    );
    assert_eq!(summary.route_tables_updated, 1);
}

#[test]
fn test_rewrite_skips_table_already_routing_new_cidr() {
    let mut network = FakeNetwork::default();
    network.add_route_table(
        "root",
        RouteTable::new(
            "rt",
            vec![RouteRule::new(FIND, "E", None), RouteRule::new(ADD, "E", None)],
        ),
    );

    run_rewrite(&network, "root", &rewrite());

    assert!(network.update_attempts.borrow().is_empty());
}

#[test]
fn test_rewrite_twice_matches_prepared_table() {
    let mut network = FakeNetwork::default();
    network.add_route_table("root", matching_table("rt"));

    let first = run_rewrite(&network, "root", &rewrite());
    let after_first = rules(&network, "rt");
    let second = run_rewrite(&network, "root", &rewrite());

    assert_eq!(first.rules_added, 1);
    assert_eq!(second.rules_added, 0);
    assert_eq!(second.updates(), 0);
    assert_eq!(rules(&network, "rt"), after_first);
}

#[test]
fn test_rewrite_existing_new_cidr_not_duplicated() {
    let mut network = FakeNetwork::default();
    network.add_route_table(
        "root",
        RouteTable::new(
            "rt",
            vec![
                RouteRule::new(ADD, "X", None),
                RouteRule::new(FIND, "E", None),
                RouteRule::new(FIND, "F", None),
            ],
        ),
    );

    run_rewrite(&network, "root", &rewrite());

    let count = rules(&network, "rt")
        .iter()
        .filter(|r| r.destination == ADD)
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_rewrite_security_list_compares_all_fields() {
    let mut near_duplicate = tcp_rule(ADD, 22);
    near_duplicate.description = Some("already here".to_string());
    let mut network = FakeNetwork::default();
    network.add_security_list(
        "root",
        SecurityList::new("sl", vec![tcp_rule(FIND, 22), near_duplicate.clone()]),
    );

    run_rewrite(&network, "root", &rewrite());

    assert_eq!(
        ingress(&network, "sl"),
        vec![tcp_rule(FIND, 22), near_duplicate, tcp_rule(ADD, 22)]
    );
}

#[test]
fn test_append_mode_adds_described_rule() {
    let mut network = FakeNetwork::default();
    network.add_route_table("root", matching_table("rt"));
    network.add_security_list("root", SecurityList::new("sl", vec![tcp_rule(FIND, 443)]));

    let summary = run_append(&network, "root", &CidrChange::new(FIND, ADD, "migrated"));

    assert_eq!(
        rules(&network, "rt"),
        vec![
            RouteRule::new(FIND, "E", None),
            RouteRule::new(ADD, "E", Some("migrated")),
        ]
    );
    assert_eq!(
        ingress(&network, "sl"),
        vec![tcp_rule(FIND, 443), IngressRule::new(ADD, Some("migrated"))]
    );
    assert_eq!(summary.rules_added, 2);
}

#[test]
fn test_append_mode_leaves_complete_table_alone() {
    let mut network = FakeNetwork::default();
    network.add_route_table(
        "root",
        RouteTable::new(
            "rt",
            vec![RouteRule::new(FIND, "E", None), RouteRule::new(ADD, "Z", Some("other"))],
        ),
    );

    run_append(&network, "root", &CidrChange::new(FIND, ADD, "migrated"));

    assert!(network.update_attempts.borrow().is_empty());
}

#[test]
fn test_child_listing_failure_isolated() {
    let mut network = FakeNetwork::default();
    network.add_child("root", "left");
    network.add_child("root", "right");
    network.add_child("left", "left-child");
    network.add_route_table("left", matching_table("rt-left"));
    network.add_route_table("left-child", matching_table("rt-left-child"));
    network.add_route_table("right", matching_table("rt-right"));
    network.failing_compartment_lists.insert("left".to_string());

    let summary = run_rewrite(&network, "root", &rewrite());

    assert_eq!(*network.update_attempts.borrow(), vec!["rt-left", "rt-right"]);
    assert_eq!(rules(&network, "rt-left-child").len(), 1);
    assert_eq!(summary.listing_failures, 1);
}

#[test]
fn test_failed_updates_still_complete_run() {
    // Failures are only counted: the binaries exit 0 after a run like this.
    let mut network = FakeNetwork::default();
    network.add_route_table("root", matching_table("rt-a"));
    network.add_route_table("root", matching_table("rt-b"));
    network.add_security_list("root", SecurityList::new("sl", vec![tcp_rule(FIND, 22)]));
    for id in ["rt-a", "rt-b", "sl"] {
        network.failing_updates.insert(id.to_string());
    }

    let summary = run_rewrite(&network, "root", &rewrite());

    assert_eq!(network.update_attempts.borrow().len(), 3);
    assert_eq!(summary.update_failures, 3);
    assert_eq!(summary.updates(), 0);
    assert_eq!(rules(&network, "rt-a"), vec![RouteRule::new(FIND, "E", None)]);
}
