//! In-memory [`NetworkClient`] used by the unit and integration tests.

use super::error::{OciError, Result};
use super::NetworkClient;
use crate::models::{
    Compartment, IngressRule, PortOptions, PortRange, RouteRule, RouteTable, SecurityList,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// A tenancy held in memory. Updates are applied and recorded.
#[derive(Default)]
pub struct FakeNetwork {
    pub children: HashMap<String, Vec<Compartment>>,
    pub route_tables: RefCell<HashMap<String, Vec<RouteTable>>>,
    pub security_lists: RefCell<HashMap<String, Vec<SecurityList>>>,
    /// Compartments whose child listing fails.
    pub failing_compartment_lists: HashSet<String>,
    pub failing_route_table_lists: HashSet<String>,
    pub failing_security_list_lists: HashSet<String>,
    /// Resource ids whose update fails.
    pub failing_updates: HashSet<String>,
    pub route_updates: RefCell<Vec<(String, Vec<RouteRule>)>>,
    pub security_updates: RefCell<Vec<(String, Vec<IngressRule>)>>,
    /// Ids of every update call, failed ones included, in call order.
    pub update_attempts: RefCell<Vec<String>>,
    /// Every compartment id passed to a listing call, in call order.
    pub visited: RefCell<Vec<String>>,
}

/// TCP ingress rule for a single destination port.
pub fn tcp_rule(source: &str, port: u16) -> IngressRule {
    IngressRule {
        source: source.to_string(),
        protocol: "6".to_string(),
        tcp_options: Some(PortOptions {
            destination_port_range: Some(PortRange {
                min: port,
                max: port,
            }),
            source_port_range: None,
        }),
        ..Default::default()
    }
}

fn failure(what: &str, id: &str) -> OciError {
    OciError::Command {
        cmd: format!("fake {what} {id}"),
        code: Some(1),
        stderr: "ServiceError: NotAuthorizedOrNotFound".to_string(),
    }
}

impl FakeNetwork {
    pub fn add_child(&mut self, parent: &str, child: &str) {
        self.children
            .entry(parent.to_string())
            .or_default()
            .push(Compartment::new(child, child));
    }

    pub fn add_route_table(&mut self, compartment: &str, table: RouteTable) {
        self.route_tables
            .get_mut()
            .entry(compartment.to_string())
            .or_default()
            .push(table);
    }

    pub fn add_security_list(&mut self, compartment: &str, list: SecurityList) {
        self.security_lists
            .get_mut()
            .entry(compartment.to_string())
            .or_default()
            .push(list);
    }

    pub fn route_table(&self, rt_id: &str) -> Option<RouteTable> {
        self.route_tables
            .borrow()
            .values()
            .flatten()
            .find(|t| t.id == rt_id)
            .cloned()
    }

    pub fn security_list(&self, list_id: &str) -> Option<SecurityList> {
        self.security_lists
            .borrow()
            .values()
            .flatten()
            .find(|l| l.id == list_id)
            .cloned()
    }
}

impl NetworkClient for FakeNetwork {
    fn list_compartments(&self, parent_id: &str) -> Result<Vec<Compartment>> {
        self.visited.borrow_mut().push(parent_id.to_string());
        if self.failing_compartment_lists.contains(parent_id) {
            return Err(failure("list compartments", parent_id));
        }
        Ok(self.children.get(parent_id).cloned().unwrap_or_default())
    }

    fn list_route_tables(&self, compartment_id: &str) -> Result<Vec<RouteTable>> {
        if self.failing_route_table_lists.contains(compartment_id) {
            return Err(failure("list route tables", compartment_id));
        }
        Ok(self
            .route_tables
            .borrow()
            .get(compartment_id)
            .cloned()
            .unwrap_or_default())
    }

    fn update_route_table(&self, rt_id: &str, rules: &[RouteRule]) -> Result<()> {
        self.update_attempts.borrow_mut().push(rt_id.to_string());
        if self.failing_updates.contains(rt_id) {
            return Err(failure("update route table", rt_id));
        }
        self.route_updates
            .borrow_mut()
            .push((rt_id.to_string(), rules.to_vec()));
        for table in self.route_tables.borrow_mut().values_mut().flatten() {
            if table.id == rt_id {
                table.route_rules = rules.to_vec();
            }
        }
        Ok(())
    }

    fn list_security_lists(&self, compartment_id: &str) -> Result<Vec<SecurityList>> {
        if self.failing_security_list_lists.contains(compartment_id) {
            return Err(failure("list security lists", compartment_id));
        }
        Ok(self
            .security_lists
            .borrow()
            .get(compartment_id)
            .cloned()
            .unwrap_or_default())
    }

    fn update_security_list(&self, security_list_id: &str, rules: &[IngressRule]) -> Result<()> {
        self.update_attempts
            .borrow_mut()
            .push(security_list_id.to_string());
        if self.failing_updates.contains(security_list_id) {
            return Err(failure("update security list", security_list_id));
        }
        self.security_updates
            .borrow_mut()
            .push((security_list_id.to_string(), rules.to_vec()));
        for list in self.security_lists.borrow_mut().values_mut().flatten() {
            if list.id == security_list_id {
                list.ingress_security_rules = rules.to_vec();
            }
        }
        Ok(())
    }
}
