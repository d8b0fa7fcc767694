//! Run counters.

use std::fmt;

/// What a run did, for the closing report.
///
/// Failures are only counted; they never change the exit status.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub compartments_visited: usize,
    pub route_tables_scanned: usize,
    pub route_tables_updated: usize,
    pub security_lists_scanned: usize,
    pub security_lists_updated: usize,
    /// Rules appended across all updates.
    pub rules_added: usize,
    pub listing_failures: usize,
    pub update_failures: usize,
}

impl RunSummary {
    pub fn new() -> RunSummary {
        Self::default()
    }

    pub fn failures(&self) -> usize {
        self.listing_failures + self.update_failures
    }

    pub fn updates(&self) -> usize {
        self.route_tables_updated + self.security_lists_updated
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "compartments visited:   {}", self.compartments_visited)?;
        writeln!(
            f,
            "route tables updated:   {}/{}",
            self.route_tables_updated, self.route_tables_scanned
        )?;
        writeln!(
            f,
            "security lists updated: {}/{}",
            self.security_lists_updated, self.security_lists_scanned
        )?;
        writeln!(f, "rules added:            {}", self.rules_added)?;
        write!(
            f,
            "failures:               {} listing, {} update",
            self.listing_failures, self.update_failures
        )
    }
}
