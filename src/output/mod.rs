//! Output formatting for rewrite progress.
//!
//! - [`terminal`] - Rule listings and the closing summary

mod terminal;

pub use terminal::{format_field, format_rules, print_rules, print_summary};
