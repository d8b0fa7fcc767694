//! Terminal output utilities.
//!
//! Progress lines go to stdout; diagnostics go through the logger.

use crate::processing::RunSummary;
use colored::Colorize;
use itertools::Itertools;
use std::fmt::Display;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");

    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render rules as `[rule, rule]`.
pub fn format_rules<T: Display>(rules: &[T]) -> String {
    format!("[{}]", rules.iter().join(", "))
}

/// Print a titled rule set on stdout.
pub fn print_rules<T: Display>(title: &str, rules: &[T]) {
    println!("{title}");
    println!("{}", format_rules(rules));
}

/// Print the closing report of a run.
pub fn print_summary(mode: &str, summary: &RunSummary, elapsed: chrono::Duration) {
    println!(
        "#{}# {mode} finished in {}.{:03}s",
        "DONE".on_green(),
        elapsed.num_seconds(),
        elapsed.num_milliseconds() % 1000
    );
    println!("{summary}");
    if summary.failures() > 0 {
        println!(
            "#{}# {} failure(s), see messages above",
            "NOTE".on_red(),
            format_field(summary.failures(), 4)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RouteRule;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_format_rules() {
        let rules = vec![
            RouteRule::new("10.0.0.0/24", "drg", None),
            RouteRule::new("10.1.0.0/24", "drg", Some("new")),
        ];
        assert_eq!(
            format_rules(&rules),
            "[10.0.0.0/24 -> drg, 10.1.0.0/24 -> drg 'new']"
        );
        assert_eq!(format_rules::<RouteRule>(&[]), "[]");
    }
}
