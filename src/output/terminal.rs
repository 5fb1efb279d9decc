//! Terminal output for validation reports and canonical summaries.

use crate::models::{GroupConfig, WILDCARD};
use crate::processing::ValidationIssue;
use colored::Colorize;

/// Pad a value into a fixed-width, left-aligned column.
///
/// Values wider than the column are printed in full rather than cut.
pub fn column<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:<width$}")
    }
}

/// Print field-level validation failures, one line per issue.
pub fn print_issues(issues: &[ValidationIssue]) {
    for issue in issues {
        println!(
            "{field} {value}: {message}",
            field = column(&issue.field, 22).red(),
            value = issue.value.on_blue(),
            message = issue.message
        );
    }
}

/// Print the canonical form of a group configuration.
pub fn print_group_summary(group: &GroupConfig) {
    println!("group {name}", name = group.name.bold());

    if !group.ds_include_domains.is_empty() {
        println!("  include domains  {}", group.ds_include_domains);
    }
    if !group.ds_exclude_domains.is_empty() {
        println!("  exclude domains  {}", group.ds_exclude_domains);
    }
    for dns in &group.client_dns {
        println!("  client dns       {}", dns.val);
    }
    for (label, routes) in [
        ("route include", &group.route_include),
        ("route exclude", &group.route_exclude),
    ] {
        for route in routes {
            let mask = if route.val == WILDCARD {
                "-"
            } else {
                route.ip_mask.as_str()
            };
            println!(
                "  {label}    {val} {mask} {note}",
                val = column(&route.val, 20).green(),
                mask = column(mask, 28),
                note = route.note
            );
        }
    }
    for acl in &group.link_acl {
        println!(
            "  acl              {action:?} {val} port {port} {note}",
            action = acl.action,
            val = column(&acl.val, 20).green(),
            port = acl.port,
            note = acl.note
        );
    }
}
