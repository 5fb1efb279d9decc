//! Group-level validation and submission canonicalization.
//!
//! Mirrors what the console does when an administrator saves a group:
//! field-level checks over every entered value, then each route, ACL,
//! and domain list is rewritten into the form the backend stores.

use crate::models::{AclConfig, GroupConfig, RouteConfig, WILDCARD};
use super::route::parse_route;
use crate::validation::{validate_cidr, validate_domain, validate_ip_address};
use itertools::Itertools;

/// A single field-level validation failure.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Configuration field the value came from, e.g. `route_include[2]`.
    pub field: String,
    /// Offending value as entered.
    pub value: String,
    /// User-facing message from the validator.
    pub message: String,
}

/// Run every field validator over a group configuration.
///
/// Collects all issues instead of stopping at the first so the whole
/// form can be reported in one pass.
pub fn validate_group(group: &GroupConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (i, dns) in group.client_dns.iter().enumerate() {
        if let Err(e) = validate_ip_address(&dns.val) {
            issues.push(issue(format!("client_dns[{i}]"), &dns.val, e));
        }
    }

    for (field, routes) in [
        ("route_include", &group.route_include),
        ("route_exclude", &group.route_exclude),
    ] {
        for (i, route) in routes.iter().enumerate() {
            if let Err(e) = validate_cidr(&route.val) {
                issues.push(issue(format!("{field}[{i}]"), &route.val, e));
            }
        }
    }

    for (i, acl) in group.link_acl.iter().enumerate() {
        if let Err(e) = validate_cidr(&acl.val) {
            issues.push(issue(format!("link_acl[{i}]"), &acl.val, e));
        }
    }

    for (field, domains) in [
        ("ds_include_domains", &group.ds_include_domains),
        ("ds_exclude_domains", &group.ds_exclude_domains),
    ] {
        for domain in split_domains(domains) {
            if let Err(e) = validate_domain(domain) {
                issues.push(issue(field.to_string(), domain, e));
            }
        }
    }

    if !issues.is_empty() {
        log::warn!(
            "group '{name}' has {count} invalid field(s)",
            name = group.name,
            count = issues.len()
        );
    }
    issues
}

fn issue(field: String, value: &str, err: Box<dyn std::error::Error>) -> ValidationIssue {
    ValidationIssue {
        field,
        value: value.to_string(),
        message: err.to_string(),
    }
}

// Domain lists accept both ASCII and full-width commas as separators.
fn split_domains(s: &str) -> impl Iterator<Item = &str> {
    s.split([',', '，']).filter(|domain| !domain.is_empty())
}

/// Rewrite a comma-separated domain list into its canonical form:
/// lowercased, empties dropped, duplicates removed (first occurrence
/// wins), re-joined with ASCII commas.
pub fn normalize_domain_list(s: &str) -> String {
    split_domains(s)
        .map(|domain| domain.to_lowercase())
        .unique()
        .join(",")
}

/// Canonicalize a route list for submission.
///
/// Entries with an empty value are dropped. Wildcard entries pass
/// through with an empty `ip_mask`; everything else is rewritten to
/// `<ip>/<net>` and `<ip>/<netmask>` via [`parse_route`].
pub fn canonicalize_route_list(routes: &[RouteConfig]) -> Vec<RouteConfig> {
    routes
        .iter()
        .filter(|route| !route.val.is_empty())
        .map(|route| {
            if route.val == WILDCARD {
                return RouteConfig {
                    val: WILDCARD.to_string(),
                    ip_mask: String::new(),
                    note: route.note.clone(),
                };
            }
            let parsed = parse_route(&route.val);
            RouteConfig {
                val: parsed.ip_net(),
                ip_mask: parsed.ip_mask(),
                note: route.note.clone(),
            }
        })
        .collect()
}

/// Canonicalize an access-control list for submission.
///
/// Entries with an empty value are dropped; the rest keep their action,
/// port, and note, with `val` rewritten to `<ip>/<net>`. The wildcard is
/// not special-cased here, so `"all"` collapses to `0.0.0.0/0`.
pub fn canonicalize_acl_list(acls: &[AclConfig]) -> Vec<AclConfig> {
    acls.iter()
        .filter(|acl| !acl.val.is_empty())
        .map(|acl| {
            let parsed = parse_route(&acl.val);
            AclConfig {
                action: acl.action,
                port: acl.port,
                val: parsed.ip_net(),
                note: acl.note.clone(),
            }
        })
        .collect()
}

/// Build the canonical form of a group configuration, the payload shape
/// the backend persists verbatim.
pub fn canonicalize_group(group: &GroupConfig) -> GroupConfig {
    log::debug!("canonicalize_group({name})", name = group.name);
    GroupConfig {
        name: group.name.clone(),
        note: group.note.clone(),
        client_dns: group.client_dns.clone(),
        ds_include_domains: normalize_domain_list(&group.ds_include_domains),
        ds_exclude_domains: normalize_domain_list(&group.ds_exclude_domains),
        link_acl: canonicalize_acl_list(&group.link_acl),
        route_include: canonicalize_route_list(&group.route_include),
        route_exclude: canonicalize_route_list(&group.route_exclude),
    }
}
