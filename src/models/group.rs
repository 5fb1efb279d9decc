//! Group configuration data model.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;

/// A single route entry as entered in the console.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    /// Route value: a CIDR string or the wildcard token.
    pub val: String,
    /// Network address paired with its dotted-quad mask, filled in on
    /// canonicalization (empty for wildcard entries).
    #[serde(default)]
    pub ip_mask: String,
    /// Free-form remark.
    #[serde(default)]
    pub note: String,
}

/// Action taken by an access-control entry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AclAction {
    Allow,
    Deny,
}

/// An access-control entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AclConfig {
    pub action: AclAction,
    /// Port the rule applies to (0 for all ports).
    #[serde(default)]
    pub port: u16,
    /// Target network as a CIDR string.
    pub val: String,
    #[serde(default)]
    pub note: String,
}

/// The group configuration fields this crate validates and canonicalizes.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GroupConfig {
    /// Group name.
    pub name: String,
    #[serde(default)]
    pub note: String,
    /// Client DNS servers, one address per entry.
    #[serde(default)]
    pub client_dns: Vec<RouteConfig>,
    /// Comma-separated domains resolved through the tunnel.
    #[serde(default)]
    pub ds_include_domains: String,
    /// Comma-separated domains excluded from tunnel resolution.
    #[serde(default)]
    pub ds_exclude_domains: String,
    /// Access-control list.
    #[serde(default)]
    pub link_acl: Vec<AclConfig>,
    /// Routes pushed to the client.
    #[serde(default)]
    pub route_include: Vec<RouteConfig>,
    /// Routes excluded from the tunnel.
    #[serde(default)]
    pub route_exclude: Vec<RouteConfig>,
}

/// Read a group configuration from a JSON file.
pub fn read_group_config(path: &str) -> Result<GroupConfig, Box<dyn Error>> {
    log::debug!("read_group_config({path})");
    let contents = fs::read_to_string(path)?;
    let group: GroupConfig = serde_json::from_str(&contents)?;
    log::debug!(
        "read group '{name}': {ri} include, {re} exclude, {acl} acl entries",
        name = group.name,
        ri = group.route_include.len(),
        re = group.route_exclude.len(),
        acl = group.link_acl.len()
    );
    Ok(group)
}
