//! Route mask configuration and prefix bit math.
//!
//! Provides [`RouteMaskConfig`], the canonical form of a route entry sent
//! to the gateway backend, along with helpers for deriving subnet masks
//! from prefix lengths.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 network prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Token accepted in route fields to mean "the entire address space".
pub const WILDCARD: &str = "all";

/// Convert a network prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vpn_route_validation::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network prefix is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
///
/// Keeps the `len` high (network) bits and zeroes the host bits.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = prefix_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Canonical network address and subnet mask derived from a CIDR string.
///
/// Invariants: `netmask` is `net` leading one-bits followed by `32 - net`
/// zero-bits, and the low `32 - net` bits of `ip` are zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteMaskConfig {
    /// Network address in dotted-quad form, host bits zeroed.
    pub ip: String,
    /// Network prefix length (0-32).
    pub net: u8,
    /// Subnet mask in dotted-quad form.
    pub netmask: String,
}

impl Default for RouteMaskConfig {
    fn default() -> Self {
        RouteMaskConfig {
            ip: "0.0.0.0".to_string(),
            net: 0,
            netmask: "0.0.0.0".to_string(),
        }
    }
}

impl RouteMaskConfig {
    /// Render as `<ip>/<net>`, the form stored in a route's `val` field.
    pub fn ip_net(&self) -> String {
        format!("{}/{}", self.ip, self.net)
    }

    /// Render as `<ip>/<netmask>`, the form stored in a route's `ip_mask` field.
    pub fn ip_mask(&self) -> String {
        format!("{}/{}", self.ip, self.netmask)
    }
}

impl std::fmt::Display for RouteMaskConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.ip, self.net)
    }
}
