//! Route canonicalization.
//!
//! Converts a validated CIDR string into its canonical network address
//! and dotted-quad subnet mask via direct integer bit masking.

use crate::models::{network_addr, prefix_mask, RouteMaskConfig, WILDCARD};
use crate::validation::validate_cidr;
use std::net::Ipv4Addr;

/// Derive the canonical network address and subnet mask from a CIDR string.
///
/// Never fails: the wildcard token, blank input, and anything
/// [`validate_cidr`] rejects all degrade to the default
/// `{ip: "0.0.0.0", net: 0, netmask: "0.0.0.0"}`. Callers that need to
/// tell the wildcard apart from a bad value must test for the token
/// before calling, as [`canonicalize_route_list`] does.
///
/// [`canonicalize_route_list`]: crate::processing::canonicalize_route_list
pub fn parse_route(s: &str) -> RouteMaskConfig {
    if validate_cidr(s).is_err() || s == WILDCARD {
        return RouteMaskConfig::default();
    }
    parse_network(s).unwrap_or_default()
}

// Blank input passes validation but carries no network to extract, so
// anything that does not split into address/prefix falls back to the
// default route.
fn parse_network(s: &str) -> Option<RouteMaskConfig> {
    let (addr_part, prefix_part) = s.split_once('/')?;
    let addr: Ipv4Addr = addr_part.parse().ok()?;
    let net: u8 = prefix_part.parse().ok()?;

    let network = network_addr(addr, net).ok()?;
    let mask = prefix_mask(net).ok()?;

    Some(RouteMaskConfig {
        ip: network.to_string(),
        net,
        netmask: Ipv4Addr::from(mask).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_zeroes_host_bits() {
        let route = parse_route("192.168.1.130/24");
        assert_eq!(route.ip, "192.168.1.0");
        assert_eq!(route.net, 24);
        assert_eq!(route.netmask, "255.255.255.0");
    }

    #[test]
    fn test_parse_route_host_route() {
        let route = parse_route("10.0.0.1/32");
        assert_eq!(route.ip, "10.0.0.1");
        assert_eq!(route.net, 32);
        assert_eq!(route.netmask, "255.255.255.255");
    }

    #[test]
    fn test_parse_route_zero_prefix() {
        // A /0 collapses any address to the default route.
        let route = parse_route("77.1.2.3/0");
        assert_eq!(route.ip, "0.0.0.0");
        assert_eq!(route.net, 0);
        assert_eq!(route.netmask, "0.0.0.0");
    }

    #[test]
    fn test_parse_route_odd_prefixes() {
        let route = parse_route("172.16.31.7/12");
        assert_eq!(route.ip, "172.16.0.0");
        assert_eq!(route.netmask, "255.240.0.0");

        let route = parse_route("192.168.1.130/25");
        assert_eq!(route.ip, "192.168.1.128");
        assert_eq!(route.netmask, "255.255.255.128");
    }

    #[test]
    fn test_parse_route_wildcard_is_default() {
        assert_eq!(parse_route("all"), RouteMaskConfig::default());
    }

    #[test]
    fn test_parse_route_invalid_is_default() {
        assert_eq!(parse_route(""), RouteMaskConfig::default());
        assert_eq!(parse_route("   "), RouteMaskConfig::default());
        assert_eq!(parse_route("192.168.1.0"), RouteMaskConfig::default());
        assert_eq!(parse_route("192.168.1.0/33"), RouteMaskConfig::default());
        assert_eq!(parse_route("256.1.1.1/24"), RouteMaskConfig::default());
        assert_eq!(parse_route("not a route"), RouteMaskConfig::default());
    }

    #[test]
    fn test_parse_route_idempotent() {
        for cidr in [
            "192.168.1.130/24",
            "10.0.0.1/32",
            "172.16.31.7/12",
            "8.8.8.8/0",
            "0.0.0.0/0",
            "10.18.126.77/28",
        ] {
            let first = parse_route(cidr);
            let second = parse_route(&first.ip_net());
            assert_eq!(second, first, "parse_route not idempotent for {cidr}");
        }
    }
}
