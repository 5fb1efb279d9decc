//! Address and route validation core for a VPN gateway admin console.
//!
//! Pure, synchronous validators for IPv4 addresses, CIDR network
//! specifications, and domain names, plus the canonicalization step that
//! rewrites submitted route/ACL/domain lists into the exact form the
//! gateway backend stores. The bundled binary drives the same functions
//! over a group configuration JSON file.

pub mod models;
pub mod output;
pub mod processing;
pub mod validation;

pub use models::{read_group_config, GroupConfig, RouteMaskConfig, WILDCARD};
pub use processing::{canonicalize_group, parse_route, validate_group};
pub use validation::{validate_cidr, validate_domain, validate_ip_address};
