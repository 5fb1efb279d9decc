//! Field validators for administrator-entered network values.
//!
//! Each validator treats blank input as valid (the form fields are
//! optional) and returns a user-facing message describing the first
//! violation found. Non-blank input is checked as entered, without
//! trimming, so stray whitespace is reported rather than repaired.

use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;

use crate::models::WILDCARD;

lazy_static! {
    static ref IP_ADDRESS_RE: Regex =
        Regex::new(r"^((25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(25[0-5]|2[0-4]\d|[01]?\d\d?)$")
            .expect("Invalid Regex?");
    static ref CIDR_RE: Regex = Regex::new(
        r"^((25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(25[0-5]|2[0-4]\d|[01]?\d\d?)/([12]?\d|3[0-2])$"
    )
    .expect("Invalid Regex?");
    static ref DOMAIN_RE: Regex =
        Regex::new(r"^([a-z0-9\x{4e00}-\x{9fa5}-]+\.)+[a-z\x{4e00}-\x{9fa5}]{2,}$")
            .expect("Invalid Regex?");
}

/// Parse dot-separated octets and check each is below 256.
///
/// The address patterns above already cap octets at 255; this re-check
/// guards the parsed values independently of the pattern.
fn check_octets(addr: &str) -> Result<Vec<u32>, Box<dyn Error>> {
    let mut octets = Vec::with_capacity(4);
    for part in addr.split('.') {
        let num: u32 = part
            .parse()
            .map_err(|_| format!("Invalid format, number {part} must be between 0 and 255"))?;
        if num >= 256 {
            return Err(format!("Invalid format, number {num} must be between 0 and 255").into());
        }
        octets.push(num);
    }
    Ok(octets)
}

/// Validate a single IPv4 address.
///
/// Blank input is valid. Beyond the dotted-quad syntax, the first and
/// last octets must not be 0 (host addresses like `0.1.2.3` or `1.2.3.0`
/// are rejected).
pub fn validate_ip_address(s: &str) -> Result<(), Box<dyn Error>> {
    if s.trim().is_empty() {
        return Ok(());
    }
    if !IP_ADDRESS_RE.is_match(s) {
        return Err("Invalid format, expected an address like 192.168.1.1".into());
    }
    let octets = check_octets(s)?;
    if octets.first() == Some(&0) {
        return Err("Invalid format, the first octet must not be 0".into());
    }
    if octets.last() == Some(&0) {
        return Err("Invalid format, the last octet must not be 0".into());
    }
    Ok(())
}

/// Validate a single domain name, ASCII or CJK labels.
///
/// Case-insensitive; requires at least two labels, with a final label of
/// two or more letters (no digits or hyphens).
pub fn validate_domain(s: &str) -> Result<(), Box<dyn Error>> {
    if s.trim().is_empty() {
        return Ok(());
    }
    if !DOMAIN_RE.is_match(&s.to_lowercase()) {
        return Err("Invalid format, expected a domain like baike.baidu.com".into());
    }
    Ok(())
}

/// Validate a CIDR network specification or the wildcard token.
///
/// Blank input and the literal `"all"` are valid. Unlike
/// [`validate_ip_address`], network addresses may legitimately start or
/// end with a 0 octet, so no leading/trailing-zero rule applies here.
pub fn validate_cidr(s: &str) -> Result<(), Box<dyn Error>> {
    if s.trim().is_empty() {
        return Ok(());
    }
    if s == WILDCARD {
        return Ok(());
    }
    if !CIDR_RE.is_match(s) {
        return Err("Invalid format, expected a network like 192.168.1.0/24".into());
    }
    let Some((addr_part, prefix_part)) = s.split_once('/') else {
        return Err("Invalid format, expected a network like 192.168.1.0/24".into());
    };
    check_octets(addr_part)?;
    let prefix: i64 = prefix_part.parse().map_err(|_| {
        format!("Invalid format, network prefix {prefix_part} must be between 0 and 32")
    })?;
    if !(0..=32).contains(&prefix) {
        return Err(
            format!("Invalid format, network prefix {prefix} must be between 0 and 32").into(),
        );
    }
    Ok(())
}
