//! Integration tests for vpn-route-validation
//!
//! These tests verify the complete workflow from reading a group
//! configuration file through validation and canonicalization.

use vpn_route_validation::{
    canonicalize_group, read_group_config, validate_group, WILDCARD,
};

#[test]
fn test_full_workflow_clean_group() {
    let group = read_group_config("src/tests/test_data/group_config_01.json")
        .expect("Failed to read group config");

    // Every field passes validation
    let issues = validate_group(&group);
    assert!(issues.is_empty(), "Unexpected issues: {:?}", issues);

    let canonical = canonicalize_group(&group);

    // Domain list is lowercased and de-duplicated
    assert_eq!(canonical.ds_include_domains, "baike.baidu.com,sina.cn");
    assert_eq!(canonical.ds_exclude_domains, "");

    // The blank route entry is dropped, the rest are canonicalized
    assert_eq!(canonical.route_include.len(), 2);
    assert_eq!(canonical.route_include[0].val, "192.168.1.0/24");
    assert_eq!(
        canonical.route_include[0].ip_mask,
        "192.168.1.0/255.255.255.0"
    );
    assert_eq!(canonical.route_include[0].note, "office");
    assert_eq!(canonical.route_include[1].val, WILDCARD);
    assert_eq!(canonical.route_include[1].ip_mask, "");

    assert_eq!(canonical.route_exclude.len(), 1);
    assert_eq!(canonical.route_exclude[0].val, "10.0.0.1/32");
    assert_eq!(
        canonical.route_exclude[0].ip_mask,
        "10.0.0.1/255.255.255.255"
    );

    // ACL entries keep action/port/note; the wildcard collapses to /0
    assert_eq!(canonical.link_acl.len(), 2);
    assert_eq!(canonical.link_acl[0].val, "10.10.8.0/24");
    assert_eq!(canonical.link_acl[0].port, 443);
    assert_eq!(canonical.link_acl[1].val, "0.0.0.0/0");
    assert_eq!(canonical.link_acl[1].note, "default deny");
}

#[test]
fn test_full_workflow_invalid_group() {
    let group = read_group_config("src/tests/test_data/group_config_02.json")
        .expect("Failed to read group config");

    let issues = validate_group(&group);

    assert_eq!(issues.len(), 7, "Issues found: {:?}", issues);

    let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "client_dns[0]",
            "client_dns[1]",
            "client_dns[2]",
            "route_include[0]",
            "route_exclude[0]",
            "ds_include_domains",
            "ds_exclude_domains",
        ]
    );
    assert_eq!(issues[5].value, "abc");
    assert_eq!(issues[6].value, "example.123");
}

#[test]
fn test_canonicalization_is_stable() {
    // Canonicalizing an already-canonical group changes nothing.
    let group = read_group_config("src/tests/test_data/group_config_01.json")
        .expect("Failed to read group config");

    let once = canonicalize_group(&group);
    let twice = canonicalize_group(&once);

    assert_eq!(twice.ds_include_domains, once.ds_include_domains);
    assert_eq!(twice.route_include, once.route_include);
    assert_eq!(twice.route_exclude, once.route_exclude);
    assert_eq!(twice.link_acl, once.link_acl);
}
