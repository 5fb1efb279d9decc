use std::error::Error;
use vpn_route_validation::output::{print_group_summary, print_issues};
use vpn_route_validation::{canonicalize_group, read_group_config, validate_group};

fn main() -> Result<(), Box<dyn Error>> {
    // Keep main.rs thin, it cannot contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");

    log::info!("#Start main()");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "group_config.json".to_string());

    let group = read_group_config(&path)?;

    let issues = validate_group(&group);
    if !issues.is_empty() {
        print_issues(&issues);
        return Err(format!("{count} invalid field(s) in {path}", count = issues.len()).into());
    }

    let canonical = canonicalize_group(&group);
    print_group_summary(&canonical);

    Ok(())
}
