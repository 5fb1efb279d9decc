//! Terminal output utilities.

mod terminal;

pub use terminal::{column, print_group_summary, print_issues};
