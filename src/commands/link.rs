//! `slugpath link`, `project-link` and `root-link` commands.

use crate::link::{build_link, build_project_link, build_root_link};
use crate::route::{extract_context, RouteParams};

/// Execute the `link` command.
///
/// The context is read from `from` the way a catch-all route would see it.
///
/// # Errors
///
/// Never fails.
pub fn run(relative: &str, from: Option<&str>) -> Result<(), String> {
    println!("{}", link_from(relative, from));
    Ok(())
}

/// Execute the `project-link` command.
///
/// # Errors
///
/// Never fails.
pub fn run_project(
    organization: Option<&str>,
    project: &str,
    relative: &str,
) -> Result<(), String> {
    println!("{}", build_project_link(organization, project, relative));
    Ok(())
}

/// Execute the `root-link` command.
///
/// # Errors
///
/// Never fails.
pub fn run_root(path: &str) -> Result<(), String> {
    println!("{}", build_root_link(path));
    Ok(())
}

fn link_from(relative: &str, from: Option<&str>) -> String {
    let context = from.and_then(|path| extract_context(&RouteParams::default(), path));
    build_link(relative, context.as_ref())
}
