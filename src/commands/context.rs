//! `slugpath context` command.

use crate::route::{extract_context, RouteContext, RouteParams};

/// Execute the `context` command.
///
/// # Errors
///
/// Never fails; absence of context is reported, not an error.
pub fn run(path: &str, organization: Option<&str>, project: Option<&str>) -> Result<(), String> {
    let params = RouteParams {
        organization: organization.map(String::from),
        project: project.map(String::from),
    };
    println!("{}", describe(extract_context(&params, path).as_ref()));
    Ok(())
}

fn describe(context: Option<&RouteContext>) -> String {
    match context {
        Some(ctx) => format!(
            "organization={} project={}",
            ctx.organization_slug.as_deref().unwrap_or("(ungrouped)"),
            ctx.project_name
        ),
        None => "no context".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_each_shape() {
        assert_eq!(
            describe(Some(&RouteContext::new("acme", "widgets"))),
            "organization=acme project=widgets"
        );
        assert_eq!(
            describe(Some(&RouteContext::ungrouped("widgets"))),
            "organization=(ungrouped) project=widgets"
        );
        assert_eq!(describe(None), "no context");
    }

    #[test]
    fn context_command_runs() {
        assert!(run("/settings/foo", None, None).is_ok());
    }
}
