//! `slugpath resolve` command.

use tracing::debug;

use crate::context::ServiceContext;
use crate::resolve::{relocation_target, Resolution, ResolutionTracker};

/// Execute the `resolve` command with the given service context.
///
/// Every path is issued a ticket up front, in order, so only the last one
/// can be current. Prints the route to `then` inside that project, or `/`
/// when it cannot be resolved.
///
/// # Errors
///
/// Returns an error string if the async runtime cannot be started.
pub fn run_with_context(
    ctx: &ServiceContext,
    project_paths: &[String],
    then: &str,
) -> Result<(), String> {
    let link = current_link(ctx, project_paths, then)?;
    println!("{link}");
    Ok(())
}

fn current_link(
    ctx: &ServiceContext,
    project_paths: &[String],
    then: &str,
) -> Result<String, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    let resolver = ctx.resolver();
    let tracker = ResolutionTracker::new();
    let requests: Vec<_> =
        project_paths.iter().map(|path| (tracker.begin(), path.as_str())).collect();

    let mut current = None;
    for (ticket, project_path) in requests {
        match runtime.block_on(resolver.resolve_latest(&tracker, ticket, project_path)) {
            Resolution::Current(target) => current = Some(target),
            Resolution::Stale => debug!(project_path, "superseded by a later path"),
        }
    }

    let target = current.flatten();
    Ok(relocation_target(target.as_ref(), then).href())
}
