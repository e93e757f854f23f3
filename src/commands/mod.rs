//! Command dispatch and handlers.

pub mod check_slug;
pub mod context;
pub mod link;
pub mod resolve;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// Only `resolve` touches the daemon; its adapters are chosen from
/// `SLUGPATH_*` configuration (live, recording, or replaying).
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Context { path, organization, project } => {
            context::run(path, organization.as_deref(), project.as_deref())
        }
        Command::Link { relative, from } => link::run(relative, from.as_deref()),
        Command::ProjectLink { project, relative, organization } => {
            link::run_project(organization.as_deref(), project, relative)
        }
        Command::RootLink { path } => link::run_root(path),
        Command::CheckSlug { slug } => check_slug::run(slug),
        Command::Resolve { project_paths, then } => {
            let config = AppConfig::from_env().map_err(|e| e.to_string())?;
            let ctx = ServiceContext::from_config(&config)?;
            let result = resolve::run_with_context(&ctx, project_paths, then);
            finish_recording(ctx)?;
            result
        }
    }
}

/// Write the cassette (when recording) and report where it went.
fn finish_recording(ctx: ServiceContext) -> Result<(), String> {
    if let Some(path) = ctx.finish()? {
        eprintln!("Recording saved to: {}", path.display());
    }
    Ok(())
}
