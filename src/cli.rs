//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `slugpath`.
#[derive(Debug, Parser)]
#[command(name = "slugpath", version, about = "Derive route context and build deep links")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the organization/project context a route points at.
    Context {
        /// Raw route path, e.g. `/acme/widgets/issues/7`.
        path: String,
        /// Structured `organization` route parameter.
        #[arg(long)]
        organization: Option<String>,
        /// Structured `project` route parameter.
        #[arg(long)]
        project: Option<String>,
    },
    /// Build a link relative to the project open at `--from`.
    Link {
        /// Path inside the project, e.g. `/issues/7`.
        relative: String,
        /// Route currently open; omit for a root-relative link.
        #[arg(long)]
        from: Option<String>,
    },
    /// Build a link into an explicit project.
    ProjectLink {
        /// Project name.
        project: String,
        /// Path inside the project.
        relative: String,
        /// Organization slug; omit for an ungrouped project.
        #[arg(long)]
        organization: Option<String>,
    },
    /// Normalize a top-level route.
    RootLink {
        /// Route path, e.g. `settings`.
        path: String,
    },
    /// Resolve project paths through the daemon and print the link to the
    /// last one. Earlier paths are superseded as if navigated away from.
    Resolve {
        /// Filesystem paths of the projects, oldest request first.
        #[arg(required = true)]
        project_paths: Vec<String>,
        /// Path inside the resolved project.
        #[arg(long, default_value = "")]
        then: String,
    },
    /// Check that an organization slug is usable in routes.
    CheckSlug {
        /// Candidate organization slug.
        slug: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_context_with_params() {
        let cli = Cli::parse_from([
            "slugpath",
            "context",
            "/x",
            "--organization",
            "acme",
            "--project",
            "widgets",
        ]);
        assert!(matches!(
            cli.command,
            Command::Context { ref organization, .. } if organization.as_deref() == Some("acme")
        ));
    }

    #[test]
    fn parses_project_link_without_org() {
        let cli = Cli::parse_from(["slugpath", "project-link", "widgets", "issues/7"]);
        assert!(matches!(cli.command, Command::ProjectLink { organization: None, .. }));
    }

    #[test]
    fn resolve_defaults_to_project_root() {
        let cli = Cli::parse_from(["slugpath", "resolve", "/srv/data/widgets"]);
        assert!(matches!(cli.command, Command::Resolve { ref then, .. } if then.is_empty()));
    }

    #[test]
    fn resolve_accepts_several_paths() {
        let cli = Cli::parse_from(["slugpath", "resolve", "/a", "/b", "--then", "issues"]);
        assert!(matches!(
            cli.command,
            Command::Resolve { ref project_paths, .. } if project_paths.len() == 2
        ));
        assert!(Cli::try_parse_from(["slugpath", "resolve"]).is_err());
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["slugpath", "nonsense"]).is_err());
    }
}
