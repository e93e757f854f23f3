//! `slugpath check-slug` command.

use crate::route::validate_org_slug;

/// Execute the `check-slug` command.
///
/// # Errors
///
/// Returns the validation failure when the slug cannot be used in routes.
pub fn run(slug: &str) -> Result<(), String> {
    validate_org_slug(slug).map_err(|e| e.to_string())?;
    println!("{slug}: ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn accepts_valid_slug() {
        assert!(run("acme").is_ok());
    }

    #[test]
    fn rejects_root_route() {
        let err = run("archived").unwrap_err();
        assert!(err.contains("top-level route"));
    }
}
