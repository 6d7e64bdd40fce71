//! Interactive questions asked before a run starts

use dialoguer::Confirm;
use std::path::Path;

use crate::core::constants::display;
use crate::core::error::Result;

/// Whether writing to `path` may go ahead.
///
/// Missing files and `force` need no question. Otherwise the user is asked
/// and the answer defaults to "no".
pub fn confirm_overwrite<P: AsRef<Path>>(path: P, force: bool) -> Result<bool> {
    let path = path.as_ref();
    if force || !path.exists() {
        return Ok(true);
    }

    let overwrite = Confirm::new()
        .with_prompt(format!(
            "{} Output file '{}' already exists. Overwrite?",
            display::QUESTION_PREFIX,
            path.display()
        ))
        .default(false)
        .interact()?;

    Ok(overwrite)
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_missing_file_needs_no_confirmation() -> TestResult {
        let dir = tempfile::tempdir()?;
        assert!(confirm_overwrite(dir.path().join("new.txt"), false)?);
        Ok(())
    }

    #[test]
    fn test_force_skips_confirmation() -> TestResult {
        let file = tempfile::NamedTempFile::new()?;
        assert!(confirm_overwrite(file.path(), true)?);
        Ok(())
    }
}
