//! Output persistence with best-effort external formatting.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use eyre::{Result, WrapErr};

use crate::file::write_file;

/// Result of persisting one generated file.
#[derive(Debug)]
pub struct WriteOutcome {
    /// Warning attached when the external formatter could not run.
    pub format_warning: Option<String>,
}

/// Persist generated text, passing it through prettier when available.
///
/// Formatting is best-effort: if prettier is missing or rejects the text,
/// the raw text is written anyway and the failure is reported as a warning
/// on the outcome. The generated file is never silently dropped.
pub fn write_output(path: &Path, content: &str) -> Result<WriteOutcome> {
    let (text, format_warning) = match format_with_prettier(path, content) {
        Ok(formatted) => (formatted, None),
        Err(reason) => (
            content.to_string(),
            Some(format!(
                "could not format '{}' with prettier: {}",
                path.display(),
                reason
            )),
        ),
    };

    write_file(path, &text).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;

    Ok(WriteOutcome { format_warning })
}

/// Pipe content through `prettier --stdin-filepath <path>`.
fn format_with_prettier(path: &Path, content: &str) -> std::result::Result<String, String> {
    let mut child = Command::new("prettier")
        .arg("--stdin-filepath")
        .arg(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| e.to_string())?;

    child
        .stdin
        .take()
        .ok_or_else(|| "stdin unavailable".to_string())?
        .write_all(content.as_bytes())
        .map_err(|e| e.to_string())?;

    let output = child.wait_with_output().map_err(|e| e.to_string())?;
    if !output.status.success() {
        return Err(format!("prettier exited with {}", output.status));
    }

    String::from_utf8(output.stdout).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_output_persists_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("index.ts");

        let outcome = write_output(&path, "export class Services {}\n").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("export class Services {}"));
        // Whether prettier ran depends on the environment; either way the
        // file must exist and a failure must have been downgraded.
        if outcome.format_warning.is_some() {
            assert_eq!(written, "export class Services {}\n");
        }
    }
}
