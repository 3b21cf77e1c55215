//! Steering command: combination config -> fastNLO steering file.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use subproc_core::{config_file, steering, BeamType};

/// Execute the steering command.
pub fn execute(source: &Path, beams: BeamType, target_path: Option<&Path>) -> Result<()> {
    let source_file_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .with_context(|| format!("invalid source path: {}", source.display()))?;

    let text = std::fs::read_to_string(source)
        .with_context(|| format!("failed to read combination config {}", source.display()))?;
    let subprocs = config_file::parse(&text)?;
    info!(targets = subprocs.len(), "parsed combination config");

    let output_path = steering::resolve_output_path(&source_file_name, target_path);
    let rendered = steering::render(&subprocs, beams, &source_file_name);
    std::fs::write(&output_path, rendered)
        .with_context(|| format!("failed to write steering file to {}", output_path.display()))?;

    println!(
        "Successfully generated \"{}\". You should review it before use.",
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_writes_steering_into_target_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("subprocs.config");
        std::fs::write(&config_path, "0\n0 2 2 1 4 3\n").unwrap();

        execute(&config_path, BeamType::Pp, Some(dir.path())).unwrap();

        let written = std::fs::read_to_string(dir.path().join("subprocs.str")).unwrap();
        assert!(written.contains("#     subprocs.config\n"));
        assert!(written.contains("NSubProcessesLO                  1\n"));
        assert_eq!(written.matches("  0  2  1  4  3\n").count(), 3);
    }

    #[test]
    fn test_execute_respects_explicit_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("subprocs.config");
        std::fs::write(&config_path, "0\n0 1 0 0\n").unwrap();

        let out = dir.path().join("custom.str");
        execute(&config_path, BeamType::Pbarpbar, Some(&out)).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.contains("PDF1                          -2212\n"));
        assert!(written.contains("PDF2                          -2212\n"));
        // The gluon-gluon pair is sign-invariant.
        assert_eq!(written.matches("  0  0  0\n").count(), 3);
    }

    #[test]
    fn test_execute_rejects_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("subprocs.config");
        std::fs::write(&config_path, "0\n0 3 2 1\n").unwrap();

        assert!(execute(&config_path, BeamType::Pp, Some(dir.path())).is_err());
        assert!(!dir.path().join("subprocs.str").exists());
    }
}
