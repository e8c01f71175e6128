use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{Context, Result};

use crate::domain::report::AcquisitionReport;

/// Relative output paths land next to the binary, not in the working
/// directory; an absolute path is used as given.
pub fn resolve_output_path(output: &Path) -> Result<PathBuf> {
    let executable = env::current_exe().context("Failed to locate the running executable")?;
    let main_dir = executable
        .parent()
        .context("The executable has no parent directory")?;

    Ok(main_dir.join(output))
}

/// Single create-or-overwrite write of the pretty-printed report.
pub fn write_report(path: &Path, report: &AcquisitionReport) -> Result<()> {
    let contents =
        serde_json::to_string_pretty(report).context("Failed to serialize the report")?;

    fs::write(path, contents)
        .with_context(|| format!("Failed to write the report to {}", path.display()))
}
