use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::schema::Framework;

/// Parse a framework definition from YAML text.
pub fn framework_from_str(yaml: &str) -> Result<Framework> {
    let framework: Framework =
        serde_saphyr::from_str(yaml).context("Failed to parse framework: invalid YAML")?;
    Ok(framework)
}

/// Load a framework definition from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The YAML cannot be parsed
pub fn load_framework(path: &Path) -> Result<Framework> {
    if !path.exists() {
        anyhow::bail!("Framework file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read framework file at {}", path.display()))?;

    let framework: Framework = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse framework: invalid YAML in {}", path.display()))?;

    Ok(framework)
}
