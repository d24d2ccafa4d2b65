use anyhow::Result;
use std::path::Path;

pub fn validate_tsv_file(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("tsv") | Some("txt") => {}
        _ => anyhow::bail!("File must have a .tsv or .txt extension: {}", path.display()),
    }

    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }

    Ok(())
}

pub fn validate_json_file(path: &Path) -> Result<()> {
    if path.extension().and_then(|s| s.to_str()) != Some("json") {
        anyhow::bail!("File must have a .json extension: {}", path.display());
    }

    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }

    Ok(())
}
