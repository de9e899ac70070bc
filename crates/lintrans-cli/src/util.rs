use anyhow::{Context, Result};
use ndarray::Array2;
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use lintrans::config::DemoConfig;
use lintrans::math::column_vector;

/// Parse a column vector written as comma separated entries, e.g. `3,5` or `-1.5, 2`.
pub fn parse_vector(text: &str) -> Result<Array2<f64>> {
    let values = text
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            entry
                .parse::<f64>()
                .with_context(|| format!("Invalid vector entry '{}' in '{}'", entry, text))
        })
        .collect::<Result<Vec<f64>>>()?;

    if values.len() != 2 {
        anyhow::bail!(
            "Expected a 2D vector such as '3,5', got {} entries: {}",
            values.len(),
            text
        );
    }
    Ok(column_vector(&values))
}

pub fn validate_html_file(path: &str) -> Result<()> {
    let pb = PathBuf::from(path);

    let ext = pb
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("html") | Some("htm") => {}
        _ => anyhow::bail!("File must have a .html or .htm extension: {}", path),
    }

    if let Some(parent) = pb.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            anyhow::bail!("Output directory does not exist: {}", parent.display());
        }
    }

    Ok(())
}

/// Write `config` as pretty-printed JSON, ready to be passed back to `lintrans demo`.
pub fn write_config_file<P: AsRef<Path>>(config: &DemoConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = serde_json::to_vec_pretty(config)?;
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create config file: {}", path.display()))?;
    file.write_all(&bytes)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    log::info!("Configuration written to {}", path.display());
    Ok(())
}
