use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write as _},
    path::Path,
};

use anyhow::{Context as _, Result};

use crate::Tables;

pub fn load(path: &Path) -> Result<Tables> {
    if !path.exists() {
        log::info!("Snapshot {} does not exist yet", path.display());
        return Ok(Tables::default());
    }
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut tables: Tables = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tables.catch_up_sequences();
    Ok(tables)
}

/// Writes into a temporary file next to the target that
/// replaces the previous snapshot as a whole.
pub fn save(path: &Path, tables: &Tables) -> Result<()> {
    let tmp_path = path.with_extension("tmp");
    let file = File::create(&tmp_path)
        .with_context(|| format!("Failed to create {}", tmp_path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, tables)?;
    writer.flush()?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    log::debug!("Saved snapshot {}", path.display());
    Ok(())
}
