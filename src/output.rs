use crate::error::Result;
use crate::models::Dataset;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the dataset as pretty-printed (2-space) UTF-8 JSON.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, dataset)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::info!(
        "Wrote {} ticks to {}",
        dataset.data.len(),
        path.display()
    );
    Ok(())
}
