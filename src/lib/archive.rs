use super::error::ExportError;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::info;
use std::fs::File;
use std::path::Path;

/// Packs the contents of `folder` into a gzip-compressed tar archive at
/// `output_path`. Entries are prefixed with the folder name, so the
/// archive unpacks into a single directory.
pub fn build_archive(folder: &Path, output_path: &Path) -> Result<(), ExportError> {
    let prefix = folder
        .file_name()
        .map(Path::new)
        .unwrap_or_else(|| Path::new("shapefiles"));

    let file = File::create(output_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut archive = tar::Builder::new(encoder);
    archive.append_dir_all(prefix, folder)?;
    archive.into_inner()?.finish()?;

    info!("packaged {} into {}", folder.display(), output_path.display());
    Ok(())
}
