use itertools::Itertools;
use log::info;
use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

pub mod archive;
mod build;
mod coords;
pub mod datastore;
pub mod error;
pub mod items;
pub mod output;
mod partition;
mod ring;

pub use items::{Geometry, GeometryKind, RawGeometry, RawResource, Resource};
pub use partition::{partition, PartitionMap};

/// Exports all geo-referenced resources of a project into a compressed
/// shapefile bundle at `output_path`.
///
/// Resources are fetched from the document store, normalized into the
/// three canonical multi-geometry kinds, and written as one shapefile
/// per kind; the files are packaged as a tar.gz archive. Resources with
/// unusable geometry are skipped, not fatal. If nothing survives, no
/// archive is created.
pub fn export(
    server_url: &str,
    project: &str,
    operation: Option<&str>,
    output_path: &Path,
    temp_dir: &Path,
    projection: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let records = datastore::fetch_resources(server_url, project, operation)?;
    info!("fetched {} resource(s) from project {}", records.len(), project);

    let partitions = partition(records);
    if partitions.is_empty() {
        info!("no exportable geometries found, nothing to do");
        return Ok(());
    }
    let summary = partitions
        .iter()
        .map(|(kind, resources)| format!("{} {}(s)", resources.len(), kind))
        .join(", ");
    info!("partitioned resources: {}", summary);

    let stem = output_path
        .file_stem()
        .and_then(OsStr::to_str)
        .ok_or("output path needs a file name")?;
    let folder = temp_dir.join(stem);
    fs::create_dir_all(&folder)?;

    // The folder is removed even when writing or packaging fails.
    let result = write_and_pack(&partitions, &folder, output_path, projection);
    fs::remove_dir_all(&folder)?;
    result
}

fn write_and_pack(
    partitions: &PartitionMap,
    folder: &Path,
    output_path: &Path,
    projection: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    output::write_shapefiles(partitions, folder, projection)?;
    archive::build_archive(folder, output_path)?;
    Ok(())
}
