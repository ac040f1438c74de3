use geodoc2shp::export;
use std::error::Error;
use std::path::PathBuf;
use structopt::StructOpt;

/// Export the geo-referenced resources of a project as a compressed
/// bundle of shapefiles, one file per geometry kind.
#[derive(StructOpt)]
#[structopt(name = "geodoc2shp")]
struct Opt {
    /// Name of the project database
    project: String,
    /// Path of the archive to create (e.g. project.tar.gz)
    output: PathBuf,
    /// Base URL of the document store
    #[structopt(long, default_value = "http://localhost:3000")]
    server: String,
    /// Restrict the export to one operation; "project" exports everything
    #[structopt(long, default_value = "project")]
    operation: String,
    /// Directory for intermediate shapefiles (defaults to the system
    /// temp directory)
    #[structopt(long, parse(from_os_str))]
    temp_dir: Option<PathBuf>,
    /// Spatial reference definition (WKT), written as a .prj sidecar
    /// next to each shapefile
    #[structopt(long)]
    projection: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opt = Opt::from_args();

    let operation = match opt.operation.as_str() {
        "project" => None,
        operation_id => Some(operation_id),
    };
    let temp_dir = opt.temp_dir.unwrap_or_else(std::env::temp_dir);

    export(
        &opt.server,
        &opt.project,
        operation,
        &opt.output,
        &temp_dir,
        opt.projection.as_deref(),
    )?;
    Ok(())
}
