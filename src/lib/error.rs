use std::fmt;
use thiserror::Error;

/// Position of a ring within its polygon-group.
///
/// The first ring of a group is the shell, every further ring is a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingRole {
    Shell,
    Hole(usize),
}

impl fmt::Display for RingRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RingRole::Shell => write!(f, "shell"),
            RingRole::Hole(index) => write!(f, "hole {}", index),
        }
    }
}

/// Failure to turn a single resource's geometry into a canonical
/// multi-geometry. These are resource-local: the affected resource is
/// skipped, the batch continues.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("unsupported geometry kind `{0}`")]
    UnsupportedKind(String),
    #[error("malformed coordinates: {0}")]
    MalformedCoordinates(&'static str),
    #[error("polygon {0} has no rings")]
    EmptyPolygon(usize),
    #[error("polygon {polygon}: {ring} is not a simple closed ring")]
    InvalidRing { polygon: usize, ring: RingRole },
}

/// Failure of the export pipeline around the engine. Unlike
/// [`GeometryError`], these abort the export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("datastore request failed")]
    Http(#[from] reqwest::Error),
    #[error("failed to write shapefile")]
    Shapefile(#[from] shapefile::Error),
    #[error("i/o error")]
    Io(#[from] std::io::Error),
}
