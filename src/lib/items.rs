use super::build;
use super::coords;
use super::error::GeometryError;
use geo_types::{MultiLineString, MultiPoint, MultiPolygon};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// The three geometry families a shapefile can hold. Every supported
/// source kind maps onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeometryKind {
    MultiPoint,
    MultiPolyline,
    MultiPolygon,
}

impl GeometryKind {
    /// File stem of the per-kind output shapefile.
    pub fn file_stem(self) -> &'static str {
        match self {
            GeometryKind::MultiPoint => "multipoints",
            GeometryKind::MultiPolyline => "multipolylines",
            GeometryKind::MultiPolygon => "multipolygons",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeometryKind::MultiPoint => write!(f, "multipoint"),
            GeometryKind::MultiPolyline => write!(f, "multipolyline"),
            GeometryKind::MultiPolygon => write!(f, "multipolygon"),
        }
    }
}

/// A built, validated multi-geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    MultiPoint(MultiPoint<f64>),
    MultiPolyline(MultiLineString<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiPolyline(_) => GeometryKind::MultiPolyline,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }
}

/// Source geometry as stored in the document: a GeoJSON-style kind
/// string and a coordinate array of kind-dependent nesting depth.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Value,
}

/// A resource record as fetched from the document store.
#[derive(Debug, Clone, Deserialize)]
pub struct RawResource {
    pub id: String,
    pub identifier: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(rename = "shortDescription")]
    pub short_description: Option<String>,
    pub geometry: RawGeometry,
}

/// An exportable resource: attributes plus its built geometry.
#[derive(Debug, Clone)]
pub struct Resource {
    pub id: String,
    pub identifier: String,
    pub resource_type: String,
    pub short_description: Option<String>,
    pub geometry: Geometry,
}

impl Resource {
    /// Normalizes and builds the record's geometry. Fails if the source
    /// kind is not supported, the coordinate array does not match the
    /// kind's nesting, or a polygon ring violates the validity rules.
    pub fn from_record(record: RawResource) -> Result<Self, GeometryError> {
        let (kind, coordinates) =
            coords::normalize(&record.geometry.kind, &record.geometry.coordinates)?;
        let geometry = build::build(kind, &coordinates)?;
        Ok(Resource {
            id: record.id,
            identifier: record.identifier,
            resource_type: record.resource_type,
            short_description: record.short_description,
            geometry,
        })
    }
}
