use super::error::GeometryError;
use super::items::GeometryKind;
use serde_json::Value;

pub type Position = (f64, f64);

/// Canonical coordinates: polygon-groups, each a list of rings (or
/// lines), each a list of positions. Multi-points and multi-polylines
/// only use a single polygon-group; multi-points additionally only use
/// a single ring slot.
pub type Coordinates = Vec<Vec<Vec<Position>>>;

fn as_array(value: &Value) -> Result<&Vec<Value>, GeometryError> {
    value
        .as_array()
        .ok_or(GeometryError::MalformedCoordinates("expected an array"))
}

fn position(value: &Value) -> Result<Position, GeometryError> {
    // Further components (elevation etc.) are dropped.
    let components = as_array(value)?;
    let x = components.get(0).and_then(Value::as_f64);
    let y = components.get(1).and_then(Value::as_f64);
    match (x, y) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(GeometryError::MalformedCoordinates(
            "a position needs at least two numeric components",
        )),
    }
}

fn positions(value: &Value) -> Result<Vec<Position>, GeometryError> {
    as_array(value)?.iter().map(position).collect()
}

fn position_lists(value: &Value) -> Result<Vec<Vec<Position>>, GeometryError> {
    as_array(value)?.iter().map(positions).collect()
}

fn position_list_groups(value: &Value) -> Result<Coordinates, GeometryError> {
    as_array(value)?.iter().map(position_lists).collect()
}

/// Classifies a source geometry kind and extracts its coordinates into
/// the canonical 4-level structure.
///
/// Single variants are wrapped in one-element outer lists, so a Point
/// and a MultiPoint (and likewise for lines and polygons) come out
/// shaped identically and the builder never has to tell them apart.
pub fn normalize(kind: &str, coordinates: &Value) -> Result<(GeometryKind, Coordinates), GeometryError> {
    let normalized = match kind {
        "Point" => (
            GeometryKind::MultiPoint,
            vec![vec![vec![position(coordinates)?]]],
        ),
        "MultiPoint" => (GeometryKind::MultiPoint, vec![vec![positions(coordinates)?]]),
        "LineString" => (
            GeometryKind::MultiPolyline,
            vec![vec![positions(coordinates)?]],
        ),
        "MultiLineString" => (
            GeometryKind::MultiPolyline,
            vec![position_lists(coordinates)?],
        ),
        "Polygon" => (GeometryKind::MultiPolygon, vec![position_lists(coordinates)?]),
        "MultiPolygon" => (GeometryKind::MultiPolygon, position_list_groups(coordinates)?),
        other => return Err(GeometryError::UnsupportedKind(other.to_string())),
    };
    Ok(normalized)
}
