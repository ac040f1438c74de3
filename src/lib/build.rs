use super::coords::{Coordinates, Position};
use super::error::{GeometryError, RingRole};
use super::items::{Geometry, GeometryKind};
use super::ring::is_simple_closed_ring;
use geo_types::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

/// Builds the validated multi-geometry for canonical coordinates.
///
/// Multi-points and multi-polylines cannot fail once extraction has
/// succeeded; multi-polygons are subject to the ring validity rules and
/// fail as a whole if any ring of any polygon-group is invalid.
pub fn build(kind: GeometryKind, coordinates: &Coordinates) -> Result<Geometry, GeometryError> {
    match kind {
        GeometryKind::MultiPoint => Ok(Geometry::MultiPoint(build_multi_point(coordinates))),
        GeometryKind::MultiPolyline => {
            Ok(Geometry::MultiPolyline(build_multi_polyline(coordinates)))
        }
        GeometryKind::MultiPolygon => {
            Ok(Geometry::MultiPolygon(build_multi_polygon(coordinates)?))
        }
    }
}

// The classifier wraps single variants in one-element outer lists, so
// for multi-points the sole point list sits at [0][0].
fn build_multi_point(coordinates: &Coordinates) -> MultiPoint<f64> {
    let points = coordinates[0][0]
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect();
    MultiPoint(points)
}

fn build_multi_polyline(coordinates: &Coordinates) -> MultiLineString<f64> {
    let polylines = coordinates[0]
        .iter()
        .map(|polyline| LineString::from(polyline.clone()))
        .collect();
    MultiLineString(polylines)
}

fn build_multi_polygon(coordinates: &Coordinates) -> Result<MultiPolygon<f64>, GeometryError> {
    let mut polygons = Vec::with_capacity(coordinates.len());
    for (index, group) in coordinates.iter().enumerate() {
        polygons.push(build_polygon(index, group)?);
    }
    Ok(MultiPolygon(polygons))
}

fn build_polygon(index: usize, rings: &[Vec<Position>]) -> Result<Polygon<f64>, GeometryError> {
    let mut rings: Vec<LineString<f64>> = rings.iter().map(|ring| close_ring(ring)).collect();

    if rings.is_empty() {
        return Err(GeometryError::EmptyPolygon(index));
    }
    let shell = rings.remove(0);
    if !is_simple_closed_ring(&shell) {
        return Err(GeometryError::InvalidRing {
            polygon: index,
            ring: RingRole::Shell,
        });
    }
    for (hole_index, hole) in rings.iter().enumerate() {
        if !is_simple_closed_ring(hole) {
            return Err(GeometryError::InvalidRing {
                polygon: index,
                ring: RingRole::Hole(hole_index),
            });
        }
    }

    Ok(Polygon::new(shell, rings))
}

/// Appends a copy of the first vertex if the ring does not end in it,
/// repairing GeoJSON-style rings that were stored unclosed. Already
/// closed rings are left untouched.
fn close_ring(ring: &[Position]) -> LineString<f64> {
    let mut ring = LineString::from(ring.to_vec());
    ring.close();
    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::normalize;
    use serde_json::json;

    fn build_raw(kind: &str, raw: serde_json::Value) -> Result<Geometry, GeometryError> {
        let (canonical, coordinates) = normalize(kind, &raw).unwrap();
        build(canonical, &coordinates)
    }

    #[test]
    fn point_becomes_single_element_multi_point() {
        let geometry = build_raw("Point", json!([10.0, 20.0])).unwrap();
        assert_eq!(
            geometry,
            Geometry::MultiPoint(MultiPoint(vec![Point::new(10.0, 20.0)]))
        );
    }

    #[test]
    fn line_string_becomes_single_element_multi_polyline() {
        let geometry = build_raw("LineString", json!([[0.0, 0.0], [1.0, 2.0]])).unwrap();
        let expected = MultiLineString(vec![LineString::from(vec![(0.0, 0.0), (1.0, 2.0)])]);
        assert_eq!(geometry, Geometry::MultiPolyline(expected));
    }

    #[test]
    fn open_ring_is_closed() {
        let raw = json!([[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]]);
        let geometry = build_raw("Polygon", raw).unwrap();
        let polygons = match geometry {
            Geometry::MultiPolygon(multi_polygon) => multi_polygon.0,
            other => panic!("expected a multi-polygon, got {:?}", other),
        };
        assert_eq!(polygons.len(), 1);
        let shell: Vec<(f64, f64)> = polygons[0]
            .exterior()
            .0
            .iter()
            .map(|c| (c.x, c.y))
            .collect();
        assert_eq!(
            shell,
            vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]
        );
    }

    #[test]
    fn closing_is_idempotent() {
        let closed = close_ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        assert_eq!(closed.0.len(), 4);

        let reclosed = close_ring(&closed.0.iter().map(|c| (c.x, c.y)).collect::<Vec<_>>());
        assert_eq!(closed, reclosed);
    }

    #[test]
    fn polygon_with_valid_hole_keeps_it() {
        let raw = json!([
            [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
            [[2.0, 2.0], [4.0, 2.0], [4.0, 4.0], [2.0, 4.0]],
        ]);
        let geometry = build_raw("Polygon", raw).unwrap();
        let polygons = match geometry {
            Geometry::MultiPolygon(multi_polygon) => multi_polygon.0,
            other => panic!("expected a multi-polygon, got {:?}", other),
        };
        assert_eq!(polygons[0].interiors().len(), 1);
        assert_eq!(polygons[0].interiors()[0].0.len(), 5);
    }

    #[test]
    fn self_intersecting_shell_fails() {
        let raw = json!([[[0.0, 0.0], [1.0, 1.0], [1.0, 0.0], [0.0, 1.0]]]);
        let error = build_raw("Polygon", raw).unwrap_err();
        assert_eq!(
            error,
            GeometryError::InvalidRing {
                polygon: 0,
                ring: RingRole::Shell,
            }
        );
    }

    #[test]
    fn invalid_hole_names_its_index() {
        let raw = json!([
            [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
            [[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 3.0]],
            [[5.0, 5.0], [6.0, 6.0], [6.0, 5.0], [5.0, 6.0]],
        ]);
        let error = build_raw("Polygon", raw).unwrap_err();
        assert_eq!(
            error,
            GeometryError::InvalidRing {
                polygon: 0,
                ring: RingRole::Hole(1),
            }
        );
    }

    #[test]
    fn one_bad_group_fails_the_whole_multi_polygon() {
        let raw = json!([
            [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]],
            [[[5.0, 5.0], [6.0, 6.0], [6.0, 5.0], [5.0, 6.0]]],
        ]);
        let error = build_raw("MultiPolygon", raw).unwrap_err();
        assert_eq!(
            error,
            GeometryError::InvalidRing {
                polygon: 1,
                ring: RingRole::Shell,
            }
        );
    }

    #[test]
    fn polygon_group_without_rings_fails() {
        let raw = json!([
            [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]],
            [],
        ]);
        let error = build_raw("MultiPolygon", raw).unwrap_err();
        assert_eq!(error, GeometryError::EmptyPolygon(1));
    }
}
