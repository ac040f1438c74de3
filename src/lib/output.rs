use super::error::ExportError;
use super::items::{Geometry, GeometryKind, Resource};
use super::partition::PartitionMap;
use dbase::{FieldValue, Record, TableWriterBuilder};
use geo_types::{LineString, MultiLineString, MultiPoint, MultiPolygon};
use log::info;
use shapefile::{Multipoint, Point, Polygon, PolygonRing, Polyline, Writer};
use std::convert::TryInto;
use std::fs;
use std::path::Path;

/// Writes one shapefile per non-empty bucket into `folder`, named after
/// the kind (`multipoints.shp` etc.). When `projection` is given, its
/// text is placed verbatim in a `.prj` sidecar next to each file.
pub fn write_shapefiles(
    partitions: &PartitionMap,
    folder: &Path,
    projection: Option<&str>,
) -> Result<(), ExportError> {
    for (kind, resources) in partitions {
        if resources.is_empty() {
            continue;
        }
        write_kind(*kind, resources, folder, projection)?;
    }
    Ok(())
}

fn write_kind(
    kind: GeometryKind,
    resources: &[Resource],
    folder: &Path,
    projection: Option<&str>,
) -> Result<(), ExportError> {
    let path = folder.join(format!("{}.shp", kind.file_stem()));

    // Attribute field names are capped at 10 characters by the dbf
    // format, hence "shortdesc".
    let table = TableWriterBuilder::new()
        .add_character_field("id".try_into().unwrap(), 64)
        .add_character_field("identifier".try_into().unwrap(), 254)
        .add_character_field("shortdesc".try_into().unwrap(), 254)
        .add_character_field("type".try_into().unwrap(), 64);

    let mut writer = Writer::from_path(&path, table)?;
    for resource in resources {
        let record = attribute_record(resource);
        match &resource.geometry {
            Geometry::MultiPoint(points) => {
                writer.write_shape_and_record(&multipoint_shape(points), &record)?
            }
            Geometry::MultiPolyline(polylines) => {
                writer.write_shape_and_record(&polyline_shape(polylines), &record)?
            }
            Geometry::MultiPolygon(polygons) => {
                writer.write_shape_and_record(&polygon_shape(polygons), &record)?
            }
        }
    }

    if let Some(wkt) = projection {
        fs::write(folder.join(format!("{}.prj", kind.file_stem())), wkt)?;
    }

    info!(
        "wrote {} {} feature(s) to {}",
        resources.len(),
        kind,
        path.display()
    );
    Ok(())
}

fn attribute_record(resource: &Resource) -> Record {
    let mut record = Record::default();
    record.insert(
        "id".to_string(),
        FieldValue::Character(Some(resource.id.clone())),
    );
    record.insert(
        "identifier".to_string(),
        FieldValue::Character(Some(resource.identifier.clone())),
    );
    record.insert(
        "shortdesc".to_string(),
        FieldValue::Character(Some(
            resource.short_description.clone().unwrap_or_default(),
        )),
    );
    record.insert(
        "type".to_string(),
        FieldValue::Character(Some(resource.resource_type.clone())),
    );
    record
}

fn shape_points(line: &LineString<f64>) -> Vec<Point> {
    line.0.iter().map(|c| Point::new(c.x, c.y)).collect()
}

fn multipoint_shape(multi_point: &MultiPoint<f64>) -> Multipoint {
    let points = multi_point
        .0
        .iter()
        .map(|point| Point::new(point.x(), point.y()))
        .collect();
    Multipoint::new(points)
}

fn polyline_shape(multi_line: &MultiLineString<f64>) -> Polyline {
    let parts = multi_line.0.iter().map(shape_points).collect();
    Polyline::with_parts(parts)
}

fn polygon_shape(multi_polygon: &MultiPolygon<f64>) -> Polygon {
    let mut rings = Vec::new();
    for polygon in &multi_polygon.0 {
        rings.push(PolygonRing::Outer(shape_points(polygon.exterior())));
        for hole in polygon.interiors() {
            rings.push(PolygonRing::Inner(shape_points(hole)));
        }
    }
    Polygon::with_rings(rings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Polygon as GeoPolygon;

    #[test]
    fn polygon_shape_carries_ring_roles() {
        let shell = LineString::from(vec![
            (0., 0.),
            (10., 0.),
            (10., 10.),
            (0., 10.),
            (0., 0.),
        ]);
        let hole = LineString::from(vec![(2., 2.), (4., 2.), (4., 4.), (2., 4.), (2., 2.)]);
        let multi_polygon = MultiPolygon(vec![GeoPolygon::new(shell, vec![hole])]);

        let shape = polygon_shape(&multi_polygon);
        let outer: Vec<_> = shape
            .rings()
            .iter()
            .filter(|ring| matches!(ring, PolygonRing::Outer(_)))
            .collect();
        let inner: Vec<_> = shape
            .rings()
            .iter()
            .filter(|ring| matches!(ring, PolygonRing::Inner(_)))
            .collect();
        assert_eq!(outer.len(), 1);
        assert_eq!(inner.len(), 1);
    }

    #[test]
    fn multipoint_shape_keeps_all_points() {
        let multi_point = MultiPoint(vec![
            geo_types::Point::new(1., 2.),
            geo_types::Point::new(3., 4.),
        ]);
        let shape = multipoint_shape(&multi_point);
        assert_eq!(shape.points().len(), 2);
    }
}
