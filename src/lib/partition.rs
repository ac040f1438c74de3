use super::items::{GeometryKind, RawResource, Resource};
use log::{info, warn};
use std::collections::BTreeMap;

/// Exportable resources bucketed by canonical geometry kind. Within a
/// bucket, resources keep the order they were fetched in.
pub type PartitionMap = BTreeMap<GeometryKind, Vec<Resource>>;

/// Partitions raw records by canonical geometry kind.
///
/// Records whose geometry cannot be normalized or built are skipped with
/// a diagnostic; a single bad record never aborts the batch.
pub fn partition(records: impl IntoIterator<Item = RawResource>) -> PartitionMap {
    let mut partitions = PartitionMap::new();
    let mut skipped = 0;

    for record in records {
        let id = record.id.clone();
        match Resource::from_record(record) {
            Ok(resource) => partitions
                .entry(resource.geometry.kind())
                .or_insert_with(Vec::new)
                .push(resource),
            Err(error) => {
                warn!("skipping resource {}: {}", id, error);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        info!("skipped {} resource(s) with unusable geometry", skipped);
    }
    partitions
}
