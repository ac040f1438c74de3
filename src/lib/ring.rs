use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo_types::{Line, LineString};

/// Checks whether a ring can bound a polygon area: it has to be closed,
/// carry at least four coordinates (a closed triangle), and must not
/// intersect itself. Adjacent segments may only meet at their shared
/// endpoint; everything else (a proper crossing, a self-touch at a
/// vertex, collinear overlap) disqualifies the ring.
pub fn is_simple_closed_ring(ring: &LineString<f64>) -> bool {
    if !ring.is_closed() || ring.0.len() < 4 {
        return false;
    }

    let segments: Vec<Line<f64>> = ring.lines().collect();
    let last = segments.len() - 1;

    for (i, a) in segments.iter().enumerate() {
        for (j, b) in segments.iter().enumerate().skip(i + 1) {
            // In a closed ring the last segment neighbours the first.
            let neighbours = j == i + 1 || (i == 0 && j == last);
            match line_intersection(*a, *b) {
                None => {}
                Some(LineIntersection::Collinear { .. }) => return false,
                Some(LineIntersection::SinglePoint { is_proper, .. }) => {
                    if is_proper || !neighbours {
                        return false;
                    }
                }
            }
        }
    }

    true
}
