//! Closest palette segment.

use super::{Bracket, SearchError};
use crate::space::Vec3;

/// Pick the ordered pair whose connecting segment passes closest to the
/// target. Pairs of a point with itself are included, so an isolated point
/// can win on its own.
///
/// The blend is `|t - b| / (|t - a| + |t - b|)`.
pub fn find_closest_line(points: &[Vec3], target: Vec3) -> Result<Bracket, SearchError> {
    if points.is_empty() {
        return Err(SearchError::EmptyPalette);
    }

    let mut best_dist = f32::MAX;
    let (mut a, mut b) = (0, 0);
    for (i, &start) in points.iter().enumerate() {
        for (j, &end) in points.iter().enumerate() {
            let dist = target.distance_to_segment(start, end);
            if dist < best_dist {
                best_dist = dist;
                a = i;
                b = j;
            }
        }
    }

    let to_a = (target - points[a]).length();
    let to_b = (target - points[b]).length();
    Ok(Bracket::new(points, a, b, to_b / (to_a + to_b)))
}
