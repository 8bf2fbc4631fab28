//! Nearest color plus the best-aligned offset color.

use super::{nearest_index, Bracket, SearchError};
use crate::space::Vec3;

/// Pick the nearest point as `color_a`, then the point lying most nearly in
/// the direction of the target as seen from `color_a`.
///
/// The blend is the target's projection onto the `a -> b` direction divided
/// by the `a -> b` distance. It leaves 0..=1 when the target sits outside the
/// segment's cone.
pub fn find_closest_and_offset(points: &[Vec3], target: Vec3) -> Result<Bracket, SearchError> {
    let ia = nearest_index(points, target)?;
    let a = points[ia];

    // A target sitting exactly on `a` has no direction to follow
    let Some(toward_target) = (target - a).try_normalize() else {
        return Ok(Bracket::collapsed(points, ia));
    };

    let mut best_dist = f32::MAX;
    let mut best = None;
    for (i, &point) in points.iter().enumerate() {
        // Points coincident with `a` have no direction either
        let Some(offset) = (point - a).try_normalize() else {
            continue;
        };
        let dist = toward_target.distance(offset);
        if dist < best_dist {
            best_dist = dist;
            best = Some((i, offset));
        }
    }

    let Some((ib, toward_b)) = best else {
        return Ok(Bracket::collapsed(points, ia));
    };

    let cos = toward_target.dot(toward_b);
    let blend = ((target - a).length() * cos) / (points[ib] - a).length();
    Ok(Bracket::new(points, ia, ib, blend))
}
