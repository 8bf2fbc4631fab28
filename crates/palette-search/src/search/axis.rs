//! Bracketing along a single component axis.

use super::{Bracket, SearchError};
use crate::space::{Axis, ColorSpace, Vec3};

/// Find the tightest pair straddling the target's component on `axis`.
///
/// `color_a` is the largest value at or below the target, `color_b` the
/// smallest value above it. When one side is empty it keeps the global
/// minimum (for `a`) or maximum (for `b`) as seed.
///
/// In HSV space the Y and Z axes compare `value / max` against the target
/// rather than the raw value. The X (hue) axis does not.
///
/// The blend is the linear position of the target between the two values.
pub fn find_closest_on_axis(
    points: &[Vec3],
    target: Vec3,
    axis: Axis,
    space: ColorSpace,
) -> Result<Bracket, SearchError> {
    if points.is_empty() {
        return Err(SearchError::EmptyPalette);
    }

    let t = target.component(axis);

    let mut max = -f32::MAX;
    let mut min = f32::MAX;
    let (mut a, mut b) = (0, 0);
    for (i, point) in points.iter().enumerate() {
        let v = point.component(axis);
        if v > max {
            max = v;
            b = i;
        }
        if v < min {
            min = v;
            a = i;
        }
    }

    let normalize = space == ColorSpace::Hsv && axis != Axis::X;

    let (mut pos_a, mut pos_b) = (min, max);
    for (i, point) in points.iter().enumerate() {
        let v = point.component(axis);
        let compared = if normalize { v / max } else { v };
        if compared <= t {
            if v > pos_a {
                pos_a = v;
                a = i;
            }
        } else if v < pos_b {
            pos_b = v;
            b = i;
        }
    }

    Ok(Bracket::new(points, a, b, (t - pos_a) / (pos_b - pos_a)))
}
