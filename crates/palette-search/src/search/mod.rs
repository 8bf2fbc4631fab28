//! Bracketing nearest-color search.
//!
//! Every strategy takes the projected palette and a projected target and
//! returns a [`Bracket`]: two palette points, their indices and a blend
//! factor between them. What the blend means depends on the strategy:
//!
//! | Strategy | `color_a` | `color_b` | `blend` |
//! |----------|-----------|-----------|---------|
//! | [`SearchType::ClosestOffset`] | nearest point | best-aligned direction from `a` | projection of `t - a` onto `b - a`, unbounded |
//! | [`SearchType::ClosestLine`] | segment start | segment end | `\|t-b\| / (\|t-a\| + \|t-b\|)`, 0..=1 |
//! | [`SearchType::ClosestX`]/`Y`/`Z` | nearest value at or below | nearest value above | linear position between the two |
//!
//! # Degenerate input
//!
//! An empty point set is [`SearchError::EmptyPalette`]. When the chosen
//! pair is a single point (one-color palette, target outside the axis range,
//! target exactly on a palette point) the blend is `0.0` and
//! [`Bracket::is_collapsed`] returns true.

mod axis;
mod line;
mod offset;
mod project;

use std::fmt;
use std::str::FromStr;

use crate::space::{Axis, ColorSpace, ParseNameError, Vec3};

pub use axis::find_closest_on_axis;
pub use line::find_closest_line;
pub use offset::find_closest_and_offset;
pub use project::{project_color, project_palette, unproject_color};

/// Search strategy.
///
/// Numeric tags: X=0, Y=1, Z=2, Line=3, Offset=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchType {
    #[default]
    ClosestOffset,
    ClosestLine,
    ClosestX,
    ClosestY,
    ClosestZ,
}

impl SearchType {
    pub const ALL: [SearchType; 5] = [
        SearchType::ClosestOffset,
        SearchType::ClosestLine,
        SearchType::ClosestX,
        SearchType::ClosestY,
        SearchType::ClosestZ,
    ];

    /// Map a numeric tag to a strategy. Unknown tags select
    /// [`SearchType::ClosestOffset`].
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            0 => SearchType::ClosestX,
            1 => SearchType::ClosestY,
            2 => SearchType::ClosestZ,
            3 => SearchType::ClosestLine,
            _ => SearchType::ClosestOffset,
        }
    }

    pub fn tag(self) -> u8 {
        match self.axis() {
            Some(axis) => axis.index() as u8,
            None if self == SearchType::ClosestLine => 3,
            None => 4,
        }
    }

    /// The component axis of an axis search.
    pub fn axis(self) -> Option<Axis> {
        match self {
            SearchType::ClosestX => Some(Axis::X),
            SearchType::ClosestY => Some(Axis::Y),
            SearchType::ClosestZ => Some(Axis::Z),
            SearchType::ClosestOffset | SearchType::ClosestLine => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SearchType::ClosestOffset => "offset",
            SearchType::ClosestLine => "line",
            SearchType::ClosestX => "x",
            SearchType::ClosestY => "y",
            SearchType::ClosestZ => "z",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchType {
    type Err = ParseNameError;

    /// Accepts the short names (`offset`, `line`, `x`, `y`, `z`) and the
    /// `closest-` prefixed forms, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower
            .strip_prefix("closest-")
            .or_else(|| lower.strip_prefix("closest_"))
            .or_else(|| lower.strip_prefix("closest"))
            .unwrap_or(&lower);
        match name {
            "offset" => Ok(SearchType::ClosestOffset),
            "line" => Ok(SearchType::ClosestLine),
            "x" => Ok(SearchType::ClosestX),
            "y" => Ok(SearchType::ClosestY),
            "z" => Ok(SearchType::ClosestZ),
            _ => Err(ParseNameError {
                kind: "search type",
                name: s.to_string(),
            }),
        }
    }
}

/// Two bracketing palette points and a blend factor.
///
/// `index_a` and `index_b` are the positions of the two points in the
/// searched slice. Distinct palette colors can project to the same point
/// (alpha is dropped by every projection), so the indices are the only
/// reliable way back to the palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub color_a: Vec3,
    pub color_b: Vec3,
    pub index_a: usize,
    pub index_b: usize,
    pub blend: f32,
}

impl Bracket {
    /// Bracket `points[index_a]` and `points[index_b]`. Equal points
    /// collapse onto `index_a` with a blend of 0, whatever `blend` is.
    pub(crate) fn new(points: &[Vec3], index_a: usize, index_b: usize, blend: f32) -> Self {
        let (color_a, color_b) = (points[index_a], points[index_b]);
        if color_a == color_b {
            return Self::collapsed(points, index_a);
        }
        Self {
            color_a,
            color_b,
            index_a,
            index_b,
            blend,
        }
    }

    pub(crate) fn collapsed(points: &[Vec3], index: usize) -> Self {
        Self {
            color_a: points[index],
            color_b: points[index],
            index_a: index,
            index_b: index,
            blend: 0.0,
        }
    }

    /// True when both bracket points are the same point.
    pub fn is_collapsed(&self) -> bool {
        self.index_a == self.index_b
    }
}

/// Error returned by the search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// No points to search
    EmptyPalette,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyPalette => write!(f, "cannot search an empty palette"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Index of the point nearest to `target`; the first one wins ties.
pub(crate) fn nearest_index(points: &[Vec3], target: Vec3) -> Result<usize, SearchError> {
    let mut best = None;
    let mut best_dist = f32::MAX;
    for (i, &point) in points.iter().enumerate() {
        let dist = target.distance(point);
        if dist < best_dist {
            best_dist = dist;
            best = Some(i);
        }
    }
    // NaN distances never compare less; fall back to the first point
    match best {
        Some(i) => Ok(i),
        None if points.is_empty() => Err(SearchError::EmptyPalette),
        None => Ok(0),
    }
}

/// Run the strategy selected by `search_type`.
///
/// `space` only matters for axis searches (see [`find_closest_on_axis`]).
///
/// # Example
///
/// ```
/// use palette_search::{find_closest, ColorSpace, SearchType, Vec3};
///
/// let points = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0)];
/// let bracket = find_closest(
///     &points,
///     Vec3::new(5.0, 0.0, 0.0),
///     SearchType::ClosestLine,
///     ColorSpace::Rgb,
/// )
/// .unwrap();
/// assert_eq!(bracket.blend, 0.5);
/// ```
pub fn find_closest(
    points: &[Vec3],
    target: Vec3,
    search_type: SearchType,
    space: ColorSpace,
) -> Result<Bracket, SearchError> {
    match search_type {
        SearchType::ClosestOffset => find_closest_and_offset(points, target),
        SearchType::ClosestLine => find_closest_line(points, target),
        SearchType::ClosestX | SearchType::ClosestY | SearchType::ClosestZ => {
            let axis = search_type.axis().unwrap_or(Axis::X);
            find_closest_on_axis(points, target, axis, space)
        }
    }
}
