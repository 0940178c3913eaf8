//! This sub-module contains the basic units of the cube coordinate system:
//! integer hexes, fractional hexes, and the six directions between adjacent
//! hexes. See the parent module documentation for more info on the
//! coordinate system.

use crate::HexError;
use derive_more::{Add, AddAssign, Display, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{cmp, iter};
use strum::{EnumIter, IntoEnumIterator};

/// A single cell in the cube coordinate system. Each cell has a `q`, `r`, and
/// `s` component, and **for every cell `q + r + s = 0`.**
///
/// This struct only stores `q` and `r`, and derives `s` as needed. That way
/// there is no possible value of this type that breaks the invariant, and
/// arithmetic (add, subtract, scale, negate) can be derived component-wise
/// without re-validating anything.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Mul,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct CubeHex {
    q: i32,
    r: i32,
}

impl CubeHex {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a new hex with the given q and r. Since q+r+s=0 for all
    /// hexes, we can derive s from q & r.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a new hex from all three components. Returns an error if the
    /// components don't fall on the plane `q + r + s = 0`.
    pub fn new_qrs(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        if q + r + s != 0 {
            Err(HexError::InvalidCoordinate {
                q: q.into(),
                r: r.into(),
                s: s.into(),
            })
        } else {
            Ok(Self::new(q, r))
        }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        -(self.q + self.r)
    }

    /// Number of steps between this hex and the origin
    pub fn length(self) -> i32 {
        self.distance_to(Self::ORIGIN)
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they're adjacent, 2 if there is 1 hex between them, etc.
    ///
    /// Distances too large for an `i32` saturate to `i32::MAX`.
    pub fn distance_to(self, other: CubeHex) -> i32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // Two adjacent hexes are always separated by two cube edges, hence /2
        let (dq, dr, ds) = self.wide_delta(other);
        saturate((dq.abs() + dr.abs() + ds.abs()) / 2)
    }

    /// Same metric as [Self::distance_to], computed as the largest
    /// per-axis difference instead of half the summed differences. The two
    /// are always equal.
    pub fn chebyshev_distance(self, other: CubeHex) -> i32 {
        let (dq, dr, ds) = self.wide_delta(other);
        saturate(cmp::max(dq.abs(), cmp::max(dr.abs(), ds.abs())))
    }

    /// Per-axis difference between two hexes, widened so that hexes at
    /// opposite ends of the `i32` range can't overflow
    fn wide_delta(self, other: CubeHex) -> (i64, i64, i64) {
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        (dq, dr, -dq - dr)
    }

    /// Get the hex directly adjacent to this one in the given direction
    pub fn neighbor(self, direction: HexDirection) -> CubeHex {
        self + direction.to_vector()
    }

    /// Get the adjacent hex for a raw direction index. Indexes follow the
    /// ordering of [HexDirection::ALL].
    pub fn direction_neighbor(self, index: usize) -> Result<CubeHex, HexError> {
        Ok(self.neighbor(HexDirection::try_from(index)?))
    }

    /// Get an iterator of all the hexes directly adjacent to this one, in
    /// direction order. The iterator will always contain exactly 6 values.
    pub fn neighbors(self) -> impl Iterator<Item = CubeHex> {
        HexDirection::iter().map(move |dir| self.neighbor(dir))
    }

    /// Get every hex within `radius` steps of this one, including this one.
    /// The result forms a filled hexagon of `3r²+3r+1` hexes.
    pub fn range(self, radius: u32) -> Vec<CubeHex> {
        self.iter_range(radius).collect()
    }

    /// Lazy version of [Self::range], in the same order
    pub fn iter_range(self, radius: u32) -> impl Iterator<Item = CubeHex> {
        let n = radius_to_i32(radius);
        (-n..=n).flat_map(move |dq| {
            // If we just do [-n,n] for r as well, then we end up with a
            // diamond instead of a hexagon
            // https://www.redblobgames.com/grids/hexagons/#range
            let r_min = cmp::max(-n, (-dq).saturating_sub(n));
            let r_max = cmp::min(n, (-dq).saturating_add(n));
            (r_min..=r_max).map(move |dr| self + CubeHex::new(dq, dr))
        })
    }

    /// Get every hex exactly `radius` steps away from this one. The ring
    /// starts at the hex `radius` steps in the [HexDirection::SW] direction,
    /// then walks `radius` steps along each direction in [HexDirection::ALL]
    /// order. Renderers rely on this ordering, so don't change it.
    ///
    /// A radius of 0 gives just this hex.
    pub fn ring(self, radius: u32) -> Vec<CubeHex> {
        self.iter_ring(radius).collect()
    }

    /// Lazy version of [Self::ring], in the same order
    pub fn iter_ring(self, radius: u32) -> impl Iterator<Item = CubeHex> {
        let n = radius_to_i32(radius);
        let center = iter::once(self).take(if n == 0 { 1 } else { 0 });
        let start = self + HexDirection::SW.to_vector() * n;
        let walk = HexDirection::iter()
            .flat_map(move |direction| {
                iter::repeat(direction).take(n as usize)
            })
            .scan(start, |hex, direction| {
                let current = *hex;
                *hex = hex.neighbor(direction);
                Some(current)
            });
        center.chain(walk)
    }

    /// This hex followed by each ring from 1 to `radius`, in ring order
    pub fn spiral(self, radius: u32) -> Vec<CubeHex> {
        (0..=radius)
            .flat_map(|r| self.iter_ring(r))
            .collect()
    }

    /// Get the ordered sequence of hexes along the straight line from this
    /// hex to another, inclusive of both ends. The result always holds
    /// `distance + 1` hexes.
    pub fn line_to(self, other: CubeHex) -> Vec<CubeHex> {
        self.iter_line(other).collect()
    }

    /// Lazy version of [Self::line_to], in the same order
    pub fn iter_line(self, other: CubeHex) -> impl Iterator<Item = CubeHex> {
        let distance = self.distance_to(other);
        // Both ends get the same small nudge so that no sample lands exactly
        // on an edge between two hexes, where rounding is ambiguous
        let start = FractionalHex::from(self) + LINE_NUDGE;
        let end = FractionalHex::from(other) + LINE_NUDGE;
        let step = 1.0 / f64::from(cmp::max(distance, 1));
        (0..=distance).map(move |i| start.lerp(end, step * f64::from(i)).round())
    }
}

impl From<HexDirection> for CubeHex {
    fn from(direction: HexDirection) -> Self {
        direction.to_vector()
    }
}

/// Number of hexes in a filled hexagon of the given radius. Radius 0 means
/// 1 hex, 1 is 7 hexes, 2 is 19, etc.
/// Saturates at `usize::MAX`.
pub fn range_len(radius: u32) -> usize {
    // We'll always have 3r^2+3r+1 hexes (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r hexes for every step after that
    let r = usize::try_from(radius).unwrap_or(usize::MAX);
    r.saturating_mul(r)
        .saturating_add(r)
        .saturating_mul(3)
        .saturating_add(1)
}

/// Radii past `i32::MAX` can't be represented in cube space, so they're
/// capped there
fn radius_to_i32(radius: u32) -> i32 {
    i32::try_from(radius).unwrap_or(i32::MAX)
}

/// Narrow to an `i32`, clamping at either end of its range
pub(crate) fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Distance between two hexes, as used by the map-bounded queries. See
/// [CubeHex::chebyshev_distance].
pub fn cube_distance(a: CubeHex, b: CubeHex) -> i32 {
    a.chebyshev_distance(b)
}

/// Offset applied to both ends of a line before interpolating. Sums to zero
/// so the nudged points stay on the plane.
const LINE_NUDGE: FractionalHex = FractionalHex::raw(1e-6, 1e-6, -2e-6);

/// A point in cube space with real-valued components. These only exist as
/// intermediates, e.g. while interpolating along a line or converting from
/// pixels, and get [rounded](FractionalHex::round) back into a [CubeHex].
///
/// The `q + r + s = 0` invariant still applies, but only within float
/// precision.
#[derive(Copy, Clone, Debug, Default, PartialEq, Display, Add, Sub, Mul)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s")]
pub struct FractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHex {
    const fn raw(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Construct a new fractional hex with the given q and r, deriving s
    pub fn new(q: f64, r: f64) -> Self {
        Self::raw(q, r, -q - r)
    }

    /// Construct a new fractional hex from all three components. The sum of
    /// the components must round to zero, otherwise this returns an error.
    pub fn new_qrs(q: f64, r: f64, s: f64) -> Result<Self, HexError> {
        if (q + r + s).round() != 0.0 {
            Err(HexError::InvalidCoordinate { q, r, s })
        } else {
            Ok(Self::raw(q, r, s))
        }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// Linearly interpolate between this point and another. `t = 0` gives
    /// this point, `t = 1` gives the other.
    pub fn lerp(self, other: FractionalHex, t: f64) -> FractionalHex {
        self * (1.0 - t) + other * t
    }

    /// Snap this point to the hex that contains it.
    ///
    /// Each component is rounded on its own, which can knock the result off
    /// the plane. The component that moved the most during rounding gets
    /// recomputed from the other two. When two components moved by the same
    /// amount, the first one in `q`, `r`, `s` order is the one recomputed;
    /// this decides which hex a point on a boundary snaps to.
    pub fn round(self) -> CubeHex {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff >= r_diff && q_diff >= s_diff {
            q = -r - s;
        } else if r_diff >= s_diff {
            r = -q - s;
        }
        // Otherwise s was the worst, and it gets derived from q and r anyway

        CubeHex::new(q as i32, r as i32)
    }
}

impl From<CubeHex> for FractionalHex {
    fn from(hex: CubeHex) -> Self {
        Self::raw(hex.q().into(), hex.r().into(), hex.s().into())
    }
}

/// The 6 directions in which hexes line up side-to-side. Order matters here:
/// the index of each variant is its direction number, and [CubeHex::ring]
/// walks directions in this order.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HexDirection {
    /// East
    E,
    /// Northeast
    NE,
    /// Northwest
    NW,
    /// West
    W,
    /// Southwest
    SW,
    /// Southeast
    SE,
}

impl HexDirection {
    /// All directions, in cyclic order starting from east
    pub const ALL: [Self; 6] =
        [Self::E, Self::NE, Self::NW, Self::W, Self::SW, Self::SE];

    /// Position of this direction within [Self::ALL]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the direction with the given index, if the index is in `0..6`
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % Self::ALL.len()]
    }

    /// Get the offset that moves a hex one step in this direction
    pub fn to_vector(self) -> CubeHex {
        match self {
            Self::E => CubeHex::new(1, 0),
            Self::NE => CubeHex::new(1, -1),
            Self::NW => CubeHex::new(0, -1),
            Self::W => CubeHex::new(-1, 0),
            Self::SW => CubeHex::new(-1, 1),
            Self::SE => CubeHex::new(0, 1),
        }
    }
}

impl TryFrom<usize> for HexDirection {
    type Error = HexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(HexError::InvalidDirection(index))
    }
}
