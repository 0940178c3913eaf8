//! This sub-module bridges offset coordinates, which the game state and UI
//! use, into the cube coordinate system, and answers map-bounded questions
//! (neighbors, rings, paths) about the fixed rectangular board.

use crate::{
    hex::unit::{cube_distance, saturate, CubeHex, FractionalHex},
    MapConstants,
};
use derive_more::Display;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cmp;
use validator::Validate;

/// How far [HexGrid::closest_neighbors] looks from the center. 3 rings hold
/// 36 cells, which is always enough to find 5 in-bounds neighbors, even from
/// a corner of the map.
const CLOSEST_NEIGHBOR_RADIUS: u32 = 3;

/// A cell on the board, addressed by column and row. Odd rows are shifted
/// half a cell to the left of even rows when drawn.
///
/// Game state is keyed by these values, so the serialized form (`col` and
/// `row`) and the conversion to and from [CubeHex] must never change.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}]", "self.col", "self.row")]
pub struct OffsetCoord {
    pub col: i32,
    pub row: i32,
}

impl OffsetCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

impl From<CubeHex> for OffsetCoord {
    fn from(hex: CubeHex) -> Self {
        cube_to_offset(hex)
    }
}

/// Convert a cube hex to its offset coordinate. This is the inverse of
/// [HexGrid::offset_to_cube] for every cell on the map.
pub fn cube_to_offset(hex: CubeHex) -> OffsetCoord {
    // floor((r + 1) / 2), written so that r = i32::MAX can't overflow.
    // div_euclid is a floor division, which matters for negative rows.
    let half_row = hex.r().div_euclid(2) + hex.r().rem_euclid(2);
    OffsetCoord {
        col: hex.q().saturating_add(half_row),
        row: hex.r(),
    }
}

/// The rectangular board that offset coordinates live on. All map-bounded
/// queries go through this, and they all share one policy: **cells that fall
/// off the map are silently left out of the results.** These queries
/// describe what's reachable on the board, not the full mathematical sets.
///
/// A grid serializes as its [MapConstants], and deserializing one goes
/// through the same validation as [HexGrid::new].
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MapConstants", into = "MapConstants")]
pub struct HexGrid {
    constants: MapConstants,
}

impl HexGrid {
    /// Initialize a new grid with the given map constants. Returns an error
    /// if the constants are invalid.
    pub fn new(constants: MapConstants) -> anyhow::Result<Self> {
        constants.validate()?;
        debug!(
            "Initialized {}x{} hex grid",
            constants.grid_width, constants.grid_height
        );
        Ok(Self { constants })
    }

    /// Get a reference to the constants that define this grid
    pub fn constants(&self) -> &MapConstants {
        &self.constants
    }

    fn width(&self) -> i32 {
        self.constants.grid_width.into()
    }

    fn height(&self) -> i32 {
        self.constants.grid_height.into()
    }

    /// Total number of cells on the map
    pub fn len(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Is the given cell on the map?
    pub fn contains(&self, offset: OffsetCoord) -> bool {
        (0..self.width()).contains(&offset.col)
            && (0..self.height()).contains(&offset.row)
    }

    /// Iterate over every cell on the map, row by row
    pub fn cells(&self) -> impl Iterator<Item = OffsetCoord> {
        let width = self.width();
        (0..self.height())
            .flat_map(move |row| (0..width).map(move |col| OffsetCoord { col, row }))
    }

    /// Convert an offset coordinate to a cube hex. The cell is first
    /// flattened to its index on the board (`row * width + col`), and the
    /// cube coordinate is recovered from that index. Saved games depend on
    /// this exact mapping.
    ///
    /// The index is computed in 64 bits, so any pair of `i32`s converts.
    /// Rows that land past the `i32` range saturate.
    pub fn offset_to_cube(&self, offset: OffsetCoord) -> CubeHex {
        let width = i64::from(self.width());
        let hex_num = i64::from(offset.row) * width + i64::from(offset.col);
        let r = hex_num.div_euclid(width);
        let q = hex_num.rem_euclid(width) - (r + 1).div_euclid(2);
        CubeHex::new(saturate(q), saturate(r))
    }

    /// Convert a cube hex to an offset coordinate. See [cube_to_offset].
    pub fn cube_to_offset(&self, hex: CubeHex) -> OffsetCoord {
        cube_to_offset(hex)
    }

    /// Number of steps between two cells
    pub fn offset_distance(&self, a: OffsetCoord, b: OffsetCoord) -> i32 {
        cube_distance(self.offset_to_cube(a), self.offset_to_cube(b))
    }

    /// Get every on-map cell within `max_distance` steps of the given cell,
    /// not including the cell itself
    pub fn neighbors_within_distance(
        &self,
        offset: OffsetCoord,
        max_distance: u32,
    ) -> Vec<OffsetCoord> {
        let center = self.offset_to_cube(offset);
        let radius = cmp::min(max_distance, self.farthest_on_map(center));
        let neighbors = self.keep_on_map(
            center.iter_range(radius).filter(|hex| *hex != center),
        );
        trace!(
            "{} neighbors within {} of {}",
            neighbors.len(),
            max_distance,
            offset
        );
        neighbors
    }

    /// Get the `count` on-map cells nearest to the given cell, closest
    /// first. Cells at the same distance come out in a fixed order for a
    /// given input, but that order isn't otherwise meaningful.
    ///
    /// Only cells up to 3 steps away are considered, so asking for more than
    /// 5 may return fewer than `count` cells near the edges of the map.
    pub fn closest_neighbors(
        &self,
        offset: OffsetCoord,
        count: usize,
    ) -> Vec<OffsetCoord> {
        let center = self.offset_to_cube(offset);
        let mut candidates: Vec<(i32, CubeHex)> = center
            .range(CLOSEST_NEIGHBOR_RADIUS)
            .into_iter()
            .filter(|hex| *hex != center)
            .map(|hex| (cube_distance(center, hex), hex))
            .collect();
        // Stable sort, so ties keep their enumeration order
        candidates.sort_by_key(|(distance, _)| *distance);

        candidates
            .into_iter()
            .map(|(_, hex)| cube_to_offset(hex))
            .filter(|neighbor| self.contains(*neighbor))
            .take(count)
            .collect()
    }

    /// Get the on-map cells exactly `radius` steps from the given cell, in
    /// [CubeHex::ring] order
    pub fn ring(&self, offset: OffsetCoord, radius: u32) -> Vec<OffsetCoord> {
        let center = self.offset_to_cube(offset);
        if radius > self.farthest_on_map(center) {
            trace!("Ring of radius {} around {} is off the map", radius, offset);
            return Vec::new();
        }
        self.keep_on_map(center.iter_ring(radius))
    }

    /// Get the on-map cells along the straight line between two cells. See
    /// [CubeHex::line_to].
    pub fn line(&self, a: OffsetCoord, b: OffsetCoord) -> Vec<OffsetCoord> {
        self.keep_on_map(
            self.offset_to_cube(a).iter_line(self.offset_to_cube(b)),
        )
    }

    /// Build a path of on-map cells leading from one cell to another. The
    /// path always starts at `from` (assuming it's on the map) and always
    /// ends at `to`. Adjacent cells (or identical ones) just give
    /// `[from, to]`.
    ///
    /// Cells along the straight line that fall off the map are omitted, so
    /// the path can skip over a corner of the board. Consecutive cells are
    /// never duplicated.
    pub fn build_path(
        &self,
        from: OffsetCoord,
        to: OffsetCoord,
    ) -> Vec<OffsetCoord> {
        let start = self.offset_to_cube(from);
        let end = self.offset_to_cube(to);
        let distance = cube_distance(start, end);
        if distance <= 1 {
            return vec![from, to];
        }

        let start = FractionalHex::from(start);
        let end = FractionalHex::from(end);
        let mut path =
            Vec::with_capacity(cmp::min(distance as usize + 1, self.len()));
        let mut previous: Option<CubeHex> = None;
        let mut dropped = 0;
        for i in 0..=distance {
            let hex = start.lerp(end, i as f64 / distance as f64).round();
            if matches!(previous, Some(prev) if cube_distance(prev, hex) == 0) {
                continue;
            }
            previous = Some(hex);

            let offset = cube_to_offset(hex);
            if self.contains(offset) {
                path.push(offset);
            } else {
                dropped += 1;
            }
        }

        if path.last() != Some(&to) {
            path.push(to);
        }
        trace!(
            "Path from {} to {} has {} cells ({} off the map)",
            from,
            to,
            path.len(),
            dropped
        );
        path
    }

    /// Number of steps from a hex to the on-map cell farthest from it. No
    /// on-map cell is ever further away than this, so map-bounded queries
    /// never need to look past it.
    fn farthest_on_map(&self, center: CubeHex) -> u32 {
        // Distance is convex, so the farthest cell is a corner of the
        // board's hull. Because of the stagger, the hull corners sit on the
        // first two and last two rows.
        let last_col = self.width() - 1;
        let last_row = self.height() - 1;
        let rows = [0, cmp::min(1, last_row), cmp::max(0, last_row - 1), last_row];
        rows.into_iter()
            .flat_map(|row| {
                [0, last_col]
                    .into_iter()
                    .map(move |col| OffsetCoord::new(col, row))
            })
            .map(|corner| cube_distance(center, self.offset_to_cube(corner)))
            .max()
            .map_or(0, |distance| u32::try_from(distance).unwrap_or(0))
    }

    /// Convert cube hexes to offset coordinates, throwing away any that are
    /// off the map
    fn keep_on_map(
        &self,
        hexes: impl IntoIterator<Item = CubeHex>,
    ) -> Vec<OffsetCoord> {
        hexes
            .into_iter()
            .map(cube_to_offset)
            .filter(|offset| self.contains(*offset))
            .collect()
    }
}

impl TryFrom<MapConstants> for HexGrid {
    type Error = anyhow::Error;

    fn try_from(constants: MapConstants) -> Result<Self, Self::Error> {
        Self::new(constants)
    }
}

impl From<HexGrid> for MapConstants {
    fn from(grid: HexGrid) -> Self {
        grid.constants
    }
}
