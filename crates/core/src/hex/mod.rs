//! This module holds basic types related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! There are two coordinate systems for addressing cells, and conversions
//! between them are always explicit.
//!
//! ### Cube Coordinates
//!
//! Cube coordinates are the canonical system for any geometry: distance,
//! neighbors, ranges, rings and lines. They follow the [cube coordinate
//! system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! Each coordinate has three components (`q`, `r`, and `s`). **For any cell,
//! all three components are integers and `q + r + s = 0`.** Even though the
//! board is two-dimensional, the redundant third axis makes the math around
//! hexagonal grids much simpler: distance is just the largest difference
//! along any one axis, and each of the six neighbors is one step along one
//! axis and one step back along another.
//!
//! [FractionalHex] is the real-valued version of a cube coordinate. It only
//! exists while interpolating (e.g. drawing a line) or converting pixels back
//! into cells, and gets rounded back into a [CubeHex].
//!
//! ### Offset Coordinates
//!
//! Offset coordinates (`col`, `row`) are what the game state and UI use. Rows
//! are staggered, with odd rows shifted half a cell to the left, which makes
//! the board a plain rectangle of `grid_width` × `grid_height` cells:
//!
//! ```text
//!    / \ / \ / \ / \
//!   |0,0|1,0|2,0|3,0|
//!  / \ / \ / \ / \ /
//! |0,1|1,1|2,1|3,1|
//!  \ / \ / \ / \ / \
//!   |0,2|1,2|2,2|3,2|
//!    \ / \ / \ / \ /
//! ```
//!
//! Offset coordinates are only meaningful on the map. Every geometric query
//! on them goes through [HexGrid], which converts to cube coordinates, does
//! the math there, converts back, and drops whatever landed off the board.

mod grid;
mod unit;

pub use self::{grid::*, unit::*};
