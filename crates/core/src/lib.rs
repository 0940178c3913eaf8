//! Hexgrid is the coordinate engine behind a hex-tiled game board. It answers
//! geometric questions about cells (distance, neighbors, rings, lines, paths)
//! and projects cells into pixel space. It doesn't draw anything and doesn't
//! know any game rules; renderers and game logic are built on top of it.
//!
//! ```
//! use hexgrid::{BoardRenderer, HexGrid, OffsetCoord};
//!
//! let grid = HexGrid::default();
//! let path = grid.build_path(OffsetCoord::new(0, 0), OffsetCoord::new(4, 6));
//! assert_eq!(path.first(), Some(&OffsetCoord::new(0, 0)));
//! assert_eq!(path.last(), Some(&OffsetCoord::new(4, 6)));
//!
//! // From here you can hand the cells to a renderer
//! let renderer = BoardRenderer::default();
//! let points: Vec<_> =
//!     path.iter().map(|cell| renderer.offset_to_pixel(*cell)).collect();
//! ```
//!
//! See [hex] for a description of the two coordinate systems, and
//! [MapConstants] for details on how the board can be configured.

mod config;
mod error;
pub mod hex;
pub mod render;
mod util;

pub use crate::{
    config::MapConstants,
    error::HexError,
    hex::{
        cube_distance, cube_to_offset, CubeHex, FractionalHex, HexDirection,
        HexGrid, OffsetCoord,
    },
    render::{
        layout::{Layout, Orientation},
        unit::{MapSize, Point},
        BoardRenderer,
    },
};
