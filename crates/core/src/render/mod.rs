pub mod layout;
pub mod unit;

use crate::{
    render::unit::{MapSize, Point},
    MapConstants, OffsetCoord,
};
use log::debug;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A board renderer converts offset coordinates into pixel space on the map's
/// background image. It doesn't draw anything itself; it just produces the
/// points and outlines that a renderer needs.
///
/// Cells are laid out on a rectangular stagger: the usable area of the
/// background (everything inside the margins) is split evenly into columns
/// and rows, odd rows are shifted left by half a column, and the margins are
/// added back on at the end. This is independent of [layout::Layout], which
/// is for callers that work in cube coordinates.
///
/// Like [HexGrid](crate::HexGrid), a renderer serializes as its
/// [MapConstants] and is validated when deserialized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MapConstants", into = "MapConstants")]
pub struct BoardRenderer {
    constants: MapConstants,
}

impl BoardRenderer {
    /// Initialize a new renderer with the given map constants. Returns an
    /// error if the constants are invalid.
    pub fn new(constants: MapConstants) -> anyhow::Result<Self> {
        constants.validate()?;
        debug!(
            "Initialized board renderer with {:.2}x{:.2} px cells",
            constants.usable_width() / f64::from(constants.grid_width),
            constants.usable_height() / f64::from(constants.grid_height)
        );
        Ok(Self { constants })
    }

    /// Get a reference to the constants that this renderer uses
    pub fn constants(&self) -> &MapConstants {
        &self.constants
    }

    /// Horizontal distance between the centers of two cells next to each
    /// other in the same row, in pixels
    pub fn horizontal_step(&self) -> f64 {
        self.constants.usable_width() / f64::from(self.constants.grid_width)
    }

    /// Vertical distance between the centers of cells in consecutive rows,
    /// in pixels
    pub fn vertical_step(&self) -> f64 {
        self.constants.usable_height() / f64::from(self.constants.grid_height)
    }

    /// Get the pixel position of a cell's center
    pub fn offset_to_pixel(&self, offset: OffsetCoord) -> Point {
        let horizontal_step = self.horizontal_step();
        let stagger = if offset.row.rem_euclid(2) == 1 {
            horizontal_step / 2.0
        } else {
            0.0
        };
        Point::new(
            f64::from(offset.col) * horizontal_step - stagger
                + self.constants.margin_left,
            f64::from(offset.row) * self.vertical_step()
                + self.constants.margin_top,
        )
    }

    /// Get the pixel size of the map canvas. This is always the size of the
    /// background image; it doesn't depend on the cells drawn on it.
    pub fn calculate_map_size(&self) -> MapSize {
        MapSize {
            width: self.constants.background_width,
            height: self.constants.background_height,
        }
    }

    /// Get the 6 corners of a cell's outline, in pixel space. Corners are
    /// `hex_radius` from the cell's center, starting at 30° and spaced 60°
    /// apart, which gives a hexagon with a corner pointing straight up.
    pub fn offset_polygon_corners(
        &self,
        offset: OffsetCoord,
        hex_radius: f64,
    ) -> [Point; 6] {
        let center = self.offset_to_pixel(offset);
        let mut corners = [center; 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            let angle = (30.0 + 60.0 * i as f64).to_radians();
            *corner += Point::new(
                hex_radius * angle.cos(),
                hex_radius * angle.sin(),
            );
        }
        corners
    }

    /// Same as [Self::offset_polygon_corners], using the default hex radius
    /// from the map constants
    pub fn tile_corners(&self, offset: OffsetCoord) -> [Point; 6] {
        self.offset_polygon_corners(offset, self.constants.hex_radius)
    }
}

impl TryFrom<MapConstants> for BoardRenderer {
    type Error = anyhow::Error;

    fn try_from(constants: MapConstants) -> Result<Self, Self::Error> {
        Self::new(constants)
    }
}

impl From<BoardRenderer> for MapConstants {
    fn from(renderer: BoardRenderer) -> Self {
        renderer.constants
    }
}
