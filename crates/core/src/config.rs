use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Fixed geometry of the game board. This covers both the logical grid (how
/// many cells there are in each direction) and the background image that the
/// grid gets drawn onto (pixel size and the margins around the playable
/// area).
///
/// Constants are read-only once a [HexGrid](crate::HexGrid) or
/// [BoardRenderer](crate::BoardRenderer) is built from them. The defaults
/// describe the real game board; other values are mostly useful for tests.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_margins"))]
#[serde(default)]
pub struct MapConstants {
    /// Width of the background image, in pixels. The rendered map canvas is
    /// always exactly this wide, regardless of the grid.
    #[validate(range(min = 1.0))]
    pub background_width: f64,

    /// Height of the background image, in pixels
    #[validate(range(min = 1.0))]
    pub background_height: f64,

    /// Number of columns in the grid. Offset coordinates are valid for
    /// `0 <= col < grid_width`.
    #[validate(range(min = 1, max = 1000))]
    pub grid_width: u16,

    /// Number of rows in the grid. Offset coordinates are valid for
    /// `0 <= row < grid_height`.
    #[validate(range(min = 1, max = 1000))]
    pub grid_height: u16,

    /// Default distance from the center of a cell to one of its corners, in
    /// pixels. Renderers can override this per call.
    #[validate(range(min = 0.0))]
    pub hex_radius: f64,

    /// Empty space between the left edge of the background and the first
    /// column, in pixels
    #[validate(range(min = 0.0))]
    pub margin_left: f64,

    /// Empty space to the right of the last column, in pixels
    #[validate(range(min = 0.0))]
    pub margin_right: f64,

    /// Empty space between the top edge of the background and the first row,
    /// in pixels
    #[validate(range(min = 0.0))]
    pub margin_top: f64,

    /// Empty space below the last row, in pixels
    #[validate(range(min = 0.0))]
    pub margin_bottom: f64,
}

impl MapConstants {
    /// Width of the background that's left over for cells once margins are
    /// taken out
    pub fn usable_width(&self) -> f64 {
        self.background_width - self.margin_left - self.margin_right
    }

    /// Height of the background that's left over for cells once margins are
    /// taken out
    pub fn usable_height(&self) -> f64 {
        self.background_height - self.margin_top - self.margin_bottom
    }
}

impl Default for MapConstants {
    fn default() -> Self {
        Self {
            background_width: 1500.0,
            background_height: 1300.0,
            grid_width: 35,
            grid_height: 34,
            hex_radius: 20.0,
            margin_left: 40.0,
            margin_right: 40.0,
            margin_top: 30.0,
            margin_bottom: 30.0,
        }
    }
}

/// Margins can't eat the entire background, otherwise there's no room left
/// for any cells
fn validate_margins(constants: &MapConstants) -> Result<(), ValidationError> {
    if constants.usable_width() <= 0.0 || constants.usable_height() <= 0.0 {
        Err(ValidationError::new("margins_exceed_background"))
    } else {
        Ok(())
    }
}
