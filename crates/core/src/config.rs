use crate::{
    hex::{self, Hex},
    screen::{Layout, Orientation, Point, Vector, FLAT_TOP, POINTY_TOP},
    util::grid_len,
};
use anyhow::bail;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::Validate;

/// Configuration that defines a grid: how its cells map onto the screen, and
/// which cells it contains. Two grids built from the same config will always
/// be identical.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Which way the cells are turned
    pub orientation: OrientationKind,

    /// Distance from the center of a cell to its corners along the screen's
    /// x axis, in pixels
    #[validate(range(min = 1.0, max = 10000.0))]
    pub hex_width: f64,

    /// Distance from the center of a cell to its corners along the screen's
    /// y axis, in pixels. Set this differently from `hex_width` to squash or
    /// stretch the grid.
    #[validate(range(min = 1.0, max = 10000.0))]
    pub hex_height: f64,

    /// Screen position of the center of the origin cell `(0, 0, 0)`
    pub origin: Point,

    /// The set of cells that make up the grid
    pub shape: MapShape,
}

impl GridConfig {
    /// Build the screen layout described by this config
    pub fn layout(&self) -> anyhow::Result<Layout> {
        Layout::new(
            self.orientation.orientation(),
            Vector::new(self.hex_width, self.hex_height),
            self.origin,
        )
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationKind::Pointy,
            hex_width: 30.0,
            hex_height: 30.0,
            // Center of a 1200x900 window
            origin: Point::new(600.0, 450.0),
            shape: MapShape::Hexagon { radius: 11 },
        }
    }
}

/// Serializable handle for one of the two [Orientation] constants
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrientationKind {
    /// See [POINTY_TOP]
    Pointy,
    /// See [FLAT_TOP]
    Flat,
}

impl OrientationKind {
    pub fn orientation(self) -> &'static Orientation {
        match self {
            Self::Pointy => &POINTY_TOP,
            Self::Flat => &FLAT_TOP,
        }
    }
}

/// The shape of a grid, which determines which cells it holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapShape {
    /// A large hexagon of cells around the origin. See [hex::hexagon].
    Hexagon { radius: u16 },
    /// A rectangular map, as stored in map files. See [hex::rectangle].
    Rectangle { columns: u16, rows: u16 },
}

impl MapShape {
    /// Largest radius, column count, or row count that a shape may have
    pub const MAX_EXTENT: u16 = 1000;

    /// Number of cells in this shape
    pub fn len(self) -> usize {
        match self {
            Self::Hexagon { radius } => grid_len(radius),
            Self::Rectangle { columns, rows } => {
                columns as usize * rows as usize
            }
        }
    }

    /// Does this shape have no cells at all?
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Return an error if this shape is too big to build
    pub fn ensure_bounds(self) -> anyhow::Result<()> {
        match self {
            Self::Hexagon { radius } if radius > Self::MAX_EXTENT => bail!(
                "Hexagon radius must be at most {}, but was {}",
                Self::MAX_EXTENT,
                radius
            ),
            Self::Rectangle { columns, rows }
                if columns > Self::MAX_EXTENT || rows > Self::MAX_EXTENT =>
            {
                bail!(
                    "Rectangle must be at most {max}x{max}, but was {}x{}",
                    columns,
                    rows,
                    max = Self::MAX_EXTENT
                )
            }
            _ => Ok(()),
        }
    }

    /// Enumerate the cells of this shape, row by row
    pub fn hexes(self) -> Vec<Hex> {
        match self {
            Self::Hexagon { radius } => hex::hexagon(Hex::ORIGIN, radius),
            Self::Rectangle { columns, rows } => hex::rectangle(columns, rows),
        }
    }
}
