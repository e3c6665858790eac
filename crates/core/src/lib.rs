//! Warhex is the coordinate math behind a hex-tiled wargame map. It converts
//! between hex coordinates and screen pixels, enumerates the cells of common
//! map shapes, and answers adjacency questions. It does no drawing of its own;
//! renderers consume the geometry it produces.
//!
//! ```
//! use warhex::{GridConfig, HexGrid, Point};
//!
//! let grid = HexGrid::new(GridConfig::default()).unwrap();
//! let hex = grid.hex_at(Point::new(600.0, 450.0)).unwrap();
//! println!("{} is labelled {}", hex, grid.label(hex).unwrap());
//! for neighbor in grid.neighbors(hex) {
//!     println!("  next to {}", neighbor);
//! }
//! ```
//!
//! See [GridConfig] for how a grid can be customized, and [hex] and [screen]
//! for the underlying coordinate systems.

// Has to come first so the macros are visible everywhere else
mod util;

mod config;
mod grid;
pub mod hex;
pub mod screen;

pub use crate::{
    config::{GridConfig, MapShape, OrientationKind},
    grid::{CellGeometry, GridGeometry, HexGrid, MapLabel},
    hex::{Direction, FractionalHex, Hex},
    screen::{Layout, Orientation, Point, Vector, FLAT_TOP, POINTY_TOP},
    util::grid_len,
};
