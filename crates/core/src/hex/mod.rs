//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! Warhex deals with three coordinate spaces:
//!
//! ### Cube Coordinates
//!
//! Every cell of the map is identified by a [Hex], which uses the [cube
//! coordinate system described by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each coordinate has three components (`q`, `r` and `s`), and **for every
//! cell, all three components are integers and `q + r + s = 0`.** The third
//! component is redundant, but keeping it around makes distance, rotation and
//! neighbor math symmetric across all three axes.
//!
//! The `(q, r)` pair on its own is called the axial form. A [Hex] only stores
//! the axial form and derives `s` on demand, which means a value that breaks
//! the plane invariant can't exist at all.
//!
//! ### Fractional Coordinates
//!
//! A [FractionalHex] is a cube coordinate with real-valued components. These
//! show up at the boundary with screen space: converting a pixel into hex space
//! lands somewhere *inside* a cell rather than on its center, and
//! [FractionalHex::round] snaps it back to the cell that contains it.
//!
//! ### Screen Coordinates
//!
//! Screen (pixel) space is where a renderer lives. See [crate::Layout] for how
//! the two spaces are mapped onto each other. Screen space uses the usual
//! raster convention: `+x` is right and `+y` is **down**.
//!
//! ## Directions
//!
//! The six [Direction]s are enumerated in the same rotational order as the six
//! corners of a cell, so walking the directions in order walks the sides of
//! the hexagon in order. See [crate::Layout::side] for which corners bound the
//! side facing each direction.

mod data_structure;
mod unit;

pub use self::{data_structure::*, unit::*};
