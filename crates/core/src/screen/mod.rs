//! Mapping between hex space and screen (pixel) space.
//!
//! Screen space is what a renderer draws into: `+x` is right, `+y` is down,
//! and units are pixels. Where a hex ends up on screen depends on three
//! things, bundled together in a [Layout]:
//!
//! - The [Orientation] of the tiling. Pointy-topped cells line up in
//!   horizontal rows, flat-topped cells line up in vertical columns.
//! - The size of a cell, i.e. the distance from its center to its corners
//!   along each screen axis. The two may differ to squash the grid.
//! - The origin: the screen position of the center of [Hex::ORIGIN]. Moving
//!   the origin pans the whole grid.
//!
//! The math follows <https://www.redblobgames.com/grids/hexagons/implementation.html#layout>.

mod unit;

pub use self::unit::*;

use crate::hex::{Direction, FractionalHex, Hex};
use anyhow::{bail, Context};
use log::debug;
use nalgebra::{Matrix2, Vector2};
use std::{array, f64::consts::PI};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A hex tiling convention. Contains the forward matrix (`f0..f3`) that maps
/// axial coordinates onto screen axes, its inverse (`b0..b3`), and the angle
/// of the first corner.
///
/// There are only two tilings, so there's no public way to build one of
/// these. Use [POINTY_TOP] or [FLAT_TOP].
#[derive(Clone, Debug, PartialEq)]
pub struct Orientation {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    /// Angle of corner 0, in sixths of a turn
    pub start_angle: f64,
    /// Index of the corner that begins the side facing
    /// [Direction::SouthEast]. Sides follow the same rotation as corners, so
    /// the side facing direction `d` runs from corner `d + offset` to the
    /// corner after it.
    side_corner_offset: usize,
}

/// Cells with a corner at the top, lined up in horizontal rows
pub static POINTY_TOP: Orientation = Orientation {
    f0: SQRT_3,
    f1: SQRT_3 / 2.0,
    f2: 0.0,
    f3: 3.0 / 2.0,
    b0: SQRT_3 / 3.0,
    b1: -1.0 / 3.0,
    b2: 0.0,
    b3: 2.0 / 3.0,
    start_angle: 0.5,
    side_corner_offset: 0,
};

/// Cells with a flat side at the top, lined up in vertical columns
pub static FLAT_TOP: Orientation = Orientation {
    f0: 3.0 / 2.0,
    f1: 0.0,
    f2: SQRT_3 / 2.0,
    f3: SQRT_3,
    b0: 2.0 / 3.0,
    b1: 0.0,
    b2: -1.0 / 3.0,
    b3: SQRT_3 / 3.0,
    start_angle: 0.0,
    side_corner_offset: 1,
};

impl Orientation {
    fn forward(&self) -> Matrix2<f64> {
        Matrix2::new(self.f0, self.f1, self.f2, self.f3)
    }

    fn backward(&self) -> Matrix2<f64> {
        Matrix2::new(self.b0, self.b1, self.b2, self.b3)
    }

    /// Offset of corner `corner` from a cell's center, for cells of the given
    /// size
    fn corner_offset(&self, size: Vector, corner: usize) -> Vector {
        let angle = 2.0 * PI * (self.start_angle + corner as f64) / 6.0;
        Vector::new(size.x * angle.cos(), size.y * angle.sin())
    }
}

/// A concrete mapping from hex space to screen space. See the module-level
/// docs for what goes into a layout.
///
/// Everything derived from the orientation and size (the transform matrices
/// and the corner offsets) is computed once, up front. The origin is the
/// only thing that can change afterwards, so panning is just an assignment.
#[derive(Clone, Debug)]
pub struct Layout {
    orientation: &'static Orientation,
    size: Vector,
    origin: Point,
    forward: Matrix2<f64>,
    backward: Matrix2<f64>,
    corner_offsets: [Vector; 6],
}

impl Layout {
    /// Build a new layout. Returns an error if either size component isn't a
    /// positive finite number (conversions divide by it), or if the origin
    /// isn't finite.
    pub fn new(
        orientation: &'static Orientation,
        size: Vector,
        origin: Point,
    ) -> anyhow::Result<Self> {
        if !(size.x.is_finite() && size.y.is_finite())
            || size.x <= 0.0
            || size.y <= 0.0
        {
            bail!("Hex size must be positive and finite, but was {}", size);
        }
        if !origin.is_finite() {
            bail!("Layout origin must be finite, but was {}", origin);
        }

        let corner_offsets =
            array::from_fn(|corner| orientation.corner_offset(size, corner));
        debug!(
            "Built layout with size {} and corner offsets {:?}",
            size, corner_offsets
        );

        Ok(Self {
            orientation,
            size,
            origin,
            forward: orientation.forward(),
            backward: orientation.backward(),
            corner_offsets,
        })
    }

    pub fn orientation(&self) -> &'static Orientation {
        self.orientation
    }

    pub fn size(&self) -> Vector {
        self.size
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Move the grid so that [Hex::ORIGIN] is centered on the given point.
    /// Nothing else about the layout changes. The origin must stay finite,
    /// the same as in [Self::new].
    pub fn set_origin(&mut self, origin: Point) {
        debug_assert!(origin.is_finite(), "non-finite origin {}", origin);
        self.origin = origin;
    }

    /// Shift the whole grid by some offset. The resulting origin must stay
    /// finite.
    pub fn pan(&mut self, offset: Vector) {
        self.set_origin(self.origin + offset);
    }

    /// Offsets from a cell's center to each of its six corners, in corner
    /// order
    pub fn corner_offsets(&self) -> &[Vector; 6] {
        &self.corner_offsets
    }

    /// Get the screen position of a cell's center
    pub fn hex_to_pixel(&self, hex: Hex) -> Point {
        let axial = Vector2::new(hex.q() as f64, hex.r() as f64);
        let unscaled = self.forward * axial;
        Point::new(
            unscaled.x * self.size.x + self.origin.x,
            unscaled.y * self.size.y + self.origin.y,
        )
    }

    /// Convert a screen position into (fractional) hex space, without
    /// snapping it to a cell
    pub fn pixel_to_fractional(&self, point: Point) -> FractionalHex {
        let local = point - self.origin;
        let normalized =
            Vector2::new(local.x / self.size.x, local.y / self.size.y);
        let axial = self.backward * normalized;
        FractionalHex::from_axial(axial.x, axial.y)
    }

    /// Get the cell that contains a screen position. Returns an error only if
    /// the point isn't finite.
    pub fn pixel_to_hex(&self, point: Point) -> anyhow::Result<Hex> {
        self.pixel_to_fractional(point)
            .round()
            .with_context(|| format!("Cannot locate pixel {}", point))
    }

    /// Get the screen positions of a cell's six corners, in corner order.
    /// Corners go around the cell in the same rotation as [Direction]s.
    pub fn corners(&self, hex: Hex) -> [Point; 6] {
        let center = self.hex_to_pixel(hex);
        self.corner_offsets.map(|offset| center + offset)
    }

    /// Get the two corners that bound the side of a cell facing the given
    /// direction. This is also the edge shared with that neighbor.
    pub fn side(&self, hex: Hex, direction: Direction) -> [Point; 2] {
        let corners = self.corners(hex);
        let first =
            (direction.index() + self.orientation.side_corner_offset) % 6;
        [corners[first], corners[(first + 1) % 6]]
    }
}
