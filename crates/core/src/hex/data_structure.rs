//! Collections of hexes, and functions that enumerate common grid shapes.

use crate::{
    hex::{Direction, FractionalHex, Hex},
    util::grid_len,
};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::{
    cmp,
    collections::{HashMap, HashSet},
};

/// A set of hexes. Membership is by value, so any two hexes with the same
/// coordinates are interchangeable.
pub type HexSet = HashSet<Hex, FnvBuildHasher>;
/// A map of hexes to some `T`
pub type HexMap<T> = HashMap<Hex, T, FnvBuildHasher>;
/// An ORDERED map of hexes to some `T`. This has some extra memory overhead,
/// so we should only use it when we actually need the ordering.
pub type HexIndexMap<T> = IndexMap<Hex, T, FnvBuildHasher>;

/// Get every hex within `radius` steps of `center`, i.e. a larger hexagon made
/// up of cells. Radius 0 is just the center, 1 is 7 cells, 2 is 19, etc.
///
/// Hexes are returned row by row: ascending `r`, then ascending `q` within
/// each row.
pub fn hexagon(center: Hex, radius: u16) -> Vec<Hex> {
    let r = i32::from(radius);
    let mut hexes = Vec::with_capacity(grid_len(radius));
    for dr in -r..=r {
        // If we just did [-r,r] for q as well, we'd end up with a rhombus
        // instead of a hexagon
        // https://www.redblobgames.com/grids/hexagons/#range
        let dq_min = cmp::max(-r, -dr - r);
        let dq_max = cmp::min(r, -dr + r);
        for dq in dq_min..=dq_max {
            hexes.push(center + Hex::new_qr(dq, dr));
        }
    }
    debug_assert_eq!(hexes.len(), grid_len(radius), "expected 3r²+3r+1 hexes");
    hexes
}

/// Get every hex exactly `radius` steps from `center`. Radius 0 gives just the
/// center, otherwise there are `6 * radius` hexes. The ring is walked in
/// direction order, starting from the [Direction::NorthEast] corner.
pub fn ring(center: Hex, radius: u16) -> Vec<Hex> {
    if radius == 0 {
        return vec![center];
    }

    let mut hexes = Vec::with_capacity(6 * radius as usize);
    // Walking side `i` of the ring uses direction `i`, and starts at the ring
    // corner that lies in direction `i + 4`
    let mut hex = center + Direction::NorthEast.to_vector() * i32::from(radius);
    for direction in Direction::ALL {
        for _ in 0..radius {
            hexes.push(hex);
            hex = hex.neighbor(direction);
        }
    }
    debug_assert_eq!(hex, hexes[0], "ring walk should end where it started");
    hexes
}

/// Get the cells of a rectangular map with the given number of columns and
/// rows, centered on the origin. This is the layout that map files use:
/// rows are stacked along `r`, and every other row is shifted half a cell so
/// the columns line up vertically in a pointy-topped layout.
///
/// Rows span `r` in `[floor(-rows/2), floor(rows/2))`. Hexes are returned row
/// by row, left to right, so the index of a hex in the output is
/// `row * columns + column`.
pub fn rectangle(columns: u16, rows: u16) -> Vec<Hex> {
    let mut hexes = Vec::with_capacity(columns as usize * rows as usize);
    if columns == 0 {
        return hexes;
    }

    let r_min = (-i32::from(rows)).div_euclid(2);
    let r_max = i32::from(rows).div_euclid(2);
    // The rightmost column sits at `floor(last_column / 2)` before shifting
    let q_start = (-(i32::from(columns) - 1)).div_euclid(2);
    for r in r_min..r_max {
        let r_offset = (r + 1).div_euclid(2);
        let q_min = q_start - r_offset;
        for q in q_min..q_min + i32::from(columns) {
            hexes.push(Hex::new_qr(q, r));
        }
    }
    debug_assert_eq!(hexes.len(), columns as usize * rows as usize);
    hexes
}

/// Get the hexes along a straight line from `from` to `to`, inclusive on both
/// ends. The line will always contain `distance + 1` hexes, and each hex is
/// adjacent to the previous one.
pub fn line(from: Hex, to: Hex) -> Vec<Hex> {
    let distance = from.distance_to(to);
    if distance == 0 {
        return vec![from];
    }

    // Nudge both endpoints off the plane a hair so that samples landing
    // exactly on a cell boundary always round the same way
    // https://www.redblobgames.com/grids/hexagons/#line-drawing
    let nudge = |hex: Hex| {
        let hex = FractionalHex::from(hex);
        FractionalHex::new(hex.q + 1e-6, hex.r + 1e-6, hex.s - 2e-6)
    };
    let start = nudge(from);
    let end = nudge(to);
    (0..=distance)
        .map(|step| {
            start
                .lerp(end, step as f64 / distance as f64)
                .round_finite()
        })
        .collect()
}
